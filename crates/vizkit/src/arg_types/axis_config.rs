use super::{
    read_argument,
    view::{SelectControl, SelectOption, Selection},
    write_argument, ArgEditor, Bound, TypeInstance, View,
};
use crate::{ArgValue, Ast, Result};

const DISABLED_CLASS: &str = "canvas__argtype--axis_config--disabled";
const DISABLED_MESSAGE: &str = "The axis is disabled";
const CONFIGURE_CLASS: &str = "canvas__argtype--axis_config--configure";

/// Which axis an [`AxisConfig`] edits. Decides the valid positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn from_name(name: &str) -> Option<Axis> {
        match name {
            "xaxis" => Some(Axis::X),
            "yaxis" => Some(Axis::Y),
            _ => None,
        }
    }

    /// Valid positions, default first.
    pub const fn positions(self) -> &'static [&'static str] {
        match self {
            Axis::X => &["bottom", "top"],
            Axis::Y => &["left", "right"],
        }
    }

    pub const fn default_position(self) -> &'static str {
        self.positions()[0]
    }

    pub fn is_position(self, position: &str) -> bool {
        self.positions().contains(&position)
    }
}

/// Edits the `position` of an `axisConfig` expression.
///
/// The bound value is either `false` (axis hidden) or an `axisConfig`
/// expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisConfig {
    axis: Axis,
}

impl AxisConfig {
    pub const DISPLAY_NAME: &'static str = "AxisConfigExtendedInput";

    const POSITION: &'static str = "position";

    pub fn new(axis: Axis) -> Self {
        Self { axis }
    }

    pub fn from_type_instance(instance: &TypeInstance) -> Result<Self> {
        let axis = Axis::from_name(&instance.name).ok_or_else(|| {
            crate::Error::invalid_type_instance(format!(
                "axis config bound to `{}`; expected `xaxis` or `yaxis`",
                instance.name
            ))
        })?;
        Ok(Self::new(axis))
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The expression written when a hidden axis is first configured.
    pub fn default_expression() -> Ast {
        Ast::function("axisConfig")
    }

    /// The current position, or `None` if the axis is disabled.
    ///
    /// A stored position that is not valid for the axis reads as the default.
    pub fn position(&self, value: &ArgValue) -> Option<String> {
        let bound = Bound::new(value, Self::default_expression);
        if bound.is_disabled() {
            return None;
        }

        let default = self.axis.default_position();
        let position = read_argument(&bound, Self::POSITION, default);
        let position = match position.to_identifier() {
            Some(id) if self.axis.is_position(&id) => id.into_owned(),
            _ => default.to_string(),
        };
        Some(position)
    }
}

impl ArgEditor for AxisConfig {
    fn render(&self, value: &ArgValue) -> View {
        let Some(position) = self.position(value) else {
            return View::Disabled {
                class_name: DISABLED_CLASS,
                message: DISABLED_MESSAGE,
            };
        };

        let options = self
            .axis
            .positions()
            .iter()
            .map(|position| SelectOption::choice(*position, *position))
            .collect();

        View::Configure {
            class_name: CONFIGURE_CLASS,
            control: SelectControl {
                class_name: Some(Self::POSITION),
                label: Some("Position"),
                selected: Selection::Value(position),
                options,
            },
        }
    }

    fn change(&self, value: &ArgValue, input: &str) -> Option<ArgValue> {
        let axis = self.axis;
        if !axis.is_position(input) {
            return None;
        }

        let bound = Bound::new(value, Self::default_expression);
        let next = write_argument(&bound, Self::POSITION, input, Self::default_expression);
        log::debug!("axis position changed; axis={axis:?} position={input}");
        Some(ArgValue::Ast(next))
    }
}
