use super::{
    view::{SelectControl, SelectOption, Selection},
    ArgEditor, TypeInstance, View,
};
use crate::{ArgValue, Choice, Result};

use std::collections::HashSet;

const PLACEHOLDER_LABEL: &str = "select";

/// Picks one entry from a fixed list of choices.
///
/// The bound value is a choice identifier, either bare or as a
/// `{name, value}` pair. Changes emit the bare identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    choices: Vec<Choice>,
}

impl Select {
    pub fn new(choices: Vec<Choice>) -> Result<Self> {
        let duplicate = {
            let mut seen = HashSet::new();
            choices
                .iter()
                .find(|c| !seen.insert(c.value.as_str()))
                .map(|c| c.value.clone())
        };

        if let Some(value) = duplicate {
            let message = format!("duplicate choice value `{value}`");
            return Err(crate::Error::invalid_type_instance(message));
        }

        Ok(Self { choices })
    }

    pub fn from_type_instance(instance: &TypeInstance) -> Result<Self> {
        let Some(choices) = &instance.options.choices else {
            let message = format!("select bound to `{}` has no choices", instance.name);
            return Err(crate::Error::invalid_type_instance(message));
        };
        Self::new(choices.clone())
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// The choice matching `value`, or the placeholder if none does.
    pub fn selection(&self, value: &ArgValue) -> Selection {
        let Some(id) = value.to_identifier() else {
            return Selection::Placeholder;
        };

        match self.choice(&id) {
            Some(choice) => Selection::Value(choice.value.clone()),
            None => Selection::Placeholder,
        }
    }

    fn choice(&self, value: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.value == value)
    }
}

impl ArgEditor for Select {
    fn render(&self, value: &ArgValue) -> View {
        let placeholder = SelectOption::Placeholder {
            label: PLACEHOLDER_LABEL,
        };
        let choices = self
            .choices
            .iter()
            .map(|c| SelectOption::choice(&c.value, &c.name));
        let options = std::iter::once(placeholder).chain(choices).collect();

        View::Select(SelectControl {
            class_name: None,
            label: None,
            selected: self.selection(value),
            options,
        })
    }

    fn change(&self, _value: &ArgValue, input: &str) -> Option<ArgValue> {
        let choice = self.choice(input)?;
        log::debug!("select changed; value={}", choice.value);
        Some(ArgValue::String(choice.value.clone()))
    }
}
