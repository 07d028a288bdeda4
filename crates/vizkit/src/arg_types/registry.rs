use super::{ArgEditor, AxisConfig, Select, TypeInstance};
use crate::Result;

use indexmap::IndexMap;

/// How an argument type is presented in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// A single inline control.
    Simple,

    /// A control shown in the expanded argument panel.
    Extended,
}

/// A named argument type and the editor it builds.
#[derive(Debug, Clone)]
pub struct ArgTypeDef {
    pub name: &'static str,
    pub display_name: &'static str,
    pub help: &'static str,
    pub template: Template,
    build: fn(&TypeInstance) -> Result<Box<dyn ArgEditor>>,
}

impl ArgTypeDef {
    pub fn new(
        name: &'static str,
        display_name: &'static str,
        help: &'static str,
        template: Template,
        build: fn(&TypeInstance) -> Result<Box<dyn ArgEditor>>,
    ) -> Self {
        Self {
            name,
            display_name,
            help,
            template,
            build,
        }
    }

    /// Builds the editor for an argument described by `instance`.
    pub fn editor(&self, instance: &TypeInstance) -> Result<Box<dyn ArgEditor>> {
        (self.build)(instance)
    }

    pub fn select() -> Self {
        Self::new(
            "select",
            "Select",
            "Select from multiple options in a drop down",
            Template::Simple,
            build_select,
        )
    }

    pub fn axis_config() -> Self {
        Self::new(
            "axis_config",
            "Axis Config",
            "Visualization axis configuration",
            Template::Extended,
            build_axis_config,
        )
    }
}

fn build_select(instance: &TypeInstance) -> Result<Box<dyn ArgEditor>> {
    Ok(Box::new(Select::from_type_instance(instance)?))
}

fn build_axis_config(instance: &TypeInstance) -> Result<Box<dyn ArgEditor>> {
    Ok(Box::new(AxisConfig::from_type_instance(instance)?))
}

/// Argument types by name.
#[derive(Debug, Clone)]
pub struct ArgTypeRegistry {
    defs: IndexMap<&'static str, ArgTypeDef>,
}

impl ArgTypeRegistry {
    /// A registry with no argument types.
    pub fn empty() -> Self {
        Self {
            defs: IndexMap::new(),
        }
    }

    /// Adds `def`, replacing any type registered under the same name.
    pub fn register(&mut self, def: ArgTypeDef) -> &mut Self {
        self.defs.insert(def.name, def);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ArgTypeDef> {
        self.defs.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArgTypeDef> {
        self.defs.values()
    }

    /// Builds the editor of type `arg_type` for the argument `instance`.
    pub fn editor(&self, arg_type: &str, instance: &TypeInstance) -> Result<Box<dyn ArgEditor>> {
        let Some(def) = self.get(arg_type) else {
            vizkit_core::bail!("unknown argument type; arg_type={arg_type}");
        };
        def.editor(instance)
    }
}

impl Default for ArgTypeRegistry {
    /// A registry holding the built-in argument types.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .register(ArgTypeDef::axis_config())
            .register(ArgTypeDef::select());
        registry
    }
}
