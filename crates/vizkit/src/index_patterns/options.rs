use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Arguments of [`get_fields_for_time_pattern`].
///
/// [`get_fields_for_time_pattern`]: super::IndexPatternsApiClient::get_fields_for_time_pattern
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldsForTimePattern {
    pub pattern: String,

    /// Number of most recent indices to inspect
    #[serde(default)]
    pub look_back: Option<u32>,

    #[serde(default)]
    pub meta_fields: Option<Vec<String>>,
}

impl FieldsForTimePattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            ..Default::default()
        }
    }

    pub fn look_back(mut self, look_back: u32) -> Self {
        self.look_back = Some(look_back);
        self
    }

    pub fn meta_fields<I, S>(mut self, meta_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.meta_fields = Some(meta_fields.into_iter().map(Into::into).collect());
        self
    }
}

/// Arguments of [`get_fields_for_wildcard`].
///
/// [`get_fields_for_wildcard`]: super::IndexPatternsApiClient::get_fields_for_wildcard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldsForWildcard {
    pub pattern: String,

    #[serde(default)]
    pub meta_fields: Option<Vec<String>>,

    /// Index pattern type, e.g. `rollup`. When set, the fields are passed
    /// through the type-specific endpoint.
    #[serde(default, rename = "type")]
    pub type_name: Option<String>,

    /// Type-specific parameters, sent as JSON text
    #[serde(default)]
    pub params: Option<Map<String, Value>>,
}

impl FieldsForWildcard {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            ..Default::default()
        }
    }

    pub fn meta_fields<I, S>(mut self, meta_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.meta_fields = Some(meta_fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn params(mut self, params: Map<String, Value>) -> Self {
        self.params = Some(params);
        self
    }

    /// The type to route through, ignoring an empty name.
    pub(crate) fn type_segment(&self) -> Option<&str> {
        self.type_name.as_deref().filter(|name| !name.is_empty())
    }
}
