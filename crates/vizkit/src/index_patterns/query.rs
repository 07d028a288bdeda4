use serde_json::Value;

/// Query parameters for one request, in insertion order.
///
/// Null values are dropped when the URL is built. Arrays and objects are sent
/// as JSON text, strings as they are, numbers and booleans in their JSON form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    params: Vec<(&'static str, Value)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, key: &'static str, value: impl Into<Value>) -> Self {
        self.params.push((key, value.into()));
        self
    }

    /// The parameters that end up in the URL, already encoded as text.
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, String)> + '_ {
        self.params.iter().filter_map(|(key, value)| {
            let text = match value {
                Value::Null => return None,
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            Some((*key, text))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.pairs().next().is_none()
    }
}
