use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Placeholder rendered for parameters a record does not carry.
pub const MISSING_VALUE: &str = "N/A";

/// Free-form generation parameters as recorded by the generator.
///
/// Key order is preserved so that a loaded document serializes back the way it
/// was read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Scalar value as text; `None` for missing, null, arrays and objects.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(value) => Some(value.clone()),
            Value::Number(value) => Some(value.to_string()),
            Value::Bool(value) => Some(value.to_string()),
            _ => None,
        }
    }

    /// Single-line rendering of a parameter, [`MISSING_VALUE`] when absent.
    pub fn display(&self, key: &str) -> String {
        let rendered = match self.0.get(key) {
            None | Some(Value::Null) => return MISSING_VALUE.to_string(),
            Some(Value::String(value)) => value.clone(),
            Some(other) => other.to_string(),
        };
        rendered.replace(['\r', '\n'], " ")
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
