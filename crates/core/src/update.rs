//! Decoding of raw input chunks into state updates.

use serde_json::{Map, Value};

use crate::error::{UpdateError, UpdateResult};

/// The top-level key/value pairs of one progress update.
///
/// Values are kept exactly as received; interpretation happens when the
/// update is merged into a `ProgressState`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StateUpdate {
    fields: Map<String, Value>,
}

impl StateUpdate {
    /// Parse one input chunk.
    ///
    /// Surrounding whitespace is ignored. The remainder must be exactly one
    /// JSON object; two objects written back to back are rejected as a whole.
    ///
    /// # Errors
    ///
    /// - `UpdateError::Malformed` if the chunk is not JSON
    /// - `UpdateError::NotAnObject` if it is JSON of another kind
    pub fn parse(chunk: &str) -> UpdateResult<Self> {
        let value: Value = serde_json::from_str(chunk.trim())?;
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(UpdateError::NotAnObject {
                kind: json_kind(&other),
            }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Map<String, Value>> for StateUpdate {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Name of a JSON value's kind, for error messages.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
