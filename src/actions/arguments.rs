//! Typed access to action call arguments.

use serde_json::Value;

use crate::error::BotError;

/// Wrapper around an action's argument bag.
///
/// Planners send either a JSON object or a JSON-encoded string of one;
/// both are accepted, and an absent or empty bag is `{}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionArguments {
    value: Value,
}

impl ActionArguments {
    pub fn new(value: Value) -> Self {
        let value = match value {
            Value::Null => Value::Object(Default::default()),
            Value::String(raw) if raw.trim().is_empty() => Value::Object(Default::default()),
            Value::String(raw) => serde_json::from_str(raw.trim()).unwrap_or(Value::String(raw)),
            other => other,
        };
        Self { value }
    }

    /// Get the raw JSON value.
    pub fn raw(&self) -> &Value {
        &self.value
    }

    /// Get an optional scalar argument as text; numbers are stringified.
    pub fn get_text_opt(&self, key: &str) -> Option<String> {
        match self.value.get(key)? {
            Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Get a required scalar argument as text.
    pub fn get_text(&self, key: &str) -> Result<String, BotError> {
        self.get_text_opt(key)
            .ok_or_else(|| BotError::InvalidArgument(format!("missing argument '{key}'")))
    }
}

impl Default for ActionArguments {
    fn default() -> Self {
        Self::new(Value::Null)
    }
}
