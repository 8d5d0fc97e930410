//! Explicit field extraction over untyped JSON payloads.

use serde_json::Value;

use crate::error::BotError;

fn missing(pointer: &str, expected: &str) -> BotError {
    BotError::Normalization(format!("missing {expected} at '{pointer}'"))
}

/// Number at a JSON pointer (e.g. `/main/temp`); integers are widened.
pub fn required_f64(raw: &Value, pointer: &str) -> Result<f64, BotError> {
    raw.pointer(pointer)
        .and_then(Value::as_f64)
        .ok_or_else(|| missing(pointer, "number"))
}

/// Whole seconds at a JSON pointer; fractional values are truncated.
pub fn required_epoch(raw: &Value, pointer: &str) -> Result<i64, BotError> {
    let value = raw.pointer(pointer).ok_or_else(|| missing(pointer, "timestamp"))?;
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f as i64))
        .ok_or_else(|| missing(pointer, "timestamp"))
}

pub fn required_str<'a>(raw: &'a Value, pointer: &str) -> Result<&'a str, BotError> {
    raw.pointer(pointer)
        .and_then(Value::as_str)
        .ok_or_else(|| missing(pointer, "string"))
}

pub fn optional_f64(raw: &Value, pointer: &str, default: f64) -> f64 {
    raw.pointer(pointer).and_then(Value::as_f64).unwrap_or(default)
}

pub fn optional_i64(raw: &Value, pointer: &str) -> Option<i64> {
    raw.pointer(pointer).and_then(Value::as_i64)
}

pub fn optional_str<'a>(raw: &'a Value, pointer: &str, default: &'a str) -> &'a str {
    raw.pointer(pointer).and_then(Value::as_str).unwrap_or(default)
}
