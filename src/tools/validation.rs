//! Validate action arguments against their JSON Schema before dispatch.

/// Validate arguments against a JSON Schema.
///
/// Top-level only: object shape, required field presence, and property
/// types. A `"string"` property also accepts numbers, which handlers
/// stringify. Returns the first violation found.
pub fn validate_arguments(
    args: &serde_json::Value,
    schema: &serde_json::Value,
) -> Result<(), String> {
    if let Some(schema_type) = schema.get("type").and_then(|v| v.as_str()) {
        if schema_type == "object" && !args.is_object() {
            return Err(format!(
                "expected object arguments, got {}",
                json_type_name(args)
            ));
        }
    }

    let Some(obj) = args.as_object() else {
        return Ok(());
    };

    if let Some(required) = schema.get("required").and_then(|v| v.as_array()) {
        for name in required.iter().filter_map(|f| f.as_str()) {
            match obj.get(name) {
                None | Some(serde_json::Value::Null) => {
                    return Err(format!("missing required field '{name}'"));
                }
                Some(serde_json::Value::String(s)) if s.trim().is_empty() => {
                    return Err(format!("required field '{name}' is empty"));
                }
                _ => {}
            }
        }
    }

    if let Some(properties) = schema.get("properties").and_then(|v| v.as_object()) {
        for (key, value) in obj {
            let expected = properties
                .get(key)
                .and_then(|p| p.get("type"))
                .and_then(|t| t.as_str());
            if let Some(expected) = expected {
                if !value.is_null() && !value_matches_type(value, expected) {
                    return Err(format!(
                        "field '{}' expected type '{}', got {}",
                        key,
                        expected,
                        json_type_name(value)
                    ));
                }
            }
        }
    }

    Ok(())
}

fn value_matches_type(value: &serde_json::Value, expected: &str) -> bool {
    match expected {
        "string" => value.is_string() || value.is_number(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "boolean" => value.is_boolean(),
        "object" => value.is_object(),
        "array" => value.is_array(),
        _ => true,
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
