use serde_json::Value;

/// Whether a JSON value counts as present for input checks.
///
/// `null`, `false`, numeric zero and the empty string are falsy. Everything
/// else is truthy, including empty arrays, empty objects and the string `"0"`.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Looks up `field` on a JSON object and checks that it is truthy.
///
/// Non-object values never carry fields.
pub fn has_truthy_field(body: &Value, field: &str) -> bool {
    body.get(field).is_some_and(is_truthy)
}
