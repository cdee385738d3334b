//! Access helpers for raw frontmatter mappings.

use libs::serde_yaml::{Mapping, Value};

pub fn field<'a>(data: &'a Mapping, name: &str) -> Option<&'a Value> {
    data.get(&Value::String(name.to_string()))
}

pub fn field_str<'a>(data: &'a Mapping, name: &str) -> Option<&'a str> {
    field(data, name).and_then(Value::as_str)
}

/// A field counts as missing when it is absent, null or an empty string.
pub fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        _ => false,
    }
}

pub fn set_field(data: &mut Mapping, name: &str, value: Value) {
    data.insert(Value::String(name.to_string()), value);
}

/// Inserts `value` unless the field already carries one.
pub fn set_default(data: &mut Mapping, name: &str, value: Value) {
    if is_missing(field(data, name)) {
        set_field(data, name, value);
    }
}

/// Rewrites a numeric scalar as its string rendering. Authors write bare
/// years (`date: 2024`); the typed frontmatter wants strings.
pub fn coerce_to_string(data: &mut Mapping, name: &str) {
    let key = Value::String(name.to_string());
    let rendered = match data.get(&key) {
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    };
    if let Some(rendered) = rendered {
        data.insert(key, Value::String(rendered));
    }
}

/// Removes a field whose value does not satisfy `keep`. Validation has already
/// recorded the problem; parsing continues without the field.
pub fn retain_valid(data: &mut Mapping, name: &str, keep: fn(&Value) -> bool) {
    let key = Value::String(name.to_string());
    let drop = matches!(data.get(&key), Some(value) if !matches!(value, Value::Null) && !keep(value));
    if drop {
        data.remove(&key);
    }
}
