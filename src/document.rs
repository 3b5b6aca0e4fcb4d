//! Helpers for reading loosely shaped JSON documents returned by the API.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes `null` as the type's default, so a field the API sends as
/// `null` behaves like a missing one.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserializes a list entry by entry, dropping entries that do not fit
/// `T`. A missing, `null` or non-array value yields an empty list.
pub fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(match raw {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// Whether `path` is a usable dot-notation path such as `sku.id`.
///
/// The path is trimmed first; it must not be empty, start or end with a
/// dot, or contain blank segments or segments with surrounding whitespace.
pub fn is_valid_path(path: &str) -> bool {
    let p = path.trim();
    if p.is_empty() || p.starts_with('.') || p.ends_with('.') {
        return false;
    }
    p.split('.')
        .all(|seg| !seg.trim().is_empty() && seg == seg.trim())
}

/// Resolves a dot-notation path against `root`.
///
/// Object segments are looked up by key and numeric segments index into
/// arrays. Returns `None` when the path cannot be followed or lands on
/// `null`.
pub fn get_by_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let path = path.trim();
    if path.is_empty() {
        return None;
    }
    let mut current = root;
    for key in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(key)?,
            Value::Array(items) => items.get(key.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    if current.is_null() { None } else { Some(current) }
}

/// Renders a JSON scalar as a string. Nulls, arrays and objects yield `None`.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// JavaScript-style truthiness for scalar JSON values.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
