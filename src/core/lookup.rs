//! Field probing over loosely-shaped JSON objects.
//!
//! API payloads name the same logical field in several ways. Callers pass an
//! ordered list of alternatives; the first present, non-empty value wins.

use serde_json::Value;

/// Nested keys tried, in order, when a text field arrives as an object.
const LABEL_KEYS: &[&str] = &["name", "title", "label", "value"];

/// Whether a value counts as absent (`null` or a blank string).
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// First present, non-blank value among `keys`.
pub fn pick_first<'a>(obj: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let map = obj.as_object()?;
    keys.iter()
        .filter_map(|key| map.get(*key))
        .find(|value| !is_blank(value))
}

/// First value among `keys` that reads as text.
///
/// Objects resolve through their `name`, `title`, `label` or `value` field,
/// arrays through their first element. Values that do not resolve are
/// skipped so the next alternative gets its turn.
pub fn pick_text(obj: &Value, keys: &[&str]) -> Option<String> {
    let map = obj.as_object()?;
    keys.iter()
        .filter_map(|key| map.get(*key))
        .find_map(value_text)
}

/// Text form of a single value, if it has one.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Object(_) => LABEL_KEYS
            .iter()
            .filter_map(|key| value.get(*key))
            .find_map(value_text),
        Value::Array(items) => items.first().and_then(value_text),
    }
}
