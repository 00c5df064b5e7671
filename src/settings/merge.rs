//! Pure deep merge for settings maps.

use serde_json::{Map, Value};

/// Deep-merges a changes overlay into a base settings map.
///
/// Keys present only in `base` are kept; keys present in `changes` override.
/// When both sides hold objects the merge recurses. Arrays are never merged
/// element-wise: the changes side replaces the base array wholesale, so
/// list-type settings (role lists, channel lists) are always edited as
/// complete replacements. Any other type collision is an opaque replacement.
///
/// Neither input is mutated; the result is a fresh map.
///
/// # Arguments
/// - `base` - Last-known-good settings (may be empty)
/// - `changes` - Partial overlay, or `None` for a no-op
///
/// # Returns
/// - `Map<String, Value>` - The merged settings
pub fn merge(base: &Map<String, Value>, changes: Option<&Map<String, Value>>) -> Map<String, Value> {
    let Some(changes) = changes else {
        return base.clone();
    };

    let mut merged = base.clone();

    for (key, incoming) in changes {
        let entry = match merged.get(key) {
            Some(existing) => merge_value(existing, incoming),
            None => incoming.clone(),
        };
        merged.insert(key.clone(), entry);
    }

    merged
}

/// Merges a single value pair, recursing only for object/object collisions.
fn merge_value(existing: &Value, incoming: &Value) -> Value {
    match (existing, incoming) {
        (Value::Object(base), Value::Object(overlay)) => Value::Object(merge(base, Some(overlay))),
        // Arrays (and everything else) replace rather than combine.
        _ => incoming.clone(),
    }
}
