use serde_json::{json, Map, Value};

/// Converts a JSON object literal into a settings map for test input.
///
/// # Panics
/// - If the literal is not a JSON object
fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected JSON object literal, got: {:?}", other),
    }
}

mod schema;
mod store;
