//! Object-key transformations over JSON objects.

use serde_json::{Map, Value};

use crate::errors::{SeqError, SeqResult};

/// Returns the object's property names upper-cased, in the map's iteration order.
pub fn upper_keys(object: &Map<String, Value>) -> Vec<String> {
    object.keys().map(|key| key.to_uppercase()).collect()
}

/// Same as [`upper_keys`], but accepts any JSON value and rejects non-objects.
///
/// ```
/// use serde_json::json;
/// use seqkit::upper_props;
///
/// assert_eq!(upper_props(&json!({ "a": 1, "b": 2 })).unwrap(), vec!["A", "B"]);
/// assert!(upper_props(&json!([1, 2])).is_err());
/// ```
pub fn upper_props(value: &Value) -> SeqResult<Vec<String>> {
    match value {
        Value::Object(object) => Ok(upper_keys(object)),
        other => Err(SeqError::type_mismatch(
            "object",
            json_type_name(other),
            Some("only JSON objects have property names".to_string()),
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
