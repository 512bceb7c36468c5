//! Response validation
//!
//! The status client hands back the body as raw JSON. These helpers check
//! the shape the notifier depends on before anything is translated.

use serde_json::Value;

use crate::error::{Result, ValidationError};

/// Key holding the list of homework records
const HOMEWORKS_KEY: &str = "homeworks";

/// Key holding the server-side timestamp to poll from next time
const CURRENT_DATE_KEY: &str = "current_date";

/// Extracts the homework list from a status response
///
/// The list is returned as-is and may be empty; deciding what an empty
/// list means is up to the caller.
pub fn extract_homeworks(response: &Value) -> Result<&[Value]> {
    let map = response
        .as_object()
        .ok_or_else(|| ValidationError::UnexpectedType {
            expected: "object",
            found: json_type(response),
        })?;

    let homeworks = map
        .get(HOMEWORKS_KEY)
        .ok_or_else(|| ValidationError::MissingKey {
            key: HOMEWORKS_KEY,
            response: response.to_string(),
        })?;

    homeworks
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| ValidationError::UnexpectedType {
            expected: "array",
            found: json_type(homeworks),
        })
}

/// Reads the server-reported current date, if present and an integer
pub fn current_date(response: &Value) -> Option<i64> {
    response.get(CURRENT_DATE_KEY).and_then(Value::as_i64)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
