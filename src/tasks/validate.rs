//! Presence and range checks for task inputs.

use serde_json::Value;

use crate::error::ValidationError;
use crate::rest::MAX_LIMIT;

/// Returns the trimmed value, or `MissingField` when it is blank.
pub(crate) fn required_text<'a>(
    value: &'a str,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(value)
}

/// Returns the payload object.
///
/// An absent or `null` payload is `MissingField`; any other non-object
/// value is `InvalidPayload`.
pub(crate) fn required_payload<'a>(
    value: Option<&'a Value>,
    field: &'static str,
) -> Result<&'a Value, ValidationError> {
    match value {
        None | Some(Value::Null) => Err(ValidationError::MissingField { field }),
        Some(payload @ Value::Object(_)) => Ok(payload),
        Some(_) => Err(ValidationError::InvalidPayload { field }),
    }
}

/// Checks that a page size is within `1..=250`.
pub(crate) const fn check_limit(limit: u32) -> Result<u32, ValidationError> {
    if limit == 0 || limit > MAX_LIMIT {
        return Err(ValidationError::LimitOutOfRange { limit });
    }
    Ok(limit)
}
