//! Shared parameter extraction used across RPC handlers.
//!
//! JSON-RPC allows params either by name (an object) or by position (an
//! array). Every helper here accepts both.

use serde_json::Value;
use user_service_core::UserServiceError;

/// Fetch a parameter by name from an object, or by position from an array.
pub(crate) fn get_param<'a>(params: &'a Value, name: &str, position: usize) -> Option<&'a Value> {
    let value = match params {
        Value::Object(_) => params.get(name),
        Value::Array(items) => items.get(position),
        _ => None,
    };
    value.filter(|v| !v.is_null())
}

/// Extract a required integer parameter.
pub(crate) fn require_i64_param(
    params: &Value,
    name: &str,
    position: usize,
) -> user_service_core::Result<i64> {
    get_param(params, name, position)
        .and_then(|v| v.as_i64())
        .ok_or_else(|| UserServiceError::invalid_param(name, "an integer"))
}

/// Extract a required object parameter.
///
/// When `params` is an object without `name`, the object itself is taken as
/// the value, so `{"name": "u2"}` and `{"user": {"name": "u2"}}` are
/// equivalent.
pub(crate) fn require_object_param<'a>(
    params: &'a Value,
    name: &str,
    position: usize,
) -> user_service_core::Result<&'a Value> {
    let value = match get_param(params, name, position) {
        Some(value) => value,
        None if params.is_object() => params,
        None => return Err(UserServiceError::invalid_param(name, "an object")),
    };

    if value.is_object() {
        Ok(value)
    } else {
        Err(UserServiceError::invalid_param(name, "an object"))
    }
}
