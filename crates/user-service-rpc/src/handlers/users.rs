//! User lookup handlers.

use super::{require_i64_param, require_object_param};
use crate::server::AppState;
use serde_json::Value;
use tracing::debug;
use user_service_core::{User, UserProbe, UserServiceError};

pub async fn get_user_by_id(state: &AppState, params: &Value) -> user_service_core::Result<Value> {
    let id = require_i64_param(params, "id", 0)?;

    // Ids outside the i32 range cannot name a stored user
    let user = match i32::try_from(id) {
        Ok(id) => state.service.get_user_by_id(id),
        Err(_) => {
            debug!("Id {} is out of range, treating as not found", id);
            None
        }
    };

    Ok(serde_json::to_value(user)?)
}

pub async fn get_user_by_user(
    state: &AppState,
    params: &Value,
) -> user_service_core::Result<Value> {
    let probe = require_object_param(params, "user", 0)?;
    let probe: UserProbe =
        serde_json::from_value(probe.clone()).map_err(|e| UserServiceError::InvalidParams {
            message: format!("parameter 'user' is not a valid user: {}", e),
        })?;

    let user = state.service.get_user_by_user(&User::from(probe));
    Ok(serde_json::to_value(user)?)
}
