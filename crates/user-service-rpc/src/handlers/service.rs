//! Service metadata handlers.

use crate::server::AppState;
use serde_json::Value;

pub async fn describe_service(state: &AppState, _params: &Value) -> user_service_core::Result<Value> {
    Ok(serde_json::to_value(&state.descriptor)?)
}
