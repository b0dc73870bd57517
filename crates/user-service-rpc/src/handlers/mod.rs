//! JSON-RPC request handlers, split by domain.

mod service;
mod shared;
mod users;

pub(crate) use shared::{require_i64_param, require_object_param};

use crate::server::AppState;
use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, error, warn};
use user_service_core::UserServiceError;

// ============================================================================
// JSON-RPC types
// ============================================================================

/// JSON-RPC 2.0 request structure.
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
    pub id: Option<Value>,
}

/// JSON-RPC 2.0 response structure.
///
/// `result` is always written on success, even when it is `null`: a missing
/// user is a successful call with a null result.
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
    pub id: Option<Value>,
}

/// JSON-RPC 2.0 error structure.
#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Body is not valid JSON.
const PARSE_ERROR: i32 = -32700;
/// Body is JSON but not a JSON-RPC 2.0 request object.
const INVALID_REQUEST: i32 = -32600;

impl JsonRpcResponse {
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: Some(result),
            error: None,
            id,
        }
    }

    pub fn error(id: Option<Value>, code: i32, message: String) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(JsonRpcError {
                code,
                message,
                data: None,
            }),
            id,
        }
    }
}

// ============================================================================
// HTTP endpoints
// ============================================================================

/// Health check endpoint.
pub async fn handle_health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

/// Decode a request body, answering malformed input with a JSON-RPC error
/// rather than an HTTP rejection.
fn parse_request(body: &[u8]) -> Result<JsonRpcRequest, JsonRpcResponse> {
    let value: Value = serde_json::from_slice(body).map_err(|e| {
        warn!("Unparseable RPC body: {}", e);
        JsonRpcResponse::error(None, PARSE_ERROR, format!("Parse error: {}", e))
    })?;

    let id = value.get("id").cloned();
    serde_json::from_value(value).map_err(|e| {
        warn!("Malformed RPC request: {}", e);
        JsonRpcResponse::error(id, INVALID_REQUEST, format!("Invalid Request: {}", e))
    })
}

/// Main JSON-RPC handler.
///
/// The body is taken raw so that bad JSON and missing fields still get a
/// JSON-RPC error object.
pub async fn handle_rpc(State(state): State<Arc<AppState>>, body: Bytes) -> impl IntoResponse {
    let request = match parse_request(&body) {
        Ok(request) => request,
        Err(response) => return (StatusCode::OK, Json(response)),
    };

    let method = &request.method;
    let params = request.params.unwrap_or(Value::Object(Default::default()));
    let id = request.id.clone();

    debug!("RPC call: {}({:?})", method, params);

    if request.jsonrpc != "2.0" {
        warn!("Rejecting request with jsonrpc={:?}", request.jsonrpc);
        return (
            StatusCode::OK,
            Json(JsonRpcResponse::error(
                id,
                INVALID_REQUEST,
                format!("Unsupported jsonrpc version: {}", request.jsonrpc),
            )),
        );
    }

    // Handle built-in methods
    if method == "health_check" {
        return (
            StatusCode::OK,
            Json(JsonRpcResponse::success(id, json!({"status": "ok"}))),
        );
    }

    match dispatch_method(&state, method, &params).await {
        Ok(value) => (StatusCode::OK, Json(JsonRpcResponse::success(id, value))),
        Err(e) => {
            error!("RPC error for {}: {}", method, e);
            let code = e.to_rpc_error_code();
            (
                StatusCode::OK,
                Json(JsonRpcResponse::error(id, code, e.to_string())),
            )
        }
    }
}

// ============================================================================
// Method dispatcher
// ============================================================================

/// Dispatch a method call to the appropriate domain handler.
///
/// Aliases listed in the service descriptor resolve to their canonical name.
async fn dispatch_method(
    state: &AppState,
    method: &str,
    params: &Value,
) -> user_service_core::Result<Value> {
    if method == "describe_service" {
        return service::describe_service(state, params).await;
    }

    match state.descriptor.resolve(method) {
        Some("get_user_by_id") => users::get_user_by_id(state, params).await,
        Some("get_user_by_user") => users::get_user_by_user(state, params).await,

        // Unknown method
        _ => {
            warn!("Method not found: {}", method);
            Err(UserServiceError::MethodNotFound {
                method: method.to_string(),
            })
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
