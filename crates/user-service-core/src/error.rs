//! Error types for the user service.
//!
//! Lookups never fail: an absent user is `None`. These errors only arise at
//! the RPC boundary, where requests are decoded and the listener is bound.

use thiserror::Error;

/// Main error type for the user service.
#[derive(Debug, Error)]
pub enum UserServiceError {
    #[error("Invalid params: {message}")]
    InvalidParams { message: String },

    #[error("Method not found: {method}")]
    MethodNotFound { method: String },

    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias for user service operations.
pub type Result<T> = std::result::Result<T, UserServiceError>;

impl From<std::io::Error> for UserServiceError {
    fn from(err: std::io::Error) -> Self {
        UserServiceError::Io {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for UserServiceError {
    fn from(err: serde_json::Error) -> Self {
        UserServiceError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl UserServiceError {
    /// Build an `InvalidParams` error for a missing or ill-typed parameter.
    pub fn invalid_param(name: &str, expected: &str) -> Self {
        UserServiceError::InvalidParams {
            message: format!("parameter '{}' must be {}", name, expected),
        }
    }

    /// Convert to a JSON-RPC error code.
    ///
    /// Standard JSON-RPC error codes:
    /// - -32601: Method not found
    /// - -32602: Invalid params
    /// - -32603: Internal error
    pub fn to_rpc_error_code(&self) -> i32 {
        match self {
            UserServiceError::MethodNotFound { .. } => -32601,
            UserServiceError::InvalidParams { .. } => -32602,
            UserServiceError::Json { .. }
            | UserServiceError::Io { .. }
            | UserServiceError::Config { .. } => -32603,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = UserServiceError::MethodNotFound {
            method: "get_user_by_email".into(),
        };
        assert_eq!(err.to_string(), "Method not found: get_user_by_email");

        let err = UserServiceError::invalid_param("id", "an integer");
        assert_eq!(
            err.to_string(),
            "Invalid params: parameter 'id' must be an integer"
        );
    }

    #[test]
    fn test_rpc_error_codes() {
        assert_eq!(
            UserServiceError::MethodNotFound {
                method: "nope".into()
            }
            .to_rpc_error_code(),
            -32601
        );
        assert_eq!(
            UserServiceError::invalid_param("id", "an integer").to_rpc_error_code(),
            -32602
        );
        assert_eq!(
            UserServiceError::Config {
                message: "bad host".into()
            }
            .to_rpc_error_code(),
            -32603
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: UserServiceError = parse_err.into();
        assert_eq!(err.to_rpc_error_code(), -32603);
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
