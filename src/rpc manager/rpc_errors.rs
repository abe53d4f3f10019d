use solana_rpc_client_api::{
    client_error::{Error as ClientError, ErrorKind as ClientErrorKind},
    request::RpcError,
};
use std::time::Duration;
use thiserror::Error;

/// Ledger-connection error types
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RpcManagerError {
    /// Transport-level errors (network, connection)
    #[error("Transport error: {message} (endpoint: {endpoint})")]
    Transport { endpoint: String, message: String },

    /// Timeout errors
    #[error("Timeout after {timeout_ms}ms (endpoint: {endpoint})")]
    Timeout { endpoint: String, timeout_ms: u64 },

    /// RPC response errors (from the RPC server)
    #[error("RPC response error: {message} (endpoint: {endpoint}, code: {code:?})")]
    RpcResponse {
        endpoint: String,
        message: String,
        code: Option<i64>,
    },

    #[error("Blockhash not found (endpoint: {endpoint})")]
    BlockhashNotFound { endpoint: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Malformed response payload
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RpcManagerError {
    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            RpcManagerError::Transport { .. } => true,
            RpcManagerError::Timeout { .. } => true,
            RpcManagerError::BlockhashNotFound { .. } => true,

            RpcManagerError::Configuration(_) => false,
            RpcManagerError::Internal(_) => false,

            // Retry on server errors (5xx)
            RpcManagerError::RpcResponse { code, .. } => {
                matches!(code, Some(c) if (500..600).contains(c))
            }
        }
    }

    /// Get the endpoint associated with this error, if any
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            RpcManagerError::Transport { endpoint, .. } => Some(endpoint),
            RpcManagerError::Timeout { endpoint, .. } => Some(endpoint),
            RpcManagerError::RpcResponse { endpoint, .. } => Some(endpoint),
            RpcManagerError::BlockhashNotFound { endpoint } => Some(endpoint),
            _ => None,
        }
    }

    /// Create from ClientError with context.
    ///
    /// `request_timeout` is the client's configured per-request timeout,
    /// reported when the failure was a timeout.
    pub fn from_client_error(err: ClientError, endpoint: &str, request_timeout: Duration) -> Self {
        let err_str = err.to_string().to_lowercase();

        match err.kind() {
            ClientErrorKind::RpcError(RpcError::RpcResponseError { code, message, .. }) => {
                if err_str.contains("blockhash not found") {
                    RpcManagerError::BlockhashNotFound {
                        endpoint: endpoint.to_string(),
                    }
                } else {
                    RpcManagerError::RpcResponse {
                        endpoint: endpoint.to_string(),
                        message: message.clone(),
                        code: Some(*code),
                    }
                }
            }
            ClientErrorKind::RpcError(RpcError::ParseError(message)) => {
                RpcManagerError::Internal(format!("unparseable response from {endpoint}: {message}"))
            }
            ClientErrorKind::SerdeJson(e) => {
                RpcManagerError::Internal(format!("unparseable response from {endpoint}: {e}"))
            }
            _ if err_str.contains("timeout") || err_str.contains("timed out") => {
                RpcManagerError::Timeout {
                    endpoint: endpoint.to_string(),
                    timeout_ms: request_timeout.as_millis() as u64,
                }
            }
            _ => RpcManagerError::Transport {
                endpoint: endpoint.to_string(),
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_retryable() {
        assert!(RpcManagerError::Transport {
            endpoint: "test".to_string(),
            message: "connection failed".to_string(),
        }
        .is_retryable());

        assert!(RpcManagerError::Timeout {
            endpoint: "test".to_string(),
            timeout_ms: 5000,
        }
        .is_retryable());

        assert!(RpcManagerError::RpcResponse {
            endpoint: "test".to_string(),
            message: "bad gateway".to_string(),
            code: Some(502),
        }
        .is_retryable());

        assert!(!RpcManagerError::RpcResponse {
            endpoint: "test".to_string(),
            message: "invalid params".to_string(),
            code: Some(-32602),
        }
        .is_retryable());

        assert!(!RpcManagerError::Configuration("test".to_string()).is_retryable());
    }

    #[test]
    fn test_error_endpoint() {
        let err = RpcManagerError::Timeout {
            endpoint: "https://test.com".to_string(),
            timeout_ms: 5000,
        };
        assert_eq!(err.endpoint(), Some("https://test.com"));
        assert_eq!(RpcManagerError::Internal("x".to_string()).endpoint(), None);
    }

    #[test]
    fn test_from_custom_client_error_is_transport() {
        let err = ClientError::from(ClientErrorKind::Custom("socket closed".to_string()));
        let mapped =
            RpcManagerError::from_client_error(err, "http://localhost:8899", Duration::from_secs(30));
        assert!(matches!(mapped, RpcManagerError::Transport { .. }));
        assert_eq!(mapped.endpoint(), Some("http://localhost:8899"));
    }

    #[test]
    fn test_from_rpc_response_error_keeps_code() {
        let err = ClientError::from(ClientErrorKind::RpcError(RpcError::RpcResponseError {
            code: -32005,
            message: "Node is behind".to_string(),
            data: solana_rpc_client_api::request::RpcResponseErrorData::Empty,
        }));
        let mapped = RpcManagerError::from_client_error(err, "rpc", Duration::from_secs(30));
        assert_eq!(
            mapped,
            RpcManagerError::RpcResponse {
                endpoint: "rpc".to_string(),
                message: "Node is behind".to_string(),
                code: Some(-32005),
            }
        );
    }

    #[test]
    fn test_timeout_reports_configured_timeout() {
        let err = ClientError::from(ClientErrorKind::Custom("operation timed out".to_string()));
        let mapped = RpcManagerError::from_client_error(err, "rpc", Duration::from_millis(7_500));
        assert_eq!(
            mapped,
            RpcManagerError::Timeout {
                endpoint: "rpc".to_string(),
                timeout_ms: 7_500,
            }
        );
        assert_eq!(mapped.to_string(), "Timeout after 7500ms (endpoint: rpc)");
    }
}
