//! Auth gateway error types

use thiserror::Error;

/// Errors surfaced by the auth gateway
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// 401 Unauthorized - credentials rejected by the platform
    #[error("unauthorized (401)")]
    Unauthorized { message: Option<String> },

    /// Any other non-2xx response; `message` is the server-provided one
    /// when the error body carried it
    #[error("request rejected with HTTP {status}")]
    Rejected { status: u16, message: Option<String> },

    /// Network or timeout error
    #[error("network error: {message}")]
    Network { message: String },

    /// 2xx response whose body did not decode
    #[error("failed to decode response: {message}")]
    Decode { message: String },
}

impl GatewayError {
    /// Create an error from a non-2xx status and an optional server message
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        match status {
            401 => GatewayError::Unauthorized { message },
            _ => GatewayError::Rejected { status, message },
        }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        GatewayError::Network {
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        GatewayError::Decode {
            message: message.into(),
        }
    }

    /// Check if this is an authentication error (401)
    pub fn is_auth_error(&self) -> bool {
        matches!(self, GatewayError::Unauthorized { .. })
    }

    /// HTTP status of the response, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Unauthorized { .. } => Some(401),
            GatewayError::Rejected { status, .. } => Some(*status),
            GatewayError::Network { .. } | GatewayError::Decode { .. } => None,
        }
    }

    /// Server-provided message from the error body, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            GatewayError::Unauthorized { message } | GatewayError::Rejected { message, .. } => {
                message.as_deref()
            }
            GatewayError::Network { .. } | GatewayError::Decode { .. } => None,
        }
    }

    /// Message to show the user: the server-provided one when present,
    /// else the caller's generic fallback
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .map_or_else(|| fallback.to_string(), ToString::to_string)
    }
}
