//! Error types for the Clef client.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use serde::Deserialize;

/// Message Clef uses to reject an expired or unknown access token.
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid token.";

/// Structured failure payload returned by Clef on any non-200 response.
#[derive(thiserror::Error, Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[error("{message} ({internal_code})")]
pub struct ProviderError {
    /// Human readable message.
    #[serde(default)]
    pub message: String,

    /// Additional context, often empty.
    #[serde(default)]
    pub context: String,

    /// Machine readable error code.
    #[serde(default, rename = "error")]
    pub internal_code: String,
}

impl ProviderError {
    /// Returns true if Clef rejected the access token.
    #[must_use]
    pub fn is_invalid_token(&self) -> bool {
        self.message == INVALID_TOKEN_MESSAGE
    }
}

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// The request URL could not be built.
    #[error("Malformed URL: {0}")]
    MalformedUrl(#[from] url::ParseError),

    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Middleware error
    #[error("Middleware error: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    /// The access token was rejected.
    #[error("Invalid token: {0}")]
    InvalidToken(ProviderError),

    /// Any other rejection reported by Clef.
    #[error("Clef error ({status}): {error}")]
    Provider {
        /// HTTP status code
        status: u16,
        /// Decoded error body
        error: ProviderError,
    },

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Classify a non-200 response body.
    #[must_use]
    pub fn from_provider(status: u16, error: ProviderError) -> Self {
        if error.is_invalid_token() {
            Self::InvalidToken(error)
        } else {
            Self::Provider { status, error }
        }
    }

    /// Returns true if Clef rejected the access token.
    #[must_use]
    pub const fn is_invalid_token(&self) -> bool {
        matches!(self, Self::InvalidToken(_))
    }

    /// Returns true if the request never produced an HTTP response.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Middleware(_))
    }

    /// The decoded error body, if Clef rejected the request.
    #[must_use]
    pub fn provider_error(&self) -> Option<&ProviderError> {
        match self {
            Self::InvalidToken(error) | Self::Provider { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Errors from the demo server handlers.
#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    /// A required query or form parameter was absent.
    #[error("Missing parameter: {0}")]
    MissingParameter(&'static str),

    /// The upstream Clef call failed.
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl axum::response::IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;

        let status = match &self {
            Self::MissingParameter(_) => StatusCode::BAD_REQUEST,
            Self::Client(_) => StatusCode::BAD_GATEWAY,
        };
        (status, self.to_string()).into_response()
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for demo server handlers.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(message: &str) -> ProviderError {
        ProviderError {
            message: message.to_string(),
            context: String::new(),
            internal_code: "invalid_token".to_string(),
        }
    }

    #[test]
    fn test_invalid_token_requires_exact_message() {
        assert!(provider("Invalid token.").is_invalid_token());
        assert!(!provider("Invalid token").is_invalid_token());
        assert!(!provider("invalid token.").is_invalid_token());
        assert!(!provider("").is_invalid_token());
    }

    #[test]
    fn test_from_provider_classifies() {
        let err = ClientError::from_provider(403, provider("Invalid token."));
        assert!(err.is_invalid_token());

        let err = ClientError::from_provider(400, provider("Invalid code."));
        assert!(!err.is_invalid_token());
        assert!(matches!(err, ClientError::Provider { status: 400, .. }));
    }

    #[test]
    fn test_provider_error_decodes_wire_names() {
        let err: ProviderError = serde_json::from_str(
            r#"{"message":"Invalid token.","context":"","error":"invalid_token"}"#,
        )
        .unwrap();
        assert_eq!(err.internal_code, "invalid_token");
        assert!(err.is_invalid_token());
    }

    #[test]
    fn test_provider_error_accessor() {
        let err = ClientError::from_provider(500, provider("Boom"));
        assert_eq!(
            err.provider_error().map(|e| e.message.as_str()),
            Some("Boom")
        );
        assert!(!err.is_transport());

        let err = ClientError::from(url::ParseError::EmptyHost);
        assert!(err.provider_error().is_none());
    }

    #[test]
    fn test_server_error_status() {
        use axum::http::StatusCode;
        use axum::response::IntoResponse;

        let response = ServerError::MissingParameter("code").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let err = ClientError::from_provider(400, provider("Invalid code."));
        let response = ServerError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
