/*
[INPUT]:  Error sources (transport, API rejection, serialization, config, signing)
[OUTPUT]: Structured error types with status/body context and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

use crate::types::ApiErrorDetails;

/// Main error type for the Adyen adapter
#[derive(Error, Debug)]
pub enum AdyenError {
    /// Connection, TLS, DNS or body read failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Adyen answered with a status outside 2xx
    #[error("API error (status {status}): {body}")]
    Api {
        status: u16,
        body: String,
        details: Option<ApiErrorDetails>,
    },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Payload did not encode to a JSON object
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// HMAC key could not be used for signing
    #[error("Signature error: {0}")]
    Signature(String),
}

impl AdyenError {
    /// Whether repeating the same call may succeed.
    ///
    /// The client never retries on its own; this is a hint for callers.
    pub fn is_retryable(&self) -> bool {
        match self {
            AdyenError::Http(err) => err.is_timeout() || err.is_connect(),
            AdyenError::Api { status, .. } => {
                *status == StatusCode::TOO_MANY_REQUESTS.as_u16() || *status >= 500
            }
            _ => false,
        }
    }

    /// Check if error indicates rejected credentials
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            AdyenError::Api { status, .. }
                if *status == StatusCode::UNAUTHORIZED.as_u16()
                    || *status == StatusCode::FORBIDDEN.as_u16()
        )
    }

    /// HTTP status of an API rejection
    pub fn status(&self) -> Option<u16> {
        match self {
            AdyenError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body of an API rejection
    pub fn body(&self) -> Option<&str> {
        match self {
            AdyenError::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Parsed error object of an API rejection, if the body carried one
    pub fn details(&self) -> Option<&ApiErrorDetails> {
        match self {
            AdyenError::Api { details, .. } => details.as_ref(),
            _ => None,
        }
    }

    /// Create an API error from status code and raw body
    pub fn api_error(status: StatusCode, body: impl Into<String>) -> Self {
        let body = body.into();
        let details = serde_json::from_str(&body).ok();
        AdyenError::Api {
            status: status.as_u16(),
            body,
            details,
        }
    }
}

/// Result type alias for Adyen operations
pub type Result<T> = std::result::Result<T, AdyenError>;
