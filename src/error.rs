//! Crate-wide error kinds.
//!
//! Every external call (token exchange, Spotify API, generative model, cache
//! store) resolves to one [`ApiError`] kind so callers can distinguish failure
//! causes programmatically instead of pattern-matching on message strings.
//! The HTTP layer maps each kind to a status code via `IntoResponse`.

use std::fmt;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug)]
pub enum ApiError {
    /// Refresh-token exchange failed; the configured token is unusable.
    TokenExpired(String),
    /// Upstream resource does not exist (unknown user, uncached share key).
    NotFound(String),
    /// Any other non-2xx or transport failure from an upstream service.
    Upstream(String),
    /// The model reply could not be reduced to a valid aura record.
    Parse(String),
    /// The local cache store failed to read or write an entry.
    Cache(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::TokenExpired(msg) => write!(f, "Token is expired: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Upstream(msg) => write!(f, "Upstream error: {}", msg),
            ApiError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ApiError::Cache(msg) => write!(f, "Cache error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.status() == Some(reqwest::StatusCode::NOT_FOUND) {
            ApiError::NotFound(err.to_string())
        } else {
            ApiError::Upstream(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        crate::warning!("{}", self);

        let status = match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::TokenExpired(_) | ApiError::Upstream(_) | ApiError::Parse(_) => {
                StatusCode::BAD_GATEWAY
            }
            ApiError::Cache(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
