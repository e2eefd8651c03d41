use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Failure of a call to another service (ticketing, fraud review, Jira).
///
/// Nothing in the workflow retries these. Callers either degrade or fold
/// them into a business outcome.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Required settings are absent; permanent for the life of the process.
    #[error("{collaborator}: {detail}")]
    ConfigMissing {
        collaborator: &'static str,
        detail: String,
    },

    /// The remote side answered with a non-success HTTP status.
    #[error("{collaborator} rejected request: HTTP {status}: {body}")]
    UpstreamRejected {
        collaborator: &'static str,
        status: u16,
        body: String,
    },

    /// The request was refused locally before anything was sent.
    #[error("{collaborator} refused request: {detail}")]
    InvalidInput {
        collaborator: &'static str,
        detail: String,
    },

    /// Connection failure, timeout, or an unreadable response body.
    #[error("{collaborator} transport error: {detail}")]
    Transport {
        collaborator: &'static str,
        detail: String,
    },
}

impl ClientError {
    pub fn transport(collaborator: &'static str, err: reqwest::Error) -> Self {
        let detail = if err.is_timeout() {
            format!("timed out: {err}")
        } else {
            err.to_string()
        };
        Self::Transport { collaborator, detail }
    }

    pub fn collaborator(&self) -> &'static str {
        match self {
            Self::ConfigMissing { collaborator, .. }
            | Self::UpstreamRejected { collaborator, .. }
            | Self::InvalidInput { collaborator, .. }
            | Self::Transport { collaborator, .. } => collaborator,
        }
    }

    pub fn is_permanent(&self) -> bool {
        matches!(self, Self::ConfigMissing { .. })
    }
}

/// Errors surfaced to HTTP callers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("not authenticated")]
    NotAuthenticated,

    #[error(transparent)]
    Collaborator(#[from] ClientError),

    /// A proxied upstream could not be reached at all.
    #[error("{label}: {detail}")]
    UpstreamUnavailable { label: &'static str, detail: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::InvalidRequest(reason) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": "invalid_request", "reason": reason }),
            ),
            Self::NotAuthenticated => (
                StatusCode::UNAUTHORIZED,
                serde_json::json!({ "error": "not_authenticated" }),
            ),
            Self::Collaborator(ClientError::InvalidInput { detail, .. }) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": "invalid_request", "reason": detail }),
            ),
            Self::Collaborator(err) if err.is_permanent() => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": "config_missing", "reason": err.to_string() }),
            ),
            Self::Collaborator(err) => (
                StatusCode::BAD_GATEWAY,
                serde_json::json!({ "error": "upstream_error", "reason": err.to_string() }),
            ),
            Self::UpstreamUnavailable { label, .. } => (
                StatusCode::BAD_GATEWAY,
                serde_json::json!({ "error": label }),
            ),
        };
        (status, Json(body)).into_response()
    }
}
