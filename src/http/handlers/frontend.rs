use crate::domain::auth::LoginRequest;
use crate::domain::context::CorrelationContext;
use crate::domain::payment::SessionPayRequest;
use crate::error::ApiError;
use crate::service::frontend::{FrontendService, LoginResult};
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};

pub const SESSION_COOKIE: &str = "session_id";

pub async fn login(
    State(service): State<FrontendService>,
    Extension(context): Extension<CorrelationContext>,
    Json(req): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    match service.login(&context, &req).await? {
        LoginResult::Accepted { session_id, response } => {
            let mut resp = (StatusCode::OK, Json(response)).into_response();
            let cookie = format!("{SESSION_COOKIE}={session_id}; Path=/");
            if let Ok(value) = HeaderValue::from_str(&cookie) {
                resp.headers_mut().insert(header::SET_COOKIE, value);
            }
            Ok(resp)
        }
        LoginResult::Rejected(body) => Ok((StatusCode::UNAUTHORIZED, Json(body)).into_response()),
    }
}

pub async fn pay(
    State(service): State<FrontendService>,
    Extension(context): Extension<CorrelationContext>,
    headers: HeaderMap,
    Json(req): Json<SessionPayRequest>,
) -> Result<Response, ApiError> {
    let session_id = session_cookie(&headers);
    let relayed = service.pay(&context, session_id.as_deref(), req).await?;
    Ok((relayed.status, Json(relayed.body)).into_response())
}

/// Value of the session cookie, if the request carries one.
pub fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| h.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
}
