use crate::domain::auth::LoginRequest;
use crate::service::auth_service::AuthService;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

pub async fn login(State(service): State<AuthService>, Json(req): Json<LoginRequest>) -> Response {
    match service.login(&req) {
        Ok(resp) => (StatusCode::OK, Json(resp)).into_response(),
        Err(body) => (StatusCode::UNAUTHORIZED, Json(body)).into_response(),
    }
}
