use crate::clients::TicketManager;
use crate::http::handlers::{auth, fraud, frontend, payments, tickets};
use crate::http::middleware::correlation;
use crate::service::auth_service::AuthService;
use crate::service::fraud_service::FraudService;
use crate::service::frontend::FrontendService;
use crate::service::payment_service::PaymentService;
use crate::telemetry::ServiceInfo;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

pub fn payment_router(service: PaymentService, info: ServiceInfo) -> Router {
    Router::new()
        .route("/health", get(payments::health))
        .route("/banks", get(payments::list_banks))
        .route("/pay", post(payments::pay))
        .layer(from_fn_with_state(info, correlation::propagate))
        .with_state(service)
}

pub fn fraud_router(service: FraudService, info: ServiceInfo) -> Router {
    Router::new()
        .route("/health", get(payments::health))
        .route("/check", post(fraud::check))
        .layer(from_fn_with_state(info, correlation::propagate))
        .with_state(service)
}

pub fn ticket_router(tickets: Arc<dyn TicketManager>, info: ServiceInfo) -> Router {
    Router::new()
        .route("/health", get(payments::health))
        .route("/jira/create_suspected_fraud", post(tickets::create_suspected_fraud))
        .route("/jira/comment", post(tickets::comment))
        .layer(from_fn_with_state(info, correlation::propagate))
        .with_state(tickets)
}

pub fn auth_router(service: AuthService, info: ServiceInfo) -> Router {
    Router::new()
        .route("/health", get(payments::health))
        .route("/auth/login", post(auth::login))
        .layer(from_fn_with_state(info, correlation::propagate))
        .with_state(service)
}

pub fn frontend_router(service: FrontendService, info: ServiceInfo) -> Router {
    Router::new()
        .route("/health", get(payments::health))
        .route("/api/banks", get(payments::list_banks))
        .route("/api/login", post(frontend::login))
        .route("/api/pay", post(frontend::pay))
        .layer(from_fn_with_state(info, correlation::propagate))
        .with_state(service)
}
