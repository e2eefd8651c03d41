use crate::domain::context::CorrelationContext;
use crate::domain::fraud::{FraudCheckRequest, FraudVerdict};
use crate::service::fraud_service::FraudService;
use axum::extract::State;
use axum::{Extension, Json};

pub async fn check(
    State(service): State<FraudService>,
    Extension(context): Extension<CorrelationContext>,
    Json(req): Json<FraudCheckRequest>,
) -> Json<FraudVerdict> {
    Json(service.check(&context, &req).await)
}
