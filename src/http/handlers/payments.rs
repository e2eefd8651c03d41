use crate::domain::bank::BanksResponse;
use crate::domain::context::CorrelationContext;
use crate::domain::payment::{PayRequest, PayResponse, PaymentFailedBody, PaymentOutcome, PaymentStatus};
use crate::error::ApiError;
use crate::service::payment_service::PaymentService;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};

pub async fn pay(
    State(service): State<PaymentService>,
    Extension(context): Extension<CorrelationContext>,
    Json(req): Json<PayRequest>,
) -> Result<Response, ApiError> {
    let outcome = service.execute(&context, req).await?;
    Ok(outcome_response(outcome))
}

fn outcome_response(outcome: PaymentOutcome) -> Response {
    match outcome {
        PaymentOutcome::Settled {
            payment_id,
            bank_id,
            bank_name,
        } => (
            StatusCode::OK,
            Json(PayResponse {
                ok: true,
                payment_id,
                status: PaymentStatus::Settled,
                bank_id,
                bank_name,
            }),
        )
            .into_response(),
        PaymentOutcome::Failed { payment_id, reason } => (
            StatusCode::BAD_GATEWAY,
            Json(PaymentFailedBody {
                error: "payment_failed".to_string(),
                reason,
                payment_id,
            }),
        )
            .into_response(),
    }
}

pub async fn list_banks() -> Json<BanksResponse> {
    Json(BanksResponse::all())
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
