use crate::clients::TicketManager;
use crate::domain::context::CorrelationContext;
use crate::domain::ticket::{CommentRequest, CommentResponse, CreateTicketRequest, CreateTicketResponse};
use crate::error::ApiError;
use axum::extract::State;
use axum::{Extension, Json};
use std::sync::Arc;

/// Missing Jira configuration answers 500; rejections and network failures
/// answer 502.
pub async fn create_suspected_fraud(
    State(tickets): State<Arc<dyn TicketManager>>,
    Extension(context): Extension<CorrelationContext>,
    Json(req): Json<CreateTicketRequest>,
) -> Result<Json<CreateTicketResponse>, ApiError> {
    let issue_key = tickets
        .create_suspected_fraud_ticket(&context, &req)
        .await
        .inspect_err(|e| {
            tracing::error!(
                payment_id = %req.payment_id,
                collaborator = e.collaborator(),
                status = "jira_create_error",
                reason = %e,
                "jira_create_error"
            )
        })?;
    Ok(Json(CreateTicketResponse { issue_key }))
}

pub async fn comment(
    State(tickets): State<Arc<dyn TicketManager>>,
    Extension(context): Extension<CorrelationContext>,
    Json(req): Json<CommentRequest>,
) -> Result<Json<CommentResponse>, ApiError> {
    tickets
        .add_comment(&context, &req.issue_key, &req.comment)
        .await
        .inspect_err(|e| {
            tracing::error!(
                issue_key = %req.issue_key,
                collaborator = e.collaborator(),
                status = "jira_comment_error",
                reason = %e,
                "jira_comment_error"
            )
        })?;
    Ok(Json(CommentResponse { ok: true }))
}
