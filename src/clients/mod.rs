use crate::domain::context::{CorrelationContext, TRACEPARENT};
use crate::domain::fraud::{FraudCheckRequest, FraudVerdict};
use crate::domain::ticket::CreateTicketRequest;
use crate::error::ClientError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

pub mod fraud_http;
pub mod jira;
pub mod mock;
pub mod ticket_http;

/// Opens and annotates suspected-fraud tickets.
#[async_trait::async_trait]
pub trait TicketManager: Send + Sync {
    fn name(&self) -> &'static str;

    /// Returns the key of the created ticket.
    async fn create_suspected_fraud_ticket(
        &self,
        context: &CorrelationContext,
        request: &CreateTicketRequest,
    ) -> Result<String, ClientError>;

    async fn add_comment(
        &self,
        context: &CorrelationContext,
        issue_key: &str,
        comment: &str,
    ) -> Result<(), ClientError>;
}

/// Produces a fraud verdict for an escalated payment.
#[async_trait::async_trait]
pub trait FraudGateway: Send + Sync {
    fn name(&self) -> &'static str;

    async fn check_fraud(
        &self,
        context: &CorrelationContext,
        request: &FraudCheckRequest,
    ) -> Result<FraudVerdict, ClientError>;
}

/// Joins a base URL and a path without doubling the slash.
pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// POSTs JSON with trace propagation and a hard timeout, decoding a JSON reply.
pub(crate) async fn post_json<B, R>(
    client: &reqwest::Client,
    collaborator: &'static str,
    url: &str,
    context: &CorrelationContext,
    body: &B,
    timeout: Duration,
) -> Result<R, ClientError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let resp = client
        .post(url)
        .header(TRACEPARENT, context.traceparent())
        .json(body)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| ClientError::transport(collaborator, e))?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::UpstreamRejected {
            collaborator,
            status: status.as_u16(),
            body: body.chars().take(200).collect(),
        });
    }

    resp.json::<R>()
        .await
        .map_err(|e| ClientError::transport(collaborator, e))
}
