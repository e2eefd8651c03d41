use crate::clients::{join_url, post_json, TicketManager};
use crate::domain::context::CorrelationContext;
use crate::domain::ticket::{CommentRequest, CommentResponse, CreateTicketRequest, CreateTicketResponse};
use crate::error::ClientError;
use std::time::Duration;

/// Client for the ticket service's HTTP API.
#[derive(Debug, Clone)]
pub struct HttpTicketClient {
    pub base_url: String,
    pub timeout: Duration,
    pub client: reqwest::Client,
}

impl HttpTicketClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl TicketManager for HttpTicketClient {
    fn name(&self) -> &'static str {
        "ticket-service"
    }

    async fn create_suspected_fraud_ticket(
        &self,
        context: &CorrelationContext,
        request: &CreateTicketRequest,
    ) -> Result<String, ClientError> {
        let url = join_url(&self.base_url, "/jira/create_suspected_fraud");
        let resp: CreateTicketResponse =
            post_json(&self.client, self.name(), &url, context, request, self.timeout).await?;
        Ok(resp.issue_key)
    }

    async fn add_comment(
        &self,
        context: &CorrelationContext,
        issue_key: &str,
        comment: &str,
    ) -> Result<(), ClientError> {
        let url = join_url(&self.base_url, "/jira/comment");
        let body = CommentRequest {
            issue_key: issue_key.to_string(),
            comment: comment.to_string(),
        };
        let _: CommentResponse =
            post_json(&self.client, self.name(), &url, context, &body, self.timeout).await?;
        Ok(())
    }
}
