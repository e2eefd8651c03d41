use crate::clients::{join_url, post_json, FraudGateway};
use crate::domain::context::CorrelationContext;
use crate::domain::fraud::{FraudCheckRequest, FraudVerdict};
use crate::error::ClientError;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpFraudClient {
    pub base_url: String,
    pub timeout: Duration,
    pub client: reqwest::Client,
}

impl HttpFraudClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl FraudGateway for HttpFraudClient {
    fn name(&self) -> &'static str {
        "fraud-service"
    }

    async fn check_fraud(
        &self,
        context: &CorrelationContext,
        request: &FraudCheckRequest,
    ) -> Result<FraudVerdict, ClientError> {
        let url = join_url(&self.base_url, "/check");
        post_json(&self.client, self.name(), &url, context, request, self.timeout).await
    }
}
