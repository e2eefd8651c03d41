use crate::clients::{join_url, TicketManager};
use crate::config::JiraConfig;
use crate::domain::context::CorrelationContext;
use crate::domain::ticket::CreateTicketRequest;
use crate::error::ClientError;
use regex::Regex;
use serde_json::{json, Value};
use std::sync::LazyLock;

const COLLABORATOR: &str = "jira";

/// Jira issue key: project key, dash, issue number (`PER-42`).
static ISSUE_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z0-9_]*-[0-9]+$").expect("issue key regex is valid"));

/// Jira Cloud REST v3 client. Every call validates the configuration first so
/// a missing credential surfaces as [`ClientError::ConfigMissing`] instead of
/// an authentication failure from Jira.
#[derive(Debug, Clone)]
pub struct JiraClient {
    pub config: JiraConfig,
    pub client: reqwest::Client,
}

impl JiraClient {
    pub fn new(config: JiraConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub async fn create_issue(&self, request: &CreateTicketRequest) -> Result<String, ClientError> {
        self.config.validate()?;

        let payload = json!({
            "fields": {
                "project": { "key": self.config.project_key },
                "summary": request.summary(),
                "issuetype": { "name": self.config.issue_type },
                "description": adf_document(request.description_lines()),
            }
        });

        let url = join_url(&self.config.base_url, "/rest/api/3/issue");
        let resp = self.send(self.client.post(url).json(&payload)).await?;
        let resp = check_status(resp, "jira_create_failed").await?;

        let body: Value = resp
            .json()
            .await
            .map_err(|e| ClientError::transport(COLLABORATOR, e))?;
        Ok(body
            .get("key")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string())
    }

    /// Keys that do not look like `PROJ-123` are refused before any request
    /// is built, since the key becomes part of the URL path.
    pub async fn add_comment(&self, issue_key: &str, comment: &str) -> Result<(), ClientError> {
        self.config.validate()?;
        if !is_issue_key(issue_key) {
            return Err(ClientError::InvalidInput {
                collaborator: COLLABORATOR,
                detail: format!("malformed issue key {issue_key:?}"),
            });
        }

        let payload = json!({ "body": adf_document([comment.to_string()]) });
        let url = join_url(
            &self.config.base_url,
            &format!("/rest/api/3/issue/{issue_key}/comment"),
        );
        let resp = self.send(self.client.post(url).json(&payload)).await?;
        check_status(resp, "jira_comment_failed").await?;
        Ok(())
    }

    /// Number of suspected-fraud issues among the most recent `max_results`.
    pub async fn count_suspected_fraud(&self, max_results: u32) -> Result<usize, ClientError> {
        self.config.validate()?;

        let jql = format!(
            r#"project = "{}" AND summary ~ "Suspected Fraud" ORDER BY created DESC"#,
            self.config.project_key
        );
        let url = join_url(&self.config.base_url, "/rest/api/3/search");
        let max_results = max_results.to_string();
        let resp = self
            .send(
                self.client
                    .get(url)
                    .query(&[("jql", jql.as_str()), ("maxResults", max_results.as_str())]),
            )
            .await?;
        let resp = check_status(resp, "jira_poll_failed").await?;

        let body: Value = resp
            .json()
            .await
            .map_err(|e| ClientError::transport(COLLABORATOR, e))?;
        Ok(body
            .get("issues")
            .and_then(Value::as_array)
            .map(Vec::len)
            .unwrap_or(0))
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ClientError> {
        request
            .basic_auth(&self.config.email, Some(&self.config.api_token))
            .header(reqwest::header::ACCEPT, "application/json")
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| ClientError::transport(COLLABORATOR, e))
    }
}

/// Logs Jira's error payload before turning a non-2xx reply into an error.
async fn check_status(resp: reqwest::Response, event: &'static str) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let text = resp.text().await.unwrap_or_default();
    let jira_error = serde_json::from_str::<Value>(&text).unwrap_or_else(|_| json!({ "text": text }));
    tracing::error!(
        status = event,
        reason = %format!("HTTP {}", status.as_u16()),
        jira_error = %jira_error,
        "{event}"
    );

    Err(ClientError::UpstreamRejected {
        collaborator: COLLABORATOR,
        status: status.as_u16(),
        body: text.chars().take(200).collect(),
    })
}

pub fn is_issue_key(key: &str) -> bool {
    ISSUE_KEY_RE.is_match(key)
}

/// Atlassian Document Format body with one paragraph per line.
pub fn adf_document(lines: impl IntoIterator<Item = String>) -> Value {
    let content: Vec<Value> = lines
        .into_iter()
        .map(|text| {
            json!({
                "type": "paragraph",
                "content": [{ "type": "text", "text": text }],
            })
        })
        .collect();
    json!({ "type": "doc", "version": 1, "content": content })
}

#[async_trait::async_trait]
impl TicketManager for JiraClient {
    fn name(&self) -> &'static str {
        COLLABORATOR
    }

    async fn create_suspected_fraud_ticket(
        &self,
        context: &CorrelationContext,
        request: &CreateTicketRequest,
    ) -> Result<String, ClientError> {
        let issue_key = self.create_issue(request).await?;
        tracing::info!(
            trace_id = context.trace_id(),
            issue_key = %issue_key,
            customer_id = %request.customer_id,
            payment_id = %request.payment_id,
            bank_id = %request.bank_id,
            status = "jira_create_ok",
            "jira_create_ok"
        );
        Ok(issue_key)
    }

    async fn add_comment(
        &self,
        context: &CorrelationContext,
        issue_key: &str,
        comment: &str,
    ) -> Result<(), ClientError> {
        JiraClient::add_comment(self, issue_key, comment).await?;
        tracing::info!(
            trace_id = context.trace_id(),
            issue_key,
            status = "jira_comment_ok",
            "jira_comment_ok"
        );
        Ok(())
    }
}
