use crate::clients::join_url;
use crate::domain::auth::{LoginRequest, LoginResponse};
use crate::domain::context::{CorrelationContext, TRACEPARENT};
use crate::domain::payment::SessionPayRequest;
use crate::error::ApiError;
use crate::service::session::SessionStore;
use axum::http::StatusCode;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Upstream reply passed back to the browser unchanged.
#[derive(Debug, Clone)]
pub struct Relayed {
    pub status: StatusCode,
    pub body: Value,
}

#[derive(Debug, Clone)]
pub enum LoginResult {
    Accepted {
        session_id: String,
        response: LoginResponse,
    },
    Rejected(Value),
}

/// Session-bound front door: logs users in through the auth service and
/// forwards their payments to the payment service.
#[derive(Clone)]
pub struct FrontendService {
    pub auth_url: String,
    pub payment_url: String,
    pub timeout: Duration,
    pub client: reqwest::Client,
    pub sessions: SessionStore,
}

impl FrontendService {
    pub fn new(auth_url: String, payment_url: String, timeout: Duration, sessions: SessionStore) -> Self {
        Self {
            auth_url,
            payment_url,
            timeout,
            client: reqwest::Client::new(),
            sessions,
        }
    }

    pub async fn login(&self, context: &CorrelationContext, req: &LoginRequest) -> Result<LoginResult, ApiError> {
        let url = join_url(&self.auth_url, "/auth/login");
        let relayed = self
            .forward(context, &url, req, "auth_upstream_error")
            .await?;

        if relayed.status != StatusCode::OK {
            tracing::warn!(status = "auth_failed", upstream_status = relayed.status.as_u16(), "web_auth_failed");
            return Ok(LoginResult::Rejected(relayed.body));
        }

        let response: LoginResponse = serde_json::from_value(relayed.body).map_err(|e| {
            ApiError::UpstreamUnavailable {
                label: "auth_upstream_error",
                detail: e.to_string(),
            }
        })?;
        let session_id = self.sessions.create(&response.customer_id);
        tracing::info!(
            customer_id = %response.customer_id,
            active_sessions = self.sessions.active_count(),
            status = "auth_ok",
            "auth_ok"
        );
        Ok(LoginResult::Accepted { session_id, response })
    }

    pub async fn pay(
        &self,
        context: &CorrelationContext,
        session_id: Option<&str>,
        req: SessionPayRequest,
    ) -> Result<Relayed, ApiError> {
        let customer_id = session_id
            .and_then(|sid| self.sessions.customer_for(sid))
            .ok_or(ApiError::NotAuthenticated)?;

        let bank_id = req.bank_id.clone();
        let amount = req.amount;
        let url = join_url(&self.payment_url, "/pay");
        let relayed = self
            .forward(context, &url, &req.for_customer(customer_id.clone()), "payment_upstream_error")
            .await?;

        if relayed.status == StatusCode::OK {
            tracing::info!(
                customer_id = %customer_id,
                bank_id = %bank_id,
                amount = %amount,
                status = "payment_ok",
                "payment_ok"
            );
        } else {
            tracing::warn!(
                customer_id = %customer_id,
                bank_id = %bank_id,
                amount = %amount,
                status = "payment_error",
                upstream_status = relayed.status.as_u16(),
                "web_payment_error"
            );
        }
        Ok(relayed)
    }

    async fn forward<B: Serialize + ?Sized>(
        &self,
        context: &CorrelationContext,
        url: &str,
        body: &B,
        label: &'static str,
    ) -> Result<Relayed, ApiError> {
        let unavailable = |detail: String| {
            tracing::error!(status = label, reason = %detail, "{label}");
            ApiError::UpstreamUnavailable { label, detail }
        };

        let resp = self
            .client
            .post(url)
            .header(TRACEPARENT, context.traceparent())
            .json(body)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        let status = StatusCode::from_u16(resp.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
        let bytes = resp.bytes().await.map_err(|e| unavailable(e.to_string()))?;
        let body = serde_json::from_slice::<Value>(&bytes).unwrap_or_else(|_| {
            serde_json::json!({ "error": String::from_utf8_lossy(&bytes) })
        });
        Ok(Relayed { status, body })
    }
}
