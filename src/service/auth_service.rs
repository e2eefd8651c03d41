use crate::decision::DecisionSource;
use crate::domain::auth::{customer_id, AuthErrorBody, LoginRequest, LoginResponse};
use std::sync::Arc;

/// Credential check stub. The outcome comes from the decision source; the
/// password is never inspected.
#[derive(Clone)]
pub struct AuthService {
    pub decisions: Arc<dyn DecisionSource>,
}

impl AuthService {
    pub fn login(&self, req: &LoginRequest) -> Result<LoginResponse, AuthErrorBody> {
        let cid = customer_id(&req.username);

        if let Some(reason) = self.decisions.auth_failure() {
            tracing::warn!(customer_id = %cid, status = "auth_error", reason = %reason, "auth_error");
            return Err(AuthErrorBody {
                error: "auth_error".to_string(),
                reason,
                customer_id: cid,
            });
        }

        tracing::info!(customer_id = %cid, status = "auth_ok", "auth_ok");
        Ok(LoginResponse {
            ok: true,
            customer_id: cid,
        })
    }
}
