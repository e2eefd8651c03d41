use crate::clients::{FraudGateway, TicketManager};
use crate::decision::DecisionSource;
use crate::domain::context::CorrelationContext;
use crate::domain::fraud::{FraudCheckRequest, FraudVerdict};
use crate::error::ClientError;
use std::sync::Arc;

/// Decides fraud verdicts and writes the resolution back to the ticket.
#[derive(Clone)]
pub struct FraudService {
    pub decisions: Arc<dyn DecisionSource>,
    pub tickets: Arc<dyn TicketManager>,
}

impl FraudService {
    /// Always yields a verdict. The single follow-up comment is best effort:
    /// its failure is logged and never alters the verdict.
    pub async fn check(&self, context: &CorrelationContext, req: &FraudCheckRequest) -> FraudVerdict {
        let verdict = FraudVerdict::from(self.decisions.fraud_verdict());

        if verdict.fraudulent {
            tracing::warn!(
                payment_id = %req.payment_id,
                customer_id = %req.customer_id,
                bank_id = %req.bank_id,
                amount = %req.amount,
                status = "fraud_rejected",
                reason = %verdict.reason,
                "fraud_rejected"
            );
        } else {
            tracing::info!(
                payment_id = %req.payment_id,
                customer_id = %req.customer_id,
                bank_id = %req.bank_id,
                amount = %req.amount,
                status = "fraud_approved",
                "fraud_approved"
            );
        }

        if let Err(e) = self
            .tickets
            .add_comment(context, &req.issue_key, &verdict.comment)
            .await
        {
            tracing::error!(
                payment_id = %req.payment_id,
                issue_key = %req.issue_key,
                collaborator = e.collaborator(),
                status = "jira_comment_error",
                reason = %e,
                "jira_comment_error"
            );
        }

        verdict
    }
}

/// Lets the orchestrator call the fraud service in-process.
#[async_trait::async_trait]
impl FraudGateway for FraudService {
    fn name(&self) -> &'static str {
        "fraud-local"
    }

    async fn check_fraud(
        &self,
        context: &CorrelationContext,
        request: &FraudCheckRequest,
    ) -> Result<FraudVerdict, ClientError> {
        Ok(self.check(context, request).await)
    }
}
