use crate::clients::{FraudGateway, TicketManager};
use crate::decision::DecisionSource;
use crate::domain::bank::bank_name;
use crate::domain::context::CorrelationContext;
use crate::domain::fraud::{FraudCase, FraudCheckRequest};
use crate::domain::payment::{PayRequest, PaymentOutcome, Transaction, SUSPECTED_FRAUD_REASON};
use crate::domain::ticket::CreateTicketRequest;
use crate::error::ApiError;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Drives a payment from creation to a terminal outcome.
///
/// Most payments take the direct path and settle or fail on a single draw.
/// Escalated payments open a ticket, then ask the fraud gateway for a verdict.
/// Ticket creation fails open (the check still runs with an empty key); the
/// fraud verdict fails closed (no verdict means the payment is declined).
#[derive(Clone)]
pub struct PaymentService {
    pub tickets: Arc<dyn TicketManager>,
    pub fraud: Arc<dyn FraudGateway>,
    pub decisions: Arc<dyn DecisionSource>,
}

impl PaymentService {
    pub async fn execute(
        &self,
        context: &CorrelationContext,
        req: PayRequest,
    ) -> Result<PaymentOutcome, ApiError> {
        validate_request(&req)?;

        let txn = Transaction::open(req.customer_id, req.bank_id, req.amount);
        tracing::info!(
            payment_id = %txn.id,
            customer_id = %txn.customer_id,
            bank_id = %txn.bank_id,
            amount = %txn.amount,
            status = "created",
            "payment_created"
        );

        tokio::time::sleep(self.decisions.processing_delay()).await;

        let outcome = if self.decisions.escalate() {
            self.fraud_path(context, txn).await
        } else {
            self.direct_path(txn)
        };
        Ok(outcome)
    }

    fn direct_path(&self, txn: Transaction) -> PaymentOutcome {
        match self.decisions.direct_failure() {
            Some(reason) => fail(txn, &reason),
            None => settle(txn),
        }
    }

    async fn fraud_path(&self, context: &CorrelationContext, txn: Transaction) -> PaymentOutcome {
        let ticket = CreateTicketRequest {
            trace_id: context.trace_id().to_string(),
            payment_id: txn.id,
            customer_id: txn.customer_id.clone(),
            bank_id: txn.bank_id.clone(),
            amount: txn.amount,
            reason: SUSPECTED_FRAUD_REASON.to_string(),
        };

        let issue_key = match self.tickets.create_suspected_fraud_ticket(context, &ticket).await {
            Ok(key) => key,
            Err(e) => {
                tracing::error!(
                    payment_id = %txn.id,
                    customer_id = %txn.customer_id,
                    bank_id = %txn.bank_id,
                    amount = %txn.amount,
                    collaborator = e.collaborator(),
                    status = "jira_create_error",
                    reason = %e,
                    "jira_create_error"
                );
                String::new()
            }
        };

        let mut case = FraudCase::open(txn.id, issue_key);
        let check = FraudCheckRequest {
            trace_id: context.trace_id().to_string(),
            payment_id: case.payment_id,
            customer_id: txn.customer_id.clone(),
            bank_id: txn.bank_id.clone(),
            amount: txn.amount,
            issue_key: case.ticket_key.clone(),
        };

        match self.fraud.check_fraud(context, &check).await {
            Ok(verdict) => case.record_verdict(verdict),
            Err(e) => tracing::error!(
                payment_id = %txn.id,
                customer_id = %txn.customer_id,
                bank_id = %txn.bank_id,
                amount = %txn.amount,
                collaborator = e.collaborator(),
                status = "fraud_call_error",
                reason = %e,
                "fraud_call_error"
            ),
        }

        if case.clears_payment() {
            settle(txn)
        } else {
            fail(txn, SUSPECTED_FRAUD_REASON)
        }
    }
}

fn settle(txn: Transaction) -> PaymentOutcome {
    tracing::info!(
        payment_id = %txn.id,
        customer_id = %txn.customer_id,
        bank_id = %txn.bank_id,
        amount = %txn.amount,
        status = "settled",
        "payment_settled"
    );
    let name = bank_name(&txn.bank_id).to_string();
    txn.settle(&name)
}

fn fail(txn: Transaction, reason: &str) -> PaymentOutcome {
    tracing::error!(
        payment_id = %txn.id,
        customer_id = %txn.customer_id,
        bank_id = %txn.bank_id,
        amount = %txn.amount,
        status = "failed",
        reason,
        "payment_failed"
    );
    txn.fail(reason)
}

fn validate_request(req: &PayRequest) -> Result<(), ApiError> {
    if req.amount <= Decimal::ZERO {
        return Err(ApiError::InvalidRequest("amount must be > 0".to_string()));
    }
    if req.customer_id.trim().is_empty() {
        return Err(ApiError::InvalidRequest("customer_id is required".to_string()));
    }
    if req.bank_id.trim().is_empty() {
        return Err(ApiError::InvalidRequest("bank_id is required".to_string()));
    }
    Ok(())
}
