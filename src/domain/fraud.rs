use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const FRAUD_REASONS: [&str; 5] = [
    "incorrect credit card",
    "incorrect PIN number",
    "transaction above limit",
    "duplicate transaction",
    "suspicious transaction",
];

pub const CONFIRMED_COMMENT: &str = "Confirmed fraudulent activity. Please escalate to Product Team";
pub const CLEARED_COMMENT: &str = "Transaction not fraudulent, please complete it";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudCheckRequest {
    pub trace_id: String,
    pub payment_id: Uuid,
    pub customer_id: String,
    pub bank_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub issue_key: String,
}

/// Raw output of the fraud decision function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FraudDecision {
    pub fraudulent: bool,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FraudVerdict {
    pub fraudulent: bool,
    pub reason: String,
    pub comment: String,
}

impl From<FraudDecision> for FraudVerdict {
    fn from(decision: FraudDecision) -> Self {
        let comment = if decision.fraudulent {
            CONFIRMED_COMMENT
        } else {
            CLEARED_COMMENT
        };
        Self {
            fraudulent: decision.fraudulent,
            reason: decision.reason,
            comment: comment.to_string(),
        }
    }
}

/// Review record for a transaction that was escalated.
///
/// `ticket_key` is empty when the ticket could not be opened, and `verdict`
/// stays `None` when the fraud gateway could not be reached.
#[derive(Debug, Clone)]
pub struct FraudCase {
    pub payment_id: Uuid,
    pub ticket_key: String,
    verdict: Option<FraudVerdict>,
}

impl FraudCase {
    pub fn open(payment_id: Uuid, ticket_key: String) -> Self {
        Self {
            payment_id,
            ticket_key,
            verdict: None,
        }
    }

    /// Records the gateway's verdict. Only the first verdict is kept.
    pub fn record_verdict(&mut self, verdict: FraudVerdict) {
        if self.verdict.is_none() {
            self.verdict = Some(verdict);
        }
    }

    /// Fail-closed: only an explicit not-fraudulent verdict clears the payment.
    pub fn clears_payment(&self) -> bool {
        matches!(&self.verdict, Some(v) if !v.fraudulent)
    }
}
