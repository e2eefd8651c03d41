use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reason reported for every payment that went through fraud review and did
/// not come back cleared.
pub const SUSPECTED_FRAUD_REASON: &str = "Suspected Fraud";

pub const FAIL_REASONS: [&str; 4] = [
    "Request timeout",
    "Insufficient funds",
    "Invalid recipient",
    "incorrect card details",
];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PayRequest {
    pub customer_id: String,
    pub bank_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// Payment request as sent by a logged-in browser; the customer comes from
/// the session.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionPayRequest {
    pub bank_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

impl SessionPayRequest {
    pub fn for_customer(self, customer_id: String) -> PayRequest {
        PayRequest {
            customer_id,
            bank_id: self.bank_id,
            amount: self.amount,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Settled,
    Failed,
}

/// A payment attempt that has been accepted but not yet decided.
///
/// The only way out of the pending state is [`Transaction::settle`] or
/// [`Transaction::fail`], both of which consume the transaction, so each
/// attempt reaches exactly one terminal outcome.
#[derive(Debug)]
pub struct Transaction {
    pub id: Uuid,
    pub customer_id: String,
    pub bank_id: String,
    pub amount: Decimal,
}

impl Transaction {
    pub fn open(customer_id: String, bank_id: String, amount: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_id,
            bank_id,
            amount,
        }
    }

    pub fn settle(self, bank_name: &str) -> PaymentOutcome {
        PaymentOutcome::Settled {
            payment_id: self.id,
            bank_id: self.bank_id,
            bank_name: bank_name.to_string(),
        }
    }

    pub fn fail(self, reason: impl Into<String>) -> PaymentOutcome {
        PaymentOutcome::Failed {
            payment_id: self.id,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    Settled {
        payment_id: Uuid,
        bank_id: String,
        bank_name: String,
    },
    Failed {
        payment_id: Uuid,
        reason: String,
    },
}

impl PaymentOutcome {
    pub fn payment_id(&self) -> Uuid {
        match self {
            Self::Settled { payment_id, .. } | Self::Failed { payment_id, .. } => *payment_id,
        }
    }

    pub fn status(&self) -> PaymentStatus {
        match self {
            Self::Settled { .. } => PaymentStatus::Settled,
            Self::Failed { .. } => PaymentStatus::Failed,
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Settled { .. } => None,
            Self::Failed { reason, .. } => Some(reason),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayResponse {
    pub ok: bool,
    pub payment_id: Uuid,
    pub status: PaymentStatus,
    pub bank_id: String,
    pub bank_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentFailedBody {
    pub error: String,
    pub reason: String,
    pub payment_id: Uuid,
}
