use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTicketRequest {
    pub trace_id: String,
    pub payment_id: Uuid,
    pub customer_id: String,
    pub bank_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub reason: String,
}

impl CreateTicketRequest {
    pub fn summary(&self) -> String {
        format!("Suspected Fraud {}", self.trace_id)
    }

    /// Lines rendered into the ticket description, one paragraph each.
    pub fn description_lines(&self) -> Vec<String> {
        vec![
            format!("Trace ID: {}", self.trace_id),
            format!("Payment ID: {}", self.payment_id),
            format!("Customer ID: {}", self.customer_id),
            format!("Bank: {}", self.bank_id),
            format!("Amount: {}", self.amount),
            format!("Reason: {}", self.reason),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTicketResponse {
    pub issue_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRequest {
    pub issue_key: String,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub ok: bool,
}
