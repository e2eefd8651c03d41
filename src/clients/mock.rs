use crate::clients::{FraudGateway, TicketManager};
use crate::domain::context::CorrelationContext;
use crate::domain::fraud::{FraudCheckRequest, FraudDecision, FraudVerdict};
use crate::domain::ticket::CreateTicketRequest;
use crate::error::ClientError;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBehavior {
    Succeed,
    ConfigMissing,
    Reject,
    Unreachable,
}

impl MockBehavior {
    fn outcome(self, collaborator: &'static str) -> Result<(), ClientError> {
        match self {
            Self::Succeed => Ok(()),
            Self::ConfigMissing => Err(ClientError::ConfigMissing {
                collaborator,
                detail: "mock config missing".to_string(),
            }),
            Self::Reject => Err(ClientError::UpstreamRejected {
                collaborator,
                status: 502,
                body: "mock rejection".to_string(),
            }),
            Self::Unreachable => Err(ClientError::Transport {
                collaborator,
                detail: "mock connection refused".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TicketCall {
    Create {
        trace_id: String,
        request: CreateTicketRequest,
    },
    Comment {
        trace_id: String,
        issue_key: String,
        comment: String,
    },
}

/// In-memory ticket manager that records every call it receives.
#[derive(Debug)]
pub struct MockTicketManager {
    pub create_behavior: MockBehavior,
    pub comment_behavior: MockBehavior,
    pub issue_key: String,
    calls: Mutex<Vec<TicketCall>>,
}

impl MockTicketManager {
    pub fn new(create_behavior: MockBehavior, comment_behavior: MockBehavior) -> Self {
        Self {
            create_behavior,
            comment_behavior,
            issue_key: "PER-1".to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding() -> Self {
        Self::new(MockBehavior::Succeed, MockBehavior::Succeed)
    }

    pub fn calls(&self) -> Vec<TicketCall> {
        self.calls.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    fn record(&self, call: TicketCall) {
        self.calls.lock().unwrap_or_else(|p| p.into_inner()).push(call);
    }
}

#[async_trait::async_trait]
impl TicketManager for MockTicketManager {
    fn name(&self) -> &'static str {
        "mock-tickets"
    }

    async fn create_suspected_fraud_ticket(
        &self,
        context: &CorrelationContext,
        request: &CreateTicketRequest,
    ) -> Result<String, ClientError> {
        self.record(TicketCall::Create {
            trace_id: context.trace_id().to_string(),
            request: request.clone(),
        });
        self.create_behavior.outcome(self.name())?;
        Ok(self.issue_key.clone())
    }

    async fn add_comment(
        &self,
        context: &CorrelationContext,
        issue_key: &str,
        comment: &str,
    ) -> Result<(), ClientError> {
        self.record(TicketCall::Comment {
            trace_id: context.trace_id().to_string(),
            issue_key: issue_key.to_string(),
            comment: comment.to_string(),
        });
        self.comment_behavior.outcome(self.name())
    }
}

/// Fraud gateway double returning a fixed verdict.
#[derive(Debug)]
pub struct MockFraudGateway {
    pub behavior: MockBehavior,
    pub fraudulent: bool,
    calls: Mutex<Vec<(String, FraudCheckRequest)>>,
}

impl MockFraudGateway {
    pub fn verdict(fraudulent: bool) -> Self {
        Self {
            behavior: MockBehavior::Succeed,
            fraudulent,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            fraudulent: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// `(trace_id, request)` for every check received.
    pub fn calls(&self) -> Vec<(String, FraudCheckRequest)> {
        self.calls.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }
}

#[async_trait::async_trait]
impl FraudGateway for MockFraudGateway {
    fn name(&self) -> &'static str {
        "mock-fraud"
    }

    async fn check_fraud(
        &self,
        context: &CorrelationContext,
        request: &FraudCheckRequest,
    ) -> Result<FraudVerdict, ClientError> {
        self.calls
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push((context.trace_id().to_string(), request.clone()));
        self.behavior.outcome(self.name())?;
        Ok(FraudDecision {
            fraudulent: self.fraudulent,
            reason: "mock verdict".to_string(),
        }
        .into())
    }
}
