use crate::domain::auth::AUTH_FAIL_REASONS;
use crate::domain::fraud::{FraudDecision, FRAUD_REASONS};
use crate::domain::payment::FAIL_REASONS;
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

/// Every simulated business decision in the system, one method per decision
/// point. Services never draw random numbers themselves.
pub trait DecisionSource: Send + Sync {
    /// Artificial processing latency applied before a payment is decided.
    fn processing_delay(&self) -> Duration;

    /// Whether a payment is routed through fraud review.
    fn escalate(&self) -> bool;

    /// Failure reason for a payment on the direct path, if it fails.
    fn direct_failure(&self) -> Option<String>;

    fn fraud_verdict(&self) -> FraudDecision;

    /// Rejection reason for a login attempt, if it is rejected.
    fn auth_failure(&self) -> Option<String>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionRates {
    pub escalate: f64,
    pub direct_fail: f64,
    pub fraud_confirm: f64,
    pub auth_fail: f64,
    pub delay_min: Duration,
    pub delay_max: Duration,
}

impl Default for DecisionRates {
    fn default() -> Self {
        Self {
            escalate: 0.05,
            direct_fail: 0.15,
            fraud_confirm: 0.35,
            auth_fail: 0.12,
            delay_min: Duration::from_millis(50),
            delay_max: Duration::from_millis(250),
        }
    }
}

/// Reference behaviour: independent uniform draws per decision.
#[derive(Debug, Clone)]
pub struct RandomDecisionSource {
    rates: DecisionRates,
}

impl RandomDecisionSource {
    pub fn new(rates: DecisionRates) -> Self {
        Self { rates }
    }
}

fn draw(p: f64) -> bool {
    if p.is_nan() {
        return false;
    }
    rand::thread_rng().gen_bool(p.clamp(0.0, 1.0))
}

fn pick(reasons: &[&str]) -> String {
    reasons
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or_default()
        .to_string()
}

impl DecisionSource for RandomDecisionSource {
    fn processing_delay(&self) -> Duration {
        let (lo, hi) = (self.rates.delay_min, self.rates.delay_max);
        if hi <= lo {
            return lo;
        }
        rand::thread_rng().gen_range(lo..=hi)
    }

    fn escalate(&self) -> bool {
        draw(self.rates.escalate)
    }

    fn direct_failure(&self) -> Option<String> {
        draw(self.rates.direct_fail).then(|| pick(&FAIL_REASONS))
    }

    fn fraud_verdict(&self) -> FraudDecision {
        FraudDecision {
            fraudulent: draw(self.rates.fraud_confirm),
            reason: pick(&FRAUD_REASONS),
        }
    }

    fn auth_failure(&self) -> Option<String> {
        draw(self.rates.auth_fail).then(|| pick(&AUTH_FAIL_REASONS))
    }
}

/// Deterministic decisions for tests and local demos.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDecisionSource {
    pub escalate: bool,
    pub direct_failure: Option<String>,
    pub fraudulent: bool,
    pub fraud_reason: String,
    pub auth_failure: Option<String>,
}

impl ScriptedDecisionSource {
    /// Direct path, always settles.
    pub fn settle() -> Self {
        Self::default()
    }

    pub fn decline(reason: &str) -> Self {
        Self {
            direct_failure: Some(reason.to_string()),
            ..Self::default()
        }
    }

    /// Fraud path with a fixed verdict.
    pub fn escalate_with_verdict(fraudulent: bool) -> Self {
        Self {
            escalate: true,
            fraudulent,
            fraud_reason: FRAUD_REASONS[4].to_string(),
            ..Self::default()
        }
    }
}

impl DecisionSource for ScriptedDecisionSource {
    fn processing_delay(&self) -> Duration {
        Duration::ZERO
    }

    fn escalate(&self) -> bool {
        self.escalate
    }

    fn direct_failure(&self) -> Option<String> {
        self.direct_failure.clone()
    }

    fn fraud_verdict(&self) -> FraudDecision {
        FraudDecision {
            fraudulent: self.fraudulent,
            reason: self.fraud_reason.clone(),
        }
    }

    fn auth_failure(&self) -> Option<String> {
        self.auth_failure.clone()
    }
}
