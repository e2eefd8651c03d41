use crate::decision::DecisionRates;
use crate::error::ClientError;
use std::time::Duration;

/// Settings shared by every service binary. Each binary reads the subset it
/// needs; unset or unparsable variables fall back to the defaults below.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub fraud_service_url: String,
    pub ticket_service_url: String,
    pub auth_service_url: String,
    pub payment_service_url: String,
    pub collaborator_timeout: Duration,
    pub upstream_timeout: Duration,
    pub rates: DecisionRates,
    pub jira: JiraConfig,
    pub poll_interval: Duration,
    pub poll_enabled: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = DecisionRates::default();
        Self {
            bind_addr: env_or("BIND_ADDR", "0.0.0.0:8000"),
            fraud_service_url: env_or("FRAUD_SERVICE_URL", "http://fraud-service:8000"),
            ticket_service_url: env_or("JIRA_POLLER_URL", "http://jira-poller:8000"),
            auth_service_url: env_or("AUTH_SERVICE_URL", "http://auth-service:8000"),
            payment_service_url: env_or("PAYMENT_SERVICE_URL", "http://payment-service:8000"),
            collaborator_timeout: Duration::from_millis(env_parse("COLLABORATOR_TIMEOUT_MS", 10_000)),
            upstream_timeout: Duration::from_millis(env_parse("UPSTREAM_TIMEOUT_MS", 15_000)),
            rates: DecisionRates {
                escalate: env_rate("PAYMENT_SUSPECTED_FRAUD_RATE", defaults.escalate),
                direct_fail: env_rate("PAYMENT_FAIL_RATE", defaults.direct_fail),
                fraud_confirm: env_rate("FRAUD_CONFIRM_RATE", defaults.fraud_confirm),
                auth_fail: env_rate("AUTH_FAIL_RATE", defaults.auth_fail),
                delay_min: Duration::from_millis(env_parse("PROCESSING_DELAY_MIN_MS", 50)),
                delay_max: Duration::from_millis(env_parse("PROCESSING_DELAY_MAX_MS", 250)),
            },
            jira: JiraConfig::from_env(),
            poll_interval: Duration::from_secs(env_parse("JIRA_POLL_INTERVAL_SECONDS", 1800u64).max(1)),
            poll_enabled: env_flag("JIRA_POLL_ENABLED", true),
        }
    }
}

#[derive(Debug, Clone)]
pub struct JiraConfig {
    pub base_url: String,
    pub email: String,
    pub api_token: String,
    pub project_key: String,
    pub issue_type: String,
    pub timeout: Duration,
}

impl JiraConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env_or("JIRA_BASE_URL", ""),
            email: env_or("JIRA_EMAIL", ""),
            api_token: env_or("JIRA_API_TOKEN", ""),
            project_key: env_or("JIRA_PROJECT_KEY", "PER"),
            issue_type: env_or("JIRA_ISSUE_TYPE", "Task"),
            timeout: Duration::from_millis(env_parse("JIRA_TIMEOUT_MS", 15_000)),
        }
    }

    /// Fails with every missing variable named, not just the first.
    pub fn validate(&self) -> Result<(), ClientError> {
        let missing: Vec<&str> = [
            ("JIRA_BASE_URL", &self.base_url),
            ("JIRA_PROJECT_KEY", &self.project_key),
            ("JIRA_EMAIL", &self.email),
            ("JIRA_API_TOKEN", &self.api_token),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            return Ok(());
        }
        Err(ClientError::ConfigMissing {
            collaborator: "jira",
            detail: format!("Missing Jira config: {}", missing.join(", ")),
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|s| s.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn env_rate(name: &str, default: f64) -> f64 {
    let rate = env_parse(name, default);
    if rate.is_finite() {
        rate.clamp(0.0, 1.0)
    } else {
        default
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    std::env::var(name)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "y"))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jira() -> JiraConfig {
        JiraConfig {
            base_url: "https://example.atlassian.net".to_string(),
            email: "ops@example.com".to_string(),
            api_token: "token".to_string(),
            project_key: "PER".to_string(),
            issue_type: "Task".to_string(),
            timeout: Duration::from_secs(15),
        }
    }

    #[test]
    fn complete_jira_config_validates() {
        assert!(jira().validate().is_ok());
    }

    #[test]
    fn validation_names_every_missing_variable() {
        let cfg = JiraConfig {
            base_url: String::new(),
            api_token: String::new(),
            ..jira()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.is_permanent());
        let msg = err.to_string();
        assert!(msg.contains("JIRA_BASE_URL"));
        assert!(msg.contains("JIRA_API_TOKEN"));
        assert!(!msg.contains("JIRA_EMAIL"));
    }

    #[test]
    fn defaults_are_sane() {
        let cfg = AppConfig::from_env();
        assert!(!cfg.bind_addr.is_empty());
        assert!((0.0..=1.0).contains(&cfg.rates.escalate));
        assert!(cfg.collaborator_timeout > Duration::ZERO);
    }
}
