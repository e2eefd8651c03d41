use crate::clients::jira::JiraClient;
use crate::domain::context::CorrelationContext;
use crate::error::ClientError;
use std::time::Duration;
use tracing::Instrument;

const MAX_RESULTS: u32 = 5;
const MIN_INTERVAL: Duration = Duration::from_secs(1);

/// Periodically counts open suspected-fraud tickets in Jira.
#[derive(Clone)]
pub struct TicketPoller {
    pub jira: JiraClient,
    pub interval: Duration,
}

impl TicketPoller {
    /// Returns immediately when Jira is not configured; otherwise loops
    /// forever. Tick failures are logged and never end the loop.
    pub async fn run(self) {
        if let Err(e) = self.jira.config.validate() {
            tracing::warn!(
                status = "poll_disabled",
                reason = %e,
                "poll_disabled_missing_jira_config"
            );
            return;
        }

        loop {
            let context = CorrelationContext::new_root();
            let span = tracing::info_span!(
                "jira.poll",
                trace_id = context.trace_id(),
                span_id = context.span_id()
            );
            async {
                match self.tick().await {
                    Ok(count) => tracing::info!(status = "jira_poll_ok", count, "jira_poll_ok"),
                    Err(e) => tracing::error!(status = "jira_poll_error", reason = %e, "jira_poll_error"),
                }
            }
            .instrument(span)
            .await;
            tokio::time::sleep(self.sleep_interval()).await;
        }
    }

    /// Configured interval, never shorter than one second.
    pub fn sleep_interval(&self) -> Duration {
        self.interval.max(MIN_INTERVAL)
    }

    pub async fn tick(&self) -> Result<usize, ClientError> {
        self.jira.count_suspected_fraud(MAX_RESULTS).await
    }
}
