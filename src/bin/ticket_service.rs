use payment_workflow::clients::jira::JiraClient;
use payment_workflow::config::AppConfig;
use payment_workflow::http::routes::ticket_router;
use payment_workflow::service::ticket_poller::TicketPoller;
use payment_workflow::telemetry::{self, ServiceInfo};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let cfg = AppConfig::from_env();
    let info = ServiceInfo::from_env("jira-poller");
    let jira = JiraClient::new(cfg.jira.clone());

    if cfg.poll_enabled {
        let poller = TicketPoller {
            jira: jira.clone(),
            interval: cfg.poll_interval,
        };
        tokio::spawn(poller.run());
    } else {
        tracing::info!(
            status = "poll_disabled",
            reason = "JIRA_POLL_ENABLED=false",
            "poll_disabled"
        );
    }

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("ticket-service listening on {}", cfg.bind_addr);
    axum::serve(listener, ticket_router(Arc::new(jira), info)).await?;
    Ok(())
}
