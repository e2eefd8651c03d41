use payment_workflow::clients::ticket_http::HttpTicketClient;
use payment_workflow::config::AppConfig;
use payment_workflow::decision::RandomDecisionSource;
use payment_workflow::http::routes::fraud_router;
use payment_workflow::service::fraud_service::FraudService;
use payment_workflow::telemetry::{self, ServiceInfo};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let cfg = AppConfig::from_env();
    let info = ServiceInfo::from_env("fraud-service");

    let fraud_service = FraudService {
        decisions: Arc::new(RandomDecisionSource::new(cfg.rates)),
        tickets: Arc::new(HttpTicketClient::new(
            cfg.ticket_service_url.clone(),
            cfg.collaborator_timeout,
        )),
    };

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("fraud-service listening on {}", cfg.bind_addr);
    axum::serve(listener, fraud_router(fraud_service, info)).await?;
    Ok(())
}
