use payment_workflow::clients::fraud_http::HttpFraudClient;
use payment_workflow::clients::ticket_http::HttpTicketClient;
use payment_workflow::config::AppConfig;
use payment_workflow::decision::RandomDecisionSource;
use payment_workflow::http::routes::payment_router;
use payment_workflow::service::payment_service::PaymentService;
use payment_workflow::telemetry::{self, ServiceInfo};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let cfg = AppConfig::from_env();
    let info = ServiceInfo::from_env("payment-service");

    let payment_service = PaymentService {
        tickets: Arc::new(HttpTicketClient::new(
            cfg.ticket_service_url.clone(),
            cfg.collaborator_timeout,
        )),
        fraud: Arc::new(HttpFraudClient::new(
            cfg.fraud_service_url.clone(),
            cfg.collaborator_timeout,
        )),
        decisions: Arc::new(RandomDecisionSource::new(cfg.rates)),
    };

    let app = payment_router(payment_service, info);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("payment-service listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
