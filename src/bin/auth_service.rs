use payment_workflow::config::AppConfig;
use payment_workflow::decision::RandomDecisionSource;
use payment_workflow::http::routes::auth_router;
use payment_workflow::service::auth_service::AuthService;
use payment_workflow::telemetry::{self, ServiceInfo};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let cfg = AppConfig::from_env();
    let info = ServiceInfo::from_env("auth-service");
    let auth_service = AuthService {
        decisions: Arc::new(RandomDecisionSource::new(cfg.rates)),
    };

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("auth-service listening on {}", cfg.bind_addr);
    axum::serve(listener, auth_router(auth_service, info)).await?;
    Ok(())
}
