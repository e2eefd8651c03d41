use payment_workflow::config::AppConfig;
use payment_workflow::http::routes::frontend_router;
use payment_workflow::service::frontend::FrontendService;
use payment_workflow::service::session::SessionStore;
use payment_workflow::telemetry::{self, ServiceInfo};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let cfg = AppConfig::from_env();
    let info = ServiceInfo::from_env("web-frontend");
    let frontend = FrontendService::new(
        cfg.auth_service_url.clone(),
        cfg.payment_service_url.clone(),
        cfg.upstream_timeout,
        SessionStore::new(),
    );

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("web-frontend listening on {}", cfg.bind_addr);
    axum::serve(listener, frontend_router(frontend, info)).await?;
    Ok(())
}
