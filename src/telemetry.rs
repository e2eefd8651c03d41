use tracing_subscriber::EnvFilter;

/// Identity stamped on every request span.
#[derive(Debug, Clone)]
pub struct ServiceInfo {
    pub service: String,
    pub env: String,
    pub version: String,
}

impl ServiceInfo {
    pub fn from_env(default_service: &str) -> Self {
        Self {
            service: std::env::var("DD_SERVICE").unwrap_or_else(|_| default_service.to_string()),
            env: std::env::var("DD_ENV").unwrap_or_else(|_| "dev".to_string()),
            version: std::env::var("DD_VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string()),
        }
    }
}

/// Installs the global subscriber. `RUST_LOG` controls filtering (default
/// `info`); `LOG_FORMAT=json` switches to one JSON object per line with the
/// enclosing request span's fields attached.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
