//! BCR Form server
//!
//! Reads configuration from `BCR_FORM__*` environment variables (and `.env`),
//! then serves the API and static pages until Ctrl+C.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use bcr_form::app::{self, StartupError};
use bcr_form::config::AppConfig;
use bcr_form::ports::RateLimiter;
use bcr_form::telemetry;

const PURGE_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    telemetry::init_tracing(&config.server);
    config.validate()?;

    let limiter = app::rate_limiter(&config.rate_limit);
    if let Some(limiter) = limiter.clone() {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(PURGE_INTERVAL);
            loop {
                interval.tick().await;
                let removed = limiter.purge_expired().await;
                if removed > 0 {
                    let remaining = limiter.tracked_keys().await;
                    tracing::debug!(removed, remaining, "Purged expired rate limit windows");
                }
            }
        });
    }

    let scorer = app::security_scorer(&config.ai)?;
    let router = app::build_router(
        &config,
        scorer,
        limiter.map(|l| Arc::new(l) as Arc<dyn RateLimiter>),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        static_dir = %config.server.static_dir.display(),
        "BCR form server listening"
    );

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutdown signal received");
}
