//! Service entry point: build the pipeline, then serve the API.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use mediguide::api::api_router;
use mediguide::config::{default_log_filter, Settings, APP_NAME, APP_VERSION};
use mediguide::state::ServiceState;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_filter())),
        )
        .init();

    let settings = Settings::from_env();
    tracing::info!(
        version = APP_VERSION,
        bind = %settings.bind_addr,
        "{APP_NAME} starting"
    );

    // The pipeline uses a blocking HTTP client and does file I/O, so it
    // is built before the async runtime takes over.
    let service = Arc::new(ServiceState::init(&settings));
    tracing::info!(
        classifier = service.classifier_kind(),
        ai_enabled = service.ai_enabled(),
        "pipeline ready"
    );

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(serve(service, settings))
}

async fn serve(
    service: Arc<ServiceState>,
    settings: Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = api_router(service, &settings);

    let listener = tokio::net::TcpListener::bind(&settings.bind_addr).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "API server listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install shutdown handler: {e}");
        return;
    }
    tracing::info!("shutdown signal received");
}
