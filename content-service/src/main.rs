use content_service::config::ContentConfig;
use content_service::services::init_metrics;
use content_service::Application;
use service_core::error::AppError;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize metrics recorder (must be before any metrics are recorded)
    init_metrics();

    let config = ContentConfig::load()?;

    init_tracing(
        "content-service",
        &config.log_level,
        config.otlp_endpoint.as_deref(),
    );

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        backend = ?config.store.backend,
        "Starting content service"
    );

    let application = Application::build(config).await?;
    application.run_until_stopped().await?;

    tracing::info!("Content service stopped");
    Ok(())
}
