use anyhow::{Context, Result};
use duo_backend::{create_app, BackendConfig};
use duo_shared::{load_config, shutdown::shutdown_signal, telemetry::init_tracing};
use tracing::info;

fn main() -> Result<()> {
    // 初始化日志
    init_tracing();

    // 加载配置
    let config: BackendConfig = load_config().context("Failed to load backend configuration")?;
    info!("Configuration loaded successfully");

    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.server.workers)
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?
        .block_on(run(config))
}

async fn run(config: BackendConfig) -> Result<()> {
    let app = create_app();

    let bind_address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    info!("Service B listening on {}", bind_address);
    info!("  - Health check: http://{}/health", bind_address);
    info!("  - Process: http://{}/process", bind_address);
    info!("  - Internal status: http://{}/internal/status", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Backend server error")?;

    info!("Service B stopped");
    Ok(())
}
