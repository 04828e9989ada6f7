use anyhow::{Context, Result};
use duo_api_gateway::{create_app, AppState, GatewayConfig};
use duo_shared::{load_config, shutdown::shutdown_signal, telemetry::init_tracing};
use tracing::info;

fn main() -> Result<()> {
    // 初始化日志
    init_tracing();

    // 加载配置
    let config: GatewayConfig = load_config().context("Failed to load gateway configuration")?;
    info!("Configuration loaded successfully");

    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.server.workers)
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?
        .block_on(run(config))
}

async fn run(config: GatewayConfig) -> Result<()> {
    // 创建应用状态
    let app_state = AppState::new(config).context("Failed to create Service B client")?;
    info!(
        "Service B: {} (timeout {}s)",
        app_state.backend.base_url(),
        app_state.config.backend_timeout_secs
    );

    let bind_address = app_state.config.server.bind_address();

    // 构建应用
    let app = create_app(app_state);

    // 启动服务器
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    info!("API Gateway listening on {}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("API Gateway server error")?;

    info!("API Gateway stopped");
    Ok(())
}
