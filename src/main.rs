//! User Service - 用户管理 REST API
//!
//! 启动流程: 加载配置 → 初始化日志 → 创建仓储 → 启动 HTTP 服务器

use std::sync::Arc;

use user_service::application::UserRepositoryPort;
use user_service::config::{load_config, print_config, LogConfig};
use user_service::infrastructure::http::{AppState, HttpServer, ServerConfig};
use user_service::infrastructure::memory::InMemoryUserRepository;

fn init_tracing(log: &LogConfig) {
    let log_filter = format!(
        "{},user_service={},tower_http=debug",
        log.level, log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received shutdown signal"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for ctrl-c"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("User Service - 用户管理 REST API");
    print_config(&config);

    // 创建 Repository 适配器
    let user_repo: Arc<dyn UserRepositoryPort> = if config.store.seed_demo_users {
        InMemoryUserRepository::seeded().arc()
    } else {
        InMemoryUserRepository::new().arc()
    };

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_max_body_bytes(config.server.max_body_bytes);
    let server = HttpServer::new(server_config, AppState::new(user_repo));

    // 启动服务器（带优雅关闭）
    server.run_with_shutdown(shutdown_signal()).await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
