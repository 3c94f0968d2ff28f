//! DramaBox Proxy - 短剧 API 代理服务
//!
//! - Domain: drama/, status/ (Bounded Contexts)
//! - Application: commands, queries, ports
//! - Infrastructure: http, persistence, adapters

use std::sync::Arc;

use dramabox_proxy::config::{load_config, print_config, AppConfig};
use dramabox_proxy::infrastructure::adapters::{
    HttpDramaBoxClient, HttpDramaBoxClientConfig, HttpTokenClient, HttpTokenClientConfig,
};
use dramabox_proxy::infrastructure::http::{AppState, HttpServer, ServerConfig};
use dramabox_proxy::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteStatusCheckRepository,
};

/// 初始化日志
fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},dramabox_proxy={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("DramaBox Proxy");
    print_config(&config);

    // 确保数据目录存在
    if config.database.url.is_none() {
        tokio::fs::create_dir_all(&config.database.dir).await?;
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    // 创建 Repository 适配器
    let status_repo = Arc::new(SqliteStatusCheckRepository::new(pool.clone()));

    // 创建上游客户端
    let token_client = Arc::new(HttpTokenClient::new(
        HttpTokenClientConfig::new(&config.token.url).with_timeout(config.token.timeout_secs),
    )?);
    let dramabox_client = Arc::new(HttpDramaBoxClient::new(
        HttpDramaBoxClientConfig::new(&config.upstream.base_url)
            .with_timeout(config.upstream.timeout_secs),
    )?);

    // 创建 HTTP 服务器
    let mut server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_cors_origins(config.cors.origin_list());
    if config.server.static_files.enabled {
        server_config = server_config.with_static_dir(&config.server.static_files.dir);
    }

    let state = AppState::new(
        token_client,
        dramabox_client,
        status_repo,
        config.client.clone(),
    );

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}
