//! Quill - 创意写作工作室后端
//!
//! - Domain: generation/, work/ (Bounded Contexts)
//! - Application: commands, queries, ports
//! - Infrastructure: http, adapters, persistence

use std::sync::Arc;

use quill::config::{load_config, print_config};
use quill::infrastructure::adapters::{HttpGeminiClient, HttpGeminiClientConfig};
// use quill::infrastructure::adapters::FakeGenerationClient;
use quill::infrastructure::http::{AppState, HttpServer, ServerConfig};
use quill::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqlitePromptRepository, SqliteWorkRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},quill={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Quill - 创意写作工作室后端");
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    // 创建 Repository 适配器
    let work_repo = Arc::new(SqliteWorkRepository::new(pool.clone()));
    let prompt_repo = Arc::new(SqlitePromptRepository::new(pool.clone()));

    // 创建 Gemini HTTP 客户端
    let engine_config = HttpGeminiClientConfig {
        base_url: config.generation.base_url.clone(),
        api_key: config.generation.api_key.clone(),
        model: config.generation.model.clone(),
        timeout_secs: config.generation.timeout_secs,
    };
    let generation_engine = Arc::new(
        HttpGeminiClient::new(engine_config)
            .map_err(|e| anyhow::anyhow!("Failed to create generation client: {}", e))?,
    );

    // // 创建 Fake 生成客户端（测试用，始终返回固定文本）
    // let generation_engine = Arc::new(FakeGenerationClient::with_response("fixed output"));

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(work_repo, prompt_repo, generation_engine);

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

    tracing::info!("Server shutdown complete");

    Ok(())
}
