//! papla-mcp - Papla Media TTS MCP 服务
//!
//! stdout 承载协议消息，日志输出到 stderr

use std::sync::Arc;

use papla_mcp::config::{load_config, print_config};
use papla_mcp::infrastructure::adapters::{FileAudioOutput, HttpPaplaClient, HttpPaplaClientConfig};
use papla_mcp::infrastructure::mcp::{AppState, McpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // 初始化日志
    let log_filter = format!("{},papla_mcp={}", config.log.level, config.log.level);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("papla-mcp v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 创建 Papla 客户端
    let client_config =
        HttpPaplaClientConfig::new(config.api_key.clone()).with_base_url(config.api_base_url.clone());
    let papla = Arc::new(HttpPaplaClient::new(client_config)?);

    // 创建音频输出
    let output = Arc::new(FileAudioOutput::new(&config.output_dir));

    let server = McpServer::new(AppState::new(papla, output));

    server.run_stdio().await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
