use anyhow::Context;
use clap::Parser;
use mergington_activities::core::ConfigProvider;
use mergington_activities::utils::{logger, validation::Validate};
use mergington_activities::{build_router, AppState, CliConfig, InMemoryRoster, ServerConfig};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    let config = match ServerConfig::load(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_logger(config.verbose, config.log_format);

    tracing::info!("🚀 Starting mergington-activities");
    if config.verbose {
        tracing::debug!("Server config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let seed = config.seed();
    let activity_count = seed.len();
    let roster =
        InMemoryRoster::from_seed(seed).context("failed to build activity roster from seed")?;
    tracing::info!("📋 Loaded {} activities", activity_count);

    let app = build_router(AppState::new(Arc::new(roster)), config.static_dir());

    let listener = TcpListener::bind((config.host(), config.port()))
        .await
        .with_context(|| format!("failed to bind {}:{}", config.host(), config.port()))?;
    tracing::info!("🌐 Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl-C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("🛑 Shutdown signal received");
}
