//! # SmartPlanner Bot Main Entry Point
//!
//! Initializes logging, loads configuration, opens the schedule document and
//! dialogue storage, then runs the Telegram bot next to the health server.

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use smart_planner_bot::bot::commands::Command;
use smart_planner_bot::bot::dialogue::build_storage;
use smart_planner_bot::bot::handlers::{schema, Planner};
use smart_planner_bot::config::Config;
use smart_planner_bot::database::StoreManager;
use smart_planner_bot::services::health::HealthService;
use smart_planner_bot::utils::logging::log_system_event;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "smart_planner_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting SmartPlanner Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - Data file: {}, HTTP Port: {}, Dialogue storage: {:?}",
        config.store.data_file.display(),
        config.http_port,
        config.dialogue_storage
    );

    // Open the schedule document
    let store = StoreManager::file(&config.store.data_file, config.store.weekdays.clone());
    match store.read() {
        Ok(doc) => log_system_event(
            "Schedule document loaded",
            Some(&format!("{} users, {} events", doc.users.len(), doc.event_count())),
        ),
        // Requests fail individually until the file is fixed
        Err(e) => tracing::warn!("Schedule document is not readable yet: {}", e),
    }

    let planner = Arc::new(Planner::new(store, config.store.weekdays.clone()));
    let storage = build_storage(&config.dialogue_storage).await?;

    // Initialize bot
    info!("Initializing Telegram bot...");
    let bot = Bot::new(&config.telegram_bot_token);
    bot.delete_webhook().drop_pending_updates(true).await?;
    // The command menu carries the per-command descriptions
    bot.set_my_commands(Command::bot_commands()).await?;
    info!("Telegram bot initialized successfully");

    // Initialize health service
    let health_service = HealthService::new(planner.store().clone());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    // Run both the bot and health server concurrently
    let bot_task = tokio::spawn(async move {
        Dispatcher::builder(bot, schema())
            .dependencies(dptree::deps![storage, planner])
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    // Wait for either task to complete (which would indicate shutdown)
    tokio::select! {
        result1 = bot_task => {
            if let Err(e) = result1 {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result2 = health_task => {
            if let Err(e) = result2 {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    log_system_event("Application stopped", None);
    Ok(())
}
