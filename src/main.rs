//! # Main Entry Point
//!
//! Initializes the menu bot:
//! - Domain: Configuration and Types
//! - Infrastructure: Matrix, Fonts, System statistics
//! - Application: Registry, Catalog, Menu renderer, Router
//! - Interface: Command Handlers
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;
#[cfg(test)]
mod testing;

use anyhow::{Context, Result};
use clap::Parser;
use matrix_sdk::{
    Client,
    config::SyncSettings,
    room::Room,
    ruma::events::room::{
        member::{MembershipState, StrippedRoomMemberEvent},
        message::{MessageType, SyncRoomMessageEvent},
    },
};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::menu::MenuRenderer;
use crate::application::registry::CommandRegistry;
use crate::application::router::CommandRouter;
use crate::domain::config::AppConfig;
use crate::domain::traits::RuntimeStats;
use crate::infrastructure::fonts::UnicodeStyler;
use crate::infrastructure::matrix::MatrixService;
use crate::infrastructure::system::SystemStats;

#[derive(Parser, Debug)]
#[command(version, about = "Matrix bot serving a categorized command menu")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, default_value = "data/config.yaml")]
    config: PathBuf,

    /// Directory for the session log
    #[arg(long, default_value = "data")]
    log_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Uptime is measured from here
    let stats: Arc<dyn RuntimeStats> = Arc::new(SystemStats::new());
    let cli = Cli::parse();

    // 1. Load Configuration
    let config = AppConfig::load(&cli.config)?;

    // 2. Logging Setup
    if !cli.log_dir.exists() {
        fs::create_dir_all(&cli.log_dir).context("Failed to create log directory")?;
    }

    // Clear previous session log
    let log_path = cli.log_dir.join("session.log");
    if log_path.exists() {
        let _ = fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(&cli.log_dir, "session.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(
            "info,matrix_sdk=warn,matrix_sdk_base=warn,matrix_sdk_crypto=error,ruma=warn,hyper=warn",
        )
    });

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);
    let console_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stdout);

    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    tracing::info!("{}", strings::logs::STARTING);

    // 3. Command Registry
    let registry = Arc::new(CommandRegistry::with_builtins());
    registry.extend(config.commands.clone()).await;
    tracing::info!("{}", strings::logs::registry_ready(registry.len().await));

    // 4. Application Components
    let renderer = Arc::new(MenuRenderer::new(
        Arc::new(UnicodeStyler),
        stats.clone(),
        env!("CARGO_PKG_VERSION"),
    ));
    let router = Arc::new(CommandRouter::new(
        config.clone(),
        registry.clone(),
        renderer,
        stats.clone(),
    ));

    // 5. Matrix Setup
    let client = Client::builder()
        .homeserver_url(&config.services.matrix.homeserver)
        .build()
        .await?;

    client
        .matrix_auth()
        .login_username(
            &config.services.matrix.username,
            &config.services.matrix.password,
        )
        .send()
        .await?;

    tracing::info!("{}", strings::logs::logged_in(&config.services.matrix.username));

    if let Some(name) = &config.services.matrix.display_name {
        tracing::info!("{}", strings::logs::setting_display_name(name));
        if let Err(e) = client.account().set_display_name(Some(name)).await {
            tracing::warn!("{}", strings::logs::set_display_name_fail(&e.to_string()));
        }
    }

    // 6. Event Loop
    let start_time = std::time::SystemTime::now();
    let platform = config.bot.platform_label();

    client.add_event_handler(move |ev: SyncRoomMessageEvent, room: Room| {
        let router = router.clone();
        let platform = platform.clone();

        async move {
            let Some(original_msg) = ev.as_original() else {
                return;
            };

            // Ignore events older than start_time
            let ts = ev.origin_server_ts();
            let event_time =
                std::time::UNIX_EPOCH + std::time::Duration::from_millis(ts.get().into());
            if event_time < start_time {
                return;
            }

            let MessageType::Text(text_content) = &original_msg.content.msgtype else {
                return;
            };
            let body = &text_content.body;
            tracing::info!("Received message from {}: \n{}", original_msg.sender, body);

            let chat = MatrixService::new(room.clone(), &platform);

            if original_msg.sender == room.own_user_id() {
                if let Err(e) = router.route_own(&chat, body).await {
                    tracing::error!("Failed to handle own message: {}", e);
                }
                return;
            }

            let sender_name = match room.get_member(&original_msg.sender).await {
                Ok(Some(member)) => member.name().to_string(),
                _ => original_msg.sender.to_string(),
            };

            if let Err(e) = router
                .route(
                    &chat,
                    body,
                    &sender_name,
                    Some(original_msg.event_id.as_str()),
                )
                .await
            {
                tracing::error!("Failed to route message: {}", e);
            }
        }
    });

    // Handle Invites
    client.add_event_handler(|ev: StrippedRoomMemberEvent, room: Room| async move {
        if ev.content.membership == MembershipState::Invite {
            tracing::info!("{}", strings::logs::invite_received(room.room_id().as_str()));
            if let Err(e) = room.join().await {
                tracing::error!("{}", strings::logs::join_invite_fail(&e.to_string()));
            }
        }
    });

    // 7. Sync until the process exits
    tracing::info!("{}", strings::logs::SYNC_LOOP_START);
    if let Err(e) = client.sync(SyncSettings::default()).await {
        tracing::error!("{}", strings::logs::sync_loop_fail(&e.to_string()));
        return Err(e.into());
    }

    Ok(())
}
