//! # Command Router
//!
//! Routes incoming messages to the appropriate command handler (in `interface/commands`).
//! It strips the configured prefix, resolves the command word against the registry,
//! and dispatches it with the necessary context.

use anyhow::Result;
use std::sync::Arc;

use crate::application::menu::MenuRenderer;
use crate::application::registry::CommandRegistry;
use crate::domain::config::AppConfig;
use crate::domain::traits::{ChatProvider, RuntimeStats};
use crate::domain::types::RequestContext;
use crate::interface::commands;

pub struct CommandRouter {
    config: AppConfig,
    registry: Arc<CommandRegistry>,
    renderer: Arc<MenuRenderer>,
    stats: Arc<dyn RuntimeStats>,
}

impl CommandRouter {
    pub fn new(
        config: AppConfig,
        registry: Arc<CommandRegistry>,
        renderer: Arc<MenuRenderer>,
        stats: Arc<dyn RuntimeStats>,
    ) -> Self {
        Self {
            config,
            registry,
            renderer,
            stats,
        }
    }

    /// Handles a message written by another user.
    pub async fn route<C>(
        &self,
        chat: &C,
        message: &str,
        sender_name: &str,
        event_id: Option<&str>,
    ) -> Result<()>
    where
        C: ChatProvider,
    {
        let prefix = self.config.bot.prefix.as_str();
        let Some(body) = message.trim().strip_prefix(prefix) else {
            return Ok(());
        };

        let (cmd, args) = match body.trim_start().split_once(char::is_whitespace) {
            Some((cmd, args)) => (cmd, args.trim()),
            None => (body.trim(), ""),
        };
        tracing::info!(
            "Router dispatching cmd='{}' args='{}' sender='{}'",
            cmd,
            args,
            sender_name
        );

        let Some(descriptor) = self.registry.find(cmd).await else {
            tracing::debug!("Ignoring unknown command '{}'", cmd);
            return Ok(());
        };
        if let Some(desc) = &descriptor.desc {
            tracing::debug!("Matched '{}': {}", descriptor.cmd, desc);
        }

        if let (Some(key), Some(event_id)) = (descriptor.react.as_deref(), event_id)
            && let Err(e) = chat.react(event_id, key).await
        {
            tracing::warn!("Failed to react to {}: {}", event_id, e);
        }

        let request = RequestContext {
            text: (!args.is_empty()).then(|| args.to_string()),
            push_name: sender_name.to_string(),
            platform: chat.platform(),
        };

        match descriptor.canonical_name() {
            Some("menu") => {
                commands::menu::handle_menu(
                    &self.renderer,
                    &self.registry,
                    &self.config.bot.menu_config(),
                    prefix,
                    chat,
                    &request,
                )
                .await
            }
            other => {
                tracing::debug!("No local handler for {:?}", other);
                Ok(())
            }
        }
    }

    /// Handles a message written by the bot account itself.
    pub async fn route_own<C>(&self, chat: &C, message: &str) -> Result<()>
    where
        C: ChatProvider,
    {
        if commands::codex::handle_self_message(chat, self.stats.as_ref(), message).await? {
            tracing::info!("Answered codex trigger in {}", chat.room_id());
        }
        Ok(())
    }
}
