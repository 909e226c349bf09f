//! # Menu Command
//!
//! Handles `.menu [category]` (alias `.help`).
//! Renders the catalog and delivers it, as an image caption when a menu image is configured.

use anyhow::Result;

use crate::application::menu::MenuRenderer;
use crate::application::registry::CommandRegistry;
use crate::domain::traits::ChatProvider;
use crate::domain::types::{MenuConfig, RequestContext};

/// Renders and sends the menu. Failures are reported to the room, never returned.
pub async fn handle_menu(
    renderer: &MenuRenderer,
    registry: &CommandRegistry,
    config: &MenuConfig,
    prefix: &str,
    chat: &impl ChatProvider,
    request: &RequestContext,
) -> Result<()> {
    if let Err(e) = render_and_send(renderer, registry, config, prefix, chat, request).await {
        tracing::error!("Menu command failed in {}: {:#}", chat.room_id(), e);
        if let Err(report) = chat.send_error(&e.to_string()).await {
            tracing::error!("Failed to report menu error: {}", report);
        }
    }
    Ok(())
}

async fn render_and_send(
    renderer: &MenuRenderer,
    registry: &CommandRegistry,
    config: &MenuConfig,
    prefix: &str,
    chat: &impl ChatProvider,
    request: &RequestContext,
) -> Result<()> {
    let snapshot = registry.snapshot().await;
    let menu = renderer.render(&snapshot, config, prefix, request).await?;
    deliver(chat, config.menu_image.as_deref(), &menu).await
}

/// Sends `text` as a caption on `image` when possible, otherwise as plain text.
async fn deliver(chat: &impl ChatProvider, image: Option<&str>, text: &str) -> Result<()> {
    if let Some(image) = image {
        match chat.send_image(image, text).await {
            Ok(_) => return Ok(()),
            Err(e) => tracing::warn!("Menu image unavailable, sending text only: {}", e),
        }
    }

    chat.send_plain(text)
        .await
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!(e))
}
