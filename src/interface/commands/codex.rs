//! # Codex Responder
//!
//! Replies to the bot account's own "codex help" message with a fixed menu card.

use anyhow::Result;

use crate::domain::traits::{ChatProvider, RuntimeStats};
use crate::strings::menu::{CODEX_TRIGGER, codex_menu};

/// Returns `true` when the message matched the trigger and a reply was sent.
pub async fn handle_self_message(
    chat: &impl ChatProvider,
    stats: &dyn RuntimeStats,
    text: &str,
) -> Result<bool> {
    if text.trim().to_lowercase() != CODEX_TRIGGER {
        return Ok(false);
    }

    let uptime = stats.uptime_secs().max(0.0) as u64;
    let hours = uptime / 3600;
    let minutes = uptime % 3600 / 60;

    chat.send_plain(&codex_menu(hours, minutes))
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(true)
}
