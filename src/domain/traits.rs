//! # Domain Traits
//!
//! Abstract interfaces for the collaborators the menu consumes (chat delivery,
//! text styling, runtime statistics). Implementations live in the Infrastructure layer.

use async_trait::async_trait;

/// Abstract interface for a Chat Provider (e.g., Matrix, Console)
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a markdown message to the room
    async fn send_message(&self, content: &str) -> Result<String, String>;

    /// Send text verbatim, without markdown rendering
    async fn send_plain(&self, content: &str) -> Result<String, String>;

    /// Send an image (URL or local path) with a caption
    async fn send_image(&self, source: &str, caption: &str) -> Result<String, String>;

    /// Report a failed command to the room
    async fn send_error(&self, error: &str) -> Result<(), String>;

    /// React to an event with an emoji key
    async fn react(&self, event_id: &str, key: &str) -> Result<(), String>;

    /// Platform label shown in the menu header
    fn platform(&self) -> String;

    /// Get the current room ID
    fn room_id(&self) -> String;
}

/// Converts plain text into a decorated font variant.
#[async_trait]
pub trait TextStyler: Send + Sync {
    async fn style(&self, text: &str, style: &str) -> Result<String, String>;
}

/// Process and host figures for the menu header.
pub trait RuntimeStats: Send + Sync {
    /// Seconds since the process started.
    fn uptime_secs(&self) -> f64;

    /// Total system memory in bytes.
    fn total_memory(&self) -> u64;

    /// Free system memory in bytes.
    fn free_memory(&self) -> u64;
}
