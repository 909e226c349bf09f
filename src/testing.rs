//! Test doubles for the domain traits.

use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::Barrier;

use crate::domain::traits::{ChatProvider, RuntimeStats, TextStyler};

#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Message(String),
    Plain(String),
    Image { source: String, caption: String },
    Error(String),
    Reaction { event_id: String, key: String },
}

/// Records everything sent to the room.
#[derive(Default)]
pub struct MockChat {
    pub sent: Mutex<Vec<Sent>>,
    pub fail_images: bool,
    pub fail_reactions: bool,
}

impl MockChat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_images() -> Self {
        Self {
            fail_images: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, item: Sent) {
        self.sent.lock().unwrap().push(item);
    }
}

#[async_trait]
impl ChatProvider for MockChat {
    async fn send_message(&self, content: &str) -> Result<String, String> {
        self.record(Sent::Message(content.to_string()));
        Ok("$message".to_string())
    }

    async fn send_plain(&self, content: &str) -> Result<String, String> {
        self.record(Sent::Plain(content.to_string()));
        Ok("$plain".to_string())
    }

    async fn send_image(&self, source: &str, caption: &str) -> Result<String, String> {
        if self.fail_images {
            return Err("upload failed".to_string());
        }
        self.record(Sent::Image {
            source: source.to_string(),
            caption: caption.to_string(),
        });
        Ok("$image".to_string())
    }

    async fn send_error(&self, error: &str) -> Result<(), String> {
        self.record(Sent::Error(error.to_string()));
        Ok(())
    }

    async fn react(&self, event_id: &str, key: &str) -> Result<(), String> {
        if self.fail_reactions {
            return Err("reaction rejected".to_string());
        }
        self.record(Sent::Reaction {
            event_id: event_id.to_string(),
            key: key.to_string(),
        });
        Ok(())
    }

    fn platform(&self) -> String {
        "linux".to_string()
    }

    fn room_id(&self) -> String {
        "!room:example.org".to_string()
    }
}

/// Returns text unchanged.
pub struct IdentityStyler;

#[async_trait]
impl TextStyler for IdentityStyler {
    async fn style(&self, text: &str, _style: &str) -> Result<String, String> {
        Ok(text.to_string())
    }
}

/// Delays styling of any text containing `needle`, so later inputs finish first.
pub struct SlowStyler {
    needle: String,
}

impl SlowStyler {
    pub fn new(needle: &str) -> Self {
        Self {
            needle: needle.to_string(),
        }
    }
}

#[async_trait]
impl TextStyler for SlowStyler {
    async fn style(&self, text: &str, _style: &str) -> Result<String, String> {
        if text.contains(&self.needle) {
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        Ok(text.to_string())
    }
}

/// Holds every `style` call for `gated_style` until `count` of them are in flight.
pub struct BarrierStyler {
    gated_style: String,
    barrier: Barrier,
}

impl BarrierStyler {
    pub fn new(gated_style: &str, count: usize) -> Self {
        Self {
            gated_style: gated_style.to_string(),
            barrier: Barrier::new(count),
        }
    }
}

#[async_trait]
impl TextStyler for BarrierStyler {
    async fn style(&self, text: &str, style: &str) -> Result<String, String> {
        if style == self.gated_style {
            self.barrier.wait().await;
        }
        Ok(text.to_string())
    }
}

pub struct FailingStyler;

#[async_trait]
impl TextStyler for FailingStyler {
    async fn style(&self, _text: &str, style: &str) -> Result<String, String> {
        Err(format!("font service unavailable for {style}"))
    }
}

/// 1h 1m 1s of uptime, 1 GiB of 2 GiB in use.
pub struct FixedStats {
    pub uptime: f64,
    pub total: u64,
    pub free: u64,
}

impl Default for FixedStats {
    fn default() -> Self {
        Self {
            uptime: 3661.0,
            total: 2 * 1024 * 1024 * 1024,
            free: 1024 * 1024 * 1024,
        }
    }
}

impl RuntimeStats for FixedStats {
    fn uptime_secs(&self) -> f64 {
        self.uptime
    }

    fn total_memory(&self) -> u64 {
        self.total
    }

    fn free_memory(&self) -> u64 {
        self.free
    }
}
