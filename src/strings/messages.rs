//! # Messages
//!
//! Contains constant strings and format functions for user-facing messages.

pub fn command_failed(err: &str) -> String {
    format!("❌ **Command Failed**: {err}")
}
