//! # Strings Module
//!
//! Centralizes user-facing strings, menu layout fragments, and log lines.

pub mod logs;
pub mod menu;
pub mod messages;
