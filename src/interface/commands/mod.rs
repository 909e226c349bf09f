//! # Command Handlers
//!
//! Contains specific handler functions for each supported command (e.g., .menu).
//! These handlers are invoked by the Router.

pub mod codex;
pub mod menu;
