//! # Application Layer
//!
//! Contains the core logic of the bot: the command registry, catalog grouping,
//! menu rendering, unit formatting, and command routing.

pub mod catalog;
pub mod format;
pub mod menu;
pub mod registry;
pub mod router;
