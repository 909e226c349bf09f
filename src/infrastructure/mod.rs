//! # Infrastructure Layer
//!
//! Handles interactions with external systems and services.
//! Implements the traits defined in the Domain layer (ChatProvider, TextStyler, RuntimeStats).

pub mod fonts;
pub mod matrix;
pub mod system;
