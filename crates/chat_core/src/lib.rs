//! chat_core - Core types for the Shujaa chat session controller
//!
//! This crate provides the foundational types used across the chat crates:
//! - `message` - the transcript message model
//! - `quick_actions` - the static quick-action catalog
//! - `config` - backend location and request timeout configuration

pub mod config;
pub mod message;
pub mod quick_actions;

// Re-export commonly used types
pub use config::Config;
pub use message::{Message, MessageOrigin};
pub use quick_actions::{quick_actions, QuickAction};
