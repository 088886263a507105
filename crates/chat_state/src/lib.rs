//! chat_state - State machine and conversation state for the chat session
//!
//! This crate provides the send-protocol state machine and the in-memory
//! conversation state that the presentation layer renders from.

pub mod conversation;
pub mod machine;

// Re-export commonly used types
pub use conversation::{Connectivity, ConversationState};
pub use machine::{DispatchEvent, DispatchState, StateMachine, StateTransition};
