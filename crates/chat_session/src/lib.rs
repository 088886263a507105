//! # Chat Session
//!
//! The session controller for the Shujaa health-guidance chat: resolves the
//! device identity, loads prior history, runs the send protocol, and tracks
//! connectivity.

pub mod loader;
pub mod session;

pub use session::{ChatSession, SubmitOutcome, OFFLINE_FALLBACK_NOTICE};

// Re-exports for downstream convenience
pub use chat_core::{quick_actions, Config, Message, MessageOrigin, QuickAction};
pub use chat_state::Connectivity;
pub use identity_store::{FileIdentityStorage, IdentityStore, InMemoryIdentityStorage};
pub use shujaa_client::{ShujaaClient, ShujaaClientTrait};
