//! Message module - transcript message model
//!
//! Shared message types used across the chat crates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who produced a transcript message.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageOrigin {
    User,
    Assistant,
}

/// A single entry in the conversation transcript.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Message {
    /// Unique within a session. The transcript is append-only and never
    /// keyed by id, so a collision cannot silently overwrite an entry.
    pub id: Uuid,

    /// The content shown to the user.
    pub text: String,

    /// Creation time, used only for display ordering within a turn.
    pub timestamp: DateTime<Utc>,

    pub origin: MessageOrigin,

    /// True when an assistant answer came from a fallback path rather than
    /// the live service. Always false on user messages.
    #[serde(default)]
    pub degraded: bool,
}

impl Message {
    /// Create a user-origin message stamped now.
    pub fn user(text: impl Into<String>) -> Self {
        Self::user_at(text, Utc::now())
    }

    /// Create a user-origin message with an explicit timestamp (history load).
    pub fn user_at(text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            timestamp,
            origin: MessageOrigin::User,
            degraded: false,
        }
    }

    /// Create an assistant-origin message stamped now.
    pub fn assistant(text: impl Into<String>, degraded: bool) -> Self {
        Self::assistant_at(text, degraded, Utc::now())
    }

    /// Create an assistant-origin message with an explicit timestamp.
    pub fn assistant_at(text: impl Into<String>, degraded: bool, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            timestamp,
            origin: MessageOrigin::Assistant,
            degraded,
        }
    }

    pub fn is_user(&self) -> bool {
        self.origin == MessageOrigin::User
    }

    pub fn is_assistant(&self) -> bool {
        self.origin == MessageOrigin::Assistant
    }
}
