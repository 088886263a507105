//! Conversation state - the in-memory transcript and derived connectivity
//!
//! Single source of truth for what the presentation layer renders. All
//! mutation goes through the message dispatcher or the initial history seed.

use chat_core::Message;
use serde::{Deserialize, Serialize};

use crate::machine::{DispatchState, StateMachine};

/// Connectivity as derived from the last completed send attempt.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Connectivity {
    Online,
    Degraded,
}

impl Default for Connectivity {
    fn default() -> Self {
        Connectivity::Online
    }
}

/// The ordered transcript plus derived connectivity and the pending input
/// buffer for one chat session.
#[derive(Debug, Default)]
pub struct ConversationState {
    transcript: Vec<Message>,
    connectivity: Connectivity,
    input: String,
    dispatch: StateMachine,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The transcript, oldest first.
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// True exactly while a send is in flight.
    pub fn pending(&self) -> bool {
        self.dispatch.state().in_flight()
    }

    /// The pending input buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub fn dispatch(&self) -> &StateMachine {
        &self.dispatch
    }

    /// Mutable access to the dispatch machine. Reserved for the message
    /// dispatcher; the presentation layer reads state, it never drives it.
    pub fn dispatch_mut(&mut self) -> &mut StateMachine {
        &mut self.dispatch
    }

    /// Append one message. The transcript is append-only; entries are never
    /// replaced or reordered after insertion.
    pub fn push_message(&mut self, message: Message) {
        self.transcript.push(message);
    }

    /// Record the connectivity outcome of a completed send attempt. Only the
    /// message dispatcher calls this.
    pub fn set_connectivity(&mut self, connectivity: Connectivity) {
        self.connectivity = connectivity;
    }

    /// Seed the transcript with loaded history, oldest first.
    ///
    /// Returns false and leaves the transcript untouched when session
    /// messages already exist: a history load that settles after an
    /// in-session send is discarded rather than merged, keeping turn order
    /// intact.
    pub fn seed_history(&mut self, messages: Vec<Message>) -> bool {
        if !self.transcript.is_empty() {
            return false;
        }
        self.transcript = messages;
        true
    }

    /// Current dispatch state, for status displays.
    pub fn dispatch_state(&self) -> &DispatchState {
        self.dispatch.state()
    }
}
