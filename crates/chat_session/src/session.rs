//! Chat session - the message dispatcher over the conversation state

use std::sync::Arc;

use chat_core::{Message, QuickAction};
use chat_state::{Connectivity, ConversationState, DispatchEvent};
use identity_store::{IdentityStorage, IdentityStore};
use shujaa_client::{ChatRequest, ShujaaClientTrait};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::loader;

/// Shown in place of an assistant answer when the send itself fails.
///
/// A fixed literal: error detail must never reach an end user in a
/// health-support context, and urgent needs are always pointed at emergency
/// services.
pub const OFFLINE_FALLBACK_NOTICE: &str = "👑 Oops, our nurse is sipping tea! We'll try again in a sec... For emergencies, please contact emergency services immediately.";

/// Outcome of a submit attempt. Submits never fail; they are either
/// dispatched or ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The message was sent and the settlement applied.
    Dispatched,
    /// Ignored: the trimmed input was empty.
    EmptyInput,
    /// Ignored: a send is already in flight.
    Busy,
}

/// One user's chat session: transcript, connectivity, and the send protocol.
///
/// All state mutation is serialized behind a single writer lock, and the
/// lock is never held across a network call. The session is `&self`
/// throughout, so it can be shared behind an `Arc` by the presentation
/// layer.
pub struct ChatSession<C: ShujaaClientTrait> {
    client: Arc<C>,
    identity: String,
    state: Arc<RwLock<ConversationState>>,
}

impl<C: ShujaaClientTrait> ChatSession<C> {
    /// Create a session for the identity resolved by `identities`.
    pub async fn new<S: IdentityStorage>(client: Arc<C>, identities: &IdentityStore<S>) -> Self {
        let identity = identities.get_or_create().await;
        Self::with_identity(client, identity)
    }

    /// Create a session for an already-resolved identity.
    pub fn with_identity(client: Arc<C>, identity: impl Into<String>) -> Self {
        Self {
            client,
            identity: identity.into(),
            state: Arc::new(RwLock::new(ConversationState::new())),
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Load prior turns and seed the transcript.
    ///
    /// Runs the fire-and-forget degradation of the history loader: failures
    /// leave the transcript empty and the session usable. A load that
    /// settles after session messages already exist is discarded.
    pub async fn load_history(&self) {
        let messages = loader::load_history(self.client.as_ref(), &self.identity).await;
        if messages.is_empty() {
            return;
        }

        let mut state = self.state.write().await;
        if !state.seed_history(messages) {
            debug!("history settled after session messages were sent; discarded");
        }
    }

    /// Replace the pending input buffer.
    pub async fn set_input(&self, text: impl Into<String>) {
        self.state.write().await.set_input(text);
    }

    /// Current contents of the pending input buffer.
    pub async fn input(&self) -> String {
        self.state.read().await.input().to_string()
    }

    /// Copy a quick action's canned prompt into the input buffer. Dispatch
    /// still goes through [`ChatSession::submit`].
    pub async fn apply_quick_action(&self, action: &QuickAction) {
        self.state.write().await.set_input(action.prompt);
    }

    /// Run the send protocol over the current input buffer.
    ///
    /// The user message is appended and the input cleared before any network
    /// I/O, and neither is rolled back on failure. Exactly one assistant
    /// message is appended per dispatched submit, live or fallback, and
    /// connectivity reflects that settlement.
    pub async fn submit(&self) -> SubmitOutcome {
        let request = {
            let mut state = self.state.write().await;

            let text = state.input().trim().to_string();
            if text.is_empty() {
                return SubmitOutcome::EmptyInput;
            }
            if state.pending() {
                return SubmitOutcome::Busy;
            }

            state.dispatch_mut().handle_event(DispatchEvent::SubmitAccepted);
            state.push_message(Message::user(text.clone()));
            state.clear_input();

            ChatRequest {
                message: text,
                user_id: self.identity.clone(),
            }
        };

        let result = self.client.send_message(&request).await;

        let mut state = self.state.write().await;
        match result {
            Ok(reply) => {
                state
                    .dispatch_mut()
                    .handle_event(DispatchEvent::ReplyReceived {
                        degraded: reply.is_offline,
                    });

                let connectivity = if reply.is_offline {
                    Connectivity::Degraded
                } else {
                    Connectivity::Online
                };
                state.push_message(Message::assistant(reply.response, reply.is_offline));
                state.set_connectivity(connectivity);
            }
            Err(err) => {
                warn!("send failed, falling back to offline notice: {err}");

                state.dispatch_mut().handle_event(DispatchEvent::SendFailed);
                state.push_message(Message::assistant(OFFLINE_FALLBACK_NOTICE, true));
                state.set_connectivity(Connectivity::Degraded);
            }
        }

        // Both branches return to Idle here; the input gate reopens no
        // matter how the send ended.
        state.dispatch_mut().handle_event(DispatchEvent::SettlementApplied);

        SubmitOutcome::Dispatched
    }

    /// Snapshot of the transcript for rendering, oldest first.
    pub async fn transcript(&self) -> Vec<Message> {
        self.state.read().await.transcript().to_vec()
    }

    pub async fn connectivity(&self) -> Connectivity {
        self.state.read().await.connectivity()
    }

    /// True while a send is in flight.
    pub async fn is_pending(&self) -> bool {
        self.state.read().await.pending()
    }
}
