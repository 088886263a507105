//! Dispatch events - triggers for send-protocol transitions

use serde::{Deserialize, Serialize};

/// Defines the events that can trigger state transitions in the FSM.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DispatchEvent {
    /// A submit passed the gate: non-empty trimmed input, nothing in flight.
    SubmitAccepted,

    /// The backend answered with a payload.
    ReplyReceived {
        /// The service-reported offline flag from the payload.
        degraded: bool,
    },

    /// The call failed before a payload arrived (transport, timeout,
    /// non-2xx).
    SendFailed,

    /// Settlement side effects have been applied; return to idle.
    SettlementApplied,
}
