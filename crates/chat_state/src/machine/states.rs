//! Dispatch states - the lifecycle of one send attempt

use serde::{Deserialize, Serialize};

/// Defines the possible states of the message dispatcher.
///
/// One submit runs `Idle -> Sending -> Settled* -> Idle`; settlement always
/// returns to `Idle`, whichever branch was taken.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DispatchState {
    /// Awaiting user input; submits are accepted.
    Idle,

    /// A send is in flight; further submits are ignored, not queued.
    Sending,

    /// The remote call returned a payload.
    SettledSuccess {
        /// Whether the backend reported the answer as degraded/cached.
        degraded: bool,
    },

    /// The remote call failed before a payload arrived; the fixed fallback
    /// notice stands in for the assistant answer.
    SettledFailure,
}

impl Default for DispatchState {
    fn default() -> Self {
        DispatchState::Idle
    }
}

impl DispatchState {
    /// Check if this state allows a new submit.
    pub fn accepts_submit(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Check if a send is currently in flight.
    pub fn in_flight(&self) -> bool {
        matches!(self, Self::Sending)
    }

    /// Check if the last send has settled but not yet returned to idle.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::SettledSuccess { .. } | Self::SettledFailure)
    }

    /// Get a human-readable description of the current state.
    pub fn description(&self) -> &str {
        match self {
            Self::Idle => "Ready for input",
            Self::Sending => "Waiting for the assistant",
            Self::SettledSuccess { .. } => "Answer received",
            Self::SettledFailure => "Send failed",
        }
    }
}
