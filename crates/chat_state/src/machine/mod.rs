//! State machine module
//!
//! Contains the FSM implementation for the send protocol.

mod events;
mod states;
mod transitions;

pub use events::DispatchEvent;
pub use states::DispatchState;
pub use transitions::{StateMachine, StateTransition};
