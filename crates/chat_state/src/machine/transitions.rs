//! State transitions - FSM transition logic
//!
//! Implements the state machine that handles event-driven state transitions.

use super::events::DispatchEvent;
use super::states::DispatchState;

/// Represents a state transition result.
#[derive(Debug, Clone)]
pub struct StateTransition {
    /// The state before the transition.
    pub from: DispatchState,
    /// The state after the transition.
    pub to: DispatchState,
    /// The event that triggered the transition.
    pub event: DispatchEvent,
    /// Whether the state actually changed.
    pub changed: bool,
}

/// State machine for the send protocol.
#[derive(Debug, Clone)]
pub struct StateMachine {
    /// Current state.
    current_state: DispatchState,
    /// Transition history (limited).
    history: Vec<StateTransition>,
    /// Max history entries to keep.
    max_history: usize,
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl StateMachine {
    /// Create a new state machine in Idle state.
    pub fn new() -> Self {
        Self {
            current_state: DispatchState::Idle,
            history: Vec::new(),
            max_history: 50,
        }
    }

    /// Create a state machine with a specific initial state.
    pub fn with_state(state: DispatchState) -> Self {
        Self {
            current_state: state,
            history: Vec::new(),
            max_history: 50,
        }
    }

    /// Get the current state.
    pub fn state(&self) -> &DispatchState {
        &self.current_state
    }

    /// Get the transition history.
    pub fn history(&self) -> &[StateTransition] {
        &self.history
    }

    /// Handle an event and transition to a new state.
    pub fn handle_event(&mut self, event: DispatchEvent) -> StateTransition {
        let old_state = self.current_state.clone();
        let new_state = Self::compute_next_state(&old_state, &event);
        let changed = old_state != new_state;

        if changed {
            tracing::debug!(from = ?old_state, to = ?new_state, "dispatch transition");
        }

        self.current_state = new_state.clone();

        let transition = StateTransition {
            from: old_state,
            to: new_state,
            event,
            changed,
        };

        // Add to history
        self.history.push(transition.clone());
        if self.history.len() > self.max_history {
            self.history.remove(0);
        }

        transition
    }

    /// Compute the next state given current state and event.
    fn compute_next_state(state: &DispatchState, event: &DispatchEvent) -> DispatchState {
        use DispatchEvent::*;
        use DispatchState::*;

        match (state, event) {
            (Idle, SubmitAccepted) => Sending,

            (Sending, ReplyReceived { degraded }) => SettledSuccess {
                degraded: *degraded,
            },
            (Sending, SendFailed) => SettledFailure,

            // Settlement returns to Idle from either branch; the input gate
            // must reopen no matter how the send ended.
            (SettledSuccess { .. }, SettlementApplied) => Idle,
            (SettledFailure, SettlementApplied) => Idle,

            // ========== Default: No transition ==========
            _ => state.clone(),
        }
    }

    /// Check if a transition is valid without executing it.
    pub fn can_transition(&self, event: &DispatchEvent) -> bool {
        let next = Self::compute_next_state(&self.current_state, event);
        next != self.current_state
    }

    /// Reset to Idle state.
    pub fn reset(&mut self) {
        self.current_state = DispatchState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_flow() {
        let mut sm = StateMachine::new();
        assert_eq!(sm.state(), &DispatchState::Idle);

        let t1 = sm.handle_event(DispatchEvent::SubmitAccepted);
        assert!(t1.changed);
        assert_eq!(sm.state(), &DispatchState::Sending);

        let t2 = sm.handle_event(DispatchEvent::ReplyReceived { degraded: false });
        assert!(t2.changed);
        assert_eq!(sm.state(), &DispatchState::SettledSuccess { degraded: false });

        let t3 = sm.handle_event(DispatchEvent::SettlementApplied);
        assert!(t3.changed);
        assert_eq!(sm.state(), &DispatchState::Idle);
    }

    #[test]
    fn test_failure_flow_returns_to_idle() {
        let mut sm = StateMachine::new();
        sm.handle_event(DispatchEvent::SubmitAccepted);
        sm.handle_event(DispatchEvent::SendFailed);
        assert_eq!(sm.state(), &DispatchState::SettledFailure);

        sm.handle_event(DispatchEvent::SettlementApplied);
        assert_eq!(sm.state(), &DispatchState::Idle);
    }

    #[test]
    fn test_submit_while_sending_is_ignored() {
        let mut sm = StateMachine::new();
        sm.handle_event(DispatchEvent::SubmitAccepted);

        let t = sm.handle_event(DispatchEvent::SubmitAccepted);
        assert!(!t.changed);
        assert_eq!(sm.state(), &DispatchState::Sending);
    }

    #[test]
    fn test_degraded_reply_is_recorded() {
        let mut sm = StateMachine::with_state(DispatchState::Sending);
        sm.handle_event(DispatchEvent::ReplyReceived { degraded: true });
        assert_eq!(sm.state(), &DispatchState::SettledSuccess { degraded: true });
    }

    #[test]
    fn test_can_transition() {
        let sm = StateMachine::new();
        assert!(sm.can_transition(&DispatchEvent::SubmitAccepted));
        assert!(!sm.can_transition(&DispatchEvent::SendFailed));
    }

    #[test]
    fn test_history_tracking() {
        let mut sm = StateMachine::new();
        sm.handle_event(DispatchEvent::SubmitAccepted);
        sm.handle_event(DispatchEvent::SendFailed);

        assert_eq!(sm.history().len(), 2);
    }
}
