//! Quick-action catalog - canned prompts for the chat input

use serde::Serialize;

/// A canned prompt with its display label and icon.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub icon: &'static str,
    /// The text placed into the input buffer when the action is selected.
    pub prompt: &'static str,
}

/// The static catalog. Selecting an entry only populates the input buffer;
/// dispatch still goes through the normal submit gate.
pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        label: "I'm feeling anxious",
        icon: "💙",
        prompt: "I'm feeling anxious",
    },
    QuickAction {
        label: "I have a headache",
        icon: "🤕",
        prompt: "I have a headache",
    },
    QuickAction {
        label: "I can't sleep",
        icon: "😴",
        prompt: "I can't sleep",
    },
    QuickAction {
        label: "I feel sad",
        icon: "💔",
        prompt: "I feel sad",
    },
    QuickAction {
        label: "Emergency help",
        icon: "🚨",
        prompt: "Emergency help",
    },
];

pub fn quick_actions() -> &'static [QuickAction] {
    QUICK_ACTIONS
}
