//! Player actions

use std::fmt;

use serde::{Deserialize, Serialize};

/// An action available at the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Stand,
    Draw,
}

impl Action {
    /// All actions in canonical order. Greedy selection iterates this
    /// order with a strict comparison, so ties resolve to `Stand`.
    pub const ALL: [Action; 2] = [Action::Stand, Action::Draw];

    /// Stable index used by the value table and the policy file format
    /// (0 = stand, 1 = draw).
    pub fn index(self) -> usize {
        match self {
            Action::Stand => 0,
            Action::Draw => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Action> {
        match index {
            0 => Some(Action::Stand),
            1 => Some(Action::Draw),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Stand => write!(f, "stand"),
            Action::Draw => write!(f, "draw"),
        }
    }
}
