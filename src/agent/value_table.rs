//! Value table for Monte Carlo control

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::game::Action;

/// Per-state estimates, indexed by [`Action::index`]
///
/// Values and visit counts live in one aggregate and are mutated only
/// through [`ValueTable::record_return`], so a positive visit count always
/// accompanies an updated value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Estimated expected return per action
    pub values: [f64; 2],
    /// Number of recorded returns per action
    pub visits: [u64; 2],
}

/// Mapping from hand total to per-action return estimates
///
/// States are created lazily: the first reference to a total installs a
/// zeroed entry covering both actions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValueTable {
    entries: HashMap<u32, Entry>,
}

impl ValueTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get-or-create accessor for a state's entry
    pub fn entry(&mut self, state: u32) -> &mut Entry {
        self.entries.entry(state).or_default()
    }

    /// Estimated return for a state-action pair (0 for unseen states)
    pub fn value(&self, state: u32, action: Action) -> f64 {
        self.entries
            .get(&state)
            .map_or(0.0, |entry| entry.values[action.index()])
    }

    /// Number of returns recorded for a state-action pair
    pub fn visits(&self, state: u32, action: Action) -> u64 {
        self.entries
            .get(&state)
            .map_or(0, |entry| entry.visits[action.index()])
    }

    /// Select the action with the highest estimated return
    ///
    /// Iterates [`Action::ALL`] with a strict comparison, so ties resolve
    /// to the first action in canonical order: `Stand`.
    pub fn greedy_action(&self, state: u32) -> Action {
        let mut best = Action::ALL[0];
        for &action in &Action::ALL[1..] {
            if self.value(state, action) > self.value(state, best) {
                best = action;
            }
        }
        best
    }

    /// Fold one observed return into the running average
    ///
    /// Increments the visit count n, then moves the estimate by
    /// `(ret - value) / n`; the estimate stays the exact sample mean of
    /// every return recorded so far.
    pub fn record_return(&mut self, state: u32, action: Action, ret: f64) {
        let entry = self.entry(state);
        let index = action.index();
        entry.visits[index] += 1;
        entry.values[index] += (ret - entry.values[index]) / entry.visits[index] as f64;
    }

    /// Number of states in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate all states in the table
    pub fn states(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.keys().copied()
    }
}
