//! Monte Carlo control agent

use std::collections::HashSet;

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::{agent::value_table::ValueTable, game::Action};

/// Totals below this always draw, bypassing exploration and the learned
/// values. Standing on a low total can never win a round, so the policy is
/// not consulted there.
pub const DRAW_FLOOR: u32 = 15;

/// One step of an episode trajectory
///
/// The reward carried here is the shaped reward assigned by the driver,
/// not the raw table signal; on stand the table reports no reward and the
/// driver fills in the terminal +1/-1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub state: u32,
    pub action: Action,
    pub reward: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct AgentState {
    pub value_table: ValueTable,
    pub exploration: f64,
    pub rng_seed: Option<u64>,
}

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Tabular Monte Carlo control agent
///
/// Selects actions ε-greedily over its value table and updates the table
/// from completed episode trajectories by averaging observed returns.
#[derive(Debug, Clone)]
pub struct MonteCarloAgent {
    value_table: ValueTable,
    exploration: f64,
    rng: StdRng,
    rng_seed: Option<u64>,
}

impl MonteCarloAgent {
    /// Create an agent with the given exploration rate
    pub fn new(exploration: f64) -> Self {
        Self {
            value_table: ValueTable::new(),
            exploration,
            rng: build_rng(None),
            rng_seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
        self
    }

    /// Reseed the exploration stream for reproducible runs
    pub fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
    }

    /// ε-greedy action selection with a hard draw floor
    ///
    /// Totals below [`DRAW_FLOOR`] always draw. Above it, the agent
    /// explores uniformly with probability `exploration` and otherwise
    /// follows [`ValueTable::greedy_action`].
    pub fn select_action(&mut self, state: u32) -> Action {
        self.value_table.entry(state);

        if state < DRAW_FLOOR {
            return Action::Draw;
        }
        if self.rng.random::<f64>() < self.exploration {
            *Action::ALL.choose(&mut self.rng).unwrap()
        } else {
            self.value_table.greedy_action(state)
        }
    }

    /// Fold a completed episode into the value table
    ///
    /// Walks the trajectory in reverse, accumulating the return G, and
    /// records G for each (state, action) pair the first time the pair is
    /// encountered during the backward scan. A pair revisited within the
    /// episode is therefore credited with the return from its *last*
    /// chronological occurrence.
    pub fn update_policy(&mut self, trajectory: &[Step]) {
        let mut ret = 0.0;
        let mut updated: HashSet<(u32, Action)> = HashSet::new();

        for step in trajectory.iter().rev() {
            ret += step.reward;
            if updated.insert((step.state, step.action)) {
                self.value_table.record_return(step.state, step.action, ret);
            }
        }
    }

    pub fn value_table(&self) -> &ValueTable {
        &self.value_table
    }

    pub fn exploration(&self) -> f64 {
        self.exploration
    }

    pub(crate) fn export_state(&self) -> AgentState {
        AgentState {
            value_table: self.value_table.clone(),
            exploration: self.exploration,
            rng_seed: self.rng_seed,
        }
    }

    pub(crate) fn from_state(state: AgentState) -> Self {
        Self {
            value_table: state.value_table,
            exploration: state.exploration,
            rng: build_rng(state.rng_seed),
            rng_seed: state.rng_seed,
        }
    }
}
