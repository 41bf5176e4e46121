//! Table state machine for one hand of simplified Blackjack
//!
//! Cards are drawn uniformly from 1-10, independent across draws. There is
//! no deck depletion and no ace/soft-hand distinction; the running total is
//! the entire state signal.

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::action::Action;
use crate::error::{Error, Result};

/// Default bust threshold
pub const DEFAULT_TARGET: u32 = 21;

/// Result of applying one action at the table
///
/// `reward` is `None` exactly when the table cannot judge the action on its
/// own: standing ends the hand, but whether standing was a good decision is
/// a training-time concern that belongs to the driver, not to the game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Hand total after the action
    pub total: u32,
    /// Reward signal, absent on stand
    pub reward: Option<f64>,
    /// Whether the hand is still in play
    pub continuing: bool,
}

/// One hand of simplified Blackjack
///
/// The hand is a two-state machine: ACTIVE while actions are accepted,
/// ENDED once the player stands or busts. ENDED is absorbing; applying an
/// action to an ended hand is an error until [`Table::reset`] is called.
#[derive(Debug)]
pub struct Table {
    total: u32,
    target: u32,
    active: bool,
    rng: StdRng,
    rng_seed: Option<u64>,
}

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

impl Table {
    /// Create a table with the given bust threshold
    pub fn new(target: u32) -> Self {
        Self {
            total: 0,
            target,
            active: true,
            rng: build_rng(None),
            rng_seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
        self
    }

    /// Reseed the card stream for reproducible runs
    pub fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
    }

    /// Start a fresh hand
    pub fn reset(&mut self) {
        self.total = 0;
        self.active = true;
    }

    /// Draw a card uniformly from 1-10
    pub fn draw_card(&mut self) -> u32 {
        self.rng.random_range(1..=10)
    }

    /// Apply an action to the current hand
    ///
    /// # Errors
    ///
    /// Returns [`Error::HandOver`] if the hand has already ended.
    pub fn apply(&mut self, action: Action) -> Result<Transition> {
        if !self.active {
            return Err(Error::HandOver);
        }

        match action {
            Action::Draw => {
                let card = self.draw_card();
                self.total += card;
                if self.total > self.target {
                    self.active = false;
                    Ok(Transition {
                        total: self.total,
                        reward: Some(-1.0),
                        continuing: false,
                    })
                } else {
                    Ok(Transition {
                        total: self.total,
                        reward: Some(0.0),
                        continuing: true,
                    })
                }
            }
            Action::Stand => {
                self.active = false;
                Ok(Transition {
                    total: self.total,
                    reward: None,
                    continuing: false,
                })
            }
        }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET)
    }
}
