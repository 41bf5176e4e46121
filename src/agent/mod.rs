//! Tabular Monte Carlo control agent
//!
//! This module implements on-policy Monte Carlo control for the simplified
//! Blackjack game. Returns observed at the end of each episode are averaged
//! per (state, action) pair, visited at most once per episode; the running
//! average uses the 1/n sample-average stepsize, so no learning rate needs
//! tuning.

pub mod monte_carlo;
pub mod serialization;
pub mod value_table;

pub use monte_carlo::{DRAW_FLOOR, MonteCarloAgent, Step};
pub use serialization::{SavedPolicy, TrainingMetadata};
pub use value_table::{Entry, ValueTable};
