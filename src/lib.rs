//! Tabular Monte Carlo control sandbox for a simplified Blackjack game
//!
//! This crate provides:
//! - A one-hand Blackjack environment (cards drawn uniformly from 1-10)
//! - A tabular Monte Carlo control agent with ε-greedy selection
//! - Training and evaluation pipelines with composable observers
//! - Policy persistence and an interactive play mode

pub mod agent;
pub mod cli;
pub mod error;
pub mod game;
pub mod pipeline;
pub mod ports;

pub use agent::{MonteCarloAgent, SavedPolicy, Step, TrainingMetadata, ValueTable};
pub use error::{Error, Result};
pub use game::{Action, HandOutcome, RoundOutcome, Table, Transition};
pub use pipeline::{
    EvaluationConfig, EvaluationPipeline, EvaluationResult, TrainingConfig, TrainingPipeline,
    TrainingResult,
};
