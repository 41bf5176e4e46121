//! Training and evaluation pipelines
//!
//! This module provides composable pipelines for:
//! - Training the agent over repeated episodes
//! - Evaluating a learned policy without updating it
//! - Recording observations during runs

pub mod evaluation;
pub mod observers;
pub mod training;

pub use evaluation::{EvaluationConfig, EvaluationPipeline, EvaluationResult};
// Re-export observer implementations (adapters)
pub use observers::{MetricsObserver, ProgressObserver};
pub use training::{TrainingConfig, TrainingPipeline, TrainingResult};

pub use crate::ports::Observer;
