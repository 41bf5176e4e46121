//! Evaluation pipeline for a learned policy

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    agent::MonteCarloAgent,
    game::{HandOutcome, Table},
    pipeline::training::play_episode,
    ports::Observer,
};

/// Evaluation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Number of evaluation episodes
    pub episodes: usize,

    /// Random seed
    pub seed: Option<u64>,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            episodes: 1000,
            seed: None,
        }
    }
}

impl EvaluationConfig {
    /// Reject configurations that cannot produce a meaningful run
    pub fn validate(&self) -> Result<()> {
        if self.episodes == 0 {
            return Err(Error::InvalidConfiguration {
                message: "episode count must be positive".to_string(),
            });
        }
        Ok(())
    }
}

/// Result of an evaluation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Total episodes played
    pub total_episodes: usize,

    /// Hands finished at or below the target
    pub wins: usize,

    /// Win rate
    pub win_rate: f64,
}

impl EvaluationResult {
    pub fn new(total_episodes: usize, wins: usize) -> Self {
        let win_rate = if total_episodes > 0 {
            wins as f64 / total_episodes as f64
        } else {
            0.0
        };

        Self {
            total_episodes,
            wins,
            win_rate,
        }
    }

    /// Win rate as a percentage
    pub fn win_percentage(&self) -> f64 {
        self.win_rate * 100.0
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

/// Evaluation pipeline: episodes driven by action selection only
///
/// The agent's policy is not updated. A hand counts as a win when its
/// final total does not exceed the target; this is a non-bust heuristic,
/// not a win rate against an opponent.
pub struct EvaluationPipeline {
    config: EvaluationConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl EvaluationPipeline {
    /// Create a new evaluation pipeline
    pub fn new(config: EvaluationConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run evaluation for the configured number of episodes
    pub fn run(
        &mut self,
        agent: &mut MonteCarloAgent,
        table: &mut Table,
    ) -> Result<EvaluationResult> {
        self.config.validate()?;

        if let Some(seed) = self.config.seed {
            agent.set_rng_seed(seed);
            table.set_rng_seed(seed.wrapping_add(1));
        }

        for observer in &mut self.observers {
            observer.on_run_start(self.config.episodes)?;
        }

        let mut wins = 0;

        for episode in 0..self.config.episodes {
            play_episode(agent, table)?;

            let outcome = HandOutcome::from_total(table.total(), table.target());
            if outcome == HandOutcome::Won {
                wins += 1;
            }

            for observer in &mut self.observers {
                observer.on_episode_end(episode + 1, outcome)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_run_end()?;
        }

        Ok(EvaluationResult::new(self.config.episodes, wins))
    }
}
