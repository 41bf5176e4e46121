//! Training pipeline for the Monte Carlo agent

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    agent::{MonteCarloAgent, Step},
    game::{HandOutcome, Table},
    ports::Observer,
};

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of training episodes
    pub episodes: usize,

    /// Random seed
    pub seed: Option<u64>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            episodes: 1000,
            seed: None,
        }
    }
}

impl TrainingConfig {
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

/// Result of a training run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Total episodes played
    pub total_episodes: usize,

    /// Hands finished at or below the target
    pub wins: usize,

    /// Hands that busted
    pub losses: usize,

    /// Win rate
    pub win_rate: f64,

    /// Loss rate
    pub loss_rate: f64,
}

impl TrainingResult {
    /// Create a new training result
    pub fn new(total_episodes: usize, wins: usize, losses: usize) -> Self {
        let win_rate = if total_episodes > 0 {
            wins as f64 / total_episodes as f64
        } else {
            0.0
        };
        let loss_rate = if total_episodes > 0 {
            losses as f64 / total_episodes as f64
        } else {
            0.0
        };

        Self {
            total_episodes,
            wins,
            losses,
            win_rate,
            loss_rate,
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Play one hand to completion, recording the shaped trajectory
///
/// The table reports no reward on stand; the driver assigns the terminal
/// +1/-1 by checking the final total against the target. This keeps the
/// shaping rule out of the environment.
pub(crate) fn play_episode(agent: &mut MonteCarloAgent, table: &mut Table) -> Result<Vec<Step>> {
    table.reset();
    let mut trajectory = Vec::new();
    let mut state = table.total();

    while table.is_active() {
        let action = agent.select_action(state);
        let transition = table.apply(action)?;
        let reward = transition.reward.unwrap_or(if transition.total <= table.target() {
            1.0
        } else {
            -1.0
        });
        trajectory.push(Step {
            state,
            action,
            reward,
        });
        state = transition.total;
    }

    Ok(trajectory)
}

/// Training pipeline: repeated episodes feeding the agent's policy update
pub struct TrainingPipeline {
    config: TrainingConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl TrainingPipeline {
    /// Create a new training pipeline
    pub fn new(config: TrainingConfig) -> Self {
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

    /// Run training for the configured number of episodes
    pub fn run(&mut self, agent: &mut MonteCarloAgent, table: &mut Table) -> Result<TrainingResult> {
        self.config.validate()?;

        if let Some(seed) = self.config.seed {
            agent.set_rng_seed(seed);
            // Offset so the card stream differs from the exploration stream.
            table.set_rng_seed(seed.wrapping_add(1));
        }

        for observer in &mut self.observers {
            observer.on_run_start(self.config.episodes)?;
        }

        let mut wins = 0;
        let mut losses = 0;

        for episode in 0..self.config.episodes {
            let trajectory = play_episode(agent, table)?;
            agent.update_policy(&trajectory);

            let outcome = HandOutcome::from_total(table.total(), table.target());
            match outcome {
                HandOutcome::Won => wins += 1,
                HandOutcome::Lost => losses += 1,
            }

            for observer in &mut self.observers {
                observer.on_episode_end(episode + 1, outcome)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_run_end()?;
        }

        Ok(TrainingResult::new(self.config.episodes, wins, losses))
    }
}
