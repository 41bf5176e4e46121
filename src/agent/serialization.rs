//! Policy persistence
//!
//! Saved policies are pretty-printed JSON: a versioned envelope around the
//! agent state (value table with visit counts, exploration rate, rng seed)
//! plus training metadata. The format is textual key-value and round-trips
//! losslessly.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::agent::monte_carlo::{AgentState, MonteCarloAgent};

/// Metadata about the training run that produced a policy
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingMetadata {
    /// Number of episodes trained
    pub episodes_trained: Option<usize>,
    /// Bust threshold used during training
    pub target: Option<u32>,
    /// Random seed used (if any)
    pub seed: Option<u64>,
}

/// Serializable representation of a trained agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedPolicy {
    /// Version of the save format (for future compatibility)
    pub version: u32,
    state: AgentState,
    /// Training metadata
    pub metadata: TrainingMetadata,
}

impl SavedPolicy {
    /// Current save format version
    pub const VERSION: u32 = 1;

    /// Create from a trained agent
    pub fn from_agent(agent: &MonteCarloAgent, metadata: TrainingMetadata) -> Self {
        Self {
            version: Self::VERSION,
            state: agent.export_state(),
            metadata,
        }
    }

    /// Reconstruct the agent
    pub fn to_agent(&self) -> Result<MonteCarloAgent> {
        if self.version != Self::VERSION {
            return Err(anyhow!(
                "Unsupported policy format version: {}. Expected {}",
                self.version,
                Self::VERSION
            ));
        }

        Ok(MonteCarloAgent::from_state(self.state.clone()))
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())
            .with_context(|| format!("Failed to create file: {}", path.as_ref().display()))?;
        let writer = BufWriter::new(file);

        serde_json::to_writer_pretty(writer, self).context("Failed to serialize policy")?;

        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())
            .with_context(|| format!("Failed to open file: {}", path.as_ref().display()))?;
        let reader = BufReader::new(file);

        serde_json::from_reader(reader).context("Failed to deserialize policy")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        agent::monte_carlo::Step,
        game::Action,
    };

    #[test]
    fn roundtrip_preserves_values_and_visits() -> Result<()> {
        let mut agent = MonteCarloAgent::new(0.2).with_seed(7);
        agent.update_policy(&[
            Step {
                state: 12,
                action: Action::Draw,
                reward: 0.0,
            },
            Step {
                state: 17,
                action: Action::Stand,
                reward: 1.0,
            },
        ]);

        let saved = SavedPolicy::from_agent(&agent, TrainingMetadata::default());
        let json = serde_json::to_string_pretty(&saved)?;
        let loaded: SavedPolicy = serde_json::from_str(&json)?;
        let restored = loaded.to_agent()?;

        for state in agent.value_table().states() {
            for action in Action::ALL {
                assert_eq!(
                    restored.value_table().value(state, action),
                    agent.value_table().value(state, action)
                );
                assert_eq!(
                    restored.value_table().visits(state, action),
                    agent.value_table().visits(state, action)
                );
            }
        }
        assert_eq!(restored.exploration(), agent.exploration());

        Ok(())
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let agent = MonteCarloAgent::new(0.2).with_seed(7);
        let mut saved = SavedPolicy::from_agent(&agent, TrainingMetadata::default());
        saved.version = SavedPolicy::VERSION + 1;
        assert!(saved.to_agent().is_err());
    }
}
