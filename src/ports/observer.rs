//! Observer port - abstraction for run observation and data collection
//!
//! This port defines the interface for observing training and evaluation
//! events, allowing composable data collection without coupling the
//! pipelines to specific output formats or metrics.

use crate::{Result, game::HandOutcome};

/// Observer trait for monitoring training and evaluation runs
///
/// Observers can be composed to collect different types of data during a
/// run. Examples include progress bars for user feedback and metrics
/// tracking for result reporting.
///
/// # Event Sequence
///
/// 1. `on_run_start(total_episodes)` - Once at the beginning
/// 2. `on_episode_end(episode_num, outcome)` - After each episode
/// 3. `on_run_end()` - Once at the end
pub trait Observer {
    /// Called once before the first episode.
    fn on_run_start(&mut self, _total_episodes: usize) -> Result<()> {
        Ok(())
    }

    /// Called after each episode with its outcome.
    ///
    /// `episode_num` is 1-based.
    fn on_episode_end(&mut self, _episode_num: usize, _outcome: HandOutcome) -> Result<()> {
        Ok(())
    }

    /// Called once after the last episode.
    fn on_run_end(&mut self) -> Result<()> {
        Ok(())
    }
}
