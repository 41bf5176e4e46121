//! Observer implementations for pipelines

use indicatif::{ProgressBar, ProgressStyle};

use crate::{Result, game::HandOutcome, ports::Observer};

/// Progress bar observer using indicatif
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    wins: usize,
    losses: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            wins: 0,
            losses: 0,
        }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_run_start(&mut self, total_episodes: usize) -> Result<()> {
        let pb = ProgressBar::new(total_episodes as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} hands (W:{msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_episode_end(&mut self, episode_num: usize, outcome: HandOutcome) -> Result<()> {
        match outcome {
            HandOutcome::Won => self.wins += 1,
            HandOutcome::Lost => self.losses += 1,
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(episode_num as u64);
            pb.set_message(format!("{} L:{}", self.wins, self.losses));
        }
        Ok(())
    }

    fn on_run_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish();
        }
        Ok(())
    }
}

/// Metrics-collecting observer
#[derive(Debug, Clone, Default)]
pub struct MetricsObserver {
    wins: usize,
    losses: usize,
    total_episodes: usize,
}

impl MetricsObserver {
    /// Create a new metrics observer
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wins(&self) -> usize {
        self.wins
    }

    pub fn losses(&self) -> usize {
        self.losses
    }

    pub fn total_episodes(&self) -> usize {
        self.total_episodes
    }

    /// Win rate over the episodes observed so far
    pub fn win_rate(&self) -> f64 {
        if self.total_episodes > 0 {
            self.wins as f64 / self.total_episodes as f64
        } else {
            0.0
        }
    }
}

impl Observer for MetricsObserver {
    fn on_episode_end(&mut self, _episode_num: usize, outcome: HandOutcome) -> Result<()> {
        self.total_episodes += 1;
        match outcome {
            HandOutcome::Won => self.wins += 1,
            HandOutcome::Lost => self.losses += 1,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_observer_tallies_outcomes() {
        let mut observer = MetricsObserver::new();
        observer.on_episode_end(1, HandOutcome::Won).unwrap();
        observer.on_episode_end(2, HandOutcome::Won).unwrap();
        observer.on_episode_end(3, HandOutcome::Lost).unwrap();

        assert_eq!(observer.wins(), 2);
        assert_eq!(observer.losses(), 1);
        assert_eq!(observer.total_episodes(), 3);
        assert!((observer.win_rate() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_metrics_observer_reports_zero_rate() {
        let observer = MetricsObserver::new();
        assert_eq!(observer.win_rate(), 0.0);
    }
}
