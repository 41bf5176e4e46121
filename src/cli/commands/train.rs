//! Train command - Train the Monte Carlo agent

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::{
    agent::{MonteCarloAgent, SavedPolicy, TrainingMetadata},
    cli::output::{format_number, print_kv, print_section},
    game::{DEFAULT_TARGET, Table},
    pipeline::{ProgressObserver, TrainingConfig, TrainingPipeline},
};

#[derive(Parser, Debug)]
#[command(about = "Train the Monte Carlo agent")]
pub struct TrainArgs {
    /// Number of training episodes
    #[arg(long, short = 'e', default_value_t = 1000)]
    pub episodes: usize,

    /// Exploration rate (probability of a uniform random action)
    #[arg(long, default_value_t = 0.2)]
    pub exploration: f64,

    /// Bust threshold
    #[arg(long, default_value_t = DEFAULT_TARGET)]
    pub target: u32,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file for the trained policy
    #[arg(long, short = 'O')]
    pub output: Option<PathBuf>,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Show progress bar
    #[arg(long, default_value_t = true)]
    pub progress: bool,
}

pub fn execute(args: TrainArgs) -> Result<()> {
    if !(0.0..=1.0).contains(&args.exploration) {
        return Err(anyhow!(
            "Invalid exploration rate {} (expected a probability in [0, 1])",
            args.exploration
        ));
    }

    let mut agent = MonteCarloAgent::new(args.exploration);
    let mut table = Table::new(args.target);

    let mut pipeline = TrainingPipeline::new(TrainingConfig {
        episodes: args.episodes,
        seed: args.seed,
    });
    if args.progress {
        pipeline = pipeline.with_observer(Box::new(ProgressObserver::new()));
    }

    let result = pipeline.run(&mut agent, &mut table)?;

    print_section("Training Complete");
    print_kv("Episodes", &format_number(result.total_episodes));
    print_kv("Wins", &format_number(result.wins));
    print_kv("Losses", &format_number(result.losses));
    print_kv("Win rate", &format!("{:.1}%", result.win_rate * 100.0));
    print_kv("States learned", &format_number(agent.value_table().len()));

    if let Some(path) = &args.summary {
        result.save(path)?;
        println!("\nSummary written to: {}", path.display());
    }

    if let Some(path) = &args.output {
        let metadata = TrainingMetadata {
            episodes_trained: Some(result.total_episodes),
            target: Some(args.target),
            seed: args.seed,
        };
        SavedPolicy::from_agent(&agent, metadata).save_to_file(path)?;
        println!("Policy saved to: {}", path.display());
    }

    Ok(())
}
