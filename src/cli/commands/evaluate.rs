//! Evaluate command - Evaluate a trained policy

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    agent::SavedPolicy,
    cli::output::{format_number, print_kv, print_section},
    game::{DEFAULT_TARGET, Table},
    pipeline::{EvaluationConfig, EvaluationPipeline, ProgressObserver},
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate a trained policy")]
pub struct EvaluateArgs {
    /// Path to trained policy file
    pub policy: PathBuf,

    /// Number of evaluation episodes
    #[arg(long, short = 'e', default_value_t = 1000)]
    pub episodes: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export results to file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Show progress bar
    #[arg(long, default_value_t = true)]
    pub progress: bool,
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    println!("Loading policy from: {}", args.policy.display());
    let saved = SavedPolicy::load_from_file(&args.policy)?;
    let mut agent = saved.to_agent()?;

    print_section("Loaded Policy");
    if let Some(episodes) = saved.metadata.episodes_trained {
        print_kv("Episodes trained", &format_number(episodes));
    }
    if let Some(seed) = saved.metadata.seed {
        print_kv("Training seed", &seed.to_string());
    }
    print_kv("Exploration", &format!("{:.2}", agent.exploration()));
    print_kv("States learned", &format_number(agent.value_table().len()));

    let target = saved.metadata.target.unwrap_or(DEFAULT_TARGET);
    let mut table = Table::new(target);

    let mut pipeline = EvaluationPipeline::new(EvaluationConfig {
        episodes: args.episodes,
        seed: args.seed,
    });
    if args.progress {
        pipeline = pipeline.with_observer(Box::new(ProgressObserver::new()));
    }

    let result = pipeline.run(&mut agent, &mut table)?;

    print_section("Evaluation Results");
    print_kv("Episodes", &format_number(result.total_episodes));
    print_kv("Wins", &format_number(result.wins));
    print_kv("Win rate", &format!("{:.1}%", result.win_percentage()));
    println!("\nA win is a hand that does not bust; no opponent is simulated.");

    if let Some(path) = &args.export {
        result.save(path)?;
        println!("Results exported to: {}", path.display());
    }

    Ok(())
}
