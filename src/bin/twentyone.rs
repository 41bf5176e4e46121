//! Twentyone CLI - Monte Carlo control sandbox for simplified Blackjack
//!
//! This CLI provides a unified interface for:
//! - Training the tabular Monte Carlo agent
//! - Evaluating a saved policy
//! - Playing an interactive hand against the trained machine

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "twentyone")]
#[command(version, about = "Monte Carlo control sandbox for simplified Blackjack", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train the Monte Carlo agent
    Train(twentyone::cli::commands::train::TrainArgs),

    /// Evaluate a trained policy
    Evaluate(twentyone::cli::commands::evaluate::EvaluateArgs),

    /// Play a hand against the trained machine
    Play(twentyone::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Train(args) => twentyone::cli::commands::train::execute(args),
        Commands::Evaluate(args) => twentyone::cli::commands::evaluate::execute(args),
        Commands::Play(args) => twentyone::cli::commands::play::execute(args),
    }
}
