//! Play command - Interactive hand against the trained machine

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::{
    agent::{MonteCarloAgent, SavedPolicy},
    cli::output::print_section,
    game::{Action, DEFAULT_TARGET, RoundOutcome, Table},
    pipeline::{ProgressObserver, TrainingConfig, TrainingPipeline},
};

/// The machine draws outright below this total during interactive play.
/// The agent's own draw floor sits one higher, so the guard only shortcuts
/// the policy lookup on clearly low hands.
const MACHINE_DRAW_FLOOR: u32 = 14;

#[derive(Parser, Debug)]
#[command(about = "Play a hand against the trained machine")]
pub struct PlayArgs {
    /// Path to a trained policy file (a fresh agent is trained when absent)
    #[arg(long)]
    pub policy: Option<PathBuf>,

    /// Warm-up training episodes when no policy file is given
    #[arg(long, short = 'e', default_value_t = 1000)]
    pub episodes: usize,

    /// Bust threshold
    #[arg(long, default_value_t = DEFAULT_TARGET)]
    pub target: u32,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut table = Table::new(args.target);

    let mut agent = match &args.policy {
        Some(path) => {
            println!("Loading policy from: {}", path.display());
            SavedPolicy::load_from_file(path)?.to_agent()?
        }
        None => {
            println!("No policy file given; training a fresh agent first.");
            let mut agent = MonteCarloAgent::new(0.2);
            let mut pipeline = TrainingPipeline::new(TrainingConfig {
                episodes: args.episodes,
                seed: args.seed,
            })
            .with_observer(Box::new(ProgressObserver::new()));
            pipeline.run(&mut agent, &mut table)?;
            agent
        }
    };

    if let Some(seed) = args.seed {
        table.set_rng_seed(seed.wrapping_add(2));
    }

    play_round(&mut agent, &mut table)
}

fn play_round(agent: &mut MonteCarloAgent, table: &mut Table) -> Result<()> {
    table.reset();
    print_section("Blackjack: you against the trained machine");

    println!("\n--- Your turn ---");
    let mut human_total = 0u32;
    loop {
        println!("Your total: {human_total}");
        match prompt_choice()? {
            Action::Draw => {
                let card = table.draw_card();
                human_total += card;
                println!("You drew a {card}. Total: {human_total}");
                if human_total > table.target() {
                    println!("Bust! The machine wins.");
                    return Ok(());
                }
            }
            Action::Stand => {
                println!("You stand at {human_total}.");
                break;
            }
        }
    }

    println!("\n--- Machine's turn ---");
    let mut machine_total = 0u32;
    loop {
        println!("Machine total: {machine_total}");
        let action = if machine_total < MACHINE_DRAW_FLOOR {
            Action::Draw
        } else {
            agent.select_action(machine_total)
        };

        match action {
            Action::Draw => {
                let card = table.draw_card();
                machine_total += card;
                println!("The machine draws a {card}. Total: {machine_total}");
                if machine_total > table.target() {
                    println!("The machine busts! You win.");
                    return Ok(());
                }
            }
            Action::Stand => {
                println!("The machine stands at {machine_total}.");
                break;
            }
        }
    }

    println!("\n--- Result ---");
    println!("Your total: {human_total}");
    println!("Machine total: {machine_total}");
    match RoundOutcome::settle(human_total, machine_total, table.target()) {
        RoundOutcome::PlayerWins => println!("You win!"),
        RoundOutcome::OpponentWins => println!("The machine wins."),
        RoundOutcome::Tie => println!("It's a tie!"),
    }

    Ok(())
}

/// Prompt until the user enters `1` (draw) or `0` (stand)
fn prompt_choice() -> Result<Action> {
    loop {
        print!("Draw (1) or Stand (0)? ");
        io::stdout().flush()?;

        let mut input = String::new();
        let bytes = io::stdin().read_line(&mut input)?;
        if bytes == 0 {
            return Err(anyhow!("input stream closed"));
        }

        match parse_choice(&input) {
            Some(action) => return Ok(action),
            None => println!("Invalid choice. Enter 1 (draw) or 0 (stand)."),
        }
    }
}

fn parse_choice(input: &str) -> Option<Action> {
    match input.trim() {
        "1" => Some(Action::Draw),
        "0" => Some(Action::Stand),
        _ => None,
    }
}
