//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "seotda", version, about = "Seotda card game against an AI opponent")]
pub struct SeotdaCli {
    /// Log engine and session activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play interactively against the AI
    Play {
        #[arg(long)]
        seed: Option<u64>,
        /// Delay multiplier between steps; 0 plays without pauses
        #[arg(long)]
        pace: Option<f64>,
        /// Stop after this many decided rounds
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        rounds: Option<u32>,
        /// Opponent kind: heuristic or passive
        #[arg(long)]
        opponent: Option<String>,
    },
    /// Let a heuristic autopilot play the human seat
    Sim {
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
        rounds: u32,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        opponent: Option<String>,
    },
    /// Evaluate a two-card hand, e.g. `rank 3L 8L`
    Rank {
        #[arg(num_args = 2, value_names = ["CARD", "CARD"])]
        cards: Vec<String>,
    },
    /// Shuffle and deal one showdown
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
