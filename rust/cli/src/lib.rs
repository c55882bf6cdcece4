//! # Seotda CLI Library
//!
//! Terminal front end for the Seotda engine: an interactive table against
//! the AI plus a few inspection commands.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments, runs one subcommand and returns the process
//! exit code. [`run_with_input`] does the same with an explicit input
//! stream, which is how `play` is driven from tests.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["seotda", "play", "--seed", "7", "--pace", "0.5"];
//! let code = seotda_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: play against the AI at the terminal
//! - `sim`: let a heuristic autopilot play the human seat
//! - `rank`: evaluate a two-card hand
//! - `deal`: shuffle and deal one showdown
//! - `cfg`: show the resolved configuration

use clap::Parser;
use std::io::{BufRead, Write};

pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod ui;
pub mod validation;

use cli::{Commands, SeotdaCli};
use commands::{
    PlayOptions, handle_cfg_command, handle_deal_command, handle_play_command,
    handle_rank_command, handle_sim_command,
};
use seotda_game::logging::{LogFormat, init_logging};

pub use error::CliError;

/// Runs the CLI with standard input as the `play` input.
///
/// Returns `0` on success, `2` on errors and `130` when input ends before
/// `play` is finished.
///
/// ```
/// use std::io;
/// let args = vec!["seotda", "deal", "--seed", "42"];
/// let code = seotda_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut lock = stdin.lock();
    run_with_input(args, &mut lock, out, err)
}

pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
    let cli = match SeotdaCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write!(err, "{}", e);
                    exit_code::ERROR
                }
            };
        }
    };

    // A subscriber may already be installed (tests, embedding); keep it.
    let filter = if cli.verbose { "debug" } else { "warn" };
    let _ = init_logging(filter, LogFormat::Text);

    let result = match cli.cmd {
        Commands::Play {
            seed,
            pace,
            rounds,
            opponent,
        } => {
            let opts = PlayOptions {
                seed,
                pace,
                rounds,
                opponent,
            };
            handle_play_command(opts, out, err, input)
        }
        Commands::Sim {
            rounds,
            seed,
            opponent,
        } => handle_sim_command(rounds, seed, opponent, out, err),
        Commands::Rank { cards } => handle_rank_command(&cards, out, err),
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            tracing::info!(reason = %msg, "session interrupted");
            exit_code::INTERRUPTED
        }
        // already reported by the handler
        Err(CliError::InvalidInput(_) | CliError::Config(_)) => exit_code::ERROR,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}
