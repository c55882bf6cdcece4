//! `sim`: the heuristic policy plays the human seat against the configured
//! opponent with no pauses, then prints the totals.
//!
//! Funds are checked after every command; any drift fails the run.

use crate::config;
use crate::error::CliError;
use crate::formatters::format_stats;
use crate::ui;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use seotda_ai::{DecisionContext, Intent, decide_action};
use seotda_engine::errors::GameError;
use seotda_engine::player::{STARTING_CASH, Seat};
use seotda_game::{Command, GameConfig, Pacing, Session};
use std::io::Write;

/// Picks the autopilot's command for the human seat.
fn autopilot_command(session: &Session, rng: &mut ChaCha20Rng) -> Command {
    let engine = session.engine();
    let Some(round) = engine.phase().betting_round() else {
        return Command::Call;
    };
    let ctx = DecisionContext {
        cards: engine.hand(Seat::Human).to_vec(),
        phase: round,
        opponent_just_raised: engine.betting().last_actor_raised,
        pot: engine.ledger().pot(),
        ai_cash: engine.ledger().cash(Seat::Human),
    };
    match decide_action(&ctx, rng).intent {
        Intent::Raise => Command::Raise,
        Intent::Fold => Command::Fold,
        Intent::Call | Intent::Unrecognized(_) => Command::Call,
    }
}

/// Applies `command`, stepping down to call and then fold when a rule
/// rejects it.
fn apply_with_fallback(session: &mut Session, command: Command) -> Result<(), GameError> {
    let mut attempt = command;
    loop {
        match session.handle(attempt) {
            Ok(()) => return Ok(()),
            Err(e @ (GameError::InsufficientFunds { .. } | GameError::RaiseNotAllowed | GameError::EmptyPot)) => {
                tracing::debug!(command = ?attempt, error = %e, "autopilot command rejected");
                attempt = match attempt {
                    Command::Raise => Command::Call,
                    Command::Call => Command::Fold,
                    _ => return Err(e),
                };
            }
            Err(e) => return Err(e),
        }
    }
}

pub fn handle_sim_command(
    rounds: u32,
    seed: Option<u64>,
    opponent: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let resolved = match config::load_with_sources().and_then(|r| r.with_flags(seed, None, opponent)) {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(e));
        }
    };
    let cfg = resolved.config;
    let mut session = Session::new(GameConfig {
        seed: cfg.seed,
        opponent: cfg.opponent,
        pacing: Pacing::instant(),
    })?;
    let expected = u64::from(STARTING_CASH) * 2;
    let mut rng = ChaCha20Rng::seed_from_u64(session.seed().wrapping_add(1));

    writeln!(
        out,
        "sim: rounds={} seed={} opponent={}",
        rounds,
        session.seed(),
        session.opponent_name()
    )?;

    while session.stats().rounds < rounds {
        session.run_until_input()?;
        if session.is_over() {
            break;
        }
        let command = autopilot_command(&session, &mut rng);
        apply_with_fallback(&mut session, command)?;

        let total = session.engine().ledger().total();
        if total != expected {
            return Err(CliError::Invariant(format!(
                "funds drifted to {total}, expected {expected}"
            )));
        }
    }

    writeln!(out, "{}", format_stats(&session.stats()))?;
    writeln!(
        out,
        "Cash: you {}, opponent {}, pot {}",
        session.cash(Seat::Human),
        session.cash(Seat::Ai),
        session.pot()
    )?;
    if let Some(outcome) = session.outcome() {
        let winner = match outcome.winner {
            Some(Seat::Human) => "you",
            Some(Seat::Ai) => "opponent",
            None => "nobody",
        };
        writeln!(out, "Game over in round {}: {} won", outcome.round, winner)?;
    }
    writeln!(out, "Conservation: ok")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_sim_is_repeatable() {
        let run = || {
            let mut out = Vec::new();
            let mut err = Vec::new();
            handle_sim_command(15, Some(8), Some("heuristic".into()), &mut out, &mut err).unwrap();
            String::from_utf8(out).unwrap()
        };
        let first = run();
        assert_eq!(first, run());
        assert!(first.contains("Conservation: ok"));
    }

    #[test]
    fn reports_the_opponent_in_use() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_sim_command(10, Some(3), Some("passive".into()), &mut out, &mut err).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("opponent=ScriptedAI"));
    }
}
