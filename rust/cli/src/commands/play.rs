//! # Play Command
//!
//! Interactive Seotda against the AI. The table is printed before every
//! prompt; queued steps (dealing, the opponent thinking, the reveal) are
//! waited out in real time, scaled by `pace`, and their events printed as
//! they fire.
//!
//! Input: `call|c`, `raise|r`, `fold|f`, `new|n`, `state|s`, `quit|q`.
//! End of input stops the session and exits with the interrupted code.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_event, format_snapshot, format_stats};
use crate::io_utils::{pause, read_stdin_line};
use crate::ui;
use crate::validation::{ParseResult, parse_player_command};
use seotda_engine::player::Seat;
use seotda_engine::rules::available_actions;
use seotda_game::{GameConfig, Pacing, Session, Step};
use std::io::{BufRead, Write};

/// Flags of the `play` command; unset values come from the config layers.
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    pub seed: Option<u64>,
    pub pace: Option<f64>,
    pub rounds: Option<u32>,
    pub opponent: Option<String>,
}

pub fn handle_play_command(
    opts: PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let resolved = match config::load_with_sources()
        .and_then(|r| r.with_flags(opts.seed, opts.pace, opts.opponent.clone()))
    {
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
        pacing: Pacing::scaled(cfg.pace),
    })?;
    writeln!(
        out,
        "play: seed={} opponent={} pace={}",
        session.seed(),
        session.opponent_name(),
        cfg.pace
    )?;

    let finished = loop {
        advance(&mut session, opts.rounds, out)?;
        if session.is_over() || limit_reached(&session, opts.rounds) {
            break true;
        }

        writeln!(out, "\n{}", format_snapshot(&session.snapshot()))?;
        let options = available_actions(&session.engine().bet_context(Seat::Human));
        ui::write_prompt(out, &options)?;

        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out)?;
            break false;
        };
        match parse_player_command(&line) {
            ParseResult::Command(cmd) => {
                if let Err(e) = session.handle(cmd) {
                    ui::write_error(err, &e.to_string())?;
                }
            }
            ParseResult::State => {
                writeln!(out, "{}", session.debug_state().to_json()?)?;
            }
            ParseResult::Quit => break true,
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    };

    flush_events(&mut session, out)?;
    writeln!(out, "\n{}", format_snapshot(&session.snapshot()))?;
    writeln!(out, "{}", format_stats(&session.stats()))?;
    if finished {
        Ok(())
    } else {
        Err(CliError::Interrupted("input closed".to_string()))
    }
}

fn limit_reached(session: &Session, rounds: Option<u32>) -> bool {
    rounds.is_some_and(|limit| session.stats().rounds >= limit)
}

/// Fires queued continuations in order, waiting out each delay, until the
/// human must act. A new round is not started once the limit is reached.
fn advance(
    session: &mut Session,
    rounds: Option<u32>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    flush_events(session, out)?;
    while let Some(ticket) = session.next_continuation() {
        if ticket.step == Step::StartRound && limit_reached(session, rounds) {
            break;
        }
        pause(ticket.delay);
        session.fire(ticket)?;
        flush_events(session, out)?;
    }
    Ok(())
}

fn flush_events(session: &mut Session, out: &mut dyn Write) -> Result<(), CliError> {
    for event in session.drain_events() {
        if let Some(line) = format_event(&event) {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(input: &str, opts: PlayOptions) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let result = handle_play_command(opts, &mut out, &mut err, &mut stdin);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    fn instant(seed: u64) -> PlayOptions {
        PlayOptions {
            seed: Some(seed),
            pace: Some(0.0),
            rounds: None,
            opponent: Some("passive".to_string()),
        }
    }

    #[test]
    fn quit_ends_cleanly() {
        let (result, out, _) = play("q\n", instant(1));
        assert!(result.is_ok());
        assert!(out.contains("play: seed=1 opponent=ScriptedAI"));
        assert!(out.contains("Your move [call 100 | raise 1000 | fold]"));
    }

    #[test]
    fn fold_finishes_a_round_under_a_limit() {
        let opts = PlayOptions {
            rounds: Some(1),
            ..instant(2)
        };
        let (result, out, _) = play("fold\n", opts);
        assert!(result.is_ok());
        assert!(out.contains("Round 1: Opponent won 1000"));
        assert!(out.contains("Rounds: 1"));
    }

    #[test]
    fn bad_input_reports_and_continues() {
        let (result, _, err) = play("shove\nraise\nraise\nq\n", instant(3));
        assert!(result.is_ok());
        assert!(err.contains("Unrecognized command 'shove'"));
        assert_eq!(err.lines().count(), 1);
    }

    #[test]
    fn end_of_input_is_an_interruption() {
        let (result, _, _) = play("", instant(4));
        assert!(matches!(result, Err(CliError::Interrupted(_))));
    }

    #[test]
    fn state_prints_debug_json() {
        let (_, out, _) = play("s\nq\n", instant(5));
        assert!(out.contains("\"human_options\""));
    }
}
