//! Parsing of interactive commands and card arguments.

use seotda_engine::cards::Card;
use seotda_game::Command;

/// Outcome of parsing one line typed at the `play` prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Command(Command),
    /// Dump the debug state
    State,
    Quit,
    Invalid(String),
}

/// Parses a prompt line (case-insensitive).
///
/// ```rust
/// # use seotda_cli::validation::{parse_player_command, ParseResult};
/// use seotda_game::Command;
///
/// assert_eq!(parse_player_command("R"), ParseResult::Command(Command::Raise));
/// assert_eq!(parse_player_command("quit"), ParseResult::Quit);
/// assert!(matches!(parse_player_command("bet 500"), ParseResult::Invalid(_)));
/// ```
pub fn parse_player_command(input: &str) -> ParseResult {
    match input.trim().to_ascii_lowercase().as_str() {
        "c" | "call" => ParseResult::Command(Command::Call),
        "r" | "raise" => ParseResult::Command(Command::Raise),
        "f" | "fold" => ParseResult::Command(Command::Fold),
        "n" | "new" => ParseResult::Command(Command::NewGame),
        "s" | "state" => ParseResult::State,
        "q" | "quit" => ParseResult::Quit,
        "" => ParseResult::Invalid("Enter call, raise, fold, new, state or quit".to_string()),
        other => ParseResult::Invalid(format!(
            "Unrecognized command '{other}'. Enter call, raise, fold, new, state or quit"
        )),
    }
}

/// Parses exactly two cards such as `3L 8L`. Duplicates are left to the
/// hand evaluator.
pub fn parse_cards(args: &[String]) -> Result<Vec<Card>, String> {
    if args.len() != 2 {
        return Err(format!("expected 2 cards, got {}", args.len()));
    }
    let cards = args
        .iter()
        .map(|s| s.parse::<Card>().map_err(|e| e.to_string()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_and_long_forms() {
        for (input, cmd) in [
            ("c", Command::Call),
            ("CALL", Command::Call),
            ("f", Command::Fold),
            ("new", Command::NewGame),
        ] {
            assert_eq!(parse_player_command(input), ParseResult::Command(cmd));
        }
        assert_eq!(parse_player_command("s"), ParseResult::State);
    }

    #[test]
    fn empty_line_is_invalid() {
        assert!(matches!(parse_player_command("   "), ParseResult::Invalid(_)));
    }

    #[test]
    fn card_arguments() {
        let args = vec!["3L".to_string(), "8l".to_string()];
        let cards = parse_cards(&args).unwrap();
        assert!(cards.iter().all(|c| c.is_light()));

        assert!(parse_cards(&["3L".to_string()]).is_err());
        assert!(parse_cards(&["11".to_string(), "2".to_string()]).is_err());
        assert!(parse_cards(&["2".to_string(), "2".to_string()]).is_ok());
    }
}
