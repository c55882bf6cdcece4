//! `rank`: evaluates a two-card hand.

use crate::error::CliError;
use crate::formatters::{format_card, format_rank};
use crate::ui;
use crate::validation::parse_cards;
use seotda_engine::hand::evaluate;
use std::io::Write;

pub fn handle_rank_command(
    cards: &[String],
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let hand = match parse_cards(cards) {
        Ok(h) => h,
        Err(msg) => {
            ui::write_error(err, &msg)?;
            return Err(CliError::InvalidInput(msg));
        }
    };
    let rank = match evaluate(&hand) {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            return Err(CliError::InvalidInput(e.to_string()));
        }
    };
    writeln!(
        out,
        "{} {}: {} [{:?}]",
        format_card(&hand[0]),
        format_card(&hand[1]),
        format_rank(&rank),
        rank.category
    )?;
    Ok(())
}
