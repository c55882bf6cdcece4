//! `deal`: shuffles a fresh deck and deals one showdown, two cards each,
//! in table order (you, opponent, you, opponent).

use crate::error::CliError;
use crate::formatters::{format_card, format_rank, seat_name};
use seotda_engine::deck::Deck;
use seotda_engine::errors::GameError;
use seotda_engine::hand::{compare_hands, evaluate};
use seotda_engine::player::Seat;
use std::cmp::Ordering;
use std::io::Write;

pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();

    let mut hands = [Vec::with_capacity(2), Vec::with_capacity(2)];
    for _ in 0..2 {
        for hand in hands.iter_mut() {
            hand.push(deck.deal().ok_or(GameError::DeckEmpty)?);
        }
    }

    writeln!(out, "Seed: {}", seed)?;
    let mut ranks = Vec::with_capacity(2);
    for (seat, hand) in [Seat::Human, Seat::Ai].into_iter().zip(&hands) {
        let rank = evaluate(hand).map_err(GameError::from)?;
        writeln!(
            out,
            "{:<9}{} {}  {}",
            seat_name(seat),
            format_card(&hand[0]),
            format_card(&hand[1]),
            format_rank(&rank)
        )?;
        ranks.push(rank);
    }
    let verdict = match compare_hands(&ranks[0], &ranks[1]) {
        Ordering::Greater => format!("Winner: {}", seat_name(Seat::Human)),
        Ordering::Less => format!("Winner: {}", seat_name(Seat::Ai)),
        Ordering::Equal => "Tie".to_string(),
    };
    writeln!(out, "{}", verdict)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(seed: u64) -> String {
        let mut out = Vec::new();
        handle_deal_command(Some(seed), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn same_seed_same_deal() {
        assert_eq!(deal(42), deal(42));
    }

    #[test]
    fn shows_both_hands_and_a_verdict() {
        let output = deal(7);
        assert!(output.starts_with("Seed: 7\n"));
        assert_eq!(output.lines().count(), 4);
        let last = output.lines().last().unwrap();
        assert!(last.starts_with("Winner: ") || last == "Tie");
    }

    #[test]
    fn random_seed_still_deals() {
        let mut out = Vec::new();
        assert!(handle_deal_command(None, &mut out).is_ok());
    }
}
