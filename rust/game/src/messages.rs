//! Game-message templates shown next to the table.

use seotda_engine::hand::HandRank;
use seotda_engine::player::Seat;
use seotda_engine::rules::ANTE;

pub fn call(amount: u32) -> String {
    format!("You called. ({amount})")
}

pub fn raise(amount: u32) -> String {
    if amount >= 2_000 {
        format!("Raised {amount}! The pot doubles! Your opponent looks rattled!")
    } else if amount >= 1_000 {
        format!("Raised {amount}! Feeling confident!")
    } else {
        format!("Raised {amount}. The pot has doubled!")
    }
}

pub fn fold() -> String {
    "You folded. Your opponent takes the pot.".to_string()
}

pub fn opponent_folded() -> String {
    "Your opponent folded! You win the pot!".to_string()
}

pub fn opponent_thinking() -> &'static str {
    "Your opponent is thinking..."
}

pub fn facing_raise(amount: u32) -> String {
    format!("Your opponent raised {amount}! Call or fold.")
}

pub fn your_turn(first: bool) -> &'static str {
    if first {
        "First betting: call, raise or fold."
    } else {
        "Second card is out! Final betting begins."
    }
}

pub fn new_round(round: u32) -> String {
    format!(
        "Round {round} begins! Ante of {} ({ANTE} each) added to the pot. The first card is out.",
        ANTE * 2
    )
}

pub fn tie_redeal(pot: u32) -> String {
    format!("Tie replay! The pot of {pot} stays. New cards are out!")
}

pub fn dealing_second() -> &'static str {
    "Dealing the second card..."
}

pub fn betting_over() -> &'static str {
    "Betting is over. Time for the showdown!"
}

pub fn revealing() -> &'static str {
    "Revealing the cards..."
}

pub fn showdown(human: &HandRank, ai: &HandRank, winner: Option<Seat>) -> String {
    let verdict = match winner {
        Some(Seat::Human) => "You win!",
        Some(Seat::Ai) => "Your opponent wins!",
        None => "Tie! The pot stays.",
    };
    format!("You: {} vs Opponent: {}. {verdict}", human.label, ai.label)
}

pub fn game_over(winner: Option<Seat>) -> &'static str {
    match winner {
        Some(Seat::Human) => "Congratulations! Your opponent is bankrupt!",
        Some(Seat::Ai) => "Game over! You ran out of money.",
        None => "Game over! Neither player can pay the ante.",
    }
}

pub fn new_game() -> &'static str {
    "A new game has started!"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raise_wording_scales_with_amount() {
        assert!(raise(2_400).contains("rattled"));
        assert!(raise(1_000).contains("confident"));
        assert!(raise(600).contains("doubled"));
    }

    #[test]
    fn round_banner_mentions_ante() {
        assert_eq!(
            new_round(3),
            "Round 3 begins! Ante of 1000 (500 each) added to the pot. The first card is out."
        );
    }
}
