//! Flavor text for the AI seat.
//!
//! Lookups are deterministic by category; only the choice among variants
//! uses the caller's RNG.

use rand::seq::IndexedRandom;
use rand::RngCore;

use seotda_engine::game::BettingRound;
use seotda_engine::player::BettingAction;

const CALL: &[&str] = &[
    "Hmm... I'll follow.",
    "Call, for now.",
    "Looks decent to me.",
    "I'll go along with it.",
    "This should be fun.",
];

const RAISE: &[&str] = &[
    "That should do it. {amount}!",
    "Let's make it interesting! {amount}!",
    "I like my cards. {amount}!",
    "Let's see what you've got! {amount}!",
    "Too easy so far. {amount}!",
];

const FOLD: &[&str] = &[
    "I'll sit this one out.",
    "Not much of a hand... fold!",
    "Not yet.",
    "Bad luck.",
    "Next time...",
];

const WIN: &[&str] = &[
    "Ha! I win this one. Try again!",
    "Luck was on my side. Good game!",
    "My hand was better. So close!",
    "Looks like I got lucky this time!",
    "Seventy percent luck, thirty percent skill. My turn this time!",
];

const LOSE: &[&str] = &[
    "Ah... you win. Congratulations!",
    "You got me completely. Well played!",
    "I lost this one. Not next time!",
    "Great round! My hand was too weak.",
    "Your luck was better... total defeat!",
];

const TIE: &[&str] = &[
    "Huh... the same? The pot stays, again!",
    "A draw! The pot keeps growing!",
    "We must be evenly matched! Once more!",
    "That almost never happens! Replay!",
    "The pot stays put! Even more exciting!",
];

const THINKING_FIRST: &[&str] = &[
    "Your opponent is weighing the first card...",
    "Your opponent is checking the first card...",
    "Your opponent is deciding what to do...",
];

const THINKING_FINAL: &[&str] = &[
    "Your opponent is studying the hand...",
    "Your opponent is thinking...",
    "Your opponent is eyeing you suspiciously...",
    "Your opponent looks confident...",
];

/// Round result from the AI's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    Win,
    Lose,
    Tie,
}

pub fn lines(action: BettingAction) -> &'static [&'static str] {
    match action {
        BettingAction::Call => CALL,
        BettingAction::Raise => RAISE,
        BettingAction::Fold => FOLD,
    }
}

pub fn reaction_lines(reaction: Reaction) -> &'static [&'static str] {
    match reaction {
        Reaction::Win => WIN,
        Reaction::Lose => LOSE,
        Reaction::Tie => TIE,
    }
}

pub fn thinking_lines(round: BettingRound) -> &'static [&'static str] {
    match round {
        BettingRound::First => THINKING_FIRST,
        BettingRound::Final => THINKING_FINAL,
    }
}

fn pick(options: &[&str], rng: &mut dyn RngCore) -> String {
    options.choose(rng).copied().unwrap_or("...").to_string()
}

/// A line for `action`. Raise lines carry the amount.
pub fn line_for(action: BettingAction, amount: u32, rng: &mut dyn RngCore) -> String {
    pick(lines(action), rng).replace("{amount}", &amount.to_string())
}

pub fn reaction(reaction: Reaction, rng: &mut dyn RngCore) -> String {
    pick(reaction_lines(reaction), rng)
}

pub fn thinking(round: BettingRound, rng: &mut dyn RngCore) -> String {
    pick(thinking_lines(round), rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn raise_lines_embed_amount() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        for _ in 0..10 {
            let line = line_for(BettingAction::Raise, 2_400, &mut rng);
            assert!(line.contains("2400"), "{line}");
            assert!(!line.contains("{amount}"));
        }
    }

    #[test]
    fn every_category_has_variants() {
        for a in [BettingAction::Call, BettingAction::Raise, BettingAction::Fold] {
            assert_eq!(lines(a).len(), 5);
        }
        for r in [Reaction::Win, Reaction::Lose, Reaction::Tie] {
            assert!(!reaction_lines(r).is_empty());
        }
        assert_eq!(thinking_lines(BettingRound::First).len(), 3);
    }
}
