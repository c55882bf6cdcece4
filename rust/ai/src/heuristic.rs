//! Heuristic AI policy.
//!
//! Provides the default opponent: a confidence score from the visible hand
//! fed into a fixed probability table. Stronger hands lean towards raising,
//! the first betting round is looser than the final one, and every bracket
//! keeps a small chance to bluff.

use rand::{Rng, RngCore};

use crate::dialogue;
use crate::{Decision, DecisionContext, Intent, Opponent};
use seotda_engine::cards::Card;
use seotda_engine::game::BettingRound;
use seotda_engine::hand::evaluate;
use seotda_engine::player::BettingAction;

/// Probability of bluff-calling a raise with a very weak hand.
pub const BLUFF_CALL: f64 = 0.3;

/// Minimum confidence that always calls a raise (exclusive).
pub const CALL_RAISE_ABOVE: f64 = 0.2;

/// One row of the probability table: applies when confidence is strictly
/// above `above`. Fold takes what raise and call leave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub above: f64,
    pub raise: f64,
    pub call: f64,
}

impl Bracket {
    pub fn fold(&self) -> f64 {
        (1.0 - self.raise - self.call).max(0.0)
    }
}

const FIRST: [Bracket; 4] = [
    Bracket {
        above: 0.6,
        raise: 0.90,
        call: 0.10,
    },
    Bracket {
        above: 0.3,
        raise: 0.25,
        call: 0.70,
    },
    Bracket {
        above: 0.1,
        raise: 0.10,
        call: 0.75,
    },
    Bracket {
        above: f64::NEG_INFINITY,
        raise: 0.08,
        call: 0.60,
    },
];

const FINAL: [Bracket; 4] = [
    Bracket {
        above: 0.7,
        raise: 0.80,
        call: 0.20,
    },
    Bracket {
        above: 0.4,
        raise: 0.25,
        call: 0.60,
    },
    Bracket {
        above: 0.2,
        raise: 0.10,
        call: 0.50,
    },
    Bracket {
        above: f64::NEG_INFINITY,
        raise: 0.03,
        call: 0.20,
    },
];

/// Table rows for a betting round, strongest first.
pub fn table(round: BettingRound) -> &'static [Bracket] {
    match round {
        BettingRound::First => &FIRST,
        BettingRound::Final => &FINAL,
    }
}

/// The row that applies to `confidence`.
pub fn bracket(round: BettingRound, confidence: f64) -> Bracket {
    let rows = table(round);
    rows.iter()
        .copied()
        .find(|b| confidence > b.above)
        .unwrap_or(rows[rows.len() - 1])
}

/// Hand confidence in [0, 1].
///
/// One card is judged by kind and month; two cards by the rank score.
/// Malformed cards score as the weakest hand.
pub fn confidence(cards: &[Card]) -> f64 {
    match cards {
        [] => 0.1,
        [c] => {
            if !c.is_valid() {
                tracing::warn!(card = ?c, "malformed card, assuming weakest hand");
                return 0.1;
            }
            if c.is_light() {
                0.8
            } else if c.month >= 8 {
                0.6
            } else if c.month >= 5 {
                0.4
            } else {
                0.2
            }
        }
        _ => match evaluate(cards) {
            Ok(rank) => match rank.score {
                1000.. => 1.0,
                900.. => 0.9,
                894.. => 0.8,
                7.. => 0.6,
                4.. => 0.4,
                1.. => 0.2,
                _ => 0.1,
            },
            Err(e) => {
                tracing::warn!(error = %e, "hand could not be ranked, assuming weakest hand");
                0.1
            }
        },
    }
}

/// Decides the AI's action.
///
/// Facing a raise only call or fold is possible. Otherwise a draw against
/// the table row for the phase and confidence. A raise the AI cannot fund
/// (pot above its cash, or an empty pot) is turned into a call.
pub fn decide_action(ctx: &DecisionContext, rng: &mut dyn RngCore) -> Decision {
    let conf = confidence(&ctx.cards);
    let roll: f64 = rng.random();

    let mut action = if ctx.opponent_just_raised {
        if conf > CALL_RAISE_ABOVE || roll < BLUFF_CALL {
            BettingAction::Call
        } else {
            BettingAction::Fold
        }
    } else {
        let row = bracket(ctx.phase, conf);
        if roll < row.raise {
            BettingAction::Raise
        } else if roll < row.raise + row.call {
            BettingAction::Call
        } else {
            BettingAction::Fold
        }
    };

    let mut downgraded = false;
    if action == BettingAction::Raise && (ctx.pot == 0 || ctx.pot > ctx.ai_cash) {
        tracing::debug!(pot = ctx.pot, cash = ctx.ai_cash, "raise unaffordable, calling instead");
        action = BettingAction::Call;
        downgraded = true;
    }

    let amount = match action {
        BettingAction::Raise => ctx.pot,
        BettingAction::Call | BettingAction::Fold => 0,
    };
    tracing::debug!(
        phase = %ctx.phase,
        confidence = conf,
        opponent_raised = ctx.opponent_just_raised,
        action = %action,
        "ai decision"
    );
    Decision {
        intent: Intent::from(action),
        confidence: conf,
        line: dialogue::line_for(action, amount, rng),
        downgraded,
    }
}

/// The default opponent.
#[derive(Debug, Clone, Default)]
pub struct HeuristicOpponent;

impl HeuristicOpponent {
    pub fn new() -> Self {
        Self
    }
}

impl Opponent for HeuristicOpponent {
    fn decide(&mut self, ctx: &DecisionContext, rng: &mut dyn RngCore) -> Decision {
        decide_action(ctx, rng)
    }

    fn name(&self) -> &str {
        "HeuristicAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn n(m: u8) -> Card {
        Card::normal(m).unwrap()
    }

    #[test]
    fn one_card_confidence() {
        assert_eq!(confidence(&[]), 0.1);
        assert_eq!(confidence(&[Card::light(1).unwrap()]), 0.8);
        assert_eq!(confidence(&[n(9)]), 0.6);
        assert_eq!(confidence(&[n(5)]), 0.4);
        assert_eq!(confidence(&[n(2)]), 0.2);
    }

    #[test]
    fn two_card_confidence_follows_rank() {
        assert_eq!(confidence(&[Card::light(3).unwrap(), Card::light(8).unwrap()]), 1.0);
        assert_eq!(confidence(&[n(6), n(6)]), 0.9);
        assert_eq!(confidence(&[n(1), n(2)]), 0.8);
        assert_eq!(confidence(&[n(3), n(5)]), 0.6);
        assert_eq!(confidence(&[n(1), n(3)]), 0.4);
        assert_eq!(confidence(&[n(5), n(6)]), 0.2);
        assert_eq!(confidence(&[n(3), n(7)]), 0.1);
    }

    #[test]
    fn malformed_cards_are_weakest() {
        let bogus = Card {
            month: 12,
            kind: seotda_engine::cards::CardKind::Normal,
        };
        assert_eq!(confidence(&[bogus]), 0.1);
        assert_eq!(confidence(&[bogus, n(3)]), 0.1);
    }

    #[test]
    fn bracket_lookup_is_exclusive() {
        assert_eq!(bracket(BettingRound::First, 0.6).raise, 0.25);
        assert_eq!(bracket(BettingRound::First, 0.8).raise, 0.90);
        assert_eq!(bracket(BettingRound::Final, 0.1).raise, 0.03);
    }

    #[test]
    fn empty_pot_raise_becomes_call() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let ctx = DecisionContext {
            cards: vec![Card::light(3).unwrap(), Card::light(8).unwrap()],
            phase: BettingRound::First,
            opponent_just_raised: false,
            pot: 0,
            ai_cash: 10_000,
        };
        for _ in 0..50 {
            let d = decide_action(&ctx, &mut rng);
            assert_ne!(d.intent, Intent::Raise);
        }
    }
}
