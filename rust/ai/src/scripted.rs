use rand::RngCore;
use std::collections::VecDeque;

use crate::heuristic::confidence;
use crate::{dialogue, Decision, DecisionContext, Intent, Opponent};

/// Opponent replaying a fixed list of action labels, then calling forever.
///
/// Labels go through [`Intent::from_label`], so anything other than
/// `call`, `raise` or `fold` reaches the caller as
/// [`Intent::Unrecognized`]. Used for deterministic tests and the
/// `passive` opponent.
#[derive(Debug, Clone, Default)]
pub struct ScriptedOpponent {
    script: VecDeque<String>,
}

impl ScriptedOpponent {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn always_call() -> Self {
        Self::default()
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Opponent for ScriptedOpponent {
    fn decide(&mut self, ctx: &DecisionContext, rng: &mut dyn RngCore) -> Decision {
        let intent = self
            .script
            .pop_front()
            .map(|l| Intent::from_label(&l))
            .unwrap_or(Intent::Call);
        let line = match intent.as_action() {
            Some(a) => dialogue::line_for(a, ctx.pot, rng),
            None => "...".to_string(),
        };
        Decision {
            intent,
            confidence: confidence(&ctx.cards),
            line,
            downgraded: false,
        }
    }

    fn name(&self) -> &str {
        "ScriptedAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use seotda_engine::game::BettingRound;

    #[test]
    fn replays_then_calls() {
        let mut ai = ScriptedOpponent::new(["raise", "shove"]);
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let ctx = DecisionContext {
            cards: vec![],
            phase: BettingRound::First,
            opponent_just_raised: false,
            pot: 1_000,
            ai_cash: 9_500,
        };
        assert_eq!(ai.decide(&ctx, &mut rng).intent, Intent::Raise);
        let d = ai.decide(&ctx, &mut rng);
        assert_eq!(d.intent, Intent::Unrecognized("shove".to_string()));
        assert_eq!(d.line, "...");
        assert_eq!(ai.decide(&ctx, &mut rng).intent, Intent::Call);
        assert_eq!(ai.remaining(), 0);
    }
}
