use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::GameError;
use crate::player::Seat;

/// Phases of a Seotda round, plus the terminal `GameOver`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    AnteCollection,
    FirstCardDeal,
    FirstBetting,
    SecondCardDeal,
    FinalBetting,
    Reveal,
    Resolution,
    GameOver,
}

/// The two betting phases of a round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BettingRound {
    First,
    Final,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::AnteCollection => "ante_collection",
            Phase::FirstCardDeal => "first_card_deal",
            Phase::FirstBetting => "first_betting",
            Phase::SecondCardDeal => "second_card_deal",
            Phase::FinalBetting => "final_betting",
            Phase::Reveal => "reveal",
            Phase::Resolution => "resolution",
            Phase::GameOver => "game_over",
        }
    }

    pub fn betting_round(&self) -> Option<BettingRound> {
        match self {
            Phase::FirstBetting => Some(BettingRound::First),
            Phase::FinalBetting => Some(BettingRound::Final),
            _ => None,
        }
    }

    pub fn is_betting(&self) -> bool {
        self.betting_round().is_some()
    }

    /// Returns `next` if the edge `self -> next` is part of the round
    /// graph, otherwise [`GameError::IllegalTransition`].
    ///
    /// ```
    /// use seotda_engine::game::Phase;
    ///
    /// assert_eq!(Phase::FirstBetting.transition(Phase::SecondCardDeal), Ok(Phase::SecondCardDeal));
    /// assert!(Phase::FirstBetting.transition(Phase::Reveal).is_err());
    /// ```
    pub fn transition(self, next: Phase) -> Result<Phase, GameError> {
        use Phase::*;
        let ok = matches!(
            (self, next),
            (AnteCollection, FirstCardDeal)
                | (FirstCardDeal, FirstBetting)
                | (FirstBetting, SecondCardDeal)
                | (SecondCardDeal, FinalBetting)
                | (FinalBetting, Reveal)
                | (Reveal, Resolution)
                | (FirstBetting, Resolution)
                | (FinalBetting, Resolution)
                | (Resolution, AnteCollection)
                | (Resolution, FirstCardDeal)
                | (AnteCollection, GameOver)
        );
        if ok {
            Ok(next)
        } else {
            Err(GameError::IllegalTransition {
                from: self,
                to: next,
            })
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for BettingRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BettingRound::First => f.write_str("first"),
            BettingRound::Final => f.write_str("final"),
        }
    }
}

/// Per-phase betting bookkeeping. Reset whenever a betting phase opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BettingState {
    pub turn: Seat,
    pub standing_bet: u32,
    pub last_actor_raised: bool,
    /// Both players are settled; no further action until the next phase
    pub closed: bool,
    acted: [bool; 2],
}

impl Default for BettingState {
    fn default() -> Self {
        Self {
            turn: Seat::Human,
            standing_bet: 0,
            last_actor_raised: false,
            closed: false,
            acted: [false; 2],
        }
    }
}

impl BettingState {
    /// Fresh state for a newly opened phase; the human always opens.
    pub fn open() -> Self {
        Self::default()
    }

    pub fn has_acted(&self, seat: Seat) -> bool {
        self.acted[seat.index()]
    }

    pub(crate) fn mark_acted(&mut self, seat: Seat) {
        self.acted[seat.index()] = true;
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// The solvent player, or `None` when neither could pay the ante
    pub winner: Option<Seat>,
    /// Round in which insolvency was detected
    pub round: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Phase; 8] = [
        Phase::AnteCollection,
        Phase::FirstCardDeal,
        Phase::FirstBetting,
        Phase::SecondCardDeal,
        Phase::FinalBetting,
        Phase::Reveal,
        Phase::Resolution,
        Phase::GameOver,
    ];

    #[test]
    fn game_over_is_terminal() {
        for p in ALL {
            assert!(Phase::GameOver.transition(p).is_err());
        }
    }

    #[test]
    fn resolution_reached_from_betting_or_reveal() {
        for p in ALL {
            let allowed = p.transition(Phase::Resolution).is_ok();
            assert_eq!(
                allowed,
                matches!(p, Phase::FirstBetting | Phase::FinalBetting | Phase::Reveal),
                "{p}"
            );
        }
    }

    #[test]
    fn no_skipping_ahead() {
        assert_eq!(
            Phase::FirstCardDeal.transition(Phase::FinalBetting),
            Err(GameError::IllegalTransition {
                from: Phase::FirstCardDeal,
                to: Phase::FinalBetting
            })
        );
        assert!(Phase::AnteCollection.transition(Phase::AnteCollection).is_err());
        assert!(Phase::Reveal.transition(Phase::FirstBetting).is_err());
    }
}
