use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::BettingRound;
use crate::hand::HandRank;
use crate::player::{BettingAction, Seat};

/// Records a single betting action during a round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: Seat,
    pub round: BettingRound,
    pub action: BettingAction,
    /// Chips moved into the pot (0 for fold)
    pub amount: u32,
}

/// One side of a showdown.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShownHand {
    pub cards: Vec<Card>,
    pub rank: HandRank,
}

/// Both hands at reveal and who took the pot. `winner` is `None` on a tie.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Showdown {
    pub human: ShownHand,
    pub ai: ShownHand,
    pub winner: Option<Seat>,
}

impl Showdown {
    pub fn is_tie(&self) -> bool {
        self.winner.is_none()
    }

    pub fn hand(&self, seat: Seat) -> &ShownHand {
        match seat {
            Seat::Human => &self.human,
            Seat::Ai => &self.ai,
        }
    }
}

/// Complete record of a round, kept in memory for the current session.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u32,
    pub actions: Vec<ActionRecord>,
    #[serde(default)]
    pub showdown: Option<Showdown>,
    /// Seat that folded, if the round ended by fold
    #[serde(default)]
    pub folded: Option<Seat>,
    pub winner: Option<Seat>,
    /// Pot at the moment of resolution
    pub pot: u32,
    /// RFC 3339 timestamp
    pub ts: String,
}

impl RoundRecord {
    pub fn new(round: u32, actions: Vec<ActionRecord>, pot: u32) -> Self {
        Self {
            round,
            actions,
            showdown: None,
            folded: None,
            winner: None,
            pot,
            ts: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    pub fn is_tie(&self) -> bool {
        self.showdown.as_ref().is_some_and(Showdown::is_tie)
    }
}

/// Aggregate counters over a session's history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Rounds that produced a winner
    pub rounds: u32,
    pub human_wins: u32,
    pub ai_wins: u32,
    pub ties: u32,
    pub folds: u32,
}

impl Stats {
    pub fn from_history(history: &[RoundRecord]) -> Self {
        let mut s = Stats::default();
        for r in history {
            if r.is_tie() {
                s.ties += 1;
                continue;
            }
            s.rounds += 1;
            if r.folded.is_some() {
                s.folds += 1;
            }
            match r.winner {
                Some(Seat::Human) => s.human_wins += 1,
                Some(Seat::Ai) => s.ai_wins += 1,
                None => {}
            }
        }
        s
    }

    pub fn wins(&self, seat: Seat) -> u32 {
        match seat {
            Seat::Human => self.human_wins,
            Seat::Ai => self.ai_wins,
        }
    }
}
