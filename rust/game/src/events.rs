use serde::Serialize;
use std::collections::VecDeque;

use crate::session::SessionId;
use seotda_engine::cards::Card;
use seotda_engine::game::Phase;
use seotda_engine::player::{BettingAction, Seat};
use seotda_engine::record::Showdown;

/// Bounded so an undrained outbox cannot grow without limit; the oldest
/// events are dropped first.
const OUTBOX_CAPACITY: usize = 1000;

/// Sound cues for the presentation layer. The engine never plays audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Cue {
    CardDeal,
    Bet,
    Raise,
    Fold,
    Win,
    Lose,
    Tie,
    NewRound,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    GameStarted {
        session_id: SessionId,
        seed: u64,
        starting_cash: u32,
    },
    RoundStarted {
        round: u32,
        pot: u32,
    },
    /// Only the human's cards are disclosed; the AI's stay hidden until reveal
    CardsDealt {
        round: u32,
        human: Vec<Card>,
        ai_cards: usize,
    },
    PhaseChanged {
        from: Phase,
        to: Phase,
    },
    PlayerAction {
        seat: Seat,
        action: BettingAction,
        amount: u32,
        pot: u32,
    },
    Showdown {
        showdown: Showdown,
    },
    RoundCompleted {
        round: u32,
        winner: Option<Seat>,
        folded: Option<Seat>,
        pot: u32,
    },
    GameEnded {
        winner: Option<Seat>,
        round: u32,
    },
    Cue {
        cue: Cue,
    },
}

/// In-memory event queue drained by the presentation layer.
#[derive(Debug, Default)]
pub struct Outbox {
    events: VecDeque<GameEvent>,
    dropped: u64,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        tracing::trace!(event = ?event, "queueing game event");
        if self.events.len() >= OUTBOX_CAPACITY {
            self.events.pop_front();
            self.dropped += 1;
            if self.dropped == 1 || self.dropped % 100 == 0 {
                tracing::warn!(dropped = self.dropped, "event outbox full, dropping oldest events");
            }
        }
        self.events.push_back(event);
    }

    pub fn cue(&mut self, cue: Cue) {
        self.push(GameEvent::Cue { cue });
    }

    pub fn drain(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}
