//! Read-only views of a session for rendering and debugging.

use serde::Serialize;

use seotda_ai::{confidence, Decision};
use seotda_engine::cards::Card;
use seotda_engine::deck::DeckInfo;
use seotda_engine::game::{GameOutcome, Phase};
use seotda_engine::hand::HandRank;
use seotda_engine::player::{BettingAction, Seat};
use seotda_engine::rules::{self, ActionOption, BetContext};

use crate::session::{Session, SessionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "card", rename_all = "snake_case")]
pub enum CardView {
    Hidden,
    Shown(Card),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatView {
    pub cash: u32,
    pub cards: Vec<CardView>,
    pub folded: bool,
}

/// What the human is allowed to see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub session_id: SessionId,
    pub round: u32,
    pub phase: Phase,
    pub pot: u32,
    pub human: SeatView,
    pub ai: SeatView,
    /// AI cards are face up
    pub revealed: bool,
    pub awaiting_human: bool,
    pub opponent_message: String,
    pub game_message: String,
    pub outcome: Option<GameOutcome>,
}

/// An opponent action that was not call, raise or fold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AiDiagnostic {
    pub round: u32,
    pub phase: Phase,
    pub label: String,
    /// What was applied instead
    pub fallback: BettingAction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AiView {
    pub name: String,
    pub cards: Vec<Card>,
    pub confidence: f64,
    pub options: Vec<ActionOption>,
    pub last_decision: Option<Decision>,
}

/// Full internal state, both hands included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebugState {
    pub snapshot: Snapshot,
    pub seed: u64,
    pub human_rank: Option<HandRank>,
    pub ai_rank: Option<HandRank>,
    pub human_options: Vec<ActionOption>,
    pub ai: AiView,
    pub standing_bet: u32,
    pub last_actor_raised: bool,
    pub deck: DeckInfo,
    pub pending: usize,
    pub generation: u64,
    pub phase_trace: Vec<Phase>,
    pub history_len: usize,
    pub diagnostics: Vec<AiDiagnostic>,
}

impl DebugState {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Actions the AI could take, costed the way they would be settled.
fn ai_options(ctx: &BetContext) -> Vec<ActionOption> {
    let mut options = vec![ActionOption {
        action: BettingAction::Call,
        cost: rules::call_amount(ctx.standing_bet).min(ctx.cash),
    }];
    if let Ok(raise) = rules::validate_action(ctx, BettingAction::Raise) {
        options.push(ActionOption {
            action: BettingAction::Raise,
            cost: raise.amount(),
        });
    }
    options.push(ActionOption {
        action: BettingAction::Fold,
        cost: 0,
    });
    options
}

impl Session {
    fn ai_cards_visible(&self) -> bool {
        match self.engine.phase() {
            Phase::Reveal => true,
            Phase::Resolution => self.engine.showdown().is_some(),
            _ => false,
        }
    }

    fn seat_view(&self, seat: Seat, visible: bool) -> SeatView {
        let cards = self
            .engine
            .hand(seat)
            .iter()
            .map(|&c| if visible { CardView::Shown(c) } else { CardView::Hidden })
            .collect();
        SeatView {
            cash: self.engine.ledger().cash(seat),
            cards,
            folded: self.engine.folded() == Some(seat),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let revealed = self.ai_cards_visible();
        Snapshot {
            session_id: self.id.clone(),
            round: self.engine.round(),
            phase: self.engine.phase(),
            pot: self.engine.ledger().pot(),
            human: self.seat_view(Seat::Human, true),
            ai: self.seat_view(Seat::Ai, revealed),
            revealed,
            awaiting_human: self.awaiting_human(),
            opponent_message: self.opponent_message.clone(),
            game_message: self.game_message.clone(),
            outcome: self.engine.outcome(),
        }
    }

    fn rank_of(&self, seat: Seat) -> Option<HandRank> {
        match self.engine.hand_rank(seat) {
            Ok(rank) => Some(rank),
            Err(e) if e.is_integrity_error() => {
                tracing::warn!(session_id = %self.id, seat = %seat, error = %e, "hand failed evaluation");
                None
            }
            Err(_) => None,
        }
    }

    pub fn debug_state(&self) -> DebugState {
        let ai_cards = self.engine.hand(Seat::Ai).to_vec();
        let human_options = if self.awaiting_human() {
            rules::available_actions(&self.engine.bet_context(Seat::Human))
        } else {
            Vec::new()
        };
        DebugState {
            snapshot: self.snapshot(),
            seed: self.seed,
            human_rank: self.rank_of(Seat::Human),
            ai_rank: self.rank_of(Seat::Ai),
            human_options,
            ai: AiView {
                name: self.ai.name().to_string(),
                confidence: confidence(&ai_cards),
                cards: ai_cards,
                options: ai_options(&self.engine.bet_context(Seat::Ai)),
                last_decision: self.last_decision.clone(),
            },
            standing_bet: self.engine.betting().standing_bet,
            last_actor_raised: self.engine.betting().last_actor_raised,
            deck: self.engine.deck_info(),
            pending: self.scheduler.pending(),
            generation: self.scheduler.generation(),
            phase_trace: self.engine.phase_trace().to_vec(),
            history_len: self.engine.history().len(),
            diagnostics: self.diagnostics.clone(),
        }
    }
}
