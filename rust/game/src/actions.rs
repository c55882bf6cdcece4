use serde::{Deserialize, Serialize};

use seotda_ai::dialogue::{self, Reaction};
use seotda_ai::{Decision, DecisionContext, Intent};
use seotda_engine::engine::BetOutcome;
use seotda_engine::errors::GameError;
use seotda_engine::game::BettingRound;
use seotda_engine::player::{BettingAction, Seat};
use seotda_engine::rules::ValidatedAction;

use crate::events::{Cue, GameEvent};
use crate::messages;
use crate::scheduler::Step;
use crate::session::Session;
use crate::snapshot::AiDiagnostic;

/// Input from the human player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Call,
    Raise,
    Fold,
    NewGame,
}

impl Session {
    pub fn handle(&mut self, command: Command) -> Result<(), GameError> {
        let action = match command {
            Command::Call => BettingAction::Call,
            Command::Raise => BettingAction::Raise,
            Command::Fold => BettingAction::Fold,
            Command::NewGame => {
                self.new_game();
                return Ok(());
            }
        };
        self.human_action(action)
    }

    pub fn call(&mut self) -> Result<(), GameError> {
        self.handle(Command::Call)
    }

    pub fn raise(&mut self) -> Result<(), GameError> {
        self.handle(Command::Raise)
    }

    pub fn fold(&mut self) -> Result<(), GameError> {
        self.handle(Command::Fold)
    }

    /// Applies a human betting action.
    ///
    /// Refused while any continuation is queued, so the human cannot act
    /// between a deal and the opening of its betting phase.
    fn human_action(&mut self, action: BettingAction) -> Result<(), GameError> {
        if self.engine.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.scheduler.is_idle() {
            return Err(GameError::ContinuationPending);
        }
        let (validated, outcome) = self.engine.act_human(action).inspect_err(|e| {
            tracing::debug!(session_id = %self.id, action = %action, error = %e, "human action rejected");
        })?;
        self.opponent_message.clear();
        self.after_action(Seat::Human, validated, outcome);
        self.check_conservation();
        Ok(())
    }

    pub(crate) fn ai_turn(&mut self) -> Result<(), GameError> {
        let phase = self.engine.phase();
        let round = phase
            .betting_round()
            .ok_or(GameError::BettingClosed { phase })?;
        let ctx = DecisionContext {
            cards: self.engine.hand(Seat::Ai).to_vec(),
            phase: round,
            opponent_just_raised: self.engine.betting().last_actor_raised,
            pot: self.engine.ledger().pot(),
            ai_cash: self.engine.ledger().cash(Seat::Ai),
        };
        let decision = self.ai.decide(&ctx, &mut self.rng);
        let (action, recognized) = match decision.intent.as_action() {
            Some(a) => (a, true),
            None => (self.unrecognized_ai_action(&decision.intent), false),
        };

        let (validated, downgraded, outcome) = self.engine.act_ai(action)?;
        self.opponent_message = if recognized && !downgraded {
            decision.line.clone()
        } else {
            dialogue::line_for(validated.kind(), validated.amount(), &mut self.rng)
        };
        tracing::debug!(
            session_id = %self.id,
            intent = %decision.intent,
            action = %validated.kind(),
            amount = validated.amount(),
            confidence = decision.confidence,
            downgraded,
            "ai acted"
        );
        self.last_decision = Some(Decision {
            downgraded: decision.downgraded || downgraded,
            ..decision
        });
        self.after_action(Seat::Ai, validated, outcome);
        Ok(())
    }

    /// An opponent produced something other than call, raise or fold.
    /// The AI calls instead, and the event is logged and kept for the
    /// debug view.
    fn unrecognized_ai_action(&mut self, intent: &Intent) -> BettingAction {
        let label = match intent {
            Intent::Unrecognized(label) => label.clone(),
            other => other.to_string(),
        };
        let fallback = BettingAction::Call;
        tracing::warn!(
            session_id = %self.id,
            round = self.engine.round(),
            label = %label,
            fallback = %fallback,
            "unrecognized ai action, calling instead"
        );
        self.diagnostics.push(AiDiagnostic {
            round: self.engine.round(),
            phase: self.engine.phase(),
            label,
            fallback,
        });
        fallback
    }

    /// Events, messages and the follow-up continuation for an applied bet.
    fn after_action(&mut self, seat: Seat, action: ValidatedAction, outcome: BetOutcome) {
        self.events.push(GameEvent::PlayerAction {
            seat,
            action: action.kind(),
            amount: action.amount(),
            pot: self.engine.ledger().pot(),
        });
        self.events.cue(match action {
            ValidatedAction::Fold => Cue::Fold,
            ValidatedAction::Call(_) => Cue::Bet,
            ValidatedAction::Raise(_) => Cue::Raise,
        });
        self.flush_transitions();

        let lead = match (seat, action) {
            (Seat::Human, ValidatedAction::Call(amount)) => messages::call(amount),
            (Seat::Human, ValidatedAction::Raise(amount)) => messages::raise(amount),
            _ => String::new(),
        };
        let pacing = self.config.pacing;
        let follow = match outcome {
            BetOutcome::PassTo(Seat::Ai) => {
                self.scheduler.schedule(Step::AiTurn, pacing.ai_think_ms);
                let round = self
                    .engine
                    .phase()
                    .betting_round()
                    .unwrap_or(BettingRound::First);
                self.opponent_message = dialogue::thinking(round, &mut self.rng);
                messages::opponent_thinking().to_string()
            }
            BetOutcome::PassTo(Seat::Human) => messages::facing_raise(action.amount()),
            BetOutcome::Closed(BettingRound::First) => {
                self.scheduler.schedule(Step::DealSecondCards, pacing.deal_ms);
                messages::dealing_second().to_string()
            }
            BetOutcome::Closed(BettingRound::Final) => {
                self.scheduler.schedule(Step::Reveal, pacing.reveal_ms);
                messages::betting_over().to_string()
            }
            BetOutcome::Folded { winner, won } => {
                let (cue, text) = match winner {
                    Seat::Human => (Cue::Win, messages::opponent_folded()),
                    Seat::Ai => (Cue::Lose, messages::fold()),
                };
                self.events.cue(cue);
                if seat == Seat::Human {
                    self.opponent_message = dialogue::reaction(Reaction::Win, &mut self.rng);
                }
                self.events.push(GameEvent::RoundCompleted {
                    round: self.engine.round() - 1,
                    winner: Some(winner),
                    folded: Some(seat),
                    pot: won,
                });
                self.scheduler.schedule(
                    Step::StartRound,
                    pacing.after_fold_ms.saturating_add(pacing.next_round_ms),
                );
                text
            }
        };
        self.game_message = if lead.is_empty() {
            follow
        } else {
            format!("{lead} {follow}")
        };
    }
}
