use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use seotda_ai::dialogue::{self, Reaction};
use seotda_ai::{create_ai, AiError, Decision, Opponent};
use seotda_engine::engine::{Engine, RoundStart};
use seotda_engine::errors::GameError;
use seotda_engine::game::{BettingRound, GameOutcome, Phase};
use seotda_engine::player::{Seat, STARTING_CASH};
use seotda_engine::record::{RoundRecord, Stats};

use crate::events::{Cue, GameEvent, Outbox};
use crate::messages;
use crate::scheduler::{Pacing, Scheduler, Step, Ticket};
use crate::snapshot::AiDiagnostic;

pub type SessionId = String;

/// Mixed into the game seed so the policy stream never mirrors the shuffle.
const POLICY_STREAM: u64 = 0x5E07_DA00_A1A1_0001;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// `None` draws a random seed
    pub seed: Option<u64>,
    pub opponent: String,
    pub pacing: Pacing,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            opponent: "heuristic".to_string(),
            pacing: Pacing::default(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Opponent error: {0}")]
    Opponent(#[from] AiError),
    #[error("Game error: {0}")]
    Game(#[from] GameError),
}

/// One game against the AI: engine, opponent, continuation queue and the
/// outgoing event stream.
///
/// The session never sleeps. Every automatic step is queued as a
/// [`Ticket`]; the presentation layer waits the ticket's delay and hands
/// it back to [`Session::fire`]. Headless callers use
/// [`Session::run_until_input`] to fire everything due at once.
pub struct Session {
    pub(crate) id: SessionId,
    pub(crate) config: GameConfig,
    pub(crate) seed: u64,
    pub(crate) engine: Engine,
    pub(crate) ai: Box<dyn Opponent>,
    pub(crate) rng: ChaCha20Rng,
    pub(crate) scheduler: Scheduler,
    pub(crate) events: Outbox,
    pub(crate) opponent_message: String,
    pub(crate) game_message: String,
    pub(crate) last_decision: Option<Decision>,
    pub(crate) diagnostics: Vec<AiDiagnostic>,
    /// Cash plus pot at game start
    pub(crate) expected_total: u64,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("seed", &self.seed)
            .field("opponent", &self.ai.name())
            .field("round", &self.engine.round())
            .field("phase", &self.engine.phase())
            .field("pending", &self.scheduler.pending())
            .finish()
    }
}

impl Session {
    pub fn new(config: GameConfig) -> Result<Self, SessionError> {
        let ai = create_ai(&config.opponent)?;
        let seed = config.seed.unwrap_or_else(rand::random);
        Ok(Self::from_parts(config, seed, Engine::new(seed), ai))
    }

    /// Session over a prepared engine and opponent. The first round is
    /// queued immediately.
    pub fn from_parts(config: GameConfig, seed: u64, engine: Engine, ai: Box<dyn Opponent>) -> Self {
        let expected_total = engine.ledger().total();
        let mut session = Self {
            id: uuid::Uuid::new_v4().to_string(),
            config,
            seed,
            engine,
            ai,
            rng: ChaCha20Rng::seed_from_u64(seed ^ POLICY_STREAM),
            scheduler: Scheduler::new(),
            events: Outbox::new(),
            opponent_message: String::new(),
            game_message: String::new(),
            last_decision: None,
            diagnostics: Vec::new(),
            expected_total,
        };
        tracing::info!(
            session_id = %session.id,
            seed,
            opponent = session.ai.name(),
            "session created"
        );
        session.begin();
        session
    }

    fn begin(&mut self) {
        self.events.push(GameEvent::GameStarted {
            session_id: self.id.clone(),
            seed: self.seed,
            starting_cash: STARTING_CASH,
        });
        self.game_message = messages::new_game().to_string();
        self.scheduler.schedule(Step::StartRound, 0);
    }

    /// Abandons the current game and starts over with fresh cash.
    ///
    /// Every queued continuation is cancelled; tickets handed out before
    /// this call fail with [`GameError::StaleContinuation`].
    pub fn new_game(&mut self) {
        self.scheduler.cancel_all();
        self.engine.reset();
        self.engine.drain_transitions();
        self.opponent_message.clear();
        self.last_decision = None;
        self.diagnostics.clear();
        self.expected_total = self.engine.ledger().total();
        tracing::info!(session_id = %self.id, generation = self.scheduler.generation(), "new game");
        self.begin();
    }

    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
    pub fn engine(&self) -> &Engine {
        &self.engine
    }
    pub fn opponent_name(&self) -> &str {
        self.ai.name()
    }
    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }
    pub fn round(&self) -> u32 {
        self.engine.round()
    }
    pub fn pot(&self) -> u32 {
        self.engine.ledger().pot()
    }
    pub fn cash(&self, seat: Seat) -> u32 {
        self.engine.ledger().cash(seat)
    }
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.engine.outcome()
    }
    pub fn is_over(&self) -> bool {
        self.engine.is_over()
    }
    pub fn history(&self) -> &[RoundRecord] {
        self.engine.history()
    }
    pub fn stats(&self) -> Stats {
        self.engine.stats()
    }
    pub fn phase_trace(&self) -> &[Phase] {
        self.engine.phase_trace()
    }
    pub fn game_message(&self) -> &str {
        &self.game_message
    }
    pub fn opponent_message(&self) -> &str {
        &self.opponent_message
    }
    pub fn last_decision(&self) -> Option<&Decision> {
        self.last_decision.as_ref()
    }
    pub fn diagnostics(&self) -> &[AiDiagnostic] {
        &self.diagnostics
    }

    /// The continuation due next, if any.
    pub fn next_continuation(&self) -> Option<Ticket> {
        self.scheduler.peek()
    }

    pub fn pending(&self) -> usize {
        self.scheduler.pending()
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// True when the human must act and nothing automatic is queued.
    pub fn awaiting_human(&self) -> bool {
        self.scheduler.is_idle() && self.engine.awaiting(Seat::Human)
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    /// Runs a queued continuation.
    pub fn fire(&mut self, ticket: Ticket) -> Result<Step, GameError> {
        let step = self.scheduler.take(ticket)?;
        tracing::debug!(
            session_id = %self.id,
            step = %step,
            round = self.engine.round(),
            phase = %self.engine.phase(),
            "firing continuation"
        );
        let result = match step {
            Step::StartRound => self.start_round(),
            Step::OpenBetting => self.open_betting(),
            Step::AiTurn => self.ai_turn(),
            Step::DealSecondCards => self.deal_second(),
            Step::Reveal => self.reveal(),
            Step::Resolve => self.resolve(),
            Step::Replay => self.replay(),
        };
        self.flush_transitions();
        self.check_conservation();
        if let Err(e) = &result {
            tracing::warn!(session_id = %self.id, step = %step, error = %e, "continuation failed");
        }
        result.map(|_| step)
    }

    /// Fires continuations until the human must act or the game is over.
    /// Returns the steps fired, in order.
    pub fn run_until_input(&mut self) -> Result<Vec<Step>, GameError> {
        let mut fired = Vec::new();
        while let Some(ticket) = self.scheduler.peek() {
            fired.push(self.fire(ticket)?);
        }
        Ok(fired)
    }

    pub(crate) fn flush_transitions(&mut self) {
        for (from, to) in self.engine.drain_transitions() {
            self.events.push(GameEvent::PhaseChanged { from, to });
        }
    }

    /// Cash plus pot must stay at its starting value.
    pub(crate) fn check_conservation(&self) {
        let actual = self.engine.ledger().total();
        if actual != self.expected_total {
            tracing::error!(
                session_id = %self.id,
                round = self.engine.round(),
                expected = self.expected_total,
                actual,
                "funds not conserved"
            );
        }
    }

    fn emit_deal(&mut self) {
        self.events.push(GameEvent::CardsDealt {
            round: self.engine.round(),
            human: self.engine.hand(Seat::Human).to_vec(),
            ai_cards: self.engine.hand(Seat::Ai).len(),
        });
        self.events.cue(Cue::CardDeal);
    }

    fn start_round(&mut self) -> Result<(), GameError> {
        let start = self.engine.start_round()?;
        self.flush_transitions();
        match start {
            RoundStart::Dealt { pot } => {
                let round = self.engine.round();
                self.events.push(GameEvent::RoundStarted { round, pot });
                self.events.cue(Cue::NewRound);
                self.emit_deal();
                self.opponent_message.clear();
                self.game_message = messages::new_round(round);
                self.scheduler.schedule(Step::OpenBetting, self.config.pacing.deal_ms);
                tracing::info!(session_id = %self.id, round, pot, "round started");
            }
            RoundStart::Insolvent(outcome) => {
                self.events.push(GameEvent::GameEnded {
                    winner: outcome.winner,
                    round: outcome.round,
                });
                self.game_message = messages::game_over(outcome.winner).to_string();
                tracing::info!(
                    session_id = %self.id,
                    round = outcome.round,
                    winner = ?outcome.winner,
                    "game ended"
                );
            }
        }
        Ok(())
    }

    fn open_betting(&mut self) -> Result<(), GameError> {
        let round = self.engine.open_betting()?;
        self.flush_transitions();
        self.game_message = messages::your_turn(round == BettingRound::First).to_string();
        Ok(())
    }

    fn deal_second(&mut self) -> Result<(), GameError> {
        self.engine.deal_second()?;
        self.flush_transitions();
        self.emit_deal();
        self.scheduler.schedule(Step::OpenBetting, self.config.pacing.deal_ms);
        Ok(())
    }

    fn reveal(&mut self) -> Result<(), GameError> {
        self.engine.reveal()?;
        self.flush_transitions();
        self.game_message = messages::revealing().to_string();
        self.scheduler.schedule(Step::Resolve, self.config.pacing.resolve_ms);
        Ok(())
    }

    fn resolve(&mut self) -> Result<(), GameError> {
        let showdown = self.engine.resolve()?;
        self.flush_transitions();
        let pot = self.engine.history().last().map(|r| r.pot).unwrap_or_default();
        self.game_message = messages::showdown(&showdown.human.rank, &showdown.ai.rank, showdown.winner);
        let winner = showdown.winner;
        self.events.push(GameEvent::Showdown { showdown });

        let pacing = self.config.pacing;
        match winner {
            Some(seat) => {
                let (cue, reaction) = match seat {
                    Seat::Human => (Cue::Win, Reaction::Lose),
                    Seat::Ai => (Cue::Lose, Reaction::Win),
                };
                self.events.cue(cue);
                self.opponent_message = dialogue::reaction(reaction, &mut self.rng);
                self.events.push(GameEvent::RoundCompleted {
                    round: self.engine.round() - 1,
                    winner,
                    folded: None,
                    pot,
                });
                self.scheduler.schedule(
                    Step::StartRound,
                    pacing.after_showdown_ms.saturating_add(pacing.next_round_ms),
                );
            }
            None => {
                self.events.cue(Cue::Tie);
                self.opponent_message = dialogue::reaction(Reaction::Tie, &mut self.rng);
                self.scheduler.schedule(
                    Step::Replay,
                    pacing.after_showdown_ms.saturating_add(pacing.tie_replay_ms),
                );
            }
        }
        Ok(())
    }

    fn replay(&mut self) -> Result<(), GameError> {
        self.engine.replay()?;
        self.flush_transitions();
        self.emit_deal();
        self.events.cue(Cue::NewRound);
        self.opponent_message.clear();
        self.game_message = messages::tie_redeal(self.engine.ledger().pot());
        self.scheduler.schedule(Step::OpenBetting, self.config.pacing.deal_ms);
        Ok(())
    }
}
