use crate::cards::{Card, DECK_SIZE};
use crate::deck::{Deck, DeckInfo};
use crate::errors::GameError;
use crate::game::{BettingRound, BettingState, GameOutcome, Phase};
use crate::hand::{evaluate, HandError, HandRank};
use crate::ledger::Ledger;
use crate::player::{BettingAction, Seat, STARTING_CASH};
use crate::record::{ActionRecord, RoundRecord, Showdown, ShownHand, Stats};
use crate::rules::{self, BetContext, ValidatedAction, ANTE};

/// Result of applying one betting action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetOutcome {
    /// The opponent must act next
    PassTo(Seat),
    /// Both players are settled for this betting phase
    Closed(BettingRound),
    /// The round ended by fold; `winner` took `won` from the pot
    Folded { winner: Seat, won: u32 },
}

/// Result of starting a round at ante collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStart {
    /// Antes taken and one card dealt to each player
    Dealt { pot: u32 },
    /// A player could not pay the ante; the game is over
    Insolvent(GameOutcome),
}

/// Core rules engine for a two-seat Seotda table.
///
/// Owns the deck, the ledger and the round state, and exposes one method per
/// step of the round. Every phase change goes through
/// [`Phase::transition`], so out-of-order calls fail with
/// [`GameError::IllegalTransition`] instead of corrupting state.
///
/// # Examples
///
/// ```
/// use seotda_engine::engine::{BetOutcome, Engine, RoundStart};
/// use seotda_engine::player::{BettingAction, Seat};
///
/// let mut engine = Engine::new(7);
/// assert!(matches!(engine.start_round(), Ok(RoundStart::Dealt { pot: 1_000 })));
/// engine.open_betting().unwrap();
///
/// let (_, outcome) = engine.act_human(BettingAction::Fold).unwrap();
/// assert_eq!(outcome, BetOutcome::Folded { winner: Seat::Ai, won: 1_000 });
/// assert_eq!(engine.round(), 2);
/// ```
#[derive(Debug)]
pub struct Engine {
    deck: Deck,
    ledger: Ledger,
    phase: Phase,
    /// Starts at 1, incremented after each round with a winner
    round: u32,
    betting: BettingState,
    folded: Option<Seat>,
    showdown: Option<Showdown>,
    outcome: Option<GameOutcome>,
    /// Phases entered since the last ante collection
    trace: Vec<Phase>,
    /// Transitions not yet collected by the orchestrator
    transitions: Vec<(Phase, Phase)>,
    actions: Vec<ActionRecord>,
    history: Vec<RoundRecord>,
}

impl Engine {
    pub fn new(seed: u64) -> Self {
        let mut engine = Self {
            deck: Deck::new_with_seed(seed),
            ledger: Ledger::new(STARTING_CASH),
            phase: Phase::AnteCollection,
            round: 1,
            betting: BettingState::default(),
            folded: None,
            showdown: None,
            outcome: None,
            trace: Vec::new(),
            transitions: Vec::new(),
            actions: Vec::new(),
            history: Vec::new(),
        };
        engine.reset();
        engine
    }

    /// Engine dealing from a prepared deck, left unshuffled.
    pub fn with_deck(deck: Deck) -> Self {
        let mut engine = Self::new(0);
        engine.deck = deck;
        engine
    }

    /// Starts a new game: full shuffled deck, fresh cash, round 1.
    pub fn reset(&mut self) {
        self.deck.reset();
        self.ledger = Ledger::new(STARTING_CASH);
        self.phase = Phase::AnteCollection;
        self.round = 1;
        self.betting = BettingState::default();
        self.folded = None;
        self.showdown = None;
        self.outcome = None;
        self.trace = vec![Phase::AnteCollection];
        self.transitions.clear();
        self.actions.clear();
        self.history.clear();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn round(&self) -> u32 {
        self.round
    }
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
    pub fn betting(&self) -> &BettingState {
        &self.betting
    }
    pub fn folded(&self) -> Option<Seat> {
        self.folded
    }
    pub fn showdown(&self) -> Option<&Showdown> {
        self.showdown.as_ref()
    }
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
    pub fn phase_trace(&self) -> &[Phase] {
        &self.trace
    }
    /// Returns and forgets the `(from, to)` pairs applied since the last call.
    pub fn drain_transitions(&mut self) -> Vec<(Phase, Phase)> {
        std::mem::take(&mut self.transitions)
    }
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }
    pub fn stats(&self) -> Stats {
        Stats::from_history(&self.history)
    }
    pub fn hand(&self, seat: Seat) -> &[Card] {
        self.ledger.player(seat).hand()
    }
    pub fn deck_info(&self) -> DeckInfo {
        self.deck.info()
    }

    /// Rank of a seat's current hand; [`HandError::Incomplete`] before the
    /// second card is dealt.
    pub fn hand_rank(&self, seat: Seat) -> Result<HandRank, HandError> {
        evaluate(self.hand(seat))
    }

    /// Stock + discards + cards in hands. Always [`DECK_SIZE`].
    pub fn cards_in_circulation(&self) -> usize {
        self.deck.remaining()
            + self.deck.discarded()
            + self.hand(Seat::Human).len()
            + self.hand(Seat::Ai).len()
    }

    /// Betting context for `seat` as of now.
    pub fn bet_context(&self, seat: Seat) -> BetContext {
        BetContext {
            cash: self.ledger.cash(seat),
            pot: self.ledger.pot(),
            standing_bet: self.betting.standing_bet,
            facing_raise: self.betting.last_actor_raised,
        }
    }

    /// Whether `seat` may act right now.
    pub fn awaiting(&self, seat: Seat) -> bool {
        self.phase.is_betting() && !self.betting.closed && self.betting.turn == seat
    }

    fn advance(&mut self, next: Phase) -> Result<(), GameError> {
        let from = self.phase;
        let next = from.transition(next)?;
        match next {
            Phase::AnteCollection => {
                self.return_hands();
                self.trace.clear();
                self.actions.clear();
                self.folded = None;
                self.showdown = None;
            }
            Phase::FirstCardDeal if from == Phase::Resolution => {
                self.return_hands();
                self.actions.clear();
                self.showdown = None;
            }
            Phase::FirstBetting | Phase::FinalBetting => {
                self.betting = BettingState::open();
            }
            _ => {}
        }
        self.phase = next;
        self.trace.push(next);
        self.transitions.push((from, next));
        tracing::debug!(round = self.round, from = %from, to = %next, "phase transition");
        Ok(())
    }

    fn return_hands(&mut self) {
        for seat in [Seat::Human, Seat::Ai] {
            let cards = self.ledger.player_mut(seat).take_cards();
            self.deck.discard(cards);
        }
    }

    /// Deals one card to each player, human first.
    fn deal_each(&mut self) -> Result<(), GameError> {
        for seat in [Seat::Human, Seat::Ai] {
            let card = self.deck.deal().ok_or(GameError::DeckEmpty)?;
            self.ledger.player_mut(seat).give_card(card)?;
        }
        Ok(())
    }

    /// Collects the ante and deals the first card to each player.
    ///
    /// Valid at game start and after a decided round. When a player cannot
    /// cover the ante the game ends instead, in favour of the solvent player.
    pub fn start_round(&mut self) -> Result<RoundStart, GameError> {
        match self.phase {
            Phase::GameOver => return Err(GameError::GameOver),
            Phase::AnteCollection => {}
            _ => self.advance(Phase::AnteCollection)?,
        }

        let short = self.ledger.short_of(ANTE);
        if !short.is_empty() {
            let winner = match short.as_slice() {
                [loser] => Some(loser.opponent()),
                _ => None,
            };
            let outcome = GameOutcome {
                winner,
                round: self.round,
            };
            self.advance(Phase::GameOver)?;
            self.outcome = Some(outcome);
            tracing::info!(round = self.round, winner = ?winner, "game over: ante not covered");
            return Ok(RoundStart::Insolvent(outcome));
        }

        if self.deck.remaining() < 4 {
            self.deck.recycle();
        }
        self.ledger.collect_ante(ANTE)?;
        self.advance(Phase::FirstCardDeal)?;
        self.deal_each()?;
        tracing::debug!(round = self.round, pot = self.ledger.pot(), "ante collected");
        Ok(RoundStart::Dealt {
            pot: self.ledger.pot(),
        })
    }

    /// Replays a tied round: hands go back to the discards, the pot stays,
    /// and a fresh first card is dealt without an ante.
    pub fn replay(&mut self) -> Result<(), GameError> {
        if !self.showdown.as_ref().is_some_and(Showdown::is_tie) {
            return Err(GameError::IllegalTransition {
                from: self.phase,
                to: Phase::FirstCardDeal,
            });
        }
        self.advance(Phase::FirstCardDeal)?;
        self.deal_each()
    }

    /// Opens the betting phase that follows the current deal.
    pub fn open_betting(&mut self) -> Result<BettingRound, GameError> {
        let (next, round) = match self.phase {
            Phase::SecondCardDeal => (Phase::FinalBetting, BettingRound::Final),
            _ => (Phase::FirstBetting, BettingRound::First),
        };
        self.advance(next)?;
        Ok(round)
    }

    /// Deals the second card to each player once first betting has closed.
    pub fn deal_second(&mut self) -> Result<(), GameError> {
        if !self.betting.closed {
            return Err(GameError::IllegalTransition {
                from: self.phase,
                to: Phase::SecondCardDeal,
            });
        }
        self.advance(Phase::SecondCardDeal)?;
        self.deal_each()
    }

    /// Human action: validated strictly, nothing clamped.
    pub fn act_human(
        &mut self,
        action: BettingAction,
    ) -> Result<(ValidatedAction, BetOutcome), GameError> {
        self.ensure_turn(Seat::Human)?;
        let v = rules::validate_action(&self.bet_context(Seat::Human), action)?;
        let outcome = self.apply(Seat::Human, v)?;
        Ok((v, outcome))
    }

    /// AI action: calls clamped to cash, illegal raises become calls.
    /// The flag reports a downgraded raise.
    pub fn act_ai(
        &mut self,
        action: BettingAction,
    ) -> Result<(ValidatedAction, bool, BetOutcome), GameError> {
        self.ensure_turn(Seat::Ai)?;
        let (v, downgraded) = rules::settle_lenient(&self.bet_context(Seat::Ai), action);
        if downgraded {
            tracing::info!(
                round = self.round,
                pot = self.ledger.pot(),
                cash = self.ledger.cash(Seat::Ai),
                "ai raise downgraded to call"
            );
        }
        let outcome = self.apply(Seat::Ai, v)?;
        Ok((v, downgraded, outcome))
    }

    fn ensure_turn(&self, seat: Seat) -> Result<(), GameError> {
        if self.phase == Phase::GameOver {
            return Err(GameError::GameOver);
        }
        if !self.phase.is_betting() || self.betting.closed {
            return Err(GameError::BettingClosed { phase: self.phase });
        }
        if self.betting.turn != seat {
            return Err(GameError::NotPlayersTurn {
                expected: self.betting.turn,
                actual: seat,
            });
        }
        Ok(())
    }

    fn apply(&mut self, seat: Seat, action: ValidatedAction) -> Result<BetOutcome, GameError> {
        let round = self
            .phase
            .betting_round()
            .ok_or(GameError::BettingClosed { phase: self.phase })?;
        match action {
            ValidatedAction::Fold => {}
            ValidatedAction::Call(amount) | ValidatedAction::Raise(amount) => {
                self.ledger.bet(seat, amount)?;
            }
        }
        self.actions.push(ActionRecord {
            seat,
            round,
            action: action.kind(),
            amount: action.amount(),
        });
        tracing::debug!(
            round = self.round,
            seat = %seat,
            action = %action.kind(),
            amount = action.amount(),
            pot = self.ledger.pot(),
            "bet applied"
        );

        let opponent = seat.opponent();
        let opponent_acted = self.betting.has_acted(opponent);
        self.betting.mark_acted(seat);
        match action {
            ValidatedAction::Fold => {
                let pot = self.ledger.pot();
                self.advance(Phase::Resolution)?;
                self.folded = Some(seat);
                let won = self.ledger.payout(opponent);
                let mut record = RoundRecord::new(self.round, std::mem::take(&mut self.actions), pot);
                record.folded = Some(seat);
                record.winner = Some(opponent);
                self.history.push(record);
                self.round += 1;
                Ok(BetOutcome::Folded {
                    winner: opponent,
                    won,
                })
            }
            ValidatedAction::Call(amount) => {
                self.betting.standing_bet = amount;
                self.betting.last_actor_raised = false;
                // an opening call in final betting goes straight to the reveal
                if opponent_acted || round == BettingRound::Final {
                    self.betting.closed = true;
                    Ok(BetOutcome::Closed(round))
                } else {
                    self.betting.turn = opponent;
                    Ok(BetOutcome::PassTo(opponent))
                }
            }
            ValidatedAction::Raise(amount) => {
                self.betting.standing_bet = amount;
                self.betting.last_actor_raised = true;
                self.betting.turn = opponent;
                Ok(BetOutcome::PassTo(opponent))
            }
        }
    }

    /// Turns both hands face up once final betting has closed.
    pub fn reveal(&mut self) -> Result<(), GameError> {
        if self.phase == Phase::FinalBetting && !self.betting.closed {
            return Err(GameError::IllegalTransition {
                from: self.phase,
                to: Phase::Reveal,
            });
        }
        self.advance(Phase::Reveal)
    }

    /// Compares the revealed hands and settles the pot.
    ///
    /// The higher score takes the pot and the round counter advances. On
    /// equal scores the pot is kept for [`Engine::replay`].
    pub fn resolve(&mut self) -> Result<Showdown, GameError> {
        self.advance(Phase::Resolution)?;
        let human = ShownHand {
            cards: self.hand(Seat::Human).to_vec(),
            rank: self.hand_rank(Seat::Human)?,
        };
        let ai = ShownHand {
            cards: self.hand(Seat::Ai).to_vec(),
            rank: self.hand_rank(Seat::Ai)?,
        };
        let winner = match human.rank.score.cmp(&ai.rank.score) {
            std::cmp::Ordering::Greater => Some(Seat::Human),
            std::cmp::Ordering::Less => Some(Seat::Ai),
            std::cmp::Ordering::Equal => None,
        };
        let showdown = Showdown { human, ai, winner };
        let pot = self.ledger.pot();
        let mut record = RoundRecord::new(self.round, std::mem::take(&mut self.actions), pot);
        record.showdown = Some(showdown.clone());
        record.winner = winner;
        self.history.push(record);

        match winner {
            Some(seat) => {
                self.ledger.payout(seat);
                tracing::info!(round = self.round, winner = %seat, pot, "showdown");
                self.round += 1;
            }
            None => {
                tracing::info!(round = self.round, pot, "showdown tied, pot carried");
            }
        }
        self.showdown = Some(showdown.clone());
        Ok(showdown)
    }

    /// True while no card has been lost or duplicated.
    pub fn deck_is_intact(&self) -> bool {
        self.cards_in_circulation() == DECK_SIZE
    }
}
