use thiserror::Error;

use crate::game::Phase;
use crate::hand::HandError;
use crate::player::Seat;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Insufficient funds: {required} required, {available} available")]
    InsufficientFunds { required: u32, available: u32 },
    #[error("Cannot raise while the pot is empty")]
    EmptyPot,
    #[error("Raise not allowed: the last action was a raise, only call or fold remain")]
    RaiseNotAllowed,
    #[error("Betting is closed during {phase}")]
    BettingClosed { phase: Phase },
    #[error("It's not {actual}'s turn (waiting for {expected})")]
    NotPlayersTurn { expected: Seat, actual: Seat },
    #[error("A scheduled step is still pending")]
    ContinuationPending,
    #[error("Continuation belongs to a previous game")]
    StaleContinuation,
    #[error("Illegal phase transition {from} -> {to}")]
    IllegalTransition { from: Phase, to: Phase },
    #[error("Game is over")]
    GameOver,
    #[error("Hand already holds two cards")]
    HandFull,
    #[error("Deck has no cards left to deal")]
    DeckEmpty,
    #[error(transparent)]
    InvalidHand(#[from] HandError),
}
