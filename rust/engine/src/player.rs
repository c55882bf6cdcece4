use crate::cards::Card;
use crate::errors::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two seats at the table. The human always opens a betting round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seat {
    /// Player driven by presentation-layer commands
    Human,
    /// Player driven by the AI decision policy
    Ai,
}

impl Seat {
    pub fn opponent(self) -> Seat {
        match self {
            Seat::Human => Seat::Ai,
            Seat::Ai => Seat::Human,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Seat::Human => 0,
            Seat::Ai => 1,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Human => write!(f, "human"),
            Seat::Ai => write!(f, "ai"),
        }
    }
}

/// Represents a betting action. Amounts are never chosen by the actor:
/// call matches the standing bet and raise always bets the pot.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BettingAction {
    /// Match the standing bet, or open with the minimum bet
    Call,
    /// Bet the current pot
    Raise,
    /// Forfeit the pot to the opponent
    Fold,
}

impl BettingAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            BettingAction::Call => "call",
            BettingAction::Raise => "raise",
            BettingAction::Fold => "fold",
        }
    }
}

impl fmt::Display for BettingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cash each player starts a new game with.
pub const STARTING_CASH: u32 = 10_000;

/// A seat's cash balance and hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    cash: u32,
    /// Up to two cards
    hand: Vec<Card>,
}

impl Player {
    pub fn new(cash: u32) -> Self {
        Self {
            cash,
            hand: Vec::with_capacity(2),
        }
    }

    pub fn cash(&self) -> u32 {
        self.cash
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn give_card(&mut self, c: Card) -> Result<(), GameError> {
        if self.hand.len() >= 2 {
            return Err(GameError::HandFull);
        }
        self.hand.push(c);
        Ok(())
    }

    /// Empties the hand, handing the cards back to the caller.
    pub fn take_cards(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.hand)
    }

    pub fn add_cash(&mut self, amount: u32) {
        self.cash = self.cash.saturating_add(amount);
    }

    /// Removes `amount` from the balance; never leaves it negative.
    pub fn debit(&mut self, amount: u32) -> Result<(), GameError> {
        if amount > self.cash {
            return Err(GameError::InsufficientFunds {
                required: amount,
                available: self.cash,
            });
        }
        self.cash -= amount;
        Ok(())
    }
}
