use crate::errors::GameError;
use crate::player::{Player, Seat};

/// Cash of both seats plus the shared pot.
///
/// Every mutation moves money between a seat and the pot, so
/// [`Ledger::total`] only changes when the ledger is rebuilt for a new game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    players: [Player; 2],
    pot: u32,
}

impl Ledger {
    pub fn new(starting_cash: u32) -> Self {
        Self {
            players: [Player::new(starting_cash), Player::new(starting_cash)],
            pot: 0,
        }
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn player_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat.index()]
    }

    pub fn cash(&self, seat: Seat) -> u32 {
        self.player(seat).cash()
    }

    pub fn pot(&self) -> u32 {
        self.pot
    }

    pub fn total(&self) -> u64 {
        self.players.iter().map(|p| p.cash() as u64).sum::<u64>() + self.pot as u64
    }

    /// Seats that cannot cover `ante`.
    pub fn short_of(&self, ante: u32) -> Vec<Seat> {
        [Seat::Human, Seat::Ai]
            .into_iter()
            .filter(|s| self.cash(*s) < ante)
            .collect()
    }

    /// Takes `ante` from both seats. Checks both before debiting either.
    pub fn collect_ante(&mut self, ante: u32) -> Result<(), GameError> {
        if let Some(seat) = self.short_of(ante).first() {
            return Err(GameError::InsufficientFunds {
                required: ante,
                available: self.cash(*seat),
            });
        }
        for p in &mut self.players {
            p.debit(ante)?;
        }
        self.pot += ante * 2;
        Ok(())
    }

    pub fn bet(&mut self, seat: Seat, amount: u32) -> Result<(), GameError> {
        self.player_mut(seat).debit(amount)?;
        self.pot += amount;
        Ok(())
    }

    /// Moves the whole pot to `seat`, returning the amount won.
    pub fn payout(&mut self, seat: Seat) -> u32 {
        let won = std::mem::take(&mut self.pot);
        self.player_mut(seat).add_cash(won);
        won
    }
}
