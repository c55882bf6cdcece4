use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;

use crate::cards::{full_deck, Card};

/// Snapshot of deck contents for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeckInfo {
    pub remaining: usize,
    pub lights_remaining: usize,
    pub normals_remaining: usize,
    pub discarded: usize,
    pub reshuffles: u32,
}

/// The closed 20-card deck.
///
/// Cards leave the stock through [`Deck::deal`] and come back through
/// [`Deck::discard`] when hands are cleared, so stock + discards + cards held
/// by players is always 20. An empty stock is rebuilt from the discards and
/// reshuffled on the next deal.
#[derive(Debug)]
pub struct Deck {
    stock: Vec<Card>,
    discards: Vec<Card>,
    rng: ChaCha20Rng,
    reshuffles: u32,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            stock: full_deck(),
            discards: Vec::new(),
            rng,
            reshuffles: 0,
        }
    }

    /// Builds a deck that deals `order` front to back. Returns `None`
    /// unless `order` is a permutation of the full deck. Recycling still
    /// shuffles with the seeded RNG.
    pub fn stacked(order: Vec<Card>, seed: u64) -> Option<Self> {
        let mut sorted = order.clone();
        sorted.sort();
        let mut expected = full_deck();
        expected.sort();
        if sorted != expected {
            return None;
        }
        let mut stock = order;
        stock.reverse();
        Some(Self {
            stock,
            discards: Vec::new(),
            rng: ChaCha20Rng::seed_from_u64(seed),
            reshuffles: 0,
        })
    }

    /// Shuffles the cards currently in the stock.
    pub fn shuffle(&mut self) {
        self.stock.shuffle(&mut self.rng);
    }

    /// Rebuilds the full deck and shuffles it. Only valid when no player
    /// holds cards (new game).
    pub fn reset(&mut self) {
        self.stock = full_deck();
        self.discards.clear();
        self.reshuffles = 0;
        self.shuffle();
    }

    /// Moves discarded cards back into the stock and reshuffles.
    pub fn recycle(&mut self) {
        if self.discards.is_empty() {
            return;
        }
        self.stock.append(&mut self.discards);
        self.reshuffles += 1;
        self.shuffle();
        tracing::debug!(
            remaining = self.stock.len(),
            reshuffles = self.reshuffles,
            "deck recycled from discards"
        );
    }

    /// Deals the top card. Exhaustion is recovered by recycling the discards.
    ///
    /// Returns `None` only if every card is held by players, which cannot
    /// happen with two 2-card hands.
    pub fn deal(&mut self) -> Option<Card> {
        if self.stock.is_empty() {
            self.recycle();
        }
        self.stock.pop()
    }

    pub fn discard<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.discards.extend(cards);
    }

    pub fn remaining(&self) -> usize {
        self.stock.len()
    }

    pub fn discarded(&self) -> usize {
        self.discards.len()
    }

    pub fn info(&self) -> DeckInfo {
        let lights = self.stock.iter().filter(|c| c.is_light()).count();
        DeckInfo {
            remaining: self.stock.len(),
            lights_remaining: lights,
            normals_remaining: self.stock.len() - lights,
            discarded: self.discards.len(),
            reshuffles: self.reshuffles,
        }
    }
}
