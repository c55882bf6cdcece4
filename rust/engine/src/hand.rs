use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::{Card, LIGHT_MONTHS};

/// Broad family of a ranked hand, ordered from weakest to strongest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Sum of months modulo 10 (0-9)
    Kkeut,
    /// One of the six named month pairs (894-899)
    Special,
    /// Two cards of the same month (901-910)
    Pair,
    /// Two Light cards (998-1000)
    Gwang,
}

/// Score and label of a complete two-card hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRank {
    pub score: u16,
    pub label: String,
    pub category: Category,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HandError {
    #[error("hand is incomplete: {cards} card(s), two required")]
    Incomplete { cards: usize },
    #[error("hand holds {cards} cards, at most two allowed")]
    TooManyCards { cards: usize },
    #[error("card {0:?} does not exist in the deck")]
    InvalidCard(Card),
    #[error("card {0} appears twice but the deck holds only one")]
    DuplicateCard(Card),
}

impl HandError {
    /// True for malformed data, as opposed to a hand that is simply not
    /// complete yet.
    pub fn is_integrity_error(&self) -> bool {
        !matches!(self, HandError::Incomplete { .. })
    }
}

const GWANG: [(u8, u8, u16, &str); 3] = [
    (3, 8, 1000, "38-gwang"),
    (1, 3, 999, "13-gwang"),
    (1, 8, 998, "18-gwang"),
];

const SPECIALS: [(u8, u8, u16, &str); 6] = [
    (1, 2, 899, "ali"),
    (1, 4, 898, "doksa"),
    (1, 9, 897, "gu-ping"),
    (1, 10, 896, "jang-ping"),
    (4, 10, 895, "jang-sa"),
    (3, 6, 894, "se-ryuk"),
];

/// Ranks a Seotda hand.
///
/// Categories are checked in strict priority order: light pairs, month
/// pairs, the six special combinations, then kkeut (sum of months mod 10).
///
/// # Errors
///
/// - [`HandError::Incomplete`] for fewer than two cards
/// - [`HandError::TooManyCards`] for more than two
/// - [`HandError::InvalidCard`] / [`HandError::DuplicateCard`] for data that
///   cannot come from the deck
///
/// # Examples
///
/// ```
/// use seotda_engine::cards::Card;
/// use seotda_engine::hand::evaluate;
///
/// let hand = [Card::light(3).unwrap(), Card::light(8).unwrap()];
/// assert_eq!(evaluate(&hand).unwrap().score, 1000);
///
/// let hand = [Card::normal(2).unwrap(), Card::normal(7).unwrap()];
/// assert_eq!(evaluate(&hand).unwrap().label, "9-kkeut");
/// ```
pub fn evaluate(cards: &[Card]) -> Result<HandRank, HandError> {
    for c in cards {
        if !c.is_valid() {
            return Err(HandError::InvalidCard(*c));
        }
    }
    let (a, b) = match cards {
        [a, b] => (*a, *b),
        [] | [_] => return Err(HandError::Incomplete { cards: cards.len() }),
        _ => return Err(HandError::TooManyCards { cards: cards.len() }),
    };
    // light months hold a single card of each kind
    if a == b && (a.is_light() || LIGHT_MONTHS.contains(&a.month)) {
        return Err(HandError::DuplicateCard(a));
    }

    let (lo, hi) = if a.month <= b.month {
        (a.month, b.month)
    } else {
        (b.month, a.month)
    };

    if a.is_light() && b.is_light() {
        if let Some(&(_, _, score, label)) = GWANG.iter().find(|g| g.0 == lo && g.1 == hi) {
            return Ok(HandRank {
                score,
                label: label.to_string(),
                category: Category::Gwang,
            });
        }
    }

    if lo == hi {
        return Ok(HandRank {
            score: 900 + lo as u16,
            label: format!("{}-ttaeng", lo),
            category: Category::Pair,
        });
    }

    if let Some(&(_, _, score, label)) = SPECIALS.iter().find(|s| s.0 == lo && s.1 == hi) {
        return Ok(HandRank {
            score,
            label: label.to_string(),
            category: Category::Special,
        });
    }

    let sum = ((lo + hi) % 10) as u16;
    Ok(HandRank {
        score: sum,
        label: format!("{}-kkeut", sum),
        category: Category::Kkeut,
    })
}

pub fn compare_hands(a: &HandRank, b: &HandRank) -> Ordering {
    a.score.cmp(&b.score)
}
