use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Months that carry a Light (gwang) card in the Seotda deck.
pub const LIGHT_MONTHS: [u8; 3] = [1, 3, 8];

/// Number of cards in a complete deck.
pub const DECK_SIZE: usize = 20;

/// The two card kinds that matter for hand ranking.
/// Animal and ribbon cards of the full hwatu deck all score as `Normal`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    /// Light card (gwang), present only in months 1, 3 and 8
    Light,
    /// Any other card
    Normal,
}

/// A single Seotda card identified by its month (1-10) and kind.
///
/// Fields are public so that snapshots and tests can build cards freely;
/// use [`Card::new`] or [`Card::is_valid`] when the data comes from outside
/// the deck.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// Month of the card, 1 through 10
    pub month: u8,
    /// Light or Normal
    pub kind: CardKind,
}

impl Card {
    /// Builds a card, returning `None` for a month outside 1..=10 or a
    /// Light card on a month that has none.
    pub fn new(month: u8, kind: CardKind) -> Option<Card> {
        let card = Card { month, kind };
        card.is_valid().then_some(card)
    }

    pub fn light(month: u8) -> Option<Card> {
        Card::new(month, CardKind::Light)
    }

    pub fn normal(month: u8) -> Option<Card> {
        Card::new(month, CardKind::Normal)
    }

    pub fn is_light(&self) -> bool {
        self.kind == CardKind::Light
    }

    /// True when this card can exist in the deck.
    pub fn is_valid(&self) -> bool {
        if !(1..=10).contains(&self.month) {
            return false;
        }
        match self.kind {
            CardKind::Light => LIGHT_MONTHS.contains(&self.month),
            CardKind::Normal => true,
        }
    }

    /// Traditional name of the month's flower.
    pub fn month_name(&self) -> &'static str {
        match self.month {
            1 => "pine",
            2 => "plum",
            3 => "cherry",
            4 => "wisteria",
            5 => "iris",
            6 => "peony",
            7 => "bush clover",
            8 => "pampas",
            9 => "chrysanthemum",
            10 => "maple",
            _ => "unknown",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CardKind::Light => write!(f, "{}L", self.month),
            CardKind::Normal => write!(f, "{}", self.month),
        }
    }
}

/// Error returned when a card string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid card '{0}': expected a month 1-10 optionally followed by L (light) or N (normal)")]
pub struct ParseCardError(pub String);

impl FromStr for Card {
    type Err = ParseCardError;

    /// Accepts `3`, `3n`, `3N`, `3l` and `3L`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (digits, kind) = match trimmed.chars().last() {
            Some('l') | Some('L') => (&trimmed[..trimmed.len() - 1], CardKind::Light),
            Some('n') | Some('N') => (&trimmed[..trimmed.len() - 1], CardKind::Normal),
            _ => (trimmed, CardKind::Normal),
        };
        let month: u8 = digits
            .parse()
            .map_err(|_| ParseCardError(s.to_string()))?;
        Card::new(month, kind).ok_or_else(|| ParseCardError(s.to_string()))
    }
}

pub fn all_months() -> [u8; 10] {
    [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]
}

/// The fixed 20-card deck in unshuffled order: the three Light cards first,
/// then two Normal cards per month (one for Light months).
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(DECK_SIZE);
    for &m in &LIGHT_MONTHS {
        v.push(Card {
            month: m,
            kind: CardKind::Light,
        });
    }
    for m in all_months() {
        let normals = if LIGHT_MONTHS.contains(&m) { 1 } else { 2 };
        for _ in 0..normals {
            v.push(Card {
                month: m,
                kind: CardKind::Normal,
            });
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_deck_composition() {
        let deck = full_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(deck.iter().filter(|c| c.is_light()).count(), 3);
        assert_eq!(deck.iter().filter(|c| !c.is_light()).count(), 17);
        for m in all_months() {
            assert_eq!(deck.iter().filter(|c| c.month == m).count(), 2);
        }
    }

    #[test]
    fn light_only_on_light_months() {
        assert!(Card::light(3).is_some());
        assert!(Card::light(5).is_none());
        assert!(Card::normal(0).is_none());
        assert!(Card::normal(11).is_none());
    }

    #[test]
    fn parse_and_display() {
        let c: Card = "8L".parse().unwrap();
        assert_eq!(
            c,
            Card {
                month: 8,
                kind: CardKind::Light
            }
        );
        assert_eq!(c.to_string(), "8L");
        let n: Card = "10".parse().unwrap();
        assert_eq!(n.to_string(), "10");
        assert_eq!("4n".parse::<Card>().unwrap(), Card::normal(4).unwrap());
        assert!("5L".parse::<Card>().is_err());
        assert!("x".parse::<Card>().is_err());
        assert!("".parse::<Card>().is_err());
    }
}
