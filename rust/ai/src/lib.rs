//! # seotda-ai: AI Opponent for Seotda
//!
//! Decides the AI seat's betting action from its own cards and a few facts
//! about the table. The policy is a stateless heuristic: a confidence score
//! derived from the visible hand, then a weighted random draw.
//!
//! ## Core Components
//!
//! - [`Opponent`] - Trait defining the interface for AI decision-making
//! - [`heuristic`] - Confidence scoring and the probability table
//! - [`dialogue`] - Flavor text keyed by action, outcome and betting round
//! - [`scripted`] - Opponent replaying a fixed list of actions
//! - [`create_ai`] - Factory function for creating AI opponents
//!
//! ## Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//! use seotda_ai::{create_ai, DecisionContext, Intent};
//! use seotda_engine::cards::Card;
//! use seotda_engine::game::BettingRound;
//!
//! let mut ai = create_ai("heuristic").unwrap();
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//! let ctx = DecisionContext {
//!     cards: vec![Card::light(3).unwrap()],
//!     phase: BettingRound::First,
//!     opponent_just_raised: true,
//!     pot: 2_000,
//!     ai_cash: 9_500,
//! };
//! // a Light first card is strong enough to always call a raise
//! assert_eq!(ai.decide(&ctx, &mut rng).intent, Intent::Call);
//! ```

use rand::RngCore;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use seotda_engine::cards::Card;
use seotda_engine::game::BettingRound;
use seotda_engine::player::BettingAction;

pub mod dialogue;
pub mod heuristic;
pub mod scripted;

pub use heuristic::{confidence, decide_action, HeuristicOpponent};
pub use scripted::ScriptedOpponent;

/// What an opponent wants to do.
///
/// Policies in this crate only produce the three betting actions.
/// `Unrecognized` carries anything else an external or scripted source
/// produced, so the caller can handle it explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Call,
    Raise,
    Fold,
    Unrecognized(String),
}

impl Intent {
    /// Parses an action label; unknown labels are kept as `Unrecognized`.
    pub fn from_label(label: &str) -> Intent {
        match label.trim().to_ascii_lowercase().as_str() {
            "call" => Intent::Call,
            "raise" => Intent::Raise,
            "fold" => Intent::Fold,
            _ => Intent::Unrecognized(label.to_string()),
        }
    }

    pub fn as_action(&self) -> Option<BettingAction> {
        match self {
            Intent::Call => Some(BettingAction::Call),
            Intent::Raise => Some(BettingAction::Raise),
            Intent::Fold => Some(BettingAction::Fold),
            Intent::Unrecognized(_) => None,
        }
    }
}

impl From<BettingAction> for Intent {
    fn from(a: BettingAction) -> Self {
        match a {
            BettingAction::Call => Intent::Call,
            BettingAction::Raise => Intent::Raise,
            BettingAction::Fold => Intent::Fold,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Call => f.write_str("call"),
            Intent::Raise => f.write_str("raise"),
            Intent::Fold => f.write_str("fold"),
            Intent::Unrecognized(label) => write!(f, "unrecognized({label})"),
        }
    }
}

/// Everything the AI is allowed to see when deciding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionContext {
    /// The AI's own cards (0-2)
    pub cards: Vec<Card>,
    pub phase: BettingRound,
    /// The human's last action in this phase was a raise
    pub opponent_just_raised: bool,
    pub pot: u32,
    pub ai_cash: u32,
}

/// The chosen action plus what the presentation layer shows for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decision {
    pub intent: Intent,
    /// Hand confidence in [0, 1]
    pub confidence: f64,
    /// Flavor text for the opponent speech bubble
    pub line: String,
    /// A raise was turned into a call because the AI could not afford it
    pub downgraded: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AiError {
    #[error("Unknown AI type: {0}")]
    UnknownType(String),
}

/// Trait defining the interface for AI opponents.
pub trait Opponent: Send {
    /// Picks the next action. `rng` is the only source of randomness.
    fn decide(&mut self, ctx: &DecisionContext, rng: &mut dyn RngCore) -> Decision;

    fn name(&self) -> &str;
}

/// Factory function to create AI opponents by type string.
///
/// ```rust
/// use seotda_ai::create_ai;
///
/// let ai = create_ai("heuristic").unwrap();
/// assert_eq!(ai.name(), "HeuristicAI");
/// assert!(create_ai("minimax").is_err());
/// ```
pub fn create_ai(ai_type: &str) -> Result<Box<dyn Opponent>, AiError> {
    match ai_type {
        "heuristic" | "default" => Ok(Box::new(HeuristicOpponent::new())),
        "passive" => Ok(Box::new(ScriptedOpponent::always_call())),
        other => Err(AiError::UnknownType(other.to_string())),
    }
}
