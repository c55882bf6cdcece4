//! # seotda-engine: Seotda Rules Core
//!
//! A deterministic two-player Seotda engine: the closed 20-card deck, hand
//! ranking, the ante/bet/reveal round graph and the funds ledger. Nothing in
//! this crate sleeps, renders or decides for the AI; orchestration lives in
//! `seotda-game`.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (month, Light/Normal) and deck construction
//! - [`deck`] - Seeded shuffling with ChaCha20 RNG and discard recycling
//! - [`hand`] - Hand ranking (gwang, ttaeng, specials, kkeut)
//! - [`player`] - Seats, betting actions and per-seat cash
//! - [`ledger`] - Cash of both seats plus the shared pot
//! - [`rules`] - Ante/min-bet constants and action validation
//! - [`game`] - Round phases and the transition function
//! - [`engine`] - Step-by-step round execution
//! - [`record`] - In-memory round records and stats
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use seotda_engine::cards::Card;
//! use seotda_engine::hand::evaluate;
//!
//! let ali: [Card; 2] = ["1L".parse().unwrap(), "2".parse().unwrap()];
//! let rank = evaluate(&ali).unwrap();
//! assert_eq!(rank.label, "ali");
//! assert_eq!(rank.score, 899);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! ```rust
//! use seotda_engine::deck::Deck;
//!
//! let mut d1 = Deck::new_with_seed(42);
//! let mut d2 = Deck::new_with_seed(42);
//! d1.shuffle();
//! d2.shuffle();
//! assert_eq!(d1.deal(), d2.deal());
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod ledger;
pub mod player;
pub mod record;
pub mod rules;
