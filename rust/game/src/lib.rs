//! # seotda-game: Session Orchestration
//!
//! Drives a Seotda game between the human seat and an AI opponent on top
//! of `seotda-engine`. A [`Session`] owns the engine, the opponent, the
//! queue of timed continuations and the event outbox. It never sleeps:
//! each automatic step (dealing, the AI's turn, reveal, resolution) is
//! queued with a delay, and the caller decides when to fire it.
//!
//! ## Modules
//!
//! - [`session`] - The session itself and its automatic steps
//! - [`actions`] - Human commands and the AI turn
//! - [`scheduler`] - Generation-tagged continuation queue and pacing
//! - [`events`] - Events and sound cues for the presentation layer
//! - [`snapshot`] - Player-facing snapshot and the full debug view
//! - [`messages`] - Table message templates
//! - [`logging`] - Subscriber setup and log capture for tests
//!
//! ## Quick Start
//!
//! ```rust
//! use seotda_game::{GameConfig, Pacing, Session};
//!
//! let config = GameConfig {
//!     seed: Some(42),
//!     pacing: Pacing::instant(),
//!     ..GameConfig::default()
//! };
//! let mut session = Session::new(config).unwrap();
//! session.run_until_input().unwrap();
//! assert!(session.awaiting_human());
//!
//! session.fold().unwrap();
//! assert_eq!(session.round(), 2);
//! ```

pub mod actions;
pub mod events;
pub mod logging;
pub mod messages;
pub mod scheduler;
pub mod session;
pub mod snapshot;

pub use actions::Command;
pub use events::{Cue, GameEvent};
pub use scheduler::{Pacing, Step, Ticket};
pub use session::{GameConfig, Session, SessionError, SessionId};
pub use snapshot::{DebugState, Snapshot};
