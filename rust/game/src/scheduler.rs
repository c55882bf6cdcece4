use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

use seotda_engine::errors::GameError;

/// Named continuations of the round flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Ante collection and the first deal
    StartRound,
    /// Open the betting phase after a deal
    OpenBetting,
    /// The AI decides and acts
    AiTurn,
    DealSecondCards,
    Reveal,
    Resolve,
    /// Re-deal after a tie, pot kept
    Replay,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Step::StartRound => "start_round",
            Step::OpenBetting => "open_betting",
            Step::AiTurn => "ai_turn",
            Step::DealSecondCards => "deal_second_cards",
            Step::Reveal => "reveal",
            Step::Resolve => "resolve",
            Step::Replay => "replay",
        };
        f.write_str(s)
    }
}

/// Handle to a scheduled continuation. The presentation layer waits
/// `delay` and hands the ticket back to fire it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ticket {
    pub step: Step,
    #[serde(serialize_with = "millis::serialize")]
    pub delay: Duration,
    pub generation: u64,
    pub seq: u64,
}

mod millis {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }
}

/// Presentation delays between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pacing {
    pub ai_think_ms: u64,
    pub deal_ms: u64,
    pub reveal_ms: u64,
    pub resolve_ms: u64,
    pub after_showdown_ms: u64,
    pub after_fold_ms: u64,
    pub next_round_ms: u64,
    pub tie_replay_ms: u64,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            ai_think_ms: 1_500,
            deal_ms: 1_500,
            reveal_ms: 1_000,
            resolve_ms: 2_000,
            after_showdown_ms: 4_000,
            after_fold_ms: 3_000,
            next_round_ms: 2_000,
            tie_replay_ms: 2_000,
        }
    }
}

impl Pacing {
    /// Every delay zero.
    pub fn instant() -> Self {
        Self {
            ai_think_ms: 0,
            deal_ms: 0,
            reveal_ms: 0,
            resolve_ms: 0,
            after_showdown_ms: 0,
            after_fold_ms: 0,
            next_round_ms: 0,
            tie_replay_ms: 0,
        }
    }

    /// Defaults multiplied by `factor` (finite, non-negative).
    pub fn scaled(factor: f64) -> Self {
        let base = Self::default();
        let f = |ms: u64| (ms as f64 * factor).round() as u64;
        Self {
            ai_think_ms: f(base.ai_think_ms),
            deal_ms: f(base.deal_ms),
            reveal_ms: f(base.reveal_ms),
            resolve_ms: f(base.resolve_ms),
            after_showdown_ms: f(base.after_showdown_ms),
            after_fold_ms: f(base.after_fold_ms),
            next_round_ms: f(base.next_round_ms),
            tie_replay_ms: f(base.tie_replay_ms),
        }
    }
}

/// FIFO of pending continuations tagged with a game generation.
///
/// Cancelling bumps the generation, so tickets handed out earlier can be
/// told apart and refused.
#[derive(Debug, Default)]
pub struct Scheduler {
    queue: VecDeque<Ticket>,
    generation: u64,
    next_seq: u64,
    /// Sum of fired delays, saturating
    clock: Duration,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, step: Step, delay_ms: u64) -> Ticket {
        let ticket = Ticket {
            step,
            delay: Duration::from_millis(delay_ms),
            generation: self.generation,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.queue.push_back(ticket);
        tracing::trace!(step = %step, delay_ms, seq = ticket.seq, "continuation scheduled");
        ticket
    }

    pub fn peek(&self) -> Option<Ticket> {
        self.queue.front().copied()
    }

    /// Removes `ticket` if it is the next one due.
    ///
    /// Tickets from an older generation are [`GameError::StaleContinuation`];
    /// a current ticket that is not at the front is refused with
    /// [`GameError::ContinuationPending`].
    pub fn take(&mut self, ticket: Ticket) -> Result<Step, GameError> {
        if ticket.generation != self.generation {
            return Err(GameError::StaleContinuation);
        }
        match self.queue.front() {
            Some(front) if *front == ticket => {
                self.queue.pop_front();
                self.clock = self.clock.saturating_add(ticket.delay);
                Ok(ticket.step)
            }
            Some(_) => Err(GameError::ContinuationPending),
            None => Err(GameError::StaleContinuation),
        }
    }

    /// Drops everything queued and starts a new generation.
    pub fn cancel_all(&mut self) {
        let dropped = self.queue.len();
        self.queue.clear();
        self.generation += 1;
        tracing::debug!(dropped, generation = self.generation, "continuations cancelled");
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Virtual time elapsed through fired continuations.
    pub fn clock(&self) -> Duration {
        self.clock
    }
}
