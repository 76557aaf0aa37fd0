//! Deferred work: settle continuations and elapsed-time ticks.
//!
//! The engine never waits. When a pair is compared it hands back a
//! `PendingSettle`, and once the first tile is flipped the clock needs a
//! tick every interval. Both are expressed as `Continuation`s queued on a
//! `Scheduler`.
//!
//! Every continuation carries the generation of the round that queued it.
//! Starting a new round cancels the old generation's queue entries, and
//! the engine rejects any that slip through anyway.
//!
//! ## Example Usage
//!
//! ```
//! use std::time::Duration;
//! use memory_match::schedule::{Continuation, Scheduler, VirtualScheduler};
//!
//! let mut scheduler = VirtualScheduler::new();
//! scheduler.schedule(Duration::from_secs(1), Continuation::Tick { generation: 0 });
//!
//! assert!(scheduler.pop_due(Duration::from_millis(999)).is_none());
//! let (at, due) = scheduler.pop_due(Duration::from_secs(1)).unwrap();
//! assert_eq!(at, Duration::from_secs(1));
//! assert_eq!(due, Continuation::Tick { generation: 0 });
//! ```

mod queue;

pub use queue::VirtualScheduler;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::rules::PendingSettle;

/// A callback the game core wants run later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Continuation {
    /// Resolve or revert a compared pair.
    Settle(PendingSettle),
    /// Advance the elapsed-time counter of a round.
    Tick { generation: u64 },
}

impl Continuation {
    /// Round the continuation belongs to.
    #[must_use]
    pub fn generation(&self) -> u64 {
        match self {
            Continuation::Settle(pending) => pending.generation,
            Continuation::Tick { generation } => *generation,
        }
    }
}

/// Clock plus queue of continuations.
///
/// Times are offsets from the scheduler's own epoch, so implementations
/// can be driven by a wall clock or by tests stepping virtual time.
pub trait Scheduler {
    /// Current time.
    fn now(&self) -> Duration;

    /// Queue `continuation` to run `delay` after `now()`.
    fn schedule(&mut self, delay: Duration, continuation: Continuation);

    /// Drop every queued continuation of `generation`.
    ///
    /// Returns how many were dropped.
    fn cancel_generation(&mut self, generation: u64) -> usize;

    /// Remove the earliest continuation due at or before `deadline`.
    ///
    /// Moves `now()` forward to its due time. Ties run in the order they
    /// were scheduled.
    fn pop_due(&mut self, deadline: Duration) -> Option<(Duration, Continuation)>;

    /// Move `now()` forward to `deadline` once nothing more is due.
    fn advance_to(&mut self, deadline: Duration);

    /// Number of queued continuations.
    fn pending(&self) -> usize;
}
