//! Virtual-time scheduler.
//!
//! A min-heap of continuations keyed by due time and insertion order.
//! Nothing runs until the owner steps time forward, which makes every
//! interleaving of settles and ticks reproducible.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

use log::trace;

use super::{Continuation, Scheduler};

#[derive(Debug)]
struct Entry {
    due: Duration,
    seq: u64,
    continuation: Continuation,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due.cmp(&other.due).then(self.seq.cmp(&other.seq))
    }
}

/// Deterministic scheduler over virtual time.
#[derive(Debug, Default)]
pub struct VirtualScheduler {
    now: Duration,
    next_seq: u64,
    queue: BinaryHeap<Reverse<Entry>>,
}

impl VirtualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Due time of the earliest queued continuation.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.peek().map(|Reverse(entry)| entry.due)
    }
}

impl Scheduler for VirtualScheduler {
    fn now(&self) -> Duration {
        self.now
    }

    fn schedule(&mut self, delay: Duration, continuation: Continuation) {
        let due = self.now + delay;
        trace!("scheduled {:?} at {:?}", continuation, due);
        self.queue.push(Reverse(Entry {
            due,
            seq: self.next_seq,
            continuation,
        }));
        self.next_seq += 1;
    }

    fn cancel_generation(&mut self, generation: u64) -> usize {
        let before = self.queue.len();
        self.queue
            .retain(|Reverse(entry)| entry.continuation.generation() != generation);
        before - self.queue.len()
    }

    fn pop_due(&mut self, deadline: Duration) -> Option<(Duration, Continuation)> {
        if self.next_due()? > deadline {
            return None;
        }
        let Reverse(entry) = self.queue.pop()?;
        self.now = self.now.max(entry.due);
        Some((entry.due, entry.continuation))
    }

    fn advance_to(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}
