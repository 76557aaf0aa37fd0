//! Turn rules: flipping, comparing, settling, and the elapsed-time clock.

mod engine;
mod outcome;

pub use engine::GameEngine;
pub use outcome::{PendingSettle, SettleKind, SettleOutcome, TurnOutcome};
