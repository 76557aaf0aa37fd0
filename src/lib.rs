//! # memory-match
//!
//! Game-state core for a single-player tile-matching memory game.
//!
//! ## Design Principles
//!
//! 1. **Core Only**: Rendering, input wiring and timers belong to the
//!    caller. The core exposes operations and snapshots.
//!
//! 2. **Never Block**: Settle delays and clock ticks are continuations the
//!    caller schedules, keyed by round generation so a stale callback can
//!    never touch a newer round.
//!
//! 3. **Owned State**: No globals. Each `GameEngine` is a plain value, and
//!    any number can run side by side.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: tiles live in an `im::Vector`, so a
//!   snapshot after every transition is O(1).
//!
//! - **Seeded Deals**: shuffles draw from ChaCha8; the same seed deals the
//!   same board.
//!
//! ## Modules
//!
//! - `core`: Tiles, symbols, round state, RNG, configuration, errors
//! - `rules`: `GameEngine` and turn outcomes
//! - `schedule`: Continuations and the virtual-time scheduler
//! - `games`: `MemorySession` and display helpers
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use memory_match::{Alphabet, GameConfig, MemorySession, SessionEvent};
//!
//! let alphabet = Alphabet::from_strs(["🎸"]).unwrap();
//! let mut session = MemorySession::new(GameConfig::new(alphabet).with_seed(1)).unwrap();
//!
//! let ids: Vec<_> = session.snapshot().tiles.iter().map(|t| t.id).collect();
//! session.select(ids[0]).unwrap();
//! session.select(ids[1]).unwrap();
//!
//! let events = session.advance(Duration::from_millis(500));
//! assert!(matches!(events.last(), Some(SessionEvent::Won(_))));
//! assert_eq!(
//!     session.win_summary().unwrap().to_string(),
//!     "You won in 1 moves and 0:00!"
//! );
//! ```

pub mod core;
pub mod rules;
pub mod schedule;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Alphabet, GameConfig, GameError, GameResult, GameRng, GameRngState, GameRound,
    PendingSelection, RoundPhase, RoundSnapshot, Symbol, Tile, TileId, TurnPhase,
    DEFAULT_EMOJI, MATCH_DELAY, MISMATCH_DELAY, TICK_INTERVAL,
};

pub use crate::rules::{GameEngine, PendingSettle, SettleKind, SettleOutcome, TurnOutcome};

pub use crate::schedule::{Continuation, Scheduler, VirtualScheduler};

pub use crate::games::memory::{format_elapsed, MemorySession, SessionEvent, WinSummary};
