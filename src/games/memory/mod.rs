//! Tile-matching memory game.
//!
//! The stock board deals eight emoji pairs face down. The player flips two
//! tiles per move:
//! - Matching tiles stay face up after a short settle delay
//! - Different tiles flip back after a longer one
//! - The clock starts on the first flip and stops on the last match
//!
//! `MemorySession` wires the engine to a scheduler so a front end only has
//! to forward clicks, step time, and render snapshots.

mod session;
mod summary;

pub use session::{MemorySession, SessionEvent};
pub use summary::{format_elapsed, WinSummary};
