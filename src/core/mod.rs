//! Core game types: tiles, symbols, round state, RNG, configuration, errors.
//!
//! These are the data the engine operates on. Turn rules live in
//! `rules`; scheduling of deferred work lives in `schedule`.

pub mod tile;
pub mod symbol;
pub mod rng;
pub mod config;
pub mod error;
pub mod state;

pub use tile::{Tile, TileId};
pub use symbol::{Alphabet, Symbol, DEFAULT_EMOJI};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, MATCH_DELAY, MISMATCH_DELAY, TICK_INTERVAL};
pub use error::{GameError, GameResult};
pub use state::{GameRound, PendingSelection, RoundPhase, RoundSnapshot, TurnPhase};
