//! Tiles: the face-down cards on the board.
//!
//! ## ID Layout
//!
//! A round with `k` symbols deals `2k` tiles with ids `0..2k`. Ids are
//! assigned before the shuffle, so a tile's id says nothing about where it
//! sits on the board.
//!
//! ```
//! use memory_match::core::{Symbol, Tile, TileId};
//!
//! let mut tile = Tile::new(TileId::new(3), Symbol::new("🎸"));
//! assert!(tile.is_hidden());
//!
//! tile.reveal();
//! assert!(tile.revealed && !tile.resolved);
//!
//! tile.resolve();
//! assert!(tile.revealed && tile.resolved);
//! ```

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;

/// Identity of a tile within one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the ID as a slice index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for TileId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// One card on the board.
///
/// A resolved tile is always revealed; `resolve` sets both flags and
/// `hide` refuses to turn a resolved tile back over.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub symbol: Symbol,
    /// Face up.
    pub revealed: bool,
    /// Permanently matched.
    pub resolved: bool,
}

impl Tile {
    /// Create a face-down, unmatched tile.
    #[must_use]
    pub fn new(id: TileId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            revealed: false,
            resolved: false,
        }
    }

    /// Face down and unmatched.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        !self.revealed && !self.resolved
    }

    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Turn the tile back over. Resolved tiles stay face up.
    pub fn hide(&mut self) {
        if !self.resolved {
            self.revealed = false;
        }
    }

    pub fn resolve(&mut self) {
        self.revealed = true;
        self.resolved = true;
    }
}
