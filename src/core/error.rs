//! Error types for the game core.
//!
//! Only two things can actually fail: building a round from a bad
//! configuration, and naming a tile that does not exist. Every other odd
//! interaction (clicking a face-up tile, clicking during a comparison,
//! clicking after the win) is a defined no-op, not an error.

use thiserror::Error;

use super::tile::TileId;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The alphabet or timing configuration cannot produce a playable round.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The tile id is not part of the active round.
    #[error("unknown tile: {0}")]
    UnknownTile(TileId),
}

pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = GameError::InvalidConfiguration("alphabet is empty".into());
        assert_eq!(err.to_string(), "invalid configuration: alphabet is empty");

        let err = GameError::UnknownTile(TileId::new(99));
        assert_eq!(err.to_string(), "unknown tile: Tile(99)");
    }
}
