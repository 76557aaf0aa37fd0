//! Symbols and the validated alphabet a deck is built from.
//!
//! An `Alphabet` is a non-empty list of distinct symbols. Each symbol ends
//! up on exactly two tiles, so the alphabet size is the number of pairs
//! needed to win.
//!
//! ```
//! use memory_match::core::{Alphabet, GameError};
//!
//! let alphabet = Alphabet::from_strs(["A", "B", "C"]).unwrap();
//! assert_eq!(alphabet.len(), 3);
//!
//! // Duplicates would leave a symbol on four tiles.
//! assert!(matches!(
//!     Alphabet::from_strs(["A", "B", "A"]),
//!     Err(GameError::InvalidConfiguration(_))
//! ));
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::{GameError, GameResult};

/// The face value printed on a tile.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symbol(pub String);

impl Symbol {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<char> for Symbol {
    fn from(value: char) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Eight distinct emoji for the stock board (16 tiles).
pub const DEFAULT_EMOJI: [&str; 8] = ["🎮", "🎯", "🎪", "🎨", "🎭", "🎸", "🎺", "⚽"];

/// Non-empty set of distinct symbols, in caller order.
///
/// Deserialization goes through the same validation as `Alphabet::new`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Symbol>", into = "Vec<Symbol>")]
pub struct Alphabet {
    symbols: Vec<Symbol>,
}

impl Alphabet {
    /// Validate and wrap a list of symbols.
    ///
    /// Fails with `InvalidConfiguration` if the list is empty or repeats a
    /// symbol.
    pub fn new(symbols: Vec<Symbol>) -> GameResult<Self> {
        if symbols.is_empty() {
            return Err(GameError::InvalidConfiguration(
                "symbol alphabet is empty".to_string(),
            ));
        }

        let mut seen = FxHashSet::default();
        for symbol in &symbols {
            if !seen.insert(symbol) {
                return Err(GameError::InvalidConfiguration(format!(
                    "symbol alphabet repeats {:?}",
                    symbol.as_str()
                )));
            }
        }

        Ok(Self { symbols })
    }

    /// Convenience constructor from string slices.
    pub fn from_strs<'a>(symbols: impl IntoIterator<Item = &'a str>) -> GameResult<Self> {
        Self::new(symbols.into_iter().map(Symbol::from).collect())
    }

    /// The stock eight-emoji alphabet.
    #[must_use]
    pub fn default_emoji() -> Self {
        Self {
            symbols: DEFAULT_EMOJI.iter().copied().map(Symbol::from).collect(),
        }
    }

    /// Number of symbols, which is also the number of pairs on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for a validated alphabet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Tile count for a deck built from this alphabet.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.symbols.len() * 2
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::default_emoji()
    }
}

impl TryFrom<Vec<Symbol>> for Alphabet {
    type Error = GameError;

    fn try_from(symbols: Vec<Symbol>) -> GameResult<Self> {
        Self::new(symbols)
    }
}

impl From<Alphabet> for Vec<Symbol> {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols
    }
}
