//! Round state and read-only snapshots.
//!
//! ## GameRound
//!
//! The mutable session state owned by `GameEngine`:
//! - Tiles (fixed order and identity after the shuffle)
//! - Pending selection (0, 1 or 2 face-up, unresolved tiles)
//! - Matched pairs, moves, elapsed seconds
//! - Started / won flags
//! - Generation, the round's identity within one engine
//!
//! ## RoundSnapshot
//!
//! What the presentation layer re-renders from. Tiles live in an `im`
//! persistent vector, so taking a snapshot after every transition is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::rng::GameRng;
use super::symbol::Alphabet;
use super::tile::{Tile, TileId};

/// At most two tiles wait for comparison at a time.
pub type PendingSelection = SmallVec<[TileId; 2]>;

/// Round-level progression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Dealt, no tile flipped yet.
    NotStarted,
    /// At least one flip, not all pairs found.
    Playing,
    /// Every pair resolved. Terminal until the next deal.
    Won,
}

/// Turn-level progression inside `RoundPhase::Playing`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Nothing pending.
    Idle,
    /// One tile face up, waiting for its partner.
    OneRevealed,
    /// Two tiles face up, settle continuation in flight. Input is locked.
    Resolving,
}

impl TurnPhase {
    fn from_pending(len: usize) -> Self {
        match len {
            0 => TurnPhase::Idle,
            1 => TurnPhase::OneRevealed,
            _ => TurnPhase::Resolving,
        }
    }
}

/// Mutable state for one round.
#[derive(Clone, Debug)]
pub struct GameRound {
    generation: u64,
    pair_count: usize,
    pub(crate) tiles: Vector<Tile>,
    pub(crate) pending: PendingSelection,
    pub(crate) matched_pair_count: usize,
    pub(crate) move_count: u32,
    pub(crate) elapsed_seconds: u64,
    pub(crate) started: bool,
    pub(crate) won: bool,
}

impl GameRound {
    /// Deal a fresh round.
    ///
    /// Each symbol is placed twice, tiles get ids `0..2k` in that order,
    /// then the sequence is shuffled. Counters start at zero.
    #[must_use]
    pub fn deal(alphabet: &Alphabet, rng: &mut GameRng, generation: u64) -> Self {
        let mut deck: Vec<Tile> = alphabet
            .symbols()
            .iter()
            .chain(alphabet.symbols())
            .enumerate()
            .map(|(i, symbol)| Tile::new(TileId::new(i as u32), symbol.clone()))
            .collect();

        rng.shuffle(&mut deck);

        Self {
            generation,
            pair_count: alphabet.len(),
            tiles: deck.into_iter().collect(),
            pending: PendingSelection::new(),
            matched_pair_count: 0,
            move_count: 0,
            elapsed_seconds: 0,
            started: false,
            won: false,
        }
    }

    /// Identity of this round within its engine.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Pairs needed to win (the alphabet size).
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// Tiles in board order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Board position of a tile, if it exists.
    #[must_use]
    pub fn position_of(&self, id: TileId) -> Option<usize> {
        self.tiles.iter().position(|t| t.id == id)
    }

    /// Look up a tile by id.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.position_of(id).and_then(|pos| self.tiles.get(pos))
    }

    pub(crate) fn tile_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        let pos = self.position_of(id)?;
        self.tiles.get_mut(pos)
    }

    #[must_use]
    pub fn pending(&self) -> &[TileId] {
        &self.pending
    }

    #[must_use]
    pub fn matched_pair_count(&self) -> usize {
        self.matched_pair_count
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// True while the elapsed-time counter should advance.
    #[must_use]
    pub fn is_clock_running(&self) -> bool {
        self.started && !self.won
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        if self.won {
            RoundPhase::Won
        } else if self.started {
            RoundPhase::Playing
        } else {
            RoundPhase::NotStarted
        }
    }

    #[must_use]
    pub fn turn_phase(&self) -> TurnPhase {
        TurnPhase::from_pending(self.pending.len())
    }

    /// Number of tiles permanently matched.
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.resolved).count()
    }

    /// Cheap read-only copy for rendering.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            generation: self.generation,
            tiles: self.tiles.clone(),
            pending: self.pending.clone(),
            pair_count: self.pair_count,
            matched_pair_count: self.matched_pair_count,
            move_count: self.move_count,
            elapsed_seconds: self.elapsed_seconds,
            started: self.started,
            won: self.won,
        }
    }
}

/// Immutable view of a round at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub generation: u64,
    pub tiles: Vector<Tile>,
    pub pending: PendingSelection,
    pub pair_count: usize,
    pub matched_pair_count: usize,
    pub move_count: u32,
    pub elapsed_seconds: u64,
    pub started: bool,
    pub won: bool,
}

impl RoundSnapshot {
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        if self.won {
            RoundPhase::Won
        } else if self.started {
            RoundPhase::Playing
        } else {
            RoundPhase::NotStarted
        }
    }

    #[must_use]
    pub fn turn_phase(&self) -> TurnPhase {
        TurnPhase::from_pending(self.pending.len())
    }

    /// Progress label, e.g. `"3/8"`.
    #[must_use]
    pub fn pairs_label(&self) -> String {
        format!("{}/{}", self.matched_pair_count, self.pair_count)
    }
}
