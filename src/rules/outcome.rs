//! What `select_tile` and `settle` report back to the caller.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::TileId;

/// Whether a pending pair is waiting to resolve or to flip back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettleKind {
    Match,
    Mismatch,
}

/// Deferred resolution of a compared pair.
///
/// Returned by `select_tile` when a second tile is flipped. The caller
/// waits `delay`, then hands the token back to `GameEngine::settle`. The
/// token is bound to the round that issued it, so replaying it against a
/// later round does nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingSettle {
    pub generation: u64,
    pub pair: [TileId; 2],
    pub kind: SettleKind,
    pub delay: Duration,
}

/// Immediate result of a tile selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Nothing changed: round won, input locked, or tile already face up.
    Ignored,
    /// First tile of a pair turned face up.
    FirstFlip(TileId),
    /// Second tile matches the first. Settle to make it permanent.
    PendingMatch(PendingSettle),
    /// Second tile differs from the first. Settle to flip both back.
    PendingMismatch(PendingSettle),
}

impl TurnOutcome {
    /// The settle token, if the selection completed a pair.
    #[must_use]
    pub fn pending_settle(&self) -> Option<PendingSettle> {
        match self {
            TurnOutcome::PendingMatch(p) | TurnOutcome::PendingMismatch(p) => Some(*p),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, TurnOutcome::Ignored)
    }
}

/// Result of running a settle continuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettleOutcome {
    /// Pair resolved; more pairs remain.
    Matched([TileId; 2]),
    /// Pair resolved and it was the last one.
    Won { moves: u32, elapsed_seconds: u64 },
    /// Pair flipped back face down.
    Mismatched([TileId; 2]),
    /// Token belongs to another round or was already settled.
    Stale,
}

impl SettleOutcome {
    #[must_use]
    pub fn is_stale(&self) -> bool {
        matches!(self, SettleOutcome::Stale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(kind: SettleKind) -> PendingSettle {
        PendingSettle {
            generation: 1,
            pair: [TileId::new(0), TileId::new(3)],
            kind,
            delay: Duration::from_millis(500),
        }
    }

    #[test]
    fn test_pending_settle_accessor() {
        let p = token(SettleKind::Match);
        assert_eq!(TurnOutcome::PendingMatch(p).pending_settle(), Some(p));
        assert_eq!(TurnOutcome::PendingMismatch(p).pending_settle(), Some(p));
        assert_eq!(TurnOutcome::FirstFlip(TileId::new(0)).pending_settle(), None);
        assert_eq!(TurnOutcome::Ignored.pending_settle(), None);
        assert!(TurnOutcome::Ignored.is_ignored());
    }

    #[test]
    fn test_stale() {
        assert!(SettleOutcome::Stale.is_stale());
        assert!(!SettleOutcome::Mismatched([TileId::new(0), TileId::new(1)]).is_stale());
    }

    #[test]
    fn test_token_serde() {
        let p = token(SettleKind::Mismatch);
        let json = serde_json::to_string(&p).unwrap();
        let deserialized: PendingSettle = serde_json::from_str(&json).unwrap();
        assert_eq!(p, deserialized);
    }
}
