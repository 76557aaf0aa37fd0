//! Display helpers for the clock and the end-of-round summary.

use serde::{Deserialize, Serialize};

use crate::core::RoundSnapshot;

/// Format whole seconds as `m:ss`.
///
/// Minutes are not padded and are not wrapped into hours.
///
/// ```
/// use memory_match::games::memory::format_elapsed;
///
/// assert_eq!(format_elapsed(0), "0:00");
/// assert_eq!(format_elapsed(75), "1:15");
/// assert_eq!(format_elapsed(3600), "60:00");
/// ```
#[must_use]
pub fn format_elapsed(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Score of a finished round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinSummary {
    pub moves: u32,
    pub elapsed_seconds: u64,
}

impl WinSummary {
    /// Summary of a won round; `None` while the round is still open.
    #[must_use]
    pub fn from_snapshot(snapshot: &RoundSnapshot) -> Option<Self> {
        snapshot.won.then_some(Self {
            moves: snapshot.move_count,
            elapsed_seconds: snapshot.elapsed_seconds,
        })
    }

    #[must_use]
    pub fn elapsed_label(&self) -> String {
        format_elapsed(self.elapsed_seconds)
    }
}

impl std::fmt::Display for WinSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "You won in {} moves and {}!",
            self.moves,
            self.elapsed_label()
        )
    }
}
