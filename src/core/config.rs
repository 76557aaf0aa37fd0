//! Game configuration.
//!
//! `GameConfig` collects everything a round is built from:
//! - The symbol alphabet (deck size is twice its length)
//! - The shuffle seed (`None` draws one from the OS)
//! - Settle delays for matches and mismatches
//! - The elapsed-time tick interval
//!
//! The engine never schedules anything itself; the delays here are handed
//! to whoever drives the continuations.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{GameError, GameResult};
use super::symbol::Alphabet;

/// Display-settle delay before a matched pair becomes permanent.
pub const MATCH_DELAY: Duration = Duration::from_millis(500);

/// Display-settle delay before a mismatched pair flips back.
pub const MISMATCH_DELAY: Duration = Duration::from_millis(1000);

/// Cadence of the elapsed-time counter.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Symbols dealt as pairs.
    pub alphabet: Alphabet,

    /// Shuffle seed. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Delay before a pending match resolves.
    pub match_delay: Duration,

    /// Delay before a pending mismatch flips back.
    pub mismatch_delay: Duration,

    /// Interval between elapsed-time ticks.
    pub tick_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default_emoji(),
            seed: None,
            match_delay: MATCH_DELAY,
            mismatch_delay: MISMATCH_DELAY,
            tick_interval: TICK_INTERVAL,
        }
    }
}

impl GameConfig {
    /// Default configuration over the given alphabet.
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Fix the shuffle seed for reproducible deals.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_match_delay(mut self, delay: Duration) -> Self {
        self.match_delay = delay;
        self
    }

    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Check that the timing values are usable.
    ///
    /// The alphabet is validated when it is built, so only durations are
    /// checked here. A zero tick interval would schedule ticks forever at
    /// the same instant.
    pub fn validate(&self) -> GameResult<()> {
        if self.tick_interval.is_zero() {
            return Err(GameError::InvalidConfiguration(
                "tick interval must be non-zero".to_string(),
            ));
        }
        if self.match_delay.is_zero() || self.mismatch_delay.is_zero() {
            return Err(GameError::InvalidConfiguration(
                "settle delays must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.alphabet.len(), 8);
        assert_eq!(config.seed, None);
        assert_eq!(config.match_delay, Duration::from_millis(500));
        assert_eq!(config.mismatch_delay, Duration::from_millis(1000));
        assert_eq!(config.tick_interval, Duration::from_secs(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let alphabet = Alphabet::from_strs(["A", "B"]).unwrap();
        let config = GameConfig::new(alphabet.clone())
            .with_seed(9)
            .with_match_delay(Duration::from_millis(10))
            .with_mismatch_delay(Duration::from_millis(20))
            .with_tick_interval(Duration::from_millis(100));

        assert_eq!(config.alphabet, alphabet);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.match_delay, Duration::from_millis(10));
        assert_eq!(config.mismatch_delay, Duration::from_millis(20));
        assert_eq!(config.tick_interval, Duration::from_millis(100));
    }

    #[test]
    fn test_zero_tick_interval_rejected() {
        let config = GameConfig::default().with_tick_interval(Duration::ZERO);
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_zero_settle_delay_rejected() {
        let config = GameConfig::default().with_mismatch_delay(Duration::ZERO);
        assert!(config.validate().is_err());
    }
}
