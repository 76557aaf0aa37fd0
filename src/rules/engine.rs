//! Turn resolution for the memory game.
//!
//! `GameEngine` owns the active round and moves it through
//!
//! ```text
//! NotStarted ──first flip──▶ Playing ──last pair settles──▶ Won
//!
//! Idle ──flip──▶ OneRevealed ──flip──▶ Resolving ──settle──▶ Idle
//! ```
//!
//! Comparisons never block. Flipping the second tile of a pair returns a
//! `PendingSettle` token; the caller runs it through `settle` after the
//! token's delay. Until then every selection is ignored, which is the
//! input lock that keeps a third tile from turning over.

use log::{debug, info, trace};

use crate::core::{
    Alphabet, GameConfig, GameError, GameResult, GameRng, GameRngState, GameRound, RoundSnapshot,
    Symbol, TileId,
};

use super::outcome::{PendingSettle, SettleKind, SettleOutcome, TurnOutcome};

/// Owner of one game's state and rules.
///
/// Engines are plain values; several can run side by side.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    rng: GameRng,
    round: GameRound,
}

impl GameEngine {
    /// Validate the configuration and deal the first round.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let round = GameRound::deal(&config.alphabet, &mut rng, 0);
        debug!(
            "dealt round 0: {} tiles (seed {})",
            round.tile_count(),
            rng.seed()
        );

        Ok(Self { config, rng, round })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The active round.
    #[must_use]
    pub fn round(&self) -> &GameRound {
        &self.round
    }

    /// Read-only copy of the active round.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        self.round.snapshot()
    }

    /// RNG position, for reproducing the next deal.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Start a new round over a new alphabet.
    ///
    /// Fails with `InvalidConfiguration` on an empty or duplicated
    /// alphabet; the current round is kept in that case.
    pub fn new_game(&mut self, symbols: Vec<Symbol>) -> GameResult<&GameRound> {
        let alphabet = Alphabet::new(symbols)?;
        self.config.alphabet = alphabet;
        Ok(self.restart())
    }

    /// Start a new round over the current alphabet.
    ///
    /// The previous round is dropped. Settle tokens it issued become stale.
    pub fn restart(&mut self) -> &GameRound {
        let generation = self.round.generation().wrapping_add(1);
        self.round = GameRound::deal(&self.config.alphabet, &mut self.rng, generation);
        debug!(
            "dealt round {}: {} tiles",
            generation,
            self.round.tile_count()
        );
        &self.round
    }

    /// Rewind the RNG to `state` and deal a new round from it.
    ///
    /// Reproduces the deal that followed the capture of `state`, under a
    /// fresh generation.
    pub fn replay_deal(&mut self, state: &GameRngState) -> &GameRound {
        self.rng = GameRng::from_state(state);
        debug!("rng rewound to seed {} word {}", state.seed, state.word_pos);
        self.restart()
    }

    /// Flip a tile.
    ///
    /// Returns `UnknownTile` for ids outside the round. Selections are
    /// `Ignored` without touching any state when the round is won, a pair
    /// is already being compared, or the tile is face up.
    pub fn select_tile(&mut self, id: TileId) -> GameResult<TurnOutcome> {
        let tile = self.round.tile(id).ok_or(GameError::UnknownTile(id))?;

        if self.round.won || self.round.pending.len() >= 2 || tile.revealed || tile.resolved {
            trace!("ignored selection of {}", id);
            return Ok(TurnOutcome::Ignored);
        }

        if !self.round.started {
            self.round.started = true;
            debug!("round {} started", self.round.generation());
        }

        if let Some(tile) = self.round.tile_mut(id) {
            tile.reveal();
        }
        self.round.pending.push(id);

        if self.round.pending.len() == 1 {
            return Ok(TurnOutcome::FirstFlip(id));
        }

        let (first, second) = (self.round.pending[0], id);
        self.round.move_count += 1;

        let kind = self.compare([first, second]);
        let delay = match kind {
            SettleKind::Match => self.config.match_delay,
            SettleKind::Mismatch => self.config.mismatch_delay,
        };
        let pending = PendingSettle {
            generation: self.round.generation(),
            pair: [first, second],
            kind,
            delay,
        };
        debug!(
            "move {}: {} vs {} -> {:?}",
            self.round.move_count, first, second, kind
        );

        Ok(match kind {
            SettleKind::Match => TurnOutcome::PendingMatch(pending),
            SettleKind::Mismatch => TurnOutcome::PendingMismatch(pending),
        })
    }

    /// Apply a deferred comparison result.
    ///
    /// Each token takes effect at most once, and only on the round that
    /// issued it. The outcome follows the tiles, so a token whose `kind`
    /// disagrees with them is stale.
    pub fn settle(&mut self, pending: PendingSettle) -> SettleOutcome {
        if pending.generation != self.round.generation()
            || self.round.pending.as_slice() != pending.pair.as_slice()
            || self.compare(pending.pair) != pending.kind
        {
            debug!(
                "stale settle for round {} (active round {})",
                pending.generation,
                self.round.generation()
            );
            return SettleOutcome::Stale;
        }

        self.round.pending.clear();

        match pending.kind {
            SettleKind::Mismatch => {
                for id in pending.pair {
                    if let Some(tile) = self.round.tile_mut(id) {
                        tile.hide();
                    }
                }
                SettleOutcome::Mismatched(pending.pair)
            }
            SettleKind::Match => {
                for id in pending.pair {
                    if let Some(tile) = self.round.tile_mut(id) {
                        tile.resolve();
                    }
                }
                self.round.matched_pair_count += 1;

                if self.round.matched_pair_count == self.round.pair_count() {
                    self.round.won = true;
                    info!(
                        "round {} won in {} moves, {}s",
                        self.round.generation(),
                        self.round.move_count,
                        self.round.elapsed_seconds
                    );
                    SettleOutcome::Won {
                        moves: self.round.move_count,
                        elapsed_seconds: self.round.elapsed_seconds,
                    }
                } else {
                    SettleOutcome::Matched(pending.pair)
                }
            }
        }
    }

    fn compare(&self, [first, second]: [TileId; 2]) -> SettleKind {
        match (self.round.tile(first), self.round.tile(second)) {
            (Some(a), Some(b)) if a.symbol == b.symbol => SettleKind::Match,
            _ => SettleKind::Mismatch,
        }
    }

    /// Advance the elapsed-time counter by one second.
    ///
    /// Only counts while the round is started and not won. Returns whether
    /// the counter moved.
    pub fn tick(&mut self) -> bool {
        if !self.round.is_clock_running() {
            return false;
        }
        self.round.elapsed_seconds += 1;
        trace!("tick: {}s", self.round.elapsed_seconds);
        true
    }

    /// `tick`, but only if `generation` is still the active round.
    pub fn tick_round(&mut self, generation: u64) -> bool {
        generation == self.round.generation() && self.tick()
    }
}
