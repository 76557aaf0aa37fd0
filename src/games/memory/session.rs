//! A playable session: engine plus scheduler.

use std::time::Duration;

use log::debug;

use crate::core::{GameConfig, GameResult, RoundSnapshot, Symbol, TileId};
use crate::rules::{GameEngine, SettleOutcome, TurnOutcome};
use crate::schedule::{Continuation, Scheduler, VirtualScheduler};

use super::summary::WinSummary;

/// Something that happened while time advanced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// A compared pair became permanent.
    Matched([TileId; 2]),
    /// A compared pair turned back face down.
    Mismatched([TileId; 2]),
    /// The last pair resolved.
    Won(WinSummary),
    /// The elapsed-time counter moved.
    Ticked { elapsed_seconds: u64 },
}

/// Runs one game at a time on a scheduler.
///
/// Selections go straight to the engine. Settle tokens and clock ticks go
/// onto the scheduler and run when `advance` steps time past them.
#[derive(Debug)]
pub struct MemorySession<S: Scheduler = VirtualScheduler> {
    engine: GameEngine,
    scheduler: S,
}

impl MemorySession<VirtualScheduler> {
    /// Session on virtual time.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        Self::with_scheduler(config, VirtualScheduler::new())
    }
}

impl<S: Scheduler> MemorySession<S> {
    pub fn with_scheduler(config: GameConfig, scheduler: S) -> GameResult<Self> {
        Ok(Self {
            engine: GameEngine::new(config)?,
            scheduler,
        })
    }

    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        self.engine.snapshot()
    }

    /// Score of the active round, once won.
    #[must_use]
    pub fn win_summary(&self) -> Option<WinSummary> {
        WinSummary::from_snapshot(&self.engine.snapshot())
    }

    /// Deal again over the same alphabet, dropping the old round's queue.
    pub fn new_game(&mut self) -> RoundSnapshot {
        let generation = self.engine.round().generation();
        let snapshot = self.engine.restart().snapshot();
        self.cancel_round(generation);
        snapshot
    }

    /// Deal again over a new alphabet.
    ///
    /// An invalid alphabet leaves the current round and its queue intact.
    pub fn new_game_with(&mut self, symbols: Vec<Symbol>) -> GameResult<RoundSnapshot> {
        let generation = self.engine.round().generation();
        let snapshot = self.engine.new_game(symbols)?.snapshot();
        self.cancel_round(generation);
        Ok(snapshot)
    }

    /// Flip a tile and queue whatever follows from it.
    pub fn select(&mut self, id: TileId) -> GameResult<TurnOutcome> {
        let was_started = self.engine.round().is_started();
        let outcome = self.engine.select_tile(id)?;

        if !was_started && self.engine.round().is_started() {
            let generation = self.engine.round().generation();
            self.scheduler
                .schedule(self.engine.config().tick_interval, Continuation::Tick { generation });
        }

        if let Some(pending) = outcome.pending_settle() {
            self.scheduler
                .schedule(pending.delay, Continuation::Settle(pending));
        }

        Ok(outcome)
    }

    /// Step time forward, running every continuation that falls due.
    pub fn advance(&mut self, by: Duration) -> Vec<SessionEvent> {
        let deadline = self.scheduler.now() + by;
        let mut events = Vec::new();

        while let Some((_, continuation)) = self.scheduler.pop_due(deadline) {
            match continuation {
                Continuation::Settle(pending) => match self.engine.settle(pending) {
                    SettleOutcome::Matched(pair) => events.push(SessionEvent::Matched(pair)),
                    SettleOutcome::Mismatched(pair) => events.push(SessionEvent::Mismatched(pair)),
                    SettleOutcome::Won {
                        moves,
                        elapsed_seconds,
                    } => events.push(SessionEvent::Won(WinSummary {
                        moves,
                        elapsed_seconds,
                    })),
                    SettleOutcome::Stale => {}
                },
                Continuation::Tick { generation } => {
                    if self.engine.tick_round(generation) {
                        self.scheduler.schedule(
                            self.engine.config().tick_interval,
                            Continuation::Tick { generation },
                        );
                        events.push(SessionEvent::Ticked {
                            elapsed_seconds: self.engine.round().elapsed_seconds(),
                        });
                    }
                }
            }
        }

        self.scheduler.advance_to(deadline);
        events
    }

    fn cancel_round(&mut self, generation: u64) {
        let dropped = self.scheduler.cancel_generation(generation);
        debug!("round {} replaced, {} continuations dropped", generation, dropped);
    }
}
