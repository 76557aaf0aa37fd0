//! Playable games built on the engine.
//!
//! - `memory`: single-player tile matching on a scheduler

pub mod memory;
