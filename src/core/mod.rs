//! Core engine types: players, RNG, configuration.
//!
//! These are variant-agnostic. Variants configure their tables through
//! `GameConfig` and their own builders rather than modifying the core.

pub mod player;
pub mod rng;
pub mod config;

pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::GameConfig;
