//! Table configuration.
//!
//! Hosts describe a table with a `GameConfig`: the seat labels in seating
//! order and, optionally, a fixed shuffle seed. Variant-specific knobs live on
//! the variant's builder.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration shared by every variant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Opaque seat labels. Position is the stable `PlayerId`.
    pub players: Vec<String>,

    /// Shuffle seed. `None` draws one from process entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration for the given seat labels.
    pub fn new<I, S>(players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            players: players.into_iter().map(Into::into).collect(),
            seed: None,
        }
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Check that the table can be dealt at all.
    ///
    /// Round-robin dealing needs at least one seat, and seats are addressed by
    /// a `u8`. Nothing else about the labels is checked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.players.len() {
            0 => Err(ConfigError::NoPlayers),
            n if n > 255 => Err(ConfigError::TooManyPlayers(n)),
            _ => Ok(()),
        }
    }
}
