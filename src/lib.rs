//! # trick-engine
//!
//! A rule engine for trick-elimination card games.
//!
//! ## Design Principles
//!
//! 1. **Variant-Agnostic Host Surface**: hosts drive every variant through the
//!    `TrickGame` contract; the facade answers "which game" and "is it over"
//!    without knowing the variant.
//!
//! 2. **Atomic Moves**: a move is fully validated before anything changes. A
//!    rejected move is a no-op.
//!
//! 3. **Snapshots, Not References**: accessors hand out persistent `im`
//!    vectors, so callers never see or mutate live engine containers.
//!
//! 4. **No Ambient State**: a game is a plain value owned by its host. No I/O,
//!    no globals, no locks; hosts serialize concurrent callers themselves.
//!
//! ## Modules
//!
//! - `core`: Player IDs, RNG, table configuration
//! - `cards`: Card and deck primitives
//! - `rules`: The `TrickGame` contract and facade queries
//! - `games`: Variants (`president`)
//! - `error`: Rejection and configuration errors
//!
//! ## Example
//!
//! ```
//! use trick_engine::games::president::PresidentBuilder;
//! use trick_engine::rules::{is_ended, variant_name, TrickGame};
//!
//! let mut game = PresidentBuilder::new()
//!     .players(["Ann", "Bo", "Cy"])
//!     .seed(7)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(variant_name(&game), "president");
//! let first = game.turn();
//! let plays = game.legal_plays(first);
//! game.play(first, &plays[1]).unwrap();
//! assert!(!is_ended(&game));
//! ```

pub mod core;
pub mod cards;
pub mod rules;
pub mod games;
pub mod error;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, PlayerId, PlayerMap};

pub use crate::cards::{Card, Deck, Suit};

pub use crate::rules::{is_ended, variant_name, GameVariant, HandView, Piles, TrickGame};

pub use crate::games::president::{Play, PresidentBuilder, PresidentGame, SkipRule};

pub use crate::error::{ConfigError, ParseCardError, PlayError};
