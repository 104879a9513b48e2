//! Game contract for variant implementations.
//!
//! Variants implement `TrickGame`; hosts drive any variant through it and
//! use the facade functions for the queries that need no variant state.

pub mod engine;
pub mod facade;

pub use engine::{GameVariant, HandView, Piles, TrickGame};
pub use facade::{is_ended, variant_name};
