//! President: shed your hand by beating the pile.
//!
//! - The holder of the 3 of Spades leads
//! - Each play must match the pile's size and not be lower than its top
//! - A lone 2, four of a kind, or finishing a four of a kind on the pile bombs
//!   it; the bomber leads again
//! - A full circuit of passes clears the pile
//! - Seats are ranked in the order they empty their hands
//!
//! Supports any table size the deal arithmetic allows.

mod game;
mod moves;
pub mod order;
pub mod turn;

pub use game::{Play, PresidentBuilder, PresidentGame, SkipRule, STARTING_CARD};
