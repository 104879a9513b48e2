//! Queries derived purely from the `TrickGame` contract.

use super::engine::TrickGame;

/// Variant name, or `""` for variants the facade does not know.
#[must_use]
pub fn variant_name(game: &dyn TrickGame) -> &'static str {
    game.variant().map_or("", |variant| variant.name())
}

/// True once every place in the ranking has been decided.
#[must_use]
pub fn is_ended(game: &dyn TrickGame) -> bool {
    game.rankings().iter().all(Option::is_some)
}
