//! Variant implementations of the `TrickGame` contract.

pub mod president;
