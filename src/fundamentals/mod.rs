//! Fundamental scoring layer.

pub mod scorer;

pub use scorer::evaluate;
