//! Brute-force combination sum search over a puzzle input sequence.

pub mod combinations;
pub mod input;
pub mod problem;
pub mod result;
pub mod search;
pub mod settings;
