//! 2024 puzzles built on the grid router and the DP cache

pub mod day_11;
pub mod day_16;
pub mod day_18;
pub mod day_20;
