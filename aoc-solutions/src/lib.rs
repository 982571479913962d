//! Puzzle solutions with automatic registration
//!
//! Solutions live under [`my_solutions`], organized by year. Each one derives
//! `AocSolver` for part dispatch and `AutoRegisterSolver` for plugin
//! registration, so linking this crate is enough to make them available to a
//! `RegistryBuilder`.
//!
//! Shared helpers that are not grid routing live in [`utils`].

#[cfg(feature = "my-solutions")]
pub mod my_solutions;

pub mod utils;
