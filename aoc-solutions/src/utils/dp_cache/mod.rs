//! Dynamic Programming Cache with Lazy Evaluation
//!
//! Memoization for problems whose values depend on other values in a directed
//! acyclic graph.
//!
//! Values live in a [`Backend`]; [`HashMapBackend`] takes any hashable index.
//!
//! # Warning: Cycle Behavior
//!
//! **This cache does NOT detect cycles.** A cyclic dependency graph overflows
//! the stack.
//!
//! # Example
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
//!
//! /// Number of monotone lattice paths from (0, 0) to (r, c)
//! struct GridPaths;
//!
//! impl DpProblem<(usize, usize), u64> for GridPaths {
//!     fn deps(&self, pos: &(usize, usize)) -> Vec<(usize, usize)> {
//!         let (r, c) = *pos;
//!         match (r, c) {
//!             (0, _) | (_, 0) => vec![],
//!             _ => vec![(r - 1, c), (r, c - 1)],
//!         }
//!     }
//!     fn compute(&self, _pos: &(usize, usize), deps: Vec<u64>) -> u64 {
//!         if deps.is_empty() { 1 } else { deps.iter().sum() }
//!     }
//! }
//!
//! let cache = DpCache::new(HashMapBackend::new(), GridPaths);
//! assert_eq!(cache.get(&(4, 4)), 70); // C(8,4)
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend};
pub use cache::{CacheStats, DpCache};
pub use problem::DpProblem;
