//! Single-threaded DP cache implementation.

use std::cell::{Cell, RefCell};
use std::marker::PhantomData;

use super::backend::Backend;
use super::problem::DpProblem;

/// Hit/miss counters of a [`DpCache`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from storage
    pub hits: u64,
    /// Lookups that had to compute
    pub misses: u64,
}

/// Memoizing evaluator for a [`DpProblem`].
///
/// Dependencies are resolved recursively and every index is computed at most
/// once. The cache is an ordinary owned value: create one per computation and
/// drop it afterwards.
///
/// # Warning: No Cycle Detection
///
/// Dependencies must form a DAG. A cycle recurses until the stack overflows.
///
/// # Example
///
/// ```rust
/// use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
///
/// struct Factorial;
///
/// impl DpProblem<usize, u64> for Factorial {
///     fn deps(&self, n: &usize) -> Vec<usize> {
///         if *n == 0 { vec![] } else { vec![n - 1] }
///     }
///     fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
///         if *n == 0 { 1 } else { (*n as u64) * deps[0] }
///     }
/// }
///
/// let cache = DpCache::new(HashMapBackend::new(), Factorial);
/// assert_eq!(cache.get(&5), 120);
/// assert_eq!(cache.stats().misses, 6);
/// ```
pub struct DpCache<I, K, B, P>
where
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    backend: RefCell<B>,
    problem: P,
    hits: Cell<u64>,
    misses: Cell<u64>,
    _phantom: PhantomData<(I, K)>,
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    pub fn new(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            hits: Cell::new(0),
            misses: Cell::new(0),
            _phantom: PhantomData,
        }
    }

    /// Value for `index`, computed on first request and cloned from storage after
    pub fn get(&self, index: &I) -> K {
        if let Some(value) = self.backend.borrow().get(index) {
            self.hits.set(self.hits.get() + 1);
            return value.clone();
        }
        self.misses.set(self.misses.get() + 1);

        // no borrow is held while dependencies recurse
        let dep_values: Vec<K> = self
            .problem
            .deps(index)
            .into_iter()
            .map(|dep| self.get(&dep))
            .collect();

        self.backend
            .borrow_mut()
            .get_or_insert(index.clone(), || self.problem.compute(index, dep_values))
            .clone()
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.get(),
            misses: self.misses.get(),
        }
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.backend.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
