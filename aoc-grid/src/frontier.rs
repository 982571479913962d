//! Min-priority frontier for best-first search
//!
//! Entries pop in ascending `priority` (predicted total cost). When two entries
//! predict the same total, the one with the **larger** cost-to-arrive pops first,
//! so nodes believed closer to the goal are expanded earlier. Remaining ties pop
//! in insertion order, which keeps the chosen route deterministic.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A frontier entry: a state with its cost-to-arrive and predicted total
#[derive(Debug, Clone)]
pub struct Entry<S> {
    pub state: S,
    pub cost: u64,
    pub priority: u64,
    seq: u64,
}

impl<S> Ord for Entry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the greatest element: lowest priority must compare greatest
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<S> PartialOrd for Entry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Eq for Entry<S> {}

impl<S> PartialEq for Entry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

/// Growable priority queue of search states
///
/// Duplicate states are allowed; callers discard stale entries when they pop.
#[derive(Debug)]
pub struct Frontier<S> {
    heap: BinaryHeap<Entry<S>>,
    pushed: u64,
}

impl<S> Frontier<S> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            pushed: 0,
        }
    }

    /// Queue `state`, reached at `cost`, with predicted total `priority`
    pub fn push(&mut self, state: S, cost: u64, priority: u64) {
        let seq = self.pushed;
        self.pushed += 1;
        self.heap.push(Entry {
            state,
            cost,
            priority,
            seq,
        });
    }

    /// Remove the entry with the smallest priority, or `None` when exhausted
    pub fn pop(&mut self) -> Option<Entry<S>> {
        self.heap.pop()
    }

    /// Priority of the entry [`Frontier::pop`] would return next
    pub fn peek_priority(&self) -> Option<u64> {
        self.heap.peek().map(|entry| entry.priority)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<S> Default for Frontier<S> {
    fn default() -> Self {
        Self::new()
    }
}
