//! Best-first search over an abstract state space
//!
//! A [`SearchSpace`] describes states, the moves between them and an admissible
//! estimate of the cost still to pay. The drivers here run one search per call and
//! own all of their bookkeeping:
//!
//! - [`shortest_route`] / [`shortest_cost`]: stop at the first goal pop
//! - [`all_optimal`]: keep going until no cheaper-or-equal goal arrival is possible
//!   and remember every co-optimal predecessor
//! - [`explore`]: plain Dijkstra to exhaustion, returning every reachable cost
//!
//! Paths are not copied into frontier entries. Each state keeps predecessor links
//! and routes are rebuilt by walking them backwards from the goal.
//!
//! # Example
//!
//! ```rust
//! use aoc_grid::search::{self, SearchSpace};
//!
//! /// Walk along a number line, 1 per step, towards 5
//! struct Line;
//!
//! impl SearchSpace for Line {
//!     type State = i32;
//!
//!     fn successors(&self, n: &i32) -> Vec<(i32, u64)> {
//!         vec![(n - 1, 1), (n + 1, 1)]
//!     }
//!     fn estimate(&self, n: &i32) -> u64 {
//!         u64::from(n.abs_diff(5))
//!     }
//!     fn is_goal(&self, n: &i32) -> bool {
//!         *n == 5
//!     }
//! }
//!
//! let route = search::shortest_route(&Line, 1).unwrap();
//! assert_eq!(route.cost, 4);
//! assert_eq!(route.states, vec![1, 2, 3, 4, 5]);
//! ```

use crate::frontier::Frontier;
use log::{debug, trace};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

/// Definition of a weighted search problem
///
/// `estimate` must never overstate the true remaining cost (admissible). When it
/// is also consistent, the first goal popped is optimal and no state is expanded
/// twice.
pub trait SearchSpace {
    type State: Copy + Eq + Hash + Debug;

    /// Moves out of `state` as `(next_state, move_cost)` pairs
    fn successors(&self, state: &Self::State) -> Vec<(Self::State, u64)>;

    /// Lower bound on the cost from `state` to any goal
    fn estimate(&self, state: &Self::State) -> u64;

    fn is_goal(&self, state: &Self::State) -> bool;
}

/// One minimum-cost route, start and goal included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<S> {
    pub cost: u64,
    pub states: Vec<S>,
}

/// Every minimum-cost route to the goal, stored as a predecessor graph
#[derive(Debug, Clone)]
pub struct OptimalRoutes<S> {
    cost: u64,
    goals: Vec<S>,
    parents: HashMap<S, Vec<S>>,
}

impl<S: Copy + Eq + Hash> OptimalRoutes<S> {
    /// The shared cost of every optimal route
    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// Goal states reached at the optimal cost
    pub fn goals(&self) -> &[S] {
        &self.goals
    }

    /// Every state lying on at least one optimal route
    pub fn states(&self) -> HashSet<S> {
        let mut seen = HashSet::new();
        let mut stack = self.goals.clone();
        while let Some(state) = stack.pop() {
            if !seen.insert(state) {
                continue;
            }
            if let Some(parents) = self.parents.get(&state) {
                stack.extend(parents.iter().copied());
            }
        }
        seen
    }

    /// Project [`OptimalRoutes::states`] through `key`, merging duplicates
    pub fn project<K, F>(&self, key: F) -> HashSet<K>
    where
        K: Eq + Hash,
        F: Fn(&S) -> K,
    {
        self.states().iter().map(key).collect()
    }
}

/// Find one minimum-cost route from `start` to a goal
///
/// Returns `None` when the frontier runs dry without reaching a goal.
/// A state is re-expanded only when it is reached strictly cheaper than before.
pub fn shortest_route<P: SearchSpace>(space: &P, start: P::State) -> Option<Route<P::State>> {
    let mut frontier = Frontier::new();
    let mut costs: HashMap<P::State, u64> = HashMap::from([(start, 0)]);
    let mut parents: HashMap<P::State, P::State> = HashMap::new();
    let mut expanded = 0usize;

    frontier.push(start, 0, space.estimate(&start));

    while let Some(entry) = frontier.pop() {
        if costs.get(&entry.state).is_some_and(|&best| entry.cost > best) {
            continue;
        }
        expanded += 1;
        trace!(
            "expanding {:?} at cost {} (priority {})",
            entry.state, entry.cost, entry.priority
        );

        if space.is_goal(&entry.state) {
            debug!(
                "route found: cost {} after {} expansions",
                entry.cost, expanded
            );
            return Some(Route {
                cost: entry.cost,
                states: walk_back(&parents, entry.state),
            });
        }

        for (next, step) in space.successors(&entry.state) {
            let cost = entry.cost + step;
            if costs.get(&next).is_none_or(|&best| cost < best) {
                costs.insert(next, cost);
                parents.insert(next, entry.state);
                frontier.push(next, cost, cost + space.estimate(&next));
            }
        }
    }

    debug!("no route after {} expansions", expanded);
    None
}

/// Cost of the cheapest route from `start` to a goal, `None` if unreachable
pub fn shortest_cost<P: SearchSpace>(space: &P, start: P::State) -> Option<u64> {
    shortest_route(space, start).map(|route| route.cost)
}

/// Find every minimum-cost route from `start` to a goal
///
/// Arrivals that tie the best known cost of a state are kept as extra
/// predecessors; strictly cheaper arrivals replace them. Once a goal has been
/// reached at cost `C`, the search ends at the first entry whose priority
/// exceeds `C`.
pub fn all_optimal<P: SearchSpace>(
    space: &P,
    start: P::State,
) -> Option<OptimalRoutes<P::State>> {
    let mut frontier = Frontier::new();
    let mut costs: HashMap<P::State, u64> = HashMap::from([(start, 0)]);
    let mut parents: HashMap<P::State, Vec<P::State>> = HashMap::new();
    let mut goals = Vec::new();
    let mut best_goal: Option<u64> = None;
    let mut expanded = 0usize;

    frontier.push(start, 0, space.estimate(&start));

    while let Some(entry) = frontier.pop() {
        if best_goal.is_some_and(|limit| entry.priority > limit) {
            break;
        }
        if costs.get(&entry.state).is_some_and(|&best| entry.cost > best) {
            continue;
        }
        expanded += 1;
        trace!(
            "expanding {:?} at cost {} (priority {})",
            entry.state, entry.cost, entry.priority
        );

        if space.is_goal(&entry.state) {
            let limit = *best_goal.get_or_insert(entry.cost);
            if entry.cost == limit {
                goals.push(entry.state);
            }
            continue;
        }

        for (next, step) in space.successors(&entry.state) {
            let cost = entry.cost + step;
            match costs.entry(next) {
                Entry::Vacant(slot) => {
                    slot.insert(cost);
                    parents.insert(next, vec![entry.state]);
                    frontier.push(next, cost, cost + space.estimate(&next));
                }
                Entry::Occupied(mut slot) if cost < *slot.get() => {
                    slot.insert(cost);
                    parents.insert(next, vec![entry.state]);
                    frontier.push(next, cost, cost + space.estimate(&next));
                }
                Entry::Occupied(slot) if cost == *slot.get() => {
                    let links = parents.entry(next).or_default();
                    if !links.contains(&entry.state) {
                        links.push(entry.state);
                    }
                }
                Entry::Occupied(_) => {}
            }
        }
    }

    let cost = best_goal?;
    debug!(
        "{} optimal goal arrival(s) at cost {} after {} expansions",
        goals.len(),
        cost,
        expanded
    );
    Some(OptimalRoutes {
        cost,
        goals,
        parents,
    })
}

/// Minimal cost of every state reachable from `start`
///
/// Ignores the estimate and the goal test: this is Dijkstra run to exhaustion.
pub fn explore<P: SearchSpace>(space: &P, start: P::State) -> HashMap<P::State, u64> {
    let mut frontier = Frontier::new();
    let mut costs: HashMap<P::State, u64> = HashMap::from([(start, 0)]);

    frontier.push(start, 0, 0);

    while let Some(entry) = frontier.pop() {
        if costs.get(&entry.state).is_some_and(|&best| entry.cost > best) {
            continue;
        }
        for (next, step) in space.successors(&entry.state) {
            let cost = entry.cost + step;
            if costs.get(&next).is_none_or(|&best| cost < best) {
                costs.insert(next, cost);
                frontier.push(next, cost, cost);
            }
        }
    }

    debug!("explored {} reachable states", costs.len());
    costs
}

fn walk_back<S: Copy + Eq + Hash>(parents: &HashMap<S, S>, goal: S) -> Vec<S> {
    let mut states = vec![goal];
    let mut current = goal;
    while let Some(&parent) = parents.get(&current) {
        states.push(parent);
        current = parent;
    }
    states.reverse();
    states
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Small weighted digraph given as an edge list
    struct Graph {
        edges: Vec<(u8, u8, u64)>,
        goal: u8,
    }

    impl SearchSpace for Graph {
        type State = u8;

        fn successors(&self, state: &u8) -> Vec<(u8, u64)> {
            self.edges
                .iter()
                .filter(|(from, _, _)| from == state)
                .map(|&(_, to, cost)| (to, cost))
                .collect()
        }

        fn estimate(&self, _state: &u8) -> u64 {
            0
        }

        fn is_goal(&self, state: &u8) -> bool {
            *state == self.goal
        }
    }

    /// `Graph` with a per-state estimate; unlisted states estimate 0
    struct Hinted {
        graph: Graph,
        hints: Vec<(u8, u64)>,
    }

    impl SearchSpace for Hinted {
        type State = u8;

        fn successors(&self, state: &u8) -> Vec<(u8, u64)> {
            self.graph.successors(state)
        }

        fn estimate(&self, state: &u8) -> u64 {
            self.hints
                .iter()
                .find(|(hinted, _)| hinted == state)
                .map_or(0, |&(_, hint)| hint)
        }

        fn is_goal(&self, state: &u8) -> bool {
            self.graph.is_goal(state)
        }
    }

    fn diamond() -> Graph {
        // 0 -> 1 -> 3 and 0 -> 2 -> 3 both cost 4; 0 -> 4 -> 3 costs 5
        Graph {
            edges: vec![
                (0, 1, 1),
                (1, 3, 3),
                (0, 2, 2),
                (2, 3, 2),
                (0, 4, 1),
                (4, 3, 4),
            ],
            goal: 3,
        }
    }

    #[test]
    fn test_shortest_route_walks_parents() {
        let route = shortest_route(&diamond(), 0).unwrap();
        assert_eq!(route.cost, 4);
        assert_eq!(route.states.first(), Some(&0));
        assert_eq!(route.states.last(), Some(&3));
        assert_eq!(route.states.len(), 3);
    }

    #[test]
    fn test_tied_routes_follow_insertion_order() {
        // 0 -> 1 -> 3 and 0 -> 2 -> 3 tie on every priority and cost
        let edges = vec![(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)];
        let first = Graph {
            edges: edges.clone(),
            goal: 3,
        };
        assert_eq!(shortest_route(&first, 0).unwrap().states, vec![0, 1, 3]);

        let swapped = Graph {
            edges: vec![edges[1], edges[0], edges[2], edges[3]],
            goal: 3,
        };
        assert_eq!(shortest_route(&swapped, 0).unwrap().states, vec![0, 2, 3]);
    }

    #[test]
    fn test_tied_priority_prefers_the_costlier_entry() {
        // both routes cost 3; 1 and 2 both predict 2, but 2 has paid more
        let space = Hinted {
            graph: Graph {
                edges: vec![(0, 1, 1), (1, 3, 2), (0, 2, 2), (2, 3, 1)],
                goal: 3,
            },
            hints: vec![(1, 1)],
        };
        let route = shortest_route(&space, 0).unwrap();
        assert_eq!(route, Route { cost: 3, states: vec![0, 2, 3] });

        // the same graph without the hint expands 1 first and keeps its route
        let route = shortest_route(&space.graph, 0).unwrap();
        assert_eq!(route.states, vec![0, 1, 3]);
    }

    #[test]
    fn test_start_is_goal() {
        let route = shortest_route(&diamond(), 3).unwrap();
        assert_eq!(route, Route { cost: 0, states: vec![3] });
    }

    #[test]
    fn test_unreachable_goal_is_none() {
        let graph = Graph {
            edges: vec![(0, 1, 1), (1, 0, 1)],
            goal: 9,
        };
        assert_eq!(shortest_cost(&graph, 0), None);
        assert!(all_optimal(&graph, 0).is_none());
    }

    #[test]
    fn test_all_optimal_collects_every_tied_route() {
        let routes = all_optimal(&diamond(), 0).unwrap();
        assert_eq!(routes.cost(), 4);
        assert_eq!(routes.goals(), &[3]);
        assert_eq!(routes.states(), HashSet::from([0, 1, 2, 3]));
        assert_eq!(routes.project(|&s| s % 2), HashSet::from([0, 1]));
    }

    #[test]
    fn test_cheaper_arrival_replaces_tied_parents() {
        // 2 is first reached at 5 via both 0 and 1, then at 4 via 4
        let graph = Graph {
            edges: vec![
                (0, 2, 5),
                (0, 1, 2),
                (1, 2, 3),
                (0, 4, 3),
                (4, 2, 1),
                (2, 9, 1),
            ],
            goal: 9,
        };
        let routes = all_optimal(&graph, 0).unwrap();
        assert_eq!(routes.cost(), 5);
        assert_eq!(routes.states(), HashSet::from([0, 4, 2, 9]));
    }

    #[test]
    fn test_explore_reports_all_reachable_costs() {
        let costs = explore(&diamond(), 0);
        assert_eq!(costs.len(), 5);
        assert_eq!(costs[&0], 0);
        assert_eq!(costs[&1], 1);
        assert_eq!(costs[&2], 2);
        assert_eq!(costs[&3], 4);
        assert_eq!(costs[&4], 1);
    }
}
