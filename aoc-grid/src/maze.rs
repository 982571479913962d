//! Concrete maze search spaces over a [`WallGrid`]
//!
//! - [`TurnMaze`]: states are poses; stepping forward costs `step`, a quarter turn
//!   (which also moves one cell) costs `step + turn`
//! - [`StepMaze`]: states are cells; each orthogonal step costs 1

use crate::error::RouteError;
use crate::grid::WallGrid;
use crate::point::{Point, Pose};
use crate::search::{self, OptimalRoutes, Route, SearchSpace};
use std::collections::{HashMap, HashSet};

/// Move prices for [`TurnMaze`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCosts {
    /// Cost of moving one cell
    pub step: u64,
    /// Extra cost of a quarter turn
    pub turn: u64,
}

impl Default for MoveCosts {
    fn default() -> Self {
        Self {
            step: 1,
            turn: 1000,
        }
    }
}

fn check_cell(grid: &WallGrid, role: &'static str, point: Point) -> Result<(), RouteError> {
    if !grid.contains(point) {
        return Err(RouteError::OutOfBounds {
            role,
            point,
            width: grid.width(),
            height: grid.height(),
        });
    }
    if grid.is_wall(point) {
        return Err(RouteError::Blocked { role, point });
    }
    Ok(())
}

/// Maze where turning is expensive
///
/// From a pose the legal moves are: one step forward, or a quarter turn to either
/// side combined with one step in the new direction. Reversing takes two turns.
/// Any facing counts once the goal cell is reached.
///
/// # Example
///
/// ```rust
/// use aoc_grid::{Direction, Point, Pose, TurnMaze, WallGrid};
///
/// let grid = WallGrid::parse_walls("#####\n#...#\n#...#\n#...#\n#####").unwrap();
/// let start = Pose::new(Point::new(1, 3), Direction::East);
/// let maze = TurnMaze::new(&grid, start, Point::new(3, 1)).unwrap();
///
/// // two steps east, one turn north, one more step
/// assert_eq!(maze.shortest_cost(), Some(1004));
/// ```
#[derive(Debug, Clone)]
pub struct TurnMaze<'g> {
    grid: &'g WallGrid,
    start: Pose,
    goal: Point,
    costs: MoveCosts,
}

impl<'g> TurnMaze<'g> {
    /// Set up a search with the default [`MoveCosts`]
    ///
    /// # Returns
    /// * `Err(RouteError::OutOfBounds)` - start or goal is outside the grid
    /// * `Err(RouteError::Blocked)` - start or goal is a wall
    pub fn new(grid: &'g WallGrid, start: Pose, goal: Point) -> Result<Self, RouteError> {
        check_cell(grid, "start", start.position)?;
        check_cell(grid, "goal", goal)?;
        Ok(Self {
            grid,
            start,
            goal,
            costs: MoveCosts::default(),
        })
    }

    pub fn with_costs(mut self, costs: MoveCosts) -> Self {
        self.costs = costs;
        self
    }

    pub fn start(&self) -> Pose {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Minimum route cost, `None` when the goal cannot be reached
    pub fn shortest_cost(&self) -> Option<u64> {
        search::shortest_cost(self, self.start)
    }

    pub fn shortest_route(&self) -> Option<Route<Pose>> {
        search::shortest_route(self, self.start)
    }

    pub fn optimal_routes(&self) -> Option<OptimalRoutes<Pose>> {
        search::all_optimal(self, self.start)
    }

    /// Cells that lie on at least one minimum-cost route
    pub fn best_seats(&self) -> Option<HashSet<Point>> {
        self.optimal_routes()
            .map(|routes| routes.project(|pose| pose.position))
    }
}

impl SearchSpace for TurnMaze<'_> {
    type State = Pose;

    fn successors(&self, pose: &Pose) -> Vec<(Pose, u64)> {
        let forward = (pose.facing, self.costs.step);
        let [left, right] = pose.facing.turns();
        let turned = self.costs.step + self.costs.turn;

        [forward, (left, turned), (right, turned)]
            .into_iter()
            .map(|(facing, cost)| (Pose::new(pose.position.step(facing), facing), cost))
            .filter(|(next, _)| !self.grid.is_wall(next.position))
            .collect()
    }

    /// Manhattan distance plus one turn for every axis still to travel that the
    /// pose is not already facing along
    fn estimate(&self, pose: &Pose) -> u64 {
        let remaining = self.goal - pose.position;
        let facing = pose.facing.offset();
        let mut estimate = pose.position.manhattan(self.goal) * self.costs.step;
        if remaining.x != 0 && remaining.x * facing.x <= 0 {
            estimate += self.costs.turn;
        }
        if remaining.y != 0 && remaining.y * facing.y <= 0 {
            estimate += self.costs.turn;
        }
        estimate
    }

    fn is_goal(&self, pose: &Pose) -> bool {
        pose.position == self.goal
    }
}

/// Maze of unit-cost orthogonal steps with no notion of facing
#[derive(Debug, Clone)]
pub struct StepMaze<'g> {
    grid: &'g WallGrid,
    start: Point,
    goal: Point,
}

impl<'g> StepMaze<'g> {
    /// # Returns
    /// * `Err(RouteError::OutOfBounds)` - start or goal is outside the grid
    /// * `Err(RouteError::Blocked)` - start or goal is a wall
    pub fn new(grid: &'g WallGrid, start: Point, goal: Point) -> Result<Self, RouteError> {
        check_cell(grid, "start", start)?;
        check_cell(grid, "goal", goal)?;
        Ok(Self { grid, start, goal })
    }

    pub fn shortest_steps(&self) -> Option<u64> {
        search::shortest_cost(self, self.start)
    }

    pub fn shortest_route(&self) -> Option<Route<Point>> {
        search::shortest_route(self, self.start)
    }

    /// Step count from the start to every reachable cell
    pub fn distances_from_start(&self) -> HashMap<Point, u64> {
        search::explore(self, self.start)
    }

    /// Step count from every cell that can reach the goal
    pub fn distances_to_goal(&self) -> HashMap<Point, u64> {
        // moves are symmetric, so exploring outward from the goal is enough
        search::explore(self, self.goal)
    }
}

impl SearchSpace for StepMaze<'_> {
    type State = Point;

    fn successors(&self, point: &Point) -> Vec<(Point, u64)> {
        point
            .neighbours()
            .into_iter()
            .filter(|&next| !self.grid.is_wall(next))
            .map(|next| (next, 1))
            .collect()
    }

    fn estimate(&self, point: &Point) -> u64 {
        point.manhattan(self.goal)
    }

    fn is_goal(&self, point: &Point) -> bool {
        *point == self.goal
    }
}
