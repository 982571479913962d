//! Grid helpers and a weighted best-first router for maze puzzles
//!
//! # Overview
//!
//! - [`Grid`] / [`WallGrid`]: rectangular 2-D storage addressed by [`Point`];
//!   anything outside the grid reads as a wall
//! - [`Frontier`]: min-priority queue with a fixed tie-break (higher cost-to-arrive
//!   first, then insertion order)
//! - [`search`]: generic drivers over a [`SearchSpace`] (single best route, every
//!   co-optimal route, exhaustive cost map)
//! - [`TurnMaze`] and [`StepMaze`]: the two maze flavours the puzzles need
//!
//! # Quick Example
//!
//! ```rust
//! use aoc_grid::{Direction, Point, Pose, TurnMaze, WallGrid};
//!
//! let grid = WallGrid::parse_walls(
//!     "#######\n\
//!      #.....#\n\
//!      #.###.#\n\
//!      #.....#\n\
//!      ########",
//! )
//! .unwrap();
//!
//! let start = Pose::new(Point::new(1, 2), Direction::East);
//! let maze = TurnMaze::new(&grid, start, Point::new(5, 2)).unwrap();
//!
//! assert_eq!(maze.shortest_cost(), Some(3006));
//! // both corridors are optimal: 5 + 5 cells plus start and goal
//! assert_eq!(maze.best_seats().map(|seats| seats.len()), Some(12));
//! ```

mod error;
mod frontier;
mod grid;
mod maze;
mod point;
pub mod search;

pub use error::{GridError, RouteError};
pub use frontier::{Entry, Frontier};
pub use grid::{Grid, WallGrid};
pub use maze::{MoveCosts, StepMaze, TurnMaze};
pub use point::{Direction, Point, Pose};
pub use search::{OptimalRoutes, Route, SearchSpace};
