//! Framework for registering and running daily puzzle solvers
//!
//! Each puzzle is a type that knows how to parse its input ([`AocParser`]) and
//! solve one or more parts ([`PartSolver`] / [`Solver`]). Solvers register
//! themselves with a global plugin list and are looked up by year and day
//! through a [`SolverRegistry`].
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, RegisterableSolver,
//!     RegistryBuilder, SolveError};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Depths;
//!
//! impl AocParser for Depths {
//!     type SharedData<'a> = Vec<u32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Depths {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().max().copied().unwrap_or(0).to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Depths {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<u32>().to_string())
//!     }
//! }
//!
//! let registry = Depths
//!     .register_with(RegistryBuilder::new(), 2021, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2021, 1, "3\n9\n4").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "9");
//! assert_eq!(solver.solve(2).unwrap().answer, "16");
//! ```
//!
//! # Key Concepts
//!
//! ## Parts and shared data
//!
//! Every part of a day receives `&mut SharedData`, so part 2 can reuse anything
//! part 1 stored there. `#[derive(AocSolver)]` with `max_parts = N` implements
//! [`Solver`] by dispatching part numbers to `PartSolver<1>` .. `PartSolver<N>`.
//!
//! ## Plugin registration
//!
//! `#[derive(AutoRegisterSolver)]` submits a [`SolverPlugin`] through
//! `inventory`; [`RegistryBuilder::register_all_plugins`] or
//! [`RegistryBuilder::register_solver_plugins`] pick them up:
//!
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2024, day = 16, tags = ["2024", "maze"])]
//! pub struct Day16;
//! ```
//!
//! ## Timing
//!
//! [`DynSolver`] records parse and solve timestamps with `chrono` and logs the
//! durations at `debug` level.

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin,
    SolverRegistry, BASE_YEAR, DAYS_PER_YEAR, MAX_YEARS,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
