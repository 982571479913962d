//! Reindeer maze: cheapest route when every quarter turn costs 1000 steps

use anyhow::{Context, bail};
use aoc_grid::{Direction, Grid, Point, Pose, TurnMaze, WallGrid};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use log::debug;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 16, tags = ["2024", "maze", "grid"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    grid: WallGrid,
    start: Pose,
    goal: Point,
    common_result: Option<CommonResult>,
}

#[derive(Debug, Clone, Copy)]
pub struct CommonResult {
    lowest_score: u64,
    best_seats: usize,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_maze(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

fn parse_maze(input: &str) -> anyhow::Result<SharedData> {
    let cells = Grid::parse(input).context("maze is not a rectangle")?;

    if let Some(point) = cells
        .points()
        .find(|&p| !matches!(cells.get(p), Some(b'#' | b'.' | b'S' | b'E')))
    {
        let found = cells.get(point).copied().unwrap_or_default();
        bail!("unexpected {:?} at {point}", char::from(found));
    }

    // unmarked mazes start bottom-left and end top-right
    let height = cells.height() as i32;
    let width = cells.width() as i32;
    let start = cells
        .find(|&c| c == b'S')
        .unwrap_or(Point::new(1, height - 2));
    let goal = cells
        .find(|&c| c == b'E')
        .unwrap_or(Point::new(width - 2, 1));

    let grid = cells.map(|&c| c == b'#');
    let start = Pose::new(start, Direction::East);
    TurnMaze::new(&grid, start, goal)?;

    Ok(SharedData {
        grid,
        start,
        goal,
        common_result: None,
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared)?.lowest_score.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared)?.best_seats.to_string())
    }
}

fn solve_once_for_both(shared: &mut SharedData) -> Result<CommonResult, SolveError> {
    if let Some(result) = shared.common_result {
        return Ok(result);
    }

    let maze = TurnMaze::new(&shared.grid, shared.start, shared.goal)
        .map_err(|e| SolveError::SolveFailed(Box::new(e)))?;
    let routes = maze.optimal_routes().ok_or_else(|| {
        SolveError::NoRoute(format!("{} cannot reach {}", shared.start, shared.goal))
    })?;
    let best_seats = routes.project(|pose| pose.position).len();
    debug!(
        "lowest score {} shared by {} goal pose(s), {} best seats",
        routes.cost(),
        routes.goals().len(),
        best_seats
    );

    Ok(*shared.common_result.insert(CommonResult {
        lowest_score: routes.cost(),
        best_seats,
    }))
}
