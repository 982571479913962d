//! Falling bytes: shortest walk across a memory grid, and the first byte that cuts it

use anyhow::{anyhow, bail};
use aoc_grid::{Point, StepMaze, WallGrid};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use log::debug;

const GRID_SIZE: usize = 71;
const FALLEN_BYTES: usize = 1024;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 18, tags = ["2024", "maze", "grid", "binary-search"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    bytes: Vec<Point>,
    /// Side length of the square memory grid
    size: usize,
    /// Bytes already fallen when part 1 is asked
    fallen: usize,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .map(parse_byte)
            .enumerate()
            .map(|(line_idx, byte)| byte.map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e)))
            .collect::<anyhow::Result<Vec<_>>>()
            .map(|bytes| SharedData {
                bytes,
                size: GRID_SIZE,
                fallen: FALLEN_BYTES,
            })
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn parse_byte(line: &str) -> anyhow::Result<Point> {
    let (x, y) = line
        .trim()
        .split_once(',')
        .ok_or_else(|| anyhow!("expected \"x,y\", got {line:?}"))?;
    let (x, y): (i32, i32) = (x.trim().parse()?, y.trim().parse()?);
    if x < 0 || y < 0 {
        bail!("negative coordinate in {line:?}");
    }
    Ok(Point::new(x, y))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let fallen = shared.fallen.min(shared.bytes.len());
        steps_after(shared, fallen)?
            .map(|steps| steps.to_string())
            .ok_or_else(|| SolveError::NoRoute(format!("exit blocked after {fallen} bytes")))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if steps_after(shared, 0)?.is_none() {
            return Err(SolveError::NoRoute("exit blocked before any byte falls".into()));
        }
        let total = shared.bytes.len();
        if steps_after(shared, total)?.is_some() {
            return Err(SolveError::SolveFailed(
                format!("exit still reachable after all {total} bytes").into(),
            ));
        }

        // the first `open` bytes leave a path, the first `blocked` do not
        let (mut open, mut blocked) = (0, total);
        while blocked - open > 1 {
            let mid = open + (blocked - open) / 2;
            if steps_after(shared, mid)?.is_some() {
                open = mid;
            } else {
                blocked = mid;
            }
        }
        debug!("exit first cut by byte #{blocked}");

        let byte = shared.bytes[blocked - 1];
        Ok(format!("{},{}", byte.x, byte.y))
    }
}

/// Shortest walk corner to corner once `fallen` bytes have landed, `None` if cut off
fn steps_after(shared: &SharedData, fallen: usize) -> Result<Option<u64>, SolveError> {
    let grid = WallGrid::from_points(shared.size, shared.size, shared.bytes[..fallen].iter().copied())
        .map_err(|e| SolveError::SolveFailed(Box::new(e)))?;

    let last = shared.size as i32 - 1;
    let (start, goal) = (Point::new(0, 0), Point::new(last, last));
    if grid.is_wall(start) || grid.is_wall(goal) {
        return Ok(None);
    }

    let maze = StepMaze::new(&grid, start, goal).map_err(|e| SolveError::SolveFailed(Box::new(e)))?;
    Ok(maze.shortest_steps())
}
