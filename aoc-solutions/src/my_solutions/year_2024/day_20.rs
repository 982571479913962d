//! Race condition: count wall-clipping cheats that shorten a single-lane track

use std::collections::HashMap;

use anyhow::{Context, anyhow, bail};
use aoc_grid::{Grid, Point, StepMaze, WallGrid};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::iproduct;
use log::debug;

const MIN_SAVING: u64 = 100;
const SHORT_CHEAT: i32 = 2;
const LONG_CHEAT: i32 = 20;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 20, tags = ["2024", "maze", "grid"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    grid: WallGrid,
    start: Point,
    goal: Point,
    /// Smallest saving (in steps) worth counting
    min_saving: u64,
    distances: Option<Distances>,
}

/// Step counts along the honest track, computed once for both parts
#[derive(Debug)]
struct Distances {
    from_start: HashMap<Point, u64>,
    to_goal: HashMap<Point, u64>,
    best: u64,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_track(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

fn parse_track(input: &str) -> anyhow::Result<SharedData> {
    let cells = Grid::parse(input).context("track is not a rectangle")?;
    if let Some(point) = cells
        .points()
        .find(|&p| !matches!(cells.get(p), Some(b'#' | b'.' | b'S' | b'E')))
    {
        let found = cells.get(point).copied().unwrap_or_default();
        bail!("unexpected {:?} at {point}", char::from(found));
    }

    let start = cells
        .find(|&c| c == b'S')
        .ok_or_else(|| anyhow!("missing start 'S'"))?;
    let goal = cells
        .find(|&c| c == b'E')
        .ok_or_else(|| anyhow!("missing end 'E'"))?;

    Ok(SharedData {
        grid: cells.map(|&c| c == b'#'),
        start,
        goal,
        min_saving: MIN_SAVING,
        distances: None,
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let min_saving = shared.min_saving;
        Ok(count_cheats(distances(shared)?, SHORT_CHEAT, min_saving).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let min_saving = shared.min_saving;
        Ok(count_cheats(distances(shared)?, LONG_CHEAT, min_saving).to_string())
    }
}

fn distances(shared: &mut SharedData) -> Result<&Distances, SolveError> {
    let distances = match shared.distances.take() {
        Some(distances) => distances,
        None => measure_track(shared)?,
    };
    Ok(&*shared.distances.insert(distances))
}

fn measure_track(shared: &SharedData) -> Result<Distances, SolveError> {
    let maze = StepMaze::new(&shared.grid, shared.start, shared.goal)
        .map_err(|e| SolveError::SolveFailed(Box::new(e)))?;
    let from_start = maze.distances_from_start();
    let best = *from_start.get(&shared.goal).ok_or_else(|| {
        SolveError::NoRoute(format!("{} cannot reach {}", shared.start, shared.goal))
    })?;
    debug!(
        "honest race takes {best} steps over {} track cells",
        from_start.len()
    );

    Ok(Distances {
        from_start,
        to_goal: maze.distances_to_goal(),
        best,
    })
}

/// Cheats of length `2..=radius` between two track cells that save at least
/// `min_saving` steps
fn count_cheats(distances: &Distances, radius: i32, min_saving: u64) -> usize {
    let offsets: Vec<(Point, u64)> = iproduct!(-radius..=radius, -radius..=radius)
        .map(|(dx, dy)| Point::new(dx, dy))
        .map(|offset| (offset, offset.manhattan(Point::default())))
        .filter(|&(_, len)| (2..=radius as u64).contains(&len))
        .collect();

    distances
        .from_start
        .iter()
        .flat_map(|(&from, &ran)| {
            offsets.iter().filter_map(move |&(offset, len)| {
                let left = *distances.to_goal.get(&(from + offset))?;
                distances.best.checked_sub(ran + len + left)
            })
        })
        .filter(|&saving| saving >= min_saving)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
###############
#...#...#.....#
#.#.#.#.#.###.#
#S#...#.#.#...#
#######.#.#.###
#######.#.#...#
#######.#.###.#
###..E#...#...#
###.#######.###
#...###...#...#
#.#####.#.###.#
#.#...#.#.#...#
#.#.#.#.#.#.###
#...#...#...###
###############
";

    fn example() -> SharedData {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        distances(&mut shared).unwrap();
        shared
    }

    #[test]
    fn test_honest_race_length() {
        let shared = example();
        assert_eq!(shared.distances.as_ref().map(|d| d.best), Some(84));
    }

    #[test]
    fn test_short_cheat_counts() {
        let shared = example();
        let distances = shared.distances.as_ref().unwrap();
        let counts: Vec<_> = [1, 20, 38, 64, 65]
            .map(|min| count_cheats(distances, SHORT_CHEAT, min))
            .to_vec();
        assert_eq!(counts, vec![44, 5, 3, 1, 0]);
    }

    #[test]
    fn test_long_cheat_counts() {
        let shared = example();
        let distances = shared.distances.as_ref().unwrap();
        let counts: Vec<_> = [50, 72, 74, 76, 77]
            .map(|min| count_cheats(distances, LONG_CHEAT, min))
            .to_vec();
        assert_eq!(counts, vec![285, 29, 7, 3, 0]);
    }

    #[test]
    fn test_parts_use_min_saving() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "0");
        shared.min_saving = 20;
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "5");
        shared.min_saving = 50;
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "285");
    }

    #[test]
    fn test_requires_both_markers() {
        let err = Solver::parse(&EXAMPLE.replace('E', ".")).unwrap_err();
        assert!(err.to_string().contains("missing end"));
    }

    #[test]
    fn test_walled_off_finish_is_no_route() {
        let mut shared = Solver::parse("#####\n#S#E#\n#####").unwrap();
        assert!(matches!(
            <Solver as PartSolver<1>>::solve(&mut shared),
            Err(SolveError::NoRoute(_))
        ));
    }
}
