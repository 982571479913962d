//! Plutonian pebbles: count stones after repeated blinks, memoized per (stone, blinks)

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use log::debug;

use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};

const SHORT_BLINKS: u8 = 25;
const LONG_BLINKS: u8 = 75;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 11, tags = ["2024", "dp"])]
pub struct Solver;

/// Stone count per `(stone, blinks)`; `None` once a count no longer fits in `u64`
type StoneCount = Option<u64>;
type StoneCache = DpCache<(u64, u8), StoneCount, HashMapBackend<(u64, u8), StoneCount>, Blink>;

/// Parsed stones plus the memo shared by both parts
pub struct SharedData {
    stones: Vec<u64>,
    cache: StoneCache,
}

/// Number of stones one stone becomes after `blinks` blinks
pub struct Blink;

impl Blink {
    /// What a single stone turns into on one blink, `None` if the engraving overflows
    pub fn next(stone: u64) -> Option<Vec<u64>> {
        if stone == 0 {
            return Some(vec![1]);
        }
        let digits = stone.ilog10() + 1;
        if digits % 2 == 0 {
            let half = 10u64.pow(digits / 2);
            Some(vec![stone / half, stone % half])
        } else {
            stone.checked_mul(2024).map(|next| vec![next])
        }
    }
}

impl DpProblem<(u64, u8), StoneCount> for Blink {
    fn deps(&self, &(stone, blinks): &(u64, u8)) -> Vec<(u64, u8)> {
        if blinks == 0 {
            return vec![];
        }
        Blink::next(stone)
            .unwrap_or_default()
            .into_iter()
            .map(|next| (next, blinks - 1))
            .collect()
    }

    fn compute(&self, &(stone, blinks): &(u64, u8), deps: Vec<StoneCount>) -> StoneCount {
        if blinks == 0 {
            return Some(1);
        }
        Blink::next(stone)?;
        deps.into_iter()
            .try_fold(0u64, |total, count| total.checked_add(count?))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .split_whitespace()
            .enumerate()
            .map(|(idx, word)| {
                word.parse::<u64>()
                    .map_err(|e| anyhow!("(stone {}) {:?}: {}", idx + 1, word, e))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .and_then(|stones| {
                if stones.is_empty() {
                    Err(anyhow!("no stones"))
                } else {
                    Ok(stones)
                }
            })
            .map(|stones| SharedData {
                stones,
                cache: DpCache::new(HashMapBackend::new(), Blink),
            })
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(stones_after(shared, SHORT_BLINKS)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(stones_after(shared, LONG_BLINKS)?.to_string())
    }
}

fn stones_after(shared: &SharedData, blinks: u8) -> Result<u64, SolveError> {
    let total = shared
        .stones
        .iter()
        .try_fold(0u64, |total, &stone| {
            total.checked_add(shared.cache.get(&(stone, blinks))?)
        })
        .ok_or_else(|| {
            SolveError::SolveFailed(
                format!("stone count after {blinks} blinks overflows u64").into(),
            )
        })?;
    let stats = shared.cache.stats();
    debug!(
        "{blinks} blinks: {total} stones ({} cache hits, {} misses, {} entries)",
        stats.hits,
        stats.misses,
        shared.cache.len()
    );
    Ok(total)
}
