//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::ExecutorError;
use crate::inputs::InputSource;
use aoc_solver::{DynSolver, SolverRegistry};
use chrono::TimeDelta;
use log::{debug, info};
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::sync::Arc;

/// Result from a single solver execution
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    /// Shared between every part of a year/day that failed for one reason
    pub answer: Result<String, Arc<ExecutorError>>,
    /// Set on the first part of each year/day only
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs the selected solvers one after another, in year/day/part order
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputSource,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            inputs: config.inputs.clone(),
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on part_filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Year/day pairs whose input file is absent, with the path that was tried
    pub fn missing_inputs(&self, work_items: &[WorkItem]) -> Vec<(u16, u8, PathBuf)> {
        work_items
            .iter()
            .filter(|w| !self.inputs.contains(w.year, w.day))
            .map(|w| (w.year, w.day, self.inputs.input_path(w.year, w.day)))
            .collect()
    }

    /// Execute work items in order, handing each part's result to `on_result`
    pub fn execute<F>(&self, work_items: &[WorkItem], mut on_result: F)
    where
        F: FnMut(SolverResult),
    {
        for work in work_items {
            self.run_solver(work, &mut on_result);
        }
    }

    /// Parse once, then solve every requested part on the same instance
    fn run_solver<F>(&self, work: &WorkItem, on_result: &mut F)
    where
        F: FnMut(SolverResult),
    {
        let (year, day) = (work.year, work.day);
        let input = match self.inputs.read(year, day) {
            Ok(input) => input,
            Err(e) => return report_failure(work, ExecutorError::Input(e), on_result),
        };
        debug!("{}/{:02}: read {} bytes of input", year, day, input.len());

        let mut solver = match self.registry.create_solver(year, day, &input) {
            Ok(solver) => solver,
            Err(e) => return report_failure(work, ExecutorError::Solver(e), on_result),
        };

        let mut parse_duration = Some(solver.parse_duration());
        for part in work.parts.clone() {
            let result = solve_part(&mut *solver, part, parse_duration.take());
            if let Err(e) = &result.answer {
                info!("{}/{:02} part {} failed: {}", year, day, part, e);
            }
            on_result(result);
        }
    }
}

/// Emit the same failure for every part of a work item
fn report_failure<F>(work: &WorkItem, error: ExecutorError, on_result: &mut F)
where
    F: FnMut(SolverResult),
{
    let error = Arc::new(error);
    for part in work.parts.clone() {
        on_result(SolverResult {
            year: work.year,
            day: work.day,
            part,
            answer: Err(Arc::clone(&error)),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        });
    }
}

fn solve_part(
    solver: &mut dyn DynSolver,
    part: u8,
    parse_duration: Option<TimeDelta>,
) -> SolverResult {
    let (answer, solve_duration) = match solver.solve(part) {
        Ok(result) => {
            let duration = result.duration();
            (Ok(result.answer), duration)
        }
        Err(e) => (
            Err(Arc::new(ExecutorError::Solver(e.into()))),
            TimeDelta::zero(),
        ),
    };

    SolverResult {
        year: solver.year(),
        day: solver.day(),
        part,
        answer,
        parse_duration,
        solve_duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{AocParser, ParseError, RegisterableSolver, RegistryBuilder, SolveError, Solver};
    use log::LevelFilter;
    use std::fs;
    use tempfile::TempDir;

    /// Part 1 sums the numbers, part 2 needs a positive total
    struct Ledger;

    impl AocParser for Ledger {
        type SharedData<'a> = Vec<i64>;

        fn parse(input: &str) -> Result<Vec<i64>, ParseError> {
            input
                .lines()
                .map(|line| line.trim().parse::<i64>())
                .collect::<Result<_, _>>()
                .map_err(|e| ParseError::InvalidFormat(e.to_string()))
        }
    }

    impl Solver for Ledger {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Vec<i64>, part: u8) -> Result<String, SolveError> {
            let total: i64 = shared.iter().sum();
            match part {
                1 => Ok(total.to_string()),
                2 if total > 0 => Ok((total * 2).to_string()),
                2 => Err(SolveError::NoRoute(format!("total {total} is not positive"))),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    fn executor(inputs: InputSource, part_filter: Option<u8>) -> Executor {
        let builder = RegistryBuilder::new();
        let builder = Ledger.register_with(builder, 2024, 16).unwrap();
        let builder = Ledger.register_with(builder, 2024, 3).unwrap();
        let builder = Ledger.register_with(builder, 2023, 9).unwrap();
        let config = Config {
            year_filter: None,
            day_filter: None,
            part_filter,
            tags: Vec::new(),
            inputs,
            log_level: LevelFilter::Warn,
            quiet: true,
        };
        Executor::new(builder.build(), &config)
    }

    fn write_input(root: &TempDir, year: u16, day: u8, content: &str) {
        let dir = root.path().join(year.to_string());
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("input-{}.txt", day)), content).unwrap();
    }

    fn run(executor: &Executor) -> Vec<SolverResult> {
        let mut results = Vec::new();
        executor.execute(&executor.collect_work_items(), |r| results.push(r));
        results
    }

    #[test]
    fn test_work_items_follow_registry_order_and_filters() {
        let mut executor = executor(InputSource::Dir(".".into()), None);
        let keys: Vec<_> = executor
            .collect_work_items()
            .iter()
            .map(|w| (w.year, w.day, w.parts.clone()))
            .collect();
        assert_eq!(
            keys,
            vec![(2023, 9, 1..=2), (2024, 3, 1..=2), (2024, 16, 1..=2)]
        );

        executor.year_filter = Some(2024);
        executor.day_filter = Some(16);
        executor.part_filter = Some(2);
        let items = executor.collect_work_items();
        assert_eq!(
            items,
            vec![WorkItem {
                year: 2024,
                day: 16,
                parts: 2..=2
            }]
        );
    }

    #[test]
    fn test_part_filter_beyond_solver_parts_selects_nothing() {
        let mut executor = executor(InputSource::Dir(".".into()), None);
        executor.part_filter = Some(3);
        assert!(executor.collect_work_items().is_empty());
    }

    #[test]
    fn test_missing_inputs_are_listed() {
        let temp = TempDir::new().unwrap();
        write_input(&temp, 2024, 3, "1\n2\n");
        let executor = executor(InputSource::Dir(temp.path().to_path_buf()), None);

        let missing: Vec<_> = executor
            .missing_inputs(&executor.collect_work_items())
            .into_iter()
            .map(|(year, day, _)| (year, day))
            .collect();
        assert_eq!(missing, vec![(2023, 9), (2024, 16)]);
    }

    #[test]
    fn test_results_arrive_in_order() {
        let temp = TempDir::new().unwrap();
        write_input(&temp, 2023, 9, "4\n-10\n");
        write_input(&temp, 2024, 3, "1\n2\n");
        write_input(&temp, 2024, 16, "5\n");
        let executor = executor(InputSource::Dir(temp.path().to_path_buf()), None);

        let results = run(&executor);
        let keys: Vec<_> = results.iter().map(|r| (r.year, r.day, r.part)).collect();
        assert_eq!(
            keys,
            vec![
                (2023, 9, 1),
                (2023, 9, 2),
                (2024, 3, 1),
                (2024, 3, 2),
                (2024, 16, 1),
                (2024, 16, 2)
            ]
        );

        let answers: Vec<_> = results.iter().map(|r| r.answer.as_ref().ok().cloned()).collect();
        assert_eq!(
            answers,
            vec![
                Some("-6".to_string()),
                None,
                Some("3".to_string()),
                Some("6".to_string()),
                Some("5".to_string()),
                Some("10".to_string())
            ]
        );
        assert!(matches!(
            results[1].answer.as_ref().map_err(|e| &**e),
            Err(ExecutorError::Solver(aoc_solver::SolverError::SolveError(
                SolveError::NoRoute(_)
            )))
        ));
    }

    #[test]
    fn test_parse_time_reported_once_per_solver() {
        let temp = TempDir::new().unwrap();
        write_input(&temp, 2024, 3, "1\n");
        let mut executor = executor(InputSource::Dir(temp.path().to_path_buf()), None);
        executor.year_filter = Some(2024);
        executor.day_filter = Some(3);

        let results = run(&executor);
        assert_eq!(results.len(), 2);
        assert!(results[0].parse_duration.is_some());
        assert!(results[1].parse_duration.is_none());
    }

    #[test]
    fn test_missing_and_unparsable_inputs_fail_every_part() {
        let temp = TempDir::new().unwrap();
        write_input(&temp, 2024, 3, "one\n");
        let mut executor = executor(InputSource::Dir(temp.path().to_path_buf()), None);
        executor.year_filter = Some(2024);

        let results = run(&executor);
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.answer.is_err()));
        assert!(matches!(
            results[0].answer.as_ref().map_err(|e| &**e),
            Err(ExecutorError::Solver(aoc_solver::SolverError::ParseError(_)))
        ));
        assert!(matches!(
            results[2].answer.as_ref().map_err(|e| &**e),
            Err(ExecutorError::Input(crate::error::InputError::Missing { day: 16, .. }))
        ));
    }

    #[test]
    fn test_explicit_file_feeds_the_selected_solver() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("numbers.txt");
        fs::write(&file, "20\n1\n").unwrap();
        let mut executor = executor(InputSource::File(file), Some(1));
        executor.year_filter = Some(2023);

        let results = run(&executor);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].answer.as_deref().ok(), Some("21"));
    }
}
