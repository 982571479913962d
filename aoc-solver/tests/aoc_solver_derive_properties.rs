//! Property-based tests for the AocSolver derive macro

use aoc_solver::{
    AocParser, AocSolver, DynSolver, ParseError, PartSolver, RegisterableSolver, RegistryBuilder,
    SolveError, Solver,
};
use proptest::prelude::*;

fn parse_numbers(input: &str) -> Result<Vec<i64>, ParseError> {
    input
        .lines()
        .filter(|l| !l.is_empty())
        .map(|l| {
            l.parse()
                .map_err(|_| ParseError::InvalidFormat(format!("bad int {l:?}")))
        })
        .collect()
}

fn to_input(numbers: &[i64]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct SumProduct;

impl AocParser for SumProduct {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_numbers(input)
    }
}

impl PartSolver<1> for SumProduct {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for SumProduct {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i64>().to_string())
    }
}

/// Part 2 reuses what part 1 stored in the shared data
#[derive(Debug, Clone)]
struct Cached {
    numbers: Vec<i64>,
    sum: Option<i64>,
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Dependent;

impl AocParser for Dependent {
    type SharedData<'a> = Cached;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(Cached {
            numbers: parse_numbers(input)?,
            sum: None,
        })
    }
}

impl PartSolver<1> for Dependent {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let numbers = &shared.numbers;
        let sum = *shared.sum.get_or_insert_with(|| numbers.iter().sum());
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Dependent {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum = shared
            .sum
            .ok_or_else(|| SolveError::SolveFailed("part 1 has not run".into()))?;
        Ok((sum * 2).to_string())
    }
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 3)]
struct Borrowing;

impl AocParser for Borrowing {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.lines().collect())
    }
}

impl PartSolver<1> for Borrowing {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

impl PartSolver<2> for Borrowing {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.first().copied().unwrap_or_default().to_string())
    }
}

impl PartSolver<3> for Borrowing {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.last().copied().unwrap_or_default().to_string())
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// `solve_part(N)` matches calling `PartSolver<N>` directly
    #[test]
    fn prop_dispatches_to_matching_part(
        numbers in prop::collection::vec(1i64..10, 1..5),
        part in 1u8..=2
    ) {
        let input = to_input(&numbers);
        let mut shared1 = SumProduct::parse(&input).unwrap();
        let mut shared2 = SumProduct::parse(&input).unwrap();

        let dispatched = SumProduct::solve_part(&mut shared1, part).unwrap();
        let direct = match part {
            1 => <SumProduct as PartSolver<1>>::solve(&mut shared2),
            _ => <SumProduct as PartSolver<2>>::solve(&mut shared2),
        };
        prop_assert_eq!(dispatched, direct.unwrap());
    }

    /// Parts beyond `max_parts` are reported as not implemented
    #[test]
    fn prop_unknown_part_not_implemented(part in prop_oneof![Just(0u8), 3u8..=255]) {
        let mut shared = SumProduct::parse("1\n2\n3").unwrap();
        match SumProduct::solve_part(&mut shared, part) {
            Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "Expected PartNotImplemented, got {:?}", other),
        }
    }

    /// Mutations made by part 1 are visible to part 2
    #[test]
    fn prop_shared_data_carries_between_parts(numbers in prop::collection::vec(1i64..100, 1..5)) {
        let input = to_input(&numbers);
        let expected: i64 = numbers.iter().sum();

        let mut shared = Dependent::parse(&input).unwrap();
        prop_assert_eq!(Dependent::solve_part(&mut shared, 1).unwrap(), expected.to_string());
        prop_assert_eq!(shared.sum, Some(expected));
        prop_assert_eq!(Dependent::solve_part(&mut shared, 2).unwrap(), (expected * 2).to_string());
    }
}

#[test]
fn test_parts_constant_follows_attribute() {
    assert_eq!(SumProduct::PARTS, 2);
    assert_eq!(Borrowing::PARTS, 3);
}

#[test]
fn test_borrowed_shared_data_through_registry() {
    let registry = Borrowing
        .register_with(RegistryBuilder::new(), 2020, 7)
        .unwrap()
        .build();
    let input = String::from("alpha\nbeta\ngamma");
    let mut solver = registry.create_solver(2020, 7, &input).unwrap();

    let answers: Vec<_> = (1..=solver.parts())
        .map(|part| solver.solve(part).unwrap().answer)
        .collect();
    assert_eq!(answers, vec!["3", "alpha", "gamma"]);
    assert!(solver.parse_duration() >= chrono::TimeDelta::zero());
}

#[test]
fn test_dependent_part_fails_without_part_one() {
    let mut shared = Dependent::parse("4\n5").unwrap();
    assert!(matches!(
        Dependent::solve_part(&mut shared, 2),
        Err(SolveError::SolveFailed(_))
    ));
}

#[test]
fn test_dyn_solver_reports_timings() {
    let registry = SumProduct
        .register_with(RegistryBuilder::new(), 2020, 1)
        .unwrap()
        .build();
    let mut solver: Box<dyn DynSolver> = registry.create_solver(2020, 1, "2\n3\n4").unwrap();
    let result = solver.solve(2).unwrap();
    assert_eq!(result.answer, "24");
    assert!(result.solve_end >= result.solve_start);
    assert!(solver.parse_end() >= solver.parse_start());
}
