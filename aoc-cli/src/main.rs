//! `aoc` - run registered puzzle solvers against inputs on disk

mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::{RegistryBuilder, SolverRegistry};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use inputs::InputSource;
use log::{info, warn};
use output::{OutputFormatter, Summary};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let registry = build_registry(&config.tags)?;
    info!("{} solver(s) registered", registry.len());
    let executor = Executor::new(registry, &config);

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }
    if let InputSource::File(path) = &config.inputs
        && work_items.len() != 1
    {
        return Err(CliError::Config(format!(
            "--input {} needs exactly one selected solver, {} matched",
            path.display(),
            work_items.len()
        )));
    }

    let missing = executor.missing_inputs(&work_items);
    if !missing.is_empty() {
        eprintln!("Missing {} input file(s):", missing.len());
        for (year, day, path) in &missing {
            eprintln!("  - {}/{:02}: {}", year, day, path.display());
        }
    }

    if !config.quiet {
        println!("Running {} solver(s)...", work_items.len());
    }
    let formatter = OutputFormatter::new(config.quiet);
    let mut results = Vec::new();
    executor.execute(&work_items, |result| {
        formatter.print_result(&result);
        results.push(result);
    });

    let summary = Summary::from_results(&results);
    formatter.print_summary(&summary);

    if summary.failed > 0 {
        warn!("{} part(s) failed", summary.failed);
        return Err(CliError::Failed {
            failed: summary.failed,
            total: results.len(),
        });
    }
    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linked_plugins_are_registered() {
        let registry = build_registry(&[]).unwrap();
        for day in [11, 16, 18, 20] {
            assert!(registry.contains(2024, day), "2024/{day} not registered");
        }
    }

    #[test]
    fn test_every_tag_must_match() {
        let mazes = build_registry(&["maze".to_string()]).unwrap();
        let keys: Vec<_> = mazes.iter_info().map(|i| (i.year, i.day)).collect();
        assert_eq!(keys, vec![(2024, 16), (2024, 18), (2024, 20)]);

        let narrow = build_registry(&["maze".to_string(), "binary-search".to_string()]).unwrap();
        let keys: Vec<_> = narrow.iter_info().map(|i| (i.year, i.day)).collect();
        assert_eq!(keys, vec![(2024, 18)]);

        assert!(build_registry(&["nonexistent".to_string()]).unwrap().is_empty());
    }
}
