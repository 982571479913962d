//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use crate::inputs::InputSource;
use log::LevelFilter;

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags a solver must all carry
    pub tags: Vec<String>,
    /// Where inputs are read from
    pub inputs: InputSource,
    /// Default log level, `RUST_LOG` still wins
    pub log_level: LevelFilter,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let tags = args
            .tags
            .iter()
            .map(|tag| tag.trim())
            .map(|tag| {
                if tag.is_empty() {
                    Err(CliError::Config("empty tag in --tags".to_string()))
                } else {
                    Ok(tag.to_string())
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let inputs = match args.input {
            Some(file) => InputSource::File(file),
            None => InputSource::Dir(args.input_dir),
        };

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags,
            inputs,
            log_level: log_level(args.verbose),
            quiet: args.quiet,
        })
    }
}

/// Map `-v` repetitions onto a log level
fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    fn resolve(args: &[&str]) -> Result<Config, CliError> {
        Config::from_args(Args::try_parse_from(args).unwrap())
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(log_level(0), LevelFilter::Warn);
        assert_eq!(log_level(1), LevelFilter::Info);
        assert_eq!(log_level(2), LevelFilter::Debug);
        assert_eq!(log_level(3), LevelFilter::Trace);
        assert_eq!(log_level(9), LevelFilter::Trace);
    }

    #[test]
    fn test_input_dir_by_default() {
        let config = resolve(&["aoc", "--input-dir", "puzzles"]).unwrap();
        assert!(matches!(config.inputs, InputSource::Dir(ref dir) if dir == &PathBuf::from("puzzles")));
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_explicit_input_wins() {
        let config = resolve(&["aoc", "--input-dir", "puzzles", "--input", "maze.txt"]).unwrap();
        assert!(matches!(config.inputs, InputSource::File(ref file) if file == &PathBuf::from("maze.txt")));
    }

    #[test]
    fn test_tags_are_trimmed() {
        let config = resolve(&["aoc", "--tags", "maze, grid"]).unwrap();
        assert_eq!(config.tags, vec!["maze", "grid"]);
        assert!(matches!(
            resolve(&["aoc", "--tags", "maze,,grid"]),
            Err(CliError::Config(_))
        ));
    }
}
