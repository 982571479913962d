//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// At least one selected part did not produce an answer
    #[error("{failed} of {total} part(s) failed")]
    Failed { failed: usize, total: usize },
}

/// Why a single part produced no answer
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// Input could not be loaded
    #[error(transparent)]
    Input(#[from] InputError),

    /// Parsing or solving failed
    #[error(transparent)]
    Solver(#[from] aoc_solver::SolverError),
}

/// Input-file errors
#[derive(Error, Debug)]
pub enum InputError {
    /// No file at the expected location
    #[error("no input for {year}/{day:02} at {}", path.display())]
    Missing { year: u16, day: u8, path: PathBuf },

    /// The file exists but could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
