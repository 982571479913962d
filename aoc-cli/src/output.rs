//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

/// Totals printed after the last result
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub solved: usize,
    pub failed: usize,
    pub parse_time: TimeDelta,
    pub solve_time: TimeDelta,
}

impl Summary {
    /// Tally results; timings only count parts that produced an answer
    pub fn from_results(results: &[SolverResult]) -> Self {
        results.iter().fold(Summary::default(), |mut acc, r| {
            if r.answer.is_ok() {
                acc.solved += 1;
                acc.parse_time += r.parse_duration.unwrap_or_default();
                acc.solve_time += r.solve_duration;
            } else {
                acc.failed += 1;
            }
            acc
        })
    }
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        match &result.answer {
            Ok(_) => println!("{}", self.format_result(result)),
            Err(_) => eprintln!("{}", self.format_result(result)),
        }
    }

    /// One line per part: the bare answer in quiet mode, otherwise with timings
    pub fn format_result(&self, result: &SolverResult) -> String {
        let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);

        match (&result.answer, self.quiet) {
            (Ok(answer), true) => answer.clone(),
            (Err(e), true) => format!("Error: {}", e),
            (Ok(answer), false) => {
                let parse_timing = result
                    .parse_duration
                    .map(|d| format!("parse: {}, ", format_duration(d)))
                    .unwrap_or_default();
                format!(
                    "{}: {} ({}solve: {})",
                    prefix,
                    answer,
                    parse_timing,
                    format_duration(result.solve_duration)
                )
            }
            (Err(e), false) => format!("{}: Error - {}", prefix, e),
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, summary: &Summary) {
        if self.quiet {
            return;
        }

        println!();
        println!("--- Summary ---");
        println!(
            "Solvers: {} solved, {} failed",
            summary.solved, summary.failed
        );
        println!("Total parse time: {}", format_duration(summary.parse_time));
        println!("Total solve time: {}", format_duration(summary.solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
