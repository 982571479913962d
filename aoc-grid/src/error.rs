//! Error types for grid construction and router setup

use crate::point::Point;
use thiserror::Error;

/// Error building or addressing a grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The grid has zero width or zero height
    #[error("grid is empty ({width}x{height})")]
    Empty { width: usize, height: usize },
    /// A text row does not match the width of the first row
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The number of cells does not equal `width * height`
    #[error("{found} cells do not fill a {width}x{height} grid")]
    CellCount {
        width: usize,
        height: usize,
        found: usize,
    },
    /// A point lies outside the grid
    #[error("point {0} is outside the grid")]
    OutOfBounds(Point),
}

/// Error rejecting a router configuration before any search runs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Start or goal lies outside the grid
    #[error("{role} {point} is outside the {width}x{height} grid")]
    OutOfBounds {
        role: &'static str,
        point: Point,
        width: usize,
        height: usize,
    },
    /// Start or goal is a wall cell
    #[error("{role} {point} is a wall")]
    Blocked { role: &'static str, point: Point },
    /// The grid itself is malformed
    #[error(transparent)]
    Grid(#[from] GridError),
}
