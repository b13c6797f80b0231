use thiserror::Error;

use crate::maze::Point;

/// Convenient result alias for the maze solver library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Every variant is raised before a solve begins; an unreachable goal is not
/// an error and surfaces as an exhausted search instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The maze text contained no rows.
    #[error("maze is empty")]
    EmptyMaze,

    /// No `A` marker was found.
    #[error("maze has no starting position")]
    MissingStart,

    /// No `B` marker was found.
    #[error("maze has no goal position")]
    MissingGoal,

    #[error("maze has more than one starting position: {first} and {second}")]
    DuplicateStart { first: Point, second: Point },

    #[error("maze has more than one goal position: {first} and {second}")]
    DuplicateGoal { first: Point, second: Point },

    /// A row's width differs from the first row's.
    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A character outside the maze encoding.
    #[error("invalid character {ch:?} at {}", Point::new(*row, *col))]
    InvalidCell { row: usize, col: usize, ch: char },

    /// The cell buffer does not match the declared dimensions.
    #[error("grid size mismatch: {height}x{width} needs {expected} cells, got {found}")]
    DimensionMismatch {
        height: usize,
        width: usize,
        expected: usize,
        found: usize,
    },

    #[error("open cell {point} has zero traverse cost")]
    ZeroCost { point: Point },

    #[error("{role} {point} lies outside the grid")]
    EndpointOutOfBounds { role: &'static str, point: Point },

    #[error("{role} {point} is a wall")]
    EndpointIsWall { role: &'static str, point: Point },

    /// Raised when a strategy name is not one of the five supported ones.
    #[error("unsupported search strategy {name:?} (expected bfs, dfs, dijkstra, gbfs or astar)")]
    UnknownStrategy { name: String },
}
