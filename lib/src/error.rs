//! All kinds of errors in this crate.

use ca_rules::ParseRuleError;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
///
/// Apart from [`SpawnError`](Error::SpawnError), every variant is a
/// precondition violation, reported before any worker thread is spawned.
#[derive(Clone, Debug, PartialEq, Display, Error)]
pub enum Error {
    /// The thread grid must have at least one row and one column.
    EmptyThreadGrid,
    /// The world must be at least 3×3, but it is {0}×{1}.
    WorldTooSmall(usize, usize),
    /// {rows} rows cannot be split evenly among {thread_rows} rows of threads.
    RowsNotDivisible { rows: usize, thread_rows: usize },
    /// {cols} columns cannot be split evenly among {thread_cols} columns of threads.
    ColsNotDivisible { cols: usize, thread_cols: usize },
    /// Invalid rule: {0:?}.
    ParseRuleError(#[from] ParseRuleError),
    /// The initial grid is {found:?}, but the world is {expected:?}.
    GridSizeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// The probability of a living cell must be between 0 and 1, not {0}.
    InvalidProbability(f64),
    /// Row {0} of the initial grid is missing.
    MissingRow(usize),
    /// Row {row} of the initial grid has {len} cells, more than the {cols} columns of the world.
    RowTooLong { row: usize, len: usize, cols: usize },
    /// Unable to start the worker for tile {0}: {1}.
    SpawnError(usize, String),
}
