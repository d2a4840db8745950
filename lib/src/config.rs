//! World configuration.

use crate::{error::Error, grid::Grid, rules::Rule, traits::Cells, world::World};
use derivative::Derivative;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// World configuration.
///
/// The world will be generated from this configuration
/// and an initial grid.
#[derive(Clone, Debug, Derivative, PartialEq, Eq)]
#[derivative(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Config {
    /// Number of rows of threads.
    #[derivative(Default(value = "1"))]
    pub thread_rows: usize,

    /// Number of columns of threads.
    #[derivative(Default(value = "1"))]
    pub thread_cols: usize,

    /// Number of rows in the world.
    ///
    /// Must be a multiple of [`thread_rows`](#structfield.thread_rows).
    #[derivative(Default(value = "16"))]
    pub rows: usize,

    /// Number of columns in the world.
    ///
    /// Must be a multiple of [`thread_cols`](#structfield.thread_cols).
    #[derivative(Default(value = "16"))]
    pub cols: usize,

    /// The last generation to compute.
    ///
    /// `0` means that only generation 0 is shown.
    #[derivative(Default(value = "100"))]
    pub max_gen: u64,

    /// The rule string of the cellular automaton.
    #[derivative(Default(value = "String::from(\"B3/S23\")"))]
    pub rule_string: String,
}

impl Config {
    /// Sets up a new configuration with given thread grid and world size.
    pub fn new(thread_rows: usize, thread_cols: usize, rows: usize, cols: usize) -> Self {
        Config {
            thread_rows,
            thread_cols,
            rows,
            cols,
            ..Config::default()
        }
    }

    /// Sets the shape of the thread grid.
    pub fn set_thread_grid(mut self, thread_rows: usize, thread_cols: usize) -> Self {
        self.thread_rows = thread_rows;
        self.thread_cols = thread_cols;
        self
    }

    /// Sets the size of the world.
    pub fn set_world_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Sets the last generation to compute.
    pub fn set_max_gen(mut self, max_gen: u64) -> Self {
        self.max_gen = max_gen;
        self
    }

    /// Sets the rule string.
    pub fn set_rule_string<S: ToString>(mut self, rule_string: S) -> Self {
        self.rule_string = rule_string.to_string();
        self
    }

    /// Total number of worker threads.
    pub fn thread_count(&self) -> usize {
        self.thread_rows * self.thread_cols
    }

    /// Checks the configuration, and returns the parsed rule.
    pub fn validate(&self) -> Result<Rule, Error> {
        if self.thread_rows == 0 || self.thread_cols == 0 {
            return Err(Error::EmptyThreadGrid);
        }
        if self.rows < 3 || self.cols < 3 {
            return Err(Error::WorldTooSmall(self.rows, self.cols));
        }
        if self.rows % self.thread_rows != 0 {
            return Err(Error::RowsNotDivisible {
                rows: self.rows,
                thread_rows: self.thread_rows,
            });
        }
        if self.cols % self.thread_cols != 0 {
            return Err(Error::ColsNotDivisible {
                cols: self.cols,
                thread_cols: self.thread_cols,
            });
        }
        self.rule_string.parse()
    }

    /// Creates a new world from the configuration, with `grid` as generation 0.
    ///
    /// Returns an error if the configuration is invalid,
    /// or if the grid does not have the size of the world.
    pub fn world(&self, grid: &Grid) -> Result<World, Error> {
        let rule = self.validate()?;
        if grid.dimensions() != (self.rows, self.cols) {
            return Err(Error::GridSizeMismatch {
                expected: (self.rows, self.cols),
                found: (grid.rows(), grid.cols()),
            });
        }
        Ok(World::new(self, rule, grid))
    }
}
