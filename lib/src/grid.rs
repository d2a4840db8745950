//! Owned grids.

use crate::{
    cells::{Coord, State},
    error::Error,
    traits::Cells,
};
use rand::Rng;
use std::fmt::{self, Display, Formatter};

/// A character for a living cell in the text format.
pub const ALIVE_CHAR: char = 'X';
/// A character for a dead cell in the text format.
pub const DEAD_CHAR: char = ' ';

/// An owned `rows × cols` grid, stored row-major.
///
/// Used for generation 0 and for snapshots of a running world.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<State>,
}

impl Grid {
    /// Creates a grid where every cell is dead.
    pub fn new(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![State::Dead; rows * cols],
        }
    }

    /// Creates a grid from the given living cells.
    ///
    /// Coordinates wrap around the grid.
    pub fn with_alive<I: IntoIterator<Item = Coord>>(rows: usize, cols: usize, alive: I) -> Self {
        let mut grid = Grid::new(rows, cols);
        for (i, j) in alive {
            grid.set((i % rows, j % cols), State::Alive);
        }
        grid
    }

    /// Generates a random grid.
    ///
    /// Each cell is alive with probability `probability`,
    /// which must be between 0 and 1.
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        probability: f64,
        rng: &mut R,
    ) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(Error::InvalidProbability(probability));
        }
        let cells = (0..rows * cols)
            .map(|_| State::from(rng.gen::<f64>() < probability))
            .collect();
        Ok(Grid { rows, cols, cells })
    }

    /// Sets the state of a cell.
    pub fn set(&mut self, (row, col): Coord, state: State) {
        self.cells[row * self.cols + col] = state;
    }

    /// The dimensions `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The cells, row-major.
    pub fn cells(&self) -> &[State] {
        &self.cells
    }
}

impl Cells for Grid {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn state(&self, (row, col): Coord) -> State {
        self.cells[row * self.cols + col]
    }

    fn population(&self) -> usize {
        self.cells.iter().filter(|state| state.is_alive()).count()
    }

    fn to_grid(&self) -> Grid {
        self.clone()
    }
}

/// Displays the grid with [`ALIVE_CHAR`] and [`DEAD_CHAR`],
/// one line per row.
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_cells(self, f)
    }
}

/// Writes any grid in the text format.
pub(crate) fn write_cells<C: Cells + ?Sized, W: fmt::Write>(cells: &C, w: &mut W) -> fmt::Result {
    for i in 0..cells.rows() {
        for j in 0..cells.cols() {
            w.write_char(match cells.state((i, j)) {
                State::Alive => ALIVE_CHAR,
                State::Dead => DEAD_CHAR,
            })?;
        }
        w.write_char('\n')?;
    }
    Ok(())
}
