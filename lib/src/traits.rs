//! A trait for anything that looks like a toroidal grid of cells.

use crate::{
    cells::{Coord, State},
    grid::Grid,
};

/// Read access to a toroidal `rows × cols` grid.
///
/// Implemented by the owned [`Grid`] and by the borrowed
/// [`GridView`](crate::GridView) into a buffer of a running world,
/// so both share the same neighbor counting.
pub trait Cells {
    /// Number of rows.
    fn rows(&self) -> usize;

    /// Number of columns.
    fn cols(&self) -> usize;

    /// Gets the state of a cell.
    ///
    /// The coordinates must be inside the grid.
    fn state(&self, coord: Coord) -> State;

    /// Counts the living cells among the 8 neighbors of a cell.
    ///
    /// The grid wraps around in both directions: row `rows - 1` is
    /// adjacent to row `0`, and column `cols - 1` to column `0`.
    ///
    /// Sums the 3×3 block centered on the cell and subtracts the cell
    /// itself. On a grid smaller than 3×3 some cells would be counted
    /// twice, which is why [`Config`](crate::Config) rejects such worlds.
    fn count_neighbors(&self, (row, col): Coord) -> u8 {
        let rows = self.rows();
        let cols = self.cols();
        let mut count = 0;
        for i in [rows - 1, 0, 1] {
            for j in [cols - 1, 0, 1] {
                count += self.state(((row + i) % rows, (col + j) % cols)) as u8;
            }
        }
        count - self.state((row, col)) as u8
    }

    /// Number of living cells.
    fn population(&self) -> usize {
        (0..self.rows())
            .flat_map(|i| (0..self.cols()).map(move |j| (i, j)))
            .filter(|&coord| self.state(coord).is_alive())
            .count()
    }

    /// Copies the cells into an owned [`Grid`].
    fn to_grid(&self) -> Grid {
        let mut grid = Grid::new(self.rows(), self.cols());
        for i in 0..self.rows() {
            for j in 0..self.cols() {
                grid.set((i, j), self.state((i, j)));
            }
        }
        grid
    }
}
