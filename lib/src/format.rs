//! Reading generation 0 from text.
//!
//! One line per row. [`ALIVE_CHAR`] is a living cell,
//! any other character is a dead cell.

use crate::{
    cells::State,
    error::Error,
    grid::{Grid, ALIVE_CHAR},
};

/// Reads a `rows × cols` grid.
///
/// Lines shorter than `cols` are padded with dead cells,
/// and lines after row `rows - 1` are ignored.
pub fn read_plain(text: &str, rows: usize, cols: usize) -> Result<Grid, Error> {
    let mut grid = Grid::new(rows, cols);
    let mut lines = text.lines();
    for row in 0..rows {
        let line = lines.next().ok_or(Error::MissingRow(row))?;
        let len = line.chars().count();
        if len > cols {
            return Err(Error::RowTooLong { row, len, cols });
        }
        for (col, c) in line.chars().enumerate() {
            grid.set((row, col), State::from(c == ALIVE_CHAR));
        }
    }
    Ok(grid)
}
