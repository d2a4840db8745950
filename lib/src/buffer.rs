//! The pair of grid buffers shared by the workers.
//!
//! Cells are stored as [`AtomicU8`] and accessed with relaxed ordering.
//! Ordering between generations comes from the barrier mutex: every
//! write to the next buffer happens before the worker arrives, and every
//! read of the new current buffer happens after it is released.

use crate::{
    cells::{Coord, State},
    grid::{self, Grid},
    tile::Tile,
    traits::Cells,
};
use std::{
    fmt::{self, Display, Formatter},
    sync::atomic::{AtomicU8, Ordering},
};

/// Two buffers of identical size.
///
/// Which one is "current" is decided by an index in `0..2`, owned by
/// whoever drives the generations. The other one is "next".
#[derive(Debug)]
pub(crate) struct BufferPair {
    rows: usize,
    cols: usize,
    buffers: [Box<[AtomicU8]>; 2],
}

impl BufferPair {
    /// Creates the buffers, with `grid` in buffer `0`.
    pub(crate) fn new(grid: &Grid) -> Self {
        let (rows, cols) = grid.dimensions();
        let first = grid.cells().iter().map(|&s| AtomicU8::new(s as u8)).collect();
        let second = (0..rows * cols).map(|_| AtomicU8::new(0)).collect();
        BufferPair {
            rows,
            cols,
            buffers: [first, second],
        }
    }

    /// Read access to buffer `index`.
    pub(crate) fn view(&self, index: usize) -> GridView<'_> {
        GridView {
            rows: self.rows,
            cols: self.cols,
            cells: &self.buffers[index],
        }
    }

    /// Write access to the part of buffer `index` covered by `tile`.
    pub(crate) fn tile_mut(&self, index: usize, tile: Tile) -> TileWriter<'_> {
        TileWriter {
            cols: self.cols,
            tile,
            cells: &self.buffers[index],
        }
    }
}

/// A borrowed view of one buffer.
///
/// It is what the renderer gets, and what the workers read from.
#[derive(Clone, Copy, Debug)]
pub struct GridView<'a> {
    rows: usize,
    cols: usize,
    cells: &'a [AtomicU8],
}

impl<'a> Cells for GridView<'a> {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn state(&self, (row, col): Coord) -> State {
        State::from_u8(self.cells[row * self.cols + col].load(Ordering::Relaxed))
    }
}

impl<'a> Display for GridView<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        grid::write_cells(self, f)
    }
}

/// Write access restricted to one tile of a buffer.
///
/// Each worker gets the writer for its own tile only,
/// and the tiles never overlap.
#[derive(Debug)]
pub(crate) struct TileWriter<'a> {
    cols: usize,
    tile: Tile,
    cells: &'a [AtomicU8],
}

impl<'a> TileWriter<'a> {
    /// Sets the state of a cell of the tile.
    #[inline]
    pub(crate) fn set(&self, coord: Coord, state: State) {
        debug_assert!(self.tile.contains(coord), "{:?} is outside {:?}", coord, self.tile);
        let (row, col) = coord;
        self.cells[row * self.cols + col].store(state as u8, Ordering::Relaxed);
    }
}
