//! Splitting the world into tiles.

use crate::cells::Coord;

/// A rectangular part of the world, owned by exactly one worker.
///
/// Covers rows `start_row..start_row + rows` and
/// columns `start_col..start_col + cols`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    /// The rank of the worker that owns the tile.
    pub rank: usize,
    /// The first row.
    pub start_row: usize,
    /// The first column.
    pub start_col: usize,
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl Tile {
    /// The tile of the worker with rank `rank`.
    ///
    /// `threads` is the shape `(R, S)` of the thread grid,
    /// and `world` is the shape `(m, n)` of the world.
    /// Workers are numbered row by row, so worker `rank` sits at
    /// row `rank / S` and column `rank % S` of the thread grid.
    ///
    /// `m` must be a multiple of `R` and `n` a multiple of `S`,
    /// otherwise the tiles would not cover the whole world.
    pub fn for_rank(rank: usize, (r, s): (usize, usize), (m, n): (usize, usize)) -> Self {
        debug_assert!(rank < r * s);
        debug_assert!(m % r == 0 && n % s == 0);
        let rows = m / r;
        let cols = n / s;
        Tile {
            rank,
            start_row: (rank / s) * rows,
            start_col: (rank % s) * cols,
            rows,
            cols,
        }
    }

    /// All tiles of the thread grid, ordered by rank.
    pub fn partition(threads: (usize, usize), world: (usize, usize)) -> Vec<Self> {
        (0..threads.0 * threads.1)
            .map(|rank| Tile::for_rank(rank, threads, world))
            .collect()
    }

    /// Whether the cell is in the tile.
    pub fn contains(&self, (row, col): Coord) -> bool {
        (self.start_row..self.start_row + self.rows).contains(&row)
            && (self.start_col..self.start_col + self.cols).contains(&col)
    }

    /// Number of cells in the tile.
    pub fn size(&self) -> usize {
        self.rows * self.cols
    }

    /// The cells of the tile, row by row.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let Tile {
            start_row,
            start_col,
            rows,
            cols,
            ..
        } = *self;
        (start_row..start_row + rows)
            .flat_map(move |i| (start_col..start_col + cols).map(move |j| (i, j)))
    }
}
