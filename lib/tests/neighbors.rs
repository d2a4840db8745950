use rand::{rngs::StdRng, SeedableRng};
use std::error::Error;
use tilelife_lib::{Cells, Grid, State};

const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

fn brute_force(grid: &Grid, (i, j): (usize, usize)) -> u8 {
    let rows = grid.rows() as isize;
    let cols = grid.cols() as isize;
    OFFSETS
        .iter()
        .map(|&(di, dj)| {
            let row = (i as isize + di).rem_euclid(rows) as usize;
            let col = (j as isize + dj).rem_euclid(cols) as usize;
            grid.state((row, col)) as u8
        })
        .sum()
}

#[test]
fn empty_and_full() {
    let empty = Grid::new(4, 5);
    let full = Grid::with_alive(4, 5, (0..4).flat_map(|i| (0..5).map(move |j| (i, j))));
    for i in 0..4 {
        for j in 0..5 {
            assert_eq!(empty.count_neighbors((i, j)), 0);
            assert_eq!(full.count_neighbors((i, j)), 8);
        }
    }
}

#[test]
fn excludes_itself() {
    let grid = Grid::with_alive(5, 5, vec![(1, 1)]);
    assert_eq!(grid.count_neighbors((1, 1)), 0);
    for (i, j) in [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)] {
        assert_eq!(grid.count_neighbors((i, j)), 1);
    }
    assert_eq!(grid.count_neighbors((3, 3)), 0);
}

#[test]
fn corners_wrap_around() {
    let grid = Grid::with_alive(5, 7, vec![(4, 6)]);
    assert_eq!(grid.count_neighbors((0, 0)), 1);
    assert_eq!(grid.count_neighbors((0, 6)), 1);
    assert_eq!(grid.count_neighbors((4, 0)), 1);
    assert_eq!(grid.count_neighbors((3, 5)), 1);
    assert_eq!(grid.count_neighbors((2, 3)), 0);
    assert_eq!(grid.state((4, 6)), State::Alive);
}

#[test]
fn random_grids() -> Result<(), Box<dyn Error>> {
    let mut rng = StdRng::seed_from_u64(42);
    for rows in 3..9 {
        for cols in 3..9 {
            let grid = Grid::random(rows, cols, 0.5, &mut rng)?;
            for i in 0..rows {
                for j in 0..cols {
                    let count = grid.count_neighbors((i, j));
                    assert!(count <= 8);
                    assert_eq!(count, brute_force(&grid, (i, j)), "at {:?}", (i, j));
                }
            }
        }
    }
    Ok(())
}
