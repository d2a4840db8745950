use std::error::Error;
use tilelife_lib::{Config, Grid, Tile};

#[test]
fn origin_and_extent() {
    let tile = Tile::for_rank(5, (2, 3), (8, 9));
    assert_eq!(
        tile,
        Tile {
            rank: 5,
            start_row: 4,
            start_col: 6,
            rows: 4,
            cols: 3,
        }
    );
    assert!(tile.contains((4, 6)));
    assert!(tile.contains((7, 8)));
    assert!(!tile.contains((3, 6)));
    assert!(!tile.contains((4, 5)));
}

#[test]
fn single_tile_is_the_world() {
    let tiles = Tile::partition((1, 1), (5, 7));
    assert_eq!(tiles.len(), 1);
    assert_eq!(tiles[0].start_row, 0);
    assert_eq!(tiles[0].start_col, 0);
    assert_eq!(tiles[0].size(), 35);
}

#[test]
fn tiles_cover_every_cell_once() {
    let shapes = [
        (1, 1, 3, 3),
        (1, 3, 3, 9),
        (3, 1, 9, 4),
        (2, 2, 6, 6),
        (2, 3, 8, 9),
        (4, 5, 12, 20),
        (6, 6, 6, 6),
        (3, 7, 15, 21),
    ];
    for &(r, s, m, n) in &shapes {
        let tiles = Tile::partition((r, s), (m, n));
        assert_eq!(tiles.len(), r * s);

        let mut seen = vec![0; m * n];
        for (rank, tile) in tiles.iter().enumerate() {
            assert_eq!(tile.rank, rank);
            assert_eq!(tile.coords().count(), tile.size());
            for (i, j) in tile.coords() {
                assert!(tile.contains((i, j)));
                seen[i * n + j] += 1;
            }
        }
        assert!(
            seen.iter().all(|&count| count == 1),
            "{}×{} threads on a {}×{} world",
            r,
            s,
            m,
            n
        );
    }
}

#[test]
fn world_has_one_tile_per_thread() -> Result<(), Box<dyn Error>> {
    let world = Config::new(2, 4, 6, 8).world(&Grid::new(6, 8))?;
    assert_eq!(world.tiles().len(), 8);
    assert_eq!(world.tiles()[7], Tile::for_rank(7, (2, 4), (6, 8)));
    Ok(())
}
