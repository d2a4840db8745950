use rand::{rngs::StdRng, SeedableRng};
use std::error::Error as StdError;
use tilelife_lib::{format::read_plain, Cells, Error, Grid, State};

#[test]
fn read() -> Result<(), Box<dyn StdError>> {
    let grid = read_plain("X X\n XX\n\nX", 4, 3)?;
    assert_eq!(
        grid,
        Grid::with_alive(4, 3, vec![(0, 0), (0, 2), (1, 1), (1, 2), (3, 0)])
    );
    Ok(())
}

#[test]
fn only_x_is_alive() -> Result<(), Box<dyn StdError>> {
    let grid = read_plain("xXo\n.*X\n###", 3, 3)?;
    assert_eq!(grid, Grid::with_alive(3, 3, vec![(0, 1), (1, 2)]));
    Ok(())
}

#[test]
fn extra_lines_are_ignored() -> Result<(), Box<dyn StdError>> {
    let grid = read_plain("XXX\n\n\nXXXXXXXX\n", 3, 3)?;
    assert_eq!(grid.population(), 3);
    Ok(())
}

#[test]
fn missing_row() {
    assert_eq!(read_plain("X\nX", 3, 3), Err(Error::MissingRow(2)));
}

#[test]
fn row_too_long() {
    assert_eq!(
        read_plain("XXXX\n", 2, 3),
        Err(Error::RowTooLong {
            row: 0,
            len: 4,
            cols: 3
        })
    );
}

#[test]
fn display() -> Result<(), Box<dyn StdError>> {
    let grid = Grid::with_alive(3, 4, vec![(0, 0), (1, 2), (2, 3)]);
    assert_eq!(grid.to_string(), "X   \n  X \n   X\n");

    let mut rng = StdRng::seed_from_u64(7);
    let grid = Grid::random(7, 9, 0.4, &mut rng)?;
    assert_eq!(read_plain(&grid.to_string(), 7, 9)?, grid);
    Ok(())
}

#[test]
fn random() -> Result<(), Box<dyn StdError>> {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(Grid::random(6, 6, 0.0, &mut rng)?.population(), 0);
    assert_eq!(Grid::random(6, 6, 1.0, &mut rng)?.population(), 36);

    let first = Grid::random(20, 20, 0.3, &mut StdRng::seed_from_u64(1))?;
    let second = Grid::random(20, 20, 0.3, &mut StdRng::seed_from_u64(1))?;
    assert_eq!(first, second);
    assert!(first.population() > 0 && first.population() < 400);
    Ok(())
}

#[test]
fn invalid_probability() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(
        Grid::random(3, 3, 1.5, &mut rng),
        Err(Error::InvalidProbability(1.5))
    );
    assert!(matches!(
        Grid::random(3, 3, f64::NAN, &mut rng),
        Err(Error::InvalidProbability(p)) if p.is_nan()
    ));
}

#[test]
fn states() {
    assert_eq!(!State::Alive, State::Dead);
    assert_eq!(!State::Dead, State::Alive);
    assert_eq!(State::from(true), State::Alive);
    assert_eq!(State::default(), State::Dead);
    assert!(State::Alive.is_alive());
}
