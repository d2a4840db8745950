//! A tiled, multi-threaded Game of Life on a torus.
//!
//! The world is split into `R × S` rectangular tiles, one per worker
//! thread. The workers compute their tiles of each generation in
//! parallel, and meet at a barrier once per generation, where the last
//! one to arrive swaps the buffers and decides whether to go on.
//!
//! ```
//! use tilelife_lib::{Config, Grid, Status};
//!
//! # fn main() -> Result<(), tilelife_lib::Error> {
//! // A blinker.
//! let grid = Grid::with_alive(6, 6, vec![(2, 1), (2, 2), (2, 3)]);
//! let mut world = Config::new(2, 3, 6, 6).set_max_gen(4).world(&grid)?;
//! let outcome = world.run(&mut ())?;
//! assert_eq!(outcome.status, Status::MaxGenReached);
//! assert_eq!(world.grid(), grid);
//! # Ok(())
//! # }
//! ```

mod barrier;
mod buffer;
mod cells;
mod config;
mod error;
pub mod format;
mod grid;
mod render;
mod rules;
mod tile;
mod traits;
mod worker;
mod world;

pub use buffer::GridView;
pub use cells::{Coord, State};
pub use config::Config;
pub use error::Error;
pub use grid::{Grid, ALIVE_CHAR, DEAD_CHAR};
pub use render::{Render, TextRenderer};
pub use rules::Rule;
pub use tile::Tile;
pub use traits::Cells;
pub use world::{Outcome, Status, World};
