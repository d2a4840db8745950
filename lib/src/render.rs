//! Showing generations.

use crate::{buffer::GridView, grid::Grid, traits::Cells};
use log::error;
use std::{
    fmt::Display,
    io::{self, Write},
};

/// Receives every generation of a run.
///
/// Generation 0 is rendered by [`World::run`](crate::World::run) before
/// any worker starts. Every later generation with a living cell is
/// rendered by the last worker to arrive at the barrier, while all other
/// workers are waiting, so the grid cannot change during the call.
/// A generation where every cell is dead is not rendered.
pub trait Render {
    /// Renders generation `generation`.
    fn render(&mut self, generation: u64, grid: &GridView<'_>);
}

/// Renders nothing.
impl Render for () {
    fn render(&mut self, _generation: u64, _grid: &GridView<'_>) {}
}

/// Records a snapshot of every generation.
impl Render for Vec<Grid> {
    fn render(&mut self, _generation: u64, grid: &GridView<'_>) {
        self.push(grid.to_grid());
    }
}

/// Writes generations as text.
///
/// ```plaintext
/// Generation 1:
///
///  X
///  X
///  X
/// -------------
/// ```
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: Write> TextRenderer<W> {
    /// Creates a renderer writing to `writer`.
    pub fn new(writer: W) -> Self {
        TextRenderer {
            writer,
            error: None,
        }
    }

    fn write_generation<G: Display + ?Sized>(
        &mut self,
        generation: u64,
        grid: &G,
    ) -> io::Result<()> {
        writeln!(self.writer, "Generation {}:\n", generation)?;
        write!(self.writer, "{}", grid)?;
        writeln!(self.writer, "-------------")?;
        self.writer.flush()
    }

    /// Returns the writer, or the first error that stopped the output.
    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.writer),
        }
    }

    /// Writes a snapshot taken earlier, in the same layout as
    /// [`render`](Render::render).
    pub fn render_grid(&mut self, generation: u64, grid: &Grid) {
        self.write_or_keep_error(generation, grid);
    }

    fn write_or_keep_error<G: Display + ?Sized>(&mut self, generation: u64, grid: &G) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.write_generation(generation, grid) {
            error!("Unable to write generation {}: {}", generation, e);
            self.error = Some(e);
        }
    }
}

impl<W: Write> Render for TextRenderer<W> {
    fn render(&mut self, generation: u64, grid: &GridView<'_>) {
        self.write_or_keep_error(generation, grid);
    }
}
