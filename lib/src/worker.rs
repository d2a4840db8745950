//! Workers, one per tile.

use crate::{
    barrier::{GenerationBarrier, Step},
    buffer::BufferPair,
    render::Render,
    rules::Rule,
    tile::Tile,
    traits::Cells,
};
use std::thread;

/// A worker computes its own tile of every generation.
pub(crate) struct Worker<'w, 'a, R> {
    pub(crate) tile: Tile,
    pub(crate) rule: Rule,
    pub(crate) buffers: &'a BufferPair,
    pub(crate) barrier: &'w GenerationBarrier<'a, R>,
}

impl<'w, 'a, R: Render> Worker<'w, 'a, R> {
    /// Keeps computing generations until the barrier says stop.
    ///
    /// `current` is the index of the buffer holding the
    /// generation the run starts from.
    pub(crate) fn run(self, mut current: usize) {
        let _guard = AbandonOnPanic(self.barrier);
        loop {
            let live = self.step(current);
            match self.barrier.wait(live) {
                Step::Continue { current: next } => current = next,
                Step::Stop => break,
            }
        }
    }

    /// Computes the tile of the next generation from buffer `current`
    /// into the other buffer, and returns the number of living cells
    /// in the result.
    fn step(&self, current: usize) -> usize {
        let grid = self.buffers.view(current);
        let next = self.buffers.tile_mut(current ^ 1, self.tile);
        let mut live = 0;
        for coord in self.tile.coords() {
            let state = self
                .rule
                .transition(grid.state(coord), grid.count_neighbors(coord));
            next.set(coord, state);
            live += state as usize;
        }
        live
    }
}

/// Breaks the barrier if the worker unwinds,
/// so that the other workers are not left waiting for it.
struct AbandonOnPanic<'w, 'a, R: Render>(&'w GenerationBarrier<'a, R>);

impl<'w, 'a, R: Render> Drop for AbandonOnPanic<'w, 'a, R> {
    fn drop(&mut self) {
        if thread::panicking() {
            self.0.abandon();
        }
    }
}
