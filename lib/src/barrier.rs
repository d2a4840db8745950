//! The generation barrier.
//!
//! All workers meet here once per generation. The last one to arrive
//! finishes the generation for everybody: it swaps the buffers, advances
//! the generation counter, decides whether the run is over, renders the
//! new generation unless every cell is dead, and then wakes the others.
//!
//! Every piece of state shared between workers, apart from the grid
//! buffers themselves, lives behind the barrier mutex.

use crate::{buffer::BufferPair, render::Render, world::Status};
use log::trace;
use parking_lot::{Condvar, Mutex};
use std::sync::atomic::{AtomicBool, Ordering};

/// What a worker should do after leaving the barrier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    /// Compute another generation, reading from buffer `current`.
    Continue { current: usize },
    /// The run is over.
    Stop,
}

/// State guarded by the barrier mutex.
struct BarrierState<'a, R> {
    /// Number of workers that have arrived in this cycle.
    arrived: usize,
    /// Living cells in the generation being computed, summed over
    /// the workers that have arrived so far.
    live: usize,
    /// Living cells in the last finished generation.
    population: usize,
    /// The current generation.
    generation: u64,
    /// Index of the current buffer.
    current: usize,
    /// Set once, when the run is over.
    status: Option<Status>,
    /// Incremented each time the workers are released.
    cycle: u64,
    /// Set when a worker died and will never arrive again.
    broken: bool,
    render: &'a mut R,
}

/// What is left of the barrier after a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Finished {
    pub(crate) generation: u64,
    pub(crate) current: usize,
    pub(crate) population: usize,
    pub(crate) status: Option<Status>,
}

/// A counting barrier for a fixed number of workers.
pub(crate) struct GenerationBarrier<'a, R> {
    /// Number of workers.
    threads: usize,
    /// The last generation to compute.
    max_gen: u64,
    buffers: &'a BufferPair,
    cancel: Option<&'a AtomicBool>,
    state: Mutex<BarrierState<'a, R>>,
    released: Condvar,
}

impl<'a, R: Render> GenerationBarrier<'a, R> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        threads: usize,
        max_gen: u64,
        buffers: &'a BufferPair,
        generation: u64,
        current: usize,
        population: usize,
        cancel: Option<&'a AtomicBool>,
        render: &'a mut R,
    ) -> Self {
        GenerationBarrier {
            threads,
            max_gen,
            buffers,
            cancel,
            state: Mutex::new(BarrierState {
                arrived: 0,
                live: 0,
                population,
                generation,
                current,
                status: None,
                cycle: 0,
                broken: false,
                render,
            }),
            released: Condvar::new(),
        }
    }

    /// Arrives at the barrier with the number of living cells the worker
    /// has just written, and blocks until every worker has arrived.
    pub(crate) fn wait(&self, live: usize) -> Step {
        let mut state = self.state.lock();
        if state.broken {
            return Step::Stop;
        }
        state.live += live;
        state.arrived += 1;
        if state.arrived == self.threads {
            self.advance(&mut state);
            self.released.notify_all();
        } else {
            let cycle = state.cycle;
            while state.cycle == cycle && !state.broken {
                self.released.wait(&mut state);
            }
            if state.broken {
                return Step::Stop;
            }
        }
        match state.status {
            Some(_) => Step::Stop,
            None => Step::Continue {
                current: state.current,
            },
        }
    }

    /// Finishes a generation. Only called by the last worker to arrive.
    fn advance(&self, state: &mut BarrierState<'a, R>) {
        state.current ^= 1;
        state.generation += 1;
        state.population = state.live;

        state.status = if state.population == 0 {
            Some(Status::Extinct)
        } else if state.generation >= self.max_gen {
            Some(Status::MaxGenReached)
        } else if self.cancel.map_or(false, |c| c.load(Ordering::Relaxed)) {
            Some(Status::Cancelled)
        } else {
            None
        };
        trace!(
            "Generation {}: {} living cells",
            state.generation,
            state.population
        );

        if state.status != Some(Status::Extinct) {
            let grid = self.buffers.view(state.current);
            state.render.render(state.generation, &grid);
        }

        state.arrived = 0;
        state.live = 0;
        state.cycle += 1;
    }

    /// Marks the barrier as broken and wakes every waiting worker.
    ///
    /// Called when a worker panics, so that the others stop
    /// instead of waiting for it forever.
    pub(crate) fn abandon(&self) {
        let mut state = self.state.lock();
        state.broken = true;
        self.released.notify_all();
    }

    pub(crate) fn finish(self) -> Finished {
        let state = self.state.into_inner();
        Finished {
            generation: state.generation,
            current: state.current,
            population: state.population,
            status: state.status,
        }
    }
}
