//! The world, and running it.

use crate::{
    barrier::GenerationBarrier,
    buffer::{BufferPair, GridView},
    config::Config,
    error::Error,
    grid::Grid,
    render::Render,
    rules::Rule,
    tile::Tile,
    traits::Cells,
    worker::Worker,
};
use log::{debug, info};
use std::{
    panic,
    sync::atomic::{AtomicBool, Ordering},
    thread,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// All cells are dead.
    Extinct,
    /// The last generation in the configuration has been computed.
    MaxGenReached,
    /// The run was cancelled from outside.
    Cancelled,
}

/// The result of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Outcome {
    /// Why the run stopped.
    pub status: Status,
    /// The last generation computed.
    pub generation: u64,
    /// Number of living cells in that generation.
    pub population: usize,
}

/// The world.
///
/// A toroidal grid split into tiles, one per worker thread.
/// Create it with [`Config::world`].
#[derive(Debug)]
pub struct World {
    /// World configuration.
    config: Config,

    /// The rule of the cellular automaton.
    rule: Rule,

    /// One tile per worker, ordered by rank.
    tiles: Vec<Tile>,

    /// The current and the next generation.
    buffers: BufferPair,

    /// Index of the buffer holding the current generation.
    current: usize,

    /// The current generation.
    generation: u64,

    /// Number of living cells in the current generation.
    population: usize,

    /// Why the last run stopped, if there was one.
    status: Option<Status>,
}

impl World {
    /// Creates a new world from a validated configuration.
    pub(crate) fn new(config: &Config, rule: Rule, grid: &Grid) -> Self {
        let tiles = Tile::partition(
            (config.thread_rows, config.thread_cols),
            (config.rows, config.cols),
        );
        debug!(
            "New {}×{} world, rule {}, {} tiles of {}×{}",
            config.rows,
            config.cols,
            rule,
            tiles.len(),
            config.rows / config.thread_rows,
            config.cols / config.thread_cols
        );
        World {
            config: config.clone(),
            rule,
            tiles,
            buffers: BufferPair::new(grid),
            current: 0,
            generation: 0,
            population: grid.population(),
            status: None,
        }
    }

    /// World configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The rule of the cellular automaton.
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// The tiles, one per worker, ordered by rank.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The current generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of living cells in the current generation.
    pub fn population(&self) -> usize {
        self.population
    }

    /// Why the last run stopped, or `None` if the world has never run.
    pub fn status(&self) -> Option<Status> {
        self.status
    }

    /// A view of the current generation.
    pub fn view(&self) -> GridView<'_> {
        self.buffers.view(self.current)
    }

    /// A copy of the current generation.
    pub fn grid(&self) -> Grid {
        self.view().to_grid()
    }

    /// Runs the world until all cells are dead, or until the generation
    /// [`max_gen`](Config#structfield.max_gen) is computed.
    ///
    /// The current generation is rendered first, then every computed
    /// generation that still has a living cell. A generation where all
    /// cells are dead ends the run without being rendered.
    ///
    /// Once a run has ended with [`Status::Extinct`], running the world
    /// again renders nothing, computes nothing, and returns the same outcome.
    pub fn run<R: Render + Send>(&mut self, render: &mut R) -> Result<Outcome, Error> {
        self.run_inner(render, None)
    }

    /// Like [`run`](Self::run), but also stops when `cancel` becomes `true`.
    ///
    /// The flag is checked once per generation, after every worker has
    /// finished its tile, so a cancelled run still ends on a complete
    /// generation.
    pub fn run_until<R: Render + Send>(
        &mut self,
        render: &mut R,
        cancel: &AtomicBool,
    ) -> Result<Outcome, Error> {
        self.run_inner(render, Some(cancel))
    }

    fn run_inner<R: Render + Send>(
        &mut self,
        render: &mut R,
        cancel: Option<&AtomicBool>,
    ) -> Result<Outcome, Error> {
        if self.status == Some(Status::Extinct) {
            debug!("Generation {} is already extinct", self.generation);
            return Ok(self.outcome(Status::Extinct));
        }

        render.render(self.generation, &self.view());

        let early = if self.generation >= self.config.max_gen {
            Some(Status::MaxGenReached)
        } else if cancel.map_or(false, |c| c.load(Ordering::Relaxed)) {
            Some(Status::Cancelled)
        } else {
            None
        };
        if let Some(status) = early {
            self.status = Some(status);
            info!("Stopped at generation {}: {:?}", self.generation, status);
            return Ok(self.outcome(status));
        }

        debug!(
            "Starting {} workers at generation {}",
            self.tiles.len(),
            self.generation
        );
        let barrier = GenerationBarrier::new(
            self.tiles.len(),
            self.config.max_gen,
            &self.buffers,
            self.generation,
            self.current,
            self.population,
            cancel,
            render,
        );
        let current = self.current;
        let buffers = &self.buffers;
        let rule = self.rule;

        let spawned = thread::scope(|scope| {
            let mut handles = Vec::with_capacity(self.tiles.len());
            let mut spawn_error = None;
            for &tile in &self.tiles {
                let worker = Worker {
                    tile,
                    rule,
                    buffers,
                    barrier: &barrier,
                };
                let handle = thread::Builder::new()
                    .name(format!("tile-{}", tile.rank))
                    .spawn_scoped(scope, move || worker.run(current));
                match handle {
                    Ok(handle) => handles.push(handle),
                    Err(e) => {
                        barrier.abandon();
                        spawn_error = Some(Error::SpawnError(tile.rank, e.to_string()));
                        break;
                    }
                }
            }

            let mut panicked = None;
            for handle in handles {
                if let Err(payload) = handle.join() {
                    panicked.get_or_insert(payload);
                }
            }
            if let Some(payload) = panicked {
                panic::resume_unwind(payload);
            }
            spawn_error.map_or(Ok(()), Err)
        });

        let finished = barrier.finish();
        self.generation = finished.generation;
        self.current = finished.current;
        self.population = finished.population;
        spawned?;

        let status = finished.status.unwrap_or(Status::Cancelled);
        self.status = Some(status);
        info!("Stopped at generation {}: {:?}", self.generation, status);
        Ok(self.outcome(status))
    }

    fn outcome(&self, status: Status) -> Outcome {
        Outcome {
            status,
            generation: self.generation,
            population: self.population,
        }
    }
}
