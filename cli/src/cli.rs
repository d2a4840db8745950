//! Running the world from the command line.

use crate::args::{Args, Input, Settings};
use clap::error::{Error, ErrorKind};
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use std::{
    fmt::Display,
    io::{self, BufRead, BufWriter, IsTerminal, Write},
};
use tilelife_lib::{format, Cells, Config, Grid, GridView, Render, Status, TextRenderer, World};

fn error<E: Display>(kind: ErrorKind, e: E) -> Error {
    Error::raw(kind, format!("{}\n", e))
}

/// Shows a prompt, but only to a human.
fn prompt(text: &str) {
    if io::stdin().is_terminal() {
        eprintln!("{}", text);
    }
}

/// Reads generation 0, one line per row.
fn read_grid<B: BufRead>(input: B, config: &Config) -> Result<Grid, Error> {
    prompt("Enter generation 0");
    let lines = input
        .lines()
        .take(config.rows)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| error(ErrorKind::Io, e))?;
    format::read_plain(&lines.join("\n"), config.rows, config.cols)
        .map_err(|e| error(ErrorKind::InvalidValue, e))
}

/// Generates generation 0 randomly.
///
/// The probability is read from `input` when the settings do not give one.
fn generate_grid<B: BufRead>(mut input: B, settings: &Settings) -> Result<Grid, Error> {
    let probability = match settings.probability {
        Some(probability) => probability,
        None => {
            prompt("What's the probability that a cell is alive?");
            let mut line = String::new();
            input
                .read_line(&mut line)
                .map_err(|e| error(ErrorKind::Io, e))?;
            line.trim()
                .parse()
                .map_err(|e| error(ErrorKind::InvalidValue, format!("invalid probability: {}", e)))?
        }
    };
    let mut rng = StdRng::seed_from_u64(settings.seed);
    let config = &settings.config;
    Grid::random(config.rows, config.cols, probability, &mut rng)
        .map_err(|e| error(ErrorKind::InvalidValue, e))
}

fn initial_grid<B: BufRead>(input: B, settings: &Settings) -> Result<Grid, Error> {
    match settings.input {
        Input::Read => read_grid(input, &settings.config),
        Input::Generate => generate_grid(input, settings),
    }
}

/// Keeps the last rendered generation.
#[derive(Debug, Default)]
struct LastGeneration(Option<(u64, Grid)>);

impl Render for LastGeneration {
    fn render(&mut self, generation: u64, grid: &GridView<'_>) {
        self.0 = Some((generation, grid.to_grid()));
    }
}

/// Runs the world and writes the generations to `writer`.
///
/// In quiet mode only the last rendered generation is written.
/// When the cells die out before the last generation, says so.
fn simulate<W: Write + Send>(world: &mut World, quiet: bool, writer: W) -> Result<W, Error> {
    let mut renderer = TextRenderer::new(writer);
    let outcome = if quiet {
        let mut last = LastGeneration::default();
        let outcome = world.run(&mut last).map_err(|e| error(ErrorKind::Io, e))?;
        if let Some((generation, grid)) = last.0 {
            renderer.render_grid(generation, &grid);
        }
        outcome
    } else {
        world
            .run(&mut renderer)
            .map_err(|e| error(ErrorKind::Io, e))?
    };
    let mut writer = renderer.finish().map_err(|e| error(ErrorKind::Io, e))?;

    info!(
        "{:?} at generation {}, {} living cells",
        outcome.status, outcome.generation, outcome.population
    );
    if outcome.status == Status::Extinct && outcome.generation < world.config().max_gen {
        writeln!(writer, "There are no more live cells").map_err(|e| error(ErrorKind::Io, e))?;
    }
    Ok(writer)
}

pub(crate) fn run(args: Args) -> Result<(), Error> {
    let settings = args.settings;
    let grid = initial_grid(io::stdin().lock(), &settings)?;
    let mut world = settings
        .config
        .world(&grid)
        .map_err(|e| error(ErrorKind::ValueValidation, e))?;

    let mut stdout = simulate(&mut world, settings.quiet, BufWriter::new(io::stdout()))?;
    stdout.flush().map_err(|e| error(ErrorKind::Io, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn settings(config: Config, input: Input, probability: Option<f64>) -> Settings {
        Settings {
            config,
            input,
            probability,
            ..Settings::default()
        }
    }

    fn output(world: &mut World, quiet: bool) -> String {
        String::from_utf8(simulate(world, quiet, Vec::new()).unwrap()).unwrap()
    }

    #[test]
    fn read() {
        let settings = settings(Config::new(1, 1, 3, 3), Input::Read, None);
        let grid = initial_grid(Cursor::new("XXX\n\n X\nignored\n"), &settings).unwrap();
        assert_eq!(
            grid,
            Grid::with_alive(3, 3, vec![(0, 0), (0, 1), (0, 2), (2, 1)])
        );

        let missing = initial_grid(Cursor::new("XXX\n"), &settings);
        assert_eq!(missing.err().map(|e| e.kind()), Some(ErrorKind::InvalidValue));
    }

    #[test]
    fn generate() {
        let config = Config::new(1, 1, 4, 4);
        let full = settings(config.clone(), Input::Generate, Some(1.0));
        let grid = initial_grid(Cursor::new(""), &full).unwrap();
        assert_eq!(grid.population(), 16);

        let asked = settings(config.clone(), Input::Generate, None);
        let grid = initial_grid(Cursor::new(" 0 \n"), &asked).unwrap();
        assert_eq!(grid.population(), 0);

        for answer in ["abc\n", "1.5\n"] {
            let result = initial_grid(Cursor::new(answer), &asked);
            assert_eq!(result.err().map(|e| e.kind()), Some(ErrorKind::InvalidValue));
        }
    }

    #[test]
    fn extinction_message() {
        let grid = Grid::with_alive(4, 4, vec![(1, 1)]);
        let mut world = Config::new(2, 2, 4, 4).set_max_gen(10).world(&grid).unwrap();
        let text = output(&mut world, false);
        assert!(text.contains("Generation 0:"));
        assert!(!text.contains("Generation 1:"));
        assert!(text.ends_with("-------------\nThere are no more live cells\n"));

        // Dying out in the last generation is not reported.
        let mut world = Config::new(2, 2, 4, 4).set_max_gen(1).world(&grid).unwrap();
        let text = output(&mut world, false);
        assert!(!text.contains("There are no more live cells"));
    }

    #[test]
    fn quiet() {
        let blinker = Grid::with_alive(5, 5, vec![(2, 1), (2, 2), (2, 3)]);
        let mut world = Config::new(1, 1, 5, 5).set_max_gen(3).world(&blinker).unwrap();
        assert_eq!(
            output(&mut world, true),
            "Generation 3:\n\
             \n     \n  X  \n  X  \n  X  \n     \n\
             -------------\n"
        );

        let lonely = Grid::with_alive(4, 4, vec![(1, 1)]);
        let mut world = Config::new(1, 1, 4, 4).set_max_gen(10).world(&lonely).unwrap();
        let text = output(&mut world, true);
        assert!(text.starts_with("Generation 0:\n"));
        assert!(text.ends_with("There are no more live cells\n"));
    }
}
