//! Parsing command-line arguments.

use clap::{
    crate_description, crate_name, crate_version,
    error::{Error, ErrorKind},
    value_parser, Arg, ArgAction, ArgMatches, Command,
};
use serde::Deserialize;
use std::{fs, path::Path, path::PathBuf};
use tilelife_lib::{Config, Rule};

/// Where generation 0 comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Input {
    /// Read from stdin.
    Read,
    /// Generated randomly.
    #[default]
    Generate,
}

/// Everything needed for a run.
///
/// Can also be loaded from a TOML, JSON or YAML file,
/// with the fields of [`Config`] at the top level.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    #[serde(flatten)]
    pub(crate) config: Config,
    pub(crate) input: Input,
    /// Probability of a living cell when generating generation 0.
    ///
    /// Asked on stdin when missing.
    pub(crate) probability: Option<f64>,
    pub(crate) seed: u64,
    /// Only shows the last generation.
    pub(crate) quiet: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            config: Config::default(),
            input: Input::default(),
            probability: None,
            seed: 1,
            quiet: false,
        }
    }
}

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) settings: Settings,
    pub(crate) verbosity: u8,
}

fn command() -> Command {
    let positional = |id: &'static str, index: usize, help: &'static str| {
        Arg::new(id)
            .help(help)
            .index(index)
            .required_unless_present("CONFIG")
            .conflicts_with("CONFIG")
    };

    Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .long_about(
            "Conway's Game of Life on a toroidal world, computed by R×S threads\n\
             \n\
             The world of M rows and N columns is split into R×S tiles, one per thread.\n\
             M must be a multiple of R, and N a multiple of S.\n\
             \n\
             Every generation from 0 to MAX is printed, living cells as `X`, dead cells \
             as spaces. The program stops early when all cells are dead.",
        )
        .arg(
            positional("R", 1, "Number of rows of threads")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            positional("S", 2, "Number of columns of threads")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            positional("M", 3, "Number of rows in the world")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            positional("N", 4, "Number of columns in the world")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            positional("MAX", 5, "Maximal number of generations")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            positional("INPUT", 6, "Where generation 0 comes from")
                .long_help(
                    "Where generation 0 comes from\n\
                     `i`: read from stdin, one line per row, `X` for living cells.\n\
                     `g`: generated randomly, see --prob and --seed.\n",
                )
                .value_parser(["i", "g"]),
        )
        .arg(
            Arg::new("PROB")
                .help("Probability that a cell is alive, for `g`")
                .long_help(
                    "Probability that a cell is alive, for `g`\n\
                     If it is not given, it is read from stdin.\n",
                )
                .short('p')
                .long("prob")
                .value_parser(value_parser!(f64)),
        )
        .arg(
            Arg::new("SEED")
                .help("Seed of the random generator, for `g` [default: 1]")
                .long("seed")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("RULE")
                .help("Rule of the cellular automaton [default: B3/S23]")
                .long_help(
                    "Rule of the cellular automaton [default: B3/S23]\n\
                     Supports Life-like rules, e.g. B36/S23.\n",
                )
                .short('r')
                .long("rule")
                .value_parser(|rule: &str| {
                    rule.parse::<Rule>()
                        .map(|_| rule.to_string())
                        .map_err(|e| e.to_string())
                }),
        )
        .arg(
            Arg::new("QUIET")
                .help("Only prints the last generation")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("CONFIG")
                .help("Reads the settings from a TOML, JSON or YAML file")
                .short('c')
                .long("config")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("VERBOSE")
                .help("Prints more logs, can be repeated")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count),
        )
}

/// Gets a value that clap has already checked to be present.
fn required<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, id: &str) -> Result<T, Error> {
    matches.get_one::<T>(id).cloned().ok_or_else(|| {
        Error::raw(
            ErrorKind::MissingRequiredArgument,
            format!("missing argument <{}>\n", id),
        )
    })
}

/// Reads the settings from a file, choosing the format by extension.
fn read_settings(path: &Path) -> Result<Settings, Error> {
    let text = fs::read_to_string(path).map_err(|e| {
        Error::raw(
            ErrorKind::Io,
            format!("unable to read {}: {}\n", path.display(), e),
        )
    })?;
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let settings: Result<Settings, String> = match extension {
        "toml" => toml::from_str(&text).map_err(|e| e.to_string()),
        "json" => serde_json::from_str(&text).map_err(|e| e.to_string()),
        "yaml" | "yml" => serde_yaml::from_str(&text).map_err(|e| e.to_string()),
        _ => Err(String::from(
            "unknown format, expected .toml, .json, .yaml or .yml",
        )),
    };
    settings.map_err(|e| {
        Error::raw(
            ErrorKind::InvalidValue,
            format!("invalid config file {}: {}\n", path.display(), e),
        )
    })
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Error> {
        Self::parse_from(std::env::args_os())
    }

    pub(crate) fn parse_from<I, T>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = command().try_get_matches_from(args)?;

        let mut settings = match matches.get_one::<PathBuf>("CONFIG") {
            Some(path) => read_settings(path)?,
            None => {
                let config = Config::new(
                    required(&matches, "R")?,
                    required(&matches, "S")?,
                    required(&matches, "M")?,
                    required(&matches, "N")?,
                )
                .set_max_gen(required(&matches, "MAX")?);
                let input = match required::<String>(&matches, "INPUT")?.as_str() {
                    "i" => Input::Read,
                    _ => Input::Generate,
                };
                Settings {
                    config,
                    input,
                    ..Settings::default()
                }
            }
        };

        if let Some(&probability) = matches.get_one::<f64>("PROB") {
            settings.probability = Some(probability);
        }
        if let Some(&seed) = matches.get_one::<u64>("SEED") {
            settings.seed = seed;
        }
        if let Some(rule) = matches.get_one::<String>("RULE") {
            settings.config.rule_string = rule.clone();
        }
        if matches.get_flag("QUIET") {
            settings.quiet = true;
        }

        settings.config.validate().map_err(|e| {
            Error::raw(ErrorKind::ValueValidation, format!("{}\n", e))
        })?;

        Ok(Args {
            settings,
            verbosity: matches.get_count("VERBOSE"),
        })
    }
}
