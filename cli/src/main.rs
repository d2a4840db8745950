mod args;
mod cli;

use args::Args;
use log::LevelFilter;

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() {
    let args = Args::parse().unwrap_or_else(|e| e.exit());
    init_logger(args.verbosity);
    if let Err(e) = cli::run(args) {
        e.exit()
    }
}
