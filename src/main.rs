mod app;
mod cli;
mod command;
mod config;
mod consts;
mod game;
mod score;
mod surface;
mod util;
use crate::app::App;
use crate::cli::{Arguments, Invocation};
use crate::config::{Config, ConfigError};
use anyhow::Context;
use log::{info, warn, LevelFilter};
use simplelog::WriteLogger;
use std::io::{self, ErrorKind};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let invocation = match Invocation::from_parser(lexopt::Parser::from_env()) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("gridsnake: {e}\n{}", cli::USAGE);
            return ExitCode::from(2);
        }
    };
    match invocation {
        Invocation::Help => {
            print!("{}", cli::HELP);
            ExitCode::SUCCESS
        }
        Invocation::Version => {
            println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Invocation::Run(args) => match run(&args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("gridsnake: {e:?}");
                ExitCode::from(2)
            }
        },
    }
}

fn run(args: &Arguments) -> anyhow::Result<()> {
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }
    let config = load_config(args.config.as_deref())?;
    let terminal = ratatui::init();
    let r = App::new(config.game, rand::rng()).run(terminal);
    ratatui::restore();
    r.context("terminal I/O failed")
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = fs_err::File::create(path).context("failed to open log file")?;
    WriteLogger::init(LevelFilter::Debug, simplelog::Config::default(), file)
        .context("failed to initialize logger")?;
    info!("Starting gridsnake {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}

/// Load the configuration file given on the command line, or else the default
/// configuration file if it exists
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(p) = path {
        info!("Loading configuration from {}", p.display());
        return Config::load(p, false)
            .with_context(|| format!("failed to load configuration from {}", p.display()));
    }
    match Config::default_path() {
        Ok(p) => Config::load(&p, true)
            .with_context(|| format!("failed to load configuration from {}", p.display())),
        Err(ConfigError::NoPath) => {
            warn!("Could not determine configuration directory; using defaults");
            Ok(Config::default())
        }
        Err(e) => Err(e.into()),
    }
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe)
}
