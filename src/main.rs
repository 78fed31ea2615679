// src/main.rs
mod cli;
mod config;
mod content;
mod error;
mod fs_ops;
mod generate;
mod json;
mod list;
mod manifest;
mod slug;

use clap::Parser;
use cli::{Cli, Commands};
use error::{FsAction, ThemeError};
use log::LevelFilter;
use std::env;

fn main() {
  if let Err(problem) = run(Cli::parse()) {
    eprintln!("Error: {problem}");
    std::process::exit(1);
  }
}

fn run(cli: Cli) -> Result<(), ThemeError> {
  // Setup logging based on verbosity
  let log_level = match cli.verbose {
    0 => LevelFilter::Info,
    1 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  };
  // A logger may already be installed when `run` is driven more than once.
  let _ = env_logger::Builder::new().filter_level(log_level).try_init();

  log::debug!("CLI args: {:?}", cli);

  let cwd = env::current_dir().map_err(|e| ThemeError::filesystem(FsAction::ResolveCwd, ".", e))?;
  let themes_path = config::resolve_themes_dir(cli.themes_dir, &cwd)?;
  log::info!("Using themes directory: {}", themes_path.display());

  match cli.command {
    Commands::Generate(args) => {
      generate::run_generate(args, &themes_path)?;
    }
    Commands::List => {
      list::run_list(&themes_path)?;
    }
  }

  Ok(())
}
