// src/cli.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fse-theme-gen", // Command name users type
    author,
    version,
    about = "Generates WordPress Full Site Editing theme scaffolds.",
    long_about = None
)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Increase verbosity level (e.g., -v, -vv)
  #[arg(short, long, action = clap::ArgAction::Count, global = true)]
  pub verbose: u8,

  /// Directory that holds the themes (defaults to ./wp-content/themes or ./themes)
  #[arg(long, global = true)]
  #[clap(env = "FSE_THEMES_DIR")]
  pub themes_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Generate a new Full Site Editing theme
  Generate(GenerateArgs),
  /// List themes found in the themes directory
  List,
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
  /// The name of the theme (e.g., "My Theme")
  pub theme_name: String,

  /// Whether to support Sass. Only the literal value `true` enables it.
  #[arg(long, value_name = "SASS")]
  pub sass: Option<String>,
}

impl GenerateArgs {
  pub fn support_sass(&self) -> bool {
    crate::config::parse_sass_flag(self.sass.as_deref())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
  }

  #[test]
  fn generate_requires_theme_name() {
    assert!(Cli::try_parse_from(["fse-theme-gen", "generate"]).is_err());
  }

  #[test]
  fn sass_accepts_equals_and_space_forms() {
    let cli = parse(&["fse-theme-gen", "generate", "demo", "--sass=true"]);
    let Commands::Generate(args) = cli.command else {
      panic!("expected generate");
    };
    assert_eq!(args.theme_name, "demo");
    assert!(args.support_sass());

    let cli = parse(&["fse-theme-gen", "generate", "demo", "--sass", "TRUE"]);
    let Commands::Generate(args) = cli.command else {
      panic!("expected generate");
    };
    assert!(!args.support_sass());
  }

  #[test]
  fn sass_defaults_to_false() {
    let cli = parse(&["fse-theme-gen", "generate", "My Theme"]);
    let Commands::Generate(args) = cli.command else {
      panic!("expected generate");
    };
    assert_eq!(args.theme_name, "My Theme");
    assert!(!args.support_sass());
  }

  #[test]
  fn global_flags_after_subcommand() {
    let cli = parse(&["fse-theme-gen", "list", "--themes-dir", "/tmp/themes", "-vv"]);
    assert!(matches!(cli.command, Commands::List));
    assert_eq!(cli.themes_dir, Some(PathBuf::from("/tmp/themes")));
    assert_eq!(cli.verbose, 2);
  }
}
