// src/cli.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "react-scaffold",
    author,
    version,
    about = "Creates React projects with an opinionated scaffold (Vite + Router + ESLint) and patches them with optional integrations.",
    long_about = None
)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Increase verbosity level (e.g., -v, -vv)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Scaffold a new React project
  Create(CreateArgs),
  /// Add feature modules to an existing project
  Feature(FeatureArgs),
  /// Apply optional library integrations to an existing project
  Add(AddArgs),
}

#[derive(Parser, Debug)]
pub struct CreateArgs {
  /// Project directory name
  pub project_name: Option<String>,

  /// Project directory name (alias of the positional argument)
  #[arg(short, long)]
  pub name: Option<String>,

  /// TypeScript or JavaScript (ts|js)
  #[arg(short, long)]
  pub language: Option<String>,

  /// React version to install, e.g. 18, 18.2.0. Omitted means latest.
  #[arg(long = "react-version")]
  pub react_version: Option<String>,

  /// Package manager: npm | pnpm | yarn
  #[arg(long)]
  #[clap(env = "REACT_SCAFFOLD_PM")]
  pub pm: Option<String>,

  /// Accept defaults and skip prompts
  #[arg(short = 'y', long)]
  pub yes: bool,
}

#[derive(Parser, Debug)]
pub struct FeatureArgs {
  /// Feature module names to create (e.g. billing search)
  #[arg(required = true)]
  pub names: Vec<String>,

  /// Create even if the module directory already exists
  #[arg(short, long)]
  pub force: bool,

  /// Report what would be created without touching the filesystem
  #[arg(long)]
  pub dry_run: bool,
}

#[derive(Parser, Debug)]
pub struct AddArgs {
  /// Integrations to apply: tailwind | react-query | zustand | axios
  #[arg(required = true)]
  pub integrations: Vec<String>,

  /// Project directory (defaults to the current directory)
  #[arg(long, default_value = ".")]
  pub dir: PathBuf,
}
