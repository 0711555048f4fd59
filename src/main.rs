// src/main.rs
mod cli;
mod config;
mod detect;
mod error;
mod feature;
mod integrations;
mod manifest;
mod patch;
mod prompts;
mod scaffold;
mod templates;
mod utils;
mod validate;

use std::env;
use std::process;

use clap::Parser;
use cli::{Cli, Commands, CreateArgs};
use config::{Language, ProjectSpec};
use error::ScaffoldError;
use log::LevelFilter;

fn main() {
  let cli = Cli::parse();

  // Setup logging based on verbosity
  let log_level = match cli.verbose {
    0 => LevelFilter::Info,
    1 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  };
  env_logger::Builder::new().filter_level(log_level).init();

  log::debug!("CLI args: {:?}", cli);

  if let Err(e) = run(cli) {
    eprintln!("\nError: {}", e);
    process::exit(1);
  }
}

fn run(cli: Cli) -> Result<(), ScaffoldError> {
  let cwd = env::current_dir()?;
  match cli.command {
    Commands::Create(args) => {
      let spec = resolve_project_spec(args)?;
      scaffold::run_create(&spec, &cwd)
    }
    Commands::Feature(args) => feature::run_features(&args.names, args.force, args.dry_run, &cwd),
    Commands::Add(args) => {
      let root = if args.dir.is_absolute() {
        args.dir.clone()
      } else {
        cwd.join(&args.dir)
      };
      integrations::run_add(&args.integrations, &root)
    }
  }
}

/// Builds the immutable per-run spec from flags, prompts and environment
/// signals. Prompting only happens when a required value is missing and the
/// run was not marked non-interactive.
fn resolve_project_spec(args: CreateArgs) -> Result<ProjectSpec, ScaffoldError> {
  let name = args.name.or(args.project_name);
  let language = args.language.as_deref().map(Language::from_flag);

  let (name, language) = if !args.yes && (name.is_none() || language.is_none()) {
    let answers = prompts::ask_project_options(name.as_deref(), language)?;
    (answers.name, answers.language)
  } else {
    (
      name.unwrap_or_else(|| "my-app".to_string()),
      language.unwrap_or(Language::TypeScript),
    )
  };

  let package_manager = args
    .pm
    .as_deref()
    .and_then(config::PackageManager::from_flag)
    .unwrap_or_else(|| {
      detect::detect_package_manager(env::var("npm_config_user_agent").ok().as_deref())
    });

  Ok(ProjectSpec {
    name: name.trim().to_string(),
    language,
    package_manager,
    react_version: args.react_version,
  })
}
