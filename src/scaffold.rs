// src/scaffold.rs
//
// Project-scaffold orchestrator. A fixed sequence: validate the target,
// run the Vite generator, install dependencies, emit the template tree,
// then normalize what the generator produced. There is no rollback; a
// failed run leaves the partial directory in place for inspection.

use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::config::ProjectSpec;
use crate::detect;
use crate::error::ScaffoldError;
use crate::manifest;
use crate::templates::{self, PROJECT_FOLDERS};
use crate::utils;
use crate::validate;

/// Outcome of the optional React version pin. The pin is best-effort: a
/// failed pinned install falls back to latest instead of aborting the run.
#[derive(Debug, PartialEq, Eq)]
pub enum ReactInstall {
  Latest,
  Pinned(String),
  FellBackToLatest,
}

impl ReactInstall {
  fn pinned_version(&self) -> Option<&str> {
    match self {
      ReactInstall::Pinned(v) => Some(v),
      _ => None,
    }
  }
}

pub fn run_create(spec: &ProjectSpec, cwd: &Path) -> Result<(), ScaffoldError> {
  if !validate::is_valid_project_name(&spec.name) {
    return Err(ScaffoldError::InvalidProjectName {
      raw: spec.name.clone(),
    });
  }
  let name = spec.name.trim();
  let project_path = cwd.join(name);
  check_target_dir(&project_path, name)?;

  let pm = spec.package_manager;
  let language = spec.language;

  // 1) Vite generator
  println!("\nCreating Vite project ({})...", language.vite_template());
  utils::run_shell(
    &format!(
      "{} vite@latest \"{}\" -- --template {}",
      pm.create_runner(),
      utils::escape_quotes(name),
      language.vite_template()
    ),
    cwd,
  )?;

  // 2) Base dependencies
  println!("\nInstalling dependencies...");
  utils::run_shell(pm.install_command(), &project_path)?;

  // 3) Optional React version pin
  let react_install = install_react(spec, &project_path)?;
  let modern_react = react_install
    .pinned_version()
    .map_or(true, |v| detect::extract_major(v).unwrap_or(18) >= 18);

  // 4) Router
  println!("\nAdding React Router...");
  utils::install_packages(pm, &["react-router-dom"], false, &project_path)?;

  // 5) Lint tooling
  println!("\nAdding ESLint...");
  let mut eslint_packages = vec!["eslint", "eslint-plugin-react", "eslint-plugin-react-hooks"];
  if language.is_typescript() {
    eslint_packages.extend(["@typescript-eslint/parser", "@typescript-eslint/eslint-plugin"]);
  }
  utils::install_packages(pm, &eslint_packages, true, &project_path)?;

  // 6) Folder skeleton
  println!("\nCreating folder structure...");
  for folder in PROJECT_FOLDERS {
    fs::create_dir_all(project_path.join(folder))?;
  }

  // 7) Template tree (app shell, router, feature example, hooks, configs,
  //    entry normalization)
  println!("\nScaffolding app shell, router and example feature...");
  let actions = templates::scaffold_actions(name, language, modern_react);
  utils::apply_file_actions(&project_path, &actions)?;
  utils::append_file(
    &project_path.join("README.md"),
    &templates::readme_section(language, modern_react),
  )?;
  utils::ensure_gitignore(&project_path)?;

  // 8) Drop the generator's sample assets
  remove_vite_samples(&project_path);

  // 9) Lint scripts (best effort; user scripts are never overwritten)
  let manifest_path = project_path.join("package.json");
  for (script, command) in [("lint", "eslint ."), ("lint:fix", "eslint . --fix")] {
    if let Err(e) = manifest::record_script(&manifest_path, script, command) {
      warn!("Could not record '{}' script: {}", script, e);
    }
  }

  println!("\nDone!");
  println!(
    "\nNext steps:\n  cd \"{}\"\n  {}\n",
    name,
    pm.dev_invocation()
  );
  Ok(())
}

/// Refuses to scaffold over a non-empty directory or a same-named file. The
/// check runs before the external generator is invoked.
fn check_target_dir(project_path: &Path, name: &str) -> Result<(), ScaffoldError> {
  if !project_path.exists() {
    return Ok(());
  }
  if project_path.is_dir() {
    if fs::read_dir(project_path)?.next().is_some() {
      return Err(ScaffoldError::Precondition(format!(
        "Target directory \"{}\" already exists and is not empty. Choose a new name or start with an empty folder.",
        name
      )));
    }
    Ok(())
  } else {
    Err(ScaffoldError::Precondition(format!(
      "A file named \"{}\" already exists in this location.",
      name
    )))
  }
}

fn install_react(spec: &ProjectSpec, project_path: &Path) -> Result<ReactInstall, ScaffoldError> {
  let Some(version) = &spec.react_version else {
    return Ok(ReactInstall::Latest);
  };
  println!("\nInstalling React {}...", version);
  let pinned = [
    format!("react@{}", version),
    format!("react-dom@{}", version),
  ];
  let pinned_refs: Vec<&str> = pinned.iter().map(String::as_str).collect();
  match utils::install_packages(spec.package_manager, &pinned_refs, false, project_path) {
    Ok(()) => Ok(ReactInstall::Pinned(version.clone())),
    Err(e) => {
      warn!("Pinned React install failed: {}", e);
      println!(
        "\nProvided --react-version \"{}\" is not valid or failed to install. Falling back to latest React.",
        version
      );
      utils::install_packages(spec.package_manager, &["react", "react-dom"], false, project_path)?;
      Ok(ReactInstall::FellBackToLatest)
    }
  }
}

/// Deletes the Vite sample artifacts the template tree replaces, tolerating
/// their absence, and prunes the assets dir when that leaves it empty.
fn remove_vite_samples(project_path: &Path) {
  let samples = [
    project_path.join("src/App.css"),
    project_path.join("src/assets/react.svg"),
    project_path.join("public/vite.svg"),
  ];
  for path in &samples {
    if let Err(e) = utils::remove_if_exists(path) {
      warn!("Could not remove sample {}: {}", path.display(), e);
    }
  }
  let assets = project_path.join("src/assets");
  if let Ok(mut entries) = fs::read_dir(&assets) {
    if entries.next().is_none() {
      if let Err(e) = fs::remove_dir(&assets) {
        info!("Leaving {} in place: {}", assets.display(), e);
      }
    }
  }
}
