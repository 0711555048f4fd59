// src/feature.rs
//
// Feature-creation orchestrator: adds `<root>/src/features/<name>` modules
// with the conventional components/pages/service layout to an existing
// project.

use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::config::Language;
use crate::detect;
use crate::error::ScaffoldError;
use crate::templates::{self, FEATURE_SUBDIRS};
use crate::utils;
use crate::validate;

#[derive(Debug, PartialEq, Eq)]
pub enum FeatureStatus {
  Created,
  Skipped,
  Failed(String),
}

#[derive(Debug)]
pub struct FeatureOutcome {
  pub name: String,
  pub status: FeatureStatus,
}

/// Creates the requested feature modules. The whole batch is validated
/// before any mutation begins: one bad name aborts everything. After that,
/// a filesystem failure is fatal only to its own module; the rest of the
/// batch still runs and the per-item report shows what happened.
///
/// `dry_run` performs validation and reporting with no filesystem mutation
/// at all. `force` bypasses the module-level "already exists" skip; existing
/// files are still left untouched so user edits are never clobbered.
pub fn run_features(
  names: &[String],
  force: bool,
  dry_run: bool,
  project_root: &Path,
) -> Result<(), ScaffoldError> {
  for raw in names {
    if !validate::is_valid_feature_name(raw) {
      return Err(ScaffoldError::InvalidFeatureName { raw: raw.clone() });
    }
  }

  let src_dir = project_root.join("src");
  if !src_dir.is_dir() {
    return Err(ScaffoldError::Precondition(
      "Not a valid project: 'src' folder not found in current directory.".to_string(),
    ));
  }
  let language = detect::detect_language(project_root);
  info!("Detected {} project.", language);

  let features_dir = src_dir.join("features");
  if !dry_run {
    fs::create_dir_all(&features_dir)?;
  }

  let mut outcomes = Vec::new();
  for raw in names {
    let name = raw.trim();
    let status = match scaffold_feature(&features_dir, name, language, force, dry_run) {
      Ok(status) => status,
      Err(e) => {
        warn!("Feature '{}' failed: {}", name, e);
        FeatureStatus::Failed(e.to_string())
      }
    };
    outcomes.push(FeatureOutcome {
      name: name.to_string(),
      status,
    });
  }

  for outcome in &outcomes {
    match &outcome.status {
      FeatureStatus::Created => {
        if dry_run {
          println!("{}: would create (dry run)", outcome.name);
        } else {
          println!("{}: created", outcome.name);
        }
      }
      FeatureStatus::Skipped => println!(
        "{}: skipped (already exists, use --force to extend)",
        outcome.name
      ),
      FeatureStatus::Failed(reason) => println!("{}: failed ({})", outcome.name, reason),
    }
  }

  let failed = outcomes
    .iter()
    .filter(|o| matches!(o.status, FeatureStatus::Failed(_)))
    .count();
  if failed > 0 {
    return Err(ScaffoldError::FeaturesFailed {
      failed,
      total: outcomes.len(),
    });
  }
  Ok(())
}

fn scaffold_feature(
  features_dir: &Path,
  name: &str,
  language: Language,
  force: bool,
  dry_run: bool,
) -> Result<FeatureStatus, ScaffoldError> {
  let base = features_dir.join(name);
  if base.exists() && !force {
    return Ok(FeatureStatus::Skipped);
  }

  if !dry_run {
    for subdir in FEATURE_SUBDIRS {
      fs::create_dir_all(base.join(subdir))?;
    }
    for stub in templates::feature_stub_actions(name, language) {
      // Stubs are write-if-absent in both modes; --force never clobbers
      // files the user may have edited.
      utils::write_if_absent(&base.join(&stub.path), &stub.content)?;
    }
  }
  Ok(FeatureStatus::Created)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn project_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    dir
  }

  #[test]
  fn creates_module_layout_and_stubs() {
    let dir = project_dir();
    fs::write(dir.path().join("tsconfig.json"), "{}").unwrap();
    run_features(&["billing".to_string()], false, false, dir.path()).unwrap();

    let base = dir.path().join("src/features/billing");
    for subdir in FEATURE_SUBDIRS {
      assert!(base.join(subdir).is_dir());
    }
    assert_eq!(
      fs::read_to_string(base.join("type.ts")).unwrap(),
      "// types for billing"
    );
    assert!(base.join("validation.ts").exists());
  }

  #[test]
  fn javascript_projects_get_no_type_stub() {
    let dir = project_dir();
    run_features(&["cart".to_string()], false, false, dir.path()).unwrap();
    let base = dir.path().join("src/features/cart");
    assert!(base.join("validation.js").exists());
    assert!(!base.join("type.ts").exists());
  }

  #[test]
  fn existing_module_is_skipped_without_force() {
    let dir = project_dir();
    let base = dir.path().join("src/features/billing");
    fs::create_dir_all(&base).unwrap();
    fs::write(base.join("marker.txt"), "user data").unwrap();

    run_features(&["billing".to_string()], false, false, dir.path()).unwrap();
    assert!(base.join("marker.txt").exists());
    assert!(!base.join("validation.js").exists(), "skipped module must not gain files");
  }

  #[test]
  fn force_extends_without_overwriting_files() {
    let dir = project_dir();
    fs::write(dir.path().join("tsconfig.json"), "{}").unwrap();
    let base = dir.path().join("src/features/billing");
    fs::create_dir_all(&base).unwrap();
    fs::write(base.join("validation.ts"), "// user edits").unwrap();

    run_features(&["billing".to_string()], true, false, dir.path()).unwrap();
    assert_eq!(
      fs::read_to_string(base.join("validation.ts")).unwrap(),
      "// user edits"
    );
    assert!(base.join("pages").is_dir(), "missing dirs are still created");
    assert!(base.join("type.ts").exists(), "missing stubs are still written");
  }

  #[test]
  fn invalid_name_aborts_the_whole_batch() {
    let dir = project_dir();
    let err = run_features(
      &["good".to_string(), "bad name".to_string()],
      false,
      false,
      dir.path(),
    )
    .unwrap_err();
    assert!(matches!(err, ScaffoldError::InvalidFeatureName { .. }));
    assert!(!dir.path().join("src/features/good").exists(), "no mutation before validation");
  }

  #[test]
  fn missing_src_root_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let err = run_features(&["billing".to_string()], false, false, dir.path()).unwrap_err();
    assert!(matches!(err, ScaffoldError::Precondition(_)));
  }

  #[test]
  fn dry_run_mutates_nothing() {
    let dir = project_dir();
    run_features(&["billing".to_string()], false, true, dir.path()).unwrap();
    assert!(!dir.path().join("src/features").exists());
  }
}
