// src/integrations/mod.rs
mod axios;
mod react_query;
mod tailwind;
mod zustand;

use std::collections::HashSet;
use std::path::Path;

use log::{info, warn};

use crate::config::PackageManager;
use crate::detect;
use crate::error::ScaffoldError;
use crate::manifest::ManifestView;

/// Outcome of one integration attempt. Returned to the caller for the final
/// report, never persisted.
#[derive(Debug)]
pub struct IntegrationRecord {
  pub name: &'static str,
  pub ok: bool,
  pub note: Option<String>,
}

impl IntegrationRecord {
  pub fn ok(name: &'static str) -> IntegrationRecord {
    IntegrationRecord {
      name,
      ok: true,
      note: None,
    }
  }

  pub fn ok_with_note(name: &'static str, note: &str) -> IntegrationRecord {
    IntegrationRecord {
      name,
      ok: true,
      note: Some(note.to_string()),
    }
  }
}

/// Entry point for the `add` command: applies the requested integrations and
/// prints the per-item report. Any failed integration yields a non-zero
/// exit, but only after every requested one has been attempted.
pub fn run_add(names: &[String], project_root: &Path) -> Result<(), ScaffoldError> {
  let pm = detect::detect_package_manager(
    std::env::var("npm_config_user_agent").ok().as_deref(),
  );
  let records = apply_integrations(project_root, names, pm)?;

  for record in &records {
    match (&record.ok, &record.note) {
      (true, None) => println!("{}: ok", record.name),
      (true, Some(note)) => println!("{}: ok ({})", record.name, note),
      (false, note) => println!(
        "{}: failed ({})",
        record.name,
        note.as_deref().unwrap_or("unknown error")
      ),
    }
  }

  let failed = records.iter().filter(|r| !r.ok).count();
  if failed > 0 {
    return Err(ScaffoldError::IntegrationsFailed {
      failed,
      total: records.len(),
    });
  }
  Ok(())
}

/// Applies each requested integration independently: one failure is recorded
/// and the remaining integrations still run. The package manager and the
/// declared React major are detected once per invocation.
pub fn apply_integrations(
  project_root: &Path,
  names: &[String],
  pm: PackageManager,
) -> Result<Vec<IntegrationRecord>, ScaffoldError> {
  if !project_root.join("src").is_dir() {
    return Err(ScaffoldError::Precondition(
      "Run this inside a project ('src' folder not found).".to_string(),
    ));
  }

  let react_major = match ManifestView::load(&project_root.join("package.json")) {
    Ok(view) => detect::declared_major(&view, "react", 18),
    Err(e) => {
      warn!("Could not read package.json ({}), assuming React 18.", e);
      18
    }
  };
  info!(
    "Applying integrations with {} (React major {}).",
    pm, react_major
  );

  let requested: HashSet<String> = names.iter().map(|n| n.to_lowercase()).collect();
  let mut records = Vec::new();

  if requested.contains("tailwind") {
    records.push(guard("tailwind", tailwind::integrate(project_root, pm)));
  }
  if requested.contains("react-query")
    || requested.contains("reactquery")
    || requested.contains("tanstack")
  {
    records.push(guard(
      "react-query",
      react_query::integrate(project_root, pm, react_major),
    ));
  }
  if requested.contains("zustand") {
    records.push(guard("zustand", zustand::integrate(project_root, pm)));
  }
  if requested.contains("axios") {
    records.push(guard("axios", axios::integrate(project_root, pm)));
  }

  if records.is_empty() {
    println!("No supported integrations requested.");
  }
  Ok(records)
}

/// Converts a failed integration into a record so the batch keeps going.
fn guard(
  name: &'static str,
  result: Result<IntegrationRecord, ScaffoldError>,
) -> IntegrationRecord {
  match result {
    Ok(record) => record,
    Err(e) => {
      warn!("Integration '{}' failed: {}", name, e);
      IntegrationRecord {
        name,
        ok: false,
        note: Some(e.to_string()),
      }
    }
  }
}
