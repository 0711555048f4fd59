// src/integrations/react_query.rs
use std::fs;
use std::path::Path;

use log::{debug, info};

use super::IntegrationRecord;
use crate::config::PackageManager;
use crate::error::ScaffoldError;
use crate::patch;
use crate::utils;

/// Result of the entry-file patch. A missing entry file is a soft skip, not
/// an error: the dependency is installed either way.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum EntryPatch {
  Applied,
  AlreadyPresent,
  NoEntry,
}

pub fn integrate(
  project_root: &Path,
  pm: PackageManager,
  react_major: u32,
) -> Result<IntegrationRecord, ScaffoldError> {
  // v4 is the last major that supports React 17; React 18+ takes latest.
  let package = if react_major < 18 {
    "@tanstack/react-query@^4"
  } else {
    "@tanstack/react-query"
  };
  utils::install_packages(pm, &[package], false, project_root)?;

  match patch_entry(&project_root.join("src"))? {
    EntryPatch::Applied => {
      println!("React Query integrated.");
      Ok(IntegrationRecord::ok("react-query"))
    }
    EntryPatch::AlreadyPresent => {
      info!("QueryClientProvider already present, entry file untouched.");
      Ok(IntegrationRecord::ok("react-query"))
    }
    EntryPatch::NoEntry => Ok(IntegrationRecord::ok_with_note(
      "react-query",
      "no main entry found",
    )),
  }
}

/// Patches the first conventional entry file with the provider wrap.
pub(crate) fn patch_entry(src_dir: &Path) -> Result<EntryPatch, ScaffoldError> {
  for candidate in ["main.tsx", "main.jsx", "main.ts", "main.js"] {
    let path = src_dir.join(candidate);
    if !path.exists() {
      continue;
    }
    let code = fs::read_to_string(&path)?;
    if code.contains("QueryClientProvider") {
      return Ok(EntryPatch::AlreadyPresent);
    }
    let patched = patch::inject_query_provider(&code);
    fs::write(&path, patched)?;
    debug!("Wrapped render root in {}", path.display());
    return Ok(EntryPatch::Applied);
  }
  Ok(EntryPatch::NoEntry)
}
