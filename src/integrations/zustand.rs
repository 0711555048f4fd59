// src/integrations/zustand.rs
use std::path::Path;

use super::IntegrationRecord;
use crate::config::PackageManager;
use crate::error::ScaffoldError;
use crate::utils;

pub fn integrate(
  project_root: &Path,
  pm: PackageManager,
) -> Result<IntegrationRecord, ScaffoldError> {
  utils::install_packages(pm, &["zustand"], false, project_root)?;
  println!("Zustand integrated.");
  Ok(IntegrationRecord::ok("zustand"))
}
