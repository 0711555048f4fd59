// src/integrations/axios.rs
use std::path::Path;

use super::IntegrationRecord;
use crate::config::PackageManager;
use crate::error::ScaffoldError;
use crate::utils;

pub fn integrate(
  project_root: &Path,
  pm: PackageManager,
) -> Result<IntegrationRecord, ScaffoldError> {
  utils::install_packages(pm, &["axios"], false, project_root)?;
  println!("Axios integrated.");
  Ok(IntegrationRecord::ok("axios"))
}
