// src/manifest.rs
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ScaffoldError;

/// Read-only projection of a `package.json`. Only the sections this tool
/// consults are deserialized; rewrites never go through this type so unknown
/// fields cannot be lost.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ManifestView {
  pub dependencies: BTreeMap<String, String>,
  pub dev_dependencies: BTreeMap<String, String>,
  pub peer_dependencies: BTreeMap<String, String>,
  pub scripts: BTreeMap<String, String>,
}

impl ManifestView {
  pub fn load(path: &Path) -> Result<ManifestView, ScaffoldError> {
    let content = fs::read_to_string(path).map_err(|e| ScaffoldError::ManifestRead {
      path: path.to_path_buf(),
      source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| ScaffoldError::ManifestParse {
      path: path.to_path_buf(),
      source: e,
    })
  }
}

/// Adds a script to the manifest unless one with that name is already
/// declared (a user-defined script is never overwritten). The file is
/// re-read, amended in memory and rewritten whole; returns whether anything
/// changed.
pub fn record_script(
  manifest_path: &Path,
  name: &str,
  command: &str,
) -> Result<bool, ScaffoldError> {
  let content = fs::read_to_string(manifest_path).map_err(|e| ScaffoldError::ManifestRead {
    path: manifest_path.to_path_buf(),
    source: e,
  })?;
  let mut doc: Value =
    serde_json::from_str(&content).map_err(|e| ScaffoldError::ManifestParse {
      path: manifest_path.to_path_buf(),
      source: e,
    })?;

  let Some(root) = doc.as_object_mut() else {
    return Err(ScaffoldError::Precondition(format!(
      "Manifest '{}' is not a JSON object.",
      manifest_path.display()
    )));
  };

  let scripts = root
    .entry("scripts")
    .or_insert_with(|| Value::Object(Map::new()));
  if !scripts.is_object() {
    *scripts = Value::Object(Map::new());
  }
  let scripts = scripts.as_object_mut().expect("scripts is an object");

  if scripts.contains_key(name) {
    debug!("Script '{}' already declared, leaving it untouched.", name);
    return Ok(false);
  }
  scripts.insert(name.to_string(), Value::String(command.to_string()));

  let serialized = serde_json::to_string_pretty(&doc).map_err(|e| ScaffoldError::ManifestParse {
    path: manifest_path.to_path_buf(),
    source: e,
  })?;
  fs::write(manifest_path, serialized + "\n")?;
  Ok(true)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn write_manifest(dir: &Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("package.json");
    fs::write(&path, body).unwrap();
    path
  }

  #[test]
  fn load_projects_known_sections() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_manifest(
      dir.path(),
      r#"{
        "name": "demo",
        "dependencies": { "react": "^18.2.0" },
        "devDependencies": { "eslint": "^9.0.0" },
        "scripts": { "dev": "vite" }
      }"#,
    );
    let view = ManifestView::load(&path).unwrap();
    assert_eq!(view.dependencies.get("react").unwrap(), "^18.2.0");
    assert_eq!(view.dev_dependencies.get("eslint").unwrap(), "^9.0.0");
    assert_eq!(view.scripts.get("dev").unwrap(), "vite");
    assert!(view.peer_dependencies.is_empty());
  }

  #[test]
  fn record_script_adds_when_absent() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_manifest(dir.path(), r#"{ "name": "demo", "scripts": {} }"#);
    assert!(record_script(&path, "lint", "eslint .").unwrap());
    let view = ManifestView::load(&path).unwrap();
    assert_eq!(view.scripts.get("lint").unwrap(), "eslint .");
  }

  #[test]
  fn record_script_never_overwrites_user_scripts() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_manifest(
      dir.path(),
      r#"{ "scripts": { "lint": "my-custom-linter" } }"#,
    );
    assert!(!record_script(&path, "lint", "eslint .").unwrap());
    let view = ManifestView::load(&path).unwrap();
    assert_eq!(view.scripts.get("lint").unwrap(), "my-custom-linter");
  }

  #[test]
  fn record_script_preserves_unrelated_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_manifest(
      dir.path(),
      r#"{ "name": "demo", "private": true, "workspaces": ["packages/*"] }"#,
    );
    record_script(&path, "lint", "eslint .").unwrap();
    let doc: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(doc["name"], "demo");
    assert_eq!(doc["private"], true);
    assert_eq!(doc["workspaces"][0], "packages/*");
    assert_eq!(doc["scripts"]["lint"], "eslint .");
  }

  #[test]
  fn missing_manifest_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ManifestView::load(&dir.path().join("package.json")).unwrap_err();
    assert!(matches!(err, ScaffoldError::ManifestRead { .. }));
  }
}
