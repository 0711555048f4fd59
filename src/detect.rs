// src/detect.rs
use std::path::Path;

use regex::Regex;

use crate::config::{Language, PackageManager};
use crate::manifest::ManifestView;

/// Infers the language mode of an existing project: TypeScript iff a TS
/// compiler config or a TS entry file is present. Absence of everything is
/// not an error, it just means JavaScript.
pub fn detect_language(project_root: &Path) -> Language {
  let is_ts = project_root.join("tsconfig.json").exists()
    || project_root.join("tsconfig.app.json").exists()
    || project_root.join("src/main.tsx").exists();
  if is_ts {
    Language::TypeScript
  } else {
    Language::JavaScript
  }
}

/// Infers the active package manager from the invoking tool's user-agent
/// signal (the `npm_config_user_agent` value, read by the caller and passed
/// in so this stays a pure function). Precedence: pnpm, yarn, then npm.
pub fn detect_package_manager(user_agent: Option<&str>) -> PackageManager {
  let ua = user_agent.unwrap_or("");
  if ua.contains("pnpm") {
    PackageManager::Pnpm
  } else if ua.contains("yarn") {
    PackageManager::Yarn
  } else {
    PackageManager::Npm
  }
}

/// Extracts the major version from a range string: the first run of one to
/// three digits ("^18.2.0" -> 18, "17.0.2" -> 17). "latest" and friends have
/// no digits and yield `None`.
pub fn extract_major(range: &str) -> Option<u32> {
  let re = Regex::new(r"\d{1,3}").expect("static regex");
  re.find(range).and_then(|m| m.as_str().parse().ok())
}

/// Reads the declared major version of `package` from a manifest view.
/// Sections are consulted in dependencies -> peerDependencies ->
/// devDependencies order; `fallback` applies when the package is absent or
/// its range has no parsable digits.
pub fn declared_major(manifest: &ManifestView, package: &str, fallback: u32) -> u32 {
  let range = manifest
    .dependencies
    .get(package)
    .or_else(|| manifest.peer_dependencies.get(package))
    .or_else(|| manifest.dev_dependencies.get(package));
  range.and_then(|r| extract_major(r)).unwrap_or(fallback)
}
