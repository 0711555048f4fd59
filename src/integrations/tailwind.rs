// src/integrations/tailwind.rs
use std::fs;
use std::path::Path;

use log::{info, warn};
use regex::Regex;

use super::IntegrationRecord;
use crate::config::PackageManager;
use crate::detect;
use crate::error::ScaffoldError;
use crate::manifest::ManifestView;
use crate::patch;
use crate::utils;

const VITE_CONFIG_NAMES: &[&str] = &[
  "vite.config.ts",
  "vite.config.js",
  "vite.config.mts",
  "vite.config.mjs",
];

const CONTENT_GLOB: &str = "./src/**/*.{js,ts,jsx,tsx}";

/// Tailwind has two very different setups depending on its major version:
/// v4+ registers a Vite plugin and imports the framework from CSS, while v3
/// goes through PostCSS with a config file and directive lines. Both
/// branches deliberately overwrite the project stylesheet — integrations
/// target freshly generated projects.
pub fn integrate(
  project_root: &Path,
  pm: PackageManager,
) -> Result<IntegrationRecord, ScaffoldError> {
  utils::install_packages(pm, &["tailwindcss"], true, project_root)?;

  let major = match ManifestView::load(&project_root.join("package.json")) {
    Ok(view) => detect::declared_major(&view, "tailwindcss", 3),
    Err(e) => {
      warn!("Could not read package.json ({}), assuming Tailwind 3.", e);
      3
    }
  };

  if major >= 4 {
    utils::install_packages(pm, &["@tailwindcss/vite"], true, project_root)?;
    apply_vite_plugin(project_root)?;
    write_import_stylesheet(project_root)?;
    println!("Tailwind v{} integrated with Vite plugin.", major);
    return Ok(IntegrationRecord::ok("tailwind"));
  }

  // v3: PostCSS pipeline.
  utils::install_packages(pm, &["postcss", "autoprefixer"], true, project_root)?;
  let config = project_root.join("tailwind.config.js");
  let postcss = project_root.join("postcss.config.js");
  let postcss_cjs = project_root.join("postcss.config.cjs");
  if !config.exists() || (!postcss.exists() && !postcss_cjs.exists()) {
    let init = format!("{} tailwindcss init -p", pm.dlx_runner());
    if let Err(e) = utils::run_shell(&init, project_root) {
      // Best effort; the defaults below cover a failed init.
      warn!("tailwindcss init failed ({}), writing default configs.", e);
    }
  }
  ensure_tailwind_config(project_root)?;
  ensure_postcss_config(project_root)?;
  write_directive_stylesheet(project_root)?;
  println!("Tailwind integrated.");
  Ok(IntegrationRecord::ok("tailwind"))
}

/// Patches the first conventional Vite config with the plugin registration.
/// No config file at all is a silent skip.
pub(crate) fn apply_vite_plugin(project_root: &Path) -> Result<(), ScaffoldError> {
  let Some(path) = VITE_CONFIG_NAMES
    .iter()
    .map(|name| project_root.join(name))
    .find(|p| p.exists())
  else {
    info!("No Vite config found, skipping plugin registration.");
    return Ok(());
  };
  let code = fs::read_to_string(&path)?;
  fs::write(&path, patch::ensure_vite_plugin(&code))?;
  Ok(())
}

/// Writes the default v3 config, or widens an existing config's content
/// globs only when the expected glob is missing.
pub(crate) fn ensure_tailwind_config(project_root: &Path) -> Result<(), ScaffoldError> {
  let path = project_root.join("tailwind.config.js");
  if !path.exists() {
    utils::write_file(
      &path,
      &format!(
        "module.exports = {{ content: [\"./index.html\",\"{}\"], theme: {{ extend: {{}} }}, plugins: [] }}",
        CONTENT_GLOB
      ),
    )?;
    return Ok(());
  }
  let current = fs::read_to_string(&path)?;
  if !current.contains(CONTENT_GLOB) {
    let widened = Regex::new(r"content:\s*\[[^\]]*\]")
      .expect("static regex")
      .replace(
        &current,
        format!("content: [\"./index.html\",\"{}\"]", CONTENT_GLOB),
      )
      .into_owned();
    fs::write(&path, widened)?;
  }
  Ok(())
}

pub(crate) fn ensure_postcss_config(project_root: &Path) -> Result<(), ScaffoldError> {
  let postcss = project_root.join("postcss.config.js");
  let postcss_cjs = project_root.join("postcss.config.cjs");
  if !postcss.exists() && !postcss_cjs.exists() {
    utils::write_file(
      &postcss_cjs,
      "module.exports = {\n  plugins: {\n    tailwindcss: {},\n    autoprefixer: {},\n  },\n};\n",
    )?;
  }
  Ok(())
}

/// v4 stylesheet: a single framework import. Pre-existing content is
/// discarded on purpose.
pub(crate) fn write_import_stylesheet(project_root: &Path) -> Result<(), ScaffoldError> {
  utils::write_file(
    &project_root.join("src/index.css"),
    "@import \"tailwindcss\";\n",
  )?;
  Ok(())
}

/// v3 stylesheet: the three directive lines. Pre-existing content is
/// discarded on purpose.
pub(crate) fn write_directive_stylesheet(project_root: &Path) -> Result<(), ScaffoldError> {
  utils::write_file(
    &project_root.join("src/index.css"),
    "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n",
  )?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn import_stylesheet_overwrite_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/index.css"), "body { margin: 0 }").unwrap();

    write_import_stylesheet(dir.path()).unwrap();
    let once = fs::read_to_string(dir.path().join("src/index.css")).unwrap();
    write_import_stylesheet(dir.path()).unwrap();
    let twice = fs::read_to_string(dir.path().join("src/index.css")).unwrap();

    assert_eq!(once, "@import \"tailwindcss\";\n");
    assert_eq!(once, twice, "import line must not be duplicated");
  }

  #[test]
  fn directive_stylesheet_discards_existing_styles() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/index.css"), "/* old */").unwrap();
    write_directive_stylesheet(dir.path()).unwrap();
    assert_eq!(
      fs::read_to_string(dir.path().join("src/index.css")).unwrap(),
      "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n"
    );
  }

  #[test]
  fn default_config_is_written_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    ensure_tailwind_config(dir.path()).unwrap();
    let config = fs::read_to_string(dir.path().join("tailwind.config.js")).unwrap();
    assert!(config.contains(CONTENT_GLOB));
  }

  #[test]
  fn narrow_content_globs_are_widened() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
      dir.path().join("tailwind.config.js"),
      "module.exports = { content: [\"./index.html\"], theme: { extend: {} } }",
    )
    .unwrap();
    ensure_tailwind_config(dir.path()).unwrap();
    let config = fs::read_to_string(dir.path().join("tailwind.config.js")).unwrap();
    assert!(config.contains(CONTENT_GLOB));
    assert!(config.contains("theme: { extend: {} }"));
  }

  #[test]
  fn config_with_expected_glob_is_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let body = format!(
      "module.exports = {{ content: [\"./index.html\",\"{}\"], custom: true }}",
      CONTENT_GLOB
    );
    fs::write(dir.path().join("tailwind.config.js"), &body).unwrap();
    ensure_tailwind_config(dir.path()).unwrap();
    assert_eq!(
      fs::read_to_string(dir.path().join("tailwind.config.js")).unwrap(),
      body
    );
  }

  #[test]
  fn postcss_config_is_only_created_when_absent() {
    let dir = tempfile::tempdir().unwrap();
    ensure_postcss_config(dir.path()).unwrap();
    assert!(dir.path().join("postcss.config.cjs").exists());

    fs::write(dir.path().join("postcss.config.cjs"), "custom").unwrap();
    ensure_postcss_config(dir.path()).unwrap();
    assert_eq!(
      fs::read_to_string(dir.path().join("postcss.config.cjs")).unwrap(),
      "custom"
    );
  }

  #[test]
  fn vite_plugin_patch_skips_when_no_config_exists() {
    let dir = tempfile::tempdir().unwrap();
    apply_vite_plugin(dir.path()).unwrap();
  }

  #[test]
  fn vite_plugin_patch_targets_first_existing_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
      dir.path().join("vite.config.ts"),
      "import { defineConfig } from 'vite'\nexport default defineConfig({\n  plugins: [react()],\n})\n",
    )
    .unwrap();
    apply_vite_plugin(dir.path()).unwrap();
    let patched = fs::read_to_string(dir.path().join("vite.config.ts")).unwrap();
    assert!(patched.contains("@tailwindcss/vite"));
    assert!(patched.contains("tailwindcss(), "));
  }
}
