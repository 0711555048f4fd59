// src/config.rs
use std::fmt;

/// Language variant of the generated project. TypeScript projects get the
/// `react-ts` Vite template plus per-module type files and compiler configs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
  TypeScript,
  JavaScript,
}

impl Language {
  pub fn is_typescript(&self) -> bool {
    matches!(self, Language::TypeScript)
  }

  /// Extension for JSX-bearing source files.
  pub fn component_ext(&self) -> &'static str {
    match self {
      Language::TypeScript => "tsx",
      Language::JavaScript => "jsx",
    }
  }

  /// Extension for plain script files.
  pub fn script_ext(&self) -> &'static str {
    match self {
      Language::TypeScript => "ts",
      Language::JavaScript => "js",
    }
  }

  pub fn vite_template(&self) -> &'static str {
    match self {
      Language::TypeScript => "react-ts",
      Language::JavaScript => "react",
    }
  }

  /// Parses the `--language` flag. Accepts the long and short spellings in
  /// any case; anything that is not a TypeScript spelling means JavaScript.
  pub fn from_flag(raw: &str) -> Language {
    match raw.to_lowercase().as_str() {
      "typescript" | "ts" => Language::TypeScript,
      _ => Language::JavaScript,
    }
  }
}

impl fmt::Display for Language {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Language::TypeScript => write!(f, "TypeScript"),
      Language::JavaScript => write!(f, "JavaScript"),
    }
  }
}

/// The three supported package managers. Each has its own verb/flag
/// spellings; command construction is pure so it can be tested without
/// spawning anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
  Npm,
  Pnpm,
  Yarn,
}

impl PackageManager {
  pub fn from_flag(raw: &str) -> Option<PackageManager> {
    match raw.to_lowercase().as_str() {
      "npm" => Some(PackageManager::Npm),
      "pnpm" => Some(PackageManager::Pnpm),
      "yarn" => Some(PackageManager::Yarn),
      _ => None,
    }
  }

  /// Runner prefix for `create`-style package invocations.
  pub fn create_runner(&self) -> &'static str {
    match self {
      PackageManager::Npm => "npm create",
      PackageManager::Pnpm => "pnpm dlx",
      PackageManager::Yarn => "yarn create",
    }
  }

  /// Runner prefix for one-shot binary execution (e.g. `tailwindcss init`).
  pub fn dlx_runner(&self) -> &'static str {
    match self {
      PackageManager::Npm => "npx",
      PackageManager::Pnpm => "pnpm dlx",
      PackageManager::Yarn => "yarn dlx",
    }
  }

  pub fn install_command(&self) -> &'static str {
    match self {
      PackageManager::Npm => "npm install",
      PackageManager::Pnpm => "pnpm install",
      PackageManager::Yarn => "yarn",
    }
  }

  pub fn add_command(&self, packages: &[&str], dev: bool) -> String {
    let list = packages.join(" ");
    let dev_flag = if dev { "-D " } else { "" };
    match self {
      PackageManager::Npm => format!("npm install {}{}", dev_flag, list),
      PackageManager::Pnpm => format!("pnpm add {}{}", dev_flag, list),
      PackageManager::Yarn => format!("yarn add {}{}", dev_flag, list),
    }
  }

  pub fn remove_command(&self, packages: &[&str]) -> String {
    let list = packages.join(" ");
    match self {
      PackageManager::Npm => format!("npm uninstall {}", list),
      PackageManager::Pnpm => format!("pnpm remove {}", list),
      PackageManager::Yarn => format!("yarn remove {}", list),
    }
  }

  /// How the user starts the dev server, for the "next steps" banner.
  pub fn dev_invocation(&self) -> &'static str {
    match self {
      PackageManager::Npm => "npm run dev",
      PackageManager::Pnpm => "pnpm dev",
      PackageManager::Yarn => "yarn dev",
    }
  }
}

impl fmt::Display for PackageManager {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PackageManager::Npm => write!(f, "npm"),
      PackageManager::Pnpm => write!(f, "pnpm"),
      PackageManager::Yarn => write!(f, "yarn"),
    }
  }
}

/// Validated options for one scaffold run. Constructed once from CLI
/// arguments and/or prompts, then treated as immutable.
#[derive(Debug, Clone)]
pub struct ProjectSpec {
  pub name: String,
  pub language: Language,
  pub package_manager: PackageManager,
  /// Requested React version (e.g. "18", "18.2.0"). `None` means latest.
  pub react_version: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn add_command_spellings_differ_per_tool() {
    let pkgs = ["react-router-dom"];
    assert_eq!(
      PackageManager::Npm.add_command(&pkgs, false),
      "npm install react-router-dom"
    );
    assert_eq!(
      PackageManager::Pnpm.add_command(&pkgs, false),
      "pnpm add react-router-dom"
    );
    assert_eq!(
      PackageManager::Yarn.add_command(&pkgs, false),
      "yarn add react-router-dom"
    );
  }

  #[test]
  fn dev_flag_is_spelled_per_tool() {
    let pkgs = ["eslint", "eslint-plugin-react"];
    assert_eq!(
      PackageManager::Npm.add_command(&pkgs, true),
      "npm install -D eslint eslint-plugin-react"
    );
    assert_eq!(
      PackageManager::Yarn.add_command(&pkgs, true),
      "yarn add -D eslint eslint-plugin-react"
    );
  }

  #[test]
  fn remove_command_spellings() {
    let pkgs = ["axios"];
    assert_eq!(PackageManager::Npm.remove_command(&pkgs), "npm uninstall axios");
    assert_eq!(PackageManager::Pnpm.remove_command(&pkgs), "pnpm remove axios");
    assert_eq!(PackageManager::Yarn.remove_command(&pkgs), "yarn remove axios");
  }

  #[test]
  fn language_flag_parsing() {
    assert_eq!(Language::from_flag("ts"), Language::TypeScript);
    assert_eq!(Language::from_flag("TypeScript"), Language::TypeScript);
    assert_eq!(Language::from_flag("js"), Language::JavaScript);
    assert_eq!(Language::from_flag("anything"), Language::JavaScript);
  }
}
