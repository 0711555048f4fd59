// src/utils.rs
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

use duct::cmd;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, trace};

use crate::config::PackageManager;
use crate::error::ScaffoldError;
use crate::templates::{FileAction, WriteMode};

/// Writes `content` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> io::Result<()> {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::write(path, content)
}

/// Write-if-absent variant: skips silently when the file already exists.
/// Returns whether the file was written.
pub fn write_if_absent(path: &Path, content: &str) -> io::Result<bool> {
  if path.exists() {
    trace!("File already exists, skipping: {}", path.display());
    return Ok(false);
  }
  write_file(path, content)?;
  Ok(true)
}

/// Appends a block to a file, creating it when missing. A blank separator
/// line keeps appended sections readable.
pub fn append_file(path: &Path, content: &str) -> io::Result<()> {
  if !path.exists() {
    return write_file(path, content);
  }
  let existing = fs::read_to_string(path)?;
  fs::write(path, format!("{}\n{}", existing, content))
}

/// Merges the required ignore entries into `.gitignore`, preserving whatever
/// the generator or the user already put there. Line-set union, one entry
/// per line.
pub fn ensure_gitignore(project_path: &Path) -> io::Result<()> {
  let path = project_path.join(".gitignore");
  let required = ["node_modules", "dist", ".env", ".DS_Store"];
  let existing = if path.exists() {
    fs::read_to_string(&path)?
  } else {
    String::new()
  };
  let mut lines: Vec<&str> = existing.lines().filter(|l| !l.is_empty()).collect();
  let present: BTreeSet<&str> = lines.iter().copied().collect();
  for entry in required {
    if !present.contains(entry) {
      lines.push(entry);
    }
  }
  fs::write(&path, lines.join("\n") + "\n")
}

/// Deletes a file if it exists; absence is not an error.
pub fn remove_if_exists(path: &Path) -> io::Result<()> {
  match fs::remove_file(path) {
    Ok(()) => Ok(()),
    Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
    Err(e) => Err(e),
  }
}

/// Applies a batch of file actions relative to `root`, showing per-file
/// progress.
pub fn apply_file_actions(root: &Path, actions: &[FileAction]) -> Result<(), ScaffoldError> {
  let pb = ProgressBar::new(actions.len() as u64);
  pb.set_style(
    ProgressStyle::default_bar()
      .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
      .expect("static progress template")
      .progress_chars("#>-"),
  );
  pb.set_message("Writing project files...");

  for action in actions {
    let target = root.join(&action.path);
    pb.set_message(format!("Writing {}", action.path.display()));
    match action.mode {
      WriteMode::Overwrite => {
        write_file(&target, &action.content)?;
      }
      WriteMode::CreateIfAbsent => {
        write_if_absent(&target, &action.content)?;
      }
      WriteMode::OverwriteIfPresent => {
        if target.exists() {
          write_file(&target, &action.content)?;
        } else {
          debug!("Target absent, skipping rewrite: {}", target.display());
        }
      }
    }
    pb.inc(1);
  }
  pb.finish_and_clear();
  Ok(())
}

/// Runs a shell command in `cwd`, blocking until it exits and inheriting the
/// standard streams so the user sees live output. Non-zero exit is an error.
pub fn run_shell(command: &str, cwd: &Path) -> Result<(), ScaffoldError> {
  info!("Running `{}` in {}", command, cwd.display());
  let output = cmd!("sh", "-c", command)
    .dir(cwd)
    .unchecked()
    .run()
    .map_err(|e| ScaffoldError::CommandExec {
      command: command.to_string(),
      source: e,
    })?;
  if !output.status.success() {
    return Err(ScaffoldError::CommandFailed {
      command: command.to_string(),
      status: output.status,
    });
  }
  Ok(())
}

/// Installs packages through the active package manager's add command.
pub fn install_packages(
  pm: PackageManager,
  packages: &[&str],
  dev: bool,
  cwd: &Path,
) -> Result<(), ScaffoldError> {
  run_shell(&pm.add_command(packages, dev), cwd)
}

/// Backslash-escapes double quotes so a project name survives the shell's
/// double-quoted context.
pub fn escape_quotes(input: &str) -> String {
  input.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::path::PathBuf;

  #[test]
  fn write_file_creates_parents() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("a/b/c.txt");
    write_file(&target, "hello").unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "hello");
  }

  #[test]
  fn write_if_absent_skips_existing() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("x.txt");
    assert!(write_if_absent(&target, "first").unwrap());
    assert!(!write_if_absent(&target, "second").unwrap());
    assert_eq!(fs::read_to_string(&target).unwrap(), "first");
  }

  #[test]
  fn gitignore_merge_is_a_line_union() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".gitignore"), "node_modules\ncustom-dir\n").unwrap();
    ensure_gitignore(dir.path()).unwrap();
    let content = fs::read_to_string(dir.path().join(".gitignore")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
      lines.iter().filter(|l| **l == "node_modules").count(),
      1,
      "entries must not be duplicated"
    );
    assert!(lines.contains(&"custom-dir"));
    assert!(lines.contains(&"dist"));
    assert!(lines.contains(&".env"));
    assert!(lines.contains(&".DS_Store"));
  }

  #[test]
  fn remove_if_exists_tolerates_absence() {
    let dir = tempfile::tempdir().unwrap();
    remove_if_exists(&dir.path().join("ghost.txt")).unwrap();
  }

  #[test]
  fn overwrite_if_present_skips_missing_targets() {
    let dir = tempfile::tempdir().unwrap();
    let actions = vec![FileAction {
      path: PathBuf::from("src/main.tsx"),
      mode: WriteMode::OverwriteIfPresent,
      content: "new".to_string(),
    }];
    apply_file_actions(dir.path(), &actions).unwrap();
    assert!(!dir.path().join("src/main.tsx").exists());

    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/main.tsx"), "old").unwrap();
    apply_file_actions(dir.path(), &actions).unwrap();
    assert_eq!(
      fs::read_to_string(dir.path().join("src/main.tsx")).unwrap(),
      "new"
    );
  }

  #[test]
  fn escape_quotes_for_shell() {
    assert_eq!(escape_quotes(r#"my"app"#), r#"my\"app"#);
    assert_eq!(escape_quotes("plain"), "plain");
  }
}
