// src/error.rs
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
  #[error("IO Error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Invalid project name \"{raw}\". Names may contain letters, digits, '.', '-', '_' and '@', must not be '.' or '..', and must be at most 214 characters.")]
  InvalidProjectName { raw: String },

  #[error("Invalid feature name \"{raw}\". Names may contain letters, digits, '-' and '_'.")]
  InvalidFeatureName { raw: String },

  #[error("{0}")]
  Precondition(String),

  #[error("Could not read manifest '{path}': {source}")]
  ManifestRead {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Could not parse manifest '{path}': {source}")]
  ManifestParse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("Failed to start command `{command}`: {source}")]
  CommandExec {
    command: String,
    #[source]
    source: std::io::Error,
  },

  #[error("Command `{command}` failed with status {status}")]
  CommandFailed { command: String, status: ExitStatus },

  #[error("User interaction failed: {0}")]
  DialoguerError(#[from] dialoguer::Error),

  #[error("{failed} of {total} requested integrations failed")]
  IntegrationsFailed { failed: usize, total: usize },

  #[error("{failed} of {total} requested feature modules failed")]
  FeaturesFailed { failed: usize, total: usize },
}
