// src/error.rs
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The filesystem primitive that was being attempted when an I/O call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsAction {
  CreateDir,
  TouchFile,
  WriteFile,
  ReadDir,
  ReadFile,
  ResolveCwd,
}

impl fmt::Display for FsAction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let verb = match self {
      FsAction::CreateDir => "create directory",
      FsAction::TouchFile => "touch file",
      FsAction::WriteFile => "write file",
      FsAction::ReadDir => "read directory",
      FsAction::ReadFile => "read file",
      FsAction::ResolveCwd => "resolve current directory",
    };
    f.write_str(verb)
  }
}

#[derive(Error, Debug)]
pub enum ThemeError {
  #[error("Failed to {action} '{path}': {source}")]
  Filesystem {
    action: FsAction,
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Could not parse theme manifest '{manifest_path}': {source}")]
  ManifestParse {
    manifest_path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("JSON Serialization Error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("Could not determine themes directory (pass --themes-dir or set FSE_THEMES_DIR)")]
  CannotDetermineThemesDir,
}

impl ThemeError {
  pub(crate) fn filesystem(action: FsAction, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    ThemeError::Filesystem {
      action,
      path: path.into(),
      source,
    }
  }

  /// Path of the filesystem entry that failed, if this is a filesystem error.
  pub fn path(&self) -> Option<&std::path::Path> {
    match self {
      ThemeError::Filesystem { path, .. } => Some(path),
      ThemeError::ManifestParse { manifest_path, .. } => Some(manifest_path),
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io;

  #[test]
  fn cwd_failure_names_the_action() {
    let err = ThemeError::filesystem(
      FsAction::ResolveCwd,
      ".",
      io::Error::new(io::ErrorKind::NotFound, "gone"),
    );
    assert_eq!(err.to_string(), "Failed to resolve current directory '.': gone");
  }
}
