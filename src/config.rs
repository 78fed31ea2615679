// src/config.rs
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::ThemeError;

/// One invocation's input: the theme name as typed and the Sass switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRequest {
  pub raw_name: String,
  pub support_sass: bool,
}

impl ThemeRequest {
  pub fn new(raw_name: impl Into<String>, support_sass: bool) -> Self {
    ThemeRequest {
      raw_name: raw_name.into(),
      support_sass,
    }
  }
}

/// Only the exact string `true` turns Sass on; `TRUE`, `1` and friends do not.
pub fn parse_sass_flag(value: Option<&str>) -> bool {
  value == Some("true")
}

/// Determines the themes root.
/// Order of preference:
/// 1. --themes-dir CLI argument (or FSE_THEMES_DIR, filled in by clap)
/// 2. wp-content/themes under `cwd`, when wp-content exists
/// 3. themes/ under `cwd`, when it exists
pub fn resolve_themes_dir(cli_path: Option<PathBuf>, cwd: &Path) -> Result<PathBuf, ThemeError> {
  if let Some(path) = cli_path {
    // A missing directory is fine, generation creates it.
    if !path.exists() || path.is_dir() {
      return Ok(path);
    }
    warn!(
      "Provided --themes-dir path exists but is not a directory: {}",
      path.display()
    );
  }

  let wp_content = cwd.join("wp-content");
  if wp_content.is_dir() {
    debug!("Found wp-content directory at {}", wp_content.display());
    return Ok(wp_content.join("themes"));
  }

  let themes = cwd.join("themes");
  if themes.is_dir() {
    return Ok(themes);
  }

  Err(ThemeError::CannotDetermineThemesDir)
}
