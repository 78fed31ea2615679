// src/list.rs
use crate::error::{FsAction, ThemeError};
use crate::manifest::ManifestSummary;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// One row of `list` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeEntry {
  pub slug: String,
  pub name: String,
  pub version: String,
}

pub fn run_list(themes_dir: &Path) -> Result<(), ThemeError> {
  println!("Themes in {}:", themes_dir.display());
  println!("{:<25} | {:<10} | {}", "Slug", "Version", "Name");
  println!("{:-<25}-+-{:-<10}-+-{:-<40}", "", "", ""); // Separator

  for entry in find_themes(themes_dir)? {
    println!("{:<25} | {:<10} | {}", entry.slug, entry.version, entry.name);
  }

  Ok(())
}

/// Theme directories under `themes_dir` that carry a readable `package.json`,
/// sorted by slug.
pub fn find_themes(themes_dir: &Path) -> Result<Vec<ThemeEntry>, ThemeError> {
  let mut themes = Vec::new();
  if !themes_dir.is_dir() {
    warn!(
      "Themes directory not found or is not a directory: {}",
      themes_dir.display()
    );
    return Ok(themes);
  }

  let entries = fs::read_dir(themes_dir)
    .map_err(|e| ThemeError::filesystem(FsAction::ReadDir, themes_dir, e))?;

  for entry_result in entries {
    let entry = match entry_result {
      Ok(e) => e,
      Err(e) => {
        warn!("Failed to read entry in themes directory: {}", e);
        continue;
      }
    };

    let path = entry.path();
    if !path.is_dir() {
      continue;
    }

    let slug = path
      .file_name()
      .map_or_else(|| ".".into(), |n| n.to_string_lossy().to_string());
    let manifest_path = path.join("package.json");
    if !manifest_path.is_file() {
      debug!("Directory {} does not contain package.json, skipping.", path.display());
      continue;
    }

    match read_manifest_summary(&manifest_path) {
      Ok(summary) => themes.push(ThemeEntry {
        slug,
        name: summary.name,
        version: summary.version,
      }),
      Err(e) => {
        warn!(
          "Skipping directory '{}': Could not read or parse package.json: {}",
          slug, e
        );
      }
    }
  }

  themes.sort_by(|a, b| a.slug.cmp(&b.slug));
  Ok(themes)
}

pub(crate) fn read_manifest_summary(manifest_path: &Path) -> Result<ManifestSummary, ThemeError> {
  let content = fs::read_to_string(manifest_path)
    .map_err(|e| ThemeError::filesystem(FsAction::ReadFile, PathBuf::from(manifest_path), e))?;
  serde_json::from_str(&content).map_err(|e| ThemeError::ManifestParse {
    manifest_path: manifest_path.to_path_buf(),
    source: e,
  })
}
