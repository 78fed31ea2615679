// src/fs_ops.rs
use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

use log::trace;

use crate::error::{FsAction, ThemeError};

/// Appends `name` below `base` the way string concatenation would: a leading
/// `/` or drive prefix in `name` cannot replace `base`. `..` is kept as-is.
pub fn join_under(base: &Path, name: &str) -> PathBuf {
  let mut out = base.to_path_buf();
  for component in Path::new(name).components() {
    match component {
      Component::Normal(part) => out.push(part),
      Component::CurDir => out.push("."),
      Component::ParentDir => out.push(".."),
      Component::RootDir | Component::Prefix(_) => {}
    }
  }
  out
}

/// `mkdir -p`: creates missing parents and succeeds when the directory exists.
pub fn create_dir_all(path: &Path) -> Result<(), ThemeError> {
  trace!("Creating directory: {}", path.display());
  fs::create_dir_all(path).map_err(|e| ThemeError::filesystem(FsAction::CreateDir, path, e))
}

/// Creates an empty file, or bumps the modification time of an existing one
/// without truncating it. Read-only files the user owns only get their
/// timestamp updated.
pub fn touch(path: &Path) -> Result<(), ThemeError> {
  trace!("Touching file: {}", path.display());
  let file = match OpenOptions::new().create(true).append(true).open(path) {
    Ok(file) => file,
    Err(e) if e.kind() == ErrorKind::PermissionDenied && path.is_file() => {
      File::open(path).map_err(|_| ThemeError::filesystem(FsAction::TouchFile, path, e))?
    }
    Err(e) => return Err(ThemeError::filesystem(FsAction::TouchFile, path, e)),
  };
  file
    .set_modified(SystemTime::now())
    .map_err(|e| ThemeError::filesystem(FsAction::TouchFile, path, e))
}

/// Writes the whole file, replacing whatever was there.
pub fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<(), ThemeError> {
  trace!("Writing file: {}", path.display());
  fs::write(path, contents).map_err(|e| ThemeError::filesystem(FsAction::WriteFile, path, e))
}
