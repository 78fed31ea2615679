// src/generate.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};

use crate::cli::GenerateArgs;
use crate::config::ThemeRequest;
use crate::content::{self, TEMPLATES_DIR, TEMPLATE_FILES, TEMPLATE_PARTS, TEMPLATE_PARTS_DIR};
use crate::error::ThemeError;
use crate::fs_ops;
use crate::json::to_php_pretty_vec;
use crate::manifest::{PackageManifest, ThemeConfig};
use crate::slug::slugify;

/// What a successful run leaves behind for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
  pub theme_dir: PathBuf,
  pub message: String,
}

/// Writes theme scaffolds into a themes root.
///
/// The first failing filesystem call aborts the run. Anything already written
/// stays on disk; rerunning is safe for directories and the empty templates
/// but rewrites every content-bearing file.
pub struct Generator {
  themes_dir: PathBuf,
  progress: ProgressBar,
}

impl Generator {
  pub fn new(themes_dir: impl Into<PathBuf>) -> Self {
    Generator {
      themes_dir: themes_dir.into(),
      progress: ProgressBar::hidden(),
    }
  }

  pub fn with_progress(mut self, progress: ProgressBar) -> Self {
    self.progress = progress;
    self
  }

  pub fn generate(&self, request: &ThemeRequest) -> Result<GenerateOutcome, ThemeError> {
    let theme_name = request.raw_name.as_str();

    // --- 1. Derive slug ---
    let slug = slugify(theme_name);
    debug!("Theme '{}' -> slug '{}'", theme_name, slug);

    // --- 2. Theme directory tree ---
    let theme_dir = self.create_theme_directory(&slug)?;

    // --- 3. Top-level theme files ---
    self.write_top_level_files(&theme_dir, theme_name, &slug)?;

    // --- 4. Empty templates and parts ---
    self.create_template_files_and_parts(&theme_dir)?;

    // --- 5. Assets ---
    self.create_assets(&theme_dir, theme_name, &slug)?;

    // --- 6. Sass ---
    if request.support_sass {
      self.create_sass_scaffold(&theme_dir)?;
    } else {
      debug!("Sass support not requested, skipping assets/sass");
    }

    // --- 7 & 8. package.json and theme.json ---
    self.write_package_json(&theme_dir, theme_name)?;
    self.write_theme_json(&theme_dir)?;

    self.progress.finish_with_message("Theme files written.");

    Ok(GenerateOutcome {
      theme_dir,
      message: content::success_message(theme_name, request.support_sass),
    })
  }

  fn create_theme_directory(&self, slug: &str) -> Result<PathBuf, ThemeError> {
    let theme_dir = fs_ops::join_under(&self.themes_dir, slug);
    if theme_dir.is_dir() {
      warn!(
        "Theme directory '{}' already exists. Content files will be overwritten.",
        theme_dir.display()
      );
    }
    info!("Creating theme directory: {}", theme_dir.display());
    self.mkdir(&theme_dir, &theme_dir)?;
    self.mkdir(&theme_dir, &theme_dir.join(TEMPLATES_DIR))?;
    self.mkdir(&theme_dir, &theme_dir.join(TEMPLATE_PARTS_DIR))?;
    Ok(theme_dir)
  }

  fn write_top_level_files(&self, theme_dir: &Path, theme_name: &str, slug: &str) -> Result<(), ThemeError> {
    info!("Writing style.css and functions.php...");
    self.write(
      theme_dir,
      &theme_dir.join("style.css"),
      content::style_css_header(theme_name, slug),
    )?;
    self.write(
      theme_dir,
      &theme_dir.join("functions.php"),
      content::functions_php(theme_name, slug),
    )
  }

  fn create_template_files_and_parts(&self, theme_dir: &Path) -> Result<(), ThemeError> {
    info!("Creating templates and template parts...");
    let templates = theme_dir.join(TEMPLATES_DIR);
    for file in TEMPLATE_FILES {
      self.touch(theme_dir, &templates.join(file))?;
    }

    let parts = theme_dir.join(TEMPLATE_PARTS_DIR);
    for file in TEMPLATE_PARTS {
      self.touch(theme_dir, &parts.join(file))?;
    }
    Ok(())
  }

  fn create_assets(&self, theme_dir: &Path, theme_name: &str, slug: &str) -> Result<(), ThemeError> {
    info!("Creating assets...");
    let assets = theme_dir.join("assets");
    for sub in ["images", "js", "css"] {
      self.mkdir(theme_dir, &assets.join(sub))?;
    }

    self.write(
      theme_dir,
      &fs_ops::join_under(&assets.join("js"), &content::script_asset_name(slug)),
      content::script_asset(theme_name),
    )?;
    self.write(
      theme_dir,
      &assets.join("css").join("style.css"),
      content::stylesheet_asset(theme_name),
    )
  }

  fn create_sass_scaffold(&self, theme_dir: &Path) -> Result<(), ThemeError> {
    info!("Adding Sass scaffold...");
    let sass = theme_dir.join("assets").join("sass");
    for dir in [sass.clone(), sass.join("global"), sass.join("variables")] {
      self.mkdir(theme_dir, &dir)?;
    }

    self.write(
      theme_dir,
      &sass.join("global").join("_globals.scss"),
      content::SASS_GLOBALS,
    )?;
    self.write(
      theme_dir,
      &sass.join("variables").join("_variables.scss"),
      content::SASS_VARIABLES,
    )?;
    self.write(theme_dir, &sass.join("style.scss"), content::SASS_STYLE_ENTRY)
  }

  fn write_package_json(&self, theme_dir: &Path, theme_name: &str) -> Result<(), ThemeError> {
    info!("Writing package.json...");
    let bytes = to_php_pretty_vec(&PackageManifest::for_theme(theme_name))?;
    self.write(theme_dir, &theme_dir.join("package.json"), bytes)
  }

  fn write_theme_json(&self, theme_dir: &Path) -> Result<(), ThemeError> {
    info!("Writing theme.json...");
    let bytes = to_php_pretty_vec(&ThemeConfig::default())?;
    self.write(theme_dir, &theme_dir.join("theme.json"), bytes)
  }

  // --- Helper Functions ---

  fn mkdir(&self, theme_dir: &Path, path: &Path) -> Result<(), ThemeError> {
    self.tick(theme_dir, path);
    fs_ops::create_dir_all(path)
  }

  fn touch(&self, theme_dir: &Path, path: &Path) -> Result<(), ThemeError> {
    self.tick(theme_dir, path);
    fs_ops::touch(path)
  }

  fn write(&self, theme_dir: &Path, path: &Path, contents: impl AsRef<[u8]>) -> Result<(), ThemeError> {
    self.tick(theme_dir, path);
    fs_ops::write_file(path, contents)
  }

  fn tick(&self, theme_dir: &Path, path: &Path) {
    let shown = path.strip_prefix(theme_dir).unwrap_or(path);
    debug!("-> {}", path.display());
    self.progress.set_message(shown.display().to_string());
    self.progress.inc(1);
  }
}

/// CLI entry point for `generate`.
pub fn run_generate(args: GenerateArgs, themes_dir: &Path) -> Result<(), ThemeError> {
  info!("Running generate command...");
  debug!("Args: {:?}, Themes Dir: {}", args, themes_dir.display());

  let request = ThemeRequest::new(args.theme_name.clone(), args.support_sass());

  let pb = ProgressBar::new_spinner();
  pb.set_style(
    ProgressStyle::default_spinner()
      .template("{spinner:.green} [{elapsed_precise}] {msg}")
      .unwrap_or_else(|_| ProgressStyle::default_spinner()),
  );
  pb.enable_steady_tick(Duration::from_millis(100));

  let generator = Generator::new(themes_dir).with_progress(pb.clone());
  let outcome = match generator.generate(&request) {
    Ok(outcome) => outcome,
    Err(e) => {
      pb.abandon_with_message("Generation aborted.");
      if let Some(path) = e.path() {
        error!("Generation stopped at '{}'; earlier files were left in place.", path.display());
      }
      return Err(e);
    }
  };

  info!("Theme written to '{}'", outcome.theme_dir.display());
  println!("{}", outcome.message);
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::BTreeSet;
  use std::fs;
  use tempfile::TempDir;
  use walkdir::WalkDir;

  fn generate(root: &Path, name: &str, sass: bool) -> Result<GenerateOutcome, ThemeError> {
    Generator::new(root).generate(&ThemeRequest::new(name, sass))
  }

  fn tree(dir: &Path) -> BTreeSet<String> {
    WalkDir::new(dir)
      .min_depth(1)
      .into_iter()
      .map(|entry| {
        let entry = entry.unwrap();
        let rel = entry.path().strip_prefix(dir).unwrap().to_string_lossy().replace('\\', "/");
        if entry.file_type().is_dir() {
          format!("{}/", rel)
        } else {
          rel
        }
      })
      .collect()
  }

  const BASE_TREE: &[&str] = &[
    "assets/",
    "assets/css/",
    "assets/css/style.css",
    "assets/images/",
    "assets/js/",
    "assets/js/my-theme.js",
    "functions.php",
    "package.json",
    "style.css",
    "template-parts/",
    "template-parts/footer.html",
    "template-parts/header.html",
    "template-parts/post-meta.html",
    "templates/",
    "templates/404.html",
    "templates/archive.html",
    "templates/index.html",
    "templates/search.html",
    "templates/single.html",
    "theme.json",
  ];

  #[test]
  fn slugged_directory_and_full_tree() {
    let dir = TempDir::new().unwrap();
    let outcome = generate(dir.path(), "My Theme", false).unwrap();

    assert_eq!(outcome.theme_dir, dir.path().join("my-theme"));
    assert_eq!(outcome.message, "Full Site Editing theme 'My Theme' generated");

    let expected: BTreeSet<String> = BASE_TREE.iter().map(|s| s.to_string()).collect();
    assert_eq!(tree(&outcome.theme_dir), expected);
  }

  #[test]
  fn absolute_name_stays_under_themes_root() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("themes");
    let outcome = generate(&root, "/abs name", false).unwrap();

    assert_eq!(outcome.theme_dir, root.join("abs-name"));
    assert!(root.join("abs-name/assets/js/abs-name.js").is_file());
    assert!(root.join("abs-name/package.json").is_file());
    assert_eq!(
      outcome.message,
      "Full Site Editing theme '/abs name' generated"
    );
  }

  #[test]
  fn creates_missing_themes_root() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("wp-content/themes");
    generate(&root, "demo", false).unwrap();
    assert!(root.join("demo/templates/index.html").is_file());
  }

  #[test]
  fn placeholders_are_empty_and_assets_have_content() {
    let dir = TempDir::new().unwrap();
    let theme = generate(dir.path(), "My Theme", false).unwrap().theme_dir;

    for file in TEMPLATE_FILES {
      assert_eq!(fs::read(theme.join("templates").join(file)).unwrap(), b"");
    }
    for file in TEMPLATE_PARTS {
      assert_eq!(fs::read(theme.join("template-parts").join(file)).unwrap(), b"");
    }
    assert_eq!(
      fs::read_to_string(theme.join("assets/js/my-theme.js")).unwrap(),
      "console.log('Hello from My Theme theme JS!');"
    );
    assert_eq!(
      fs::read_to_string(theme.join("assets/css/style.css")).unwrap(),
      "/* Styles for My Theme theme */"
    );
    let header = fs::read_to_string(theme.join("style.css")).unwrap();
    assert!(header.contains("Theme Name: My Theme"));
    assert!(header.contains("Text Domain: my-theme"));
  }

  #[test]
  fn rerun_keeps_templates_but_overwrites_content_files() {
    let dir = TempDir::new().unwrap();
    let theme = generate(dir.path(), "demo", false).unwrap().theme_dir;

    let index = theme.join("templates/index.html");
    let header = theme.join("template-parts/header.html");
    fs::write(&index, "<!-- wp:post-content /-->").unwrap();
    fs::write(&header, "<!-- wp:site-title /-->").unwrap();

    let js = theme.join("assets/js/demo.js");
    let css = theme.join("assets/css/style.css");
    let package = theme.join("package.json");
    let config = theme.join("theme.json");
    for path in [&js, &css, &package, &config] {
      fs::write(path, "edited").unwrap();
    }

    generate(dir.path(), "demo", false).unwrap();

    assert_eq!(fs::read_to_string(&index).unwrap(), "<!-- wp:post-content /-->");
    assert_eq!(fs::read_to_string(&header).unwrap(), "<!-- wp:site-title /-->");
    assert_eq!(
      fs::read_to_string(&js).unwrap(),
      "console.log('Hello from demo theme JS!');"
    );
    assert_eq!(fs::read_to_string(&css).unwrap(), "/* Styles for demo theme */");
    assert_ne!(fs::read_to_string(&package).unwrap(), "edited");
    assert_ne!(fs::read_to_string(&config).unwrap(), "edited");
  }

  #[test]
  fn no_sass_without_flag() {
    let dir = TempDir::new().unwrap();
    let theme = generate(dir.path(), "demo", false).unwrap().theme_dir;
    assert!(!theme.join("assets/sass").exists());
  }

  #[test]
  fn sass_scaffold_with_flag() {
    let dir = TempDir::new().unwrap();
    let outcome = generate(dir.path(), "demo", true).unwrap();
    assert_eq!(
      outcome.message,
      "Full Site Editing theme 'demo' generated with Sass support"
    );

    let sass = outcome.theme_dir.join("assets/sass");
    let files: Vec<_> = WalkDir::new(&sass)
      .into_iter()
      .filter_map(Result::ok)
      .filter(|e| e.file_type().is_file())
      .collect();
    assert_eq!(files.len(), 3);

    assert_eq!(
      fs::read_to_string(sass.join("global/_globals.scss")).unwrap(),
      "/* Initial global styles */"
    );
    assert_eq!(
      fs::read_to_string(sass.join("variables/_variables.scss")).unwrap(),
      "/* Variables for styles */"
    );
    assert_eq!(
      fs::read_to_string(sass.join("style.scss")).unwrap(),
      "@import 'variables/_variables';\n@import 'global/_globals';"
    );
  }

  #[test]
  fn package_json_mentions_theme_name() {
    let dir = TempDir::new().unwrap();
    let theme = generate(dir.path(), "demo", false).unwrap().theme_dir;
    let raw = fs::read_to_string(theme.join("package.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value["name"], "demo");
    assert_eq!(value["version"], "1.0.0");
    assert!(value["keywords"]
      .as_array()
      .unwrap()
      .iter()
      .any(|k| k == "demo"));
    assert_eq!(value["homepage"], "https://github.com/demo");
    assert_eq!(value["bugs"]["url"], "https://github.com/demo/issues");
    assert_eq!(value["rtlcssConfig"]["options"]["clean"], true);
  }

  #[test]
  fn theme_json_has_version_and_empty_sections() {
    let dir = TempDir::new().unwrap();
    let theme = generate(dir.path(), "demo", true).unwrap().theme_dir;
    let raw = fs::read_to_string(theme.join("theme.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value["version"], 2);
    assert_eq!(value["schema"], "https://schemas.wp.org/trunk/theme.json");
    assert!(value.get("$schema").is_none());
    for section in ["settings", "styles", "templateParts"] {
      assert_eq!(value[section], serde_json::json!([]), "{section} must be an empty array");
    }
  }

  #[test]
  fn failure_aborts_later_steps_and_names_path() {
    let dir = TempDir::new().unwrap();
    let theme = dir.path().join("demo");
    fs::create_dir_all(&theme).unwrap();
    // A plain file where the assets directory must go.
    fs::write(theme.join("assets"), "not a directory").unwrap();

    let err = generate(dir.path(), "demo", true).unwrap_err();
    assert!(matches!(err, ThemeError::Filesystem { .. }));
    assert_eq!(err.path(), Some(theme.join("assets").join("images").as_path()));
    assert!(err.to_string().contains("images"));

    // Steps before the failure ran, steps after it did not.
    assert!(theme.join("templates/index.html").is_file());
    assert!(theme.join("style.css").is_file());
    assert!(!theme.join("package.json").exists());
    assert!(!theme.join("theme.json").exists());
  }

  #[cfg(unix)]
  #[test]
  fn read_only_template_parts_aborts() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let parts = dir.path().join("demo/template-parts");
    fs::create_dir_all(&parts).unwrap();
    fs::set_permissions(&parts, fs::Permissions::from_mode(0o555)).unwrap();

    // Mode bits are not enforced for root.
    if fs::write(parts.join(".probe"), "").is_ok() {
      fs::set_permissions(&parts, fs::Permissions::from_mode(0o755)).unwrap();
      return;
    }

    let err = generate(dir.path(), "demo", false).unwrap_err();
    fs::set_permissions(&parts, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(err.path(), Some(parts.join("header.html").as_path()));
    assert!(!dir.path().join("demo/assets").exists());
  }
}
