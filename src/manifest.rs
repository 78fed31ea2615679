// src/manifest.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const THEME_VERSION: &str = "1.0.0";
pub const THEME_DESCRIPTION: &str = "Your theme Description";
pub const THEME_AUTHOR: &str = "Hilay Trivedi";
pub const THEME_LICENSE: &str = "MIT";
pub const THEME_JSON_SCHEMA: &str = "https://schemas.wp.org/trunk/theme.json";
pub const THEME_JSON_VERSION: u32 = 2;

/// The theme's `package.json`. Everything except the name-derived fields is fixed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
  pub name: String,
  pub version: String,
  pub description: String,
  pub author: String,
  pub license: String,
  pub keywords: Vec<String>,
  pub homepage: String,
  pub bugs: Bugs,
  pub dev_dependencies: DevDependencies,
  pub rtlcss_config: RtlcssConfig,
  pub scripts: Scripts,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Bugs {
  pub url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DevDependencies {
  #[serde(rename = "@wordpress/i18n")]
  pub wordpress_i18n: String,
  #[serde(rename = "dir-archiver")]
  pub dir_archiver: String,
  #[serde(rename = "node-sass")]
  pub node_sass: String,
  #[serde(rename = "npm-run-all")]
  pub npm_run_all: String,
  pub rtlcss: String,
}

impl Default for DevDependencies {
  fn default() -> Self {
    DevDependencies {
      wordpress_i18n: "^4.37.0".to_string(),
      dir_archiver: "^1.1.1".to_string(),
      node_sass: "^7.0.1".to_string(),
      npm_run_all: "^4.1.5".to_string(),
      rtlcss: "^3.5.0".to_string(),
    }
  }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct RtlcssConfig {
  pub options: RtlcssOptions,
  pub plugins: Vec<Value>,
  pub map: bool,
}

/// rtlcss rename options; every switch is off except `clean`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RtlcssOptions {
  pub auto_rename: bool,
  pub auto_rename_strict: bool,
  pub blacklist: Vec<Value>,
  pub clean: bool,
  pub greedy: bool,
  pub process_urls: bool,
  pub string_map: Vec<Value>,
}

impl Default for RtlcssOptions {
  fn default() -> Self {
    RtlcssOptions {
      auto_rename: false,
      auto_rename_strict: false,
      blacklist: Vec::new(),
      clean: true,
      greedy: false,
      process_urls: false,
      string_map: Vec::new(),
    }
  }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Scripts {
  pub watch: String,
  #[serde(rename = "compile:css")]
  pub compile_css: String,
  #[serde(rename = "compile:rtl")]
  pub compile_rtl: String,
  #[serde(rename = "lint:scss")]
  pub lint_scss: String,
  #[serde(rename = "lint:js")]
  pub lint_js: String,
  pub bundle: String,
  pub build: String,
}

impl Default for Scripts {
  fn default() -> Self {
    Scripts {
      watch: "node-sass assets/sass/ -o ./ --source-map true --output-style expanded --indent-type tab --indent-width 1 -w".to_string(),
      compile_css: "node-sass sass/ -o ./ && stylelint '*.css' --fix || true && stylelint '*.css' --fix".to_string(),
      compile_rtl: "rtlcss style.css style-rtl.css".to_string(),
      lint_scss: "wp-scripts lint-style 'sass/**/*.scss'".to_string(),
      lint_js: "wp-scripts lint-js 'js/*.js'".to_string(),
      bundle: "dir-archiver --src . --dest ../_s.zip --exclude .DS_Store .stylelintrc.json .eslintrc .git .gitattributes .github .gitignore README.md composer.json composer.lock node_modules vendor package-lock.json package.json .travis.yml phpcs.xml.dist sass style.css.map yarn.lock".to_string(),
      build: "npm-run-all --sequential build:**".to_string(),
    }
  }
}

impl PackageManifest {
  /// Builds the manifest for a theme. `theme_name` is used verbatim, not slugged.
  pub fn for_theme(theme_name: &str) -> Self {
    PackageManifest {
      name: theme_name.to_string(),
      version: THEME_VERSION.to_string(),
      description: THEME_DESCRIPTION.to_string(),
      author: THEME_AUTHOR.to_string(),
      license: THEME_LICENSE.to_string(),
      keywords: vec![
        "WordPress".to_string(),
        "FSE".to_string(),
        theme_name.to_string(),
      ],
      homepage: format!("https://github.com/{}", theme_name),
      bugs: Bugs {
        url: format!("https://github.com/{}/issues", theme_name),
      },
      dev_dependencies: DevDependencies::default(),
      rtlcss_config: RtlcssConfig::default(),
      scripts: Scripts::default(),
    }
  }
}

/// The block theme `theme.json`. The three sections are left for the theme
/// author to fill in and are written as `[]`, like PHP's empty arrays.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
  pub schema: String,
  pub version: u32,
  pub settings: Vec<Value>,
  pub styles: Vec<Value>,
  pub template_parts: Vec<Value>,
}

impl Default for ThemeConfig {
  fn default() -> Self {
    ThemeConfig {
      schema: THEME_JSON_SCHEMA.to_string(),
      version: THEME_JSON_VERSION,
      settings: Vec::new(),
      styles: Vec::new(),
      template_parts: Vec::new(),
    }
  }
}

/// The handful of `package.json` fields `list` cares about. Lenient on purpose:
/// theme authors edit this file.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ManifestSummary {
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub version: String,
}
