// src/content.rs
//! Text bodies for the files a theme scaffold contains. Nothing in here touches
//! the filesystem.
use crate::manifest::{THEME_AUTHOR, THEME_DESCRIPTION, THEME_LICENSE, THEME_VERSION};

/// Block templates created empty under `templates/`.
pub const TEMPLATE_FILES: &[&str] = &[
  "single.html",
  "archive.html",
  "404.html",
  "search.html",
  "index.html",
];

/// Template parts created empty under `template-parts/`.
pub const TEMPLATE_PARTS: &[&str] = &["header.html", "footer.html", "post-meta.html"];

pub const TEMPLATES_DIR: &str = "templates";
pub const TEMPLATE_PARTS_DIR: &str = "template-parts";

pub const SASS_GLOBALS: &str = "/* Initial global styles */";
pub const SASS_VARIABLES: &str = "/* Variables for styles */";
pub const SASS_STYLE_ENTRY: &str = "@import 'variables/_variables';\n@import 'global/_globals';";

/// Metadata block WordPress reads from the theme's root `style.css`.
pub fn style_css_header(theme_name: &str, slug: &str) -> String {
  format!(
    "/*\n\
     Theme Name: {theme_name}\n\
     Author: {THEME_AUTHOR}\n\
     Description: {THEME_DESCRIPTION}\n\
     Version: {THEME_VERSION}\n\
     License: {THEME_LICENSE}\n\
     Text Domain: {slug}\n\
     */\n"
  )
}

/// `functions.php`: the direct-access guard plus an enqueue of the theme script.
pub fn functions_php(theme_name: &str, slug: &str) -> String {
  format!(
    "<?php\n\
     /**\n \
     * {theme_name} theme functions.\n \
     */\n\
     \n\
     if ( ! defined( 'ABSPATH' ) ) {{\n\
     \texit;\n\
     }}\n\
     \n\
     add_action( 'wp_enqueue_scripts', function () {{\n\
     \twp_enqueue_script( '{slug}', get_template_directory_uri() . '/assets/js/{slug}.js', array(), '{THEME_VERSION}', true );\n\
     }} );\n"
  )
}

pub fn script_asset_name(slug: &str) -> String {
  format!("{}.js", slug)
}

pub fn script_asset(theme_name: &str) -> String {
  format!("console.log('Hello from {} theme JS!');", theme_name)
}

pub fn stylesheet_asset(theme_name: &str) -> String {
  format!("/* Styles for {} theme */", theme_name)
}

pub fn success_message(theme_name: &str, support_sass: bool) -> String {
  let mut message = format!("Full Site Editing theme '{}' generated", theme_name);
  if support_sass {
    message.push_str(" with Sass support");
  }
  message
}
