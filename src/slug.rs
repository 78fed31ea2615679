// src/slug.rs

/// Derives the directory slug from a theme name: every space becomes a hyphen
/// and ASCII letters are lowercased. Nothing else is touched, so punctuation,
/// tabs, slashes, repeated spaces and non-ASCII letters survive as-is.
pub fn slugify(raw_name: &str) -> String {
  raw_name.replace(' ', "-").to_ascii_lowercase()
}
