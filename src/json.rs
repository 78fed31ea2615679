// src/json.rs
//! JSON output that matches PHP's `json_encode($value, JSON_PRETTY_PRINT)`.
//!
//! Downstream tooling reads the generated `package.json`, so the bytes need to
//! line up with what the WP-CLI command has always written: four-space
//! indentation, escaped forward slashes and `\uXXXX` escapes for anything
//! outside ASCII. No trailing newline is emitted.
use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};

pub struct PhpPrettyFormatter<'a> {
  inner: PrettyFormatter<'a>,
}

impl<'a> PhpPrettyFormatter<'a> {
  pub fn new() -> Self {
    PhpPrettyFormatter {
      inner: PrettyFormatter::with_indent(b"    "),
    }
  }
}

impl<'a> Default for PhpPrettyFormatter<'a> {
  fn default() -> Self {
    Self::new()
  }
}

impl<'a> Formatter for PhpPrettyFormatter<'a> {
  fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
    self.inner.begin_array(writer)
  }

  fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
    self.inner.end_array(writer)
  }

  fn begin_array_value<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
    self.inner.begin_array_value(writer, first)
  }

  fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
    self.inner.end_array_value(writer)
  }

  fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
    self.inner.begin_object(writer)
  }

  fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
    self.inner.end_object(writer)
  }

  fn begin_object_key<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
    self.inner.begin_object_key(writer, first)
  }

  fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
    self.inner.begin_object_value(writer)
  }

  fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
    self.inner.end_object_value(writer)
  }

  // serde_json already escapes quotes, backslashes and control characters
  // before handing us the unescaped runs in between.
  fn write_string_fragment<W: ?Sized + Write>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()> {
    let mut start = 0;
    for (idx, ch) in fragment.char_indices() {
      if ch != '/' && ch.is_ascii() {
        continue;
      }
      writer.write_all(fragment[start..idx].as_bytes())?;
      if ch == '/' {
        writer.write_all(b"\\/")?;
      } else {
        let mut units = [0u16; 2];
        for unit in ch.encode_utf16(&mut units) {
          write!(writer, "\\u{:04x}", unit)?;
        }
      }
      start = idx + ch.len_utf8();
    }
    writer.write_all(fragment[start..].as_bytes())
  }
}

/// Serializes `value` the way PHP's pretty printer would.
pub fn to_php_pretty_vec<T: ?Sized + Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
  let mut out = Vec::with_capacity(256);
  let mut ser = serde_json::Serializer::with_formatter(&mut out, PhpPrettyFormatter::new());
  value.serialize(&mut ser)?;
  Ok(out)
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn render(value: &serde_json::Value) -> String {
    String::from_utf8(to_php_pretty_vec(value).unwrap()).unwrap()
  }

  #[test]
  fn escapes_slashes() {
    assert_eq!(
      render(&json!("https://github.com/demo")),
      r#""https:\/\/github.com\/demo""#
    );
  }

  #[test]
  fn escapes_non_ascii_as_utf16() {
    assert_eq!(render(&json!("é")), r#""\u00e9""#);
    // Outside the BMP PHP writes a surrogate pair.
    assert_eq!(render(&json!("🎨")), r#""\ud83c\udfa8""#);
  }

  #[test]
  fn keeps_serde_escapes() {
    assert_eq!(render(&json!("a\"b\\c\nd")), r#""a\"b\\c\nd""#);
  }

  #[test]
  fn four_space_indent_and_empty_containers() {
    let value = json!({ "a": [], "b": {}, "c": [1, 2] });
    assert_eq!(
      render(&value),
      "{\n    \"a\": [],\n    \"b\": {},\n    \"c\": [\n        1,\n        2\n    ]\n}"
    );
  }
}
