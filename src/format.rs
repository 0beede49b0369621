//! Indentation detection and format-preserving JSON emission
//!
//! Every locale file keeps its own indentation convention: a file that was
//! tab-indented before a sync must still be tab-indented after it. The style
//! is detected from the file's original bytes, never assumed and never taken
//! from the reference locale.
//!
//! Detection is best-effort: a tab anywhere in the first 100 bytes wins,
//! otherwise the space width is read off the first indented line (4 when the
//! file has no indented lines at all, e.g. a compact `{}`).

use crate::error::Result;
use crate::store::KeyValueMap;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

/// Number of leading bytes inspected for the tab heuristic
const DETECT_PREFIX_LEN: usize = 100;

/// Default indentation when a file carries no detectable indent
const DEFAULT_SPACE_WIDTH: usize = 4;

/// The whitespace convention of one file on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentStyle {
    /// One tab per nesting level
    Tab,
    /// A fixed number of spaces per nesting level
    Spaces(usize),
}

impl IndentStyle {
    /// Detect the indentation style of the original file content
    #[must_use]
    pub fn detect(raw: &str) -> Self {
        let prefix_len = raw.len().min(DETECT_PREFIX_LEN);
        if raw.as_bytes()[..prefix_len].contains(&b'\t') {
            return Self::Tab;
        }

        for line in raw.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let width = line.len() - line.trim_start_matches(' ').len();
            if width > 0 {
                return Self::Spaces(width);
            }
        }

        Self::Spaces(DEFAULT_SPACE_WIDTH)
    }

    /// The indent unit for one nesting level
    #[must_use]
    pub fn unit(&self) -> String {
        match self {
            Self::Tab => "\t".to_string(),
            Self::Spaces(width) => " ".repeat(*width),
        }
    }
}

/// Serialize a full key-value map in the given indentation style
///
/// Non-ASCII characters are written literally (serde_json does not escape
/// them), and the output ends with exactly one trailing newline. Every entry
/// of the map is re-emitted; opaque values keep their structure intact.
///
/// # Errors
///
/// Returns an error if serialization fails, which for an in-memory buffer
/// only happens on malformed data and is not expected in practice.
pub fn emit(entries: &KeyValueMap, style: IndentStyle) -> Result<String> {
    let indent = style.unit();
    let map: serde_json::Map<String, Value> = entries
        .iter()
        .map(|(key, value)| (key.clone(), value.to_json()))
        .collect();

    let mut buf = Vec::with_capacity(1024);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    Value::Object(map)
        .serialize(&mut serializer)
        .map_err(std::io::Error::from)?;
    buf.push(b'\n');

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::store::TranslationValue;

    fn map_of(pairs: &[(&str, &str)]) -> KeyValueMap {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), TranslationValue::Text((*v).to_string())))
            .collect()
    }

    #[test]
    fn detect_tab_in_prefix() {
        assert_eq!(IndentStyle::detect("{\n\t\"a\": \"b\"\n}\n"), IndentStyle::Tab);
    }

    #[test]
    fn detect_two_space_width() {
        assert_eq!(
            IndentStyle::detect("{\n  \"a\": \"b\"\n}\n"),
            IndentStyle::Spaces(2)
        );
    }

    #[test]
    fn detect_defaults_to_four_spaces_for_compact_content() {
        assert_eq!(IndentStyle::detect("{}"), IndentStyle::Spaces(4));
        assert_eq!(IndentStyle::detect(""), IndentStyle::Spaces(4));
    }

    #[test]
    fn detect_ignores_tab_past_prefix() {
        // Tab only appears deep in the file; the prefix is space-indented.
        let mut raw = String::from("{\n    \"a\": \"b\",\n");
        raw.push_str(&"    \"k\": \"v\",\n".repeat(10));
        raw.push_str("\t\"z\": \"y\"\n}\n");
        assert_eq!(IndentStyle::detect(&raw), IndentStyle::Spaces(4));
    }

    #[test]
    fn emit_uses_tabs_when_detected() {
        let out = emit(&map_of(&[("a.b", "Hello")]), IndentStyle::Tab).unwrap();
        assert_eq!(out, "{\n\t\"a.b\": \"Hello\"\n}\n");
    }

    #[test]
    fn emit_uses_detected_space_width() {
        let out = emit(&map_of(&[("a.b", "Hello")]), IndentStyle::Spaces(2)).unwrap();
        assert_eq!(out, "{\n  \"a.b\": \"Hello\"\n}\n");
    }

    #[test]
    fn emit_keeps_non_ascii_literal() {
        let out = emit(&map_of(&[("greeting", "こんにちは")]), IndentStyle::Spaces(4)).unwrap();
        assert!(out.contains("こんにちは"));
        assert!(!out.contains("\\u"));
    }

    #[test]
    fn emit_keeps_placeholder_tokens() {
        let out = emit(&map_of(&[("greet", "Hi {{name}}")]), IndentStyle::Spaces(4)).unwrap();
        assert!(out.contains("Hi {{name}}"));
    }

    #[test]
    fn emit_ends_with_single_newline() {
        let out = emit(&map_of(&[("a", "b")]), IndentStyle::Tab).unwrap();
        assert!(out.ends_with("\"\n}\n"));
        assert!(!out.ends_with("\n\n"));
    }

    #[test]
    fn emit_preserves_opaque_values() {
        let mut entries = KeyValueMap::new();
        entries.insert(
            "nested".to_string(),
            TranslationValue::Opaque(serde_json::json!({"x": [1, 2]})),
        );
        let out = emit(&entries, IndentStyle::Spaces(2)).unwrap();
        let round: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(round["nested"]["x"][1], 2);
    }
}
