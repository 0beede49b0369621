//! Loading locale files into ordered key-value maps
//!
//! A locale file is a flat UTF-8 JSON object mapping dotted keys
//! (`"ai.steps.title"`) to translation strings. Values that are not strings
//! (nested objects, arrays, numbers) are carried opaquely and never inspected.
//! The loader also keeps the raw file content, which the serializer needs for
//! indentation detection and the orchestrator needs for no-op detection.

use crate::error::{Result, SyncError};
use indexmap::IndexMap;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// One value in a locale file
///
/// Translation strings may contain `{{placeholder}}` tokens; they are plain
/// text to this tool and round-trip unchanged. Anything that is not a JSON
/// string is `Opaque` and is only ever copied whole.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationValue {
    /// A translation string
    Text(String),
    /// Any non-string JSON value, passed through untouched
    Opaque(Value),
}

impl TranslationValue {
    fn from_json(value: Value) -> Self {
        match value {
            Value::String(s) => Self::Text(s),
            other => Self::Opaque(other),
        }
    }

    /// Convert back to a JSON value for serialization
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Text(s) => Value::String(s.clone()),
            Self::Opaque(v) => v.clone(),
        }
    }
}

/// Insertion-ordered mapping from dotted key to value
pub type KeyValueMap = IndexMap<String, TranslationValue>;

/// A locale file loaded into memory
#[derive(Debug, Clone)]
pub struct LocaleFile {
    /// Path the file was loaded from
    pub path: PathBuf,
    /// Original byte content, verbatim
    pub raw: String,
    /// Parsed entries in file order
    pub entries: KeyValueMap,
}

impl LocaleFile {
    /// Load and parse a single locale file
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::NotFound`] if the path does not exist,
    /// [`SyncError::MalformedInput`] if the content is not valid JSON, and
    /// [`SyncError::NotAnObject`] if the top-level value is not an object.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SyncError::NotFound(path.to_path_buf()));
        }

        let raw = std::fs::read_to_string(path)?;
        let parsed: Value =
            serde_json::from_str(&raw).map_err(|source| SyncError::MalformedInput {
                path: path.to_path_buf(),
                source,
            })?;

        let Value::Object(map) = parsed else {
            return Err(SyncError::NotAnObject(path.to_path_buf()));
        };

        let entries = map
            .into_iter()
            .map(|(k, v)| (k, TranslationValue::from_json(v)))
            .collect();

        Ok(Self {
            path: path.to_path_buf(),
            raw,
            entries,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn load_preserves_key_order() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "common.json",
            r#"{"z.last": "Z", "a.first": "A", "m.middle": "M"}"#,
        );

        let file = LocaleFile::load(&path).unwrap();
        let keys: Vec<_> = file.entries.keys().cloned().collect();
        assert_eq!(keys, ["z.last", "a.first", "m.middle"]);
    }

    #[test]
    fn load_keeps_placeholder_tokens_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "common.json", r#"{"greet": "Hello {{name}}!"}"#);

        let file = LocaleFile::load(&path).unwrap();
        assert_eq!(
            file.entries["greet"],
            TranslationValue::Text("Hello {{name}}!".to_string())
        );
    }

    #[test]
    fn load_passes_nested_values_through_opaquely() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "common.json", r#"{"nested": {"a": 1, "b": [2, 3]}}"#);

        let file = LocaleFile::load(&path).unwrap();
        match &file.entries["nested"] {
            TranslationValue::Opaque(v) => assert!(v.is_object()),
            TranslationValue::Text(_) => panic!("nested object should be opaque"),
        }
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = LocaleFile::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SyncError::NotFound(_)));
    }

    #[test]
    fn load_invalid_json_is_malformed_input() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "bad.json", r#"{"a": "b",}"#);
        let err = LocaleFile::load(&path).unwrap_err();
        assert!(matches!(err, SyncError::MalformedInput { .. }));
    }

    #[test]
    fn load_top_level_array_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "arr.json", r#"["a", "b"]"#);
        let err = LocaleFile::load(&path).unwrap_err();
        assert!(matches!(err, SyncError::NotAnObject(_)));
    }
}
