//! Loading the reference locale as the authoritative key source

use crate::error::{Result, SyncError};
use crate::store::{KeyValueMap, LocaleFile};
use indexmap::IndexMap;
use std::path::Path;
use tracing::info;

/// The reference locale's maps, one per configured filename
///
/// Synchronization cannot proceed without every configured reference file:
/// a missing one is a fatal [`SyncError::MissingReference`], not a skip.
#[derive(Debug)]
pub struct ReferenceSet {
    /// Locale code the reference was loaded from
    pub locale: String,
    /// Filename → authoritative key-value map
    pub files: IndexMap<String, KeyValueMap>,
}

impl ReferenceSet {
    /// Load every configured filename from the reference locale directory
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::MissingReference`] if any configured file is
    /// absent, or a parse error if one cannot be read as a JSON object.
    /// Both abort the whole run.
    pub fn load(root: &Path, locale: &str, filenames: &[String]) -> Result<Self> {
        let mut files = IndexMap::new();
        for filename in filenames {
            let path = root.join(locale).join(filename);
            let file = LocaleFile::load(&path).map_err(|e| match e {
                SyncError::NotFound(path) => SyncError::MissingReference(path),
                other => other,
            })?;
            info!(
                "Loaded reference {}/{} ({} keys)",
                locale,
                filename,
                file.entries.len()
            );
            files.insert(filename.clone(), file.entries);
        }

        Ok(Self {
            locale: locale.to_string(),
            files,
        })
    }
}
