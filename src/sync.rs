//! Batch synchronization across all locale directories
//!
//! The orchestrator walks every locale directory under the root (skipping
//! the reference locale and hidden entries) and runs the per-file pipeline:
//! load, diff against the reference, insert-only merge, and a
//! format-preserving rewrite. A failure in one file is recorded and never
//! stops the rest of the run; only a missing reference file aborts.
//!
//! Per-file lifecycle: loaded, then either up to date (left byte-identical
//! on disk) or merged and rewritten once. Load and parse failures are
//! terminal for that file only.

use crate::diff::{missing_keys, missing_keys_in_subset};
use crate::error::{Result, SyncError};
use crate::format::{self, IndentStyle};
use crate::merge::apply_missing;
use crate::reference::ReferenceSet;
use crate::store::{KeyValueMap, LocaleFile};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Configuration for one synchronization run
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Root directory containing one subdirectory per locale
    pub root: PathBuf,
    /// Locale whose files are authoritative
    pub reference: String,
    /// Filenames to synchronize in every locale
    pub filenames: Vec<String>,
    /// Restrict the run to these keys (None = all reference keys)
    pub key_subset: Option<Vec<String>>,
    /// Compute and report, but write nothing
    pub dry_run: bool,
}

/// What happened to one (locale, filename) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Keys were added and the file was rewritten
    Added(usize),
    /// Dry run: keys would have been added
    WouldAdd(usize),
    /// Every reference key was already present; file untouched
    UpToDate,
    /// Target file does not exist; skipped
    SkippedMissing,
    /// Load, parse, or write failure; other files unaffected
    Failed(String),
}

/// Report entry for one (locale, filename) pair
#[derive(Debug, Clone)]
pub struct FileReport {
    /// Locale the file belongs to
    pub locale: String,
    /// Configured filename
    pub filename: String,
    /// Result for this file
    pub outcome: FileOutcome,
}

/// Aggregated result of a full run
#[derive(Debug, Clone)]
pub struct SyncReport {
    /// One entry per (locale, filename) attempted, in processing order
    pub entries: Vec<FileReport>,
    /// Wall-clock duration of the run
    pub duration: Duration,
    /// Whether this was a dry run
    pub dry_run: bool,
}

impl SyncReport {
    /// Total keys added (or, in a dry run, that would be added)
    #[must_use]
    pub fn total_added(&self) -> usize {
        self.entries
            .iter()
            .map(|e| match e.outcome {
                FileOutcome::Added(n) | FileOutcome::WouldAdd(n) => n,
                _ => 0,
            })
            .sum()
    }

    /// Keys added for one configured filename across all locales
    #[must_use]
    pub fn added_for(&self, filename: &str) -> usize {
        self.entries
            .iter()
            .filter(|e| e.filename == filename)
            .map(|e| match e.outcome {
                FileOutcome::Added(n) | FileOutcome::WouldAdd(n) => n,
                _ => 0,
            })
            .sum()
    }

    /// Number of distinct locales that had at least one key added
    #[must_use]
    pub fn locales_changed(&self) -> usize {
        let mut changed: Vec<&str> = self
            .entries
            .iter()
            .filter(|e| matches!(e.outcome, FileOutcome::Added(n) | FileOutcome::WouldAdd(n) if n > 0))
            .map(|e| e.locale.as_str())
            .collect();
        changed.sort_unstable();
        changed.dedup();
        changed.len()
    }

    /// Number of per-file errors recorded during the run
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, FileOutcome::Failed(_)))
            .count()
    }
}

/// Run a full synchronization pass over every locale directory
///
/// # Errors
///
/// Returns [`SyncError::MissingReference`] (or a reference parse error) when
/// the authoritative key set cannot be loaded. Per-locale failures do not
/// surface here; they are recorded in the report.
pub fn sync_locales(config: &SyncConfig) -> Result<SyncReport> {
    let start = Instant::now();

    let reference = ReferenceSet::load(&config.root, &config.reference, &config.filenames)?;
    let locales = target_locales(&config.root, &config.reference)?;
    info!(
        "Synchronizing {} locales against reference '{}'",
        locales.len(),
        config.reference
    );

    let mut entries = Vec::with_capacity(locales.len() * config.filenames.len());
    for filename in &config.filenames {
        let Some(ref_map) = reference.files.get(filename) else {
            continue;
        };
        debug!("Processing {} ({} reference keys)", filename, ref_map.len());

        for locale in &locales {
            let path = config.root.join(locale).join(filename);
            let outcome = sync_one_file(&path, ref_map, config);

            match &outcome {
                FileOutcome::Added(n) => info!("{locale}/{filename}: added {n} keys"),
                FileOutcome::WouldAdd(n) => info!("{locale}/{filename}: would add {n} keys"),
                FileOutcome::UpToDate => debug!("{locale}/{filename}: up to date"),
                FileOutcome::SkippedMissing => {
                    warn!("{locale}/{filename}: not found, skipped");
                }
                FileOutcome::Failed(msg) => error!("{locale}/{filename}: {msg}"),
            }

            entries.push(FileReport {
                locale: locale.clone(),
                filename: filename.clone(),
                outcome,
            });
        }
    }

    let report = SyncReport {
        entries,
        duration: start.elapsed(),
        dry_run: config.dry_run,
    };
    info!(
        "Run finished in {:?}: {} keys added, {} errors",
        report.duration,
        report.total_added(),
        report.error_count()
    );
    Ok(report)
}

/// Sorted locale directories under the root, excluding the reference locale
/// and hidden entries
fn target_locales(root: &Path, reference: &str) -> Result<Vec<String>> {
    let mut locales = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            warn!("Skipping non-UTF-8 directory name under {}", root.display());
            continue;
        };
        if name == reference || name.starts_with('.') {
            continue;
        }
        locales.push(name);
    }
    locales.sort_unstable();
    Ok(locales)
}

/// The per-file pipeline: load, diff, merge, rewrite
///
/// All failures are converted into a [`FileOutcome`]; nothing propagates.
fn sync_one_file(path: &Path, ref_map: &KeyValueMap, config: &SyncConfig) -> FileOutcome {
    let mut file = match LocaleFile::load(path) {
        Ok(file) => file,
        Err(SyncError::NotFound(_)) => return FileOutcome::SkippedMissing,
        Err(e) => return FileOutcome::Failed(e.to_string()),
    };

    let missing = match &config.key_subset {
        Some(subset) => missing_keys_in_subset(ref_map, &file.entries, subset),
        None => missing_keys(ref_map, &file.entries),
    };
    if missing.is_empty() {
        return FileOutcome::UpToDate;
    }

    if config.dry_run {
        return FileOutcome::WouldAdd(missing.len());
    }

    let style = IndentStyle::detect(&file.raw);
    let outcome = apply_missing(&mut file.entries, &missing, ref_map);

    let content = match format::emit(&file.entries, style) {
        Ok(content) => content,
        Err(e) => return FileOutcome::Failed(e.to_string()),
    };
    if let Err(e) = std::fs::write(path, content) {
        return FileOutcome::Failed(format!("write failed: {e}"));
    }

    FileOutcome::Added(outcome.added)
}
