//! locsync: locale key synchronization engine
//!
//! This library keeps a family of per-locale JSON translation files mutually
//! consistent in key coverage. Every key in a designated reference locale is
//! backfilled into the other locales' files with the reference value as a
//! placeholder; existing translations are never overwritten, and each file
//! keeps its own indentation convention when rewritten.

pub mod cli;
pub mod diff;
pub mod error;
pub mod format;
pub mod merge;
pub mod reference;
pub mod report;
pub mod store;
pub mod sync;

// Re-export commonly used types
pub use error::{Result, SyncError};
pub use format::IndentStyle;
pub use store::{KeyValueMap, LocaleFile, TranslationValue};
pub use sync::{sync_locales, FileOutcome, SyncConfig, SyncReport};
