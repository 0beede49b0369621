//! Human-readable report rendering
//!
//! The report always lists every (locale, file) pair that was attempted,
//! with an explicit status per entry, so nothing has to be inferred from
//! missing output.

use crate::sync::{FileOutcome, SyncReport};
use std::io::Write;

/// Human-readable name for a locale code
///
/// Unknown codes fall through to the code itself, so new locale directories
/// never require a code change to sync.
#[must_use]
pub fn display_name(code: &str) -> &str {
    match code {
        "az" => "Azerbaijani",
        "de" => "German",
        "en" => "English",
        "es" => "Spanish",
        "fa" => "Persian",
        "fr" => "French",
        "id" => "Indonesian",
        "it" => "Italian",
        "ja" => "Japanese",
        "ko" => "Korean",
        "kz" => "Kazakh",
        "ml" => "Malayalam",
        "nl" => "Dutch",
        "no" => "Norwegian",
        "pl" => "Polish",
        "pt-br" => "Brazilian Portuguese",
        "ru" => "Russian",
        "tr" => "Turkish",
        "uk" => "Ukrainian",
        "zh-Hans" => "Simplified Chinese",
        "zh-Hant" => "Traditional Chinese",
        other => other,
    }
}

/// Render the full per-file report plus summary totals
#[must_use]
pub fn render(report: &SyncReport, filenames: &[String]) -> String {
    let mut out = String::new();
    let verb = if report.dry_run { "would add" } else { "added" };

    let mut current_file = "";
    for entry in &report.entries {
        if entry.filename != current_file {
            current_file = &entry.filename;
            out.push_str(&format!("\n=== {current_file} ===\n"));
        }

        let name = display_name(&entry.locale);
        let line = match &entry.outcome {
            FileOutcome::Added(n) | FileOutcome::WouldAdd(n) => {
                format!("  {name} ({}): {verb} {n} keys", entry.locale)
            }
            FileOutcome::UpToDate => {
                format!("  {name} ({}): no changes needed", entry.locale)
            }
            FileOutcome::SkippedMissing => {
                format!("  {name} ({}): file not found, skipped", entry.locale)
            }
            FileOutcome::Failed(msg) => {
                format!("  {name} ({}): error: {msg}", entry.locale)
            }
        };
        out.push_str(&line);
        out.push('\n');
    }

    out.push_str("\nSummary:\n");
    for filename in filenames {
        out.push_str(&format!(
            "  {filename}: {verb} {} keys\n",
            report.added_for(filename)
        ));
    }
    out.push_str(&format!(
        "  Total: {verb} {} keys across {} locales",
        report.total_added(),
        report.locales_changed()
    ));
    if report.error_count() > 0 {
        out.push_str(&format!(", {} errors", report.error_count()));
    }
    out.push('\n');

    out
}

/// Print the report to a writer (stdout in the binary)
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn print<W: Write>(writer: &mut W, report: &SyncReport, filenames: &[String]) -> std::io::Result<()> {
    writer.write_all(render(report, filenames).as_bytes())
}
