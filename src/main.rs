//! locsync: locale key synchronization utility
//!
//! Backfills missing translation keys across per-locale JSON files, using a
//! reference locale (usually `en`) as the authoritative key set.

use anyhow::{Context, Result};
use clap::Parser;
use locsync::cli::Args;
use locsync::{report, sync};
use tracing::{info, Level};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging based on verbosity and quiet mode
    if args.quiet {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::ERROR)
            .with_target(false)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(match args.verbose {
                0 => Level::WARN,
                1 => Level::INFO,
                2 => Level::DEBUG,
                _ => Level::TRACE,
            })
            .with_target(false)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    args.validate().context("Invalid arguments")?;
    let config = args.to_config()?;

    if !args.quiet {
        info!("Starting locsync v{}", env!("CARGO_PKG_VERSION"));
        info!("Root: {}", config.root.display());
        info!("Reference locale: {}", config.reference);
        info!("Files: {}", config.filenames.join(", "));
        if config.dry_run {
            info!("Dry run: no files will be written");
        }
    }

    // A missing reference file is the only fatal condition; everything else
    // lands in the report.
    let result = sync::sync_locales(&config).context("Synchronization aborted")?;

    if !args.quiet {
        report::print(&mut std::io::stdout(), &result, &config.filenames)?;
    }

    Ok(())
}
