//! Command-line interface definitions

use crate::sync::SyncConfig;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Backfill missing translation keys from a reference locale
///
/// Walks every locale directory under the root and adds any key present in
/// the reference locale but missing from a target file, using the reference
/// value as a placeholder. Existing translations are never modified.
#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
pub struct Args {
    /// Locales root directory (positional or --root)
    ///
    /// Contains one subdirectory per locale code, e.g. `en/`, `fr/`,
    /// `zh-Hans/`, each holding the configured JSON files.
    #[arg(value_name = "ROOT")]
    pub root_positional: Option<PathBuf>,

    /// Locales root directory (alternative to positional arg)
    #[arg(long, conflicts_with = "root_positional")]
    pub root: Option<PathBuf>,

    /// Reference locale whose files are authoritative
    #[arg(short = 'r', long, default_value = "en")]
    pub reference: String,

    /// Filename to synchronize (repeatable)
    #[arg(short = 'f', long = "file", value_name = "NAME",
          default_values_t = [String::from("common.json"), String::from("settings.json")])]
    pub files: Vec<String>,

    /// Only reconcile this key (repeatable; default: all reference keys)
    #[arg(short = 'k', long = "key", value_name = "KEY")]
    pub keys: Vec<String>,

    /// Show what would be added without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress all output except errors)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Get the locales root (from positional or flag)
    ///
    /// # Errors
    ///
    /// Returns an error if the root is not specified
    pub fn get_root(&self) -> Result<PathBuf> {
        if let Some(ref root) = self.root_positional {
            Ok(root.clone())
        } else if let Some(ref root) = self.root {
            Ok(root.clone())
        } else {
            anyhow::bail!("Locales root must be specified (positional or --root)")
        }
    }

    /// Validate command-line arguments
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The root is not specified or is not an existing directory
    /// - The reference locale name is empty or hidden
    /// - No filenames are configured
    /// - Both --quiet and --verbose options are used
    pub fn validate(&self) -> Result<()> {
        let root = self.get_root()?;
        if !root.is_dir() {
            anyhow::bail!("Locales root is not a directory: {}", root.display());
        }

        if self.reference.is_empty() || self.reference.starts_with('.') {
            anyhow::bail!("Invalid reference locale: {:?}", self.reference);
        }

        if self.files.is_empty() {
            anyhow::bail!("At least one --file is required");
        }

        if self.quiet && self.verbose > 0 {
            anyhow::bail!("Cannot use both --quiet and --verbose options");
        }

        Ok(())
    }

    /// Build the sync configuration from validated arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the root is not specified
    pub fn to_config(&self) -> Result<SyncConfig> {
        Ok(SyncConfig {
            root: self.get_root()?,
            reference: self.reference.clone(),
            filenames: self.files.clone(),
            key_subset: if self.keys.is_empty() {
                None
            } else {
                Some(self.keys.clone())
            },
            dry_run: self.dry_run,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use tempfile::TempDir;

    fn args_for(root: Option<PathBuf>) -> Args {
        Args {
            root_positional: root,
            root: None,
            reference: "en".to_string(),
            files: vec!["common.json".to_string()],
            keys: Vec::new(),
            dry_run: false,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn validate_accepts_existing_directory() {
        let dir = TempDir::new().unwrap();
        let args = args_for(Some(dir.path().to_path_buf()));
        assert!(args.validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_root() {
        let args = args_for(None);
        assert!(args.validate().is_err());
    }

    #[test]
    fn validate_rejects_nonexistent_root() {
        let args = args_for(Some(PathBuf::from("/nonexistent/locales")));
        assert!(args.validate().is_err());
    }

    #[test]
    fn validate_rejects_quiet_with_verbose() {
        let dir = TempDir::new().unwrap();
        let mut args = args_for(Some(dir.path().to_path_buf()));
        args.quiet = true;
        args.verbose = 1;
        assert!(args.validate().is_err());
    }

    #[test]
    fn validate_rejects_hidden_reference() {
        let dir = TempDir::new().unwrap();
        let mut args = args_for(Some(dir.path().to_path_buf()));
        args.reference = ".hidden".to_string();
        assert!(args.validate().is_err());
    }

    #[test]
    fn empty_key_list_means_all_keys() {
        let dir = TempDir::new().unwrap();
        let args = args_for(Some(dir.path().to_path_buf()));
        let config = args.to_config().unwrap();
        assert!(config.key_subset.is_none());
    }

    #[test]
    fn keys_flag_becomes_a_subset() {
        let dir = TempDir::new().unwrap();
        let mut args = args_for(Some(dir.path().to_path_buf()));
        args.keys = vec!["a.b".to_string()];
        let config = args.to_config().unwrap();
        assert_eq!(config.key_subset.unwrap(), ["a.b"]);
    }
}
