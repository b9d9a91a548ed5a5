//! Validate command implementation

use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use labelkit_core::{FieldType, KeywordConfig};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Keyword configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub keywords: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating {}...", self.keywords.display());

        let config = KeywordConfig::load(&self.keywords)
            .map_err(|err| CliError::ConfigError(err.to_string()))?;

        if let Some(name) = config.name() {
            println!("  Name: {name}");
        }

        let list = config.keyword_list();
        for field_type in FieldType::ALL {
            let count = list.len(field_type);
            if count > 0 {
                println!("  {field_type}: {count} keyword(s)");
            }
        }

        let stats = config.stats();
        println!("  Total active keywords: {}", stats.active);
        if stats.inactive_skipped > 0 {
            println!("  Inactive rows skipped: {}", stats.inactive_skipped);
        }
        if stats.duplicates_dropped > 0 {
            println!("  Duplicates dropped: {}", stats.duplicates_dropped);
        }

        if list.is_empty() {
            println!("⚠ Configuration is valid but contains no active keywords");
        } else {
            println!("✓ Keyword configuration is valid");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_execute_with_valid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kw.toml");
        std::fs::write(
            &path,
            "[keywords]\ndrug_name = [\"Aspirin\"]\nnumber_field = [\"Lot No\"]\n",
        )
        .unwrap();

        let args = ValidateArgs { keywords: path };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_execute_with_unknown_category() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kw.toml");
        std::fs::write(&path, "[keywords]\nwarehouse = [\"shelf\"]\n").unwrap();

        let args = ValidateArgs { keywords: path };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("unknown field type"));
    }

    #[test]
    fn test_execute_with_missing_file() {
        let args = ValidateArgs {
            keywords: PathBuf::from("/nonexistent/kw.toml"),
        };
        assert!(args.execute().is_err());
    }
}
