//! Keyword configuration files
//!
//! Keyword lists are maintained outside the core (in production, a
//! `FieldTypeKeyword` table) and handed to the classifier as a snapshot.
//! For file-based callers and the CLI, this module loads the same data
//! from a TOML document:
//!
//! ```toml
//! [metadata]
//! name = "default"
//!
//! [keywords]
//! drug_name = ["Paracetamol"]
//! number_field = ["Lot No", "Exp. Date"]
//!
//! # Optional row form mirroring the store table
//! [[entry]]
//! keyword = "Batch No"
//! field_type = "number_field"
//! is_active = true
//! ```
//!
//! Grouped lists and row entries are merged; inactive rows are skipped and
//! duplicates dropped, with counts kept for reporting.

use crate::error::{CoreError, Result};
use crate::field_type::FieldType;
use crate::keywords::{KeywordList, KeywordRecord};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    metadata: Option<RawMetadata>,
    #[serde(default)]
    keywords: BTreeMap<String, Vec<String>>,
    #[serde(default, rename = "entry")]
    entries: Vec<KeywordRecord>,
}

#[derive(Debug, Deserialize)]
struct RawMetadata {
    name: String,
}

/// Bookkeeping from one config load, for validation reporting.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadStats {
    /// Keywords kept in the resulting list
    pub active: usize,
    /// Row entries skipped because `is_active` was false
    pub inactive_skipped: usize,
    /// Keywords dropped as blank or case-insensitive duplicates
    pub duplicates_dropped: usize,
}

/// A parsed keyword configuration.
#[derive(Debug, Clone)]
pub struct KeywordConfig {
    name: Option<String>,
    list: KeywordList,
    stats: LoadStats,
}

impl KeywordConfig {
    /// Parse a configuration from a TOML string.
    ///
    /// Unknown category names under `[keywords]` are a
    /// [`CoreError::UnknownFieldType`] error; malformed TOML is a
    /// [`CoreError::ConfigParse`] error.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Self::parse(input, "<inline>")
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&input, &path.display().to_string())
    }

    fn parse(input: &str, origin: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(input).map_err(|err| CoreError::ConfigParse {
            path: origin.to_string(),
            message: err.to_string(),
        })?;

        let mut list = KeywordList::new();
        let mut stats = LoadStats::default();

        for (category, words) in raw.keywords {
            let field_type = FieldType::from_code(&category)
                .ok_or_else(|| CoreError::UnknownFieldType { name: category })?;
            for word in words {
                if list.insert(field_type, word) {
                    stats.active += 1;
                } else {
                    stats.duplicates_dropped += 1;
                }
            }
        }

        for record in raw.entries {
            if !record.is_active {
                stats.inactive_skipped += 1;
                continue;
            }
            if list.insert(record.field_type, record.keyword) {
                stats.active += 1;
            } else {
                stats.duplicates_dropped += 1;
            }
        }

        Ok(Self {
            name: raw.metadata.map(|m| m.name),
            list,
            stats,
        })
    }

    /// The configuration's display name, if the file declared one
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The merged keyword list
    pub fn keyword_list(&self) -> &KeywordList {
        &self.list
    }

    /// Consume the config, keeping only the keyword list
    pub fn into_keyword_list(self) -> KeywordList {
        self.list
    }

    /// Bookkeeping counters from the load
    pub fn stats(&self) -> &LoadStats {
        &self.stats
    }
}
