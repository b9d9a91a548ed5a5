//! Error types for the labelkit core

use thiserror::Error;

/// Errors produced at the configuration and I/O boundary.
///
/// The classifier and segmenter themselves are total functions and never
/// fail; errors only arise when loading keyword configuration.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Reading a keyword config file failed
    #[error("failed to read keyword config {path}: {source}")]
    Io {
        /// The file path that could not be read
        path: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A keyword config file could not be parsed
    #[error("invalid keyword config ({path}): {message}")]
    ConfigParse {
        /// The file path, or `<inline>` for in-memory strings
        path: String,
        /// The parse error reported by the TOML deserializer
        message: String,
    },

    /// A keyword category name does not match any known field type
    #[error("unknown field type '{name}'")]
    UnknownFieldType {
        /// The unrecognized category name
        name: String,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
