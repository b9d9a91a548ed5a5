//! Field-type classification and script-aware segmentation for label text
//!
//! This crate implements the two text-processing cores used when preparing
//! multilingual pharmaceutical labels for rendering:
//!
//! - a heuristic [`classify`] function that buckets a free-text label line
//!   into a semantic [`FieldType`] using ordered rules and fuzzy keyword
//!   matching against an externally maintained [`KeywordList`];
//! - a [`segment`] function that partitions a string into maximal runs of
//!   characters sharing a [`ScriptClass`], so a PDF renderer can assign one
//!   font per run instead of one per character.
//!
//! Both are pure, total functions: any input string produces a result, and
//! identical inputs always produce identical outputs. The [`LabelProcessor`]
//! facade bundles a keyword snapshot and a [`FontScheme`] for callers that
//! process whole label files.

#![warn(missing_docs)]

pub mod classify;
pub mod config;
pub mod error;
pub mod field_type;
pub mod keywords;
pub mod processor;
pub mod script;

// Re-export key types
pub use classify::{classify, classify_batch, fuzzy_match, matches_any};
pub use config::{KeywordConfig, LoadStats};
pub use error::{CoreError, Result};
pub use field_type::FieldType;
pub use keywords::{KeywordList, KeywordRecord};
pub use processor::{ClassifiedLine, LabelProcessor, LabelProcessorBuilder};
pub use script::{classify_char, font_runs, segment, FontRun, FontScheme, ScriptClass, TextSegment};
