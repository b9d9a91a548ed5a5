//! Labelkit CLI library
//!
//! This library provides the command-line interface for the labelkit
//! field-type classification and script segmentation tools.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
