//! Error types for configuration and snapshots
//!
//! Segment operations themselves never fail.

use std::io;
use thiserror::Error;

/// Crate error type
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Config file is not valid TOML for the expected shape
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config could not be written back out
    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Snapshot JSON error
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// A color string is not `#RRGGBB`
    #[error("Invalid hex color '{value}' for {field}. Expected format: #RRGGBB")]
    InvalidColor { field: String, value: String },

    /// A numeric setting is out of range
    #[error("Invalid value {value} for {field}: {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: &'static str,
    },
}

/// Result type for this crate
pub type Result<T> = std::result::Result<T, Error>;
