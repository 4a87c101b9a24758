//! Error types for the entire library.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in the commands.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors. All of them are fatal for the request that raised them
/// and are reported before any evaluation happens.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot use assertMatrix together with assertions, matchingUrlPattern or preset")]
    AmbiguousConfiguration,

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Invalid URL pattern '{pattern}': {source}")]
    InvalidUrlPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid path {path}. {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("Budget has duplicate {kind} entry: {name}")]
    DuplicateBudgetEntry { kind: &'static str, name: String },

    #[error("Invalid budget value for {name}: {value}")]
    InvalidBudgetValue { name: String, value: f64 },

    #[error("Invalid firstPartyHostnames entry: {0}")]
    InvalidHostname(String),

    #[error("Unsupported audit property in assertion key: {0}")]
    UnsupportedAuditProperty(String),

    #[error("Malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors raised while merging per-run values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatisticsError {
    #[error("All runs failed to produce a usable value for {property}")]
    AllRunsFailed { property: String },
}

/// Errors raised while comparing two audits
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiffError {
    #[error("Cannot compare different audits: base={base}, compare={compare}")]
    MismatchedAudits { base: String, compare: String },
}

/// Errors that can occur while loading reports or configuration files
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in {path}: {source}")]
    JsonFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse TOML in {path}: {source}")]
    TomlFailed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("No report files found in {0}")]
    NoReports(PathBuf),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
