//! Configuration System
//!
//! Layered configuration: built-in defaults, then the global config file (or
//! an explicit file), then `COVERED__*` environment variables. CLI flags are
//! applied on top by the CLI layer.

use crate::logging::LoggingConfig;
use crate::tree::hasher::DigestAlgorithm;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoveredConfig {
    /// Digest settings
    #[serde(default)]
    pub digest: DigestConfig,

    /// Report output settings
    #[serde(default)]
    pub report: ReportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Digest settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DigestConfig {
    /// Algorithm used to hash file content
    #[serde(default)]
    pub algorithm: DigestAlgorithm,
}

/// Report output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Report format: text, json
    #[serde(default = "default_report_format")]
    pub format: ReportFormat,

    /// Exit non-zero when any source file is missing from the coverage tree
    #[serde(default)]
    pub fail_on_missing: bool,
}

fn default_report_format() -> ReportFormat {
    ReportFormat::Text
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: default_report_format(),
            fail_on_missing: false,
        }
    }
}

/// Report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One `<path>\t<hash>` line per missing file
    Text,
    /// A single JSON object with counts and missing files
    Json,
}
