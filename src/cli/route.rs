//! CLI route: run context. Resolves settings and dispatches to the comparator.

use crate::cli::parse::Cli;
use crate::cli::presentation::format_report;
use crate::config::{ConfigLoader, CoveredConfig, ReportFormat};
use crate::coverage::{check_coverage, CoverageReport};
use crate::error::CoverageError;
use crate::tree::hasher::{DigestAlgorithm, FileHasher};
use std::time::Instant;
use tracing::info;

/// Exit status when `fail_on_missing` is set and some files are missing
pub const EXIT_MISSING: i32 = 1;

/// Exit status when the run aborts on a path, I/O or configuration error
pub const EXIT_ERROR: i32 = 2;

/// Result of one run: the report, its rendering, and the exit status to use.
#[derive(Debug)]
pub struct RunOutcome {
    pub report: CoverageReport,
    pub rendered: Vec<u8>,
    pub exit_code: i32,
}

/// Runtime context for CLI execution: the merged configuration.
/// CLI flags override config values.
pub struct RunContext {
    config: CoveredConfig,
}

impl RunContext {
    /// Build the context from an already loaded configuration.
    pub fn from_config(config: CoveredConfig) -> Self {
        Self { config }
    }

    /// Load configuration (explicit file or standard sources) and apply CLI overrides.
    pub fn new(cli: &Cli) -> Result<Self, CoverageError> {
        let config = ConfigLoader::resolve(cli.config.as_deref())?;
        Ok(Self::from_config(config).with_overrides(cli))
    }

    fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(digest) = cli.digest {
            self.config.digest.algorithm = digest;
        }
        if let Some(format) = cli.format {
            self.config.report.format = format;
        }
        if cli.fail_on_missing {
            self.config.report.fail_on_missing = true;
        }
        self
    }

    pub fn config(&self) -> &CoveredConfig {
        &self.config
    }

    pub fn digest(&self) -> DigestAlgorithm {
        self.config.digest.algorithm
    }

    pub fn format(&self) -> ReportFormat {
        self.config.report.format
    }

    /// Compare the two trees and render the report.
    pub fn execute(&self, cli: &Cli) -> Result<RunOutcome, CoverageError> {
        let started = Instant::now();
        let hasher = FileHasher::new(self.digest());
        let report = check_coverage(&cli.src, &cli.cov, &hasher)?;
        let rendered = format_report(&report, self.format(), hasher.algorithm())?;

        let exit_code = if self.config.report.fail_on_missing && !report.is_covered() {
            EXIT_MISSING
        } else {
            0
        };

        info!(
            digest = %self.digest(),
            missing = report.missing.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Run finished"
        );

        Ok(RunOutcome {
            report,
            rendered,
            exit_code,
        })
    }
}
