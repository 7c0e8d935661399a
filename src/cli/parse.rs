//! CLI parse: clap types for covered. No behavior; definitions only.

use crate::config::ReportFormat;
use crate::tree::hasher::DigestAlgorithm;
use clap::Parser;
use std::path::PathBuf;

/// Determines whether `src` is covered by `cov`: whether every file within
/// `src` has a content-identical file somewhere within `cov`.
///
/// When all files are covered no output is produced. Otherwise every file of
/// `src` missing from `cov` is printed on its own line as
/// `<absolute-path><TAB><checksum>`.
#[derive(Parser, Debug)]
#[command(name = "covered")]
#[command(about = "Check that every file in a directory tree has a content-identical copy in another tree")]
pub struct Cli {
    /// Source directory whose files must be covered
    #[arg(long)]
    pub src: PathBuf,

    /// Directory checked for copies of the source files
    #[arg(long)]
    pub cov: PathBuf,

    /// Digest algorithm (sha1, blake3)
    #[arg(long)]
    pub digest: Option<DigestAlgorithm>,

    /// Report format
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Exit with status 1 when any file is missing
    #[arg(long)]
    pub fail_on_missing: bool,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging to stderr (default: off)
    #[arg(long)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
