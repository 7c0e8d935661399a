//! Presentation: render a coverage report for stdout.

use crate::config::ReportFormat;
use crate::coverage::CoverageReport;
use crate::error::CoverageError;
use crate::tree::hasher::DigestAlgorithm;
use serde::Serialize;
use std::borrow::Cow;
use std::path::Path;

/// Separator between path and hash in text output
const SEP: u8 = b'\t';

/// JSON shape of a coverage report
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    covered: bool,
    digest: &'static str,
    source_files: usize,
    coverage_files: usize,
    missing: Vec<JsonRecord<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonRecord<'a> {
    path: Cow<'a, str>,
    hash: &'a str,
}

/// Raw bytes of a path, so names that are not UTF-8 print as they are on disk
#[cfg(unix)]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    Cow::Owned(path.display().to_string().into_bytes())
}

/// One `<path>\t<hash>` line per missing file, each newline-terminated.
/// Empty when everything is covered.
pub fn format_report_text(report: &CoverageReport) -> Vec<u8> {
    let mut out = Vec::new();
    for record in &report.missing {
        out.extend_from_slice(&path_bytes(&record.path));
        out.push(SEP);
        out.extend_from_slice(record.hash.as_bytes());
        out.push(b'\n');
    }
    out
}

/// Pretty JSON object. Paths that are not UTF-8 are rendered lossily here,
/// since JSON strings cannot carry raw bytes.
pub fn format_report_json(
    report: &CoverageReport,
    digest: DigestAlgorithm,
) -> Result<Vec<u8>, CoverageError> {
    let out = JsonReport {
        covered: report.is_covered(),
        digest: digest.as_str(),
        source_files: report.source_files,
        coverage_files: report.coverage_files,
        missing: report
            .missing
            .iter()
            .map(|record| JsonRecord {
                path: record.path.to_string_lossy(),
                hash: &record.hash,
            })
            .collect(),
    };
    let mut rendered = serde_json::to_vec_pretty(&out)
        .map_err(|e| CoverageError::Config(format!("Failed to render report: {}", e)))?;
    rendered.push(b'\n');
    Ok(rendered)
}

pub fn format_report(
    report: &CoverageReport,
    format: ReportFormat,
    digest: DigestAlgorithm,
) -> Result<Vec<u8>, CoverageError> {
    match format {
        ReportFormat::Text => Ok(format_report_text(report)),
        ReportFormat::Json => format_report_json(report, digest),
    }
}
