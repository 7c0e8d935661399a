//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::CoverageError;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &CoverageError) -> String {
    format!("covered: {}", e)
}
