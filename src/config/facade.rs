//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::CoveredConfig;
use crate::error::CoverageError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file and environment.
    pub fn load() -> Result<CoveredConfig, CoverageError> {
        Ok(MergeService::load()?)
    }

    /// Load configuration from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<CoveredConfig, CoverageError> {
        Ok(MergeService::load_from_file(path)?)
    }

    /// Explicit file when given, standard sources otherwise.
    pub fn resolve(config_path: Option<&Path>) -> Result<CoveredConfig, CoverageError> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => Self::load(),
        }
    }
}
