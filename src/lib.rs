//! covered: content-based directory coverage
//!
//! Checks whether every file of a source tree has a byte-identical
//! counterpart somewhere in a coverage tree, comparing content digests
//! rather than names or locations.

pub mod cli;
pub mod config;
pub mod coverage;
pub mod error;
pub mod logging;
pub mod tree;
pub mod types;
