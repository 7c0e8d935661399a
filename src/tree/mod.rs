//! Directory tree access
//!
//! Enumeration of the files under a root and hashing of their content.

pub mod hasher;
pub mod path;
pub mod walker;
