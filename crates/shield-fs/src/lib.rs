//! Filesystem layer for the SHIELD client configuration
//!
//! Provides "read if present" loads and atomic, locked writes for the
//! YAML documents the client keeps on disk.

pub mod document;
pub mod error;
pub mod io;

pub use error::{Error, Result};
