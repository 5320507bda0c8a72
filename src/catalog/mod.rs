//! Signature catalog parsing module
//!
//! This module provides the structures and parsing for the signature
//! definitions source that drives the scanner.

pub mod errors;
pub mod signature;
pub mod loader;
mod tests;

pub use errors::{CarveError, CarveResult};
pub use signature::{SignatureCatalog, SignatureRecord};
pub use loader::CatalogLoader;

/// Default definitions source name, resolved in the working directory
pub const DEFAULT_DEFINITIONS_FILE: &str = "type.txt";
