//! Path utility functions
//!
//! Utilities for deriving output file names from input paths.

use std::path::Path;

/// Derives the output base name from an input path
///
/// The base name is the final path segment of the input, kept verbatim
/// (extension included), and prefixes every extracted output file.
///
/// # Arguments
/// * `input_path` - Path to the file being scanned
///
/// # Returns
/// The final path segment, or the input string unchanged when it has none
pub fn derive_base_name(input_path: &str) -> String {
    Path::new(input_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input_path.to_string())
}
