//! Extraction strategy definitions
//!
//! This module defines the strategy pattern for the different ways a
//! matched payload can be written out, allowing new file-type handling
//! to be added without touching the scanner.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use lazy_static::lazy_static;
use log::debug;

use crate::catalog::errors::CarveResult;

use super::image_strategy::ImageReencodeStrategy;
use super::raw_strategy::RawCopyStrategy;

lazy_static! {
    /// File-type labels that are backed by an image codec, mapped to the
    /// re-encode target format and its output extension
    static ref IMAGE_LABELS: HashMap<&'static str, (ImageFormat, &'static str)> = {
        let mut m = HashMap::new();
        m.insert("PNG", (ImageFormat::Png, "png"));
        m.insert("GIF", (ImageFormat::Gif, "gif"));
        m
    };
}

/// Strategy for writing a matched payload to the output directory
///
/// The whole input buffer is handed to the strategy, not a carved range:
/// the definitions source carries no end offsets, so image strategies rely
/// on the codec to bound the embedded data and raw strategies copy
/// everything.
pub trait ExtractionStrategy {
    /// Extract the payload into the output directory
    ///
    /// # Arguments
    /// * `data` - The full input buffer
    /// * `output_dir` - Directory the output file is created in (must exist)
    /// * `base_name` - Prefix for the output file name
    ///
    /// # Returns
    /// Path of the written file, or an error with details
    fn extract(&self, data: &[u8], output_dir: &Path, base_name: &str) -> CarveResult<PathBuf>;

    /// Get the output file extension this strategy writes
    fn extension(&self) -> &str;

    /// Get the name of this strategy
    fn name(&self) -> &'static str;
}

/// Factory for creating extraction strategies
pub struct StrategyFactory;

impl StrategyFactory {
    /// Create the extraction strategy bound to a file-type label
    ///
    /// Labels wired to an image codec get the re-encode strategy; every
    /// other label falls back to a verbatim raw copy named after the
    /// lowercased label.
    ///
    /// # Arguments
    /// * `file_type` - Label from the definitions source (e.g. "PNG")
    ///
    /// # Returns
    /// A boxed strategy for the label
    pub fn create_strategy(file_type: &str) -> Box<dyn ExtractionStrategy> {
        match IMAGE_LABELS.get(file_type) {
            Some(&(format, extension)) => {
                debug!("Binding image re-encode strategy for {}", file_type);
                Box::new(ImageReencodeStrategy::new(format, extension))
            }
            None => {
                debug!("Binding raw copy strategy for {}", file_type);
                Box::new(RawCopyStrategy::new(file_type))
            }
        }
    }
}
