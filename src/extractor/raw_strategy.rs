//! Raw copy extraction strategy
//!
//! Default strategy for labels with no codec support: the whole input
//! buffer is written out verbatim, named after the lowercased label.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::catalog::errors::CarveResult;

use super::strategy::ExtractionStrategy;

/// Strategy that copies the input buffer verbatim
pub struct RawCopyStrategy {
    /// Output file extension, the lowercased file-type label
    extension: String,
}

impl RawCopyStrategy {
    /// Create a new raw copy strategy
    ///
    /// # Arguments
    /// * `file_type` - Label from the definitions source; lowercased to
    ///   form the output extension
    pub fn new(file_type: &str) -> Self {
        RawCopyStrategy {
            extension: file_type.to_lowercase(),
        }
    }
}

impl ExtractionStrategy for RawCopyStrategy {
    fn extract(&self, data: &[u8], output_dir: &Path, base_name: &str) -> CarveResult<PathBuf> {
        let output_path = output_dir.join(format!("{}.{}", base_name, self.extension));
        info!("Copying {} bytes verbatim to {}", data.len(), output_path.display());

        let mut writer = BufWriter::new(File::create(&output_path)?);
        writer.write_all(data)?;
        writer.flush()?;

        Ok(output_path)
    }

    fn extension(&self) -> &str {
        &self.extension
    }

    fn name(&self) -> &'static str {
        "raw copy"
    }
}
