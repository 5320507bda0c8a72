//! Image re-encode extraction strategy
//!
//! Payloads for image-backed labels are decoded from the whole input
//! buffer with auto-format detection and re-encoded in the target format.
//! Re-encoding through a tolerant decoder recovers a clean image even when
//! trailing bytes follow it in the buffer; it fails outright when the
//! signature match was a false positive or the embedded data is truncated.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use log::{info, warn};

use crate::catalog::errors::CarveResult;

use super::strategy::ExtractionStrategy;

/// Strategy that decodes the buffer as an image and re-encodes it
pub struct ImageReencodeStrategy {
    /// Target format for the re-encode
    format: ImageFormat,
    /// Output file extension for the target format
    extension: &'static str,
}

impl ImageReencodeStrategy {
    /// Create a new image re-encode strategy
    ///
    /// # Arguments
    /// * `format` - Target image format to encode into
    /// * `extension` - Output file extension for that format
    pub fn new(format: ImageFormat, extension: &'static str) -> Self {
        ImageReencodeStrategy { format, extension }
    }
}

impl ExtractionStrategy for ImageReencodeStrategy {
    fn extract(&self, data: &[u8], output_dir: &Path, base_name: &str) -> CarveResult<PathBuf> {
        info!("Decoding {} byte buffer with auto-format detection", data.len());

        let image = match image::load_from_memory(data) {
            Ok(img) => img,
            Err(e) => {
                warn!("Buffer is not a decodable image: {}", e);
                return Err(e.into());
            }
        };
        info!("Decoded image: {}x{}", image.width(), image.height());

        let output_path = output_dir.join(format!("{}.{}", base_name, self.extension));
        info!("Re-encoding as {} to {}", self.extension, output_path.display());

        let mut writer = BufWriter::new(File::create(&output_path)?);
        image.write_to(&mut writer, self.format)?;

        Ok(output_path)
    }

    fn extension(&self) -> &str {
        self.extension
    }

    fn name(&self) -> &'static str {
        "image re-encode"
    }
}
