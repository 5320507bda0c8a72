use std::fs;
use std::path::Path;

use log::info;

use crate::catalog::errors::CarveResult;
use crate::catalog::{CatalogLoader, DEFAULT_DEFINITIONS_FILE};
use crate::scanner::Scanner;
use crate::utils::logger::Logger;
use crate::utils::path_utils;

/// Main interface to the CarveKit library
pub struct CarveKit {
    logger: Logger,
}

impl CarveKit {
    /// Create a new CarveKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "carvekit.log"
    ///
    /// # Returns
    /// A CarveKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> CarveResult<Self> {
        let log_path = log_file.unwrap_or("carvekit.log");
        let logger = Logger::new(log_path)?;
        Ok(CarveKit { logger })
    }

    /// Scan a file for catalog signatures and extract every match
    ///
    /// # Arguments
    /// * `input_path` - Path to the file to scan
    /// * `output_dir` - Existing directory extracted files are written to
    /// * `signatures_path` - Optional definitions file, defaults to "type.txt"
    ///
    /// # Returns
    /// Paths of the extracted files, in catalog dispatch order
    pub fn scan(&self, input_path: &str, output_dir: &str,
                signatures_path: Option<&str>) -> CarveResult<Vec<String>> {
        let signatures = signatures_path.unwrap_or(DEFAULT_DEFINITIONS_FILE);
        info!("Scanning {} with signatures from {}", input_path, signatures);

        let loader = CatalogLoader::new(&self.logger);
        let catalog = loader.load(signatures)?;

        let data = fs::read(input_path)?;
        let base_name = path_utils::derive_base_name(input_path);

        let scanner = Scanner::new(&self.logger);
        let written = scanner.scan(&data, &catalog, Path::new(output_dir), &base_name, None)?;

        Ok(written.iter().map(|p| p.display().to_string()).collect())
    }

    /// Describe the signature catalog without scanning anything
    ///
    /// # Arguments
    /// * `signatures_path` - Optional definitions file, defaults to "type.txt"
    ///
    /// # Returns
    /// String summary of the loaded catalog or an error
    pub fn describe_catalog(&self, signatures_path: Option<&str>) -> CarveResult<String> {
        let signatures = signatures_path.unwrap_or(DEFAULT_DEFINITIONS_FILE);

        let loader = CatalogLoader::new(&self.logger);
        let catalog = loader.load(signatures)?;

        let mut result = format!("Signature catalog: {} records\n", catalog.len());
        for record in catalog.iter() {
            let hex: String = record.magic.iter().map(|b| format!("{:02X}", b)).collect();
            result.push_str(&format!("  {}: {} ({})\n",
                                     record.file_type, hex, record.strategy.name()));
        }

        Ok(result)
    }
}
