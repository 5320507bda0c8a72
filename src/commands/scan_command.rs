//! Signature scan and extraction command
//!
//! This module implements the default command: load the signature
//! catalog, read the input file into memory, and extract every embedded
//! payload whose signature occurs in the buffer.

use clap::ArgMatches;
use log::{debug, info, error};
use std::fs;
use std::path::Path;

use crate::catalog::errors::{CarveError, CarveResult};
use crate::catalog::{CatalogLoader, DEFAULT_DEFINITIONS_FILE};
use crate::commands::command_traits::Command;
use crate::scanner::Scanner;
use crate::utils::logger::Logger;
use crate::utils::path_utils;
use crate::utils::ProgressTracker;

/// Default output directory when none is given on the command line
const DEFAULT_OUTPUT_DIR: &str = "./output";

/// Command for scanning a file and extracting embedded payloads
pub struct ScanCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Directory extracted files are written to
    output_dir: String,
    /// Path to the signature definitions file
    signatures_file: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ScanCommand<'a> {
    /// Create a new scan command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ScanCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> CarveResult<Self> {
        info!("Creating new scan command from arguments");

        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| CarveError::GenericError("Missing input file".to_string()))?
            .clone();
        info!("Input file: {}", input_file);

        let output_dir = args.get_one::<String>("output")
            .cloned()
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());
        info!("Output directory: {}", output_dir);

        let signatures_file = args.get_one::<String>("signatures")
            .cloned()
            .unwrap_or_else(|| DEFAULT_DEFINITIONS_FILE.to_string());
        info!("Signature definitions: {}", signatures_file);

        Ok(ScanCommand {
            input_file,
            output_dir,
            signatures_file,
            logger,
        })
    }
}

impl<'a> Command for ScanCommand<'a> {
    fn execute(&self) -> CarveResult<()> {
        info!("Executing scan command on {}", self.input_file);

        let loader = CatalogLoader::new(self.logger);
        let catalog = loader.load(&self.signatures_file)?;

        // The whole file is read once; every match and extraction borrows it
        let data = fs::read(&self.input_file)?;
        debug!("Read {} bytes from {}", data.len(), self.input_file);

        let base_name = path_utils::derive_base_name(&self.input_file);
        debug!("Output base name: {}", base_name);

        let progress = ProgressTracker::new(catalog.len() as u64, "Scanning...");

        let scanner = Scanner::new(self.logger);
        let written = match scanner.scan(&data, &catalog, Path::new(&self.output_dir),
                                         &base_name, Some(&progress)) {
            Ok(paths) => paths,
            Err(e) => {
                error!("Scan aborted: {}", e);
                progress.finish();
                return Err(e);
            }
        };
        progress.finish();

        info!("Scan complete, {} file(s) extracted", written.len());
        self.logger.log_scan_summary(&self.input_file, written.len())?;

        Ok(())
    }
}
