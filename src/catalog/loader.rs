//! Signature catalog loader
//!
//! This module parses the definitions source, a plain text file with one
//! `FILE_TYPE:HEXBYTES` record per line, into a catalog of signature
//! records with their extraction strategies bound.

use std::fs::File;
use std::io::{BufRead, BufReader};

use log::{debug, info};

use crate::catalog::errors::{CarveError, CarveResult};
use crate::extractor::StrategyFactory;
use crate::utils::hex_utils;
use crate::utils::logger::Logger;

use super::signature::{SignatureCatalog, SignatureRecord};

/// Loader for the signature definitions source
pub struct CatalogLoader<'a> {
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> CatalogLoader<'a> {
    /// Create a new catalog loader
    ///
    /// # Arguments
    /// * `logger` - Logger for recording operations
    pub fn new(logger: &'a Logger) -> Self {
        CatalogLoader { logger }
    }

    /// Load a signature catalog from a definitions file
    ///
    /// An empty file yields an empty catalog. An unreadable file is an
    /// I/O error; a malformed line or bad hex aborts the load.
    ///
    /// # Arguments
    /// * `path` - Path to the definitions file
    ///
    /// # Returns
    /// The loaded catalog, or the first error encountered
    pub fn load(&self, path: &str) -> CarveResult<SignatureCatalog> {
        info!("Loading signature definitions from {}", path);

        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut catalog = SignatureCatalog::new();

        for line in reader.lines() {
            let line = line?;
            catalog.push(self.parse_line(&line)?);
        }

        info!("Loaded {} signature records", catalog.len());
        Ok(catalog)
    }

    /// Parse one definitions line into a signature record
    ///
    /// The line must contain exactly one colon separating the file-type
    /// label from the hex signature. Blank lines are malformed too.
    fn parse_line(&self, line: &str) -> CarveResult<SignatureRecord> {
        let parts: Vec<&str> = line.split(':').collect();
        if parts.len() != 2 {
            return Err(CarveError::FormatError(line.to_string()));
        }

        let file_type = parts[0];
        let hex_signature = parts[1];
        debug!("Parsed definitions line: fileType={} hexSignature={}", file_type, hex_signature);
        self.logger.log(&format!("signature: {} -> {}", file_type, hex_signature))?;

        let magic = hex_utils::decode_hex(hex_signature)?;

        Ok(SignatureRecord {
            file_type: file_type.to_string(),
            magic,
            strategy: StrategyFactory::create_strategy(file_type),
        })
    }
}
