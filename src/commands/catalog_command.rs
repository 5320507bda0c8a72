//! Signature catalog listing command
//!
//! This module implements the command for parsing the definitions source
//! and displaying each record without scanning anything, so an operator
//! can check what a scan would look for.

use clap::ArgMatches;
use log::info;

use crate::catalog::errors::CarveResult;
use crate::catalog::{CatalogLoader, SignatureRecord, DEFAULT_DEFINITIONS_FILE};
use crate::commands::command_traits::Command;
use crate::utils::logger::Logger;

/// Command for listing the parsed signature catalog
pub struct CatalogCommand<'a> {
    /// Path to the signature definitions file
    signatures_file: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> CatalogCommand<'a> {
    /// Create a new catalog listing command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> CarveResult<Self> {
        let signatures_file = args.get_one::<String>("signatures")
            .cloned()
            .unwrap_or_else(|| DEFAULT_DEFINITIONS_FILE.to_string());

        Ok(CatalogCommand {
            signatures_file,
            logger,
        })
    }

    /// Format one record for display
    fn display_record(record: &SignatureRecord) -> String {
        let hex: String = record.magic.iter()
            .map(|b| format!("{:02X}", b))
            .collect();

        format!("  {:<12} {} ({} bytes, {} -> .{})",
                record.file_type, hex, record.magic.len(),
                record.strategy.name(), record.strategy.extension())
    }
}

impl<'a> Command for CatalogCommand<'a> {
    fn execute(&self) -> CarveResult<()> {
        info!("Listing signature catalog from {}", self.signatures_file);

        let loader = CatalogLoader::new(self.logger);
        let catalog = loader.load(&self.signatures_file)?;

        println!("Signature catalog ({}, {} records):", self.signatures_file, catalog.len());
        for record in catalog.iter() {
            println!("{}", Self::display_record(record));
        }

        Ok(())
    }
}
