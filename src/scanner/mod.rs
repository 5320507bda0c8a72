//! Buffer scanning and extraction dispatch
//!
//! This module searches the input buffer for every catalog pattern and
//! invokes the bound extraction strategy for each record that matches.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use aho_corasick::AhoCorasick;
use log::{debug, info};

use crate::catalog::errors::{CarveError, CarveResult};
use crate::catalog::SignatureCatalog;
use crate::utils::logger::Logger;
use crate::utils::ProgressTracker;

/// Scanner that matches catalog signatures against an input buffer
pub struct Scanner<'a> {
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner
    ///
    /// # Arguments
    /// * `logger` - Logger for recording operations
    pub fn new(logger: &'a Logger) -> Self {
        Scanner { logger }
    }

    /// Scan the buffer and extract every matching record
    ///
    /// A record fires once if its magic bytes occur anywhere in the buffer,
    /// regardless of position or repetition. Dispatch follows catalog order,
    /// and the first extraction failure aborts the remaining scan; files
    /// already written stay on disk.
    ///
    /// # Arguments
    /// * `data` - The full input buffer
    /// * `catalog` - Loaded signature catalog
    /// * `output_dir` - Directory extracted files are written to (must exist)
    /// * `base_name` - Prefix for every extracted file name
    /// * `progress` - Optional progress bar advanced per catalog record
    ///
    /// # Returns
    /// Paths of the files written, in dispatch order. Zero matches is
    /// success with an empty list.
    pub fn scan(&self, data: &[u8], catalog: &SignatureCatalog,
                output_dir: &Path, base_name: &str,
                progress: Option<&ProgressTracker>) -> CarveResult<Vec<PathBuf>> {
        info!("Scanning {} byte buffer against {} signatures", data.len(), catalog.len());

        if catalog.is_empty() {
            return Ok(Vec::new());
        }

        let matched = self.find_matches(data, catalog)?;
        debug!("{} of {} records matched", matched.len(), catalog.len());

        let mut written = Vec::new();

        for (index, record) in catalog.iter().enumerate() {
            if let Some(pb) = progress {
                pb.increment(1);
            }

            if !matched.contains(&index) {
                continue;
            }

            info!("Extracting {}...", record.file_type);
            self.logger.log(&format!("extracting {}", record.file_type))?;

            let path = record.strategy.extract(data, output_dir, base_name)?;
            info!("Wrote {}", path.display());

            if let Some(pb) = progress {
                pb.set_message(&path.display().to_string());
            }
            written.push(path);
        }

        Ok(written)
    }

    /// Find which catalog records occur in the buffer
    ///
    /// Builds an Aho-Corasick automaton over all patterns so the buffer is
    /// walked once, then reduces the hits to the set of matched record
    /// indices.
    fn find_matches(&self, data: &[u8], catalog: &SignatureCatalog) -> CarveResult<HashSet<usize>> {
        let ac = AhoCorasick::new(catalog.patterns())
            .map_err(|e| CarveError::GenericError(format!("failed to build search automaton: {}", e)))?;

        let mut matched = HashSet::new();

        for mat in ac.find_overlapping_iter(data) {
            let index = mat.pattern().as_usize();
            if matched.insert(index) {
                debug!("Found pattern {} at offset {:#x}",
                       catalog.get(index).map(|r| r.file_type.as_str()).unwrap_or("?"),
                       mat.start());
            }
        }

        Ok(matched)
    }
}
