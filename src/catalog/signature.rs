//! Signature record and catalog types

use std::fmt;

use crate::extractor::ExtractionStrategy;

/// A single file-type signature from the definitions source
///
/// Records are created once at load time and immutable afterwards. The
/// extraction strategy is bound when the record is parsed, dispatched on
/// the file-type label.
pub struct SignatureRecord {
    /// File-type label (e.g. "PNG", "GIF")
    pub file_type: String,
    /// Magic bytes to search for, decoded from the hex signature
    pub magic: Vec<u8>,
    /// Strategy invoked when the magic bytes are found
    pub strategy: Box<dyn ExtractionStrategy>,
}

impl fmt::Debug for SignatureRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignatureRecord")
            .field("file_type", &self.file_type)
            .field("magic", &self.magic)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

/// Ordered collection of signature records
///
/// Iteration order is insertion order from the definitions source, which
/// is also the order the scanner dispatches matches in.
#[derive(Debug, Default)]
pub struct SignatureCatalog {
    records: Vec<SignatureRecord>,
}

impl SignatureCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        SignatureCatalog { records: Vec::new() }
    }

    /// Append a record, keeping insertion order
    pub fn push(&mut self, record: SignatureRecord) {
        self.records.push(record);
    }

    /// Get a record by catalog position
    pub fn get(&self, index: usize) -> Option<&SignatureRecord> {
        self.records.get(index)
    }

    /// Iterate over records in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, SignatureRecord> {
        self.records.iter()
    }

    /// Number of records in the catalog
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Magic byte patterns in catalog order, for the search automaton
    pub fn patterns(&self) -> Vec<&[u8]> {
        self.records.iter().map(|r| r.magic.as_slice()).collect()
    }
}
