pub mod catalog;
pub mod extractor;
pub mod scanner;
pub mod commands;
pub mod utils;
pub mod api;

pub use crate::api::CarveKit;

pub use catalog::{CatalogLoader, SignatureCatalog, SignatureRecord, CarveError, CarveResult};
pub use extractor::{ExtractionStrategy, StrategyFactory};
pub use scanner::Scanner;
