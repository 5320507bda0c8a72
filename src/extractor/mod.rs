//! Payload extraction strategies
//!
//! This module provides the byte-handling strategies bound to catalog
//! records, using a strategy pattern so the scanner never branches on
//! file-type labels itself.

mod strategy;
mod image_strategy;
mod raw_strategy;

// Public exports
pub use strategy::{ExtractionStrategy, StrategyFactory};
pub use image_strategy::ImageReencodeStrategy;
pub use raw_strategy::RawCopyStrategy;
