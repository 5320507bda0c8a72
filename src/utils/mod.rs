//! Utility modules for common functionality
//!
//! This module provides various utility functions and types used throughout the application.

pub mod logger;
mod progress;
pub(crate) mod hex_utils;
pub(crate) mod path_utils;

pub use progress::ProgressTracker;
