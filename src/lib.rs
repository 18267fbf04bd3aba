pub mod analyze;
pub mod concurrent;
pub mod config;
pub mod filter;
pub mod output;
pub mod scan;

// re-export the main entry points used in tests
pub use crate::analyze::{extract, ExtractionResult, SourceUnit};
pub use crate::config::ExtractConfig;
