use rayon::prelude::*;

use crate::analyze::{extract, ExtractionResult, SourceUnit};
use crate::config::ExtractConfig;

/// Extract every unit in parallel. `extract` is side-effect-free, so this
/// is plain data parallelism with no synchronization; results come back in
/// input order.
pub fn extract_all(units: &[SourceUnit], cfg: &ExtractConfig) -> Vec<ExtractionResult> {
    units.par_iter().map(|unit| extract(unit, cfg)).collect()
}
