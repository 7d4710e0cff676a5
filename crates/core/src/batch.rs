//! Batch scanning of independent soundings.
//!
//! Each scan is stateless and self-contained, so a batch parallelizes
//! across soundings. Within one scan the first-match semantics are
//! inherently sequential and no intra-scan parallelism is attempted.

use crate::ascent::AscentEvaluator;
use crate::effective_layer::{effective_inflow_layer, CoordinateMode, LayerBounds};
use crate::error::ScanError;
use crate::sounding::Sounding;
use rayon::prelude::*;

/// Scan every sounding in the slice, in parallel, preserving input order
/// in the output.
///
/// Per-sounding failures stay per-sounding: one malformed sounding does
/// not abort the batch.
#[must_use]
pub fn scan_soundings<E>(
    soundings: &[Sounding],
    evaluator: &E,
    mode: CoordinateMode,
) -> Vec<Result<Option<LayerBounds>, ScanError>>
where
    E: AscentEvaluator + Sync,
{
    soundings
        .par_iter()
        .map(|sounding| effective_inflow_layer(sounding, evaluator, mode))
        .collect()
}
