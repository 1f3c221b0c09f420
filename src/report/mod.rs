//! Reporting utilities: ranking and formatted terminal/file output.

use std::cmp::Ordering;

use crate::domain::Measurement;

pub mod format;

pub use format::*;

/// Order measurements best-first by score.
///
/// The sort is stable, so equal scores keep their input (file name) order.
pub fn rank_by_score(measurements: &[Measurement]) -> Vec<&Measurement> {
    let mut ranked: Vec<&Measurement> = measurements.iter().collect();
    ranked.sort_by(|a, b| b.fom.score.partial_cmp(&a.fom.score).unwrap_or(Ordering::Equal));
    ranked
}
