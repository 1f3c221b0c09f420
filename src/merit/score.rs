//! Figure-of-merit computation.
//!
//! For the samples inside the band:
//!
//! `score = 1 / (1 + mean((vswr - 1)^2))`
//!
//! so a perfectly matched antenna (VSWR = 1 everywhere) scores exactly 1 and the
//! score falls towards 0 as the match degrades.

use crate::domain::{Band, Curve, FigureOfMerit};

/// Ideal VSWR (no reflected power).
pub const IDEAL_VSWR: f64 = 1.0;

/// Score a curve over a band.
pub fn figure_of_merit(curve: &Curve, band: &Band) -> FigureOfMerit {
    let mut n = 0usize;
    let mut sum = 0.0;
    let mut sum_sq_dev = 0.0;
    let mut max = f64::NEG_INFINITY;

    for s in curve.iter().filter(|s| band.contains(s.frequency_hz)) {
        n += 1;
        sum += s.vswr;
        let dev = s.vswr - IDEAL_VSWR;
        sum_sq_dev += dev * dev;
        max = max.max(s.vswr);
    }

    if n == 0 {
        return FigureOfMerit::empty();
    }

    let count = n as f64;
    FigureOfMerit {
        mean_vswr: sum / count,
        max_vswr: max,
        score: score_from_mse(sum_sq_dev / count),
        n_points: n,
    }
}

/// Map a mean squared deviation from ideal to a score in (0, 1].
pub fn score_from_mse(mse: f64) -> f64 {
    1.0 / (1.0 + mse)
}
