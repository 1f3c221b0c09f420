//! Match-quality scoring over the band of interest.
//!
//! Scoring is a pure function of `(Curve, Band)` so it can be tested without
//! touching the file system.

pub mod score;

pub use score::*;
