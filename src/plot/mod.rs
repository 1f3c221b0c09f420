//! Chart rendering for the comparison plot.

pub mod chart;

pub use chart::*;
