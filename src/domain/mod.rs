//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - measurement data (`Sample`, `Curve`)
//! - the band of interest (`Band`)
//! - scoring output (`FigureOfMerit`, `Measurement`)
//! - resolved run configuration (`AnalysisConfig`)

pub mod types;

pub use types::*;
