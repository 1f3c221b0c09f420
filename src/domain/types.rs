//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory while scoring and ranking
//! - exported to JSON alongside the text report

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Hz per GHz, used for axis and report labels.
pub const HZ_PER_GHZ: f64 = 1e9;

/// One analyzer sample: frequency in Hz and the measured VSWR.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub frequency_hz: u64,
    pub vswr: f64,
}

impl Sample {
    pub fn new(frequency_hz: u64, vswr: f64) -> Self {
        Self { frequency_hz, vswr }
    }

    pub fn frequency_ghz(&self) -> f64 {
        self.frequency_hz as f64 / HZ_PER_GHZ
    }
}

/// Frequency/VSWR samples in the order they appear in the source file.
///
/// The parser never produces an empty curve. Frequencies are expected to be
/// non-decreasing but this is not checked.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Curve {
    pub samples: Vec<Sample>,
}

impl Curve {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    /// `(min, max)` frequency in Hz, or `None` for an empty curve.
    pub fn frequency_span(&self) -> Option<(u64, u64)> {
        let min = self.samples.iter().map(|s| s.frequency_hz).min()?;
        let max = self.samples.iter().map(|s| s.frequency_hz).max()?;
        Some((min, max))
    }
}

/// Frequency band of interest, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Band {
    fmin_hz: f64,
    fmax_hz: f64,
}

impl Band {
    /// Build a band, rejecting empty, inverted, or non-positive ranges.
    pub fn new(fmin_hz: f64, fmax_hz: f64) -> Result<Self, AppError> {
        if !(fmin_hz.is_finite() && fmax_hz.is_finite()) {
            return Err(AppError::usage("--fmin and --fmax must be finite numbers"));
        }
        if fmin_hz <= 0.0 {
            return Err(AppError::usage("--fmin must be positive"));
        }
        if fmin_hz >= fmax_hz {
            return Err(AppError::usage("--fmin must be less than --fmax"));
        }
        Ok(Self { fmin_hz, fmax_hz })
    }

    pub fn fmin_hz(&self) -> f64 {
        self.fmin_hz
    }

    pub fn fmax_hz(&self) -> f64 {
        self.fmax_hz
    }

    pub fn fmin_ghz(&self) -> f64 {
        self.fmin_hz / HZ_PER_GHZ
    }

    pub fn fmax_ghz(&self) -> f64 {
        self.fmax_hz / HZ_PER_GHZ
    }

    pub fn contains(&self, frequency_hz: u64) -> bool {
        let f = frequency_hz as f64;
        f >= self.fmin_hz && f <= self.fmax_hz
    }
}

/// Summary of match quality over a band.
///
/// When no sample falls inside the band, `score` and `n_points` are zero and
/// `mean_vswr` / `max_vswr` are NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureOfMerit {
    pub mean_vswr: f64,
    pub max_vswr: f64,
    pub score: f64,
    pub n_points: usize,
}

impl FigureOfMerit {
    pub fn empty() -> Self {
        Self {
            mean_vswr: f64::NAN,
            max_vswr: f64::NAN,
            score: 0.0,
            n_points: 0,
        }
    }
}

/// One successfully parsed and scored input file.
#[derive(Debug, Clone)]
pub struct Measurement {
    /// File stem, e.g. `patch_v2` for `patch_v2.ini`.
    pub name: String,
    pub curve: Curve,
    pub fom: FigureOfMerit,
}

/// Pixel size of the rendered chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotSize {
    pub width: u32,
    pub height: u32,
}

impl Default for PlotSize {
    fn default() -> Self {
        // 12 x 6 inches at 150 dpi.
        Self {
            width: 1800,
            height: 900,
        }
    }
}

/// Resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub band: Band,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub plot_file: String,
    pub report_file: String,
    pub export_json: Option<PathBuf>,
    pub plot_size: PlotSize,
}

impl AnalysisConfig {
    pub fn plot_path(&self) -> PathBuf {
        self.output_dir.join(&self.plot_file)
    }

    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(&self.report_file)
    }
}
