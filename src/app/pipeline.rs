//! Load-and-score pipeline.
//!
//! scan input folder -> parse each file -> score over the band
//!
//! Files are processed one at a time in name order. A file that fails to parse
//! is logged and left out; it never aborts the run.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::{Band, Measurement};
use crate::error::{AppError, ParseError};
use crate::io::{measurement_name, parse_curve_file, scan_input_dir};
use crate::merit::figure_of_merit;

/// A file that was left out of the results, and why.
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub error: ParseError,
}

/// Everything loaded from the input folder.
#[derive(Debug, Default)]
pub struct LoadOutput {
    /// Number of `*.ini` files found.
    pub files_found: usize,
    /// Successfully parsed measurements, in file-name order.
    pub measurements: Vec<Measurement>,
    pub skipped: Vec<SkippedFile>,
}

/// Parse and score one file.
pub fn load_measurement(path: &Path, band: &Band) -> Result<Measurement, ParseError> {
    let curve = parse_curve_file(path)?;
    let fom = figure_of_merit(&curve, band);
    Ok(Measurement {
        name: measurement_name(path),
        curve,
        fom,
    })
}

/// Scan `input_dir` and load every measurement file in it.
pub fn load_measurements(input_dir: &Path, band: &Band) -> Result<LoadOutput, AppError> {
    let files = scan_input_dir(input_dir)?;
    let mut out = LoadOutput {
        files_found: files.len(),
        ..LoadOutput::default()
    };

    for path in files {
        match load_measurement(&path, band) {
            Ok(m) => {
                debug!(
                    file = %m.name,
                    samples = m.curve.len(),
                    in_band = m.fom.n_points,
                    score = m.fom.score,
                    "scored measurement"
                );
                out.measurements.push(m);
            }
            Err(error) => {
                let file = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                warn!(%file, reason = %error, "skip {file}: {error}");
                out.skipped.push(SkippedFile { path, error });
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn bad_files_are_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a_good.ini"), "[Curve]\nF:2000000000,1.0\n").unwrap();
        fs::write(dir.path().join("b_no_section.ini"), "[Info]\nF:2000000000,1.0\n").unwrap();
        fs::write(dir.path().join("c_empty.ini"), "[Curve]\nF:2000000000\n").unwrap();
        fs::write(dir.path().join("d_good.ini"), "[Curve]\nF:2000000000,2.0\n").unwrap();

        let band = Band::new(1.7e9, 2.5e9).unwrap();
        let out = load_measurements(dir.path(), &band).unwrap();

        assert_eq!(out.files_found, 4);
        let names: Vec<&str> = out.measurements.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["a_good", "d_good"]);
        assert_eq!(out.skipped.len(), 2);
        assert!(matches!(out.skipped[0].error, ParseError::MissingCurveSection));
        assert!(matches!(out.skipped[1].error, ParseError::EmptyCurve));
        assert_eq!(out.measurements[1].fom.score, 0.5);
    }

    #[test]
    fn empty_folder_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let band = Band::new(1.7e9, 2.5e9).unwrap();
        let out = load_measurements(dir.path(), &band).unwrap();
        assert_eq!(out.files_found, 0);
        assert!(out.measurements.is_empty());
    }
}
