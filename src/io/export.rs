//! Write run artifacts: the text report and the optional JSON results export.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::domain::{Band, FigureOfMerit, Measurement};
use crate::error::AppError;

/// Overwrite `path` with the formatted report text.
pub fn write_report(path: &Path, text: &str) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::output(format!("Failed to create report '{}': {e}", path.display())))?;
    file.write_all(text.as_bytes())
        .map_err(|e| AppError::output(format!("Failed to write report '{}': {e}", path.display())))?;
    Ok(())
}

/// JSON schema of `--export-json`.
#[derive(Debug, Serialize)]
pub struct ResultsFile<'a> {
    pub tool: &'static str,
    pub generated: DateTime<Local>,
    pub band: &'a Band,
    /// Best-first, same order as the report table.
    pub results: Vec<ResultRow<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ResultRow<'a> {
    pub rank: usize,
    pub name: &'a str,
    pub n_samples: usize,
    #[serde(flatten)]
    pub fom: &'a FigureOfMerit,
}

/// Write ranked results as pretty JSON. NaN statistics become `null`.
pub fn write_results_json(path: &Path, ranked: &[&Measurement], band: &Band) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::output(format!("Failed to create results JSON '{}': {e}", path.display())))?;

    let doc = ResultsFile {
        tool: env!("CARGO_PKG_NAME"),
        generated: Local::now(),
        band,
        results: ranked
            .iter()
            .enumerate()
            .map(|(i, m)| ResultRow {
                rank: i + 1,
                name: &m.name,
                n_samples: m.curve.len(),
                fom: &m.fom,
            })
            .collect(),
    };

    serde_json::to_writer_pretty(file, &doc)
        .map_err(|e| AppError::output(format!("Failed to write results JSON: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Curve, Sample};

    #[test]
    fn report_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vswr_fom.txt");
        std::fs::write(&path, "stale content that is longer than the new one").unwrap();
        write_report(&path, "fresh\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn json_export_ranks_and_nulls_nan() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        let band = Band::new(1.7e9, 2.5e9).unwrap();
        let good = Measurement {
            name: "good".to_string(),
            curve: Curve::new(vec![Sample::new(2_000_000_000, 1.0)]),
            fom: FigureOfMerit {
                mean_vswr: 1.0,
                max_vswr: 1.0,
                score: 1.0,
                n_points: 1,
            },
        };
        let off = Measurement {
            name: "off".to_string(),
            curve: Curve::new(vec![Sample::new(100, 1.0)]),
            fom: FigureOfMerit::empty(),
        };

        write_results_json(&path, &[&good, &off], &band).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let results = value["results"].as_array().unwrap();
        assert_eq!(results[0]["rank"], 1);
        assert_eq!(results[0]["name"], "good");
        assert_eq!(results[0]["score"], 1.0);
        assert_eq!(results[1]["n_points"], 0);
        assert!(results[1]["mean_vswr"].is_null());
        assert_eq!(value["band"]["fmin_hz"], 1.7e9);
    }
}
