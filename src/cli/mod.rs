//! Command-line parsing for the VSWR figure-of-merit analyser.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! parsing/scoring/reporting code. Every option can also be supplied through an
//! environment variable (or a `.env` file in the working directory).

use std::path::PathBuf;

use clap::Parser;

use crate::domain::{AnalysisConfig, Band, PlotSize};
use crate::error::AppError;

/// Name of the report file written to the output folder.
pub const REPORT_FILE: &str = "vswr_fom.txt";

/// Top-level CLI.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "vswr-fom",
    version,
    about = "Analyse KC901V VNA S11/VSWR .ini files: plot curves and compute FOM."
)]
pub struct Cli {
    /// Minimum frequency of interest in Hz (default: 1.7e9 = 1.7 GHz).
    #[arg(long, value_name = "Hz", env = "VSWR_FMIN", default_value_t = 1.7e9)]
    pub fmin: f64,

    /// Maximum frequency of interest in Hz (default: 2.5e9 = 2.5 GHz).
    #[arg(long, value_name = "Hz", env = "VSWR_FMAX", default_value_t = 2.5e9)]
    pub fmax: f64,

    /// Folder containing .ini files.
    #[arg(long, env = "VSWR_INPUT", default_value = "input")]
    pub input: PathBuf,

    /// Folder for all outputs: plot and FOM report.
    #[arg(long, env = "VSWR_OUTPUT", default_value = "output")]
    pub output: PathBuf,

    /// Plot filename inside the output folder (`.svg` writes SVG, anything else PNG).
    #[arg(long = "plot-file", env = "VSWR_PLOT_FILE", default_value = "vswr_curves.png")]
    pub plot_file: String,

    /// Also write ranked results as JSON to this path.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,

    /// Plot width (pixels).
    #[arg(long, default_value_t = PlotSize::default().width)]
    pub width: u32,

    /// Plot height (pixels).
    #[arg(long, default_value_t = PlotSize::default().height)]
    pub height: u32,
}

impl Cli {
    /// Validate arguments and resolve them into a run configuration.
    pub fn into_config(self) -> Result<AnalysisConfig, AppError> {
        let band = Band::new(self.fmin, self.fmax)?;

        if !self.input.is_dir() {
            return Err(AppError::usage(format!("Input folder not found: {}", self.input.display())));
        }

        if self.plot_file.trim().is_empty() {
            return Err(AppError::usage("--plot-file must not be empty"));
        }

        Ok(AnalysisConfig {
            band,
            input_dir: self.input,
            output_dir: self.output,
            plot_file: self.plot_file,
            report_file: REPORT_FILE.to_string(),
            export_json: self.export_json,
            plot_size: PlotSize {
                width: self.width,
                height: self.height,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["vswr-fom"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn accepts_scientific_notation_band() {
        let cli = parse(&["--fmin", "2.4e9", "--fmax", "2.5e9"]);
        assert_eq!(cli.fmin, 2.4e9);
        assert_eq!(cli.fmax, 2.5e9);
    }

    #[test]
    fn inverted_band_is_a_usage_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().to_str().unwrap();
        let err = parse(&["--fmin", "2.5e9", "--fmax", "1.7e9", "--input", input])
            .into_config()
            .unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_USAGE);
        assert!(err.to_string().contains("--fmin must be less than --fmax"));
    }

    #[test]
    fn missing_input_dir_is_a_usage_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = parse(&["--input", missing.to_str().unwrap()])
            .into_config()
            .unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_USAGE);
        assert!(err.to_string().contains("Input folder not found"));
    }

    #[test]
    fn resolves_paths_in_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().to_str().unwrap();
        let out = dir.path().join("out");
        let config = parse(&["--input", input, "--output", out.to_str().unwrap(), "--plot-file", "p.svg"])
            .into_config()
            .unwrap();
        assert_eq!(config.plot_path(), out.join("p.svg"));
        assert_eq!(config.report_path(), out.join(REPORT_FILE));
        assert_eq!(config.plot_size, PlotSize::default());
    }
}
