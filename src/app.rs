//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - sets up logging and loads `.env`
//! - parses and validates CLI arguments
//! - loads and scores every measurement file
//! - renders the plot and writes the report (plus optional JSON)
//! - echoes the report to the terminal

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::domain::AnalysisConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `vswr-fom` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = cli.into_config()?;

    match analyse(&config)? {
        RunOutcome::NoInputFiles => println!("No .ini files found in {}", config.input_dir.display()),
        RunOutcome::NoValidData => println!("No valid .ini data loaded."),
        RunOutcome::Written(artifacts) => {
            println!("\n{}", artifacts.report);
            println!("All outputs written to {}:", absolute(&config.output_dir).display());
            for path in artifacts.paths() {
                let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
                println!("  - {name}");
            }
        }
    }

    Ok(())
}

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// What a run produced.
#[derive(Debug)]
pub enum RunOutcome {
    /// The input folder has no `*.ini` files; nothing written.
    NoInputFiles,
    /// Files were found but none parsed; nothing written.
    NoValidData,
    Written(Artifacts),
}

/// Files written by a successful run, plus the report text.
#[derive(Debug)]
pub struct Artifacts {
    pub plot: PathBuf,
    pub report_file: PathBuf,
    pub json: Option<PathBuf>,
    pub report: String,
}

impl Artifacts {
    pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        [&self.plot, &self.report_file].into_iter().chain(self.json.as_ref())
    }
}

/// Run the whole analysis for a resolved configuration.
pub fn analyse(config: &AnalysisConfig) -> Result<RunOutcome, AppError> {
    let loaded = pipeline::load_measurements(&config.input_dir, &config.band)?;

    if loaded.files_found == 0 {
        return Ok(RunOutcome::NoInputFiles);
    }
    if loaded.measurements.is_empty() {
        return Ok(RunOutcome::NoValidData);
    }

    std::fs::create_dir_all(&config.output_dir).map_err(|e| {
        AppError::output(format!(
            "Failed to create output folder '{}': {e}",
            config.output_dir.display()
        ))
    })?;

    let plot = config.plot_path();
    crate::plot::render_plot(&plot, &loaded.measurements, &config.band, config.plot_size)?;
    info!(path = %plot.display(), "wrote plot");

    let ranked = crate::report::rank_by_score(&loaded.measurements);
    let report = crate::report::format_report(&ranked, &config.band);

    let report_file = config.report_path();
    crate::io::write_report(&report_file, &report)?;
    info!(path = %report_file.display(), "wrote report");

    if let Some(path) = &config.export_json {
        crate::io::write_results_json(path, &ranked, &config.band)?;
        info!(path = %path.display(), "wrote results JSON");
    }

    Ok(RunOutcome::Written(Artifacts {
        plot,
        report_file,
        json: config.export_json.clone(),
        report,
    }))
}

fn absolute(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
