//! Input directory discovery.

use std::path::{Path, PathBuf};

use crate::error::AppError;

const MEASUREMENT_EXT: &str = "ini";

/// List `*.ini` files directly inside `dir`, sorted by file name.
///
/// Subdirectories are not descended into.
pub fn scan_input_dir(dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    if !dir.is_dir() {
        return Err(AppError::usage(format!("Input folder not found: {}", dir.display())));
    }

    let entries = std::fs::read_dir(dir)
        .map_err(|e| AppError::usage(format!("Failed to read input folder '{}': {e}", dir.display())))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|e| AppError::usage(format!("Failed to read input folder '{}': {e}", dir.display())))?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == MEASUREMENT_EXT) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Display name for a measurement: the file stem.
pub fn measurement_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
