//! KC901V `.ini` measurement parser.
//!
//! Only the `[Curve]` section is read. Each data line looks like
//! `F:<frequency Hz>,<VSWR>`; everything else in the file is ignored.
//!
//! Row handling:
//! - `F:` lines without a VSWR value are skipped, including `F:<freq>,` with
//!   nothing after the comma; a stricter reader would reject the whole file
//!   there, this one only drops the row
//! - `F:` lines whose numbers do not parse fail the whole file
//! - a file with no `[Curve]` header, or no samples under it, fails

use std::path::Path;

use crate::domain::{Curve, Sample};
use crate::error::ParseError;

const CURVE_HEADER: &str = "[Curve]";
const SAMPLE_PREFIX: &str = "F:";

/// Read and parse one measurement file.
pub fn parse_curve_file(path: &Path) -> Result<Curve, ParseError> {
    let text = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_curve_str(&text)
}

/// Parse measurement file contents.
pub fn parse_curve_str(text: &str) -> Result<Curve, ParseError> {
    let mut samples = Vec::new();
    let mut in_curve = false;
    let mut saw_header = false;

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim().trim_start_matches('\u{feff}');

        if !in_curve {
            if line == CURVE_HEADER {
                in_curve = true;
                saw_header = true;
            }
            continue;
        }

        if line.starts_with('[') {
            break;
        }

        let Some(body) = line.strip_prefix(SAMPLE_PREFIX) else {
            continue;
        };

        if let Some(sample) = parse_sample(body, idx + 1)? {
            samples.push(sample);
        }
    }

    if !saw_header {
        return Err(ParseError::MissingCurveSection);
    }
    if samples.is_empty() {
        return Err(ParseError::EmptyCurve);
    }

    Ok(Curve::new(samples))
}

/// Parse the part after `F:`. `Ok(None)` means the VSWR value is absent.
fn parse_sample(body: &str, line: usize) -> Result<Option<Sample>, ParseError> {
    let Some((freq, vswr)) = body.split_once(',') else {
        return Ok(None);
    };
    let vswr = vswr.trim();
    if vswr.is_empty() {
        return Ok(None);
    }

    let freq = freq.trim();
    let frequency_hz = freq.parse::<u64>().map_err(|e| ParseError::InvalidSample {
        line,
        reason: format!("invalid frequency '{freq}': {e}"),
    })?;
    let vswr = vswr.parse::<f64>().map_err(|e| ParseError::InvalidSample {
        line,
        reason: format!("invalid VSWR '{vswr}': {e}"),
    })?;

    Ok(Some(Sample::new(frequency_hz, vswr)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_samples_from_curve_section() {
        let text = "[Info]\nModel=KC901V\n[Curve]\nF:1700000000,1.5\nF:1800000000,1.2\n";
        let curve = parse_curve_str(text).unwrap();
        assert_eq!(
            curve.samples,
            vec![Sample::new(1_700_000_000, 1.5), Sample::new(1_800_000_000, 1.2)]
        );
    }

    #[test]
    fn stops_at_next_section() {
        let text = "[Curve]\nF:100,1.1\n[Marker]\nF:200,9.9\n";
        let curve = parse_curve_str(text).unwrap();
        assert_eq!(curve.samples, vec![Sample::new(100, 1.1)]);
    }

    #[test]
    fn ignores_other_lines_and_skips_missing_vswr() {
        let text = "[Curve]\r\n  Count=3 \r\nF:100\r\nF:200,\r\n  F:300,1.25  \r\n";
        let curve = parse_curve_str(text).unwrap();
        assert_eq!(curve.samples, vec![Sample::new(300, 1.25)]);
    }

    #[test]
    fn empty_value_after_comma_drops_only_that_row() {
        let text = "[Curve]\nF:100,1.5\nF:200,\nF:300,   \nF:400,2.0\n";
        let curve = parse_curve_str(text).unwrap();
        assert_eq!(curve.samples, vec![Sample::new(100, 1.5), Sample::new(400, 2.0)]);
    }

    #[test]
    fn samples_outside_curve_section_are_ignored() {
        let text = "F:100,1.0\n[Curve]\nF:200,2.0\n";
        let curve = parse_curve_str(text).unwrap();
        assert_eq!(curve.samples, vec![Sample::new(200, 2.0)]);
    }

    #[test]
    fn missing_section_is_an_error() {
        let err = parse_curve_str("[Info]\nF:100,1.0\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingCurveSection));
    }

    #[test]
    fn section_without_samples_is_an_error() {
        let err = parse_curve_str("[Curve]\nF:100\nfoo\n[End]\n").unwrap_err();
        assert!(matches!(err, ParseError::EmptyCurve));
    }

    #[test]
    fn unparsable_numbers_fail_the_file() {
        let err = parse_curve_str("[Curve]\nF:100,1.0\nF:abc,1.0\n").unwrap_err();
        match err {
            ParseError::InvalidSample { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
        assert!(parse_curve_str("[Curve]\nF:100,high\n").is_err());
    }

    #[test]
    fn header_must_match_exactly() {
        let err = parse_curve_str("[curve]\nF:100,1.0\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingCurveSection));
    }

    #[test]
    fn reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[Curve]\nF:1700000000,1.5").unwrap();
        let curve = parse_curve_file(file.path()).unwrap();
        assert_eq!(curve.len(), 1);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_curve_file(&dir.path().join("nope.ini")).unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
    }
}
