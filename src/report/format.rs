//! Fixed-width figure-of-merit table.
//!
//! The same text is echoed to the terminal and written to the report file, so
//! it must be deterministic for a given set of inputs.

use crate::domain::{Band, Measurement};

const RULE_WIDTH: usize = 70;
const NAME_WIDTH: usize = 45;

/// Format the ranked table with header, footer, and best-in-band line.
///
/// `ranked` is expected best-first (see `rank_by_score`).
pub fn format_report(ranked: &[&Measurement], band: &Band) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&format!(
        "Figure of merit (band of interest: {:.3}–{:.3} GHz)\n",
        band.fmin_ghz(),
        band.fmax_ghz()
    ));
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "{:<NAME_WIDTH$} {:>10} {:>10} {:>8}\n",
        "File", "Mean VSWR", "Max VSWR", "Score"
    ));
    out.push_str(&rule);
    out.push('\n');

    for m in ranked {
        out.push_str(&format_row(m));
        out.push('\n');
    }

    out.push_str(&rule);
    out.push('\n');
    out.push_str("Score: 1 = ideal (VSWR = 1 across band). Lower mean/max VSWR is better.\n");

    if let Some(best) = ranked.first() {
        out.push_str(&format_best(best));
        out.push('\n');
    }

    out
}

fn format_row(m: &Measurement) -> String {
    format!(
        "{:<NAME_WIDTH$} {:>10} {:>10} {:>8.4}",
        m.name,
        format_stat(m.fom.mean_vswr),
        format_stat(m.fom.max_vswr),
        m.fom.score
    )
}

/// Four decimals; a missing statistic prints as `nan`.
fn format_stat(v: f64) -> String {
    if v.is_nan() { "nan".to_string() } else { format!("{v:.4}") }
}

/// `Best in band: <name> (score <score>)`.
pub fn format_best(best: &Measurement) -> String {
    format!("Best in band: {} (score {:.4})", best.name, best.fom.score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Curve, FigureOfMerit};

    fn measurement(name: &str, mean: f64, max: f64, score: f64) -> Measurement {
        Measurement {
            name: name.to_string(),
            curve: Curve::default(),
            fom: FigureOfMerit {
                mean_vswr: mean,
                max_vswr: max,
                score,
                n_points: 3,
            },
        }
    }

    #[test]
    fn formats_table_layout() {
        let band = Band::new(1.7e9, 2.5e9).unwrap();
        let a = measurement("antenna_a", 1.0, 1.0, 1.0);
        let b = measurement("antenna_b", 2.0, 2.0, 0.5);
        let text = format_report(&[&a, &b], &band);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Figure of merit (band of interest: 1.700–2.500 GHz)");
        assert_eq!(lines[1], "-".repeat(70));
        assert_eq!(
            lines[2],
            format!("{:<45} {:>10} {:>10} {:>8}", "File", "Mean VSWR", "Max VSWR", "Score")
        );
        assert_eq!(
            lines[4],
            format!("{:<45} {:>10} {:>10} {:>8}", "antenna_a", "1.0000", "1.0000", "1.0000")
        );
        assert_eq!(
            lines[5],
            format!("{:<45} {:>10} {:>10} {:>8}", "antenna_b", "2.0000", "2.0000", "0.5000")
        );
        assert_eq!(lines[7], "Score: 1 = ideal (VSWR = 1 across band). Lower mean/max VSWR is better.");
        assert_eq!(lines[8], "Best in band: antenna_a (score 1.0000)");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn nan_statistics_render_as_nan() {
        let band = Band::new(1.7e9, 2.5e9).unwrap();
        let m = Measurement {
            name: "out_of_band".to_string(),
            curve: Curve::default(),
            fom: FigureOfMerit::empty(),
        };
        let text = format_report(&[&m], &band);
        let row = text.lines().nth(4).unwrap();
        assert_eq!(row, format!("{:<45} {:>10} {:>10} {:>8}", "out_of_band", "nan", "nan", "0.0000"));
    }

    #[test]
    fn long_names_are_not_truncated() {
        let band = Band::new(1.0e9, 2.0e9).unwrap();
        let name = "x".repeat(60);
        let m = measurement(&name, 1.2, 1.4, 0.9);
        let text = format_report(&[&m], &band);
        assert!(text.lines().nth(4).unwrap().starts_with(&name));
    }
}
