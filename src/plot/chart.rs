//! Plotters-powered VSWR comparison chart.
//!
//! Chart preparation (`prepare_chart`) is pure: bounds, tick positions, colours,
//! labels, and visible line segments are all computed before any drawing so they
//! can be tested without a backend. `render_plot` then picks a backend from the
//! file extension and draws.
//!
//! Layout:
//! - plot area on the left, legend panel on the right (never over the data)
//! - band of interest shaded green with dashed guide lines at both edges
//! - x grid every 0.1 GHz (coarser by decades on very wide spans), y axis
//!   floored at 0.95 with lines cut where they cross the floor

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::domain::{Band, Measurement, PlotSize};
use crate::error::AppError;

/// Fixed lower bound of the VSWR axis.
pub const Y_FLOOR: f64 = 0.95;
/// Spacing of x-axis grid lines, in GHz.
pub const X_TICK_GHZ: f64 = 0.1;
/// Most x grid lines drawn; wider spans step up by factors of ten.
pub const MAX_X_TICKS: usize = 100;

/// Smallest canvas we can lay out the chart and legend on.
pub const MIN_SIZE: PlotSize = PlotSize {
    width: 400,
    height: 300,
};

const TITLE: &str = "VSWR vs frequency (band of interest shaded)";
const BAND_COLOR: RGBColor = RGBColor(0, 128, 0);

/// Matplotlib's `tab10` cycle.
const PALETTE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

/// One measurement as drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    pub color: RGBColor,
    /// Contiguous runs of `(GHz, VSWR)` points at or above `Y_FLOOR`. A run that
    /// dips under the floor ends (or resumes) at the crossing point.
    pub segments: Vec<Vec<(f64, f64)>>,
}

/// Everything needed to draw the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    /// Union of curve frequencies and the band, in GHz.
    pub x_range: (f64, f64),
    /// `x_range` widened to whole grid steps; the drawn axis.
    pub x_axis: (f64, f64),
    /// X grid spacing in GHz.
    pub x_step: f64,
    /// Y bounds (VSWR).
    pub y_range: (f64, f64),
    /// Band edges in GHz.
    pub band: (f64, f64),
    pub series: Vec<ChartSeries>,
}

/// Compute bounds, ticks and series for a set of measurements.
pub fn prepare_chart(measurements: &[Measurement], band: &Band) -> ChartLayout {
    let mut x0 = band.fmin_ghz();
    let mut x1 = band.fmax_ghz();
    let mut top = f64::NEG_INFINITY;

    for m in measurements {
        for s in m.curve.iter() {
            let f = s.frequency_ghz();
            x0 = x0.min(f);
            x1 = x1.max(f);
            if s.vswr.is_finite() {
                top = top.max(s.vswr);
            }
        }
    }

    let series = measurements
        .iter()
        .enumerate()
        .map(|(i, m)| ChartSeries {
            label: legend_label(m),
            color: PALETTE[i % PALETTE.len()],
            segments: visible_segments(m),
        })
        .collect();

    let x_step = x_step(x0, x1);

    ChartLayout {
        x_range: (x0, x1),
        x_axis: snap_to_grid(x0, x1, x_step),
        x_step,
        y_range: (Y_FLOOR, y_top(top)),
        band: (band.fmin_ghz(), band.fmax_ghz()),
        series,
    }
}

impl ChartLayout {
    /// Number of x grid lines (and labels).
    pub fn x_tick_count(&self) -> usize {
        ((self.x_axis.1 - self.x_axis.0) / self.x_step).round() as usize + 1
    }
}

/// Legend text: `<name> (FoM <score>)`.
pub fn legend_label(m: &Measurement) -> String {
    format!("{} (FoM {:.3})", m.name, m.fom.score)
}

/// Render the chart to `path`. `.svg` selects the SVG backend, anything else
/// is written as a bitmap (PNG).
pub fn render_plot(path: &Path, measurements: &[Measurement], band: &Band, size: PlotSize) -> Result<(), AppError> {
    if size.width < MIN_SIZE.width || size.height < MIN_SIZE.height {
        return Err(AppError::usage(format!(
            "Plot size {}x{} is too small (minimum {}x{})",
            size.width, size.height, MIN_SIZE.width, MIN_SIZE.height
        )));
    }

    let layout = prepare_chart(measurements, band);
    let dims = (size.width, size.height);
    let is_svg = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    if is_svg {
        let root = SVGBackend::new(path, dims).into_drawing_area();
        draw_chart(&root, &layout)?;
        root.present().map_err(plot_err)?;
    } else {
        let root = BitMapBackend::new(path, dims).into_drawing_area();
        draw_chart(&root, &layout)?;
        root.present().map_err(plot_err)?;
    }

    Ok(())
}

fn draw_chart<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, layout: &ChartLayout) -> Result<(), AppError>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(plot_err)?;

    let (width, _) = root.dim_in_pixel();
    let legend_width = (width / 4).clamp(160, 480);
    let (plot_area, legend_area) = root.split_horizontally((width - legend_width) as i32);

    let (x0, x1) = layout.x_axis;
    let (y0, y1) = layout.y_range;
    // Linspace stops short of the range end; pad so the last grid line stays.
    let x_axis = (x0..x1 + layout.x_step * 1e-3).step(layout.x_step);

    let mut chart = ChartBuilder::on(&plot_area)
        .caption(TITLE, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d(x_axis, y0..y1)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Frequency (GHz)")
        .y_desc("VSWR")
        .x_labels(layout.x_tick_count())
        .y_labels(10)
        .x_label_formatter(&|v| format!("{v:.1}"))
        .y_label_formatter(&|v| format!("{v:.2}"))
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 20))
        .bold_line_style(BLACK.mix(0.15).stroke_width(1))
        .light_line_style(&TRANSPARENT)
        .draw()
        .map_err(plot_err)?;

    // Band first so curves are drawn over the shading.
    let (b0, b1) = layout.band;
    chart
        .draw_series(std::iter::once(Rectangle::new(
            [(b0, y0), (b1, y1)],
            BAND_COLOR.mix(0.15).filled(),
        )))
        .map_err(plot_err)?;

    let guide_style = BAND_COLOR.mix(0.6).stroke_width(1);
    for x in [b0, b1] {
        chart
            .draw_series(DashedLineSeries::new(vec![(x, y0), (x, y1)], 8, 5, guide_style))
            .map_err(plot_err)?;
    }

    for series in &layout.series {
        let style = series.color.mix(0.9).stroke_width(2);
        for segment in &series.segments {
            chart
                .draw_series(LineSeries::new(segment.iter().copied(), style))
                .map_err(plot_err)?;
        }
    }

    draw_legend(&legend_area, &layout.series)
}

/// Legend panel: one coloured line swatch plus label per series.
fn draw_legend<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>, series: &[ChartSeries]) -> Result<(), AppError>
where
    DB::ErrorType: 'static,
{
    const FONT_PX: i32 = 16;
    const ROW_PX: i32 = 26;
    const LEFT: i32 = 12;
    const TOP: i32 = 70;

    if series.is_empty() {
        return Ok(());
    }

    let (width, _) = area.dim_in_pixel();
    let right = width as i32 - 12;
    let bottom = TOP + ROW_PX * series.len() as i32 + 8;

    area.draw(&Rectangle::new(
        [(LEFT - 6, TOP - 12), (right, bottom)],
        BLACK.mix(0.3).stroke_width(1),
    ))
    .map_err(plot_err)?;

    for (i, s) in series.iter().enumerate() {
        let y = TOP + 6 + ROW_PX * i as i32;
        area.draw(&PathElement::new(
            vec![(LEFT, y), (LEFT + 28, y)],
            s.color.stroke_width(3),
        ))
        .map_err(plot_err)?;
        area.draw(&Text::new(
            s.label.clone(),
            (LEFT + 36, y - FONT_PX / 2),
            ("sans-serif", FONT_PX).into_font(),
        ))
        .map_err(plot_err)?;
    }

    Ok(())
}

fn plot_err<E: std::fmt::Display>(e: E) -> AppError {
    AppError::output(format!("Failed to render plot: {e}"))
}

fn y_top(max_vswr: f64) -> f64 {
    if !max_vswr.is_finite() || max_vswr <= Y_FLOOR {
        return Y_FLOOR + 0.1;
    }
    (max_vswr + (max_vswr - Y_FLOOR) * 0.05).max(Y_FLOOR + 0.1)
}

/// `X_TICK_GHZ`, times ten until `[x0, x1]` needs at most `MAX_X_TICKS` lines.
fn x_step(x0: f64, x1: f64) -> f64 {
    let mut step = X_TICK_GHZ;
    while (x1 - x0) / step > MAX_X_TICKS as f64 {
        step *= 10.0;
    }
    step
}

/// Widen `[x0, x1]` outwards to multiples of `step`.
fn snap_to_grid(x0: f64, x1: f64, step: f64) -> (f64, f64) {
    let start = (x0 / step + 1e-9).floor() * step;
    let end = (x1 / step - 1e-9).ceil() * step;
    (start.min(x0), end.max(x1))
}

/// Split a curve into runs that stay on screen. Lines crossing `Y_FLOOR` are
/// cut at the crossing; non-finite values break the line.
fn visible_segments(m: &Measurement) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    let mut prev: Option<(f64, f64)> = None;

    for s in m.curve.iter() {
        if !s.vswr.is_finite() {
            if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }

        let point = (s.frequency_ghz(), s.vswr);
        let visible = point.1 >= Y_FLOOR;

        if let Some(p) = prev.filter(|p| (p.1 >= Y_FLOOR) != visible) {
            let cross = floor_crossing(p, point);
            if current.last() != Some(&cross) {
                current.push(cross);
            }
            if !visible {
                segments.push(std::mem::take(&mut current));
            }
        }
        if visible && current.last() != Some(&point) {
            current.push(point);
        }
        prev = Some(point);
    }
    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

/// Where the straight line from `a` to `b` meets `Y_FLOOR`. The two points lie
/// on opposite sides of the floor.
fn floor_crossing(a: (f64, f64), b: (f64, f64)) -> (f64, f64) {
    let t = (Y_FLOOR - a.1) / (b.1 - a.1);
    (a.0 + t * (b.0 - a.0), Y_FLOOR)
}
