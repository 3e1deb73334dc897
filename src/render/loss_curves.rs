//! Training-loss curve rendering.

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::{PlotError, Result};
use crate::metrics::LossSeries;

use super::render_err;

// matplotlib's default color cycle, so figures match the coursework report
const SERIES_COLORS: [RGBColor; 10] = [
    RGBColor(31, 119, 180),  // blue
    RGBColor(255, 127, 14),  // orange
    RGBColor(44, 160, 44),   // green
    RGBColor(214, 39, 40),   // red
    RGBColor(148, 103, 189), // purple
    RGBColor(140, 86, 75),   // brown
    RGBColor(227, 119, 194), // pink
    RGBColor(127, 127, 127), // gray
    RGBColor(188, 189, 34),  // olive
    RGBColor(23, 190, 207),  // cyan
];

fn series_color(idx: usize) -> RGBColor {
    SERIES_COLORS[idx % SERIES_COLORS.len()]
}

/// Draw one training-loss line per series against a shared epoch axis.
///
/// Every series must have exactly one finite loss value per epoch; shape and
/// value violations are reported before anything is drawn. Loss values are
/// plotted as given, with no transformation.
pub fn render_loss_curves<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    model_name: &str,
    epochs: &[f32],
    series: &[LossSeries],
) -> Result<()> {
    if epochs.is_empty() {
        return Err(PlotError::invalid_parameter(
            "epochs",
            "must contain at least one epoch",
        ));
    }
    if series.is_empty() {
        return Err(PlotError::invalid_parameter(
            "series",
            "must contain at least one loss series",
        ));
    }
    if epochs.iter().any(|e| !e.is_finite()) {
        return Err(PlotError::invalid_parameter(
            "epochs",
            "epoch values must be finite",
        ));
    }
    for s in series {
        if s.len() != epochs.len() {
            return Err(PlotError::dimension_mismatch(
                format!("{} losses per series", epochs.len()),
                format!("{} losses in series '{}'", s.len(), s.label),
            ));
        }
        // A NaN would otherwise poison the axis range folds below
        if s.losses.iter().any(|v| !v.is_finite()) {
            return Err(PlotError::InvalidParameter {
                name: "series".to_string(),
                reason: format!("series '{}' contains a non-finite loss", s.label),
            });
        }
    }

    root.fill(&WHITE).map_err(render_err)?;

    let x_min = epochs.iter().copied().fold(f32::INFINITY, f32::min);
    let x_max = epochs.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let y_min = series
        .iter()
        .flat_map(|s| s.losses.iter().copied())
        .fold(f32::INFINITY, f32::min);
    let y_max = series
        .iter()
        .flat_map(|s| s.losses.iter().copied())
        .fold(f32::NEG_INFINITY, f32::max);

    let (x_lo, x_hi) = padded_range(x_min, x_max);
    let (y_lo, y_hi) = padded_range(y_min, y_max);

    let mut chart = ChartBuilder::on(root)
        .caption(
            format!("{} Training Loss vs. Epoch", model_name),
            ("sans-serif", 30),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Epochs")
        .y_desc("Loss")
        .draw()
        .map_err(render_err)?;

    for (idx, s) in series.iter().enumerate() {
        let color = series_color(idx);
        chart
            .draw_series(LineSeries::new(
                epochs.iter().copied().zip(s.losses.iter().copied()),
                &color,
            ))
            .map_err(render_err)?
            .label(format!("{} Loss", s.label))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;

    Ok(())
}

// 5% headroom on both sides; degenerate ranges widen to a unit span
fn padded_range(min: f32, max: f32) -> (f32, f32) {
    if min < max {
        let pad = (max - min) * 0.05;
        (min - pad, max + pad)
    } else {
        (min - 0.5, max + 0.5)
    }
}
