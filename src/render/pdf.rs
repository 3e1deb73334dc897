//! Per-class loss probability-density figures for the base and branched
//! models.

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::{PlotError, Result};
use crate::metrics::{BaseMetrics, BranchMetrics, ClassLosses, ObjectClass};

use super::histogram::{DensityHistogram, PDF_BINS, PDF_OPACITY};
use super::render_err;

fn class_color(class: ObjectClass) -> RGBColor {
    match class {
        ObjectClass::Pedestrian => RED,
        ObjectClass::Bicycle => GREEN,
        ObjectClass::Car => BLUE,
    }
}

/// Draw the per-class validation-loss PDF of the single-exit base model.
///
/// One chart area with up to three overlaid density histograms (a class with
/// no samples contributes nothing). A class containing a non-finite loss is
/// rejected before anything is drawn. Auxiliary fields on the metrics are
/// ignored.
pub fn render_base_pdf<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    model_name: &str,
    metrics: &BaseMetrics,
) -> Result<()> {
    let hists = class_histograms(&metrics.validation.classes)?;

    root.fill(&WHITE).map_err(render_err)?;
    draw_pdf_panel(root, &format!("{} Loss PDF", model_name), &hists)
}

/// Draw the per-class validation-loss PDFs of the branched model, one panel
/// per branch: `short` on the left, `long` on the right.
pub fn render_branch_pdf<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    model_name: &str,
    metrics: &BranchMetrics,
) -> Result<()> {
    let short = class_histograms(&metrics.validation.short)?;
    let long = class_histograms(&metrics.validation.long)?;

    root.fill(&WHITE).map_err(render_err)?;

    let panels = root.split_evenly((1, 2));
    draw_pdf_panel(
        &panels[0],
        &format!("{} Loss PDF Short Branch", model_name),
        &short,
    )?;
    draw_pdf_panel(
        &panels[1],
        &format!("{} Loss PDF Long Branch", model_name),
        &long,
    )
}

// Built for every class up front so a malformed sample fails before any
// drawing, with the error naming the offending class.
fn class_histograms(
    classes: &ClassLosses,
) -> Result<Vec<(ObjectClass, Option<DensityHistogram>)>> {
    ObjectClass::ALL
        .iter()
        .map(|&class| {
            DensityHistogram::from_samples(&classes.sample(class).loss, PDF_BINS)
                .map_err(|_| {
                    PlotError::invalid_parameter(
                        class.label(),
                        "loss sample contains a non-finite value",
                    )
                })
                .map(|hist| (class, hist))
        })
        .collect()
}

fn draw_pdf_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    hists: &[(ObjectClass, Option<DensityHistogram>)],
) -> Result<()> {
    // Axis ranges spanning every non-empty class
    let mut x_lo = f32::INFINITY;
    let mut x_hi = f32::NEG_INFINITY;
    let mut y_hi = 0.0f32;
    for (_, hist) in hists {
        if let Some(hist) = hist {
            x_lo = x_lo.min(hist.start());
            x_hi = x_hi.max(hist.end());
            y_hi = y_hi.max(hist.max_density());
        }
    }
    // All classes empty: keep valid axes and draw nothing
    if !x_lo.is_finite() || !x_hi.is_finite() {
        x_lo = 0.0;
        x_hi = 1.0;
    }
    let y_hi = if y_hi > 0.0 { y_hi * 1.05 } else { 1.0 };

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_lo..x_hi, 0.0f32..y_hi)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Loss")
        .y_desc("Probability Density")
        .draw()
        .map_err(render_err)?;

    for (class, hist) in hists {
        if let Some(hist) = hist {
            let color = class_color(*class);
            chart
                .draw_series(hist.bars().map(|(x0, x1, density)| {
                    Rectangle::new([(x0, 0.0), (x1, density)], color.mix(PDF_OPACITY).filled())
                }))
                .map_err(render_err)?
                .label(class.label())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.mix(PDF_OPACITY).filled())
                });
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;

    Ok(())
}
