//! Density histogram computation shared by the PDF renderers.
//!
//! Kept free of any charting types so the normalization properties can be
//! unit tested directly.

use crate::error::{PlotError, Result};
use crate::metrics::Statistics;

/// Bin count used for all loss PDF histograms
pub const PDF_BINS: usize = 30;

/// Fill opacity of histogram bars
pub const PDF_OPACITY: f64 = 0.5;

/// Round a loss value to 3 decimal places.
///
/// Applied to every sample before binning, matching the training-side
/// report convention. Idempotent over loss-scale magnitudes.
pub fn round3(v: f32) -> f32 {
    (v * 1000.0).round() / 1000.0
}

/// A density-normalized histogram over a sample's own value range.
///
/// Bins are equal-width over `[min, max]` of the rounded samples; densities
/// are scaled so the total bar area is 1 regardless of sample count.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityHistogram {
    start: f32,
    bin_width: f32,
    densities: Vec<f32>,
}

impl DensityHistogram {
    /// Build a histogram from raw loss samples, rounding each to 3 decimals
    /// first. An empty sample or a zero bin request yields `Ok(None)`; a
    /// sample containing a non-finite value is an error, since silently
    /// dropping it would make the class vanish from the figure.
    pub fn from_samples(values: &[f32], bins: usize) -> Result<Option<Self>> {
        if values.is_empty() || bins == 0 {
            return Ok(None);
        }

        if values.iter().any(|v| !v.is_finite()) {
            return Err(PlotError::invalid_parameter(
                "values",
                "loss sample contains a non-finite value",
            ));
        }

        let rounded: Vec<f32> = values.iter().map(|&v| round3(v)).collect();
        let stats = Statistics::from_slice(&rounded);

        // A single distinct value gets a unit-wide range, as numpy does.
        let (min, max) = if stats.min < stats.max {
            (stats.min, stats.max)
        } else {
            (stats.min - 0.5, stats.min + 0.5)
        };

        let bin_width = (max - min) / bins as f32;
        let mut counts = vec![0usize; bins];
        for &v in &rounded {
            let bin = ((v - min) / bin_width).floor() as usize;
            let bin = bin.min(bins - 1);
            counts[bin] += 1;
        }

        // count / (n * width) makes the total bar area sum to 1
        let norm = rounded.len() as f32 * bin_width;
        let densities = counts.iter().map(|&c| c as f32 / norm).collect();

        Ok(Some(DensityHistogram {
            start: min,
            bin_width,
            densities,
        }))
    }

    /// Left edge of the first bin
    pub fn start(&self) -> f32 {
        self.start
    }

    /// Right edge of the last bin
    pub fn end(&self) -> f32 {
        self.start + self.bin_width * self.densities.len() as f32
    }

    pub fn bin_width(&self) -> f32 {
        self.bin_width
    }

    /// Per-bin probability densities, in bin order
    pub fn densities(&self) -> &[f32] {
        &self.densities
    }

    /// Largest single-bin density
    pub fn max_density(&self) -> f32 {
        self.densities.iter().copied().fold(0.0, f32::max)
    }

    /// Iterate bars as `(x_start, x_end, density)` triples
    pub fn bars(&self) -> impl Iterator<Item = (f32, f32, f32)> + '_ {
        self.densities.iter().enumerate().map(move |(i, &d)| {
            let x0 = self.start + i as f32 * self.bin_width;
            (x0, x0 + self.bin_width, d)
        })
    }

    /// Total bar area; 1.0 (within float tolerance) by construction
    pub fn total_area(&self) -> f32 {
        self.densities.iter().sum::<f32>() * self.bin_width
    }
}
