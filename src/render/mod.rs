//! Chart rendering onto caller-owned `plotters` drawing areas.
//!
//! Each operation draws a complete figure (title, axes, legend, gridlines)
//! and returns; the caller keeps ownership of the surface and decides how to
//! present or export it.

pub mod histogram;
pub mod loss_curves;
pub mod pdf;

pub use histogram::{round3, DensityHistogram, PDF_BINS, PDF_OPACITY};
pub use loss_curves::render_loss_curves;
pub use pdf::{render_base_pdf, render_branch_pdf};

use crate::error::PlotError;

/// Stringify a plotters backend failure into the crate error type
pub(crate) fn render_err<E: std::error::Error>(err: E) -> PlotError {
    PlotError::Render(err.to_string())
}
