//! # Lossviz - Training Metrics Plotting
//!
//! Lossviz renders the two figures a detection-model training run needs:
//! training-loss curves over epochs, and per-class validation-loss
//! probability density histograms (optionally split over the `short`/`long`
//! branches of a multi-exit model).
//!
//! The renderer is a pure library surface: callers supply already-computed
//! metrics and a `plotters` drawing area, and keep full ownership of the
//! resulting figure (display, export, disposal). No state is held between
//! calls.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lossviz::metrics::LossSeries;
//! use lossviz::render::render_loss_curves;
//! use plotters::prelude::*;
//!
//! let epochs: Vec<f32> = (0..10).map(|e| e as f32).collect();
//! let series = vec![LossSeries::new("train", vec![0.9; 10])];
//!
//! let root = SVGBackend::new("loss.svg", (900, 600)).into_drawing_area();
//! render_loss_curves(&root, "ResNet", &epochs, &series).unwrap();
//! root.present().unwrap();
//! ```
//!
//! ## Module Organization
//!
//! - [`error`] - Error types and result handling
//! - [`metrics`] - Typed loss metrics, history tracking, statistics
//! - [`render`] - Chart rendering onto caller-owned drawing areas

pub mod error;
pub mod metrics;
pub mod render;
