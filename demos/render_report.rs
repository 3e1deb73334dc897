//! Renders the three report figures from synthetic metrics and saves them
//! as SVGs in the current directory.
//!
//! Run with: cargo run --example render_report

use lossviz::metrics::{
    BaseMetrics, BaseValidation, BranchMetrics, BranchValidation, ClassLossSample, ClassLosses,
    LossHistory,
};
use lossviz::render::{render_base_pdf, render_branch_pdf, render_loss_curves};
use plotters::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

fn class_sample(rng: &mut StdRng, mean: f32, std: f32, n: usize) -> ClassLossSample {
    let dist = Normal::new(mean, std).unwrap();
    ClassLossSample::new((0..n).map(|_| dist.sample(rng).max(0.0)).collect())
}

fn synthetic_classes(rng: &mut StdRng, base: f32) -> ClassLosses {
    ClassLosses {
        pedestrian: class_sample(rng, base + 0.15, 0.05, 400),
        bicycle: class_sample(rng, base + 0.25, 0.08, 250),
        car: class_sample(rng, base + 0.05, 0.03, 600),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(7);

    // Synthetic two-branch training run
    let mut short = LossHistory::new();
    let mut long = LossHistory::new();
    for epoch in 0..40 {
        let t = epoch as f32;
        short.record(epoch, 2.5 * (-t / 9.0).exp() + 0.30);
        long.record(epoch, 2.0 * (-t / 14.0).exp() + 0.12);
    }
    let epochs = short.epochs().to_vec();
    let series = vec![short.into_series("short"), long.into_series("long")];

    {
        let root = SVGBackend::new("training_loss.svg", (900, 600)).into_drawing_area();
        render_loss_curves(&root, "BranchyDet", &epochs, &series)?;
        root.present()?;
    }

    let base = BaseMetrics {
        validation: BaseValidation {
            classes: synthetic_classes(&mut rng, 0.2),
            ols: vec![],
        },
    };
    {
        let root = SVGBackend::new("base_pdf.svg", (900, 600)).into_drawing_area();
        render_base_pdf(&root, "BaseDet", &base)?;
        root.present()?;
    }

    let branch = BranchMetrics {
        validation: BranchValidation {
            short: synthetic_classes(&mut rng, 0.35),
            long: synthetic_classes(&mut rng, 0.15),
            ols_1: vec![],
            ols_2: vec![],
            early_exit_count: 128,
        },
    };
    {
        let root = SVGBackend::new("branch_pdf.svg", (1200, 600)).into_drawing_area();
        render_branch_pdf(&root, "BranchyDet", &branch)?;
        root.present()?;
    }

    println!("wrote training_loss.svg, base_pdf.svg, branch_pdf.svg");
    Ok(())
}
