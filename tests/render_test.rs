use lossviz::error::PlotError;
use lossviz::metrics::{
    BaseMetrics, BaseValidation, BranchMetrics, BranchValidation, ClassLossSample, ClassLosses,
    LossHistory, LossSeries,
};
use lossviz::render::{render_base_pdf, render_branch_pdf, render_loss_curves};
use plotters::prelude::*;

// Number of <polyline> elements whose points attribute holds exactly
// `points` coordinate pairs. Mesh gridlines and legend strokes are two-point
// segments, so series lines are the only paths with one pair per epoch.
fn polylines_with_points(svg: &str, points: usize) -> usize {
    svg.split("<polyline")
        .skip(1)
        .filter(|element| {
            element
                .split("points=\"")
                .nth(1)
                .and_then(|attr| attr.split('"').next())
                .map(|pairs| pairs.split_whitespace().count() == points)
                .unwrap_or(false)
        })
        .count()
}

fn sample_classes() -> ClassLosses {
    ClassLosses {
        pedestrian: ClassLossSample::new(vec![0.1, 0.15, 0.2, 0.2, 0.3]),
        bicycle: ClassLossSample::new(vec![0.4, 0.45, 0.5]),
        car: ClassLossSample::new(vec![0.6, 0.7, 0.7, 0.8]),
    }
}

#[test]
fn test_loss_curves_figure_content() {
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, (900, 600)).into_drawing_area();
        let series = vec![LossSeries::new("train", vec![3.0, 2.0, 1.0])];
        render_loss_curves(&root, "ResNet", &[0.0, 1.0, 2.0], &series).unwrap();
        root.present().unwrap();
    }

    assert!(buffer.contains("ResNet Training Loss vs. Epoch"));
    assert!(buffer.contains("train Loss"));
    assert!(buffer.contains("Epochs"));
    assert!(buffer.contains("polyline"));
}

#[test]
fn test_loss_curves_multiple_series() {
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, (900, 600)).into_drawing_area();
        let series = vec![
            LossSeries::new("short", vec![3.0, 2.0, 1.5, 1.2]),
            LossSeries::new("long", vec![2.5, 1.8, 1.2, 0.9]),
        ];
        render_loss_curves(&root, "BranchyDet", &[0.0, 1.0, 2.0, 3.0], &series).unwrap();
        root.present().unwrap();
    }

    assert!(buffer.contains("short Loss"));
    assert!(buffer.contains("long Loss"));
}

#[test]
fn test_one_polyline_per_series_with_one_point_per_epoch() {
    let epochs: Vec<f32> = (0..7).map(|e| e as f32).collect();
    let series = vec![
        LossSeries::new("short", (0..7).map(|e| 3.0 - 0.3 * e as f32).collect()),
        LossSeries::new("long", (0..7).map(|e| 2.0 - 0.2 * e as f32).collect()),
    ];

    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, (900, 600)).into_drawing_area();
        render_loss_curves(&root, "BranchyDet", &epochs, &series).unwrap();
        root.present().unwrap();
    }

    assert_eq!(polylines_with_points(&buffer, epochs.len()), series.len());
}

#[test]
fn test_loss_curves_rejects_length_mismatch() {
    let mut buffer = String::new();
    let err = {
        let root = SVGBackend::with_string(&mut buffer, (900, 600)).into_drawing_area();
        // 3 epochs, 4 losses
        let series = vec![LossSeries::new("train", vec![3.0, 2.0, 1.0, 0.5])];
        render_loss_curves(&root, "ResNet", &[0.0, 1.0, 2.0], &series).unwrap_err()
    };

    assert!(matches!(err, PlotError::DimensionMismatch { .. }));
    // shape checks run before drawing, so no partial figure
    assert!(!buffer.contains("Training Loss"));
}

#[test]
fn test_loss_curves_rejects_empty_inputs() {
    let mut buffer = String::new();
    let root = SVGBackend::with_string(&mut buffer, (900, 600)).into_drawing_area();

    let err = render_loss_curves(&root, "ResNet", &[], &[LossSeries::new("train", vec![])])
        .unwrap_err();
    assert!(matches!(err, PlotError::InvalidParameter { .. }));

    let err = render_loss_curves(&root, "ResNet", &[0.0], &[]).unwrap_err();
    assert!(matches!(err, PlotError::InvalidParameter { .. }));
}

#[test]
fn test_loss_curves_rejects_non_finite_loss() {
    let mut buffer = String::new();
    let err = {
        let root = SVGBackend::with_string(&mut buffer, (900, 600)).into_drawing_area();
        let series = vec![LossSeries::new("train", vec![3.0, f32::NAN, 1.0])];
        render_loss_curves(&root, "ResNet", &[0.0, 1.0, 2.0], &series).unwrap_err()
    };

    assert!(matches!(err, PlotError::InvalidParameter { .. }));
    assert!(!buffer.contains("Training Loss"));
}

#[test]
fn test_base_pdf_figure_content() {
    let metrics = BaseMetrics {
        validation: BaseValidation {
            classes: sample_classes(),
            ols: vec![],
        },
    };

    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, (900, 600)).into_drawing_area();
        render_base_pdf(&root, "ResNet", &metrics).unwrap();
        root.present().unwrap();
    }

    assert!(buffer.contains("ResNet Loss PDF"));
    assert!(buffer.contains("Probability Density"));
    assert!(buffer.contains("pedestrian"));
    assert!(buffer.contains("bicycle"));
    assert!(buffer.contains("car"));
}

#[test]
fn test_base_pdf_skips_empty_class() {
    let metrics = BaseMetrics {
        validation: BaseValidation {
            classes: ClassLosses {
                pedestrian: ClassLossSample::new(vec![0.123456]),
                bicycle: ClassLossSample::default(),
                car: ClassLossSample::new(vec![0.5]),
            },
            ols: vec![],
        },
    };

    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, (900, 600)).into_drawing_area();
        render_base_pdf(&root, "ResNet", &metrics).unwrap();
        root.present().unwrap();
    }

    assert!(buffer.contains("pedestrian"));
    assert!(buffer.contains("car"));
    // no samples, no bars, no legend entry
    assert!(!buffer.contains("bicycle"));
}

#[test]
fn test_base_pdf_all_classes_empty_still_renders() {
    let metrics = BaseMetrics::default();

    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, (900, 600)).into_drawing_area();
        render_base_pdf(&root, "ResNet", &metrics).unwrap();
        root.present().unwrap();
    }

    assert!(buffer.contains("ResNet Loss PDF"));
}

#[test]
fn test_base_pdf_rejects_non_finite_loss() {
    let metrics = BaseMetrics {
        validation: BaseValidation {
            classes: ClassLosses {
                pedestrian: ClassLossSample::new(vec![0.1, f32::NAN, 0.2]),
                bicycle: ClassLossSample::new(vec![0.4]),
                car: ClassLossSample::new(vec![0.5]),
            },
            ols: vec![],
        },
    };

    let mut buffer = String::new();
    let err = {
        let root = SVGBackend::with_string(&mut buffer, (900, 600)).into_drawing_area();
        render_base_pdf(&root, "ResNet", &metrics).unwrap_err()
    };

    assert!(matches!(err, PlotError::InvalidParameter { .. }));
    // histograms are validated before any drawing
    assert!(!buffer.contains("Loss PDF"));
}

#[test]
fn test_branch_pdf_rejects_non_finite_loss() {
    let mut classes = sample_classes();
    classes.car.loss.push(f32::INFINITY);
    let metrics = BranchMetrics {
        validation: BranchValidation {
            short: sample_classes(),
            long: classes,
            ols_1: vec![],
            ols_2: vec![],
            early_exit_count: 0,
        },
    };

    let mut buffer = String::new();
    let err = {
        let root = SVGBackend::with_string(&mut buffer, (1200, 600)).into_drawing_area();
        render_branch_pdf(&root, "BranchyDet", &metrics).unwrap_err()
    };

    assert!(matches!(err, PlotError::InvalidParameter { .. }));
    // both branches are checked up front, so not even the short panel drew
    assert!(!buffer.contains("Short Branch"));
}

#[test]
fn test_branch_pdf_draws_both_panels() {
    let metrics = BranchMetrics {
        validation: BranchValidation {
            short: sample_classes(),
            long: sample_classes(),
            ols_1: vec![1.0],
            ols_2: vec![2.0],
            early_exit_count: 7,
        },
    };

    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, (1200, 600)).into_drawing_area();
        render_branch_pdf(&root, "BranchyDet", &metrics).unwrap();
        root.present().unwrap();
    }

    assert!(buffer.contains("BranchyDet Loss PDF Short Branch"));
    assert!(buffer.contains("BranchyDet Loss PDF Long Branch"));
}

#[test]
fn test_history_save_load_and_export_flow() {
    let dir = tempfile::tempdir().unwrap();

    let mut history = LossHistory::new();
    for epoch in 0..10 {
        history.record(epoch, 2.0 / (epoch + 1) as f32);
    }

    let json_path = dir.path().join("history.json");
    history.save(json_path.to_str().unwrap()).unwrap();
    let restored = LossHistory::load(json_path.to_str().unwrap()).unwrap();
    assert_eq!(restored.epochs(), history.epochs());

    // caller-side export: render straight to an SVG file
    let svg_path = dir.path().join("loss.svg");
    let epochs = restored.epochs().to_vec();
    let series = vec![restored.into_series("train")];
    {
        let root = SVGBackend::new(&svg_path, (900, 600)).into_drawing_area();
        render_loss_curves(&root, "ResNet", &epochs, &series).unwrap();
        root.present().unwrap();
    }

    let written = std::fs::metadata(&svg_path).unwrap();
    assert!(written.len() > 0);
}
