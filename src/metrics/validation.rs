//! Typed validation metrics for the three-class detection task.
//!
//! The training-side recorder historically emitted nested JSON dictionaries
//! keyed by `class_0`/`class_1`/`class_2` (and `short`/`long` for the
//! branched model). These records give that shape compile-time structure:
//! a missing class is a deserialization error instead of a lookup failure
//! inside a render call. Serde attributes keep the wire format unchanged.

use serde::{Deserialize, Serialize};

/// The fixed detection class vocabulary, in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectClass {
    Pedestrian,
    Bicycle,
    Car,
}

impl ObjectClass {
    pub const ALL: [ObjectClass; 3] = [
        ObjectClass::Pedestrian,
        ObjectClass::Bicycle,
        ObjectClass::Car,
    ];

    /// Human-readable label used in legends
    pub fn label(&self) -> &'static str {
        match self {
            ObjectClass::Pedestrian => "pedestrian",
            ObjectClass::Bicycle => "bicycle",
            ObjectClass::Car => "car",
        }
    }
}

/// Unordered validation losses observed for a single class.
///
/// Duplicates are allowed and an empty sample is valid (it simply renders
/// no histogram).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassLossSample {
    pub loss: Vec<f32>,
}

impl ClassLossSample {
    pub fn new(loss: Vec<f32>) -> Self {
        Self { loss }
    }

    pub fn is_empty(&self) -> bool {
        self.loss.is_empty()
    }
}

/// Per-class loss samples for one validation scope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassLosses {
    #[serde(rename = "class_0")]
    pub pedestrian: ClassLossSample,
    #[serde(rename = "class_1")]
    pub bicycle: ClassLossSample,
    #[serde(rename = "class_2")]
    pub car: ClassLossSample,
}

impl ClassLosses {
    /// Get the sample collection for a class
    pub fn sample(&self, class: ObjectClass) -> &ClassLossSample {
        match class {
            ObjectClass::Pedestrian => &self.pedestrian,
            ObjectClass::Bicycle => &self.bicycle,
            ObjectClass::Car => &self.car,
        }
    }
}

/// Validation scope of the single-exit base model.
///
/// `ols` is recorded by the training side but not consumed by rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseValidation {
    #[serde(flatten)]
    pub classes: ClassLosses,
    #[serde(default)]
    pub ols: Vec<f32>,
}

/// Metrics produced by a base-model validation pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseMetrics {
    pub validation: BaseValidation,
}

/// Validation scope of the branched (multi-exit) model.
///
/// The auxiliary fields (`ols_1`, `ols_2`, `early_exit_count`) are carried
/// for callers but not read by rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BranchValidation {
    pub short: ClassLosses,
    pub long: ClassLosses,
    #[serde(default)]
    pub ols_1: Vec<f32>,
    #[serde(default)]
    pub ols_2: Vec<f32>,
    #[serde(default)]
    pub early_exit_count: u32,
}

/// Metrics produced by a branched-model validation pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BranchMetrics {
    pub validation: BranchValidation,
}
