pub mod series;
pub mod statistics;
pub mod validation;

pub use series::{LossHistory, LossSeries};
pub use statistics::Statistics;
pub use validation::{
    BaseMetrics,
    BaseValidation,
    BranchMetrics,
    BranchValidation,
    ClassLossSample,
    ClassLosses,
    ObjectClass,
};
