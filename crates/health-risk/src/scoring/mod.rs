//! Domain-agnostic scoring primitives shared by the assessment engines.

mod aggregate;
mod category;
pub mod normalize;
mod recommend;

pub use aggregate::{LogisticCurve, RiskFactor, SubScoreSet, WeightTable, EULER_APPROX};
pub use category::{predicted_class, CategoryThresholds, RiskCategory};
pub use normalize::{RangeWarning, ReferenceRange};
pub use recommend::RecommendationList;
