//! Type definitions module
//!
//! Value objects passed between the validator, predictor and advisor.

pub mod inputs;
pub mod features;
pub mod prediction;

// Re-export commonly used types
pub use inputs::StudentInputs;
pub use features::{FeatureVector, FEATURE_COUNT};
pub use prediction::{PerformanceBand, PredictionResult, SCORE_MAX, SCORE_MIN};
