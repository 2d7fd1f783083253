//! examscore - Student Exam Score Predictor
//!
//! Predicts an exam score from five self-reported study and lifestyle
//! factors and derives personalized recommendations.
//!
//! # Architecture
//!
//! - **models**: regression model capability, artifact types, loader
//! - **validation**: per-field range checks, all errors collected
//! - **predictor**: fixed-order feature vector, inference, clamping
//! - **advisor**: ordered threshold rules producing tips
//! - **session**: explicit validate → predict → recommend cycle

pub mod errors;
pub mod types;
pub mod validation;
pub mod models;
pub mod predictor;
pub mod advisor;
pub mod session;

// Re-export commonly used types
pub use errors::{InferenceFault, LoadError, PredictError};
pub use models::{load_model, LoadedModel, RegressionModel};
pub use predictor::Predictor;
pub use session::{ScoringSession, SubmissionOutcome};
pub use types::{PredictionResult, StudentInputs};
pub use validation::{validate, ValidationErrorSet};
pub use advisor::{recommend, Recommendation};

// Terminal front-end and ambient layers
pub mod cli;
pub mod config;
pub mod doctor;
pub mod repl;
pub mod telemetry;
