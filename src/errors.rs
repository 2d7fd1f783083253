//! Error types for examscore
//!
//! Every failure in the prediction pipeline is converted into one of these
//! values at its origin. None of them is allowed to abort the host process.

use crate::validation::ValidationErrorSet;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to load a model artifact from disk
#[derive(Error, Debug)]
pub enum LoadError {
    /// Path does not resolve to an existing, readable file
    #[error("Model file '{}' not found", path.display())]
    NotFound { path: PathBuf },

    /// File exists but its contents are not a usable model
    #[error("Error loading model from '{}': {reason}", path.display())]
    Deserialization { path: PathBuf, reason: String },
}

impl LoadError {
    /// Path the loader was asked to read
    pub fn path(&self) -> &PathBuf {
        match self {
            LoadError::NotFound { path } => path,
            LoadError::Deserialization { path, .. } => path,
        }
    }
}

/// Runtime fault raised by a model backend during inference
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceFault {
    /// Feature vector length does not match what the model expects
    #[error("Shape mismatch: model expects {expected} features, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Model produced NaN or an infinite value
    #[error("Model produced a non-finite output: {value}")]
    NonFinite { value: f64 },

    /// Backend panicked or failed in an unclassified way
    #[error("Model backend failure: {0}")]
    Backend(String),
}

/// Failure to produce a prediction
#[derive(Error, Debug)]
pub enum PredictError {
    /// Predictor has no model to run against
    #[error("Model not loaded! Predictions are unavailable.")]
    ModelUnavailable,

    /// Inputs failed validation; prediction refused
    #[error("Please fix the input errors before predicting ({} invalid field(s))", .0.len())]
    InvalidInputs(ValidationErrorSet),

    /// Model raised a fault while scoring
    #[error("Error making prediction: {0}")]
    Inference(#[from] InferenceFault),
}
