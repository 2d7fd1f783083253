//! Scoring session
//!
//! Owns the model for the lifetime of the process and runs each explicit
//! submission as one validate → predict → recommend cycle. A session whose
//! model failed to load stays usable: submissions are still validated, and
//! valid ones come back as [`SubmissionOutcome::Unavailable`].

pub mod record;

pub use record::PredictionRecord;

use crate::advisor::{recommend, Recommendation};
use crate::errors::PredictError;
use crate::models::{load_model, RegressionModel};
use crate::predictor::Predictor;
use crate::telemetry::{TelemetryCollector, TelemetryEvent};
use crate::types::{PerformanceBand, PredictionResult, StudentInputs};
use crate::validation::{InputValidator, ValidationErrorSet};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// State of the session's model
#[derive(Debug, Clone)]
pub enum ModelStatus {
    /// Model loaded and ready
    Ready { name: String, kind: String },
    /// No model; predictions disabled
    Unavailable { reason: String },
}

impl ModelStatus {
    /// Whether predictions can be made
    pub fn is_ready(&self) -> bool {
        matches!(self, ModelStatus::Ready { .. })
    }
}

/// A successfully scored submission
#[derive(Debug, Clone)]
pub struct ScoredSubmission {
    pub inputs: StudentInputs,
    pub prediction: PredictionResult,
    pub band: PerformanceBand,
    pub recommendations: Vec<Recommendation>,
}

impl ScoredSubmission {
    /// Snapshot for output
    pub fn to_record(&self) -> PredictionRecord {
        PredictionRecord::new(self.inputs, self.prediction, self.recommendations.clone())
    }
}

/// Result of one submission
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// One or more fields out of range; nothing was predicted
    Rejected(ValidationErrorSet),
    /// Inputs valid but no prediction could be made
    Unavailable(PredictError),
    /// Prediction and tips
    Scored(ScoredSubmission),
}

/// Explicitly initialized scoring session
pub struct ScoringSession {
    predictor: Predictor,
    validator: InputValidator,
    status: ModelStatus,
    telemetry: TelemetryCollector,
}

impl ScoringSession {
    /// Load the model at `path` and start a session
    ///
    /// Never fails: a load error leaves the session in the unavailable state.
    pub fn start(path: impl AsRef<Path>, telemetry: TelemetryCollector) -> Self {
        let path = path.as_ref();
        let load = load_model(path);

        let status = match &load {
            Ok(model) => {
                telemetry.record(TelemetryEvent::ModelLoaded {
                    path: path.display().to_string(),
                    kind: model.kind().to_string(),
                    timestamp: Instant::now(),
                });
                ModelStatus::Ready {
                    name: model.display_name(),
                    kind: model.kind().to_string(),
                }
            }
            Err(e) => {
                telemetry.record(TelemetryEvent::ModelLoadFailed {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                    timestamp: Instant::now(),
                });
                ModelStatus::Unavailable {
                    reason: e.to_string(),
                }
            }
        };

        Self {
            predictor: Predictor::from_load(&load),
            validator: InputValidator::new(),
            status,
            telemetry,
        }
    }

    /// Start a session around an in-memory backend
    pub fn with_backend(backend: Arc<dyn RegressionModel>) -> Self {
        let kind = backend.kind().to_string();
        Self {
            predictor: Predictor::new(backend),
            validator: InputValidator::new(),
            status: ModelStatus::Ready {
                name: kind.clone(),
                kind,
            },
            telemetry: TelemetryCollector::new(),
        }
    }

    /// Start a session with predictions disabled
    pub fn without_model(reason: impl Into<String>) -> Self {
        Self {
            predictor: Predictor::unavailable(),
            validator: InputValidator::new(),
            status: ModelStatus::Unavailable {
                reason: reason.into(),
            },
            telemetry: TelemetryCollector::new(),
        }
    }

    /// Model state
    pub fn status(&self) -> &ModelStatus {
        &self.status
    }

    /// Session telemetry
    pub fn telemetry(&self) -> &TelemetryCollector {
        &self.telemetry
    }

    /// Validate without predicting
    pub fn check(&self, inputs: &StudentInputs) -> ValidationErrorSet {
        self.validator.validate(inputs)
    }

    /// Run one full submission cycle
    pub fn submit(&self, inputs: StudentInputs) -> SubmissionOutcome {
        let errors = self.validator.validate(&inputs);
        if !errors.is_empty() {
            self.telemetry.record(TelemetryEvent::SubmissionRejected {
                invalid_fields: errors.len(),
                timestamp: Instant::now(),
            });
            return SubmissionOutcome::Rejected(errors);
        }

        match self.predictor.predict(&inputs) {
            Ok(prediction) => {
                let recommendations = recommend(&inputs, prediction);
                self.telemetry.record(TelemetryEvent::PredictionMade {
                    score: prediction.value(),
                    tips: recommendations.len(),
                    timestamp: Instant::now(),
                });
                SubmissionOutcome::Scored(ScoredSubmission {
                    inputs,
                    prediction,
                    band: prediction.band(),
                    recommendations,
                })
            }
            Err(PredictError::InvalidInputs(errors)) => SubmissionOutcome::Rejected(errors),
            Err(e) => {
                self.telemetry.record(TelemetryEvent::PredictionFailed {
                    reason: e.to_string(),
                    timestamp: Instant::now(),
                });
                SubmissionOutcome::Unavailable(e)
            }
        }
    }
}
