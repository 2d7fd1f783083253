//! Exam score predictor
//!
//! Runs one feature vector through the loaded model and clamps the
//! result. The predictor owns its model handle from construction; a
//! predictor built without one answers every request with
//! [`PredictError::ModelUnavailable`].
//!
//! A backend panic is caught and reported as an inference fault. While a
//! model call is in flight on a thread, the panic hook stays silent for
//! that thread so the message does not land in the middle of the form or
//! the JSON output; the fault is logged through `tracing` instead.

use crate::errors::{InferenceFault, LoadError, PredictError};
use crate::models::{LoadedModel, RegressionModel};
use crate::types::{FeatureVector, PredictionResult, StudentInputs};
use crate::validation::InputValidator;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Once};
use tracing::{error, info};

thread_local! {
    static IN_MODEL_CALL: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// Wrap the current panic hook so it skips panics raised inside a model call
fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !IN_MODEL_CALL.with(Cell::get) {
                previous(info);
            }
        }));
    });
}

/// Predictor over an optional, immutable model
#[derive(Debug, Clone)]
pub struct Predictor {
    model: Option<Arc<dyn RegressionModel>>,
    validator: InputValidator,
}

impl Predictor {
    /// Create a predictor around a model backend
    pub fn new(model: Arc<dyn RegressionModel>) -> Self {
        Self {
            model: Some(model),
            validator: InputValidator::new(),
        }
    }

    /// Create a predictor with no model; every prediction is refused
    pub fn unavailable() -> Self {
        Self {
            model: None,
            validator: InputValidator::new(),
        }
    }

    /// Create a predictor from the outcome of a model load
    pub fn from_load(load: &Result<LoadedModel, LoadError>) -> Self {
        match load {
            Ok(model) => Self::new(model.backend()),
            Err(_) => Self::unavailable(),
        }
    }

    /// Whether a model is loaded
    pub fn is_available(&self) -> bool {
        self.model.is_some()
    }

    /// Predict an exam score for validated inputs
    pub fn predict(&self, inputs: &StudentInputs) -> Result<PredictionResult, PredictError> {
        let model = self.model.as_ref().ok_or(PredictError::ModelUnavailable)?;

        let errors = self.validator.validate(inputs);
        if !errors.is_empty() {
            return Err(PredictError::InvalidInputs(errors));
        }

        let features = FeatureVector::from(inputs);
        let raw = match Self::infer(model.as_ref(), &features) {
            Ok(raw) => raw,
            Err(fault) => {
                error!(error = %fault, "Prediction error");
                return Err(PredictError::Inference(fault));
            }
        };

        let prediction = PredictionResult::clamped(raw);
        info!(prediction = prediction.value(), "Prediction made: {:.2}", prediction.value());
        Ok(prediction)
    }

    /// Invoke the backend, turning panics and non-finite output into faults
    fn infer(model: &dyn RegressionModel, features: &FeatureVector) -> Result<f64, InferenceFault> {
        install_quiet_hook();
        IN_MODEL_CALL.with(|flag| flag.set(true));
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            model.predict_one(features.as_slice())
        }));
        IN_MODEL_CALL.with(|flag| flag.set(false));

        let raw = match outcome {
            Ok(result) => result?,
            Err(payload) => {
                let msg = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "model panicked".to_string());
                return Err(InferenceFault::Backend(msg));
            }
        };

        if raw.is_nan() || raw.is_infinite() {
            return Err(InferenceFault::NonFinite { value: raw });
        }
        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::InputField;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns a fixed raw score and records what it was asked
    #[derive(Debug, Default)]
    struct FixedModel {
        raw: f64,
        calls: AtomicUsize,
        last: std::sync::Mutex<Vec<f64>>,
    }

    impl FixedModel {
        fn new(raw: f64) -> Arc<Self> {
            Arc::new(Self {
                raw,
                ..Default::default()
            })
        }
    }

    impl RegressionModel for FixedModel {
        fn predict_one(&self, features: &[f64]) -> Result<f64, InferenceFault> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = features.to_vec();
            Ok(self.raw)
        }

        fn kind(&self) -> &str {
            "fixed"
        }
    }

    #[derive(Debug)]
    struct PanickingModel;

    impl RegressionModel for PanickingModel {
        fn predict_one(&self, _features: &[f64]) -> Result<f64, InferenceFault> {
            panic!("weights tensor has wrong shape");
        }

        fn kind(&self) -> &str {
            "panicking"
        }
    }

    fn valid_inputs() -> StudentInputs {
        StudentInputs::new(4.0, 85.0, 7, 8.0, true)
    }

    #[test]
    fn test_clamps_low() {
        let predictor = Predictor::new(FixedModel::new(-10.0));
        assert_eq!(predictor.predict(&valid_inputs()).unwrap().value(), 0.0);
    }

    #[test]
    fn test_clamps_high() {
        let predictor = Predictor::new(FixedModel::new(150.0));
        assert_eq!(predictor.predict(&valid_inputs()).unwrap().value(), 100.0);
    }

    #[test]
    fn test_in_range_passthrough() {
        let predictor = Predictor::new(FixedModel::new(72.3));
        assert_eq!(predictor.predict(&valid_inputs()).unwrap().value(), 72.3);
    }

    #[test]
    fn test_feature_order_reaches_model() {
        let model = FixedModel::new(70.0);
        let predictor = Predictor::new(model.clone());
        predictor.predict(&valid_inputs()).unwrap();
        assert_eq!(*model.last.lock().unwrap(), vec![4.0, 85.0, 7.0, 8.0, 1.0]);
    }

    #[test]
    fn test_unavailable_model() {
        let predictor = Predictor::unavailable();
        assert!(!predictor.is_available());
        let err = predictor.predict(&valid_inputs()).unwrap_err();
        assert!(matches!(err, PredictError::ModelUnavailable));
    }

    #[test]
    fn test_invalid_inputs_skip_inference() {
        let model = FixedModel::new(70.0);
        let predictor = Predictor::new(model.clone());
        let err = predictor
            .predict(&StudentInputs::new(25.0, 85.0, 7, 8.0, false))
            .unwrap_err();
        match err {
            PredictError::InvalidInputs(errors) => {
                assert!(errors.contains(InputField::StudyHours));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_panic_becomes_inference_error() {
        let predictor = Predictor::new(Arc::new(PanickingModel));
        let err = predictor.predict(&valid_inputs()).unwrap_err();
        match err {
            PredictError::Inference(InferenceFault::Backend(msg)) => {
                assert!(msg.contains("wrong shape"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        // Predictor is still usable afterwards
        assert!(predictor.is_available());
        assert!(!IN_MODEL_CALL.with(Cell::get));
        assert!(matches!(
            predictor.predict(&valid_inputs()),
            Err(PredictError::Inference(InferenceFault::Backend(_)))
        ));
    }

    #[test]
    fn test_nan_becomes_inference_error() {
        let predictor = Predictor::new(FixedModel::new(f64::NAN));
        let err = predictor.predict(&valid_inputs()).unwrap_err();
        assert!(matches!(
            err,
            PredictError::Inference(InferenceFault::NonFinite { .. })
        ));
    }

    #[test]
    fn test_from_failed_load() {
        let load = Err(LoadError::NotFound {
            path: "missing.json".into(),
        });
        let predictor = Predictor::from_load(&load);
        assert!(!predictor.is_available());
    }
}
