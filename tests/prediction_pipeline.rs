//! Prediction pipeline integration tests
//!
//! Exercises load → validate → predict → recommend through the public API
//! using model artifacts written to temporary files.

use examscore::advisor::Recommendation::*;
use examscore::session::{ModelStatus, SubmissionOutcome};
use examscore::telemetry::TelemetryCollector;
use examscore::validation::InputField;
use examscore::{
    load_model, recommend, validate, LoadError, PredictError, Predictor, ScoringSession,
    StudentInputs,
};
use std::io::Write;
use std::sync::Arc;
use std::thread;
use tempfile::NamedTempFile;

fn artifact(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

/// score = 20 + 5*study + 0.4*attendance + 2*mental + 1*sleep - 3*job
fn linear_artifact() -> NamedTempFile {
    artifact(
        r#"{
            "kind": "linear",
            "metadata": { "name": "exam-linear", "trained_on": "student_habits.csv" },
            "coefficients": [5.0, 0.4, 2.0, 1.0, -3.0],
            "intercept": 20.0
        }"#,
    )
}

fn gbm_artifact() -> NamedTempFile {
    artifact(
        r#"{
            "kind": "gradient_boosting",
            "base_score": 65.0,
            "learning_rate": 0.5,
            "trees": [
                { "split": { "feature": 0, "threshold": 3.0,
                    "left": { "leaf": { "value": -20.0 } },
                    "right": { "leaf": { "value": 10.0 } } } },
                { "split": { "feature": 1, "threshold": 75.0,
                    "left": { "leaf": { "value": -10.0 } },
                    "right": { "split": { "feature": 3, "threshold": 6.5,
                        "left": { "leaf": { "value": 0.0 } },
                        "right": { "leaf": { "value": 30.0 } } } } } }
            ]
        }"#,
    )
}

#[test]
fn test_struggling_student_scenario() {
    let file = linear_artifact();
    let model = load_model(file.path()).unwrap();
    let predictor = Predictor::new(model.backend());

    let inputs = StudentInputs::new(2.0, 60.0, 4, 5.0, true);
    assert!(validate(&inputs).is_empty());

    // 20 + 10 + 24 + 8 + 5 - 3 = 64
    let prediction = predictor.predict(&inputs).unwrap();
    assert!((prediction.value() - 64.0).abs() < 1e-9);

    let forced = examscore::PredictionResult::clamped(55.0);
    assert_eq!(
        recommend(&inputs, forced),
        vec![
            IncreaseStudyTime,
            ImproveAttendance,
            StressSupport,
            MoreSleep,
            BalanceWorkAndStudy,
            FocusOnFundamentals,
        ]
    );
}

#[test]
fn test_strong_student_scenario() {
    let file = linear_artifact();
    let session = ScoringSession::start(file.path(), TelemetryCollector::new());

    // 20 + 30 + 38 + 18 + 8 = 114, clamped to 100
    match session.submit(StudentInputs::new(6.0, 95.0, 9, 8.0, false)) {
        SubmissionOutcome::Scored(scored) => {
            assert_eq!(scored.prediction.value(), 100.0);
            assert_eq!(scored.recommendations, vec![AdvancedTechniques]);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn test_every_field_invalid_scenario() {
    let errors = validate(&StudentInputs::new(-1.0, 105.0, 0, 30.0, false));
    assert_eq!(errors.len(), 4);
    assert!(errors.contains(InputField::StudyHours));
    assert!(errors.contains(InputField::AttendancePercent));
    assert!(errors.contains(InputField::MentalHealthRating));
    assert!(errors.contains(InputField::SleepHours));
}

#[test]
fn test_missing_model_scenario() {
    let load = load_model("/nonexistent/dir/best_model.json");
    assert!(matches!(load, Err(LoadError::NotFound { .. })));

    let predictor = Predictor::from_load(&load);
    let err = predictor
        .predict(&StudentInputs::new(4.0, 90.0, 7, 8.0, false))
        .unwrap_err();
    assert!(matches!(err, PredictError::ModelUnavailable));
}

#[test]
fn test_corrupt_model_keeps_session_interactive() {
    let file = artifact("{ this is not a model");
    let session = ScoringSession::start(file.path(), TelemetryCollector::new());
    assert!(matches!(session.status(), ModelStatus::Unavailable { .. }));

    assert!(matches!(
        session.submit(StudentInputs::new(25.0, 90.0, 7, 8.0, false)),
        SubmissionOutcome::Rejected(_)
    ));
    assert!(matches!(
        session.submit(StudentInputs::default()),
        SubmissionOutcome::Unavailable(PredictError::ModelUnavailable)
    ));
}

#[test]
fn test_gradient_boosting_backend() {
    let file = gbm_artifact();
    let model = load_model(file.path()).unwrap();
    assert_eq!(model.kind(), "gradient_boosting");
    let predictor = Predictor::new(model.backend());

    // 65 + 0.5 * (10 + 30) = 85
    let good = predictor
        .predict(&StudentInputs::new(5.0, 90.0, 8, 8.0, false))
        .unwrap();
    assert!((good.value() - 85.0).abs() < 1e-9);

    // 65 + 0.5 * (-20 - 10) = 50
    let poor = predictor
        .predict(&StudentInputs::new(2.0, 60.0, 5, 8.0, false))
        .unwrap();
    assert!((poor.value() - 50.0).abs() < 1e-9);
}

#[test]
fn test_model_shared_across_threads() {
    let file = linear_artifact();
    let model = load_model(file.path()).unwrap();
    let predictor = Arc::new(Predictor::new(model.backend()));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let predictor = Arc::clone(&predictor);
            thread::spawn(move || {
                let inputs = StudentInputs::new(i as f64, 80.0, 5, 7.0, false);
                predictor.predict(&inputs).unwrap().value()
            })
        })
        .collect();

    let scores: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    // Each extra study hour adds 5 points
    for pair in scores.windows(2) {
        assert!((pair[1] - pair[0] - 5.0).abs() < 1e-9);
    }
}

#[test]
fn test_record_from_scored_submission() {
    let file = linear_artifact();
    let session = ScoringSession::start(file.path(), TelemetryCollector::new());

    let SubmissionOutcome::Scored(scored) = session.submit(StudentInputs::default()) else {
        panic!("expected a scored submission");
    };
    let record = scored.to_record();
    let value: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();

    // 20 + 10 + 32 + 10 + 7 = 79
    assert_eq!(value["prediction"], 79.0);
    assert_eq!(value["band"], "good");
    assert_eq!(value["recommendations"][0], IncreaseStudyTime.message());
}
