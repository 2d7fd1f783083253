//! Record of one scored submission
use crate::advisor::Recommendation;
use crate::types::{PerformanceBand, PredictionResult, StudentInputs};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Serializable snapshot of a completed prediction cycle
///
/// Built for output only; records are never written to disk.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionRecord {
    /// Unique record ID
    pub id: String,
    /// When the prediction was made
    pub timestamp: DateTime<Utc>,
    /// Inputs as submitted
    pub inputs: StudentInputs,
    /// Clamped predicted score
    pub prediction: PredictionResult,
    /// Performance band of the score
    pub band: PerformanceBand,
    /// Tips in rule order
    pub recommendations: Vec<Recommendation>,
}

impl PredictionRecord {
    /// Create new record stamped with the current time
    pub fn new(
        inputs: StudentInputs,
        prediction: PredictionResult,
        recommendations: Vec<Recommendation>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            inputs,
            prediction,
            band: prediction.band(),
            recommendations,
        }
    }

    /// Pretty JSON form
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_json_shape() {
        let record = PredictionRecord::new(
            StudentInputs::new(6.0, 95.0, 9, 8.0, false),
            PredictionResult::clamped(90.0),
            vec![Recommendation::AdvancedTechniques],
        );
        let json = record.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["prediction"], 90.0);
        assert_eq!(value["band"], "excellent");
        assert_eq!(value["inputs"]["mental_health_rating"], 9);
        assert_eq!(
            value["recommendations"][0],
            "Great potential! Consider advanced study techniques to excel further."
        );
        assert_eq!(value["id"].as_str().unwrap().len(), 36);
    }

    #[test]
    fn test_unique_ids() {
        let make = || {
            PredictionRecord::new(
                StudentInputs::default(),
                PredictionResult::clamped(70.0),
                Vec::new(),
            )
        };
        assert_ne!(make().id, make().id);
    }
}
