//! Prediction output types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest reportable score
pub const SCORE_MIN: f64 = 0.0;

/// Highest reportable score
pub const SCORE_MAX: f64 = 100.0;

/// Predicted exam score, always within [0, 100]
///
/// The only constructor clamps, so a value of this type is in range by
/// construction regardless of what the model emitted.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct PredictionResult(f64);

impl PredictionResult {
    /// Clamp a raw model output into the score range
    ///
    /// Callers must reject NaN before this point; a NaN input is pinned to 0.
    pub fn clamped(raw: f64) -> Self {
        if raw.is_nan() {
            return PredictionResult(SCORE_MIN);
        }
        PredictionResult(SCORE_MIN.max(SCORE_MAX.min(raw)))
    }

    /// Score value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Score as a 0.0-1.0 fraction, for progress bars
    pub fn fraction(&self) -> f64 {
        self.0 / SCORE_MAX
    }

    /// Performance band for this score
    pub fn band(&self) -> PerformanceBand {
        PerformanceBand::from_score(self.0)
    }
}

impl<'de> Deserialize<'de> for PredictionResult {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = f64::deserialize(deserializer)?;
        Ok(PredictionResult::clamped(raw))
    }
}

impl fmt::Display for PredictionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}/100", self.0)
    }
}

/// Coarse performance category for a predicted score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceBand {
    /// 85 and above
    Excellent,
    /// 75 to below 85
    Good,
    /// 60 to below 75
    Average,
    /// Below 60
    BelowAverage,
}

impl PerformanceBand {
    /// Categorize a score
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            PerformanceBand::Excellent
        } else if score >= 75.0 {
            PerformanceBand::Good
        } else if score >= 60.0 {
            PerformanceBand::Average
        } else {
            PerformanceBand::BelowAverage
        }
    }

    /// Message shown alongside the score
    pub fn label(&self) -> &'static str {
        match self {
            PerformanceBand::Excellent => "Excellent performance predicted!",
            PerformanceBand::Good => "Good performance predicted!",
            PerformanceBand::Average => "Average performance predicted.",
            PerformanceBand::BelowAverage => "Below average performance predicted.",
        }
    }
}
