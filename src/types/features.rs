//! Model feature vector
//!
//! The regression model was trained against one exact column order.
//! A reordered vector does not fail, it silently scores wrong, so the
//! order lives here as a type and a set of index constants rather than
//! being rebuilt ad hoc at call sites.

use crate::types::StudentInputs;
use serde::{Deserialize, Serialize};

/// Number of model features
pub const FEATURE_COUNT: usize = 5;

/// Column index of each feature
pub const STUDY_HOURS: usize = 0;
pub const ATTENDANCE_PERCENT: usize = 1;
pub const MENTAL_HEALTH_RATING: usize = 2;
pub const SLEEP_HOURS: usize = 3;
pub const PART_TIME_JOB: usize = 4;

/// Fixed-order feature vector handed to a model backend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Values in model column order
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Value at a column index
    pub fn get(&self, idx: usize) -> Option<f64> {
        self.0.get(idx).copied()
    }
}

impl From<&StudentInputs> for FeatureVector {
    fn from(inputs: &StudentInputs) -> Self {
        let mut v = [0.0; FEATURE_COUNT];
        v[STUDY_HOURS] = inputs.study_hours;
        v[ATTENDANCE_PERCENT] = inputs.attendance_percent;
        v[MENTAL_HEALTH_RATING] = inputs.mental_health_rating as f64;
        v[SLEEP_HOURS] = inputs.sleep_hours;
        v[PART_TIME_JOB] = inputs.part_time_job_flag();
        FeatureVector(v)
    }
}

impl From<[f64; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f64; FEATURE_COUNT]) -> Self {
        FeatureVector(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_column_order() {
        let inputs = StudentInputs::new(3.5, 88.0, 7, 6.5, true);
        let v = FeatureVector::from(&inputs);
        assert_eq!(v.as_slice(), &[3.5, 88.0, 7.0, 6.5, 1.0]);
    }

    #[test]
    fn test_index_constants_address_columns() {
        let v = FeatureVector::from(&StudentInputs::new(3.5, 88.0, 7, 6.5, false));
        assert_eq!(v.get(STUDY_HOURS), Some(3.5));
        assert_eq!(v.get(ATTENDANCE_PERCENT), Some(88.0));
        assert_eq!(v.get(MENTAL_HEALTH_RATING), Some(7.0));
        assert_eq!(v.get(SLEEP_HOURS), Some(6.5));
        assert_eq!(v.get(PART_TIME_JOB), Some(0.0));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let v = FeatureVector::from([1.0, 2.0, 3.0, 4.0, 0.0]);
        assert_eq!(v.get(4), Some(0.0));
        assert_eq!(v.get(5), None);
    }
}
