//! Recommendation advisor
//!
//! Turns one set of inputs and its predicted score into personalized tips.
//! Rules are independent threshold checks evaluated in a fixed order;
//! input-driven rules come first, score-driven rules last. The order is
//! kept stable for reproducible output, not because any rule depends on
//! another.

use crate::types::{PredictionResult, StudentInputs};
use serde::{Serialize, Serializer};
use std::fmt;

/// Below this many study hours, suggest studying more
pub const MIN_STUDY_HOURS: f64 = 3.0;
/// Below this attendance, suggest attending more
pub const MIN_ATTENDANCE_PERCENT: f64 = 75.0;
/// Below this rating, suggest stress support
pub const MIN_MENTAL_HEALTH_RATING: i32 = 6;
/// Below this many hours, suggest more sleep
pub const MIN_SLEEP_HOURS: f64 = 7.0;
/// Above this many hours, suggest a shorter schedule
pub const MAX_SLEEP_HOURS: f64 = 10.0;
/// Working students below this many study hours get a balance tip
pub const WORKING_MIN_STUDY_HOURS: f64 = 4.0;
/// Scores below this get a fundamentals tip
pub const FUNDAMENTALS_SCORE: f64 = 60.0;
/// Scores at or above this get an advanced-techniques tip
pub const ADVANCED_SCORE: f64 = 85.0;

/// Shown by the front-end when no rule fires
pub const DOING_WELL: &str = "Great job! Keep up the excellent habits!";

/// A single advisory tip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    IncreaseStudyTime,
    ImproveAttendance,
    StressSupport,
    MoreSleep,
    ConsistentSleepSchedule,
    BalanceWorkAndStudy,
    FocusOnFundamentals,
    AdvancedTechniques,
}

impl Recommendation {
    /// Advisory text
    pub fn message(&self) -> &'static str {
        match self {
            Self::IncreaseStudyTime => {
                "Consider increasing study time. Aim for at least 3-4 hours daily."
            }
            Self::ImproveAttendance => {
                "Improve attendance. Aim for at least 80% to maximize learning."
            }
            Self::StressSupport => "Consider stress management techniques or counseling support.",
            Self::MoreSleep => "Get more sleep. 7-9 hours is optimal for academic performance.",
            Self::ConsistentSleepSchedule => {
                "Too much sleep might indicate other issues. Consider a consistent 7-9 hour schedule."
            }
            Self::BalanceWorkAndStudy => {
                "Balance work and study. Consider reducing work hours if possible."
            }
            Self::FocusOnFundamentals => {
                "Focus on fundamental concepts and seek additional help if needed."
            }
            Self::AdvancedTechniques => {
                "Great potential! Consider advanced study techniques to excel further."
            }
        }
    }

    /// Whether the tip is driven by the score rather than the inputs
    pub fn is_outcome_driven(&self) -> bool {
        matches!(self, Self::FocusOnFundamentals | Self::AdvancedTechniques)
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for Recommendation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Derive tips for one inputs/prediction pair
///
/// Pure; may return an empty list.
pub fn recommend(inputs: &StudentInputs, prediction: PredictionResult) -> Vec<Recommendation> {
    let mut tips = Vec::new();

    if inputs.study_hours < MIN_STUDY_HOURS {
        tips.push(Recommendation::IncreaseStudyTime);
    }

    if inputs.attendance_percent < MIN_ATTENDANCE_PERCENT {
        tips.push(Recommendation::ImproveAttendance);
    }

    if inputs.mental_health_rating < MIN_MENTAL_HEALTH_RATING {
        tips.push(Recommendation::StressSupport);
    }

    if inputs.sleep_hours < MIN_SLEEP_HOURS {
        tips.push(Recommendation::MoreSleep);
    } else if inputs.sleep_hours > MAX_SLEEP_HOURS {
        tips.push(Recommendation::ConsistentSleepSchedule);
    }

    if inputs.part_time_job && inputs.study_hours < WORKING_MIN_STUDY_HOURS {
        tips.push(Recommendation::BalanceWorkAndStudy);
    }

    let score = prediction.value();
    if score < FUNDAMENTALS_SCORE {
        tips.push(Recommendation::FocusOnFundamentals);
    } else if score >= ADVANCED_SCORE {
        tips.push(Recommendation::AdvancedTechniques);
    }

    tips
}

/// Tip messages only, in rule order
pub fn recommendation_messages(inputs: &StudentInputs, prediction: PredictionResult) -> Vec<String> {
    recommend(inputs, prediction)
        .iter()
        .map(|r| r.message().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Recommendation::*;

    fn score(v: f64) -> PredictionResult {
        PredictionResult::clamped(v)
    }

    #[test]
    fn test_struggling_student_gets_every_tip() {
        let inputs = StudentInputs::new(2.0, 60.0, 4, 5.0, true);
        assert_eq!(
            recommend(&inputs, score(55.0)),
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
    fn test_strong_student_gets_advanced_tip_only() {
        let inputs = StudentInputs::new(6.0, 95.0, 9, 8.0, false);
        assert_eq!(recommend(&inputs, score(90.0)), vec![AdvancedTechniques]);
    }

    #[test]
    fn test_no_tips_for_mid_score_good_habits() {
        let inputs = StudentInputs::new(5.0, 90.0, 8, 8.0, false);
        assert!(recommend(&inputs, score(70.0)).is_empty());
    }

    #[test]
    fn test_oversleeping() {
        let inputs = StudentInputs::new(5.0, 90.0, 8, 11.0, false);
        assert_eq!(recommend(&inputs, score(70.0)), vec![ConsistentSleepSchedule]);
    }

    #[test]
    fn test_sleep_boundaries_fire_nothing() {
        for hours in [7.0, 10.0] {
            let inputs = StudentInputs::new(5.0, 90.0, 8, hours, false);
            assert!(recommend(&inputs, score(70.0)).is_empty(), "{} hours", hours);
        }
    }

    #[test]
    fn test_work_balance_needs_job() {
        let without_job = StudentInputs::new(3.5, 90.0, 8, 8.0, false);
        let with_job = StudentInputs::new(3.5, 90.0, 8, 8.0, true);
        assert!(recommend(&without_job, score(70.0)).is_empty());
        assert_eq!(recommend(&with_job, score(70.0)), vec![BalanceWorkAndStudy]);
    }

    #[test]
    fn test_score_thresholds() {
        let inputs = StudentInputs::new(5.0, 90.0, 8, 8.0, false);
        assert_eq!(recommend(&inputs, score(59.99)), vec![FocusOnFundamentals]);
        assert!(recommend(&inputs, score(60.0)).is_empty());
        assert!(recommend(&inputs, score(84.99)).is_empty());
        assert_eq!(recommend(&inputs, score(85.0)), vec![AdvancedTechniques]);
    }

    #[test]
    fn test_outcome_tips_come_last() {
        let inputs = StudentInputs::new(1.0, 50.0, 2, 12.0, true);
        let tips = recommend(&inputs, score(30.0));
        let first_outcome = tips.iter().position(|t| t.is_outcome_driven()).unwrap();
        assert!(tips[first_outcome..].iter().all(|t| t.is_outcome_driven()));
    }

    #[test]
    fn test_messages_and_serialization() {
        let inputs = StudentInputs::new(6.0, 95.0, 9, 8.0, false);
        let messages = recommendation_messages(&inputs, score(90.0));
        assert_eq!(
            messages,
            vec!["Great potential! Consider advanced study techniques to excel further."]
        );
        let json = serde_json::to_string(&AdvancedTechniques).unwrap();
        assert!(json.starts_with("\"Great potential!"));
    }
}
