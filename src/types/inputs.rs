//! Student-supplied prediction inputs

use serde::{Deserialize, Serialize};

/// Five self-reported factors for one prediction cycle
///
/// Values are taken as entered; bounds are enforced by
/// [`InputValidator`](crate::validation::InputValidator), not by construction,
/// so an out-of-range form can still be reported field by field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StudentInputs {
    /// Average hours spent studying per day
    pub study_hours: f64,

    /// Percentage of classes attended
    pub attendance_percent: f64,

    /// Self-rated mental health (1 = poor, 10 = excellent)
    pub mental_health_rating: i32,

    /// Average hours of sleep per night
    pub sleep_hours: f64,

    /// Whether the student holds a part-time job
    pub part_time_job: bool,
}

impl StudentInputs {
    /// Create a new set of inputs
    pub fn new(
        study_hours: f64,
        attendance_percent: f64,
        mental_health_rating: i32,
        sleep_hours: f64,
        part_time_job: bool,
    ) -> Self {
        Self {
            study_hours,
            attendance_percent,
            mental_health_rating,
            sleep_hours,
            part_time_job,
        }
    }

    /// Part-time job flag as the 0/1 value the model was trained on
    pub fn part_time_job_flag(&self) -> f64 {
        if self.part_time_job {
            1.0
        } else {
            0.0
        }
    }

    /// Inputs normalized to a 0-100 scale for the profile view
    ///
    /// Study and sleep hours are scaled against the 12-hour form range,
    /// mental health against 10. Values are capped at 100.
    pub fn profile(&self) -> [(&'static str, f64); 5] {
        let pct = |v: f64| v.clamp(0.0, 100.0);
        [
            ("Study Hours (0-12)", pct(self.study_hours / 12.0 * 100.0)),
            ("Attendance (%)", pct(self.attendance_percent)),
            (
                "Mental Health (1-10)",
                pct(self.mental_health_rating as f64 / 10.0 * 100.0),
            ),
            ("Sleep Hours (0-12)", pct(self.sleep_hours / 12.0 * 100.0)),
            ("Part-Time Job (0-1)", self.part_time_job_flag() * 100.0),
        ]
    }

    /// Human-readable summary rows (factor, value)
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Study Hours/Day", format!("{:.1} hours", self.study_hours)),
            ("Attendance", format!("{:.0}%", self.attendance_percent)),
            ("Mental Health", format!("{}/10", self.mental_health_rating)),
            ("Sleep Hours", format!("{:.1} hours", self.sleep_hours)),
            (
                "Part-Time Job",
                if self.part_time_job { "Yes" } else { "No" }.to_string(),
            ),
        ]
    }
}

impl Default for StudentInputs {
    /// Starting values of the input form
    fn default() -> Self {
        Self::new(2.0, 80.0, 5, 7.0, false)
    }
}
