//! Input validator implementation
//! Range checks over every bounded field, no short-circuiting

use crate::types::StudentInputs;
use crate::validation::types::{InputField, ValidationError, ValidationErrorSet};

/// Closed range rule for one field
#[derive(Debug, Clone)]
pub struct FieldRule {
    /// Field this rule checks
    pub field: InputField,

    /// Inclusive lower bound
    pub min: f64,

    /// Inclusive upper bound
    pub max: f64,

    /// Message reported on violation
    pub message: &'static str,
}

impl FieldRule {
    /// Whether a value satisfies the rule (NaN never does)
    pub fn accepts(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Default rule table
const RULES: [FieldRule; 4] = [
    FieldRule {
        field: InputField::StudyHours,
        min: 0.0,
        max: 24.0,
        message: "Study hours must be between 0-24",
    },
    FieldRule {
        field: InputField::AttendancePercent,
        min: 0.0,
        max: 100.0,
        message: "Attendance must be between 0-100%",
    },
    FieldRule {
        field: InputField::MentalHealthRating,
        min: 1.0,
        max: 10.0,
        message: "Mental health rating must be between 1-10",
    },
    FieldRule {
        field: InputField::SleepHours,
        min: 0.0,
        max: 24.0,
        message: "Sleep hours must be between 0-24",
    },
];

/// Validator for student inputs
#[derive(Debug, Clone)]
pub struct InputValidator {
    rules: Vec<FieldRule>,
}

impl InputValidator {
    /// Create validator with the standard rule table
    pub fn new() -> Self {
        Self {
            rules: RULES.to_vec(),
        }
    }

    /// Validate inputs, reporting every failing field
    pub fn validate(&self, inputs: &StudentInputs) -> ValidationErrorSet {
        let mut errors = ValidationErrorSet::new();

        for rule in &self.rules {
            let value = Self::field_value(inputs, rule.field);
            if !rule.accepts(value) {
                errors.insert(rule.field, ValidationError::out_of_range(rule.message));
            }
        }

        errors
    }

    fn field_value(inputs: &StudentInputs, field: InputField) -> f64 {
        match field {
            InputField::StudyHours => inputs.study_hours,
            InputField::AttendancePercent => inputs.attendance_percent,
            InputField::MentalHealthRating => inputs.mental_health_rating as f64,
            InputField::SleepHours => inputs.sleep_hours,
        }
    }
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate inputs against the standard rule table
pub fn validate(inputs: &StudentInputs) -> ValidationErrorSet {
    InputValidator::new().validate(inputs)
}
