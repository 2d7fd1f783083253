//! Validation type definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Validated input fields
///
/// Declaration order is form order; the error set iterates in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    StudyHours,
    AttendancePercent,
    MentalHealthRating,
    SleepHours,
}

impl InputField {
    /// All validated fields, in form order
    pub const ALL: [InputField; 4] = [
        InputField::StudyHours,
        InputField::AttendancePercent,
        InputField::MentalHealthRating,
        InputField::SleepHours,
    ];

    /// Field key used in error maps and JSON
    pub fn key(&self) -> &'static str {
        match self {
            Self::StudyHours => "study_hours",
            Self::AttendancePercent => "attendance_percent",
            Self::MentalHealthRating => "mental_health_rating",
            Self::SleepHours => "sleep_hours",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Class of rule violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationKind {
    /// Value lies outside the field's closed range
    OutOfRange,
}

/// One field's validation failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Violation class
    pub kind: ViolationKind,

    /// Human-readable message
    pub message: String,
}

impl ValidationError {
    /// Create an out-of-range error
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self {
            kind: ViolationKind::OutOfRange,
            message: message.into(),
        }
    }
}

/// Validation errors keyed by field; empty means valid
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrorSet {
    errors: BTreeMap<InputField, ValidationError>,
}

impl ValidationErrorSet {
    /// Create an empty (valid) set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field, replacing any earlier one
    pub fn insert(&mut self, field: InputField, error: ValidationError) {
        self.errors.insert(field, error);
    }

    /// True when no field failed
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Error for a field, if it failed
    pub fn get(&self, field: InputField) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// Whether a field failed
    pub fn contains(&self, field: InputField) -> bool {
        self.errors.contains_key(&field)
    }

    /// Failing fields and their errors, in form order
    pub fn iter(&self) -> impl Iterator<Item = (&InputField, &ValidationError)> {
        self.errors.iter()
    }

    /// Messages only, in form order
    pub fn messages(&self) -> Vec<&str> {
        self.errors.values().map(|e| e.message.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_is_valid() {
        let set = ValidationErrorSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_iteration_follows_form_order() {
        let mut set = ValidationErrorSet::new();
        set.insert(InputField::SleepHours, ValidationError::out_of_range("sleep"));
        set.insert(InputField::StudyHours, ValidationError::out_of_range("study"));
        assert_eq!(set.messages(), vec!["study", "sleep"]);
    }

    #[test]
    fn test_serializes_as_field_map() {
        let mut set = ValidationErrorSet::new();
        set.insert(
            InputField::AttendancePercent,
            ValidationError::out_of_range("Attendance must be between 0-100%"),
        );
        let json = serde_json::to_string(&set).unwrap();
        assert!(json.contains("\"attendance_percent\""));
        assert!(json.contains("OutOfRange"));
    }
}
