//! Display manager for terminal output
//!
//! Renders submission outcomes: per-field validation errors, the
//! predicted score with its band and bar, tips, the input profile and
//! the input summary table.

use crate::advisor::{Recommendation, DOING_WELL};
use crate::config::DisplayConfig;
use crate::errors::PredictError;
use crate::session::{ModelStatus, ScoredSubmission, SubmissionOutcome};
use crate::types::{PerformanceBand, PredictionResult, StudentInputs};
use crate::validation::ValidationErrorSet;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Width of score and profile bars, in characters
const BAR_WIDTH: usize = 40;

/// Footer shown under every result
const DISCLAIMER: &str = "Note: This prediction is based on historical data and should be used as a guide only.\n\
Individual results may vary based on many factors not captured in this model.";

/// Display manager for CLI and interactive output
pub struct DisplayManager {
    settings: DisplayConfig,
    spinners: bool,
}

impl DisplayManager {
    /// Create new display manager
    pub fn new(settings: DisplayConfig, spinners: bool) -> Self {
        DisplayManager { settings, spinners }
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str, status: &ModelStatus) {
        let width = 64;
        let title = format!("  Student Exam Score Predictor {}", version);
        let info = match status {
            ModelStatus::Ready { name, kind } => format!("  Model: {} ({})", name, kind),
            ModelStatus::Unavailable { .. } => "  Model: unavailable".to_string(),
        };

        println!("\n{}", "=".repeat(width).cyan());
        println!("{}", title.bold().cyan());
        println!("{}", info.dimmed());
        println!("{}\n", "=".repeat(width).cyan());
        println!(
            "Enter your information below (press {} to quit)\n",
            "Ctrl-D".green()
        );
    }

    /// Spinner shown while a prediction runs
    pub fn start_prediction(&self) -> Option<ProgressBar> {
        if !self.spinners {
            return None;
        }
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.set_message("Making prediction...");
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    }

    /// Render one submission outcome
    pub fn show_outcome(&self, outcome: &SubmissionOutcome) {
        match outcome {
            SubmissionOutcome::Rejected(errors) => self.show_validation_errors(errors),
            SubmissionOutcome::Unavailable(err) => self.show_unavailable(err),
            SubmissionOutcome::Scored(scored) => self.show_scored(scored),
        }
    }

    /// Per-field validation errors
    pub fn show_validation_errors(&self, errors: &ValidationErrorSet) {
        println!("{}", "Input Validation Errors:".yellow().bold());
        for line in format_validation_errors(errors) {
            println!("  {}", line.yellow());
        }
        println!("{}", "Please fix the input errors before predicting.".red());
    }

    /// Single blocking message for load or inference failures
    pub fn show_unavailable(&self, err: &PredictError) {
        self.show_error(&err.to_string());
    }

    /// Full result view
    pub fn show_scored(&self, scored: &ScoredSubmission) {
        if self.settings.show_profile {
            self.show_section("Your Input Profile");
            for line in format_profile(&scored.inputs) {
                println!("{}", line);
            }
        }

        self.show_section("Prediction Results");
        println!(
            "{}",
            format!("Predicted Exam Score: {}", scored.prediction)
                .bold()
                .cyan()
        );
        let band = scored.band.label();
        match scored.band {
            PerformanceBand::Excellent | PerformanceBand::Good => println!("{}", band.green()),
            PerformanceBand::Average => println!("{}", band.yellow()),
            PerformanceBand::BelowAverage => println!("{}", band.red()),
        }
        println!("{}", format_score_bar(scored.prediction));

        self.show_section("Personalized Recommendations");
        for line in format_recommendations(&scored.recommendations) {
            println!("{}", line);
        }

        if self.settings.show_summary {
            self.show_section("Input Summary");
            for (factor, value) in scored.inputs.summary() {
                println!("  {:<18} {}", factor.bold(), value);
            }
        }

        println!("\n{}\n", DISCLAIMER.dimmed());
    }

    /// Display error message
    pub fn show_error(&self, error: &str) {
        println!("{} {}", "Error:".red().bold(), error.red());
    }

    /// Display warning message
    pub fn show_warning(&self, warning: &str) {
        println!("{} {}", "Warning:".yellow().bold(), warning.yellow());
    }

    /// Display info message
    pub fn show_info(&self, info: &str) {
        println!("{} {}", "Info:".cyan(), info);
    }

    /// Show section header
    pub fn show_section(&self, title: &str) {
        println!("\n{}", title.bold().cyan());
        println!("{}", "-".repeat(60).cyan());
    }
}

/// One line per failing field, in form order
pub fn format_validation_errors(errors: &ValidationErrorSet) -> Vec<String> {
    errors
        .iter()
        .map(|(_, error)| format!("• {}", error.message))
        .collect()
}

/// Numbered tips, or the affirmation when there are none
pub fn format_recommendations(tips: &[Recommendation]) -> Vec<String> {
    if tips.is_empty() {
        return vec![DOING_WELL.to_string()];
    }
    tips.iter()
        .enumerate()
        .map(|(i, tip)| format!("Tip {}: {}", i + 1, tip))
        .collect()
}

/// Horizontal bar for a value on a 0-100 scale
pub fn bar(percent: f64) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Score progress bar
pub fn format_score_bar(prediction: PredictionResult) -> String {
    format!("{} {:.0}%", bar(prediction.value()), prediction.fraction() * 100.0)
}

/// Normalized input profile, one bar per factor
pub fn format_profile(inputs: &StudentInputs) -> Vec<String> {
    inputs
        .profile()
        .iter()
        .map(|(label, pct)| format!("  {:<22} {} {:>5.1}", label, bar(*pct), pct))
        .collect()
}
