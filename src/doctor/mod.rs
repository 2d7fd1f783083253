//! Doctor command for setup diagnostics
//!
//! Checks that the configuration parses and that the model artifact
//! exists, loads, and answers a probe prediction.

use crate::config::Config;
use crate::errors::LoadError;
use crate::models::load_model;
use crate::types::{FeatureVector, StudentInputs, SCORE_MAX, SCORE_MIN};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Health check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Pass,
    Warn(String),
    Fail(String),
}

/// Individual health check
#[derive(Debug)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
}

impl HealthCheck {
    fn new(name: &str, status: HealthStatus) -> Self {
        Self {
            name: name.to_string(),
            status,
        }
    }
}

/// Doctor diagnostics system
pub struct Doctor {
    config_path: Option<PathBuf>,
    model_path: PathBuf,
}

impl Doctor {
    /// Create a new doctor instance
    pub fn new(config_path: Option<PathBuf>, model_path: PathBuf) -> Self {
        Self {
            config_path,
            model_path,
        }
    }

    /// Run all health checks
    pub fn run_diagnostics(&self) -> Vec<HealthCheck> {
        vec![
            self.check_config(),
            self.check_model_file(),
            self.check_model_load(),
            self.check_model_probe(),
        ]
    }

    /// Check 1: Configuration file
    fn check_config(&self) -> HealthCheck {
        let path = match &self.config_path {
            Some(path) => path.clone(),
            None => match Config::config_path() {
                Ok(path) => path,
                Err(e) => return HealthCheck::new("Config", HealthStatus::Warn(e.to_string())),
            },
        };

        if !path.exists() {
            return HealthCheck::new(
                "Config",
                HealthStatus::Warn(format!("{} missing, defaults in use", path.display())),
            );
        }

        let parsed = std::fs::read_to_string(&path)
            .map_err(anyhow::Error::from)
            .and_then(|s| toml::from_str::<Config>(&s).map_err(anyhow::Error::from))
            .and_then(|c| c.validate().map(|_| c));

        match parsed {
            Ok(_) => HealthCheck::new("Config", HealthStatus::Pass),
            Err(e) => HealthCheck::new("Config", HealthStatus::Fail(format!("{:#}", e))),
        }
    }

    /// Check 2: Model file present
    fn check_model_file(&self) -> HealthCheck {
        if self.model_path.is_file() {
            HealthCheck::new("Model File", HealthStatus::Pass)
        } else {
            HealthCheck::new(
                "Model File",
                HealthStatus::Fail(format!("{} not found", self.model_path.display())),
            )
        }
    }

    /// Check 3: Model deserializes
    fn check_model_load(&self) -> HealthCheck {
        match load_model(&self.model_path) {
            Ok(_) => HealthCheck::new("Model Load", HealthStatus::Pass),
            Err(LoadError::NotFound { .. }) => HealthCheck::new(
                "Model Load",
                HealthStatus::Fail("skipped, model file missing".to_string()),
            ),
            Err(e) => HealthCheck::new("Model Load", HealthStatus::Fail(e.to_string())),
        }
    }

    /// Check 4: Model answers the default form
    fn check_model_probe(&self) -> HealthCheck {
        probe(&self.model_path)
    }

    /// Display diagnostics results
    pub fn display_results(checks: &[HealthCheck]) {
        println!("\n{}\n", "examscore Diagnostics".bold());
        println!("{:<20} Status", "Check");
        println!("{}", "=".repeat(50));

        for check in checks {
            let message = match &check.status {
                HealthStatus::Pass => "PASS".green(),
                HealthStatus::Warn(msg) => format!("WARN: {}", msg).yellow(),
                HealthStatus::Fail(msg) => format!("FAIL: {}", msg).red(),
            };
            println!("{:<20} {}", check.name, message);
        }

        println!();
    }

    /// Get overall health status
    pub fn overall_status(checks: &[HealthCheck]) -> bool {
        !checks.iter().any(|c| matches!(c.status, HealthStatus::Fail(_)))
    }
}

fn probe(model_path: &Path) -> HealthCheck {
    let model = match load_model(model_path) {
        Ok(model) => model,
        Err(_) => {
            return HealthCheck::new(
                "Model Probe",
                HealthStatus::Fail("skipped, model did not load".to_string()),
            )
        }
    };

    let features = FeatureVector::from(&StudentInputs::default());
    match model.backend().predict_one(features.as_slice()) {
        Ok(raw) if (SCORE_MIN..=SCORE_MAX).contains(&raw) => {
            HealthCheck::new("Model Probe", HealthStatus::Pass)
        }
        Ok(raw) => HealthCheck::new(
            "Model Probe",
            HealthStatus::Warn(format!("raw output {:.2} is outside 0-100 and will be clamped", raw)),
        ),
        Err(e) => HealthCheck::new("Model Probe", HealthStatus::Fail(e.to_string())),
    }
}
