//! Regression model module
//!
//! This module provides the model side of the prediction pipeline:
//! - The `RegressionModel` capability (vector in, score out)
//! - JSON artifact types for the built-in backends
//! - Loading an artifact from disk once per process

pub mod backend;
pub mod loader;
pub mod types;

// Re-export key types for convenience
pub use backend::RegressionModel;
pub use loader::{load_model, LoadedModel};
pub use types::{ModelArtifact, ModelFile, ModelMetadata};
