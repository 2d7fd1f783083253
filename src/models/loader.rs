//! Model loading from disk
//!
//! Reads a JSON artifact once at startup. Failures come back as
//! [`LoadError`] values so the caller can keep running with predictions
//! disabled.

use crate::errors::LoadError;
use crate::models::backend::RegressionModel;
use crate::models::types::{ModelFile, ModelMetadata};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};

/// A model ready for inference
#[derive(Debug, Clone)]
pub struct LoadedModel {
    /// Path the model was loaded from
    pub path: PathBuf,

    /// Artifact metadata
    pub metadata: ModelMetadata,

    /// When the model was loaded
    pub loaded_at: DateTime<Utc>,

    backend: Arc<dyn RegressionModel>,
}

impl LoadedModel {
    /// Shared handle to the inference backend
    pub fn backend(&self) -> Arc<dyn RegressionModel> {
        Arc::clone(&self.backend)
    }

    /// Backend identifier
    pub fn kind(&self) -> &str {
        self.backend.kind()
    }

    /// Display name: metadata name, else file name
    pub fn display_name(&self) -> String {
        self.metadata.name.clone().unwrap_or_else(|| {
            self.path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.path.display().to_string())
        })
    }
}

/// Load a model artifact, logging the outcome
pub fn load_model(path: impl AsRef<Path>) -> Result<LoadedModel, LoadError> {
    let path = path.as_ref();
    let result = read_artifact(path);

    match &result {
        Ok(model) => info!(
            path = %path.display(),
            kind = model.kind(),
            "Model loaded successfully"
        ),
        Err(e) => error!(path = %path.display(), error = %e, "Model loading failed"),
    }

    result
}

fn read_artifact(path: &Path) -> Result<LoadedModel, LoadError> {
    if !path.is_file() {
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|_| LoadError::NotFound {
        path: path.to_path_buf(),
    })?;

    // Non-UTF-8 content is a parse failure, not a missing file
    let file: ModelFile =
        serde_json::from_slice(&bytes).map_err(|e| LoadError::Deserialization {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    file.model
        .check()
        .map_err(|reason| LoadError::Deserialization {
            path: path.to_path_buf(),
            reason,
        })?;

    Ok(LoadedModel {
        path: path.to_path_buf(),
        metadata: file.metadata,
        loaded_at: Utc::now(),
        backend: Arc::new(file.model),
    })
}
