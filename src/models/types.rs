//! Type definitions for model artifacts
//!
//! An artifact is a JSON document naming one regression backend by its
//! `kind` tag, plus optional metadata:
//!
//! ```json
//! {
//!   "kind": "linear",
//!   "metadata": { "name": "exam-linear-v1" },
//!   "coefficients": [5.2, 0.3, 1.8, 1.1, -2.0],
//!   "intercept": 12.5
//! }
//! ```

use crate::types::FEATURE_COUNT;
use serde::{Deserialize, Serialize};

/// Descriptive metadata carried by an artifact
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Model name
    #[serde(default)]
    pub name: Option<String>,

    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,

    /// Dataset or date the model was trained on
    #[serde(default)]
    pub trained_on: Option<String>,
}

/// Serialized model file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelFile {
    #[serde(default)]
    pub metadata: ModelMetadata,

    #[serde(flatten)]
    pub model: ModelArtifact,
}

/// Supported regression backends
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    Linear(LinearModel),
    DecisionTree(DecisionTreeModel),
    GradientBoosting(GradientBoostingModel),
}

impl ModelArtifact {
    /// Backend tag as written in the artifact
    pub fn kind(&self) -> &'static str {
        match self {
            ModelArtifact::Linear(_) => "linear",
            ModelArtifact::DecisionTree(_) => "decision_tree",
            ModelArtifact::GradientBoosting(_) => "gradient_boosting",
        }
    }

    /// Structural checks that serde cannot express
    pub fn check(&self) -> Result<(), String> {
        match self {
            ModelArtifact::Linear(m) => m.check(),
            ModelArtifact::DecisionTree(m) => m.root.check(),
            ModelArtifact::GradientBoosting(m) => m.check(),
        }
    }
}

/// Ordinary linear regression: `intercept + Σ coefficient_i * x_i`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearModel {
    fn check(&self) -> Result<(), String> {
        if self.coefficients.len() != FEATURE_COUNT {
            return Err(format!(
                "linear model has {} coefficients, expected {}",
                self.coefficients.len(),
                FEATURE_COUNT
            ));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err("linear model contains non-finite parameters".to_string());
        }
        Ok(())
    }
}

/// Node in a regression tree
///
/// Samples with `x[feature] <= threshold` go left.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
    Leaf {
        value: f64,
    },
}

impl TreeNode {
    fn check(&self) -> Result<(), String> {
        match self {
            TreeNode::Leaf { value } if !value.is_finite() => {
                Err("tree leaf has a non-finite value".to_string())
            }
            TreeNode::Leaf { .. } => Ok(()),
            TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                if *feature >= FEATURE_COUNT {
                    return Err(format!(
                        "tree split on feature {}, only {} features exist",
                        feature, FEATURE_COUNT
                    ));
                }
                if !threshold.is_finite() {
                    return Err("tree split has a non-finite threshold".to_string());
                }
                left.check()?;
                right.check()
            }
        }
    }
}

/// Single CART regression tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTreeModel {
    pub root: TreeNode,
}

/// Additive tree ensemble: `base_score + learning_rate * Σ tree(x)`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientBoostingModel {
    pub base_score: f64,
    pub learning_rate: f64,
    pub trees: Vec<TreeNode>,
}

impl GradientBoostingModel {
    fn check(&self) -> Result<(), String> {
        if !self.base_score.is_finite() || !self.learning_rate.is_finite() {
            return Err("gradient boosting model has non-finite parameters".to_string());
        }
        self.trees.iter().try_for_each(TreeNode::check)
    }
}
