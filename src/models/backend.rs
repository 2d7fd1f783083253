//! Regression model capability and built-in backends

use crate::errors::InferenceFault;
use crate::models::types::{
    DecisionTreeModel, GradientBoostingModel, LinearModel, ModelArtifact, TreeNode,
};
use crate::types::FEATURE_COUNT;
use std::fmt::Debug;

/// A loaded regression model: one feature vector in, one score out
///
/// Implementations are read-only after construction and may be shared
/// across threads behind an `Arc`.
pub trait RegressionModel: Debug + Send + Sync {
    /// Score a single feature vector in model column order
    fn predict_one(&self, features: &[f64]) -> Result<f64, InferenceFault>;

    /// Short backend identifier
    fn kind(&self) -> &str;
}

fn check_shape(features: &[f64]) -> Result<(), InferenceFault> {
    if features.len() != FEATURE_COUNT {
        return Err(InferenceFault::ShapeMismatch {
            expected: FEATURE_COUNT,
            actual: features.len(),
        });
    }
    Ok(())
}

impl TreeNode {
    /// Walk from this node to a leaf
    pub fn evaluate(&self, features: &[f64]) -> Result<f64, InferenceFault> {
        let mut node = self;
        loop {
            match node {
                TreeNode::Leaf { value } => return Ok(*value),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let x = features.get(*feature).ok_or(InferenceFault::ShapeMismatch {
                        expected: feature + 1,
                        actual: features.len(),
                    })?;
                    node = if *x <= *threshold {
                        left.as_ref()
                    } else {
                        right.as_ref()
                    };
                }
            }
        }
    }
}

impl RegressionModel for LinearModel {
    fn predict_one(&self, features: &[f64]) -> Result<f64, InferenceFault> {
        check_shape(features)?;
        let dot: f64 = self
            .coefficients
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum();
        Ok(self.intercept + dot)
    }

    fn kind(&self) -> &str {
        "linear"
    }
}

impl RegressionModel for DecisionTreeModel {
    fn predict_one(&self, features: &[f64]) -> Result<f64, InferenceFault> {
        check_shape(features)?;
        self.root.evaluate(features)
    }

    fn kind(&self) -> &str {
        "decision_tree"
    }
}

impl RegressionModel for GradientBoostingModel {
    fn predict_one(&self, features: &[f64]) -> Result<f64, InferenceFault> {
        check_shape(features)?;
        let mut sum = 0.0;
        for tree in &self.trees {
            sum += tree.evaluate(features)?;
        }
        Ok(self.base_score + self.learning_rate * sum)
    }

    fn kind(&self) -> &str {
        "gradient_boosting"
    }
}

impl RegressionModel for ModelArtifact {
    fn predict_one(&self, features: &[f64]) -> Result<f64, InferenceFault> {
        let raw = match self {
            ModelArtifact::Linear(m) => m.predict_one(features),
            ModelArtifact::DecisionTree(m) => m.predict_one(features),
            ModelArtifact::GradientBoosting(m) => m.predict_one(features),
        }?;
        if !raw.is_finite() {
            return Err(InferenceFault::NonFinite { value: raw });
        }
        Ok(raw)
    }

    fn kind(&self) -> &str {
        ModelArtifact::kind(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(value: f64) -> Box<TreeNode> {
        Box::new(TreeNode::Leaf { value })
    }

    fn study_split() -> TreeNode {
        TreeNode::Split {
            feature: 0,
            threshold: 3.0,
            left: leaf(55.0),
            right: leaf(80.0),
        }
    }

    #[test]
    fn test_linear_prediction() {
        let model = LinearModel {
            coefficients: vec![2.0, 0.5, 1.0, 1.0, -3.0],
            intercept: 5.0,
        };
        // 5 + 2*4 + 0.5*80 + 1*6 + 1*7 - 3*1 = 63
        let score = model.predict_one(&[4.0, 80.0, 6.0, 7.0, 1.0]).unwrap();
        assert!((score - 63.0).abs() < 1e-9);
    }

    #[test]
    fn test_linear_shape_mismatch() {
        let model = LinearModel {
            coefficients: vec![1.0; 5],
            intercept: 0.0,
        };
        let err = model.predict_one(&[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            InferenceFault::ShapeMismatch {
                expected: 5,
                actual: 3
            }
        );
    }

    #[test]
    fn test_tree_threshold_goes_left() {
        let model = DecisionTreeModel { root: study_split() };
        assert_eq!(model.predict_one(&[3.0, 0.0, 0.0, 0.0, 0.0]).unwrap(), 55.0);
        assert_eq!(model.predict_one(&[3.5, 0.0, 0.0, 0.0, 0.0]).unwrap(), 80.0);
    }

    #[test]
    fn test_gradient_boosting_sum() {
        let model = GradientBoostingModel {
            base_score: 60.0,
            learning_rate: 0.5,
            trees: vec![study_split(), TreeNode::Leaf { value: 10.0 }],
        };
        // 60 + 0.5 * (80 + 10)
        let score = model.predict_one(&[5.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
        assert!((score - 105.0).abs() < 1e-9);
    }

    #[test]
    fn test_artifact_rejects_non_finite_output() {
        let model = ModelArtifact::Linear(LinearModel {
            coefficients: vec![f64::MAX, f64::MAX, 0.0, 0.0, 0.0],
            intercept: 0.0,
        });
        let err = model.predict_one(&[10.0, 10.0, 0.0, 0.0, 0.0]).unwrap_err();
        assert!(matches!(err, InferenceFault::NonFinite { .. }));
    }
}
