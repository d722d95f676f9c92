//! Binary classifier artifacts
//!
//! Two model families are understood: logistic regression and a random forest
//! of binary decision trees. Both expose class probabilities `[p0, p1]` for a
//! scaled feature vector.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::encoder::{FEATURE_COUNT, FeatureVector};
use crate::error::{HeartRiskError, Result};

/// A fitted binary classifier
pub trait ProbabilisticClassifier: Debug + Send + Sync {
    /// Number of features the model was fitted on
    fn n_features(&self) -> usize;

    /// Class probabilities `[p0, p1]` for scaled features
    fn predict_proba(&self, features: &FeatureVector) -> [f64; 2];

    /// Check the fitted parameters before the model is used
    ///
    /// `predict_proba` may assume this passed.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Numerically stable logistic function
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let exp_z = z.exp();
        exp_z / (1.0 + exp_z)
    }
}

/// Logistic regression: `p1 = sigmoid(w . x + b)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    /// One weight per feature
    pub coefficients: Vec<f64>,
    /// Bias term
    pub intercept: f64,
}

impl ProbabilisticClassifier for LogisticRegression {
    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn predict_proba(&self, features: &FeatureVector) -> [f64; 2] {
        let z = self
            .coefficients
            .iter()
            .zip(features.as_slice())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept;
        let p1 = sigmoid(z);
        [1.0 - p1, p1]
    }

    fn validate(&self) -> Result<()> {
        if self.coefficients.len() != FEATURE_COUNT {
            return Err(HeartRiskError::DimensionMismatch {
                what: "logistic regression coefficients".to_string(),
                expected: FEATURE_COUNT,
                got: self.coefficients.len(),
            });
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|w| !w.is_finite()) {
            return Err(HeartRiskError::InvalidArtifact(
                "logistic regression has a non-finite weight".to_string(),
            ));
        }
        Ok(())
    }
}

/// Marker used for "no child" in the node arrays
pub const TREE_LEAF: i64 = -1;

/// A binary decision tree in flat array form
///
/// Node `i` is a leaf when `children_left[i] == TREE_LEAF`. Otherwise samples
/// with `x[feature[i]] <= threshold[i]` go left. `value[i]` holds the class
/// weights at the node; only leaf values are read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    /// Left child index per node
    pub children_left: Vec<i64>,
    /// Right child index per node
    pub children_right: Vec<i64>,
    /// Split feature per node
    pub feature: Vec<i64>,
    /// Split threshold per node
    pub threshold: Vec<f64>,
    /// Class weights `[w0, w1]` per node
    pub value: Vec<[f64; 2]>,
}

impl DecisionTree {
    fn node_count(&self) -> usize {
        self.children_left.len()
    }

    /// Check array lengths, split features and child links
    ///
    /// Children must come after their parent, which rules out cycles so
    /// traversal always reaches a leaf.
    pub fn validate(&self, index: usize) -> Result<()> {
        let nodes = self.node_count();
        let what = |table: &str| format!("random forest tree {index} {table}");

        if nodes == 0 {
            return Err(HeartRiskError::DimensionMismatch {
                what: what("nodes"),
                expected: 1,
                got: 0,
            });
        }
        for (table, len) in [
            ("children_right", self.children_right.len()),
            ("feature", self.feature.len()),
            ("threshold", self.threshold.len()),
            ("value", self.value.len()),
        ] {
            if len != nodes {
                return Err(HeartRiskError::DimensionMismatch {
                    what: what(table),
                    expected: nodes,
                    got: len,
                });
            }
        }

        for node in 0..nodes {
            let (left, right) = (self.children_left[node], self.children_right[node]);
            if left == TREE_LEAF {
                let [w0, w1] = self.value[node];
                if !(w0.is_finite() && w1.is_finite() && w0 >= 0.0 && w1 >= 0.0 && w0 + w1 > 0.0)
                {
                    return Err(HeartRiskError::InvalidArtifact(format!(
                        "{}: leaf {node} has no positive class weight",
                        what("value")
                    )));
                }
                continue;
            }

            let feature = self.feature[node];
            if feature < 0 || feature as usize >= FEATURE_COUNT {
                return Err(HeartRiskError::InvalidArtifact(format!(
                    "{}: node {node} splits on feature {feature}, expected 0-{}",
                    what("feature"),
                    FEATURE_COUNT - 1
                )));
            }
            for child in [left, right] {
                if child <= node as i64 || child as usize >= nodes {
                    return Err(HeartRiskError::InvalidArtifact(format!(
                        "{}: node {node} links to node {child}",
                        what("children")
                    )));
                }
            }
        }
        Ok(())
    }

    /// Normalized class probabilities at the leaf reached by `features`
    #[must_use]
    pub fn leaf_proba(&self, features: &FeatureVector) -> [f64; 2] {
        let mut node = 0usize;
        while self.children_left[node] != TREE_LEAF {
            let feature = self.feature[node] as usize;
            node = if features[feature] <= self.threshold[node] {
                self.children_left[node] as usize
            } else {
                self.children_right[node] as usize
            };
        }

        let [w0, w1] = self.value[node];
        let total = w0 + w1;
        [w0 / total, w1 / total]
    }
}

/// Soft-voting ensemble of decision trees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    /// Feature count the forest was fitted on
    pub n_features: usize,
    /// Member trees
    pub trees: Vec<DecisionTree>,
}

impl ProbabilisticClassifier for RandomForest {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict_proba(&self, features: &FeatureVector) -> [f64; 2] {
        let n = self.trees.len() as f64;
        let [s0, s1] = self.trees.iter().fold([0.0, 0.0], |[a0, a1], tree| {
            let [p0, p1] = tree.leaf_proba(features);
            [a0 + p0, a1 + p1]
        });
        [s0 / n, s1 / n]
    }

    fn validate(&self) -> Result<()> {
        if self.n_features != FEATURE_COUNT {
            return Err(HeartRiskError::DimensionMismatch {
                what: "random forest n_features".to_string(),
                expected: FEATURE_COUNT,
                got: self.n_features,
            });
        }
        if self.trees.is_empty() {
            return Err(HeartRiskError::DimensionMismatch {
                what: "random forest trees".to_string(),
                expected: 1,
                got: 0,
            });
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(i)?;
        }
        Ok(())
    }
}

/// Classifier artifact as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Classifier {
    /// Logistic regression
    LogisticRegression(LogisticRegression),
    /// Random forest
    RandomForest(RandomForest),
}

impl ProbabilisticClassifier for Classifier {
    fn n_features(&self) -> usize {
        match self {
            Self::LogisticRegression(m) => m.n_features(),
            Self::RandomForest(m) => m.n_features(),
        }
    }

    fn predict_proba(&self, features: &FeatureVector) -> [f64; 2] {
        match self {
            Self::LogisticRegression(m) => m.predict_proba(features),
            Self::RandomForest(m) => m.predict_proba(features),
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            Self::LogisticRegression(m) => m.validate(),
            Self::RandomForest(m) => m.validate(),
        }
    }
}
