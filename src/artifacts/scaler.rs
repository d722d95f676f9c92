//! Feature scaling artifacts

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::encoder::{FEATURE_COUNT, FeatureVector};
use crate::error::{HeartRiskError, Result};

/// Transform applied to the raw feature vector before classification
pub trait FeatureTransform: Debug + Send + Sync {
    /// Number of features the transform was fitted on
    fn n_features(&self) -> usize;

    /// Map raw features to the space the classifier was trained in
    fn transform(&self, features: &FeatureVector) -> FeatureVector;

    /// Check the fitted parameters before the transform is used
    ///
    /// `transform` may assume this passed.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Every table must have one finite entry per feature
fn check_tables(name: &str, tables: [(&str, &[f64]); 2]) -> Result<()> {
    for (table, values) in tables {
        if values.len() != FEATURE_COUNT {
            return Err(HeartRiskError::DimensionMismatch {
                what: format!("{name} {table}"),
                expected: FEATURE_COUNT,
                got: values.len(),
            });
        }
        if let Some(i) = values.iter().position(|v| !v.is_finite()) {
            return Err(HeartRiskError::InvalidArtifact(format!(
                "{name} {table}[{i}] is {}",
                values[i]
            )));
        }
    }
    Ok(())
}

/// Standardization: `(x - mean) / scale`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Per-feature mean
    pub mean: Vec<f64>,
    /// Per-feature standard deviation
    pub scale: Vec<f64>,
}

impl FeatureTransform for StandardScaler {
    fn n_features(&self) -> usize {
        self.mean.len().min(self.scale.len())
    }

    fn transform(&self, features: &FeatureVector) -> FeatureVector {
        let mut out = [0.0; FEATURE_COUNT];
        for (i, slot) in out.iter_mut().enumerate() {
            // Constant features were fitted with zero variance; leave them unscaled
            let scale = if self.scale[i] == 0.0 { 1.0 } else { self.scale[i] };
            *slot = (features[i] - self.mean[i]) / scale;
        }
        FeatureVector::new(out)
    }

    fn validate(&self) -> Result<()> {
        check_tables(
            "standard scaler",
            [("mean", self.mean.as_slice()), ("scale", self.scale.as_slice())],
        )
    }
}

/// Min-max normalization: `(x - data_min) / (data_max - data_min)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScaler {
    /// Per-feature minimum seen during fitting
    pub data_min: Vec<f64>,
    /// Per-feature maximum seen during fitting
    pub data_max: Vec<f64>,
}

impl FeatureTransform for MinMaxScaler {
    fn n_features(&self) -> usize {
        self.data_min.len().min(self.data_max.len())
    }

    fn transform(&self, features: &FeatureVector) -> FeatureVector {
        let mut out = [0.0; FEATURE_COUNT];
        for (i, slot) in out.iter_mut().enumerate() {
            let range = self.data_max[i] - self.data_min[i];
            let range = if range == 0.0 { 1.0 } else { range };
            *slot = (features[i] - self.data_min[i]) / range;
        }
        FeatureVector::new(out)
    }

    fn validate(&self) -> Result<()> {
        check_tables(
            "min-max scaler",
            [
                ("data_min", self.data_min.as_slice()),
                ("data_max", self.data_max.as_slice()),
            ],
        )
    }
}

/// Scaler artifact as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scaler {
    /// Standard scaler
    Standard(StandardScaler),
    /// Min-max scaler
    MinMax(MinMaxScaler),
}

impl FeatureTransform for Scaler {
    fn n_features(&self) -> usize {
        match self {
            Self::Standard(s) => s.n_features(),
            Self::MinMax(s) => s.n_features(),
        }
    }

    fn transform(&self, features: &FeatureVector) -> FeatureVector {
        match self {
            Self::Standard(s) => s.transform(features),
            Self::MinMax(s) => s.transform(features),
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            Self::Standard(s) => s.validate(),
            Self::MinMax(s) => s.validate(),
        }
    }
}
