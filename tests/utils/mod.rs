use std::path::Path;
use std::sync::{Arc, Mutex};

use heart_risk::artifacts::{Classifier, LogisticRegression, Scaler, StandardScaler};
use heart_risk::{
    FEATURE_COUNT, FeatureTransform, FeatureVector, ModelArtifacts, PredictorConfig,
    ProbabilisticClassifier,
};

/// Scaler that passes features through unchanged
#[derive(Debug)]
pub struct IdentityScaler;

impl FeatureTransform for IdentityScaler {
    fn n_features(&self) -> usize {
        FEATURE_COUNT
    }

    fn transform(&self, features: &FeatureVector) -> FeatureVector {
        *features
    }
}

/// Classifier that always returns the same positive-class probability and
/// remembers the last vector it was given
#[derive(Debug)]
pub struct FixedProbability {
    pub p1: f64,
    pub last_input: Mutex<Option<FeatureVector>>,
}

impl FixedProbability {
    #[must_use]
    pub fn new(p1: f64) -> Self {
        Self {
            p1,
            last_input: Mutex::new(None),
        }
    }
}

impl ProbabilisticClassifier for FixedProbability {
    fn n_features(&self) -> usize {
        FEATURE_COUNT
    }

    fn predict_proba(&self, features: &FeatureVector) -> [f64; 2] {
        *self.last_input.lock().unwrap() = Some(*features);
        [1.0 - self.p1, self.p1]
    }
}

/// Artifact handle whose classifier always answers `p1`
#[must_use]
pub fn fixed_artifacts(p1: f64) -> Arc<ModelArtifacts> {
    Arc::new(ModelArtifacts::from_parts(IdentityScaler, FixedProbability::new(p1)).unwrap())
}

/// Standard scaler with unit scale and zero mean
#[must_use]
pub fn unit_scaler() -> Scaler {
    Scaler::Standard(StandardScaler {
        mean: vec![0.0; FEATURE_COUNT],
        scale: vec![1.0; FEATURE_COUNT],
    })
}

/// Logistic model that only looks at the given feature
#[must_use]
pub fn single_feature_logistic(feature: usize, weight: f64, intercept: f64) -> Classifier {
    let mut coefficients = vec![0.0; FEATURE_COUNT];
    coefficients[feature] = weight;
    Classifier::LogisticRegression(LogisticRegression {
        coefficients,
        intercept,
    })
}

/// Write both artifacts as JSON into `dir` and return the matching config
pub fn write_artifacts(dir: &Path, scaler: &Scaler, model: &Classifier) -> PredictorConfig {
    let config = PredictorConfig::default().with_models_dir(dir);
    std::fs::write(config.scaler_path(), serde_json::to_string(scaler).unwrap()).unwrap();
    std::fs::write(config.model_path(), serde_json::to_string(model).unwrap()).unwrap();
    config
}
