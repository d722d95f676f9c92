//! Pre-trained model artifacts
//!
//! The scaler and classifier are trained elsewhere and loaded once at startup
//! into an immutable [`ModelArtifacts`] handle. Callers only see the
//! `transform` / `predict_proba` capability surface.

pub mod classifier;
pub mod scaler;

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::config::PredictorConfig;
use crate::encoder::{FEATURE_COUNT, FeatureVector};
use crate::error::util::safe_read_to_string;
use crate::error::{HeartRiskError, Result};

pub use classifier::{
    Classifier, DecisionTree, LogisticRegression, ProbabilisticClassifier, RandomForest,
};
pub use scaler::{FeatureTransform, MinMaxScaler, Scaler, StandardScaler};

/// Loaded scaler and classifier pair
///
/// Read-only after construction; share it behind an `Arc`.
#[derive(Debug)]
pub struct ModelArtifacts {
    scaler: Box<dyn FeatureTransform>,
    model: Box<dyn ProbabilisticClassifier>,
}

impl ModelArtifacts {
    /// Assemble a handle from in-memory parts
    ///
    /// Both parts must be fitted on 13 features and pass their own
    /// `validate`, so no later `transform` or `predict_proba` call can index
    /// outside its tables.
    pub fn from_parts(
        scaler: impl FeatureTransform + 'static,
        model: impl ProbabilisticClassifier + 'static,
    ) -> Result<Self> {
        check_width("scaler", scaler.n_features())?;
        check_width("classifier", model.n_features())?;
        scaler.validate()?;
        model.validate()?;
        Ok(Self {
            scaler: Box::new(scaler),
            model: Box::new(model),
        })
    }

    /// Load both artifacts from the paths in `config`
    ///
    /// Both files are checked for existence before either is parsed, so a
    /// missing file is always reported as [`HeartRiskError::ArtifactMissing`]
    /// with the model path taking precedence.
    pub fn load(config: &PredictorConfig) -> Result<Self> {
        let model_path = config.model_path();
        let scaler_path = config.scaler_path();

        for path in [&model_path, &scaler_path] {
            if !path.exists() {
                return Err(HeartRiskError::ArtifactMissing { path: path.clone() });
            }
        }

        let model: Classifier = read_json(&model_path, "classifier artifact")?;
        let scaler: Scaler = read_json(&scaler_path, "scaler artifact")?;
        let loaded = format!(
            "{} from {} and {} scaler from {}",
            classifier_kind(&model),
            model_path.display(),
            scaler_kind(&scaler),
            scaler_path.display()
        );
        let artifacts = Self::from_parts(scaler, model)?;

        log::info!("Loaded {loaded}");
        Ok(artifacts)
    }

    /// Apply the scaling transform
    #[must_use]
    pub fn transform(&self, features: &FeatureVector) -> FeatureVector {
        self.scaler.transform(features)
    }

    /// Class probabilities `[p0, p1]` for already scaled features
    #[must_use]
    pub fn predict_proba(&self, scaled: &FeatureVector) -> [f64; 2] {
        self.model.predict_proba(scaled)
    }
}

fn check_width(what: &str, got: usize) -> Result<()> {
    if got == FEATURE_COUNT {
        Ok(())
    } else {
        Err(HeartRiskError::DimensionMismatch {
            what: format!("{what} feature count"),
            expected: FEATURE_COUNT,
            got,
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path, purpose: &str) -> Result<T> {
    let content = safe_read_to_string(path, purpose)?;
    serde_json::from_str(&content).map_err(|source| HeartRiskError::ArtifactFormat {
        path: PathBuf::from(path),
        source,
    })
}

fn classifier_kind(model: &Classifier) -> String {
    match model {
        Classifier::LogisticRegression(_) => "logistic regression".to_string(),
        Classifier::RandomForest(m) => format!("random forest ({} trees)", m.trees.len()),
    }
}

fn scaler_kind(scaler: &Scaler) -> &'static str {
    match scaler {
        Scaler::Standard(_) => "standard",
        Scaler::MinMax(_) => "min-max",
    }
}
