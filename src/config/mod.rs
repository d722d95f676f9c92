//! Configuration for locating model artifacts.

use std::path::{Path, PathBuf};

/// Environment variable that overrides the models directory
pub const MODELS_DIR_ENV: &str = "HEART_RISK_MODELS_DIR";

/// Default directory holding the artifacts, relative to the application root
pub const DEFAULT_MODELS_DIR: &str = "models";

/// Default classifier artifact file name
pub const DEFAULT_MODEL_FILE: &str = "heart_disease_model.json";

/// Default scaler artifact file name
pub const DEFAULT_SCALER_FILE: &str = "data_scaler.json";

/// Configuration for the prediction service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictorConfig {
    /// Directory containing both artifacts
    pub models_dir: PathBuf,
    /// Classifier file name inside `models_dir`
    pub model_file: String,
    /// Scaler file name inside `models_dir`
    pub scaler_file: String,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            models_dir: PathBuf::from(DEFAULT_MODELS_DIR),
            model_file: DEFAULT_MODEL_FILE.to_string(),
            scaler_file: DEFAULT_SCALER_FILE.to_string(),
        }
    }
}

impl PredictorConfig {
    /// Default configuration, with the models directory taken from
    /// `HEART_RISK_MODELS_DIR` when it is set and non-empty
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var_os(MODELS_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Self::default().with_models_dir(dir),
            _ => Self::default(),
        }
    }

    /// Override the models directory
    #[must_use]
    pub fn with_models_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.models_dir = dir.into();
        self
    }

    /// Full path of the classifier artifact
    #[must_use]
    pub fn model_path(&self) -> PathBuf {
        self.models_dir.join(&self.model_file)
    }

    /// Full path of the scaler artifact
    #[must_use]
    pub fn scaler_path(&self) -> PathBuf {
        self.models_dir.join(&self.scaler_file)
    }

    /// Directory holding the artifacts
    #[must_use]
    pub fn models_dir(&self) -> &Path {
        &self.models_dir
    }
}
