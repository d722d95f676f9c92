//! Error handling for heart risk assessment.

use std::io;
use std::path::PathBuf;

pub mod util;

/// Specialized error type for artifact loading, input handling and assessment
#[derive(Debug, thiserror::Error)]
pub enum HeartRiskError {
    /// A model or scaler file is absent at startup
    #[error("Model artifact not found: {}", path.display())]
    ArtifactMissing {
        /// The expected location of the artifact
        path: PathBuf,
    },

    /// An artifact file exists but could not be decoded
    #[error("Malformed model artifact {}: {source}", path.display())]
    ArtifactFormat {
        /// The artifact that failed to parse
        path: PathBuf,
        /// Underlying decoder error
        #[source]
        source: serde_json::Error,
    },

    /// Error opening or reading a file
    #[error("IO error on {}: {context}", path.display())]
    Io {
        /// The file being accessed
        path: PathBuf,
        /// What was being attempted
        context: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// An artifact's shape disagrees with the feature vector contract
    #[error("Dimension mismatch in {what}: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Which part of which artifact is affected
        what: String,
        /// Expected length
        expected: usize,
        /// Length found in the artifact
        got: usize,
    },

    /// An artifact parsed but its contents are unusable
    #[error("Invalid model artifact: {0}")]
    InvalidArtifact(String),

    /// The classifier produced a probability outside [0, 1]
    #[error("Classifier returned an invalid probability: {0}")]
    InvalidProbability(f64),

    /// Prediction was requested while the artifacts are not loaded
    #[error("Prediction unavailable: {0}")]
    PredictionUnavailable(String),

    /// A user-supplied value is outside the form's domain
    #[error("Invalid value for {field}: {reason}")]
    InvalidInput {
        /// Form field key
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

impl HeartRiskError {
    /// Create an input validation error
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type for heart risk operations
pub type Result<T> = std::result::Result<T, HeartRiskError>;
