//! A Rust library for clinical heart disease risk assessment: encoding form
//! input into a feature vector, running a pre-trained scaler and classifier,
//! and reporting a tiered risk percentage.

pub mod artifacts;
pub mod config;
pub mod encoder;
pub mod error;
pub mod form;
pub mod models;
pub mod render;
pub mod risk;
pub mod session;

// Re-export the most common types for easier use
// Core types
pub use config::PredictorConfig;
pub use error::{HeartRiskError, Result};
pub use models::ClinicalObservation;

// Encoding and classification
pub use artifacts::{FeatureTransform, ModelArtifacts, ProbabilisticClassifier};
pub use encoder::{FEATURE_COUNT, FEATURE_NAMES, FeatureVector, encode};
pub use risk::{DisplayPalette, RiskAssessment, RiskClassifier, RiskTier};

// Presentation
pub use session::{FormSession, LoadNotice, PredictionService, SessionState};
