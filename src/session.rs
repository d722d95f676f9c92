//! Prediction service and per-user form session
//!
//! [`PredictionService`] performs the one-time artifact load. When the load
//! fails the service stays alive but inert: every submission is refused with
//! the load error and no classifier is ever invoked.
//!
//! [`FormSession`] is the two-state presentation model: `AwaitingInput` until
//! the first successful submission, then `Resulted` with the latest
//! assessment.

use std::sync::Arc;

use crate::artifacts::ModelArtifacts;
use crate::config::PredictorConfig;
use crate::encoder::encode;
use crate::error::{HeartRiskError, Result};
use crate::models::ClinicalObservation;
use crate::risk::{RiskAssessment, RiskClassifier};

/// Hint shown under the load error
pub const LOAD_ERROR_HINT: &str = "Check that the 'models' folder contains your model files.";

/// Whether predictions can be served
#[derive(Debug)]
pub enum Availability {
    /// Artifacts loaded
    Ready(RiskClassifier),
    /// Artifacts failed to load; prediction is disabled
    Unavailable(HeartRiskError),
}

/// User-visible description of a failed artifact load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadNotice {
    /// Error line
    pub message: String,
    /// Remedy line
    pub hint: &'static str,
}

/// Owner of the loaded artifacts for the lifetime of the process
#[derive(Debug)]
pub struct PredictionService {
    availability: Availability,
}

impl PredictionService {
    /// Load the artifacts once; a failure is kept, not raised
    #[must_use]
    pub fn initialize(config: &PredictorConfig) -> Self {
        let availability = match ModelArtifacts::load(config) {
            Ok(artifacts) => Availability::Ready(RiskClassifier::new(Arc::new(artifacts))),
            Err(e) => {
                log::warn!("Prediction disabled: {e}");
                Availability::Unavailable(e)
            }
        };
        Self { availability }
    }

    /// Service over an already loaded artifact handle
    #[must_use]
    pub fn with_artifacts(artifacts: Arc<ModelArtifacts>) -> Self {
        Self {
            availability: Availability::Ready(RiskClassifier::new(artifacts)),
        }
    }

    /// Current availability
    #[must_use]
    pub fn availability(&self) -> &Availability {
        &self.availability
    }

    /// Whether the artifacts are loaded
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self.availability, Availability::Ready(_))
    }

    /// Message to display instead of the form when loading failed
    #[must_use]
    pub fn load_notice(&self) -> Option<LoadNotice> {
        let Availability::Unavailable(error) = &self.availability else {
            return None;
        };

        let message = match error {
            HeartRiskError::ArtifactMissing { path } => format!(
                "Error: Model files not found! Looking at: {}",
                path.display()
            ),
            other => format!("Error: Model files could not be loaded: {other}"),
        };
        Some(LoadNotice {
            message,
            hint: LOAD_ERROR_HINT,
        })
    }

    /// Validate, encode and assess one observation
    pub fn predict(&self, observation: &ClinicalObservation) -> Result<RiskAssessment> {
        let classifier = match &self.availability {
            Availability::Ready(classifier) => classifier,
            Availability::Unavailable(error) => {
                return Err(HeartRiskError::PredictionUnavailable(error.to_string()));
            }
        };

        observation.validate()?;
        classifier.assess(&encode(observation))
    }

    /// Start a fresh form session
    #[must_use]
    pub fn session(&self) -> FormSession<'_> {
        FormSession {
            service: self,
            state: SessionState::AwaitingInput,
        }
    }
}

/// Presentation state of the result region
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// No submission yet; a neutral placeholder is shown
    AwaitingInput,
    /// Latest assessment
    Resulted(RiskAssessment),
}

/// One user's form
#[derive(Debug)]
pub struct FormSession<'a> {
    service: &'a PredictionService,
    state: SessionState,
}

impl FormSession<'_> {
    /// Current state
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Submit the form
    ///
    /// On error the previous state is kept.
    pub fn submit(&mut self, observation: &ClinicalObservation) -> Result<RiskAssessment> {
        let assessment = self.service.predict(observation)?;
        self.state = SessionState::Resulted(assessment.clone());
        Ok(assessment)
    }
}
