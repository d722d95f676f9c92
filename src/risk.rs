//! Risk classification
//!
//! Scales and classifies an encoded observation, turns the positive-class
//! probability into a percentage and maps it to a display tier.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::artifacts::ModelArtifacts;
use crate::encoder::FeatureVector;
use crate::error::{HeartRiskError, Result};

/// Scores at or above this are HIGH
pub const HIGH_RISK_THRESHOLD: f64 = 70.0;
/// Scores at or above this (and below HIGH) are MODERATE
pub const MODERATE_RISK_THRESHOLD: f64 = 30.0;

/// Risk tier derived from the risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    /// Below 30%
    Low,
    /// 30% up to (excluding) 70%
    Moderate,
    /// 70% and above
    High,
}

impl RiskTier {
    /// Classify a percentage, evaluating thresholds high to low
    #[must_use]
    pub fn from_score(risk_score: f64) -> Self {
        if risk_score >= HIGH_RISK_THRESHOLD {
            Self::High
        } else if risk_score >= MODERATE_RISK_THRESHOLD {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Headline shown above the percentage
    #[must_use]
    pub fn headline(self) -> &'static str {
        match self {
            Self::High => "HIGH RISK DETECTED:",
            Self::Moderate => "MODERATE RISK:",
            Self::Low => "LOW RISK",
        }
    }

    /// Advisory line shown under the progress bar
    #[must_use]
    pub fn advice(self) -> &'static str {
        match self {
            Self::High | Self::Moderate => "probability of heart disease.",
            Self::Low => "Indicators are within healthy ranges.",
        }
    }

    /// Colors of the result card
    #[must_use]
    pub fn palette(self) -> DisplayPalette {
        match self {
            Self::High => DisplayPalette {
                color: "#800000",
                background: "#f8d7da",
                border: "#800000",
            },
            Self::Moderate => DisplayPalette {
                color: "#CC9E4C",
                background: "#fffdc2",
                border: "#CC9E4C",
            },
            Self::Low => DisplayPalette {
                color: "#75808b",
                background: "#d1e7dd",
                border: "#75808b",
            },
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
        })
    }
}

/// Card colors for a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayPalette {
    /// Headline, percentage and bar color
    pub color: &'static str,
    /// Card background
    pub background: &'static str,
    /// Left border accent
    pub border: &'static str,
}

/// Outcome of one submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    /// Tier the score falls in
    pub tier: RiskTier,
    /// Positive-class probability as a percentage in [0, 100]
    pub risk_score: f64,
    /// Card colors
    pub palette: DisplayPalette,
    /// Headline text
    pub headline: &'static str,
    /// Advisory text
    pub advice: &'static str,
    /// When the assessment was computed
    pub assessed_at: DateTime<Utc>,
}

impl RiskAssessment {
    /// Build an assessment from a positive-class probability
    pub fn from_probability(p1: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&p1) {
            return Err(HeartRiskError::InvalidProbability(p1));
        }

        let risk_score = p1 * 100.0;
        let tier = RiskTier::from_score(risk_score);
        Ok(Self {
            tier,
            risk_score,
            palette: tier.palette(),
            headline: tier.headline(),
            advice: tier.advice(),
            assessed_at: Utc::now(),
        })
    }

    /// Score rounded for display, e.g. `85%`
    #[must_use]
    pub fn percent_label(&self) -> String {
        format!("{:.0}%", self.risk_score)
    }
}

/// Adapter between encoded observations and the loaded artifacts
#[derive(Debug, Clone)]
pub struct RiskClassifier {
    artifacts: Arc<ModelArtifacts>,
}

impl RiskClassifier {
    /// Create a classifier over an already loaded artifact handle
    #[must_use]
    pub fn new(artifacts: Arc<ModelArtifacts>) -> Self {
        Self { artifacts }
    }

    /// Scale, classify and tier one feature vector
    pub fn assess(&self, features: &FeatureVector) -> Result<RiskAssessment> {
        let scaled = self.artifacts.transform(features);
        let [_, p1] = self.artifacts.predict_proba(&scaled);
        let assessment = RiskAssessment::from_probability(p1)?;

        log::debug!(
            "Assessed p1={p1:.4} -> {} ({:.1}%)",
            assessment.tier,
            assessment.risk_score
        );
        Ok(assessment)
    }
}
