//! Input encoding
//!
//! Converts a [`ClinicalObservation`] into the fixed-order numeric vector the
//! classifier was trained on. Order is the only contract with the model; no
//! field names cross that boundary.

use std::ops::Index;

use serde::Serialize;

use crate::models::{Categorical, ClinicalObservation};

/// Number of features the classifier consumes
pub const FEATURE_COUNT: usize = 13;

/// Feature names in encoding order, for diagnostics only
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "age",
    "sex",
    "chest_pain_type",
    "resting_bp",
    "cholesterol",
    "fasting_blood_sugar_high",
    "resting_ecg",
    "max_heart_rate",
    "exercise_angina",
    "st_depression",
    "st_slope",
    "major_vessels",
    "thalassemia",
];

/// Ordered feature vector of one observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Wrap already ordered values
    #[must_use]
    pub const fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    /// The raw values
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Pair each value with its feature name
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.0.iter().copied())
    }
}

impl Index<usize> for FeatureVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

/// Encode an observation into its feature vector
#[must_use]
pub fn encode(observation: &ClinicalObservation) -> FeatureVector {
    let values = [
        f64::from(observation.age),
        observation.sex.encode(),
        observation.chest_pain_type.encode(),
        f64::from(observation.resting_bp),
        f64::from(observation.cholesterol),
        observation.fasting_blood_sugar_high.encode(),
        observation.resting_ecg.encode(),
        f64::from(observation.max_heart_rate),
        observation.exercise_angina.encode(),
        observation.st_depression,
        observation.st_slope.encode(),
        observation.major_vessels.encode(),
        observation.thalassemia.encode(),
    ];

    let features = FeatureVector(values);
    if log::log_enabled!(log::Level::Debug) {
        let named = features
            .named()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join(", ");
        log::debug!("Encoded observation: {named}");
    }
    features
}
