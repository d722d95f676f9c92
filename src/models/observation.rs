//! Clinical observation model
//!
//! A `ClinicalObservation` holds the thirteen measurements collected by the
//! form for a single submission. It is never persisted.

use serde::{Deserialize, Serialize};

use crate::error::{HeartRiskError, Result};
use crate::models::types::{
    ChestPainType, ExerciseAngina, FastingBloodSugar, MajorVessels, RestingEcg, Sex, StSlope,
    Thalassemia,
};

/// Inclusive bounds of the integer form fields
pub const AGE_RANGE: (u16, u16) = (10, 100);
/// Resting blood pressure bounds (mm Hg)
pub const RESTING_BP_RANGE: (u16, u16) = (80, 200);
/// Serum cholesterol bounds (mg/dl)
pub const CHOLESTEROL_RANGE: (u16, u16) = (100, 500);
/// Maximum heart rate bounds (bpm)
pub const MAX_HEART_RATE_RANGE: (u16, u16) = (60, 220);
/// ST depression bounds
pub const ST_DEPRESSION_RANGE: (f64, f64) = (0.0, 6.0);
/// ST depression input step
pub const ST_DEPRESSION_STEP: f64 = 0.1;

/// The thirteen measurements of one form submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClinicalObservation {
    /// Age in years
    pub age: u16,
    /// Biological sex
    pub sex: Sex,
    /// Chest pain type
    pub chest_pain_type: ChestPainType,
    /// Resting blood pressure (mm Hg)
    pub resting_bp: u16,
    /// Serum cholesterol (mg/dl)
    pub cholesterol: u16,
    /// Fasting blood sugar above 120 mg/dl
    pub fasting_blood_sugar_high: FastingBloodSugar,
    /// Resting ECG result
    pub resting_ecg: RestingEcg,
    /// Maximum heart rate reached during the stress test
    pub max_heart_rate: u16,
    /// Exercise induced angina
    pub exercise_angina: ExerciseAngina,
    /// ST depression induced by exercise relative to rest
    pub st_depression: f64,
    /// Slope of the peak exercise ST segment
    pub st_slope: StSlope,
    /// Number of major vessels visualized by fluoroscopy
    pub major_vessels: MajorVessels,
    /// Thalassemia result
    pub thalassemia: Thalassemia,
}

impl Default for ClinicalObservation {
    /// The values a fresh form starts with
    fn default() -> Self {
        Self {
            age: 50,
            sex: Sex::Female,
            chest_pain_type: ChestPainType::NoSymptoms,
            resting_bp: 120,
            cholesterol: 200,
            fasting_blood_sugar_high: FastingBloodSugar::Normal,
            resting_ecg: RestingEcg::Normal,
            max_heart_rate: 150,
            exercise_angina: ExerciseAngina::No,
            st_depression: 1.0,
            st_slope: StSlope::Slope0,
            major_vessels: MajorVessels::Zero,
            thalassemia: Thalassemia::PermanentDefect,
        }
    }
}

fn check_range(field: &'static str, value: u16, (min, max): (u16, u16)) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(HeartRiskError::invalid_input(
            field,
            format!("{value} is outside {min}-{max}"),
        ))
    }
}

impl ClinicalObservation {
    /// Check every numeric field against the form's widget bounds
    ///
    /// Categorical fields need no check: their types only admit valid values.
    pub fn validate(&self) -> Result<()> {
        check_range("age", self.age, AGE_RANGE)?;
        check_range("resting_bp", self.resting_bp, RESTING_BP_RANGE)?;
        check_range("cholesterol", self.cholesterol, CHOLESTEROL_RANGE)?;
        check_range("max_heart_rate", self.max_heart_rate, MAX_HEART_RATE_RANGE)?;

        let (min, max) = ST_DEPRESSION_RANGE;
        if !self.st_depression.is_finite() || self.st_depression < min || self.st_depression > max
        {
            return Err(HeartRiskError::invalid_input(
                "st_depression",
                format!("{} is outside {min:.1}-{max:.1}", self.st_depression),
            ));
        }

        Ok(())
    }

    /// Build an observation in layers and validate the result
    ///
    /// Form defaults come first, then the fields present in `json`, then every
    /// set override. Only the merged observation is validated, so a later
    /// layer may correct an out-of-range value from an earlier one.
    pub fn from_layers(json: Option<&str>, overrides: &ObservationOverrides) -> Result<Self> {
        let mut observation = match json {
            Some(content) => serde_json::from_str(content)
                .map_err(|e| HeartRiskError::invalid_input("input", e.to_string()))?,
            None => Self::default(),
        };
        overrides.apply_to(&mut observation);
        observation.validate()?;
        Ok(observation)
    }
}

/// Individually supplied field values, each replacing the layer below
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObservationOverrides {
    pub age: Option<u16>,
    pub sex: Option<Sex>,
    pub chest_pain_type: Option<ChestPainType>,
    pub resting_bp: Option<u16>,
    pub cholesterol: Option<u16>,
    pub fasting_blood_sugar_high: Option<FastingBloodSugar>,
    pub resting_ecg: Option<RestingEcg>,
    pub max_heart_rate: Option<u16>,
    pub exercise_angina: Option<ExerciseAngina>,
    pub st_depression: Option<f64>,
    pub st_slope: Option<StSlope>,
    pub major_vessels: Option<MajorVessels>,
    pub thalassemia: Option<Thalassemia>,
}

impl ObservationOverrides {
    /// Write every set field into `observation`
    pub fn apply_to(&self, observation: &mut ClinicalObservation) {
        if let Some(v) = self.age {
            observation.age = v;
        }
        if let Some(v) = self.sex {
            observation.sex = v;
        }
        if let Some(v) = self.chest_pain_type {
            observation.chest_pain_type = v;
        }
        if let Some(v) = self.resting_bp {
            observation.resting_bp = v;
        }
        if let Some(v) = self.cholesterol {
            observation.cholesterol = v;
        }
        if let Some(v) = self.fasting_blood_sugar_high {
            observation.fasting_blood_sugar_high = v;
        }
        if let Some(v) = self.resting_ecg {
            observation.resting_ecg = v;
        }
        if let Some(v) = self.max_heart_rate {
            observation.max_heart_rate = v;
        }
        if let Some(v) = self.exercise_angina {
            observation.exercise_angina = v;
        }
        if let Some(v) = self.st_depression {
            observation.st_depression = v;
        }
        if let Some(v) = self.st_slope {
            observation.st_slope = v;
        }
        if let Some(v) = self.major_vessels {
            observation.major_vessels = v;
        }
        if let Some(v) = self.thalassemia {
            observation.thalassemia = v;
        }
    }
}
