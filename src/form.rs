//! Form descriptor
//!
//! Describes the thirteen input controls (label, help text, bounds or options
//! and default) in encoding order, so any front end can render the form.

use serde::Serialize;

use crate::models::observation::{
    AGE_RANGE, CHOLESTEROL_RANGE, MAX_HEART_RATE_RANGE, RESTING_BP_RANGE, ST_DEPRESSION_RANGE,
    ST_DEPRESSION_STEP,
};
use crate::models::{
    Categorical, ChestPainType, ClinicalObservation, ExerciseAngina, FastingBloodSugar,
    MajorVessels, RestingEcg, Sex, StSlope, Thalassemia,
};

/// One selectable option
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    /// Encoded value
    pub code: u8,
    /// Display label
    pub label: &'static str,
}

/// Kind of input control
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum Widget {
    /// Bounded numeric input
    Number {
        /// Minimum accepted value
        min: f64,
        /// Maximum accepted value
        max: f64,
        /// Initial value
        default: f64,
        /// Increment
        step: f64,
    },
    /// Drop-down of fixed options
    Select {
        /// Options in display order
        options: Vec<SelectOption>,
        /// Initially selected code
        default: u8,
    },
}

/// One labeled input control
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    /// Field key, matching the observation and feature names
    pub key: &'static str,
    /// Control label
    pub label: &'static str,
    /// Tooltip text
    pub help: &'static str,
    /// Control kind and domain
    #[serde(flatten)]
    pub widget: Widget,
}

fn integer(range: (u16, u16), default: u16) -> Widget {
    Widget::Number {
        min: f64::from(range.0),
        max: f64::from(range.1),
        default: f64::from(default),
        step: 1.0,
    }
}

fn select<T: Categorical>(default: T) -> Widget {
    Widget::Select {
        options: T::ALL
            .iter()
            .map(|v| SelectOption {
                code: v.code(),
                label: v.label(),
            })
            .collect(),
        default: default.code(),
    }
}

/// All form fields in encoding order, initialised from the form defaults
#[must_use]
pub fn fields() -> Vec<FieldSpec> {
    let d = ClinicalObservation::default();
    vec![
        FieldSpec {
            key: "age",
            label: "Age",
            help: "Biological age of the patient.",
            widget: integer(AGE_RANGE, d.age),
        },
        FieldSpec {
            key: "sex",
            label: "Sex",
            help: "Biological sex factor.",
            widget: select::<Sex>(d.sex),
        },
        FieldSpec {
            key: "chest_pain_type",
            label: "Chest Pain Type (0-3)",
            help: "The type of chest pain the patient is complaining of.",
            widget: select::<ChestPainType>(d.chest_pain_type),
        },
        FieldSpec {
            key: "resting_bp",
            label: "Resting Blood Pressure (mm Hg)",
            help: "Blood pressure measured in the hospital (mm Hg).",
            widget: integer(RESTING_BP_RANGE, d.resting_bp),
        },
        FieldSpec {
            key: "cholesterol",
            label: "Cholesterol (mg/dl)",
            help: "Serum cholesterol level. High values indicate risk.",
            widget: integer(CHOLESTEROL_RANGE, d.cholesterol),
        },
        FieldSpec {
            key: "fasting_blood_sugar_high",
            label: "Fasting Blood Sugar > 120 mg/dl",
            help: "Fasting blood sugar above 120 mg/dl indicates a risk of diabetes.",
            widget: select::<FastingBloodSugar>(d.fasting_blood_sugar_high),
        },
        FieldSpec {
            key: "resting_ecg",
            label: "Resting ECG Result (0-2)",
            help: "0: Normal\n1: ST-T wave abnormality\n2: Hypertrophy (Thickening of the heart muscle)",
            widget: select::<RestingEcg>(d.resting_ecg),
        },
        FieldSpec {
            key: "max_heart_rate",
            label: "Max Heart Rate",
            help: "The highest heart rate reached during the exercise stress test.",
            widget: integer(MAX_HEART_RATE_RANGE, d.max_heart_rate),
        },
        FieldSpec {
            key: "exercise_angina",
            label: "Exercise Induced Angina?",
            help: "Do you experience chest pain when exercising or running?",
            widget: select::<ExerciseAngina>(d.exercise_angina),
        },
        FieldSpec {
            key: "st_depression",
            label: "ST Depression",
            help: "The amount of depression in the ECG graph after exercise.",
            widget: Widget::Number {
                min: ST_DEPRESSION_RANGE.0,
                max: ST_DEPRESSION_RANGE.1,
                default: d.st_depression,
                step: ST_DEPRESSION_STEP,
            },
        },
        FieldSpec {
            key: "st_slope",
            label: "ST Slope (0-2)",
            help: "The heart's post-exercise recovery curve.",
            widget: select::<StSlope>(d.st_slope),
        },
        FieldSpec {
            key: "major_vessels",
            label: "Number of Major Vessels",
            help: "Number of large, unblocked vessels visualized by fluoroscopy.",
            widget: select::<MajorVessels>(d.major_vessels),
        },
        FieldSpec {
            key: "thalassemia",
            label: "Thalassemia (1-3)",
            help: "1: Permanent Defect\n2: Normal\n3: Recoverable Defect",
            widget: select::<Thalassemia>(d.thalassemia),
        },
    ]
}
