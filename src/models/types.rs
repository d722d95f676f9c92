//! Categorical clinical value types
//!
//! Every categorical form field is an explicit enum carrying both the numeric
//! code the classifier expects and the label shown to the user. Mapping a
//! variant to its code is total, so encoding can never fail; only parsing
//! user input (by code, label or alias) is fallible.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{HeartRiskError, Result};

/// Common behaviour of the categorical form fields
pub trait Categorical: Copy + Sized + 'static {
    /// Form field key, used in error messages
    const FIELD: &'static str;
    /// All variants in form option order
    const ALL: &'static [Self];

    /// Numeric code fed to the classifier
    fn code(self) -> u8;

    /// Display label shown in the form
    fn label(self) -> &'static str;

    /// Whether `input` is an accepted alternative spelling of this variant
    fn matches_alias(self, input: &str) -> bool;

    /// Feature value of this variant
    fn encode(self) -> f64 {
        f64::from(self.code())
    }

    /// Look up a variant by its numeric code
    fn from_code(code: i64) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| i64::from(v.code()) == code)
            .ok_or_else(|| {
                HeartRiskError::invalid_input(
                    Self::FIELD,
                    format!("unknown code {code}, expected one of {}", options_hint::<Self>()),
                )
            })
    }

    /// Parse a code, label or alias (case-insensitive)
    fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if let Ok(code) = trimmed.parse::<i64>() {
            return Self::from_code(code);
        }

        Self::ALL
            .iter()
            .copied()
            .find(|v| v.label().eq_ignore_ascii_case(trimmed) || v.matches_alias(trimmed))
            .ok_or_else(|| {
                HeartRiskError::invalid_input(
                    Self::FIELD,
                    format!(
                        "unknown value '{trimmed}', expected one of {}",
                        options_hint::<Self>()
                    ),
                )
            })
    }
}

fn options_hint<T: Categorical>() -> String {
    T::ALL
        .iter()
        .map(|v| format!("{} ({})", v.code(), v.label()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Wire form accepted for categorical values in JSON input
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCategorical {
    Code(i64),
    Label(String),
}

fn deserialize_categorical<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Categorical,
{
    let parsed = match RawCategorical::deserialize(deserializer)? {
        RawCategorical::Code(code) => T::from_code(code),
        RawCategorical::Label(label) => T::parse(&label),
    };
    parsed.map_err(serde::de::Error::custom)
}

macro_rules! categorical {
    (
        $(#[$meta:meta])*
        $name:ident, field: $field:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:literal => $label:literal $(| $alias:literal)*
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl Categorical for $name {
            const FIELD: &'static str = $field;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn code(self) -> u8 {
                match self {
                    $(Self::$variant => $code),+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            fn matches_alias(self, _input: &str) -> bool {
                match self {
                    $(Self::$variant => false $(|| _input.eq_ignore_ascii_case($alias))*),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = HeartRiskError;

            fn from_str(s: &str) -> Result<Self> {
                <Self as Categorical>::parse(s)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = HeartRiskError;

            fn try_from(code: i64) -> Result<Self> {
                Self::from_code(code)
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_u8(self.code())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserialize_categorical(deserializer)
            }
        }
    };
}

categorical! {
    /// Biological sex
    Sex, field: "sex" {
        /// Female (code 0)
        Female = 0 => "Female" | "f",
        /// Male (code 1)
        Male = 1 => "Male" | "m",
    }
}

categorical! {
    /// Type of chest pain the patient reports
    ChestPainType, field: "chest_pain_type" {
        /// Type 0: no symptoms
        NoSymptoms = 0 => "Type 0: No Symptoms" | "no symptoms" | "type 0",
        /// Type 1: atypical angina
        AtypicalAngina = 1 => "Type 1: Atypical Angina" | "atypical angina" | "type 1",
        /// Type 2: angina
        Angina = 2 => "Type 2: Angina" | "angina" | "type 2",
        /// Type 3: pain that is not angina
        NotAngina = 3 => "Type 3: Not Angina" | "not angina" | "type 3",
    }
}

categorical! {
    /// Fasting blood sugar above 120 mg/dl
    FastingBloodSugar, field: "fasting_blood_sugar_high" {
        /// At or below 120 mg/dl
        Normal = 0 => "False" | "no" | "normal",
        /// Above 120 mg/dl
        High = 1 => "True" | "yes" | "high",
    }
}

categorical! {
    /// Resting electrocardiogram result
    RestingEcg, field: "resting_ecg" {
        /// Normal
        Normal = 0 => "Normal",
        /// ST-T wave abnormality
        StTAbnormality = 1 => "ST-T wave abnormality" | "st-t",
        /// Left ventricular hypertrophy (thickening of the heart muscle)
        Hypertrophy = 2 => "Hypertrophy",
    }
}

categorical! {
    /// Exercise induced angina
    ExerciseAngina, field: "exercise_angina" {
        /// No chest pain on exertion
        No = 0 => "No" | "n" | "false",
        /// Chest pain on exertion
        Yes = 1 => "Yes" | "y" | "true",
    }
}

categorical! {
    /// Slope of the peak exercise ST segment
    StSlope, field: "st_slope" {
        /// Slope 0
        Slope0 = 0 => "Slope 0",
        /// Slope 1
        Slope1 = 1 => "Slope 1",
        /// Slope 2
        Slope2 = 2 => "Slope 2",
    }
}

categorical! {
    /// Number of major vessels visualized by fluoroscopy
    MajorVessels, field: "major_vessels" {
        /// No vessels
        Zero = 0 => "0 vessels",
        /// One vessel
        One = 1 => "1 vessel",
        /// Two vessels
        Two = 2 => "2 vessels",
        /// Three vessels
        Three = 3 => "3 vessels",
    }
}

categorical! {
    /// Thalassemia test result
    Thalassemia, field: "thalassemia" {
        /// Permanent defect
        PermanentDefect = 1 => "Permanent Defect" | "fixed defect",
        /// Normal
        Normal = 2 => "Normal",
        /// Recoverable (reversible) defect
        RecoverableDefect = 3 => "Recoverable Defect" | "reversible defect",
    }
}
