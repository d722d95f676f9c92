//! Domain models for a single form submission

pub mod observation;
pub mod types;

pub use observation::{ClinicalObservation, ObservationOverrides};
pub use types::{
    Categorical, ChestPainType, ExerciseAngina, FastingBloodSugar, MajorVessels, RestingEcg, Sex,
    StSlope, Thalassemia,
};
