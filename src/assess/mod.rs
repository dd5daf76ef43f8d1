//! @acp:module "Assessment"
//! @acp:summary "Pure health risk scorer"
//! @acp:domain cli
//! @acp:layer logic
//!
//! Maps a [`PatientInput`] to an [`AssessmentResult`] holding BMI, the
//! additive risk score, its tier, and advice text. No I/O, no shared state.

pub mod advice;
pub mod scoring;
pub mod types;

pub use advice::AdviceWording;
pub use scoring::{
    activity_points, assess, assess_with, blood_pressure_points, bmi_points, calculate_bmi,
    cholesterol_points, score_factors, BmiBand, GAUGE_MAX, GAUGE_MIN,
};
pub use types::*;
