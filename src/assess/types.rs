//! @acp:module "Assessment Types"
//! @acp:summary "Patient input, risk factors, tiers, and assessment results"
//! @acp:domain cli
//! @acp:layer model

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{HealthError, Result};

/// Accepted age range in years
pub const AGE_RANGE: (u32, u32) = (1, 120);
/// Accepted weight range in kilograms
pub const WEIGHT_RANGE: (f64, f64) = (20.0, 200.0);
/// Accepted height range in meters
pub const HEIGHT_RANGE: (f64, f64) = (1.0, 2.5);

/// Self-reported gender. Carried into reports, never scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

/// Cholesterol reading category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cholesterol {
    #[default]
    Normal,
    Borderline,
    High,
}

/// Blood pressure reading category
///
/// Tiered the same way as [`Cholesterol`] but kept as its own type so the two
/// readings cannot be swapped by accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BloodPressure {
    #[default]
    Normal,
    Borderline,
    High,
}

/// Physical activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActivityLevel {
    Low,
    Moderate,
    #[default]
    High,
}

/// @acp:summary "Health attributes for a single assessment"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientInput {
    /// Age in whole years
    pub age: u32,
    pub gender: Gender,
    /// Weight in kilograms
    pub weight: f64,
    /// Height in meters
    pub height: f64,
    pub cholesterol: Cholesterol,
    #[serde(rename = "blood_pressure")]
    pub bp: BloodPressure,
    pub smoker: bool,
    pub activity: ActivityLevel,
}

impl Default for PatientInput {
    fn default() -> Self {
        Self {
            age: 30,
            gender: Gender::default(),
            weight: 70.0,
            height: 1.75,
            cholesterol: Cholesterol::default(),
            bp: BloodPressure::default(),
            smoker: false,
            activity: ActivityLevel::default(),
        }
    }
}

impl PatientInput {
    /// Check numeric fields against their accepted domains
    ///
    /// The scorer itself never fails, so callers taking free-form input
    /// should run this first. NaN never passes.
    pub fn validate(&self) -> Result<()> {
        check_range("age", self.age as f64, AGE_RANGE.0 as f64, AGE_RANGE.1 as f64)?;
        check_range("weight", self.weight, WEIGHT_RANGE.0, WEIGHT_RANGE.1)?;
        check_range("height", self.height, HEIGHT_RANGE.0, HEIGHT_RANGE.1)?;
        Ok(())
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(HealthError::OutOfRange {
            field,
            min,
            max,
            value,
        })
    }
}

/// Overall risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    /// Classify an additive risk score
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => RiskTier::Low,
            3..=5 => RiskTier::Moderate,
            _ => RiskTier::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Moderate => "Moderate",
            RiskTier::High => "High",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scored risk factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Bmi,
    Cholesterol,
    BloodPressure,
    Smoking,
    Activity,
    Age,
}

impl Factor {
    /// Scoring order
    pub fn all() -> &'static [Factor] {
        &[
            Factor::Bmi,
            Factor::Cholesterol,
            Factor::BloodPressure,
            Factor::Smoking,
            Factor::Activity,
            Factor::Age,
        ]
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Factor::Bmi => "BMI",
            Factor::Cholesterol => "Cholesterol",
            Factor::BloodPressure => "Blood pressure",
            Factor::Smoking => "Smoking",
            Factor::Activity => "Activity level",
            Factor::Age => "Age",
        }
    }

    /// Most points this factor can contribute
    pub fn max_points(&self) -> u8 {
        match self {
            Factor::Age => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Points contributed by one factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorScore {
    pub factor: Factor,
    pub points: u8,
}

/// @acp:summary "Outcome of a single assessment"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// Body mass index, rounded to one decimal
    pub bmi: f64,
    pub risk_score: u8,
    pub risk_tier: RiskTier,
    pub advice: String,
    /// Per-factor breakdown; points sum to `risk_score`
    pub factors: Vec<FactorScore>,
}
