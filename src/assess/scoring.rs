//! @acp:module "Risk Scoring"
//! @acp:summary "Additive point scoring and tier classification"
//! @acp:domain cli
//! @acp:layer logic

use super::advice::AdviceWording;
use super::types::*;

/// Calculate BMI rounded to one decimal place
///
/// Returns a non-finite value for a zero height; run
/// [`PatientInput::validate`] first when the input is untrusted.
pub fn calculate_bmi(weight: f64, height: f64) -> f64 {
    round_one_decimal(weight / (height * height))
}

/// Round the exact binary value, ties to even
///
/// Scaling by 10 first is not equivalent: 73.8 / 4.0 is 18.4499..., and the
/// multiply alone lands on 184.5.
fn round_one_decimal(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// Points for a (rounded) BMI
///
/// Both limits are strict: 18.5 and 25.0 score 0, and 30.0 is not above 30
/// so it takes the overweight branch for +1.
pub fn bmi_points(bmi: f64) -> u8 {
    if bmi < 18.5 || bmi > 30.0 {
        2
    } else if bmi > 25.0 {
        1
    } else {
        0
    }
}

pub fn cholesterol_points(level: Cholesterol) -> u8 {
    match level {
        Cholesterol::High => 2,
        Cholesterol::Borderline => 1,
        Cholesterol::Normal => 0,
    }
}

pub fn blood_pressure_points(level: BloodPressure) -> u8 {
    match level {
        BloodPressure::High => 2,
        BloodPressure::Borderline => 1,
        BloodPressure::Normal => 0,
    }
}

pub fn activity_points(level: ActivityLevel) -> u8 {
    match level {
        ActivityLevel::Low => 2,
        ActivityLevel::Moderate => 1,
        ActivityLevel::High => 0,
    }
}

/// Score every factor, in [`Factor::all`] order
pub fn score_factors(input: &PatientInput, bmi: f64) -> Vec<FactorScore> {
    Factor::all()
        .iter()
        .map(|&factor| {
            let points = match factor {
                Factor::Bmi => bmi_points(bmi),
                Factor::Cholesterol => cholesterol_points(input.cholesterol),
                Factor::BloodPressure => blood_pressure_points(input.bp),
                Factor::Smoking => {
                    if input.smoker {
                        2
                    } else {
                        0
                    }
                }
                Factor::Activity => activity_points(input.activity),
                Factor::Age => u8::from(input.age > 50),
            };
            FactorScore { factor, points }
        })
        .collect()
}

/// @acp:summary "Assess an input with the default advice wording"
pub fn assess(input: &PatientInput) -> AssessmentResult {
    assess_with(input, AdviceWording::default())
}

/// Assess an input, picking advice from the given wording set
pub fn assess_with(input: &PatientInput, wording: AdviceWording) -> AssessmentResult {
    let bmi = calculate_bmi(input.weight, input.height);
    let factors = score_factors(input, bmi);
    let risk_score: u8 = factors.iter().map(|f| f.points).sum();
    let risk_tier = RiskTier::from_score(risk_score);

    tracing::debug!(bmi, risk_score, tier = %risk_tier, "assessment scored");

    AssessmentResult {
        bmi,
        risk_score,
        risk_tier,
        advice: wording.advice(risk_tier).to_string(),
        factors,
    }
}

/// BMI category, matching the dashboard gauge bands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiBand {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiBand {
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiBand::Underweight
        } else if bmi < 25.0 {
            BmiBand::Normal
        } else if bmi < 30.0 {
            BmiBand::Overweight
        } else {
            BmiBand::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiBand::Underweight => "Underweight",
            BmiBand::Normal => "Normal",
            BmiBand::Overweight => "Overweight",
            BmiBand::Obese => "Obese",
        }
    }
}

/// Visual range of the BMI gauge
pub const GAUGE_MIN: f64 = 10.0;
pub const GAUGE_MAX: f64 = 40.0;
