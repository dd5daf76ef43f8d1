#![forbid(unsafe_code)]

//! @acp:module "Health Risk Library"
//! @acp:summary "Rule-based health risk scoring from biometric and lifestyle data"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # Health Risk
//!
//! Heuristic risk scoring: BMI plus a handful of lifestyle factors summed
//! into a 0–11 score, classified as Low, Moderate, or High, with advice.
//! Not a medical model.
//!
//! ## Example
//!
//! ```rust
//! use healthrisk::{assess, Cholesterol, PatientInput, RiskTier};
//!
//! let input = PatientInput {
//!     cholesterol: Cholesterol::Borderline,
//!     ..PatientInput::default()
//! };
//!
//! let result = assess(&input);
//! assert_eq!(result.bmi, 22.9);
//! assert_eq!(result.risk_score, 1);
//! assert_eq!(result.risk_tier, RiskTier::Low);
//! ```

pub mod assess;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod report;
pub mod session;

// Re-exports
pub use assess::{
    assess, assess_with, calculate_bmi, ActivityLevel, AdviceWording, AssessmentResult,
    BloodPressure, BmiBand, Cholesterol, Factor, FactorScore, Gender, PatientInput, RiskTier,
};
pub use config::Config;
pub use error::{HealthError, Result};
pub use input::{Lenient, LenientParse};
pub use report::{render_report, OutputFormat, RenderOptions, Report};
pub use session::{collect_input, LinePrompter, Prompter, SessionOutcome, TerminalPrompter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
