//! @acp:module "Reports"
//! @acp:summary "Text, dashboard, and JSON rendering of assessments"
//! @acp:domain cli
//! @acp:layer output

mod gauge;
mod renderer;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use crate::assess::{AssessmentResult, PatientInput};

pub use gauge::render_gauge;
pub use renderer::{render_report, Palette, RenderOptions};

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain results block
    Text,
    /// Metrics, BMI gauge, and advice panel
    #[default]
    Dashboard,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "dashboard" | "form" => Ok(OutputFormat::Dashboard),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown output format: {}", s)),
        }
    }
}

/// An assessment together with the input that produced it
#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    pub input: &'a PatientInput,
    pub result: &'a AssessmentResult,
}

impl<'a> Report<'a> {
    pub fn new(input: &'a PatientInput, result: &'a AssessmentResult) -> Self {
        Self { input, result }
    }
}
