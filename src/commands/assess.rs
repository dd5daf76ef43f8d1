//! @acp:module "Assess Command"
//! @acp:summary "Score a fully specified input and print the dashboard"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `health-risk assess`. Flag ranges are enforced by the CLI
//! parser, so the input here is already in domain.

use anyhow::Result;

use crate::assess::{assess_with, PatientInput};
use crate::config::Config;
use crate::report::{render_report, OutputFormat, RenderOptions, Report};

/// Options for the assess command
#[derive(Debug, Clone, Default)]
pub struct AssessOptions {
    pub input: PatientInput,
    /// Overrides the configured format
    pub format: Option<OutputFormat>,
    /// Show the per-factor breakdown
    pub explain: bool,
}

/// Build the report text without printing it
pub fn assess_report(options: &AssessOptions, config: &Config) -> Result<String> {
    options.input.validate()?;

    let result = assess_with(&options.input, config.advice);
    let render = RenderOptions {
        format: options.format.unwrap_or(config.format),
        explain: options.explain,
        ..RenderOptions::from_config(config)
    };

    render_report(&Report::new(&options.input, &result), &render)
}

/// Execute the assess command
pub fn execute_assess(options: AssessOptions, config: &Config) -> Result<()> {
    println!("{}", assess_report(&options, config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assess::{ActivityLevel, BloodPressure, Cholesterol};

    fn plain_config() -> Config {
        Config {
            color: false,
            ..Config::default()
        }
    }

    #[test]
    fn test_assess_report_uses_configured_format() {
        let config = Config {
            format: OutputFormat::Json,
            ..plain_config()
        };
        let output = assess_report(&AssessOptions::default(), &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["result"]["risk_score"], 0);
    }

    #[test]
    fn test_assess_report_format_override() {
        let options = AssessOptions {
            input: PatientInput {
                age: 60,
                weight: 90.0,
                height: 1.70,
                cholesterol: Cholesterol::High,
                bp: BloodPressure::High,
                smoker: true,
                activity: ActivityLevel::Low,
                ..PatientInput::default()
            },
            format: Some(OutputFormat::Text),
            explain: false,
        };
        let output = assess_report(&options, &plain_config()).unwrap();
        assert!(output.contains("BMI: 31.1"));
        assert!(output.contains("Health Risk Level: High"));
    }

    #[test]
    fn test_assess_report_rejects_out_of_domain() {
        let options = AssessOptions {
            input: PatientInput {
                weight: 250.0,
                ..PatientInput::default()
            },
            ..AssessOptions::default()
        };
        assert!(assess_report(&options, &plain_config()).is_err());
    }
}
