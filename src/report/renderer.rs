//! @acp:module "Report Renderer"
//! @acp:summary "Format an assessment for the terminal or as JSON"
//! @acp:domain cli
//! @acp:layer output

use anyhow::Result;
use console::{Color, Style};

use super::gauge::{band_color, render_gauge};
use super::{OutputFormat, Report};
use crate::assess::{BmiBand, RiskTier};
use crate::config::Config;

const RULE_WIDTH: usize = 49;

/// Rendering options, usually derived from [`Config`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub gauge_width: usize,
    pub color: bool,
    /// Include the per-factor point breakdown
    pub explain: bool,
}

impl RenderOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            format: config.format,
            gauge_width: config.gauge_width,
            color: config.color,
            explain: false,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Terminal styling that can be switched off per report
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    color: bool,
}

impl Palette {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    fn style(&self) -> Style {
        Style::new().force_styling(self.color)
    }

    pub fn fg(&self, text: &str, color: Color) -> String {
        self.style().fg(color).apply_to(text).to_string()
    }

    pub fn bold(&self, text: &str) -> String {
        self.style().bold().apply_to(text).to_string()
    }

    pub fn dim(&self, text: &str) -> String {
        self.style().dim().apply_to(text).to_string()
    }

    /// Teal, amber, and red for the three tiers
    pub fn tier(&self, tier: RiskTier) -> Style {
        let color = match tier {
            RiskTier::Low => Color::Cyan,
            RiskTier::Moderate => Color::Yellow,
            RiskTier::High => Color::Red,
        };
        self.style().fg(color)
    }
}

/// @acp:summary "Render a report in the requested format"
pub fn render_report(report: &Report<'_>, options: &RenderOptions) -> Result<String> {
    let palette = Palette::new(options.color);
    match options.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => Ok(render_text(report, options, &palette)),
        OutputFormat::Dashboard => Ok(render_dashboard(report, options, &palette)),
    }
}

fn render_text(report: &Report<'_>, options: &RenderOptions, palette: &Palette) -> String {
    let input = report.input;
    let result = report.result;
    let mut out = String::new();

    out.push_str(&format!("{:=^width$}\n", " RESULTS ", width = RULE_WIDTH));
    out.push_str(&format!("Age: {} | Gender: {:?}\n", input.age, input.gender));
    out.push_str(&format!("BMI: {:.1}\n", result.bmi));
    out.push_str(&format!(
        "Health Risk Level: {}\n",
        palette.tier(result.risk_tier).apply_to(result.risk_tier)
    ));
    out.push_str(&format!("Advice: {}\n", result.advice));
    if options.explain {
        out.push_str(&render_factors(report, palette));
    }
    out.push_str(&"=".repeat(RULE_WIDTH));

    out
}

fn render_dashboard(report: &Report<'_>, options: &RenderOptions, palette: &Palette) -> String {
    let result = report.result;
    let band = BmiBand::classify(result.bmi);
    let tier_style = palette.tier(result.risk_tier);
    let mut out = String::new();

    out.push_str(&format!("{}\n\n", palette.bold("Patient Health Report")));
    out.push_str(&format!(
        "  {:<24}{:.1} ({})\n",
        "Body Mass Index (BMI)",
        result.bmi,
        palette.fg(band.label(), band_color(band))
    ));
    out.push_str(&format!(
        "  {:<24}{} {}\n\n",
        "Overall Risk Level",
        tier_style.apply_to(result.risk_tier),
        palette.dim(&format!("(score {}/11)", result.risk_score))
    ));

    out.push_str(&format!("{}\n", palette.bold("BMI Gauge")));
    for line in render_gauge(result.bmi, options.gauge_width, palette).lines() {
        out.push_str(&format!("  {}\n", line));
    }
    out.push('\n');

    if options.explain {
        out.push_str(&render_factors(report, palette));
        out.push('\n');
    }

    out.push_str(&format!("{}\n", palette.bold("Doctor's Recommendation")));
    out.push_str(&format!(
        "  {} {}",
        tier_style.apply_to("|"),
        tier_style.apply_to(&result.advice)
    ));

    out
}

fn render_factors(report: &Report<'_>, palette: &Palette) -> String {
    let mut out = format!("{}\n", palette.bold("Score breakdown"));
    for factor in &report.result.factors {
        out.push_str(&format!(
            "  {:<16}+{} {}\n",
            factor.factor.label(),
            factor.points,
            palette.dim(&format!("(max {})", factor.factor.max_points()))
        ));
    }
    out
}
