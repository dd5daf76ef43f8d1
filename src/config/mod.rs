//! @acp:module "Configuration"
//! @acp:summary "Report configuration loading and defaults"
//! @acp:domain cli
//! @acp:layer config

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::assess::AdviceWording;
use crate::report::OutputFormat;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = ".health-risk.json";

/// Gauge width limits in characters
pub const GAUGE_WIDTH_RANGE: (usize, usize) = (10, 80);

fn default_gauge_width() -> usize {
    40
}

fn default_color() -> bool {
    true
}

/// @acp:summary "Main configuration structure"
/// @acp:lock normal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Advice wording set
    #[serde(default)]
    pub advice: AdviceWording,

    /// Report format used when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,

    /// Width of the BMI gauge bar in characters
    #[serde(default = "default_gauge_width")]
    pub gauge_width: usize,

    /// Colorize terminal output
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            advice: AdviceWording::default(),
            format: OutputFormat::default(),
            gauge_width: default_gauge_width(),
            color: default_color(),
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a JSON file"
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config.clamped())
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn clamped(mut self) -> Self {
        let (min, max) = GAUGE_WIDTH_RANGE;
        if !(min..=max).contains(&self.gauge_width) {
            tracing::warn!(
                "gauge_width {} outside {}..={}, clamping",
                self.gauge_width,
                min,
                max
            );
            self.gauge_width = self.gauge_width.clamp(min, max);
        }
        self
    }
}
