//! @acp:module "Init Command"
//! @acp:summary "Write a configuration file"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `health-risk init`.

use std::path::PathBuf;

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::assess::AdviceWording;
use crate::config::{Config, DEFAULT_CONFIG_FILE, GAUGE_WIDTH_RANGE};
use crate::report::OutputFormat;

/// Options for the init command
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Config file to write
    pub path: PathBuf,
    /// Force overwrite existing config
    pub force: bool,
    /// Skip interactive prompts (use defaults)
    pub yes: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_FILE),
            force: false,
            yes: false,
        }
    }
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    if options.path.exists() && !options.force {
        eprintln!(
            "{} Config file already exists. Use --force to overwrite.",
            style("✗").red()
        );
        std::process::exit(1);
    }

    let mut config = Config::default();
    if !options.yes {
        run_interactive_init(&mut config)?;
    }

    config.save(&options.path)?;
    println!(
        "{} Created {}",
        style("✓").green(),
        options.path.display()
    );

    println!("\n{}", style("Next steps:").bold());
    println!(
        "  1. Run {} to answer the questions one by one",
        style("health-risk interactive").cyan()
    );
    println!(
        "  2. Or pass every field to {}",
        style("health-risk assess").cyan()
    );

    Ok(())
}

fn run_interactive_init(config: &mut Config) -> Result<()> {
    let theme = ColorfulTheme::default();
    println!("{} Health Risk Setup\n", style("→").cyan());

    let wordings = ["Dashboard (detailed)", "Console (short)"];
    let wording = Select::with_theme(&theme)
        .with_prompt("Advice wording")
        .items(&wordings)
        .default(0)
        .interact()?;
    config.advice = if wording == 0 {
        AdviceWording::Dashboard
    } else {
        AdviceWording::Console
    };

    let formats = ["dashboard", "text", "json"];
    let format = Select::with_theme(&theme)
        .with_prompt("Default report format")
        .items(&formats)
        .default(0)
        .interact()?;
    config.format = formats[format].parse().unwrap_or_default();

    let (min, max) = GAUGE_WIDTH_RANGE;
    config.gauge_width = Input::with_theme(&theme)
        .with_prompt(format!("BMI gauge width ({}-{})", min, max))
        .default(config.gauge_width)
        .validate_with(move |width: &usize| -> std::result::Result<(), String> {
            if (min..=max).contains(width) {
                Ok(())
            } else {
                Err(format!("Width must be between {} and {}", min, max))
            }
        })
        .interact_text()?;

    config.color = Confirm::with_theme(&theme)
        .with_prompt("Use colors?")
        .default(true)
        .interact()?;

    Ok(())
}
