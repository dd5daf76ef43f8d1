#![forbid(unsafe_code)]
//! Health Risk Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use healthrisk::assess::{HEIGHT_RANGE, WEIGHT_RANGE};
use healthrisk::commands::{
    execute_assess, execute_init, execute_interactive, AssessOptions, InitOptions,
    InteractiveOptions,
};
use healthrisk::config::DEFAULT_CONFIG_FILE;
use healthrisk::{
    ActivityLevel, BloodPressure, Cholesterol, Config, Gender, OutputFormat, PatientInput,
};

#[derive(Parser)]
#[command(name = "health-risk")]
#[command(about = "Heuristic health risk assessment from biometric and lifestyle data")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess from command-line fields and show the dashboard report
    Assess {
        /// Age in years
        #[arg(long, default_value = "30", value_parser = clap::value_parser!(u32).range(1..=120))]
        age: u32,

        /// Gender (not scored)
        #[arg(long, value_enum, default_value = "male")]
        gender: GenderArg,

        /// Weight in kilograms (20-200)
        #[arg(long, default_value = "70.0", value_parser = parse_weight_arg)]
        weight: f64,

        /// Height in meters (1.0-2.5)
        #[arg(long, default_value = "1.75", value_parser = parse_height_arg)]
        height: f64,

        /// Cholesterol level
        #[arg(long, value_enum, default_value = "normal")]
        cholesterol: LevelArg,

        /// Blood pressure level
        #[arg(long, value_enum, default_value = "normal")]
        bp: LevelArg,

        /// Smokes regularly
        #[arg(long)]
        smoker: bool,

        /// Physical activity level
        #[arg(long, value_enum, default_value = "low")]
        activity: ActivityArg,

        /// Output format (overrides config)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Show points per risk factor
        #[arg(long)]
        explain: bool,
    },

    /// Answer the questions one by one and get a text report
    Interactive {
        /// Read answers as plain lines from stdin (for piping)
        #[arg(long)]
        plain: bool,

        /// Output format (default: text)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Show points per risk factor
        #[arg(long)]
        explain: bool,
    },

    /// Write a configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,

        /// Skip interactive prompts (use defaults)
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum GenderArg {
    Male,
    Female,
    Other,
}

/// Three-step reading shared by cholesterol and blood pressure flags
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum LevelArg {
    Normal,
    Borderline,
    High,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum ActivityArg {
    Low,
    Moderate,
    High,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Text,
    Dashboard,
    Json,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
            GenderArg::Other => Gender::Other,
        }
    }
}

impl From<LevelArg> for Cholesterol {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Normal => Cholesterol::Normal,
            LevelArg::Borderline => Cholesterol::Borderline,
            LevelArg::High => Cholesterol::High,
        }
    }
}

impl From<LevelArg> for BloodPressure {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Normal => BloodPressure::Normal,
            LevelArg::Borderline => BloodPressure::Borderline,
            LevelArg::High => BloodPressure::High,
        }
    }
}

impl From<ActivityArg> for ActivityLevel {
    fn from(arg: ActivityArg) -> Self {
        match arg {
            ActivityArg::Low => ActivityLevel::Low,
            ActivityArg::Moderate => ActivityLevel::Moderate,
            ActivityArg::High => ActivityLevel::High,
        }
    }
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Dashboard => OutputFormat::Dashboard,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn parse_ranged(text: &str, (min, max): (f64, f64)) -> Result<f64, String> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| format!("{:?} is not a number", text))?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(format!("must be between {} and {}", min, max))
    }
}

fn parse_weight_arg(text: &str) -> Result<f64, String> {
    parse_ranged(text, WEIGHT_RANGE)
}

fn parse_height_arg(text: &str) -> Result<f64, String> {
    parse_ranged(text, HEIGHT_RANGE)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load config
    let mut config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        Config::default()
    };
    if cli.no_color {
        config.color = false;
    }
    tracing::debug!(?config, path = %cli.config.display(), "config loaded");

    match cli.command {
        Commands::Assess {
            age,
            gender,
            weight,
            height,
            cholesterol,
            bp,
            smoker,
            activity,
            format,
            explain,
        } => {
            let options = AssessOptions {
                input: PatientInput {
                    age,
                    gender: gender.into(),
                    weight,
                    height,
                    cholesterol: cholesterol.into(),
                    bp: bp.into(),
                    smoker,
                    activity: activity.into(),
                },
                format: format.map(Into::into),
                explain,
            };
            execute_assess(options, &config)?;
        }

        Commands::Interactive { plain, format, explain } => {
            let options = InteractiveOptions {
                plain,
                format: format.map(Into::into),
                explain,
            };
            execute_interactive(options, &config)?;
        }

        Commands::Init { force, yes } => {
            let options = InitOptions {
                path: cli.config,
                force,
                yes,
            };
            execute_init(options)?;
        }
    }

    Ok(())
}
