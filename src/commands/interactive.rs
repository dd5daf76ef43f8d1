//! @acp:module "Interactive Command"
//! @acp:summary "Prompt for each field, then print a text report"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `health-risk interactive`.

use std::io::{self, Write};

use anyhow::Result;
use console::style;

use crate::assess::assess_with;
use crate::config::Config;
use crate::report::{render_report, OutputFormat, RenderOptions, Report};
use crate::session::{collect_input, LinePrompter, Prompter, SessionOutcome, TerminalPrompter};

/// Options for the interactive command
#[derive(Debug, Clone, Default)]
pub struct InteractiveOptions {
    /// Read answers as plain lines from stdin instead of terminal prompts
    pub plain: bool,
    /// Report format; text when unset
    pub format: Option<OutputFormat>,
    /// Show the per-factor breakdown
    pub explain: bool,
}

/// Run one session against any prompter, writing the report to `out`
///
/// Returns `Ok(false)` when the session was rejected; the warning has
/// already been written to `err` and no report is produced.
pub fn run_session<P, O, E>(
    prompter: &mut P,
    options: &InteractiveOptions,
    config: &Config,
    out: &mut O,
    err: &mut E,
) -> Result<bool>
where
    P: Prompter + ?Sized,
    O: Write,
    E: Write,
{
    let outcome = collect_input(prompter)?;
    for notice in outcome.notices() {
        writeln!(err, "{} {}", style("⚠").yellow(), notice)?;
    }

    let input = match outcome {
        SessionOutcome::Completed { input, .. } => input,
        rejected => {
            let warning = rejected.warning().unwrap_or_default();
            tracing::debug!(?rejected, "session rejected");
            writeln!(err, "{} {}", style("⚠").yellow(), warning)?;
            return Ok(false);
        }
    };

    let result = assess_with(&input, config.advice);
    let render = RenderOptions {
        format: options.format.unwrap_or(OutputFormat::Text),
        explain: options.explain,
        ..RenderOptions::from_config(config)
    };

    writeln!(out)?;
    writeln!(out, "{}", render_report(&Report::new(&input, &result), &render)?)?;
    Ok(true)
}

/// Execute the interactive command
pub fn execute_interactive(options: InteractiveOptions, config: &Config) -> Result<()> {
    println!("{} Health Risk Assessment", style("→").cyan());
    println!("{}", "=".repeat(24));

    let completed = if options.plain {
        let stdin = io::stdin();
        let mut prompter = LinePrompter::new(stdin.lock(), io::stdout());
        run_session(&mut prompter, &options, config, &mut io::stdout(), &mut io::stderr())?
    } else {
        let mut prompter = TerminalPrompter::new();
        run_session(&mut prompter, &options, config, &mut io::stdout(), &mut io::stderr())?
    };

    if !completed {
        std::process::exit(1);
    }

    Ok(())
}
