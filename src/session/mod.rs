//! @acp:module "Console Session"
//! @acp:summary "Sequential prompting for the eight assessment fields"
//! @acp:domain cli
//! @acp:layer handler
//!
//! A session asks for each field in turn and parses the answer straight
//! away, so a bad number stops the run before the next prompt.

use std::io::{BufRead, Write};

use dialoguer::{theme::ColorfulTheme, Input};

use crate::assess::{ActivityLevel, BloodPressure, Cholesterol, Gender, PatientInput};
use crate::error::{HealthError, Result};
use crate::input::{parse_age, parse_height, parse_weight, parse_yes_no, LenientParse};

/// Warning shown when a numeric field does not parse
pub const INVALID_NUMBER_WARNING: &str =
    "Invalid input. Please enter numeric values for age, weight, and height.";

/// Source of free-text answers
pub trait Prompter {
    /// Show `prompt` and return the raw answer
    fn ask(&mut self, prompt: &str) -> Result<String>;
}

/// Prompts on the terminal through dialoguer
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }
}

/// Prompts on any writer and reads one line per answer
///
/// End of input reads as an empty answer.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{}: ", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// How a session ended
#[derive(Debug)]
pub enum SessionOutcome {
    Completed {
        input: PatientInput,
        /// Fields whose answer was not recognized and fell back to a default
        defaulted: Vec<&'static str>,
    },
    /// An answer was unusable; nothing should be reported
    Rejected(HealthError),
}

impl SessionOutcome {
    /// One-line warning for a rejected session
    pub fn warning(&self) -> Option<String> {
        match self {
            SessionOutcome::Completed { .. } => None,
            SessionOutcome::Rejected(HealthError::InvalidNumber { .. }) => {
                Some(INVALID_NUMBER_WARNING.to_string())
            }
            SessionOutcome::Rejected(e) => {
                Some(format!("Invalid input. {}.", capitalize(&e.to_string())))
            }
        }
    }

    /// One notice per answer that fell back to its default
    pub fn notices(&self) -> Vec<String> {
        match self {
            SessionOutcome::Completed { defaulted, .. } => defaulted
                .iter()
                .map(|field| format!("Unrecognized {}, using the lowest-risk option.", field))
                .collect(),
            SessionOutcome::Rejected(_) => vec![],
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// @acp:summary "Ask for every field and build a validated input"
///
/// Input mistakes end the session as [`SessionOutcome::Rejected`]; prompt
/// and I/O failures are returned as errors.
pub fn collect_input<P: Prompter + ?Sized>(prompter: &mut P) -> Result<SessionOutcome> {
    match read_fields(prompter) {
        Ok((input, defaulted)) => match input.validate() {
            Ok(()) => Ok(SessionOutcome::Completed { input, defaulted }),
            Err(e) => Ok(SessionOutcome::Rejected(e)),
        },
        Err(e) if e.is_input_error() => Ok(SessionOutcome::Rejected(e)),
        Err(e) => Err(e),
    }
}

fn ask_lenient<T, P>(
    prompter: &mut P,
    prompt: &str,
    defaulted: &mut Vec<&'static str>,
) -> Result<T>
where
    T: LenientParse,
    P: Prompter + ?Sized,
{
    let parsed = T::parse_lenient(&prompter.ask(prompt)?);
    if !parsed.recognized {
        defaulted.push(T::FIELD);
    }
    Ok(parsed.value)
}

fn read_fields<P: Prompter + ?Sized>(
    prompter: &mut P,
) -> Result<(PatientInput, Vec<&'static str>)> {
    let mut defaulted = vec![];

    let age = parse_age(&prompter.ask("Enter your age (years)")?)?;
    let gender: Gender = ask_lenient(prompter, "Gender (Male/Female/Other)", &mut defaulted)?;
    let weight = parse_weight(&prompter.ask("Enter your weight (kg)")?)?;
    let height = parse_height(&prompter.ask("Enter your height (m)")?)?;

    let cholesterol: Cholesterol = ask_lenient(
        prompter,
        "Cholesterol level (Normal/Borderline/High)",
        &mut defaulted,
    )?;
    let bp: BloodPressure = ask_lenient(
        prompter,
        "Blood pressure level (Normal/Borderline/High)",
        &mut defaulted,
    )?;
    let smoker = parse_yes_no(&prompter.ask("Do you smoke regularly? (yes/no)")?);
    let activity: ActivityLevel =
        ask_lenient(prompter, "Activity level (Low/Moderate/High)", &mut defaulted)?;

    let input = PatientInput {
        age,
        gender,
        weight,
        height,
        cholesterol,
        bp,
        smoker,
        activity,
    };
    Ok((input, defaulted))
}
