//! @acp:module "Input Parsing"
//! @acp:summary "Free-text field parsing for the console front-end"
//! @acp:domain cli
//! @acp:layer parser
//!
//! Numbers are strict: bad text is an error and ends the run. Category
//! fields are lenient: unknown text falls back to the lowest-risk variant,
//! and the returned [`Lenient`] says so.

use crate::assess::{ActivityLevel, BloodPressure, Cholesterol, Gender};
use crate::error::{HealthError, Result};

/// A parsed value plus whether the text actually matched a known variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lenient<T> {
    pub value: T,
    /// False when `value` is the fail-open fallback
    pub recognized: bool,
}

impl<T> Lenient<T> {
    fn matched(value: T) -> Self {
        Self {
            value,
            recognized: true,
        }
    }

    fn fallback(value: T) -> Self {
        Self {
            value,
            recognized: false,
        }
    }
}

/// Case-insensitive parsing with an explicit fail-open fallback
pub trait LenientParse: Sized + Copy + std::fmt::Debug {
    /// Field name used in diagnostics
    const FIELD: &'static str;

    /// Variant used when the text is not recognized
    fn fallback() -> Self;

    /// Match already-normalized (trimmed, lowercased) text
    fn match_normalized(text: &str) -> Option<Self>;

    fn parse_lenient(text: &str) -> Lenient<Self> {
        let normalized = text.trim().to_lowercase();
        match Self::match_normalized(&normalized) {
            Some(value) => Lenient::matched(value),
            None => {
                let value = Self::fallback();
                tracing::warn!(
                    "Unrecognized {} {:?}, treating as {:?}",
                    Self::FIELD,
                    text.trim(),
                    value
                );
                Lenient::fallback(value)
            }
        }
    }
}

impl LenientParse for Gender {
    const FIELD: &'static str = "gender";

    fn fallback() -> Self {
        Gender::Other
    }

    fn match_normalized(text: &str) -> Option<Self> {
        match text {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            _ => None,
        }
    }
}

impl LenientParse for Cholesterol {
    const FIELD: &'static str = "cholesterol";

    fn fallback() -> Self {
        Cholesterol::Normal
    }

    fn match_normalized(text: &str) -> Option<Self> {
        match text {
            "normal" => Some(Cholesterol::Normal),
            "borderline" => Some(Cholesterol::Borderline),
            "high" => Some(Cholesterol::High),
            _ => None,
        }
    }
}

impl LenientParse for BloodPressure {
    const FIELD: &'static str = "blood pressure";

    fn fallback() -> Self {
        BloodPressure::Normal
    }

    fn match_normalized(text: &str) -> Option<Self> {
        match text {
            "normal" => Some(BloodPressure::Normal),
            "borderline" => Some(BloodPressure::Borderline),
            "high" => Some(BloodPressure::High),
            _ => None,
        }
    }
}

impl LenientParse for ActivityLevel {
    const FIELD: &'static str = "activity level";

    // High activity scores zero points
    fn fallback() -> Self {
        ActivityLevel::High
    }

    fn match_normalized(text: &str) -> Option<Self> {
        match text {
            "low" => Some(ActivityLevel::Low),
            "moderate" => Some(ActivityLevel::Moderate),
            "high" => Some(ActivityLevel::High),
            _ => None,
        }
    }
}

/// Parse a whole-number age
pub fn parse_age(text: &str) -> Result<u32> {
    let trimmed = text.trim();
    trimmed.parse().map_err(|_| HealthError::InvalidNumber {
        field: "age",
        value: trimmed.to_string(),
    })
}

/// Parse weight in kilograms
pub fn parse_weight(text: &str) -> Result<f64> {
    parse_real("weight", text)
}

/// Parse height in meters
pub fn parse_height(text: &str) -> Result<f64> {
    parse_real("height", text)
}

fn parse_real(field: &'static str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    trimmed.parse().map_err(|_| HealthError::InvalidNumber {
        field,
        value: trimmed.to_string(),
    })
}

/// Only "yes" (any case) counts as true
pub fn parse_yes_no(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_age(" 42 ").unwrap(), 42);
        assert_eq!(parse_weight("70.5").unwrap(), 70.5);
        assert_eq!(parse_height("1.8\n").unwrap(), 1.8);
    }

    #[test]
    fn test_parse_numbers_rejects_text() {
        assert!(matches!(
            parse_age("thirty"),
            Err(HealthError::InvalidNumber { field: "age", .. })
        ));
        // Age is a whole number
        assert!(parse_age("30.5").is_err());
        assert!(parse_weight("").is_err());
        assert!(matches!(
            parse_height("tall"),
            Err(HealthError::InvalidNumber { field: "height", .. })
        ));
    }

    #[test]
    fn test_lenient_parse_is_case_insensitive() {
        let parsed = Cholesterol::parse_lenient("BORDERLINE");
        assert_eq!(parsed.value, Cholesterol::Borderline);
        assert!(parsed.recognized);

        let parsed = BloodPressure::parse_lenient("  high ");
        assert_eq!(parsed.value, BloodPressure::High);

        let parsed = ActivityLevel::parse_lenient("Moderate");
        assert_eq!(parsed.value, ActivityLevel::Moderate);

        let parsed = Gender::parse_lenient("female");
        assert_eq!(parsed.value, Gender::Female);
    }

    #[test]
    fn test_lenient_parse_fails_open() {
        let parsed = Cholesterol::parse_lenient("very high");
        assert_eq!(parsed.value, Cholesterol::Normal);
        assert!(!parsed.recognized);

        let parsed = BloodPressure::parse_lenient("");
        assert_eq!(parsed.value, BloodPressure::Normal);
        assert!(!parsed.recognized);

        let parsed = ActivityLevel::parse_lenient("couch");
        assert_eq!(parsed.value, ActivityLevel::High);
        assert!(!parsed.recognized);

        assert_eq!(Gender::parse_lenient("n/a").value, Gender::Other);
    }

    #[test]
    fn test_parse_yes_no() {
        assert!(parse_yes_no("yes"));
        assert!(parse_yes_no("YES "));
        assert!(!parse_yes_no("y"));
        assert!(!parse_yes_no("no"));
        assert!(!parse_yes_no(""));
    }
}
