//! @acp:module "Advice Text"
//! @acp:summary "Static advice wording keyed by risk tier"
//! @acp:domain cli
//! @acp:layer logic

use serde::{Deserialize, Serialize};

use super::types::RiskTier;

/// Which wording set to draw advice from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdviceWording {
    /// Wording used by the dashboard report
    #[default]
    Dashboard,
    /// Shorter wording used by the console report
    Console,
}

impl AdviceWording {
    pub fn advice(&self, tier: RiskTier) -> &'static str {
        match (self, tier) {
            (AdviceWording::Dashboard, RiskTier::Low) => {
                "Excellent - you're in a healthy range. Maintain regular checkups and stay active!"
            }
            (AdviceWording::Dashboard, RiskTier::Moderate) => {
                "Moderate risk. Watch your diet, increase exercise, and monitor key vitals."
            }
            (AdviceWording::Dashboard, RiskTier::High) => {
                "Elevated risk. Consider consulting a doctor for a comprehensive health evaluation."
            }
            (AdviceWording::Console, RiskTier::Low) => {
                "You appear to have a low health risk. Keep up your healthy habits!"
            }
            (AdviceWording::Console, RiskTier::Moderate) => {
                "Moderate risk - watch your diet and stay active."
            }
            (AdviceWording::Console, RiskTier::High) => {
                "High risk - consider professional medical guidance soon."
            }
        }
    }
}

impl std::str::FromStr for AdviceWording {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dashboard" | "form" => Ok(AdviceWording::Dashboard),
            "console" | "cli" => Ok(AdviceWording::Console),
            _ => Err(format!("Unknown advice wording: {}", s)),
        }
    }
}
