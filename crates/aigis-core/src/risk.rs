//! # Risk Tier — Single Source of Truth
//!
//! Defines the `RiskLevel` enum with all six tiers. This is the ONE
//! definition used across the engine: the evaluator produces it, the
//! obligation rules and the modification detector consume it, and the
//! derive order gives severity comparison for free — `Prohibited` is
//! the maximum, `NeedsReview` the minimum.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AigisError;

/// The overall risk tier of a registered AI system.
///
/// Ordering is by severity: `NeedsReview < NotAi < MinimalRisk <
/// LimitedRisk < HighRisk < Prohibited`. `NeedsReview` sits at the
/// bottom because it asserts nothing about the system — it records
/// that the screening data could not support a verdict.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Screening data was incomplete or inconclusive; a human must review.
    NeedsReview,
    /// The record does not meet the AI-system definition.
    NotAi,
    /// No regulatory concern beyond baseline diligence.
    MinimalRisk,
    /// Transparency obligations apply.
    LimitedRisk,
    /// Full high-risk obligations apply.
    HighRisk,
    /// The described use is a prohibited practice.
    Prohibited,
}

impl RiskLevel {
    /// Returns all risk tiers in ascending severity order.
    pub fn all() -> &'static [RiskLevel] {
        &[
            Self::NeedsReview,
            Self::NotAi,
            Self::MinimalRisk,
            Self::LimitedRisk,
            Self::HighRisk,
            Self::Prohibited,
        ]
    }

    /// Returns the snake_case string identifier for this tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NeedsReview => "needs_review",
            Self::NotAi => "not_ai",
            Self::MinimalRisk => "minimal_risk",
            Self::LimitedRisk => "limited_risk",
            Self::HighRisk => "high_risk",
            Self::Prohibited => "prohibited",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = AigisError;

    /// Parse a risk tier from its snake_case identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "needs_review" => Ok(Self::NeedsReview),
            "not_ai" => Ok(Self::NotAi),
            "minimal_risk" => Ok(Self::MinimalRisk),
            "limited_risk" => Ok(Self::LimitedRisk),
            "high_risk" => Ok(Self::HighRisk),
            "prohibited" => Ok(Self::Prohibited),
            other => Err(AigisError::UnknownEnumToken {
                field: "risk_level",
                token: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(RiskLevel::Prohibited > RiskLevel::HighRisk);
        assert!(RiskLevel::HighRisk > RiskLevel::LimitedRisk);
        assert!(RiskLevel::LimitedRisk > RiskLevel::MinimalRisk);
        assert!(RiskLevel::MinimalRisk > RiskLevel::NotAi);
        assert!(RiskLevel::NotAi > RiskLevel::NeedsReview);
    }

    #[test]
    fn test_all_is_ascending() {
        let tiers = RiskLevel::all();
        for pair in tiers.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_as_str_roundtrip() {
        for tier in RiskLevel::all() {
            let parsed: RiskLevel = tier.as_str().parse().unwrap();
            assert_eq!(*tier, parsed);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("extreme".parse::<RiskLevel>().is_err());
        assert!("HIGH_RISK".parse::<RiskLevel>().is_err());
        assert!("".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for tier in RiskLevel::all() {
            let json = serde_json::to_string(tier).unwrap();
            assert_eq!(json, format!("\"{}\"", tier.as_str()));
        }
    }
}
