//! # Classification Verdicts
//!
//! The evaluator's output types. A classification is never just the
//! final tier: each screen reports which checks fired so reviewers and
//! auditors can reconstruct why a system landed where it did. The whole
//! record is replaced on every (re-)evaluation — no partial updates.

use serde::{Deserialize, Serialize};

use aigis_core::{
    AiDefinitionCriterion, AiDefinitionResult, HighRiskCategory, HighRiskScreeningResult,
    ProhibitedPractice, ProhibitedScreeningResult, RiskLevel, SystemId, TransparencyScenario,
    TransparencyScreeningResult,
};

/// Outcome of the AI-definition test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiDefinitionVerdict {
    /// The resolved verdict.
    pub result: AiDefinitionResult,
    /// Criteria that were never answered. Nonempty implies
    /// `Inconclusive`.
    pub unanswered: Vec<AiDefinitionCriterion>,
}

/// Outcome of the prohibited-practice screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProhibitedVerdict {
    /// The resolved verdict.
    pub result: ProhibitedScreeningResult,
    /// Practices answered yes or unsure, in canonical question order.
    pub matched: Vec<ProhibitedPractice>,
    /// Whether every practice question was answered.
    pub complete: bool,
}

/// Outcome of the high-risk screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighRiskVerdict {
    /// The resolved verdict.
    pub result: HighRiskScreeningResult,
    /// Categories answered yes or unsure, in canonical question order.
    pub matched: Vec<HighRiskCategory>,
    /// Whether the regulated-product marker fired.
    pub product_marker: bool,
    /// Whether every category question and the product marker were answered.
    pub complete: bool,
}

/// Outcome of the transparency screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransparencyVerdict {
    /// The resolved verdict.
    pub result: TransparencyScreeningResult,
    /// Scenarios answered yes, in canonical question order.
    pub matched: Vec<TransparencyScenario>,
}

/// The full classification of one system: the final tier plus the four
/// sub-verdicts that justify it.
///
/// Owned by the evaluator; consumed read-only by the task generator.
/// The orchestration shell persists exactly one current classification
/// per system, replacing it wholesale on every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskClassification {
    /// The system this classification belongs to.
    pub system_id: SystemId,
    /// The resolved risk tier.
    pub risk_level: RiskLevel,
    /// AI-definition sub-verdict.
    pub ai_definition: AiDefinitionVerdict,
    /// Prohibited-practice sub-verdict.
    pub prohibited: ProhibitedVerdict,
    /// High-risk sub-verdict.
    pub high_risk: HighRiskVerdict,
    /// Transparency sub-verdict.
    pub transparency: TransparencyVerdict,
    /// Human-readable explanation of which checks decided the tier.
    pub rationale: String,
}

impl RiskClassification {
    /// Whether this classification demands human attention before the
    /// record can be trusted (indeterminate data or a prohibited match).
    pub fn needs_attention(&self) -> bool {
        matches!(
            self.risk_level,
            RiskLevel::NeedsReview | RiskLevel::Prohibited
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_attention_tiers() {
        let base = RiskClassification {
            system_id: SystemId::new(),
            risk_level: RiskLevel::MinimalRisk,
            ai_definition: AiDefinitionVerdict {
                result: AiDefinitionResult::AiSystem,
                unanswered: vec![],
            },
            prohibited: ProhibitedVerdict {
                result: ProhibitedScreeningResult::NotProhibited,
                matched: vec![],
                complete: true,
            },
            high_risk: HighRiskVerdict {
                result: HighRiskScreeningResult::NotHighRisk,
                matched: vec![],
                product_marker: false,
                complete: true,
            },
            transparency: TransparencyVerdict {
                result: TransparencyScreeningResult::NoObligation,
                matched: vec![],
            },
            rationale: String::new(),
        };
        assert!(!base.needs_attention());

        let mut flagged = base.clone();
        flagged.risk_level = RiskLevel::Prohibited;
        assert!(flagged.needs_attention());

        flagged.risk_level = RiskLevel::NeedsReview;
        assert!(flagged.needs_attention());
    }

    #[test]
    fn serde_roundtrip() {
        let classification = RiskClassification {
            system_id: SystemId::new(),
            risk_level: RiskLevel::HighRisk,
            ai_definition: AiDefinitionVerdict {
                result: AiDefinitionResult::AiSystem,
                unanswered: vec![],
            },
            prohibited: ProhibitedVerdict {
                result: ProhibitedScreeningResult::NotProhibited,
                matched: vec![],
                complete: true,
            },
            high_risk: HighRiskVerdict {
                result: HighRiskScreeningResult::HighRiskAnnexIii,
                matched: vec![HighRiskCategory::EmploymentWorkers],
                product_marker: false,
                complete: true,
            },
            transparency: TransparencyVerdict {
                result: TransparencyScreeningResult::NoObligation,
                matched: vec![],
            },
            rationale: "high-risk area: employment_workers".into(),
        };
        let json = serde_json::to_string(&classification).unwrap();
        let parsed: RiskClassification = serde_json::from_str(&json).unwrap();
        assert_eq!(classification, parsed);
    }
}
