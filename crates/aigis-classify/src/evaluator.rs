//! # Classification Evaluator
//!
//! Pure functions mapping a [`Snapshot`] to a [`RiskClassification`].
//! No clock, no randomness, no I/O — identical input always yields an
//! identical classification.
//!
//! ## Precedence
//!
//! Screens are evaluated in a fixed order:
//!
//! 1. **AI-definition gate.** A record that fails the machine-system
//!    test is `NotAi`; one whose test cannot be resolved is
//!    `NeedsReview`. Either way the remaining screens are still
//!    computed and reported — reviewers see the full picture.
//! 2. **Prohibited screen.** Any practice answered yes *or unsure*
//!    forces `Prohibited`, regardless of every later screen.
//! 3. **Completeness guard.** If the prohibited or high-risk screen has
//!    unanswered questions and nothing fired, the data cannot support a
//!    lower tier: `NeedsReview`.
//! 4. **High-risk screen.** Any category answered yes or unsure, or the
//!    regulated-product marker, forces `HighRisk`.
//! 5. **Transparency screen.** A confirmed disclosure scenario yields
//!    `LimitedRisk`.
//! 6. Otherwise `MinimalRisk`.
//!
//! The unsure-escalates rule is scoped to the prohibited and high-risk
//! screens; transparency triggers on explicit `Yes` only.
//!
//! Classification never fails: incomplete or inconsistent answers
//! resolve to `NeedsReview`, not to an error.

use aigis_core::{
    AiDefinitionCriterion, AiDefinitionResult, HighRiskCategory, HighRiskScreeningResult,
    ProhibitedPractice, ProhibitedScreeningResult, RiskLevel, ScreeningAnswer, Snapshot,
    TransparencyScenario, TransparencyScreeningResult,
};

use crate::verdict::{
    AiDefinitionVerdict, HighRiskVerdict, ProhibitedVerdict, RiskClassification,
    TransparencyVerdict,
};

/// Run the AI-definition test.
///
/// The decisive criterion is `InfersFromInputs` — a system that does
/// not infer its outputs is conventional software whatever its autonomy
/// or adaptiveness. Any unanswered or unsure criterion makes the test
/// `Inconclusive`.
pub fn screen_ai_definition(snapshot: &Snapshot) -> AiDefinitionVerdict {
    let mut unanswered = Vec::new();
    let mut unresolved = false;

    for criterion in AiDefinitionCriterion::all() {
        match snapshot.ai_definition_answer(*criterion) {
            ScreeningAnswer::Unknown => unanswered.push(*criterion),
            ScreeningAnswer::Unsure => unresolved = true,
            ScreeningAnswer::Yes | ScreeningAnswer::No => {}
        }
    }

    let result = if !unanswered.is_empty() || unresolved {
        AiDefinitionResult::Inconclusive
    } else if snapshot.ai_definition_answer(AiDefinitionCriterion::InfersFromInputs)
        == ScreeningAnswer::Yes
    {
        AiDefinitionResult::AiSystem
    } else {
        AiDefinitionResult::NotAiSystem
    };

    AiDefinitionVerdict { result, unanswered }
}

/// Run the prohibited-practice screen.
///
/// Conservative: a practice answered `Unsure` matches the same as
/// `Yes`. The screen is complete only when all questions are answered.
pub fn screen_prohibited(snapshot: &Snapshot) -> ProhibitedVerdict {
    let mut matched = Vec::new();
    let mut complete = true;

    for practice in ProhibitedPractice::all() {
        let answer = snapshot.prohibited_answer(*practice);
        if answer.is_affirmative() {
            matched.push(*practice);
        }
        if !answer.is_answered() {
            complete = false;
        }
    }

    let result = if matched.is_empty() {
        ProhibitedScreeningResult::NotProhibited
    } else {
        ProhibitedScreeningResult::PotentialProhibited
    };

    ProhibitedVerdict {
        result,
        matched,
        complete,
    }
}

/// Run the high-risk screen.
///
/// Conservative on categories (`Unsure` matches like `Yes`). An
/// Annex-III-style category match labels the verdict `HighRiskAnnexIii`
/// even when the product marker also fired; the marker alone labels it
/// `HighRiskProduct`.
pub fn screen_high_risk(snapshot: &Snapshot) -> HighRiskVerdict {
    let mut matched = Vec::new();
    let mut complete = true;

    for category in HighRiskCategory::all() {
        let answer = snapshot.highrisk_answer(*category);
        if answer.is_affirmative() {
            matched.push(*category);
        }
        if !answer.is_answered() {
            complete = false;
        }
    }

    let product_marker = snapshot.high_risk_product.is_affirmative();
    if !snapshot.high_risk_product.is_answered() {
        complete = false;
    }

    let result = if !matched.is_empty() {
        HighRiskScreeningResult::HighRiskAnnexIii
    } else if product_marker {
        HighRiskScreeningResult::HighRiskProduct
    } else {
        HighRiskScreeningResult::NotHighRisk
    };

    HighRiskVerdict {
        result,
        matched,
        product_marker,
        complete,
    }
}

/// Run the transparency screen.
///
/// Triggers on explicit `Yes` only — the unsure-escalates rule does not
/// extend to disclosure scenarios.
pub fn screen_transparency(snapshot: &Snapshot) -> TransparencyVerdict {
    let matched: Vec<TransparencyScenario> = TransparencyScenario::all()
        .iter()
        .copied()
        .filter(|scenario| snapshot.transparency_answer(*scenario) == ScreeningAnswer::Yes)
        .collect();

    let result = if matched.is_empty() {
        TransparencyScreeningResult::NoObligation
    } else {
        TransparencyScreeningResult::TransparencyRequired
    };

    TransparencyVerdict { result, matched }
}

/// Classify a snapshot: run all four screens and resolve the tier.
///
/// Pure, total, deterministic. Never panics and never returns an
/// error — indeterminate data resolves to `NeedsReview`.
pub fn classify(snapshot: &Snapshot) -> RiskClassification {
    let ai_definition = screen_ai_definition(snapshot);
    let prohibited = screen_prohibited(snapshot);
    let high_risk = screen_high_risk(snapshot);
    let transparency = screen_transparency(snapshot);

    let (risk_level, rationale) = resolve_tier(&ai_definition, &prohibited, &high_risk, &transparency);

    tracing::debug!(
        system = %snapshot.system_id,
        risk_level = %risk_level,
        "classified snapshot"
    );

    RiskClassification {
        system_id: snapshot.system_id.clone(),
        risk_level,
        ai_definition,
        prohibited,
        high_risk,
        transparency,
        rationale,
    }
}

/// Resolve the final tier from the four sub-verdicts, with the fixed
/// precedence described in the module docs.
fn resolve_tier(
    ai_definition: &AiDefinitionVerdict,
    prohibited: &ProhibitedVerdict,
    high_risk: &HighRiskVerdict,
    transparency: &TransparencyVerdict,
) -> (RiskLevel, String) {
    match ai_definition.result {
        AiDefinitionResult::NotAiSystem => {
            return (
                RiskLevel::NotAi,
                "record does not meet the AI-system definition".to_string(),
            );
        }
        AiDefinitionResult::Inconclusive => {
            return (
                RiskLevel::NeedsReview,
                format!(
                    "AI-definition test inconclusive ({} of {} criteria unanswered)",
                    ai_definition.unanswered.len(),
                    AiDefinitionCriterion::all().len()
                ),
            );
        }
        AiDefinitionResult::AiSystem => {}
    }

    if !prohibited.matched.is_empty() {
        let names: Vec<&str> = prohibited.matched.iter().map(|p| p.as_str()).collect();
        return (
            RiskLevel::Prohibited,
            format!(
                "prohibited practice could not be ruled out: {}",
                names.join(", ")
            ),
        );
    }

    if !prohibited.complete || !high_risk.complete {
        let mut gaps = Vec::new();
        if !prohibited.complete {
            gaps.push("prohibited-practice screen incomplete");
        }
        if !high_risk.complete {
            gaps.push("high-risk screen incomplete");
        }
        return (RiskLevel::NeedsReview, gaps.join("; "));
    }

    if high_risk.result.is_high_risk() {
        let rationale = if high_risk.matched.is_empty() {
            "regulated-product safety component".to_string()
        } else {
            let names: Vec<&str> = high_risk.matched.iter().map(|c| c.as_str()).collect();
            format!("high-risk area: {}", names.join(", "))
        };
        return (RiskLevel::HighRisk, rationale);
    }

    if transparency.result == TransparencyScreeningResult::TransparencyRequired {
        let names: Vec<&str> = transparency.matched.iter().map(|s| s.as_str()).collect();
        return (
            RiskLevel::LimitedRisk,
            format!("transparency obligation: {}", names.join(", ")),
        );
    }

    (
        RiskLevel::MinimalRisk,
        "no prohibited, high-risk, or transparency screen fired".to_string(),
    )
}
