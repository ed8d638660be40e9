//! Property-style sweeps over the screening space: the precedence and
//! conservatism guarantees must hold for every question, not just the
//! handful a scenario test happens to pick.

use aigis_classify::classify;
use aigis_core::{
    AiDefinitionCriterion, HighRiskCategory, ProhibitedPractice, RiskLevel, ScreeningAnswer,
    Snapshot, SystemId, TransparencyScenario,
};

fn answered_snapshot() -> Snapshot {
    Snapshot::new(SystemId::new())
        .with_ai_definition_all(ScreeningAnswer::No)
        .with_ai_definition_answer(AiDefinitionCriterion::InfersFromInputs, ScreeningAnswer::Yes)
        .with_prohibited_all(ScreeningAnswer::No)
        .with_highrisk_all(ScreeningAnswer::No)
        .with_high_risk_product(ScreeningAnswer::No)
        .with_transparency_all(ScreeningAnswer::No)
}

#[test]
fn prohibited_wins_over_every_highrisk_and_transparency_combination() {
    for practice in ProhibitedPractice::all() {
        for answer in [ScreeningAnswer::Yes, ScreeningAnswer::Unsure] {
            for category in HighRiskCategory::all() {
                let snap = answered_snapshot()
                    .with_prohibited_answer(*practice, answer)
                    .with_highrisk_answer(*category, ScreeningAnswer::Yes)
                    .with_transparency_all(ScreeningAnswer::Yes);
                let classification = classify(&snap);
                assert_eq!(
                    classification.risk_level,
                    RiskLevel::Prohibited,
                    "practice={practice} answer={answer} category={category}"
                );
            }
        }
    }
}

#[test]
fn highrisk_wins_when_no_prohibited_flag() {
    for category in HighRiskCategory::all() {
        for answer in [ScreeningAnswer::Yes, ScreeningAnswer::Unsure] {
            for scenario in TransparencyScenario::all() {
                let snap = answered_snapshot()
                    .with_highrisk_answer(*category, answer)
                    .with_transparency_answer(*scenario, ScreeningAnswer::Yes);
                let classification = classify(&snap);
                assert_eq!(
                    classification.risk_level,
                    RiskLevel::HighRisk,
                    "category={category} answer={answer} scenario={scenario}"
                );
            }
        }
    }
}

#[test]
fn transparency_alone_is_limited_risk_for_every_scenario() {
    for scenario in TransparencyScenario::all() {
        let snap = answered_snapshot().with_transparency_answer(*scenario, ScreeningAnswer::Yes);
        assert_eq!(classify(&snap).risk_level, RiskLevel::LimitedRisk);
    }
}

#[test]
fn no_answer_yields_no_answer_not_a_panic() {
    // Every partially answered snapshot still classifies — the worst
    // possible outcome is needs_review, never a crash.
    for practice in ProhibitedPractice::all() {
        let mut snap = answered_snapshot();
        snap.prohibited_answers.remove(practice);
        let classification = classify(&snap);
        assert_eq!(classification.risk_level, RiskLevel::NeedsReview);
    }
    for category in HighRiskCategory::all() {
        let mut snap = answered_snapshot();
        snap.highrisk_answers.remove(category);
        let classification = classify(&snap);
        assert_eq!(classification.risk_level, RiskLevel::NeedsReview);
    }
}

#[test]
fn sub_verdicts_always_reported_for_audit() {
    // Even when the AI-definition gate short-circuits the tier, the
    // screen results land in the classification for reviewers.
    let snap = answered_snapshot()
        .with_ai_definition_answer(AiDefinitionCriterion::InfersFromInputs, ScreeningAnswer::No)
        .with_prohibited_answer(ProhibitedPractice::SocialScoring, ScreeningAnswer::Yes)
        .with_highrisk_answer(HighRiskCategory::LawEnforcement, ScreeningAnswer::Unsure);

    let classification = classify(&snap);
    assert_eq!(classification.risk_level, RiskLevel::NotAi);
    assert_eq!(
        classification.prohibited.matched,
        vec![ProhibitedPractice::SocialScoring]
    );
    assert_eq!(
        classification.high_risk.matched,
        vec![HighRiskCategory::LawEnforcement]
    );
}

#[test]
fn classification_serializes_for_the_record_store() {
    let snap = answered_snapshot()
        .with_highrisk_answer(HighRiskCategory::MigrationBorderControl, ScreeningAnswer::Yes);
    let classification = classify(&snap);

    let json = serde_json::to_value(&classification).unwrap();
    assert_eq!(json["risk_level"], "high_risk");
    assert_eq!(
        json["high_risk"]["matched"][0],
        "migration_border_control"
    );

    let parsed: aigis_classify::RiskClassification = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, classification);
}
