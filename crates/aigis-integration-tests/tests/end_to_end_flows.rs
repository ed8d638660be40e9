//! Cross-crate flows: a record moves through intake, classification,
//! task generation, an edit, and change detection — the same sequence
//! the orchestration shell drives around every save.

use chrono::{DateTime, Duration, TimeZone, Utc};

use aigis_classify::{classify, RiskClassification};
use aigis_core::{
    HighRiskCategory, IntakeMode, LifecycleStatus, MemberId, RiskLevel, ScreeningAnswer, Snapshot,
    SystemId, TrainingStatus, TransparencyScenario, ValueChainRole, VendorId,
    AiDefinitionCriterion,
};
use aigis_delta::{
    detect_modifications, detect_reassessment_triggers, ModificationType, ReassessmentFlag,
};
use aigis_obligation::{generate_tasks, TaskPriority, TaskType};

fn as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, 15, 10, 30, 0).unwrap()
}

/// Full wizard submission for an AI system with every screen answered no.
fn answered_snapshot(system_id: SystemId) -> Snapshot {
    Snapshot::new(system_id)
        .with_ai_definition_all(ScreeningAnswer::No)
        .with_ai_definition_answer(AiDefinitionCriterion::InfersFromInputs, ScreeningAnswer::Yes)
        .with_prohibited_all(ScreeningAnswer::No)
        .with_highrisk_all(ScreeningAnswer::No)
        .with_high_risk_product(ScreeningAnswer::No)
        .with_transparency_all(ScreeningAnswer::No)
}

/// What the shell does after classification: persist the sub-verdicts
/// and the tier back onto the record.
fn persist_verdicts(snapshot: Snapshot, classification: &RiskClassification) -> Snapshot {
    snapshot
        .with_ai_definition_result(classification.ai_definition.result)
        .with_prohibited_result(classification.prohibited.result)
        .with_highrisk_result(classification.high_risk.result)
        .with_transparency_result(classification.transparency.result)
        .with_risk_level(classification.risk_level)
}

#[test]
fn high_risk_recruitment_system_lifecycle() {
    let system_id = SystemId::new();

    // Intake: a recruitment screening tool, piloted, bought from a vendor.
    let submitted = answered_snapshot(system_id.clone())
        .with_lifecycle(LifecycleStatus::Pilot)
        .with_vendor(Some(VendorId::new()))
        .with_roles(vec![ValueChainRole::Deployer])
        .with_purpose_category(Some("recruitment_screening".into()))
        .with_affected_groups(vec!["applicants".into()])
        .with_highrisk_answer(HighRiskCategory::EmploymentWorkers, ScreeningAnswer::Yes)
        .with_transparency_answer(TransparencyScenario::InteractsWithPersons, ScreeningAnswer::Yes);

    // Classify.
    let classification = classify(&submitted);
    assert_eq!(classification.risk_level, RiskLevel::HighRisk);
    assert_eq!(
        classification.high_risk.matched,
        vec![HighRiskCategory::EmploymentWorkers]
    );
    // Transparency fired too, but high risk outranks it.
    assert!(!classification.transparency.matched.is_empty());

    // Persist verdicts, then generate obligations.
    let stored = persist_verdicts(submitted, &classification);
    let tasks = generate_tasks(&stored, &classification, as_of());

    let types: Vec<TaskType> = tasks.iter().map(|t| t.task_type).collect();
    assert!(types.contains(&TaskType::DepOversight));
    assert!(types.contains(&TaskType::DepInstructions));
    assert!(types.contains(&TaskType::TransparencyNotice));
    assert!(types.contains(&TaskType::QuarterlyReview));
    assert!(!types.contains(&TaskType::ProhibitedReview));

    // The oversight task carries the documented priority and offset.
    let oversight = tasks
        .iter()
        .find(|t| t.task_type == TaskType::DepOversight)
        .unwrap();
    assert_eq!(oversight.priority, TaskPriority::High);
    assert_eq!(oversight.due_date, as_of() + Duration::days(21));

    // Later edit: oversight assigned, operators trained, system goes live.
    let edited = stored
        .clone()
        .with_oversight_owner(Some(MemberId::new()))
        .with_operators_trained(TrainingStatus::Trained)
        .with_lifecycle(LifecycleStatus::Live);

    // The closed gap retires the oversight obligation on regeneration.
    let reclassified = classify(&edited);
    let regenerated = generate_tasks(&edited, &reclassified, as_of() + Duration::days(30));
    assert!(!regenerated
        .iter()
        .any(|t| t.task_type == TaskType::DepOversight));

    // Oversight owner and training are not on the modification
    // allow-list, and pilot -> live is not a substantial modification
    // either — but it is a reassessment trigger.
    assert!(detect_modifications(&stored, &edited).is_empty());
    let triggers = detect_reassessment_triggers(&stored, &edited);
    assert_eq!(triggers.len(), 1);
    assert!(triggers[0].reason.contains("entered production"));

    let flag = ReassessmentFlag::clear().raise(&triggers, as_of() + Duration::days(30));
    assert!(flag.is_flagged());
}

#[test]
fn quick_capture_record_gets_followups_then_sheds_them() {
    let quick = answered_snapshot(SystemId::new()).with_intake_mode(IntakeMode::QuickCapture);
    let classification = classify(&quick);
    let tasks = generate_tasks(&quick, &classification, as_of());

    let types: Vec<TaskType> = tasks.iter().map(|t| t.task_type).collect();
    assert!(types.contains(&TaskType::QuickCompleteProfile));
    assert!(types.contains(&TaskType::QuickVerifyClassification));

    // Once the full questionnaire is completed the follow-ups stop firing.
    let completed = quick.clone().with_intake_mode(IntakeMode::Full);
    let reclassified = classify(&completed);
    let regenerated = generate_tasks(&completed, &reclassified, as_of());
    let regenerated_types: Vec<TaskType> = regenerated.iter().map(|t| t.task_type).collect();
    assert!(!regenerated_types.contains(&TaskType::QuickCompleteProfile));
    assert!(!regenerated_types.contains(&TaskType::QuickVerifyClassification));
}

#[test]
fn prohibited_finding_dominates_the_whole_pipeline() {
    let snapshot = answered_snapshot(SystemId::new())
        .with_prohibited_answer(
            aigis_core::ProhibitedPractice::SocialScoring,
            ScreeningAnswer::Unsure,
        )
        .with_highrisk_answer(HighRiskCategory::EssentialServices, ScreeningAnswer::Yes);

    let classification = classify(&snapshot);
    assert_eq!(classification.risk_level, RiskLevel::Prohibited);

    let stored = persist_verdicts(snapshot, &classification);
    let tasks = generate_tasks(&stored, &classification, as_of());

    // The urgent review heads the list.
    assert_eq!(tasks[0].task_type, TaskType::ProhibitedReview);
    assert_eq!(tasks[0].priority, TaskPriority::Urgent);
    assert_eq!(tasks[0].due_date, as_of() + Duration::days(7));
}

#[test]
fn foundation_model_swap_is_flagged_for_new_conformity() {
    let before = answered_snapshot(SystemId::new())
        .with_foundation_model(Some("llama-3-70b".into()))
        .with_highrisk_answer(HighRiskCategory::EssentialServices, ScreeningAnswer::Yes);
    let classification = classify(&before);
    let before = persist_verdicts(before, &classification);

    let after = before
        .clone()
        .with_foundation_model(Some("llama-4-405b".into()));

    let mods = detect_modifications(&before, &after);
    assert_eq!(mods.len(), 1);
    assert_eq!(mods[0].modification_type, ModificationType::ModelChange);
    assert!(mods[0].requires_new_conformity);

    // A model swap alone does not touch the reassessment watch-list.
    assert!(detect_reassessment_triggers(&before, &after).is_empty());
}

#[test]
fn noop_save_creates_no_review_work() {
    let snapshot = answered_snapshot(SystemId::new())
        .with_vendor(Some(VendorId::new()))
        .with_lifecycle(LifecycleStatus::Live);
    let resaved = snapshot.clone();

    assert!(detect_modifications(&snapshot, &resaved).is_empty());
    assert!(detect_reassessment_triggers(&snapshot, &resaved).is_empty());

    // Regeneration yields the identical task list for dedup to discard.
    let classification = classify(&snapshot);
    let first = generate_tasks(&snapshot, &classification, as_of());
    let second = generate_tasks(&resaved, &classification, as_of());
    assert_eq!(first, second);
}
