//! # Obligation Rule Table
//!
//! A flat list of independent rules, each of the form "if this
//! predicate holds over the classified snapshot, emit this task with
//! this priority and this due-date offset". Rules do not interact;
//! evaluation order affects nothing but list position, and the output
//! is canonically ordered (priority rank, then rule-table position) so
//! two runs over the same input are byte-identical.
//!
//! ## Time
//!
//! Due dates are computed from the `as_of` parameter the caller
//! supplies. The generator never reads a wall clock, which is what
//! makes it deterministic and replayable in tests.
//!
//! ## Satisfaction guards
//!
//! Most rules carry a "not already satisfied" guard: once an oversight
//! owner is assigned and operators are trained, the oversight rule
//! stops firing, so closing a gap retires the obligation instead of
//! re-issuing it. The quarterly-review rule is the exception — it fires
//! unconditionally.

use chrono::{DateTime, Duration, Utc};

use aigis_classify::RiskClassification;
use aigis_core::{
    FriaTriggerResult, HighRiskScreeningResult, InstructionsStatus, IncidentProcessStatus,
    IntakeMode, LoggingStatus, MonitoringStatus, ProhibitedScreeningResult, Snapshot,
    TrainingStatus, TransparencyScreeningResult,
};

use crate::task::{ComplianceTask, TaskPriority, TaskType};

/// Everything a rule predicate may inspect.
///
/// Screen verdicts resolve from the snapshot's stored result fields
/// first, falling back to the freshly computed classification when the
/// record has never been evaluated — so task generation works on the
/// very first save, before the shell has persisted any verdicts.
struct RuleContext<'a> {
    snapshot: &'a Snapshot,
    classification: &'a RiskClassification,
}

impl RuleContext<'_> {
    fn prohibited_result(&self) -> ProhibitedScreeningResult {
        self.snapshot
            .prohibited_screening_result
            .unwrap_or(self.classification.prohibited.result)
    }

    fn highrisk_result(&self) -> HighRiskScreeningResult {
        self.snapshot
            .highrisk_screening_result
            .unwrap_or(self.classification.high_risk.result)
    }

    fn transparency_result(&self) -> TransparencyScreeningResult {
        self.snapshot
            .transparency_screening_result
            .unwrap_or(self.classification.transparency.result)
    }

    fn is_high_risk(&self) -> bool {
        self.highrisk_result().is_high_risk()
    }
}

/// One row of the rule table.
struct ObligationRule {
    task_type: TaskType,
    priority: TaskPriority,
    due_days: i64,
    title: &'static str,
    description: &'static str,
    applies: fn(&RuleContext) -> bool,
}

fn prohibited_review_applies(ctx: &RuleContext) -> bool {
    ctx.prohibited_result() == ProhibitedScreeningResult::PotentialProhibited
}

fn dep_instructions_applies(ctx: &RuleContext) -> bool {
    ctx.is_high_risk() && ctx.snapshot.instructions_status != InstructionsStatus::Available
}

fn dep_oversight_applies(ctx: &RuleContext) -> bool {
    let satisfied = ctx.snapshot.oversight_owner.is_some()
        && ctx.snapshot.operators_trained == TrainingStatus::Trained;
    ctx.is_high_risk() && !satisfied
}

fn dep_monitoring_applies(ctx: &RuleContext) -> bool {
    ctx.is_high_risk() && ctx.snapshot.monitoring_status != MonitoringStatus::Operational
}

fn dep_log_retention_applies(ctx: &RuleContext) -> bool {
    ctx.is_high_risk() && ctx.snapshot.logging_status != LoggingStatus::Configured
}

fn dep_incident_process_applies(ctx: &RuleContext) -> bool {
    ctx.is_high_risk() && ctx.snapshot.incident_process != IncidentProcessStatus::Defined
}

/// The FRIA trigger is a literal OR of four conditions carried over
/// from the register's wizard: an outstanding assessment, a public
/// authority deployer, a public-service use, or an explicit trigger
/// verdict. A completed assessment suppresses only the first disjunct —
/// a public authority keeps the task even with a completed FRIA on
/// file, because the remaining disjuncts assert the duty itself, not
/// its progress.
fn fria_assessment_applies(ctx: &RuleContext) -> bool {
    ctx.is_high_risk()
        && (ctx.snapshot.fria_status.is_outstanding()
            || ctx.snapshot.is_public_authority.is_affirmative()
            || ctx.snapshot.provides_public_service.is_affirmative()
            || ctx.snapshot.fria_trigger_result == Some(FriaTriggerResult::Required))
}

fn registration_applies(ctx: &RuleContext) -> bool {
    ctx.is_high_risk() && !ctx.snapshot.registration_status.is_satisfied()
}

fn transparency_notice_applies(ctx: &RuleContext) -> bool {
    ctx.transparency_result() == TransparencyScreeningResult::TransparencyRequired
}

fn quick_capture_applies(ctx: &RuleContext) -> bool {
    ctx.snapshot.intake_mode == IntakeMode::QuickCapture
}

fn always_applies(_ctx: &RuleContext) -> bool {
    true
}

/// The rule table, in discovery order. Offsets are fixed per rule:
/// urgent +7, high +14 or +21, medium +21 or +30, low +90 days.
const RULES: &[ObligationRule] = &[
    ObligationRule {
        task_type: TaskType::ProhibitedReview,
        priority: TaskPriority::Urgent,
        due_days: 7,
        title: "Review potential prohibited practice",
        description: "The prohibited-practice screen could not rule out a banned use. \
                      Suspend further rollout and review the flagged practices with legal \
                      before the system is used again.",
        applies: prohibited_review_applies,
    },
    ObligationRule {
        task_type: TaskType::DepInstructions,
        priority: TaskPriority::High,
        due_days: 14,
        title: "Obtain vendor instructions for use",
        description: "High-risk systems must be operated according to the provider's \
                      instructions for use. Request the current instructions from the vendor \
                      and file them with the register entry.",
        applies: dep_instructions_applies,
    },
    ObligationRule {
        task_type: TaskType::DepOversight,
        priority: TaskPriority::High,
        due_days: 21,
        title: "Assign human oversight and train operators",
        description: "Name an oversight owner with authority to intervene, and ensure the \
                      people operating the system have completed training on its correct use \
                      and limitations.",
        applies: dep_oversight_applies,
    },
    ObligationRule {
        task_type: TaskType::DepMonitoring,
        priority: TaskPriority::High,
        due_days: 14,
        title: "Establish ongoing monitoring",
        description: "Define and switch on monitoring of the system's operation so that \
                      malfunction, drift, and misuse are detected while the system is in use.",
        applies: dep_monitoring_applies,
    },
    ObligationRule {
        task_type: TaskType::DepLogRetention,
        priority: TaskPriority::Medium,
        due_days: 30,
        title: "Configure automatic log retention",
        description: "Automatically generated logs must be kept for the required retention \
                      period. Configure capture and retention for this system's logs.",
        applies: dep_log_retention_applies,
    },
    ObligationRule {
        task_type: TaskType::DepIncidentProcess,
        priority: TaskPriority::High,
        due_days: 21,
        title: "Define serious-incident reporting process",
        description: "Document who reports a serious incident or malfunction, to which \
                      authority, and within what deadline, before the system causes one.",
        applies: dep_incident_process_applies,
    },
    ObligationRule {
        task_type: TaskType::FriaAssessment,
        priority: TaskPriority::High,
        due_days: 14,
        title: "Conduct fundamental-rights impact assessment",
        description: "An impact assessment on fundamental rights is required for this \
                      deployment. Complete it and record the outcome before go-live.",
        applies: fria_assessment_applies,
    },
    ObligationRule {
        task_type: TaskType::RegistrationEuDb,
        priority: TaskPriority::Medium,
        due_days: 30,
        title: "Register system in the EU database",
        description: "High-risk systems must be registered in the public database before \
                      being placed into service. Submit or update the registration.",
        applies: registration_applies,
    },
    ObligationRule {
        task_type: TaskType::TransparencyNotice,
        priority: TaskPriority::Medium,
        due_days: 21,
        title: "Publish transparency notices",
        description: "People must be told they are interacting with an AI system and \
                      synthetic content must be marked as such. Put the required notices \
                      and content marks in place.",
        applies: transparency_notice_applies,
    },
    ObligationRule {
        task_type: TaskType::QuickCompleteProfile,
        priority: TaskPriority::Medium,
        due_days: 21,
        title: "Complete the full intake questionnaire",
        description: "This record entered through quick capture. Complete the remaining \
                      intake questions so the classification rests on full answers.",
        applies: quick_capture_applies,
    },
    ObligationRule {
        task_type: TaskType::QuickVerifyClassification,
        priority: TaskPriority::High,
        due_days: 14,
        title: "Verify preliminary classification",
        description: "The current classification is based on abbreviated intake answers. \
                      Have the system owner confirm or correct it.",
        applies: quick_capture_applies,
    },
    ObligationRule {
        task_type: TaskType::QuarterlyReview,
        priority: TaskPriority::Low,
        due_days: 90,
        title: "Quarterly register review",
        description: "Confirm the register entry still matches reality: purpose, vendor, \
                      lifecycle stage, and governance posture.",
        applies: always_applies,
    },
];

/// Generate the obligation tasks for a classified snapshot.
///
/// Pure given the explicit `as_of` evaluation time: two calls with
/// identical `(snapshot, classification, as_of)` produce identical
/// output — same tasks, same due dates, same order. Output is sorted by
/// priority rank, ties broken by rule-table position.
///
/// The `(system_id, task_type)` pair on each task is the idempotence
/// key; the orchestration shell is expected to diff desired-vs-existing
/// task types per system before inserting.
pub fn generate_tasks(
    snapshot: &Snapshot,
    classification: &RiskClassification,
    as_of: DateTime<Utc>,
) -> Vec<ComplianceTask> {
    let ctx = RuleContext {
        snapshot,
        classification,
    };

    let mut tasks: Vec<ComplianceTask> = RULES
        .iter()
        .filter(|rule| (rule.applies)(&ctx))
        .map(|rule| ComplianceTask {
            system_id: snapshot.system_id.clone(),
            task_type: rule.task_type,
            title: rule.title.to_string(),
            description: rule.description.to_string(),
            priority: rule.priority,
            due_date: as_of + Duration::days(rule.due_days),
        })
        .collect();

    // Stable sort: rule-table position decides ties within a priority.
    tasks.sort_by_key(|task| task.priority.rank());

    tracing::debug!(
        system = %snapshot.system_id,
        count = tasks.len(),
        "generated obligation tasks"
    );

    tasks
}
