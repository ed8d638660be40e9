//! # Compliance Task Model
//!
//! One generated obligation: what must be done, how urgent it is, and
//! by when. The `(system_id, task_type)` pair is the idempotence key —
//! the orchestration shell diffs desired-vs-existing task types before
//! insert, so regenerating an unchanged snapshot never duplicates an
//! obligation. Assignees are set by the shell, never by the engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use aigis_core::{AigisError, SystemId};

/// Priority tier of a compliance task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Act within days — potential prohibited use.
    Urgent,
    /// Core high-risk obligation.
    High,
    /// Supporting obligation.
    Medium,
    /// Routine hygiene.
    Low,
}

impl TaskPriority {
    /// Numeric rank for canonical ordering; lower sorts first.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Urgent => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }

    /// Returns all priorities in descending urgency.
    pub fn all() -> &'static [TaskPriority] {
        &[Self::Urgent, Self::High, Self::Medium, Self::Low]
    }

    /// Returns the snake_case string identifier for this priority.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskPriority {
    type Err = AigisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "urgent" => Ok(Self::Urgent),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(AigisError::UnknownEnumToken {
                field: "task_priority",
                token: other.to_string(),
            }),
        }
    }
}

/// Stable task-type tag.
///
/// These identifiers are the deduplication key in the system of record
/// and appear in tests and exports; they never change once issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    /// Review a potential prohibited practice before any further use.
    ProhibitedReview,
    /// Obtain the vendor's instructions for use.
    DepInstructions,
    /// Assign a human-oversight owner and train operators.
    DepOversight,
    /// Establish post-market monitoring.
    DepMonitoring,
    /// Configure automatic log retention.
    DepLogRetention,
    /// Define a serious-incident reporting process.
    DepIncidentProcess,
    /// Conduct a fundamental-rights impact assessment.
    FriaAssessment,
    /// Register the system in the public high-risk database.
    RegistrationEuDb,
    /// Publish the required transparency notices.
    TransparencyNotice,
    /// Complete the full intake questionnaire after a quick capture.
    QuickCompleteProfile,
    /// Verify the preliminary classification after a quick capture.
    QuickVerifyClassification,
    /// Periodic review of the register entry.
    QuarterlyReview,
}

impl TaskType {
    /// Returns all task types in rule-table order.
    pub fn all() -> &'static [TaskType] {
        &[
            Self::ProhibitedReview,
            Self::DepInstructions,
            Self::DepOversight,
            Self::DepMonitoring,
            Self::DepLogRetention,
            Self::DepIncidentProcess,
            Self::FriaAssessment,
            Self::RegistrationEuDb,
            Self::TransparencyNotice,
            Self::QuickCompleteProfile,
            Self::QuickVerifyClassification,
            Self::QuarterlyReview,
        ]
    }

    /// Returns the stable snake_case tag for this task type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProhibitedReview => "prohibited_review",
            Self::DepInstructions => "dep_instructions",
            Self::DepOversight => "dep_oversight",
            Self::DepMonitoring => "dep_monitoring",
            Self::DepLogRetention => "dep_log_retention",
            Self::DepIncidentProcess => "dep_incident_process",
            Self::FriaAssessment => "fria_assessment",
            Self::RegistrationEuDb => "registration_eu_db",
            Self::TransparencyNotice => "transparency_notice",
            Self::QuickCompleteProfile => "quick_complete_profile",
            Self::QuickVerifyClassification => "quick_verify_classification",
            Self::QuarterlyReview => "quarterly_review",
        }
    }
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = AigisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prohibited_review" => Ok(Self::ProhibitedReview),
            "dep_instructions" => Ok(Self::DepInstructions),
            "dep_oversight" => Ok(Self::DepOversight),
            "dep_monitoring" => Ok(Self::DepMonitoring),
            "dep_log_retention" => Ok(Self::DepLogRetention),
            "dep_incident_process" => Ok(Self::DepIncidentProcess),
            "fria_assessment" => Ok(Self::FriaAssessment),
            "registration_eu_db" => Ok(Self::RegistrationEuDb),
            "transparency_notice" => Ok(Self::TransparencyNotice),
            "quick_complete_profile" => Ok(Self::QuickCompleteProfile),
            "quick_verify_classification" => Ok(Self::QuickVerifyClassification),
            "quarterly_review" => Ok(Self::QuarterlyReview),
            other => Err(AigisError::UnknownEnumToken {
                field: "task_type",
                token: other.to_string(),
            }),
        }
    }
}

/// One generated compliance obligation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceTask {
    /// The system this obligation belongs to.
    pub system_id: SystemId,
    /// Stable tag; the idempotence key together with `system_id`.
    pub task_type: TaskType,
    /// Short imperative title.
    pub title: String,
    /// What to do and why.
    pub description: String,
    /// Priority tier.
    pub priority: TaskPriority,
    /// Due date, computed from the evaluation time.
    pub due_date: DateTime<Utc>,
}
