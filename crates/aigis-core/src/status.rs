//! # Lifecycle & Governance Status Enums
//!
//! The lifecycle state of a registered system plus the governance
//! posture fields the obligation rules inspect. Each enum is a closed
//! vocabulary with a stable snake_case wire form; the lenient parsers
//! exist for fields fed from persisted records, where a legacy token
//! must degrade to the conservative variant instead of aborting a save.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AigisError;

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

/// Where a registered system sits in its lifecycle.
///
/// Reassessment cares about two transitions only: entering production
/// (`* → Live`) and leaving service (`* → Retired`). Intermediate moves
/// such as `Idea → Pilot` carry no regulatory significance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStatus {
    /// Concept stage; nothing deployed.
    Idea,
    /// Limited pilot with real users or data.
    Pilot,
    /// In production.
    Live,
    /// Withdrawn from service.
    Retired,
}

impl LifecycleStatus {
    /// Whether the system is in production.
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live)
    }

    /// Whether the system has been withdrawn from service.
    pub fn is_retired(&self) -> bool {
        matches!(self, Self::Retired)
    }

    /// Returns all lifecycle states in canonical order.
    pub fn all() -> &'static [LifecycleStatus] {
        &[Self::Idea, Self::Pilot, Self::Live, Self::Retired]
    }

    /// Returns the snake_case string identifier for this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idea => "idea",
            Self::Pilot => "pilot",
            Self::Live => "live",
            Self::Retired => "retired",
        }
    }
}

impl std::fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LifecycleStatus {
    type Err = AigisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idea" => Ok(Self::Idea),
            "pilot" => Ok(Self::Pilot),
            "live" => Ok(Self::Live),
            "retired" => Ok(Self::Retired),
            other => Err(AigisError::UnknownEnumToken {
                field: "lifecycle_status",
                token: other.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Value-chain role
// ---------------------------------------------------------------------------

/// The organization's role in the AI value chain for this system.
///
/// A system can carry several roles at once (e.g. provider and deployer
/// of the same model); the snapshot stores them as a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueChainRole {
    /// Develops the system or has it developed and places it on the market.
    Provider,
    /// Uses the system under its own authority.
    Deployer,
    /// Places a third-country system on the market.
    Importer,
    /// Makes the system available on the market.
    Distributor,
    /// Integrates the system into a regulated product.
    ProductManufacturer,
}

impl ValueChainRole {
    /// Returns all roles in canonical order.
    pub fn all() -> &'static [ValueChainRole] {
        &[
            Self::Provider,
            Self::Deployer,
            Self::Importer,
            Self::Distributor,
            Self::ProductManufacturer,
        ]
    }

    /// Returns the snake_case string identifier for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Provider => "provider",
            Self::Deployer => "deployer",
            Self::Importer => "importer",
            Self::Distributor => "distributor",
            Self::ProductManufacturer => "product_manufacturer",
        }
    }
}

impl std::fmt::Display for ValueChainRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueChainRole {
    type Err = AigisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "provider" => Ok(Self::Provider),
            "deployer" => Ok(Self::Deployer),
            "importer" => Ok(Self::Importer),
            "distributor" => Ok(Self::Distributor),
            "product_manufacturer" => Ok(Self::ProductManufacturer),
            other => Err(AigisError::UnknownEnumToken {
                field: "value_chain_role",
                token: other.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Intake mode
// ---------------------------------------------------------------------------

/// How the record entered the register.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeMode {
    /// Full intake questionnaire.
    #[default]
    Full,
    /// Abbreviated quick-capture form; follow-up tasks complete the profile.
    QuickCapture,
}

impl IntakeMode {
    /// Returns the snake_case string identifier for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::QuickCapture => "quick_capture",
        }
    }
}

impl std::fmt::Display for IntakeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Governance posture
// ---------------------------------------------------------------------------

/// Whether the people operating the system have been trained on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingStatus {
    /// Operators completed training.
    Trained,
    /// Operators have not been trained.
    NotTrained,
    /// Training is scheduled but not complete.
    Planned,
    /// Training state was never recorded.
    #[default]
    Unknown,
}

impl TrainingStatus {
    /// Returns the snake_case string identifier for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trained => "trained",
            Self::NotTrained => "not_trained",
            Self::Planned => "planned",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a persisted token, degrading unrecognized values to
    /// `Unknown` so the obligation rules treat them as an open gap.
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "trained" => Self::Trained,
            "not_trained" => Self::NotTrained,
            "planned" => Self::Planned,
            "unknown" => Self::Unknown,
            other => {
                tracing::warn!(token = other, "unrecognized training status, treating as unknown");
                Self::Unknown
            }
        }
    }
}

impl std::fmt::Display for TrainingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether post-market monitoring for the system is in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonitoringStatus {
    /// No monitoring defined.
    #[default]
    NotEstablished,
    /// Monitoring designed but not running.
    Planned,
    /// Monitoring running in production.
    Operational,
}

impl MonitoringStatus {
    /// Returns the snake_case string identifier for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotEstablished => "not_established",
            Self::Planned => "planned",
            Self::Operational => "operational",
        }
    }
}

impl std::fmt::Display for MonitoringStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether automatic event logging is configured and retained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoggingStatus {
    /// Logs are not captured or not retained.
    #[default]
    NotConfigured,
    /// Logs are captured with the required retention.
    Configured,
}

impl LoggingStatus {
    /// Returns the snake_case string identifier for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotConfigured => "not_configured",
            Self::Configured => "configured",
        }
    }
}

impl std::fmt::Display for LoggingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the vendor's instructions for use have been obtained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstructionsStatus {
    /// Instructions have not been requested.
    #[default]
    NotObtained,
    /// Instructions requested from the vendor.
    Requested,
    /// Instructions on file.
    Available,
}

impl InstructionsStatus {
    /// Returns the snake_case string identifier for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotObtained => "not_obtained",
            Self::Requested => "requested",
            Self::Available => "available",
        }
    }
}

impl std::fmt::Display for InstructionsStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a serious-incident reporting process exists for the system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentProcessStatus {
    /// No process defined.
    #[default]
    NotDefined,
    /// Process documented and owned.
    Defined,
}

impl IncidentProcessStatus {
    /// Returns the snake_case string identifier for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotDefined => "not_defined",
            Self::Defined => "defined",
        }
    }
}

impl std::fmt::Display for IncidentProcessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registration state in the public high-risk database.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    /// Not registered.
    #[default]
    NotRegistered,
    /// Registration submitted, awaiting confirmation.
    InProgress,
    /// Registration confirmed.
    Registered,
    /// Registration determined not to apply to this system.
    NotRequired,
}

impl RegistrationStatus {
    /// Whether the registration obligation is already discharged.
    pub fn is_satisfied(&self) -> bool {
        matches!(self, Self::Registered | Self::NotRequired)
    }

    /// Returns the snake_case string identifier for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotRegistered => "not_registered",
            Self::InProgress => "in_progress",
            Self::Registered => "registered",
            Self::NotRequired => "not_required",
        }
    }
}

impl std::fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FRIA
// ---------------------------------------------------------------------------

/// Progress of the fundamental-rights impact assessment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FriaStatus {
    /// Not started.
    #[default]
    NotStarted,
    /// Assessment underway.
    InProgress,
    /// Assessment complete.
    Completed,
    /// Assessment determined not to apply.
    NotRequired,
}

impl FriaStatus {
    /// Whether an assessment is still outstanding.
    pub fn is_outstanding(&self) -> bool {
        matches!(self, Self::NotStarted | Self::InProgress)
    }

    /// Returns the snake_case string identifier for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::NotRequired => "not_required",
        }
    }
}

impl std::fmt::Display for FriaStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored outcome of the wizard's FRIA trigger check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FriaTriggerResult {
    /// An assessment is required.
    Required,
    /// No assessment required.
    NotRequired,
}

impl FriaTriggerResult {
    /// Returns the snake_case string identifier for this result.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::NotRequired => "not_required",
        }
    }
}

impl std::fmt::Display for FriaTriggerResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
