//! # Reassessment Trigger
//!
//! A narrower sibling of the modification detector: it watches two
//! fields — vendor reference and lifecycle status — with
//! transition-sensitive rules rather than plain inequality.
//!
//! A vendor change always triggers, with a reason that says whether a
//! vendor was assigned, removed, or swapped. A lifecycle change
//! triggers **only** when the system enters production (`* → live`) or
//! leaves service (`* → retired`); intermediate moves such as
//! `idea → pilot` do not. Reassessment is not "any status change" — it
//! is "entering production or leaving service".
//!
//! ## Flag state machine
//!
//! ```text
//! CLEAR ──raise(nonempty triggers)──▶ FLAGGED ──dismiss()──▶ CLEAR
//! ```
//!
//! `raise` with an empty trigger list is a no-op: the flag records
//! "something changed that a human should look at", so a later snapshot
//! reverting the triggering field never clears it. Only explicit
//! dismissal or re-classification clears — and both happen outside the
//! engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use aigis_core::{AigisError, LifecycleStatus, Snapshot};

/// One reason the current classification should be revisited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReassessmentTrigger {
    /// The watched field that changed.
    pub field: String,
    /// Human-readable explanation of the change.
    pub reason: String,
}

impl ReassessmentTrigger {
    fn new(field: &str, reason: String) -> Self {
        Self {
            field: field.to_string(),
            reason,
        }
    }
}

/// Detect reassessment triggers between an old and a new snapshot.
///
/// Pure and reflexive: identical snapshots produce no triggers.
pub fn detect_reassessment_triggers(old: &Snapshot, new: &Snapshot) -> Vec<ReassessmentTrigger> {
    let mut triggers = Vec::new();

    match (&old.vendor_id, &new.vendor_id) {
        (None, Some(vendor)) => triggers.push(ReassessmentTrigger::new(
            "vendor_id",
            format!("vendor {vendor} assigned where none was recorded"),
        )),
        (Some(vendor), None) => triggers.push(ReassessmentTrigger::new(
            "vendor_id",
            format!("vendor {vendor} removed"),
        )),
        (Some(before), Some(after)) if before != after => triggers.push(ReassessmentTrigger::new(
            "vendor_id",
            format!("vendor changed from {before} to {after}"),
        )),
        _ => {}
    }

    if old.lifecycle_status != new.lifecycle_status {
        match new.lifecycle_status {
            LifecycleStatus::Live => triggers.push(ReassessmentTrigger::new(
                "lifecycle_status",
                format!(
                    "system entered production ({} -> live)",
                    old.lifecycle_status
                ),
            )),
            LifecycleStatus::Retired => triggers.push(ReassessmentTrigger::new(
                "lifecycle_status",
                format!(
                    "system retired from service ({} -> retired)",
                    old.lifecycle_status
                ),
            )),
            // Intermediate transitions carry no regulatory significance.
            LifecycleStatus::Idea | LifecycleStatus::Pilot => {}
        }
    }

    triggers
}

/// State of a classification's reassessment flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReassessmentState {
    /// Nothing outstanding.
    #[default]
    Clear,
    /// A human must revisit the classification.
    Flagged,
}

/// The reassessment flag attached to a classification.
///
/// Exactly one per system; the shell replaces it wholesale on each
/// evaluation rather than merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReassessmentFlag {
    /// Current state.
    pub state: ReassessmentState,
    /// Why the flag was raised, when it is.
    pub reason: Option<String>,
    /// When the flag was raised, when it is.
    pub flagged_at: Option<DateTime<Utc>>,
}

impl ReassessmentFlag {
    /// A clear flag.
    pub fn clear() -> Self {
        Self::default()
    }

    /// Whether the flag is currently raised.
    pub fn is_flagged(&self) -> bool {
        self.state == ReassessmentState::Flagged
    }

    /// Raise the flag for a nonempty trigger list.
    ///
    /// With no triggers this returns the flag unchanged — in particular
    /// it never clears an already-raised flag, even when the latest
    /// snapshot pair is quiet. The `as_of` evaluation time is supplied
    /// by the caller; the engine reads no clock.
    pub fn raise(&self, triggers: &[ReassessmentTrigger], as_of: DateTime<Utc>) -> Self {
        if triggers.is_empty() {
            return self.clone();
        }

        let reasons: Vec<&str> = triggers.iter().map(|t| t.reason.as_str()).collect();
        Self {
            state: ReassessmentState::Flagged,
            reason: Some(reasons.join("; ")),
            flagged_at: Some(as_of),
        }
    }

    /// Explicitly dismiss a raised flag.
    ///
    /// This is the external review action; dismissing a clear flag is a
    /// caller error.
    pub fn dismiss(&self) -> Result<Self, AigisError> {
        if !self.is_flagged() {
            return Err(AigisError::InvalidTransition(
                "cannot dismiss a clear reassessment flag".to_string(),
            ));
        }
        Ok(Self::clear())
    }
}
