//! # Substantial Modification Detector
//!
//! Compares two snapshots of the same system over a fixed allow-list of
//! conformity-relevant fields. Only changes that plausibly affect
//! conformity count — the allow-list, not the whole record. Each field
//! has its own comparison: text fields normalize empty-vs-absent, array
//! fields compare as sets, enum fields compare exactly.
//!
//! Every detected modification defaults to `requires_new_conformity =
//! true`. Downstream human review may waive it; the engine never
//! assumes "no impact".

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeSet;
use std::str::FromStr;

use aigis_core::{AigisError, Snapshot};

/// What kind of substantial modification a field change represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModificationType {
    /// The underlying foundation model changed.
    ModelChange,
    /// The intended purpose changed.
    IntendedPurposeChange,
    /// The vendor relationship changed.
    VendorChange,
    /// Any other allow-listed field changed.
    SubstantialModification,
}

impl ModificationType {
    /// Returns the snake_case string identifier for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ModelChange => "model_change",
            Self::IntendedPurposeChange => "intended_purpose_change",
            Self::VendorChange => "vendor_change",
            Self::SubstantialModification => "substantial_modification",
        }
    }
}

impl std::fmt::Display for ModificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModificationType {
    type Err = AigisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "model_change" => Ok(Self::ModelChange),
            "intended_purpose_change" => Ok(Self::IntendedPurposeChange),
            "vendor_change" => Ok(Self::VendorChange),
            "substantial_modification" => Ok(Self::SubstantialModification),
            other => Err(AigisError::UnknownEnumToken {
                field: "modification_type",
                token: other.to_string(),
            }),
        }
    }
}

/// Review state of a detected modification.
///
/// The engine always emits `Pending`; every later state is set by human
/// review in the shell, never by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModificationStatus {
    /// Awaiting review.
    #[default]
    Pending,
    /// Under review.
    InProgress,
    /// Conformity work completed.
    Complete,
    /// Reviewed and waived.
    Waived,
}

impl ModificationStatus {
    /// Returns the snake_case string identifier for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Complete => "complete",
            Self::Waived => "waived",
        }
    }
}

impl std::fmt::Display for ModificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected material change between two snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modification {
    /// Name of the changed field.
    pub field: String,
    /// The prior value.
    pub old_value: serde_json::Value,
    /// The new value.
    pub new_value: serde_json::Value,
    /// What kind of modification this is.
    pub modification_type: ModificationType,
    /// Whether new conformity work is required. Always `true` from the
    /// engine; review may waive it.
    pub requires_new_conformity: bool,
    /// Review state. Always `Pending` from the engine.
    pub status: ModificationStatus,
}

impl Modification {
    fn new(
        field: &str,
        old_value: serde_json::Value,
        new_value: serde_json::Value,
        modification_type: ModificationType,
    ) -> Self {
        Self {
            field: field.to_string(),
            old_value,
            new_value,
            modification_type,
            requires_new_conformity: true,
            status: ModificationStatus::Pending,
        }
    }
}

/// Normalize an optional text field: absent and empty are the same value.
fn norm_text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("").trim()
}

/// Normalize a string-array field to a set: trim entries, drop empties.
fn norm_set(values: &[String]) -> BTreeSet<String> {
    values
        .iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

/// Detect substantial modifications between an old and a new snapshot.
///
/// Pure and reflexive: `detect_modifications(x, x)` is empty for every
/// snapshot. Output order follows the allow-list, so it is stable for
/// the append-only modification history the shell keeps.
pub fn detect_modifications(old: &Snapshot, new: &Snapshot) -> Vec<Modification> {
    let mut modifications = Vec::new();

    if norm_text(&old.foundation_model) != norm_text(&new.foundation_model) {
        modifications.push(Modification::new(
            "foundation_model",
            json!(old.foundation_model),
            json!(new.foundation_model),
            ModificationType::ModelChange,
        ));
    }

    if norm_text(&old.purpose_category) != norm_text(&new.purpose_category) {
        modifications.push(Modification::new(
            "purpose_category",
            json!(old.purpose_category),
            json!(new.purpose_category),
            ModificationType::IntendedPurposeChange,
        ));
    }

    if old.vendor_id != new.vendor_id {
        modifications.push(Modification::new(
            "vendor_id",
            json!(old.vendor_id),
            json!(new.vendor_id),
            ModificationType::VendorChange,
        ));
    }

    let old_roles: BTreeSet<_> = old.value_chain_roles.iter().copied().collect();
    let new_roles: BTreeSet<_> = new.value_chain_roles.iter().copied().collect();
    if old_roles != new_roles {
        modifications.push(Modification::new(
            "value_chain_roles",
            json!(old_roles),
            json!(new_roles),
            ModificationType::SubstantialModification,
        ));
    }

    if norm_set(&old.affected_groups) != norm_set(&new.affected_groups) {
        modifications.push(Modification::new(
            "affected_groups",
            json!(norm_set(&old.affected_groups)),
            json!(norm_set(&new.affected_groups)),
            ModificationType::SubstantialModification,
        ));
    }

    if old.highrisk_screening_result != new.highrisk_screening_result {
        modifications.push(Modification::new(
            "highrisk_screening_result",
            json!(old.highrisk_screening_result),
            json!(new.highrisk_screening_result),
            ModificationType::SubstantialModification,
        ));
    }

    if old.current_risk_level != new.current_risk_level {
        modifications.push(Modification::new(
            "current_risk_level",
            json!(old.current_risk_level),
            json!(new.current_risk_level),
            ModificationType::SubstantialModification,
        ));
    }

    if !modifications.is_empty() {
        tracing::debug!(
            system = %new.system_id,
            count = modifications.len(),
            "detected substantial modifications"
        );
    }

    modifications
}

#[cfg(test)]
mod tests {
    use super::*;
    use aigis_core::{
        HighRiskScreeningResult, RiskLevel, ScreeningAnswer, SystemId, ValueChainRole, VendorId,
    };

    fn base_snapshot() -> Snapshot {
        Snapshot::new(SystemId::new())
            .with_foundation_model(Some("mistral-large".into()))
            .with_purpose_category(Some("recruitment_screening".into()))
            .with_roles(vec![ValueChainRole::Deployer, ValueChainRole::Provider])
            .with_affected_groups(vec!["applicants".into(), "employees".into()])
            .with_highrisk_result(HighRiskScreeningResult::HighRiskAnnexIii)
            .with_risk_level(RiskLevel::HighRisk)
    }

    #[test]
    fn identical_snapshots_produce_nothing() {
        let snap = base_snapshot();
        assert!(detect_modifications(&snap, &snap).is_empty());

        // Also holds for an entirely blank record.
        let blank = Snapshot::new(SystemId::new());
        assert!(detect_modifications(&blank, &blank).is_empty());
    }

    #[test]
    fn non_allowlisted_changes_are_ignored() {
        let old = base_snapshot();
        let new = old
            .clone()
            .with_high_risk_product(ScreeningAnswer::Yes)
            .with_public_authority(ScreeningAnswer::Yes);
        assert!(detect_modifications(&old, &new).is_empty());
    }

    #[test]
    fn foundation_model_change_is_model_change() {
        let old = base_snapshot();
        let new = old.clone().with_foundation_model(Some("gpt-5".into()));
        let mods = detect_modifications(&old, &new);
        assert_eq!(mods.len(), 1);
        assert_eq!(mods[0].field, "foundation_model");
        assert_eq!(mods[0].modification_type, ModificationType::ModelChange);
        assert!(mods[0].requires_new_conformity);
        assert_eq!(mods[0].status, ModificationStatus::Pending);
    }

    #[test]
    fn empty_and_absent_text_are_equivalent() {
        let old = base_snapshot().with_foundation_model(None);
        let new = old.clone().with_foundation_model(Some("".into()));
        assert!(detect_modifications(&old, &new).is_empty());

        let padded = old.clone().with_foundation_model(Some("   ".into()));
        assert!(detect_modifications(&old, &padded).is_empty());
    }

    #[test]
    fn purpose_change_is_intended_purpose_change() {
        let old = base_snapshot();
        let new = old
            .clone()
            .with_purpose_category(Some("credit_scoring".into()));
        let mods = detect_modifications(&old, &new);
        assert_eq!(mods.len(), 1);
        assert_eq!(
            mods[0].modification_type,
            ModificationType::IntendedPurposeChange
        );
    }

    #[test]
    fn vendor_assignment_is_vendor_change() {
        let old = base_snapshot().with_vendor(None);
        let new = old.clone().with_vendor(Some(VendorId::new()));
        let mods = detect_modifications(&old, &new);
        assert_eq!(mods.len(), 1);
        assert_eq!(mods[0].field, "vendor_id");
        assert_eq!(mods[0].modification_type, ModificationType::VendorChange);
        assert!(mods[0].requires_new_conformity);
        assert_eq!(mods[0].old_value, serde_json::Value::Null);
    }

    #[test]
    fn role_reorder_is_not_a_modification() {
        let old = base_snapshot().with_roles(vec![
            ValueChainRole::Deployer,
            ValueChainRole::Provider,
        ]);
        let new = old.clone().with_roles(vec![
            ValueChainRole::Provider,
            ValueChainRole::Deployer,
        ]);
        assert!(detect_modifications(&old, &new).is_empty());
    }

    #[test]
    fn role_set_change_is_substantial() {
        let old = base_snapshot();
        let new = old.clone().with_roles(vec![ValueChainRole::Deployer]);
        let mods = detect_modifications(&old, &new);
        assert_eq!(mods.len(), 1);
        assert_eq!(mods[0].field, "value_chain_roles");
        assert_eq!(
            mods[0].modification_type,
            ModificationType::SubstantialModification
        );
    }

    #[test]
    fn affected_groups_compare_as_normalized_sets() {
        let old = base_snapshot().with_affected_groups(vec![
            "applicants".into(),
            "employees".into(),
        ]);
        // Reordered, padded, with a stray empty entry: same set.
        let new = old.clone().with_affected_groups(vec![
            " employees ".into(),
            "applicants".into(),
            "".into(),
        ]);
        assert!(detect_modifications(&old, &new).is_empty());

        let grown = old
            .clone()
            .with_affected_groups(vec!["applicants".into(), "employees".into(), "minors".into()]);
        let mods = detect_modifications(&old, &grown);
        assert_eq!(mods.len(), 1);
        assert_eq!(mods[0].field, "affected_groups");
    }

    #[test]
    fn screening_result_change_is_substantial() {
        let old = base_snapshot();
        let new = old
            .clone()
            .with_highrisk_result(HighRiskScreeningResult::NotHighRisk);
        let mods = detect_modifications(&old, &new);
        assert_eq!(mods.len(), 1);
        assert_eq!(mods[0].field, "highrisk_screening_result");
        assert_eq!(mods[0].new_value, json!("not_high_risk"));
    }

    #[test]
    fn classification_change_is_substantial() {
        let old = base_snapshot();
        let new = old.clone().with_risk_level(RiskLevel::LimitedRisk);
        let mods = detect_modifications(&old, &new);
        assert_eq!(mods.len(), 1);
        assert_eq!(mods[0].field, "current_risk_level");
    }

    #[test]
    fn multiple_changes_follow_allowlist_order() {
        let old = base_snapshot();
        let new = old
            .clone()
            .with_foundation_model(Some("claude-4".into()))
            .with_vendor(Some(VendorId::new()))
            .with_risk_level(RiskLevel::MinimalRisk);
        let mods = detect_modifications(&old, &new);
        let fields: Vec<&str> = mods.iter().map(|m| m.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["foundation_model", "vendor_id", "current_risk_level"]
        );
    }

    #[test]
    fn modification_serde_roundtrip() {
        let old = base_snapshot();
        let new = old.clone().with_foundation_model(Some("other".into()));
        let mods = detect_modifications(&old, &new);
        let json = serde_json::to_string(&mods).unwrap();
        let parsed: Vec<Modification> = serde_json::from_str(&json).unwrap();
        assert_eq!(mods, parsed);
    }
}
