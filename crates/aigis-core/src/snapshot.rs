//! # System Snapshot
//!
//! The immutable value type describing one AI system's classification-
//! relevant state at an instant. A snapshot is created once per wizard
//! submission and superseded — never mutated — on every edit, so the
//! modification detector and the reassessment trigger always compare an
//! `(old, new)` pair of frozen records.
//!
//! Answer maps use `BTreeMap` so iteration order is deterministic; a
//! question absent from its map reads as [`ScreeningAnswer::Unknown`].
//!
//! The `with_*` constructors exist for the orchestration shell and for
//! tests; they consume `self` so a snapshot is only ever assembled, not
//! edited in place.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::answer::ScreeningAnswer;
use crate::identity::{MemberId, SystemId, VendorId};
use crate::risk::RiskLevel;
use crate::screening::{
    AiDefinitionCriterion, AiDefinitionResult, HighRiskCategory, HighRiskScreeningResult,
    ProhibitedPractice, ProhibitedScreeningResult, TransparencyScenario,
    TransparencyScreeningResult,
};
use crate::status::{
    FriaStatus, FriaTriggerResult, IncidentProcessStatus, InstructionsStatus, IntakeMode,
    LifecycleStatus, LoggingStatus, MonitoringStatus, RegistrationStatus, TrainingStatus,
    ValueChainRole,
};

/// Point-in-time record of one AI system's classification-relevant state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The system this snapshot describes.
    pub system_id: SystemId,
    /// Lifecycle stage at capture time.
    pub lifecycle_status: LifecycleStatus,
    /// Upstream vendor, if the system is bought rather than built.
    pub vendor_id: Option<VendorId>,
    /// Roles the organization holds for this system. Set semantics —
    /// element order carries no meaning.
    pub value_chain_roles: Vec<ValueChainRole>,
    /// Whether the record came through the full or abbreviated wizard.
    pub intake_mode: IntakeMode,
    /// Intended-purpose taxonomy label. Compared across snapshots,
    /// never branched on.
    pub purpose_category: Option<String>,
    /// Groups of people affected by the system. Set semantics.
    pub affected_groups: Vec<String>,
    /// Reference to the underlying foundation model, if any.
    pub foundation_model: Option<String>,

    /// AI-definition test answers.
    pub ai_definition_answers: BTreeMap<AiDefinitionCriterion, ScreeningAnswer>,
    /// Prohibited-practice screen answers.
    pub prohibited_answers: BTreeMap<ProhibitedPractice, ScreeningAnswer>,
    /// High-risk area screen answers.
    pub highrisk_answers: BTreeMap<HighRiskCategory, ScreeningAnswer>,
    /// Explicit regulated-product safety-component marker.
    pub high_risk_product: ScreeningAnswer,
    /// Transparency scenario answers.
    pub transparency_answers: BTreeMap<TransparencyScenario, ScreeningAnswer>,

    /// Stored AI-definition verdict from the last evaluation.
    pub ai_definition_result: Option<AiDefinitionResult>,
    /// Stored prohibited-screen verdict from the last evaluation.
    pub prohibited_screening_result: Option<ProhibitedScreeningResult>,
    /// Stored high-risk-screen verdict from the last evaluation.
    pub highrisk_screening_result: Option<HighRiskScreeningResult>,
    /// Stored transparency-screen verdict from the last evaluation.
    pub transparency_screening_result: Option<TransparencyScreeningResult>,

    /// Member accountable for human oversight, once assigned.
    pub oversight_owner: Option<MemberId>,
    /// Operator training state.
    pub operators_trained: TrainingStatus,
    /// Post-market monitoring state.
    pub monitoring_status: MonitoringStatus,
    /// Automatic log retention state.
    pub logging_status: LoggingStatus,
    /// Vendor instructions-for-use state.
    pub instructions_status: InstructionsStatus,
    /// Serious-incident process state.
    pub incident_process: IncidentProcessStatus,
    /// Public high-risk database registration state.
    pub registration_status: RegistrationStatus,

    /// Fundamental-rights impact assessment progress.
    pub fria_status: FriaStatus,
    /// Whether the deployer is a public authority.
    pub is_public_authority: ScreeningAnswer,
    /// Whether the system is used to provide a public service.
    pub provides_public_service: ScreeningAnswer,
    /// Stored outcome of the wizard's FRIA trigger check.
    pub fria_trigger_result: Option<FriaTriggerResult>,

    /// The risk tier persisted by the last classification run.
    pub current_risk_level: Option<RiskLevel>,
}

impl Snapshot {
    /// Create a blank snapshot for a system: idea stage, full intake,
    /// every screen unanswered, no governance work recorded.
    pub fn new(system_id: SystemId) -> Self {
        Self {
            system_id,
            lifecycle_status: LifecycleStatus::Idea,
            vendor_id: None,
            value_chain_roles: Vec::new(),
            intake_mode: IntakeMode::Full,
            purpose_category: None,
            affected_groups: Vec::new(),
            foundation_model: None,
            ai_definition_answers: BTreeMap::new(),
            prohibited_answers: BTreeMap::new(),
            highrisk_answers: BTreeMap::new(),
            high_risk_product: ScreeningAnswer::Unknown,
            transparency_answers: BTreeMap::new(),
            ai_definition_result: None,
            prohibited_screening_result: None,
            highrisk_screening_result: None,
            transparency_screening_result: None,
            oversight_owner: None,
            operators_trained: TrainingStatus::Unknown,
            monitoring_status: MonitoringStatus::NotEstablished,
            logging_status: LoggingStatus::NotConfigured,
            instructions_status: InstructionsStatus::NotObtained,
            incident_process: IncidentProcessStatus::NotDefined,
            registration_status: RegistrationStatus::NotRegistered,
            fria_status: FriaStatus::NotStarted,
            is_public_authority: ScreeningAnswer::Unknown,
            provides_public_service: ScreeningAnswer::Unknown,
            fria_trigger_result: None,
            current_risk_level: None,
        }
    }

    // ── Assembly ─────────────────────────────────────────────────────

    /// Set the lifecycle stage.
    pub fn with_lifecycle(mut self, status: LifecycleStatus) -> Self {
        self.lifecycle_status = status;
        self
    }

    /// Set the vendor reference.
    pub fn with_vendor(mut self, vendor: Option<VendorId>) -> Self {
        self.vendor_id = vendor;
        self
    }

    /// Set the value-chain roles.
    pub fn with_roles(mut self, roles: Vec<ValueChainRole>) -> Self {
        self.value_chain_roles = roles;
        self
    }

    /// Set the intake mode.
    pub fn with_intake_mode(mut self, mode: IntakeMode) -> Self {
        self.intake_mode = mode;
        self
    }

    /// Set the intended-purpose category label.
    pub fn with_purpose_category(mut self, category: Option<String>) -> Self {
        self.purpose_category = category;
        self
    }

    /// Set the affected groups.
    pub fn with_affected_groups(mut self, groups: Vec<String>) -> Self {
        self.affected_groups = groups;
        self
    }

    /// Set the foundation-model reference.
    pub fn with_foundation_model(mut self, model: Option<String>) -> Self {
        self.foundation_model = model;
        self
    }

    /// Record one AI-definition answer.
    pub fn with_ai_definition_answer(
        mut self,
        criterion: AiDefinitionCriterion,
        answer: ScreeningAnswer,
    ) -> Self {
        self.ai_definition_answers.insert(criterion, answer);
        self
    }

    /// Answer every AI-definition criterion the same way.
    pub fn with_ai_definition_all(mut self, answer: ScreeningAnswer) -> Self {
        for criterion in AiDefinitionCriterion::all() {
            self.ai_definition_answers.insert(*criterion, answer);
        }
        self
    }

    /// Record one prohibited-practice answer.
    pub fn with_prohibited_answer(
        mut self,
        practice: ProhibitedPractice,
        answer: ScreeningAnswer,
    ) -> Self {
        self.prohibited_answers.insert(practice, answer);
        self
    }

    /// Answer every prohibited-practice question the same way.
    pub fn with_prohibited_all(mut self, answer: ScreeningAnswer) -> Self {
        for practice in ProhibitedPractice::all() {
            self.prohibited_answers.insert(*practice, answer);
        }
        self
    }

    /// Record one high-risk category answer.
    pub fn with_highrisk_answer(
        mut self,
        category: HighRiskCategory,
        answer: ScreeningAnswer,
    ) -> Self {
        self.highrisk_answers.insert(category, answer);
        self
    }

    /// Answer every high-risk category question the same way.
    pub fn with_highrisk_all(mut self, answer: ScreeningAnswer) -> Self {
        for category in HighRiskCategory::all() {
            self.highrisk_answers.insert(*category, answer);
        }
        self
    }

    /// Set the regulated-product marker.
    pub fn with_high_risk_product(mut self, answer: ScreeningAnswer) -> Self {
        self.high_risk_product = answer;
        self
    }

    /// Record one transparency scenario answer.
    pub fn with_transparency_answer(
        mut self,
        scenario: TransparencyScenario,
        answer: ScreeningAnswer,
    ) -> Self {
        self.transparency_answers.insert(scenario, answer);
        self
    }

    /// Answer every transparency scenario the same way.
    pub fn with_transparency_all(mut self, answer: ScreeningAnswer) -> Self {
        for scenario in TransparencyScenario::all() {
            self.transparency_answers.insert(*scenario, answer);
        }
        self
    }

    /// Set the stored AI-definition verdict.
    pub fn with_ai_definition_result(mut self, result: AiDefinitionResult) -> Self {
        self.ai_definition_result = Some(result);
        self
    }

    /// Set the stored prohibited-screen verdict.
    pub fn with_prohibited_result(mut self, result: ProhibitedScreeningResult) -> Self {
        self.prohibited_screening_result = Some(result);
        self
    }

    /// Set the stored high-risk-screen verdict.
    pub fn with_highrisk_result(mut self, result: HighRiskScreeningResult) -> Self {
        self.highrisk_screening_result = Some(result);
        self
    }

    /// Set the stored transparency-screen verdict.
    pub fn with_transparency_result(mut self, result: TransparencyScreeningResult) -> Self {
        self.transparency_screening_result = Some(result);
        self
    }

    /// Set the oversight owner.
    pub fn with_oversight_owner(mut self, owner: Option<MemberId>) -> Self {
        self.oversight_owner = owner;
        self
    }

    /// Set the operator training state.
    pub fn with_operators_trained(mut self, status: TrainingStatus) -> Self {
        self.operators_trained = status;
        self
    }

    /// Set the monitoring state.
    pub fn with_monitoring(mut self, status: MonitoringStatus) -> Self {
        self.monitoring_status = status;
        self
    }

    /// Set the logging state.
    pub fn with_logging(mut self, status: LoggingStatus) -> Self {
        self.logging_status = status;
        self
    }

    /// Set the instructions-for-use state.
    pub fn with_instructions(mut self, status: InstructionsStatus) -> Self {
        self.instructions_status = status;
        self
    }

    /// Set the incident-process state.
    pub fn with_incident_process(mut self, status: IncidentProcessStatus) -> Self {
        self.incident_process = status;
        self
    }

    /// Set the registration state.
    pub fn with_registration(mut self, status: RegistrationStatus) -> Self {
        self.registration_status = status;
        self
    }

    /// Set the FRIA progress.
    pub fn with_fria_status(mut self, status: FriaStatus) -> Self {
        self.fria_status = status;
        self
    }

    /// Set the public-authority answer.
    pub fn with_public_authority(mut self, answer: ScreeningAnswer) -> Self {
        self.is_public_authority = answer;
        self
    }

    /// Set the public-service answer.
    pub fn with_public_service(mut self, answer: ScreeningAnswer) -> Self {
        self.provides_public_service = answer;
        self
    }

    /// Set the stored FRIA trigger outcome.
    pub fn with_fria_trigger(mut self, result: FriaTriggerResult) -> Self {
        self.fria_trigger_result = Some(result);
        self
    }

    /// Set the persisted risk tier.
    pub fn with_risk_level(mut self, level: RiskLevel) -> Self {
        self.current_risk_level = Some(level);
        self
    }

    // ── Answer access ────────────────────────────────────────────────

    /// The answer to an AI-definition criterion; `Unknown` if absent.
    pub fn ai_definition_answer(&self, criterion: AiDefinitionCriterion) -> ScreeningAnswer {
        self.ai_definition_answers
            .get(&criterion)
            .copied()
            .unwrap_or_default()
    }

    /// The answer to a prohibited-practice question; `Unknown` if absent.
    pub fn prohibited_answer(&self, practice: ProhibitedPractice) -> ScreeningAnswer {
        self.prohibited_answers
            .get(&practice)
            .copied()
            .unwrap_or_default()
    }

    /// The answer to a high-risk category question; `Unknown` if absent.
    pub fn highrisk_answer(&self, category: HighRiskCategory) -> ScreeningAnswer {
        self.highrisk_answers
            .get(&category)
            .copied()
            .unwrap_or_default()
    }

    /// The answer to a transparency scenario; `Unknown` if absent.
    pub fn transparency_answer(&self, scenario: TransparencyScenario) -> ScreeningAnswer {
        self.transparency_answers
            .get(&scenario)
            .copied()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snapshot_is_blank() {
        let snap = Snapshot::new(SystemId::new());
        assert_eq!(snap.lifecycle_status, LifecycleStatus::Idea);
        assert!(snap.vendor_id.is_none());
        assert!(snap.value_chain_roles.is_empty());
        assert_eq!(snap.operators_trained, TrainingStatus::Unknown);
        assert!(snap.current_risk_level.is_none());
    }

    #[test]
    fn test_missing_answers_read_as_unknown() {
        let snap = Snapshot::new(SystemId::new());
        assert_eq!(
            snap.prohibited_answer(ProhibitedPractice::SocialScoring),
            ScreeningAnswer::Unknown
        );
        assert_eq!(
            snap.highrisk_answer(HighRiskCategory::LawEnforcement),
            ScreeningAnswer::Unknown
        );
        assert_eq!(
            snap.ai_definition_answer(AiDefinitionCriterion::InfersFromInputs),
            ScreeningAnswer::Unknown
        );
    }

    #[test]
    fn test_with_all_fills_every_question() {
        let snap = Snapshot::new(SystemId::new())
            .with_prohibited_all(ScreeningAnswer::No)
            .with_highrisk_all(ScreeningAnswer::No)
            .with_transparency_all(ScreeningAnswer::No)
            .with_ai_definition_all(ScreeningAnswer::Yes);
        assert_eq!(snap.prohibited_answers.len(), ProhibitedPractice::all().len());
        assert_eq!(snap.highrisk_answers.len(), HighRiskCategory::all().len());
        assert_eq!(
            snap.transparency_answers.len(),
            TransparencyScenario::all().len()
        );
        for practice in ProhibitedPractice::all() {
            assert_eq!(snap.prohibited_answer(*practice), ScreeningAnswer::No);
        }
    }

    #[test]
    fn test_single_answer_overrides_batch() {
        let snap = Snapshot::new(SystemId::new())
            .with_prohibited_all(ScreeningAnswer::No)
            .with_prohibited_answer(ProhibitedPractice::SocialScoring, ScreeningAnswer::Yes);
        assert_eq!(
            snap.prohibited_answer(ProhibitedPractice::SocialScoring),
            ScreeningAnswer::Yes
        );
        assert_eq!(
            snap.prohibited_answer(ProhibitedPractice::FacialScraping),
            ScreeningAnswer::No
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let snap = Snapshot::new(SystemId::new())
            .with_lifecycle(LifecycleStatus::Live)
            .with_vendor(Some(VendorId::new()))
            .with_roles(vec![ValueChainRole::Deployer, ValueChainRole::Provider])
            .with_prohibited_all(ScreeningAnswer::No)
            .with_highrisk_answer(HighRiskCategory::EmploymentWorkers, ScreeningAnswer::Yes)
            .with_risk_level(RiskLevel::HighRisk);
        let json = serde_json::to_string(&snap).unwrap();
        let parsed: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, parsed);
    }
}
