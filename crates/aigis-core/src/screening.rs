//! # Screening Question Taxonomies
//!
//! The fixed question batteries the intake wizard runs, one enum per
//! screen, plus the verdict vocabularies each screen resolves to. These
//! are the ONE definition used across the engine — every `match` over a
//! practice or category is exhaustive, so adding a question forces every
//! consumer to handle it at compile time.
//!
//! Question keys never change once records reference them: the stored
//! answer maps are keyed by these identifiers, and the modification
//! detector compares across snapshots taken months apart.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AigisError;

// ---------------------------------------------------------------------------
// Prohibited practices
// ---------------------------------------------------------------------------

/// The eight prohibited-practice screening questions.
///
/// Each variant corresponds to one Article-5-style practice. An
/// affirmative (or unresolved) answer to any of them forces the
/// `Prohibited` tier regardless of every other screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProhibitedPractice {
    /// Subliminal or purposefully manipulative techniques that distort behavior.
    SubliminalManipulation,
    /// Exploiting vulnerabilities of age, disability, or social situation.
    ExploitingVulnerabilities,
    /// Social scoring leading to detrimental or disproportionate treatment.
    SocialScoring,
    /// Predicting criminal behavior solely from profiling or personality traits.
    PredictiveProfiling,
    /// Untargeted scraping of facial images to build recognition databases.
    FacialScraping,
    /// Emotion inference in workplace or education settings.
    EmotionInference,
    /// Biometric categorization by sensitive attributes.
    BiometricCategorization,
    /// Real-time remote biometric identification in publicly accessible spaces.
    RealtimeRemoteBiometricId,
}

/// Total number of prohibited-practice questions. A screen is complete
/// only when all of them are answered.
pub const PROHIBITED_PRACTICE_COUNT: usize = 8;

impl ProhibitedPractice {
    /// Returns all prohibited practices in canonical order.
    pub fn all() -> &'static [ProhibitedPractice] {
        &[
            Self::SubliminalManipulation,
            Self::ExploitingVulnerabilities,
            Self::SocialScoring,
            Self::PredictiveProfiling,
            Self::FacialScraping,
            Self::EmotionInference,
            Self::BiometricCategorization,
            Self::RealtimeRemoteBiometricId,
        ]
    }

    /// Returns the snake_case string identifier for this practice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SubliminalManipulation => "subliminal_manipulation",
            Self::ExploitingVulnerabilities => "exploiting_vulnerabilities",
            Self::SocialScoring => "social_scoring",
            Self::PredictiveProfiling => "predictive_profiling",
            Self::FacialScraping => "facial_scraping",
            Self::EmotionInference => "emotion_inference",
            Self::BiometricCategorization => "biometric_categorization",
            Self::RealtimeRemoteBiometricId => "realtime_remote_biometric_id",
        }
    }
}

impl std::fmt::Display for ProhibitedPractice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// High-risk categories
// ---------------------------------------------------------------------------

/// The eight high-risk area screening questions (Annex-III-style).
///
/// An affirmative answer to any of them — absent a prohibited match —
/// resolves the system to the `HighRisk` tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighRiskCategory {
    /// Biometric identification and categorization of natural persons.
    BiometricIdentification,
    /// Safety components of critical infrastructure.
    CriticalInfrastructure,
    /// Education and vocational training (access, assessment, proctoring).
    EducationVocational,
    /// Employment, worker management, access to self-employment.
    EmploymentWorkers,
    /// Access to essential private and public services (credit, benefits).
    EssentialServices,
    /// Law enforcement use cases.
    LawEnforcement,
    /// Migration, asylum, and border control management.
    MigrationBorderControl,
    /// Administration of justice and democratic processes.
    JusticeDemocracy,
}

impl HighRiskCategory {
    /// Returns all high-risk categories in canonical order.
    pub fn all() -> &'static [HighRiskCategory] {
        &[
            Self::BiometricIdentification,
            Self::CriticalInfrastructure,
            Self::EducationVocational,
            Self::EmploymentWorkers,
            Self::EssentialServices,
            Self::LawEnforcement,
            Self::MigrationBorderControl,
            Self::JusticeDemocracy,
        ]
    }

    /// Returns the snake_case string identifier for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BiometricIdentification => "biometric_identification",
            Self::CriticalInfrastructure => "critical_infrastructure",
            Self::EducationVocational => "education_vocational",
            Self::EmploymentWorkers => "employment_workers",
            Self::EssentialServices => "essential_services",
            Self::LawEnforcement => "law_enforcement",
            Self::MigrationBorderControl => "migration_border_control",
            Self::JusticeDemocracy => "justice_democracy",
        }
    }
}

impl std::fmt::Display for HighRiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Transparency scenarios
// ---------------------------------------------------------------------------

/// The four transparency-obligation screening questions.
///
/// A confirmed scenario — on an otherwise minimal-risk system — resolves
/// to the `LimitedRisk` tier with disclosure obligations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransparencyScenario {
    /// The system interacts directly with natural persons (chatbots, voice agents).
    InteractsWithPersons,
    /// The system generates synthetic audio, image, video, or text content.
    SyntheticContent,
    /// Persons are exposed to emotion recognition or biometric categorization.
    EmotionRecognitionExposure,
    /// The system generates or manipulates deepfake content.
    DeepfakeGeneration,
}

impl TransparencyScenario {
    /// Returns all transparency scenarios in canonical order.
    pub fn all() -> &'static [TransparencyScenario] {
        &[
            Self::InteractsWithPersons,
            Self::SyntheticContent,
            Self::EmotionRecognitionExposure,
            Self::DeepfakeGeneration,
        ]
    }

    /// Returns the snake_case string identifier for this scenario.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InteractsWithPersons => "interacts_with_persons",
            Self::SyntheticContent => "synthetic_content",
            Self::EmotionRecognitionExposure => "emotion_recognition_exposure",
            Self::DeepfakeGeneration => "deepfake_generation",
        }
    }
}

impl std::fmt::Display for TransparencyScenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AI-definition criteria
// ---------------------------------------------------------------------------

/// The machine-system criteria of the AI-definition test.
///
/// The register tracks software systems of all kinds; these questions
/// decide whether a record is an AI system at all. A system answering
/// `No` to every criterion falls outside the risk taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiDefinitionCriterion {
    /// Infers outputs (predictions, content, recommendations, decisions)
    /// from the inputs it receives.
    InfersFromInputs,
    /// Operates with some level of autonomy once deployed.
    AutonomyLevel,
    /// May adapt its behavior after deployment.
    AdaptiveBehavior,
}

impl AiDefinitionCriterion {
    /// Returns all AI-definition criteria in canonical order.
    pub fn all() -> &'static [AiDefinitionCriterion] {
        &[
            Self::InfersFromInputs,
            Self::AutonomyLevel,
            Self::AdaptiveBehavior,
        ]
    }

    /// Returns the snake_case string identifier for this criterion.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InfersFromInputs => "infers_from_inputs",
            Self::AutonomyLevel => "autonomy_level",
            Self::AdaptiveBehavior => "adaptive_behavior",
        }
    }
}

impl std::fmt::Display for AiDefinitionCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Stored screening verdicts
// ---------------------------------------------------------------------------

/// Outcome of the AI-definition test, persisted on the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiDefinitionResult {
    /// The record meets the AI-system definition.
    AiSystem,
    /// The record is conventional software; the risk taxonomy does not apply.
    NotAiSystem,
    /// The test could not be resolved from the answers given.
    Inconclusive,
}

/// Outcome of the prohibited-practice screen, persisted on the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProhibitedScreeningResult {
    /// Every practice was ruled out.
    NotProhibited,
    /// At least one practice could not be ruled out.
    PotentialProhibited,
}

/// Outcome of the high-risk screen, persisted on the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighRiskScreeningResult {
    /// No high-risk category applies.
    NotHighRisk,
    /// At least one Annex-III-style category applies.
    HighRiskAnnexIii,
    /// The system is a regulated-product safety component.
    HighRiskProduct,
}

impl HighRiskScreeningResult {
    /// Whether this verdict places the system in the high-risk tier.
    pub fn is_high_risk(&self) -> bool {
        matches!(self, Self::HighRiskAnnexIii | Self::HighRiskProduct)
    }
}

/// Outcome of the transparency screen, persisted on the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransparencyScreeningResult {
    /// No disclosure scenario applies.
    NoObligation,
    /// At least one disclosure scenario applies.
    TransparencyRequired,
}

impl AiDefinitionResult {
    /// Returns the snake_case string identifier for this verdict.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AiSystem => "ai_system",
            Self::NotAiSystem => "not_ai_system",
            Self::Inconclusive => "inconclusive",
        }
    }
}

impl std::fmt::Display for AiDefinitionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AiDefinitionResult {
    type Err = AigisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ai_system" => Ok(Self::AiSystem),
            "not_ai_system" => Ok(Self::NotAiSystem),
            "inconclusive" => Ok(Self::Inconclusive),
            other => Err(AigisError::UnknownEnumToken {
                field: "ai_definition_result",
                token: other.to_string(),
            }),
        }
    }
}

impl ProhibitedScreeningResult {
    /// Returns the snake_case string identifier for this verdict.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotProhibited => "not_prohibited",
            Self::PotentialProhibited => "potential_prohibited",
        }
    }
}

impl std::fmt::Display for ProhibitedScreeningResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProhibitedScreeningResult {
    type Err = AigisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_prohibited" => Ok(Self::NotProhibited),
            "potential_prohibited" => Ok(Self::PotentialProhibited),
            other => Err(AigisError::UnknownEnumToken {
                field: "prohibited_screening_result",
                token: other.to_string(),
            }),
        }
    }
}

impl HighRiskScreeningResult {
    /// Returns the snake_case string identifier for this verdict.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotHighRisk => "not_high_risk",
            Self::HighRiskAnnexIii => "high_risk_annex_iii",
            Self::HighRiskProduct => "high_risk_product",
        }
    }
}

impl std::fmt::Display for HighRiskScreeningResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HighRiskScreeningResult {
    type Err = AigisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_high_risk" => Ok(Self::NotHighRisk),
            "high_risk_annex_iii" => Ok(Self::HighRiskAnnexIii),
            "high_risk_product" => Ok(Self::HighRiskProduct),
            other => Err(AigisError::UnknownEnumToken {
                field: "highrisk_screening_result",
                token: other.to_string(),
            }),
        }
    }
}

impl TransparencyScreeningResult {
    /// Returns the snake_case string identifier for this verdict.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoObligation => "no_obligation",
            Self::TransparencyRequired => "transparency_required",
        }
    }
}

impl std::fmt::Display for TransparencyScreeningResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransparencyScreeningResult {
    type Err = AigisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no_obligation" => Ok(Self::NoObligation),
            "transparency_required" => Ok(Self::TransparencyRequired),
            other => Err(AigisError::UnknownEnumToken {
                field: "transparency_screening_result",
                token: other.to_string(),
            }),
        }
    }
}
