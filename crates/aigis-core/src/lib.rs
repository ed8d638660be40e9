//! # aigis-core — Foundational Types for the AIGIS Engine
//!
//! This crate is the bedrock of the AIGIS stack. It defines the value
//! types the classification, obligation, and change-detection crates
//! share. Every other crate in the workspace depends on `aigis-core`;
//! it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** `SystemId`, `VendorId`,
//!    `MemberId` — no bare UUIDs or strings for identity.
//!
//! 2. **Closed enumerations for every screening input.** Wizard answers
//!    are `ScreeningAnswer`, never free strings, so every branch in the
//!    evaluator is exhaustive and statically checkable.
//!
//! 3. **One `RiskLevel` definition.** Severity-ordered, matched
//!    exhaustively everywhere; adding a tier forces every consumer to
//!    handle it at compile time.
//!
//! 4. **Immutable snapshots.** A `Snapshot` is assembled once and
//!    superseded on edit; the change detectors always compare two
//!    frozen records.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `aigis-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod answer;
pub mod error;
pub mod identity;
pub mod risk;
pub mod screening;
pub mod snapshot;
pub mod status;

// Re-export primary types for ergonomic imports.
pub use answer::ScreeningAnswer;
pub use error::AigisError;
pub use identity::{MemberId, SystemId, VendorId};
pub use risk::RiskLevel;
pub use screening::{
    AiDefinitionCriterion, AiDefinitionResult, HighRiskCategory, HighRiskScreeningResult,
    ProhibitedPractice, ProhibitedScreeningResult, TransparencyScenario,
    TransparencyScreeningResult, PROHIBITED_PRACTICE_COUNT,
};
pub use snapshot::Snapshot;
pub use status::{
    FriaStatus, FriaTriggerResult, IncidentProcessStatus, InstructionsStatus, IntakeMode,
    LifecycleStatus, LoggingStatus, MonitoringStatus, RegistrationStatus, TrainingStatus,
    ValueChainRole,
};
