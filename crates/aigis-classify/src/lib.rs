//! # aigis-classify — Classification Evaluator
//!
//! Maps an AI-system [`Snapshot`](aigis_core::Snapshot) to a
//! [`RiskClassification`]: the overall risk tier plus the four
//! sub-verdicts (AI-definition test, prohibited-practice screen,
//! high-risk screen, transparency screen) that justify it.
//!
//! ## Determinism
//!
//! [`classify`] is pure: no clock, no randomness, no I/O. Given an
//! identical snapshot it produces an identical classification,
//! including sub-verdict ordering. This is what makes re-classification
//! safe to run on every save.
//!
//! ## Conservative Screening Policy
//!
//! Unresolved answers escalate: `unsure` triggers the prohibited and
//! high-risk screens exactly as `yes` does, and unanswered required
//! screens resolve to `needs_review` rather than a lower tier.
//! Classification never throws for incomplete data — it always returns
//! an answer, possibly a conservative one.

pub mod evaluator;
pub mod verdict;

pub use evaluator::{
    classify, screen_ai_definition, screen_high_risk, screen_prohibited, screen_transparency,
};
pub use verdict::{
    AiDefinitionVerdict, HighRiskVerdict, ProhibitedVerdict, RiskClassification,
    TransparencyVerdict,
};
