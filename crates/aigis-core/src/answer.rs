//! # Screening Answers — Closed Enumeration
//!
//! The intake wizard asks every screening question as yes/no/unsure.
//! `ScreeningAnswer` replaces the free strings the wizard submits with a
//! closed enumeration so that every branch over an answer is exhaustive
//! and statically checkable. `Unknown` means the question was never
//! answered — it is distinct from `Unsure`, which is an explicit answer.
//!
//! ## Conservative Screening Policy
//!
//! Unresolved answers escalate: for the prohibited-practice and
//! high-risk screens, `Unsure` counts the same as `Yes`. This is the
//! single named rule [`ScreeningAnswer::is_affirmative`] — every branch
//! that escalates on uncertainty goes through it, so the bias is
//! auditable in one place.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AigisError;

/// One answer to a screening question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningAnswer {
    /// Explicit affirmative answer.
    Yes,
    /// Explicit negative answer.
    No,
    /// The respondent could not rule the concern out.
    Unsure,
    /// The question was never answered.
    #[default]
    Unknown,
}

impl ScreeningAnswer {
    /// Conservative screening policy: unresolved answers escalate.
    ///
    /// Returns `true` for `Yes` and `Unsure`. Used by every
    /// prohibited-practice and high-risk branch, so "we could not rule
    /// it out" triggers the same obligations as "yes".
    pub fn is_affirmative(&self) -> bool {
        matches!(self, Self::Yes | Self::Unsure)
    }

    /// Whether the question was answered at all.
    pub fn is_answered(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Returns the snake_case string identifier for this answer.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Unsure => "unsure",
            Self::Unknown => "unknown",
        }
    }

    /// Returns all answer variants in canonical order.
    pub fn all() -> &'static [ScreeningAnswer] {
        &[Self::Yes, Self::No, Self::Unsure, Self::Unknown]
    }

    /// Parse an answer from a persisted string, degrading unrecognized
    /// tokens to `Unsure` instead of failing.
    ///
    /// Classification must never abort a save because a legacy record
    /// holds a token outside the current vocabulary; an unrecognized
    /// token is treated as "could not rule it out". For the strict
    /// variant that rejects unknown tokens, use [`FromStr`].
    pub fn parse_lenient(s: &str) -> Self {
        match s.parse::<ScreeningAnswer>() {
            Ok(answer) => answer,
            Err(_) => {
                tracing::warn!(token = s, "unrecognized screening answer, treating as unsure");
                Self::Unsure
            }
        }
    }
}

impl std::fmt::Display for ScreeningAnswer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScreeningAnswer {
    type Err = AigisError;

    /// Parse an answer from its snake_case identifier. Rejects anything
    /// outside the closed vocabulary — use [`ScreeningAnswer::parse_lenient`]
    /// when ingesting legacy records.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            "unsure" => Ok(Self::Unsure),
            "unknown" => Ok(Self::Unknown),
            other => Err(AigisError::UnknownEnumToken {
                field: "screening_answer",
                token: other.to_string(),
            }),
        }
    }
}
