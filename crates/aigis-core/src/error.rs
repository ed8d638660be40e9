//! # Error Types
//!
//! Errors for the AIGIS engine. The evaluation functions themselves
//! never return errors — incomplete or inconsistent business data
//! resolves to a conservative verdict, not a failure. The variants here
//! cover the two residual cases: strict parsing of persisted enum
//! tokens at the shell boundary, and misuse of the reassessment-flag
//! state machine.

use thiserror::Error;

/// Top-level error type for the AIGIS engine.
#[derive(Error, Debug)]
pub enum AigisError {
    /// A persisted string is outside the closed vocabulary for its field.
    ///
    /// Raised only by the strict `FromStr` parsers. The lenient parsers
    /// degrade to a conservative value instead.
    #[error("unknown {field} token: {token:?}")]
    UnknownEnumToken {
        /// The field whose vocabulary was violated.
        field: &'static str,
        /// The offending token.
        token: String,
    },

    /// A reassessment-flag transition was requested that the state
    /// machine does not permit.
    #[error("invalid reassessment flag transition: {0}")]
    InvalidTransition(String),
}
