//! # aigis-delta — Change Detection
//!
//! Compares `(old, new)` pairs of immutable snapshots and derives two
//! independent signals:
//!
//! - **Substantial modifications** ([`detect_modifications`]): changes
//!   to an allow-list of conformity-relevant fields, each emitted as a
//!   pending [`Modification`] that conservatively requires new
//!   conformity work until a human waives it.
//!
//! - **Reassessment triggers** ([`detect_reassessment_triggers`]): a
//!   narrower watch on vendor and lifecycle with transition-sensitive
//!   rules, feeding the one-way [`ReassessmentFlag`].
//!
//! Both detectors are pure and reflexive — comparing a snapshot with
//! itself yields nothing — so no-op saves never create review work.

pub mod modification;
pub mod reassessment;

pub use modification::{detect_modifications, Modification, ModificationStatus, ModificationType};
pub use reassessment::{
    detect_reassessment_triggers, ReassessmentFlag, ReassessmentState, ReassessmentTrigger,
};
