//! # aigis-obligation — Obligation Task Generator
//!
//! Maps a classified [`Snapshot`](aigis_core::Snapshot) to the list of
//! compliance tasks its current state demands. The generator is a fixed
//! table of independent rules — predicate, task type, priority, due-day
//! offset — evaluated against the snapshot and its classification.
//!
//! ## Determinism & idempotence
//!
//! [`generate_tasks`] takes the evaluation time as an explicit
//! parameter and never reads a wall clock: identical inputs produce an
//! identical task list, same order and same due dates. Combined with
//! the shell's deduplication by `(system_id, task_type)`, regenerating
//! on every save creates each obligation exactly once.

pub mod rules;
pub mod task;

pub use rules::generate_tasks;
pub use task::{ComplianceTask, TaskPriority, TaskType};
