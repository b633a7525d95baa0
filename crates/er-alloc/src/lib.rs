//! `er-alloc`: resource pool, claim ledger, safety oracle, and the
//! allocate/rollback protocol.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                      |
//! |-----------------|---------------------------------------------------------------|
//! | [`pool`]        | `ResourcePool`: available vs. initial units per type          |
//! | [`matrix`]      | `UnitMatrix`: dense `n × R` row-major counts                  |
//! | [`ledger`]      | `ClaimLedger`: allocated and max-claim matrices by incident   |
//! | [`safety`]      | `is_safe`, `safe_sequence`: Banker's safe-state test          |
//! | [`coordinator`] | `allocate`, `release`, `Grant`                                |
//! | [`scheduler`]   | `schedule`, `sort_by_severity`, `TieBreak`                    |
//! | [`error`]       | `AllocError`, `RejectKind`, `AllocResult<T>`                  |
//!
//! # Invariants
//!
//! For every resource type `r`, at every point between calls:
//!
//! ```text
//! pool.available[r] + Σ_i ledger.allocated[i][r] == pool.initial[r]
//! ```
//!
//! and each ledger row is either all zero or equal to that incident's
//! `required` vector.  [`ResourcePool::is_conserved`] checks the first.
//!
//! Everything here runs on one thread with exclusive `&mut` access to the
//! pool and ledger.  Parallel callers would have to hold one lock across
//! `allocate`'s tentative grant, safety check, and rollback.

pub mod coordinator;
pub mod error;
pub mod ledger;
pub mod matrix;
pub mod pool;
pub mod safety;
pub mod scheduler;

#[cfg(test)]
mod tests;

pub use coordinator::{Grant, allocate, release};
pub use error::{AllocError, AllocResult, RejectKind};
pub use ledger::ClaimLedger;
pub use matrix::UnitMatrix;
pub use pool::ResourcePool;
pub use safety::{is_safe, safe_sequence};
pub use scheduler::{TieBreak, schedule, sort_by_severity};
