//! `er-core`: foundational types for the `rust_er` emergency-response
//! allocation simulator.
//!
//! This crate is a dependency of every other `er-*` crate.  It has no `er-*`
//! dependencies and few external ones (`rand`, `serde`, `serde_json`,
//! `thiserror`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `IncidentId`, `ResourceId`                            |
//! | [`resource`]    | `Units`, `ResourceType`, `ResourceCatalog`            |
//! | [`config`]      | `PoolConfig`, `ResourceSpec`, `InputLimits`           |
//! | [`rng`]         | `ScenarioRng`                                         |
//! | [`error`]       | `CoreError`, `CoreResult`                             |

pub mod config;
pub mod error;
pub mod ids;
pub mod resource;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{InputLimits, PoolConfig, ResourceSpec};
pub use error::{CoreError, CoreResult};
pub use ids::{IncidentId, ResourceId};
pub use resource::{ResourceCatalog, ResourceType, Units, UnitsDisplay};
pub use rng::ScenarioRng;
