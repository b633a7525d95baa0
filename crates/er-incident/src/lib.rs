//! `er-incident`: incident model, validation, registry, and input loading.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`incident`]  | `Severity`, `IncidentSpec`, `Incident`                    |
//! | [`registry`]  | `IncidentRegistry` (id-stable, reorderable once)          |
//! | [`loader`]    | `load_incidents_csv`, `load_incidents_reader`             |
//! | [`generator`] | `IncidentGenerator` (seeded synthetic scenarios)          |
//! | [`error`]     | `Violation`, `IncidentError`, `IncidentResult<T>`         |
//!
//! Every path into a registry (CSV, generator, interactive input) goes
//! through [`IncidentSpec::validate`], so the allocator can rely on
//! `max_claim >= required` and on vector widths matching the catalog.

pub mod error;
pub mod generator;
pub mod incident;
pub mod loader;
pub mod registry;


pub use error::{IncidentError, IncidentResult, Violation};
pub use generator::IncidentGenerator;
pub use incident::{Incident, IncidentSpec, Severity, claim_covers_request};
pub use loader::{column_name, load_incidents_csv, load_incidents_reader};
pub use registry::IncidentRegistry;
