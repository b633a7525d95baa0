//! `er-sim`: run driver for the rust_er allocation simulator.
//!
//! # Run loop
//!
//! ```text
//! schedule(registry)             descending severity, once
//! for incident in registry order:
//!   ① allocate                   supply check, tentative grant, safety oracle, rollback
//!   ② record                     Granted → observer.on_granted(AllocationRecord)
//!                                Refused → observer.on_rejected(RejectionRecord)
//!   ③ release                    with release_after_grant: mark resolved, return units
//! ```
//!
//! Refusals (insufficient supply, unsafe grant, configuration violation)
//! are per-incident outcomes collected in the [`RunReport`]; they never
//! abort the run.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use er_core::{InputLimits, PoolConfig};
//! use er_incident::load_incidents_csv;
//! use er_sim::{DispatchBuilder, NoopObserver};
//!
//! let catalog = PoolConfig::default().catalog()?;
//! let registry = load_incidents_csv(path, &catalog, &InputLimits::default())?;
//! let mut dispatcher = DispatchBuilder::new(catalog, registry).build()?;
//! let report = dispatcher.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod dispatcher;
pub mod error;
pub mod observer;
pub mod record;
pub mod report;


pub use builder::{DispatchBuilder, DispatchConfig};
pub use dispatcher::Dispatcher;
pub use error::{DispatchError, DispatchResult};
pub use observer::{DispatchObserver, NoopObserver};
pub use record::{AllocationRecord, RejectionRecord};
pub use report::{IncidentOutcome, Outcome, RunReport};
