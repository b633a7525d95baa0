//! Dispatch observer trait for logging and data collection.

use er_core::{IncidentId, ResourceCatalog, Units};

use crate::{AllocationRecord, RejectionRecord, RunReport};

/// Callbacks invoked by [`Dispatcher::run`][crate::Dispatcher::run] at key
/// points of a run.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: grant counter
///
/// ```rust,ignore
/// struct GrantCounter(usize);
///
/// impl DispatchObserver for GrantCounter {
///     fn on_granted(&mut self, _record: &AllocationRecord) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait DispatchObserver {
    /// Called once after scheduling, before the first allocation attempt.
    /// `order` is the processing order.
    fn on_run_start(&mut self, _catalog: &ResourceCatalog, _order: &[IncidentId]) {}

    /// Called for each successful grant, before the grant is released.
    fn on_granted(&mut self, _record: &AllocationRecord) {}

    /// Called for each refused grant.
    fn on_rejected(&mut self, _record: &RejectionRecord) {}

    /// Called after a granted incident's units return to the pool.
    fn on_released(&mut self, _incident: IncidentId, _units: &[Units]) {}

    /// Called once after the last incident.
    fn on_run_end(&mut self, _report: &RunReport) {}
}

/// A [`DispatchObserver`] that does nothing.
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}
