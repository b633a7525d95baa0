//! The `Dispatcher` struct and its run loop.

use er_alloc::{ClaimLedger, ResourcePool, allocate, release, schedule};
use er_core::{IncidentId, ResourceCatalog, Units, UnitsDisplay};
use er_incident::IncidentRegistry;
use tracing::{info, info_span, warn};

use crate::{
    AllocationRecord, DispatchConfig, DispatchError, DispatchObserver, DispatchResult,
    IncidentOutcome, Outcome, RejectionRecord, RunReport,
};

/// Owns all state for one run: the registry, the pool, and the ledger.
///
/// A run is a single pass:
///
/// 1. **Schedule**: reorder the registry by descending severity (once).
/// 2. **Allocate**: for each incident in that order, attempt a grant.
/// 3. **Record**: on success, notify the observer with the grant record.
/// 4. **Release**: with `release_after_grant`, mark the incident resolved
///    and return its units immediately.
///
/// Refused grants are outcomes, not errors: the run continues with the next
/// incident and the refusal is reported in the [`RunReport`].
///
/// Create via [`DispatchBuilder`][crate::DispatchBuilder].
pub struct Dispatcher {
    pub(crate) config:   DispatchConfig,
    pub(crate) catalog:  ResourceCatalog,
    pub(crate) registry: IncidentRegistry,
    pub(crate) pool:     ResourcePool,
    pub(crate) ledger:   ClaimLedger,
    /// `holding[id]`: granted and not yet released.  A zero-unit grant
    /// leaves the ledger row clear, so the ledger alone cannot tell.
    pub(crate) holding:  Vec<bool>,
    pub(crate) has_run:  bool,
}

impl Dispatcher {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ResourceCatalog {
        &self.catalog
    }

    pub fn registry(&self) -> &IncidentRegistry {
        &self.registry
    }

    pub fn pool(&self) -> &ResourcePool {
        &self.pool
    }

    pub fn ledger(&self) -> &ClaimLedger {
        &self.ledger
    }

    /// `available + held == initial` for every resource type.
    pub fn check_conservation(&self) -> bool {
        self.pool.is_conserved(&self.ledger)
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Schedule and process every incident once.
    ///
    /// # Errors
    ///
    /// [`DispatchError::AlreadyRun`] on a second call.  Allocation refusals
    /// never surface here.
    pub fn run<O: DispatchObserver>(&mut self, observer: &mut O) -> DispatchResult<RunReport> {
        if self.has_run {
            return Err(DispatchError::AlreadyRun);
        }
        self.has_run = true;

        let _span = info_span!("dispatch", incidents = self.registry.len()).entered();

        schedule(&mut self.registry, self.config.tie_break);
        let order = self.registry.order();
        info!(tie_break = %self.config.tie_break, ?order, "incidents scheduled");
        observer.on_run_start(&self.catalog, &order);

        let outcomes = (0..self.registry.len())
            .map(|slot| self.process(slot, observer))
            .collect();

        let report = RunReport {
            outcomes,
            initial:         self.pool.initial().to_vec(),
            final_available: self.pool.available().to_vec(),
        };
        info!(
            granted = report.granted(),
            rejected = report.rejected(),
            available = %UnitsDisplay { catalog: &self.catalog, units: &report.final_available },
            "run complete"
        );
        observer.on_run_end(&report);
        Ok(report)
    }

    /// Release a held grant (only meaningful with `release_after_grant =
    /// false`).  Marks the incident resolved if it was holding a grant,
    /// including a grant of zero units.
    pub fn release(&mut self, id: IncidentId) -> Vec<Units> {
        let held = release(id, &mut self.pool, &mut self.ledger);
        let was_holding = self
            .holding
            .get_mut(id.index())
            .map(std::mem::take)
            .unwrap_or(false);
        if was_holding {
            self.registry.mark_resolved(id);
        }
        held
    }

    /// `true` while `id` holds a grant that has not been released.
    pub fn is_holding(&self, id: IncidentId) -> bool {
        self.holding.get(id.index()).copied().unwrap_or(false)
    }

    // ── Per-incident processing ───────────────────────────────────────────

    /// Attempt the incident at processing position `slot`.
    fn process<O: DispatchObserver>(&mut self, slot: usize, observer: &mut O) -> IncidentOutcome {
        // Field borrows: the incident is read from the registry while the
        // pool and ledger are mutated.
        let incident = &self.registry.as_slice()[slot];
        let id = incident.id();
        let severity = incident.severity();

        let outcome = match allocate(incident, &mut self.pool, &mut self.ledger) {
            Ok(grant) => {
                let record = AllocationRecord::new(incident, self.ledger.allocated(id));
                info!(
                    incident = %id,
                    location = %record.location,
                    severity = %severity,
                    granted = %UnitsDisplay { catalog: &self.catalog, units: &grant.units },
                    "resources allocated"
                );
                observer.on_granted(&record);
                self.holding[id.index()] = true;
                Outcome::Granted { units: grant.units }
            }
            Err(error) => {
                warn!(incident = %id, location = %incident.location(), %error, "allocation refused");
                observer.on_rejected(&RejectionRecord::new(incident, error.clone()));
                Outcome::Rejected(error)
            }
        };

        if self.config.release_after_grant && matches!(outcome, Outcome::Granted { .. }) {
            self.holding[id.index()] = false;
            self.registry.mark_resolved(id);
            let released = release(id, &mut self.pool, &mut self.ledger);
            observer.on_released(id, &released);
        }

        debug_assert!(self.check_conservation(), "conservation violated after {id}");
        IncidentOutcome { incident: id, severity, outcome }
    }
}
