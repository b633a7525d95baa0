//! The `ResourcePool`: per-type units currently available system-wide.

use er_core::{ResourceCatalog, Units};

use crate::ClaimLedger;

/// Available units per resource type, plus the capacities the run started
/// with.
///
/// Only the coordinator mutates availability (`take` on a tentative grant,
/// `give_back` on rollback or release).  Availability never drops below zero
/// and never rises above the initial capacity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourcePool {
    catalog:   ResourceCatalog,
    initial:   Vec<Units>,
    available: Vec<Units>,
}

impl ResourcePool {
    /// A full pool at the catalog's capacities.
    pub fn new(catalog: &ResourceCatalog) -> Self {
        let initial = catalog.capacities();
        Self {
            catalog:   catalog.clone(),
            available: initial.clone(),
            initial,
        }
    }

    pub fn catalog(&self) -> &ResourceCatalog {
        &self.catalog
    }

    /// Number of resource types.
    #[inline]
    pub fn width(&self) -> usize {
        self.available.len()
    }

    /// Units currently available, in catalog order.
    pub fn available(&self) -> &[Units] {
        &self.available
    }

    /// Capacities at the start of the run.
    pub fn initial(&self) -> &[Units] {
        &self.initial
    }

    /// Index of the first resource type where `units` exceeds availability.
    pub fn first_shortfall(&self, units: &[Units]) -> Option<usize> {
        units
            .iter()
            .zip(&self.available)
            .position(|(&want, &have)| want > have)
    }

    /// `true` if every pending unit is accounted for:
    /// `available[r] + Σ allocated[·][r] == initial[r]` for every `r`.
    pub fn is_conserved(&self, ledger: &ClaimLedger) -> bool {
        let held = ledger.outstanding();
        held.len() == self.width()
            && self
                .available
                .iter()
                .zip(&self.initial)
                .zip(held)
                .all(|((&avail, &init), h)| avail as u64 + h == init as u64)
    }

    // ── Mutation (coordinator only) ───────────────────────────────────────

    /// Remove `units` from availability.  The caller has checked
    /// [`first_shortfall`][Self::first_shortfall].
    pub(crate) fn take(&mut self, units: &[Units]) {
        debug_assert!(self.first_shortfall(units).is_none());
        for (avail, &u) in self.available.iter_mut().zip(units) {
            *avail -= u;
        }
    }

    /// Return `units` to availability.
    pub(crate) fn give_back(&mut self, units: &[Units]) {
        for ((avail, &init), &u) in self.available.iter_mut().zip(&self.initial).zip(units) {
            *avail += u;
            debug_assert!(*avail <= init, "pool above initial capacity");
        }
    }
}
