//! The `ClaimLedger`: allocation and max-claim matrices for every incident.

use er_core::{IncidentId, Units};
use er_incident::IncidentRegistry;

use crate::{AllocError, AllocResult, UnitMatrix};

/// Holds the two `n × R` matrices the safety oracle reads.
///
/// Both matrices are indexed by `IncidentId`, never by processing order, so
/// the scheduler's reorder cannot desynchronize an incident from its rows.
/// The `allocated` row is the only record of units an incident holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimLedger {
    allocated: UnitMatrix,
    max_claim: UnitMatrix,
}

impl ClaimLedger {
    /// Ledger with no allocations and the given max-claim rows (row `i` is
    /// `IncidentId(i)`).
    pub fn new(max_claims: &[Vec<Units>], width: usize) -> AllocResult<Self> {
        let max_claim = UnitMatrix::from_rows(max_claims, width).ok_or_else(|| {
            let got = max_claims
                .iter()
                .map(Vec::len)
                .find(|&len| len != width)
                .unwrap_or(width);
            AllocError::LedgerShape { expected: width, got }
        })?;
        Ok(Self {
            allocated: UnitMatrix::zeros(max_claims.len(), width),
            max_claim,
        })
    }

    /// Ledger for every incident in `registry`.
    pub fn from_registry(registry: &IncidentRegistry, width: usize) -> AllocResult<Self> {
        Self::new(&registry.max_claims_by_id(), width)
    }

    /// Number of incidents (`n`).
    #[inline]
    pub fn incident_count(&self) -> usize {
        self.allocated.rows()
    }

    /// Number of resource types (`R`).
    #[inline]
    pub fn width(&self) -> usize {
        self.allocated.cols()
    }

    pub fn contains(&self, id: IncidentId) -> bool {
        id.index() < self.incident_count()
    }

    /// Units `id` currently holds.
    pub fn allocated(&self, id: IncidentId) -> &[Units] {
        self.allocated.incident(id)
    }

    /// Most units `id` could ever hold.
    pub fn max_claim(&self, id: IncidentId) -> &[Units] {
        self.max_claim.incident(id)
    }

    /// `true` if `id` holds nothing.
    pub fn is_clear(&self, id: IncidentId) -> bool {
        self.allocated(id).iter().all(|&u| u == 0)
    }

    pub fn allocated_matrix(&self) -> &UnitMatrix {
        &self.allocated
    }

    pub fn max_claim_matrix(&self) -> &UnitMatrix {
        &self.max_claim
    }

    /// Total units held across all incidents, per resource type.
    pub fn outstanding(&self) -> Vec<u64> {
        self.allocated.column_sums()
    }

    // ── Mutation (coordinator only) ───────────────────────────────────────

    pub(crate) fn add(&mut self, id: IncidentId, units: &[Units]) {
        for (held, &u) in self.allocated.row_mut(id.index()).iter_mut().zip(units) {
            *held += u;
        }
    }

    pub(crate) fn sub(&mut self, id: IncidentId, units: &[Units]) {
        for (held, &u) in self.allocated.row_mut(id.index()).iter_mut().zip(units) {
            *held -= u;
        }
    }

    /// Zero `id`'s row, returning what it held.
    pub(crate) fn clear(&mut self, id: IncidentId) -> Vec<Units> {
        let row = self.allocated.row_mut(id.index());
        let held = row.to_vec();
        row.fill(0);
        held
    }
}
