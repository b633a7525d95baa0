//! The allocation coordinator: tentative grant, safety check, commit or
//! rollback, and release.
//!
//! # Protocol
//!
//! ```text
//! allocate(incident):
//!   ① preconditions    id known, row clear, max_claim ≥ required
//!   ② supply check     required[r] ≤ available[r] for every r
//!   ③ tentative grant  ledger[id] += required; pool −= required
//!   ④ safety oracle    over all n ledger rows
//!   ⑤ unsafe         → undo ③ exactly, Err(UnsafeGrant)
//!     safe           → Ok(Grant)
//! ```
//!
//! Steps ①–② touch nothing, and ⑤ undoes ③ with the same vector, so a
//! refused call leaves the pool and ledger exactly as it found them.

use er_core::{IncidentId, ResourceId, Units, UnitsDisplay};
use er_incident::{Incident, claim_covers_request};
use tracing::{debug, trace};

use crate::{AllocError, AllocResult, ClaimLedger, ResourcePool, safety};

/// A committed, deadlock-safe grant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grant {
    pub incident:   IncidentId,
    /// Units granted; always equal to the incident's `required` vector.
    pub units:      Vec<Units>,
    /// Completion order the safety oracle found for the post-grant state.
    pub safe_order: Vec<IncidentId>,
}

/// Grant `incident` its full `required` vector if doing so is supplied and
/// safe.
///
/// On `Err`, `pool` and `ledger` are unchanged.
pub fn allocate(
    incident: &Incident,
    pool:     &mut ResourcePool,
    ledger:   &mut ClaimLedger,
) -> AllocResult<Grant> {
    let id = incident.id();
    let required = incident.required();

    // ── ① Preconditions ───────────────────────────────────────────────────
    if !ledger.contains(id) {
        return Err(AllocError::UnknownIncident(id));
    }
    claim_covers_request(pool.catalog(), required, ledger.max_claim(id))
        .map_err(|violation| AllocError::ConfigurationViolation { incident: id, violation })?;
    if !ledger.is_clear(id) {
        return Err(AllocError::AlreadyAllocated { incident: id });
    }

    // ── ② Physical supply ─────────────────────────────────────────────────
    if let Some(r) = pool.first_shortfall(required) {
        return Err(AllocError::InsufficientSupply {
            incident:  id,
            resource:  pool.catalog().name(ResourceId(r as u16)).to_owned(),
            required:  required[r],
            available: pool.available()[r],
        });
    }

    // ── ③ Tentative grant ─────────────────────────────────────────────────
    ledger.add(id, required);
    pool.take(required);
    debug!(
        incident = %id,
        granted = %UnitsDisplay { catalog: pool.catalog(), units: required },
        "tentative grant"
    );

    // ── ④ / ⑤ Safety check ────────────────────────────────────────────────
    match safety::safe_sequence(
        pool.available(),
        ledger.allocated_matrix(),
        ledger.max_claim_matrix(),
    ) {
        Some(safe_order) => {
            trace!(incident = %id, ?safe_order, "grant is safe");
            Ok(Grant { incident: id, units: required.to_vec(), safe_order })
        }
        None => {
            ledger.sub(id, required);
            pool.give_back(required);
            debug!(incident = %id, "unsafe state, tentative grant rolled back");
            Err(AllocError::UnsafeGrant { incident: id })
        }
    }
}

/// Return everything `id` holds to the pool and zero its ledger row.
///
/// A no-op (returning zeros) when the incident holds nothing.  Unknown ids
/// are ignored and return an empty vector.
pub fn release(id: IncidentId, pool: &mut ResourcePool, ledger: &mut ClaimLedger) -> Vec<Units> {
    if !ledger.contains(id) {
        return Vec::new();
    }
    let held = ledger.clear(id);
    pool.give_back(&held);
    debug!(
        incident = %id,
        released = %UnitsDisplay { catalog: pool.catalog(), units: &held },
        "released"
    );
    held
}
