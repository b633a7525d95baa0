//! `IncidentRegistry`: the ordered set of incidents for one run.
//!
//! # Ordering vs. identity
//!
//! Incidents are created in input order with ids `0..n`.  The priority
//! scheduler later permutes the registry in place; after that, iteration
//! order is processing order while ids still index the allocation ledger.
//! `position` maps id → current slot so lookups by id stay O(1) across the
//! reorder.

use er_core::{IncidentId, InputLimits, ResourceCatalog, Units};

use crate::{Incident, IncidentError, IncidentResult, IncidentSpec};

/// Owns every incident for the run.  No incident is added or removed once
/// the registry is built.
#[derive(Clone, Debug)]
pub struct IncidentRegistry {
    incidents: Vec<Incident>,
    /// `position[id]` = index of that incident in `incidents`.
    position:  Vec<usize>,
    reordered: bool,
}

impl IncidentRegistry {
    /// Validate `specs` and freeze them into a registry, assigning ids in
    /// input order.
    ///
    /// Fails on the first invalid spec; nothing is partially registered.
    pub fn from_specs(
        specs:   Vec<IncidentSpec>,
        catalog: &ResourceCatalog,
        limits:  &InputLimits,
    ) -> IncidentResult<Self> {
        if specs.is_empty() {
            return Err(IncidentError::Empty);
        }
        if specs.len() > limits.max_incidents {
            return Err(IncidentError::TooManyIncidents {
                count: specs.len(),
                max:   limits.max_incidents,
            });
        }
        for (index, spec) in specs.iter().enumerate() {
            spec.validate(catalog, limits)
                .map_err(|violation| IncidentError::Invalid { index, violation })?;
        }

        let incidents: Vec<Incident> = specs
            .into_iter()
            .enumerate()
            .map(|(i, spec)| Incident::from_spec(IncidentId(i as u32), spec))
            .collect();
        let position = (0..incidents.len()).collect();

        Ok(Self { incidents, position, reordered: false })
    }

    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }

    /// Incidents in current (processing) order.
    pub fn iter(&self) -> impl Iterator<Item = &Incident> {
        self.incidents.iter()
    }

    pub fn as_slice(&self) -> &[Incident] {
        &self.incidents
    }

    /// Ids in current order.
    pub fn order(&self) -> Vec<IncidentId> {
        self.incidents.iter().map(Incident::id).collect()
    }

    pub fn get(&self, id: IncidentId) -> Option<&Incident> {
        self.position.get(id.index()).map(|&slot| &self.incidents[slot])
    }

    /// Incident at processing position `slot`.
    pub fn at(&self, slot: usize) -> Option<&Incident> {
        self.incidents.get(slot)
    }

    /// Mark `id` resolved.  Returns `false` if the id is unknown.
    pub fn mark_resolved(&mut self, id: IncidentId) -> bool {
        match self.position.get(id.index()) {
            Some(&slot) => {
                self.incidents[slot].set_resolved();
                true
            }
            None => false,
        }
    }

    /// Max-claim rows indexed by id (not by current order), for the ledger.
    pub fn max_claims_by_id(&self) -> Vec<Vec<Units>> {
        let mut rows = vec![Vec::new(); self.incidents.len()];
        for inc in &self.incidents {
            rows[inc.id().index()] = inc.max_claim().to_vec();
        }
        rows
    }

    /// `true` once [`reorder_with`][Self::reorder_with] has run.
    pub fn is_reordered(&self) -> bool {
        self.reordered
    }

    /// Permute incidents in place with `f`.
    ///
    /// `f` receives the slice, so it can swap but never add, drop, or
    /// replace incidents.  The id → slot index is rebuilt afterwards.
    pub fn reorder_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut [Incident]),
    {
        f(&mut self.incidents);
        for (slot, inc) in self.incidents.iter().enumerate() {
            self.position[inc.id().index()] = slot;
        }
        self.reordered = true;
    }
}
