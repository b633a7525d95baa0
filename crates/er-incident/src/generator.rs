//! Seeded synthetic incident generator.
//!
//! Produces specs that always pass [`IncidentSpec::validate`] for the catalog
//! and limits it was built with.  `max_claim` is `required` plus a random
//! headroom of up to `headroom` units, so generated scenarios include both
//! tight claims (headroom 0) and claims that can exceed pool capacity.

use er_core::{InputLimits, ResourceCatalog, ScenarioRng, Units};

use crate::{IncidentRegistry, IncidentResult, IncidentSpec, Severity};

const LOCATIONS: &[&str] = &[
    "Ridge", "Valley", "Canyon", "Mesa", "Creek", "Pinewood", "Harbor", "Summit",
    "Meadow", "Quarry",
];

pub struct IncidentGenerator {
    catalog:  ResourceCatalog,
    limits:   InputLimits,
    rng:      ScenarioRng,
    /// Per-type extra claim above `required`, as a fraction of that type's cap.
    headroom: f64,
}

impl IncidentGenerator {
    pub fn new(catalog: ResourceCatalog, limits: InputLimits, seed: u64) -> Self {
        Self {
            catalog,
            limits,
            rng: ScenarioRng::new(seed),
            headroom: 0.5,
        }
    }

    /// Set the max-claim headroom fraction (clamped to `0.0..=4.0`).
    pub fn headroom(mut self, fraction: f64) -> Self {
        self.headroom = fraction.clamp(0.0, 4.0);
        self
    }

    /// Draw one valid spec.
    pub fn spec(&mut self) -> IncidentSpec {
        let location = self
            .rng
            .choose(LOCATIONS)
            .copied()
            .unwrap_or("Unknown")
            .to_owned();
        let severity = self
            .rng
            .gen_range(self.limits.min_severity..=self.limits.max_severity);

        let mut required = Vec::with_capacity(self.catalog.len());
        let mut max_claim = Vec::with_capacity(self.catalog.len());
        for ty in self.catalog.iter() {
            let req: Units = self.rng.gen_range(0..=ty.request_cap);
            let extra_cap = (ty.request_cap as f64 * self.headroom) as Units;
            let extra: Units = self.rng.gen_range(0..=extra_cap);
            required.push(req);
            max_claim.push(req.saturating_add(extra));
        }

        IncidentSpec { location, severity: Severity(severity), required, max_claim }
    }

    /// Draw `n` specs.
    pub fn specs(&mut self, n: usize) -> Vec<IncidentSpec> {
        (0..n).map(|_| self.spec()).collect()
    }

    /// Draw `n` specs and freeze them into a registry.
    pub fn registry(&mut self, n: usize) -> IncidentResult<IncidentRegistry> {
        let specs = self.specs(n);
        IncidentRegistry::from_specs(specs, &self.catalog, &self.limits)
    }
}
