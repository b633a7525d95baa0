//! Resource types and the catalog that fixes their order for a run.
//!
//! # Design
//!
//! Every per-resource quantity in the workspace (pool availability, incident
//! requests, max claims, ledger rows) is a plain `Vec<Units>` whose index is a
//! [`ResourceId`].  The [`ResourceCatalog`] is the single authority on how many
//! entries those vectors have and what each position means; it is built once
//! from [`PoolConfig`][crate::PoolConfig] and never changes during a run.

use std::fmt;

use crate::ResourceId;

/// Unit count for any resource type.  Counts are never negative.
pub type Units = u32;

// ── ResourceType ──────────────────────────────────────────────────────────────

/// One resource type known to the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceType {
    pub id: ResourceId,
    /// Display name.  Cosmetic only; ordering is by `id`.
    pub name: String,
    /// Units in the pool at the start of the run.
    pub capacity: Units,
    /// Largest `required` value an incident may request for this type.
    pub request_cap: Units,
}

// ── ResourceCatalog ───────────────────────────────────────────────────────────

/// The ordered, fixed set of resource types for a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceCatalog {
    types: Vec<ResourceType>,
}

impl ResourceCatalog {
    /// Build a catalog from already-validated types.  Ids are reassigned to
    /// match vector position.
    pub fn new(types: impl IntoIterator<Item = ResourceType>) -> Self {
        let types = types
            .into_iter()
            .enumerate()
            .map(|(i, mut t)| {
                t.id = ResourceId(i as u16);
                t
            })
            .collect();
        Self { types }
    }

    /// Number of resource types (the `R` dimension of every matrix).
    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn get(&self, id: ResourceId) -> Option<&ResourceType> {
        self.types.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceType> {
        self.types.iter()
    }

    /// Display name for `id`, or `"?"` if out of range.
    pub fn name(&self, id: ResourceId) -> &str {
        self.get(id).map(|t| t.name.as_str()).unwrap_or("?")
    }

    /// Initial capacity of every type, in catalog order.
    pub fn capacities(&self) -> Vec<Units> {
        self.types.iter().map(|t| t.capacity).collect()
    }
}

/// Formats a unit vector against a catalog, e.g. `Teams=5 Vehicles=3 Water=1000`.
pub struct UnitsDisplay<'a> {
    pub catalog: &'a ResourceCatalog,
    pub units:   &'a [Units],
}

impl fmt::Display for UnitsDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, u) in self.units.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", self.catalog.name(ResourceId(i as u16)), u)?;
        }
        Ok(())
    }
}
