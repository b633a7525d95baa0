//! Fluent builder for constructing a [`Dispatcher`].

use er_alloc::{ClaimLedger, ResourcePool, TieBreak};
use er_core::ResourceCatalog;
use er_incident::{IncidentRegistry, claim_covers_request};

use crate::{DispatchError, DispatchResult, Dispatcher};

/// Run-level knobs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Ordering of equal-severity incidents.
    pub tie_break: TieBreak,
    /// Release each grant immediately after it is logged (instantaneous
    /// resolution).  When `false`, grants stay held in the ledger and later
    /// safety checks see them; release them with
    /// [`Dispatcher::release`].
    pub release_after_grant: bool,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            tie_break:           TieBreak::Stable,
            release_after_grant: true,
        }
    }
}

/// Fluent builder for [`Dispatcher`].
///
/// # Required inputs
///
/// - [`ResourceCatalog`]: from [`er_core::PoolConfig::catalog`]
/// - [`IncidentRegistry`]: from the loader, generator, or interactive input
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                   |
/// |-----------------|-------------------------------------------|
/// | `.config(c)`    | `DispatchConfig::default()`               |
/// | `.tie_break(t)` | `TieBreak::Stable`                        |
///
/// # Example
///
/// ```rust,ignore
/// let catalog = PoolConfig::default().catalog()?;
/// let registry = load_incidents_csv(path, &catalog, &InputLimits::default())?;
/// let mut dispatcher = DispatchBuilder::new(catalog, registry).build()?;
/// let report = dispatcher.run(&mut NoopObserver)?;
/// ```
pub struct DispatchBuilder {
    catalog:  ResourceCatalog,
    registry: IncidentRegistry,
    config:   DispatchConfig,
}

impl DispatchBuilder {
    pub fn new(catalog: ResourceCatalog, registry: IncidentRegistry) -> Self {
        Self {
            catalog,
            registry,
            config: DispatchConfig::default(),
        }
    }

    pub fn config(mut self, config: DispatchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.config.tie_break = tie_break;
        self
    }

    /// Check every incident against the catalog, build a full pool and an
    /// empty ledger, and return a ready-to-run [`Dispatcher`].
    pub fn build(self) -> DispatchResult<Dispatcher> {
        if self.catalog.is_empty() {
            return Err(DispatchError::Config("resource catalog is empty".into()));
        }
        if self.registry.is_reordered() {
            return Err(DispatchError::Config(
                "registry has already been scheduled".into(),
            ));
        }

        // The registry may have been validated against another catalog.
        for incident in self.registry.iter() {
            claim_covers_request(&self.catalog, incident.required(), incident.max_claim())
                .map_err(|violation| DispatchError::InvalidIncident {
                    incident: incident.id(),
                    violation,
                })?;
        }

        let pool = ResourcePool::new(&self.catalog);
        let ledger = ClaimLedger::from_registry(&self.registry, self.catalog.len())?;
        let holding = vec![false; self.registry.len()];

        Ok(Dispatcher {
            config:   self.config,
            catalog:  self.catalog,
            registry: self.registry,
            pool,
            ledger,
            holding,
            has_run:  false,
        })
    }
}
