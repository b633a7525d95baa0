//! Pool and input configuration.
//!
//! # Design
//!
//! The resource types available to a run, their starting capacities, and the
//! caps applied to incident requests are data, not code.  They arrive as a
//! [`PoolConfig`], typically loaded from JSON by the application crate:
//!
//! ```json
//! {
//!   "resources": [
//!     { "name": "Teams",    "capacity": 15,   "request_cap": 15 },
//!     { "name": "Vehicles", "capacity": 10,   "request_cap": 10 },
//!     { "name": "Water",    "capacity": 5000, "request_cap": 5000 }
//!   ]
//! }
//! ```
//!
//! [`PoolConfig::catalog`] validates the file and produces the immutable
//! [`ResourceCatalog`] every other crate works against.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult, ResourceCatalog, ResourceId, ResourceType, Units};

// ── ResourceSpec ──────────────────────────────────────────────────────────────

/// One resource entry in a [`PoolConfig`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSpec {
    pub name: String,
    /// Units available at the start of the run.
    pub capacity: Units,
    /// Upper bound on any single incident's `required` value.
    /// Defaults to `capacity` when omitted.
    #[serde(default)]
    pub request_cap: Option<Units>,
}

impl ResourceSpec {
    pub fn new(name: impl Into<String>, capacity: Units, request_cap: Units) -> Self {
        Self {
            name: name.into(),
            capacity,
            request_cap: Some(request_cap),
        }
    }
}

// ── PoolConfig ────────────────────────────────────────────────────────────────

/// Static description of the resource pool supplied at process start.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    pub resources: Vec<ResourceSpec>,
}

impl Default for PoolConfig {
    /// The wildfire reference pool: 15 teams, 10 vehicles, 5000 units of water.
    fn default() -> Self {
        Self {
            resources: vec![
                ResourceSpec::new("Teams", 15, 15),
                ResourceSpec::new("Vehicles", 10, 10),
                ResourceSpec::new("Water", 5000, 5000),
            ],
        }
    }
}

impl PoolConfig {
    /// Parse a config from a JSON string.
    pub fn from_json_str(s: &str) -> CoreResult<Self> {
        serde_json::from_str(s).map_err(|e| CoreError::Parse(e.to_string()))
    }

    /// Read and parse a JSON config file.
    pub fn from_json_path(path: &Path) -> CoreResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Validate and build the run's [`ResourceCatalog`].
    ///
    /// Rejects an empty resource list, blank or duplicate names
    /// (case-insensitive), and more types than a `ResourceId` can index.
    pub fn catalog(&self) -> CoreResult<ResourceCatalog> {
        if self.resources.is_empty() {
            return Err(CoreError::Config("pool has no resource types".into()));
        }
        if self.resources.len() > u16::MAX as usize {
            return Err(CoreError::Config(format!(
                "{} resource types exceeds the supported maximum",
                self.resources.len()
            )));
        }

        let mut seen = HashSet::with_capacity(self.resources.len());
        for spec in &self.resources {
            let name = spec.name.trim();
            if name.is_empty() {
                return Err(CoreError::Config("resource name must not be blank".into()));
            }
            if !seen.insert(name.to_ascii_lowercase()) {
                return Err(CoreError::Config(format!("duplicate resource type {name:?}")));
            }
        }

        Ok(ResourceCatalog::new(self.resources.iter().map(|spec| ResourceType {
            id:          ResourceId::INVALID,
            name:        spec.name.trim().to_owned(),
            capacity:    spec.capacity,
            request_cap: spec.request_cap.unwrap_or(spec.capacity),
        })))
    }
}

// ── InputLimits ───────────────────────────────────────────────────────────────

/// Bounds the input layer enforces before incidents reach the allocator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputLimits {
    /// Lowest accepted severity (inclusive).
    pub min_severity: u8,
    /// Highest accepted severity (inclusive).
    pub max_severity: u8,
    /// Most incidents accepted in one run.
    pub max_incidents: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            min_severity:  1,
            max_severity:  10,
            max_incidents: 10,
        }
    }
}
