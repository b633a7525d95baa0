//! Core incident types: `Severity`, `IncidentSpec`, and `Incident`.
//!
//! # Lifecycle
//!
//! The input layer produces one [`IncidentSpec`] per reported event.  Specs
//! are validated against the run's [`ResourceCatalog`] and [`InputLimits`]
//! and then frozen into [`Incident`]s by the
//! [`IncidentRegistry`][crate::IncidentRegistry], which assigns sequential
//! ids.  After that, `required` and `max_claim` never change; only the
//! `resolved` flag moves, and only from `false` to `true`.
//!
//! Units an incident currently holds are not stored here.  They live in the
//! allocation ledger row for the incident's id, so there is exactly one copy
//! of the number that the pool's conservation invariant depends on.

use std::fmt;

use er_core::{IncidentId, InputLimits, ResourceCatalog, ResourceId, Units};

use crate::Violation;

// ── Severity ──────────────────────────────────────────────────────────────────

/// Urgency score; higher is more urgent.  The accepted range comes from
/// [`InputLimits`] (1–10 by default).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Severity(pub u8);

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── IncidentSpec ──────────────────────────────────────────────────────────────

/// Unvalidated operator input for one incident.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncidentSpec {
    pub location:  String,
    pub severity:  Severity,
    /// Exact units the incident will request, per resource type.
    pub required:  Vec<Units>,
    /// Upper bound on units the incident could ever hold, per resource type.
    pub max_claim: Vec<Units>,
}

impl IncidentSpec {
    /// Check the spec against the catalog's request caps and the input limits.
    ///
    /// Checks run in a fixed order (location, severity, dimensions, caps,
    /// claims) and the first failure is returned.
    pub fn validate(&self, catalog: &ResourceCatalog, limits: &InputLimits) -> Result<(), Violation> {
        if self.location.trim().is_empty() {
            return Err(Violation::EmptyLocation);
        }

        if self.severity.0 < limits.min_severity || self.severity.0 > limits.max_severity {
            return Err(Violation::SeverityOutOfRange {
                severity: self.severity.0,
                min:      limits.min_severity,
                max:      limits.max_severity,
            });
        }

        check_width("required", catalog.len(), self.required.len())?;
        check_width("max_claim", catalog.len(), self.max_claim.len())?;

        for (r, ty) in catalog.iter().enumerate() {
            if self.required[r] > ty.request_cap {
                return Err(Violation::OverCap {
                    resource:  ty.name.clone(),
                    requested: self.required[r],
                    cap:       ty.request_cap,
                });
            }
        }

        claim_covers_request(catalog, &self.required, &self.max_claim)
    }
}

/// `Err` unless `max_claim[r] >= required[r]` for every resource type.
///
/// Shared with the allocation coordinator, which re-checks the same
/// precondition before touching the pool.
pub fn claim_covers_request(
    catalog:   &ResourceCatalog,
    required:  &[Units],
    max_claim: &[Units],
) -> Result<(), Violation> {
    check_width("required", catalog.len(), required.len())?;
    check_width("max_claim", catalog.len(), max_claim.len())?;
    for (r, (&req, &max)) in required.iter().zip(max_claim).enumerate() {
        if max < req {
            return Err(Violation::ClaimBelowRequired {
                resource:  catalog.name(ResourceId(r as u16)).to_owned(),
                required:  req,
                max_claim: max,
            });
        }
    }
    Ok(())
}

fn check_width(what: &'static str, expected: usize, got: usize) -> Result<(), Violation> {
    if expected != got {
        return Err(Violation::DimensionMismatch { what, expected, got });
    }
    Ok(())
}

// ── Incident ──────────────────────────────────────────────────────────────────

/// One validated incident owned by the registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Incident {
    id:        IncidentId,
    location:  String,
    severity:  Severity,
    required:  Vec<Units>,
    max_claim: Vec<Units>,
    resolved:  bool,
}

impl Incident {
    /// Freeze a spec into an incident.  The caller has already validated it.
    pub(crate) fn from_spec(id: IncidentId, spec: IncidentSpec) -> Self {
        Self {
            id,
            location:  spec.location.trim().to_owned(),
            severity:  spec.severity,
            required:  spec.required,
            max_claim: spec.max_claim,
            resolved:  false,
        }
    }

    #[inline]
    pub fn id(&self) -> IncidentId {
        self.id
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    #[inline]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Units this incident requests, per resource type.
    pub fn required(&self) -> &[Units] {
        &self.required
    }

    /// Units this incident could ever hold, per resource type.
    pub fn max_claim(&self) -> &[Units] {
        &self.max_claim
    }

    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    pub(crate) fn set_resolved(&mut self) {
        self.resolved = true;
    }
}
