//! Plain data records handed to observers.

use er_alloc::{AllocError, RejectKind};
use er_core::{IncidentId, Units};
use er_incident::{Incident, Severity};

/// Everything known about one successful grant, captured before release.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllocationRecord {
    pub incident_id: IncidentId,
    pub location:    String,
    pub severity:    Severity,
    pub required:    Vec<Units>,
    pub max_claim:   Vec<Units>,
    /// Units held at grant time (equal to `required`).
    pub allocated:   Vec<Units>,
}

impl AllocationRecord {
    pub(crate) fn new(incident: &Incident, allocated: &[Units]) -> Self {
        Self {
            incident_id: incident.id(),
            location:    incident.location().to_owned(),
            severity:    incident.severity(),
            required:    incident.required().to_vec(),
            max_claim:   incident.max_claim().to_vec(),
            allocated:   allocated.to_vec(),
        }
    }
}

/// One refused grant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RejectionRecord {
    pub incident_id: IncidentId,
    pub location:    String,
    pub severity:    Severity,
    pub kind:        RejectKind,
    pub error:       AllocError,
}

impl RejectionRecord {
    pub(crate) fn new(incident: &Incident, error: AllocError) -> Self {
        Self {
            incident_id: incident.id(),
            location:    incident.location().to_owned(),
            severity:    incident.severity(),
            kind:        error.kind(),
            error,
        }
    }
}
