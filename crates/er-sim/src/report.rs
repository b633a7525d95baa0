//! End-of-run summary.

use er_alloc::{AllocError, RejectKind};
use er_core::{IncidentId, Units};
use er_incident::Severity;

/// What happened to one incident.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Granted; `units` equals the incident's `required` vector.
    Granted { units: Vec<Units> },
    Rejected(AllocError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncidentOutcome {
    pub incident: IncidentId,
    pub severity: Severity,
    pub outcome:  Outcome,
}

impl IncidentOutcome {
    pub fn is_granted(&self) -> bool {
        matches!(self.outcome, Outcome::Granted { .. })
    }

    pub fn reject_kind(&self) -> Option<RejectKind> {
        match &self.outcome {
            Outcome::Granted { .. } => None,
            Outcome::Rejected(e) => Some(e.kind()),
        }
    }
}

/// Per-incident outcomes in processing order, plus pool totals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub outcomes:        Vec<IncidentOutcome>,
    pub initial:         Vec<Units>,
    pub final_available: Vec<Units>,
}

impl RunReport {
    pub fn granted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_granted()).count()
    }

    pub fn rejected(&self) -> usize {
        self.outcomes.len() - self.granted()
    }

    /// Number of rejections of the given kind.
    pub fn rejected_by(&self, kind: RejectKind) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.reject_kind() == Some(kind))
            .count()
    }

    /// Processing order.
    pub fn order(&self) -> Vec<IncidentId> {
        self.outcomes.iter().map(|o| o.incident).collect()
    }

    pub fn outcome(&self, id: IncidentId) -> Option<&IncidentOutcome> {
        self.outcomes.iter().find(|o| o.incident == id)
    }
}
