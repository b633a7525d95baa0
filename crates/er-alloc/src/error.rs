use er_core::{IncidentId, Units};
use er_incident::Violation;
use thiserror::Error;

/// Why a grant was refused.  Every variant is a recoverable, per-incident
/// outcome; none of them leaves units behind in the pool or ledger.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AllocError {
    #[error("{incident}: requires {required} {resource}, only {available} available")]
    InsufficientSupply {
        incident:  IncidentId,
        resource:  String,
        required:  Units,
        available: Units,
    },

    #[error("{incident}: grant would leave the system in an unsafe state")]
    UnsafeGrant { incident: IncidentId },

    #[error("{incident}: configuration violation: {violation}")]
    ConfigurationViolation { incident: IncidentId, violation: Violation },

    #[error("{incident}: already holds an allocation")]
    AlreadyAllocated { incident: IncidentId },

    #[error("{0} is not in the ledger")]
    UnknownIncident(IncidentId),

    #[error("max-claim row has {got} entries, expected {expected}")]
    LedgerShape { expected: usize, got: usize },
}

/// Coarse classification of an [`AllocError`], for reports and log rows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RejectKind {
    InsufficientSupply,
    UnsafeGrant,
    ConfigurationViolation,
}

impl RejectKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RejectKind::InsufficientSupply     => "insufficient_supply",
            RejectKind::UnsafeGrant            => "unsafe_grant",
            RejectKind::ConfigurationViolation => "configuration_violation",
        }
    }
}

impl AllocError {
    pub fn kind(&self) -> RejectKind {
        match self {
            AllocError::InsufficientSupply { .. } => RejectKind::InsufficientSupply,
            AllocError::UnsafeGrant { .. }        => RejectKind::UnsafeGrant,
            AllocError::ConfigurationViolation { .. }
            | AllocError::AlreadyAllocated { .. }
            | AllocError::UnknownIncident(_)
            | AllocError::LedgerShape { .. }      => RejectKind::ConfigurationViolation,
        }
    }
}

pub type AllocResult<T> = Result<T, AllocError>;
