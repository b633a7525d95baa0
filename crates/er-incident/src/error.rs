use er_core::{CoreError, Units};
use thiserror::Error;

/// A precondition an incident's input fails.  The allocator treats any of
/// these as a configuration violation and never attempts the grant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("location must not be blank")]
    EmptyLocation,

    #[error("severity {severity} outside {min}..={max}")]
    SeverityOutOfRange { severity: u8, min: u8, max: u8 },

    #[error("{what} has {got} entries, expected {expected}")]
    DimensionMismatch {
        what:     &'static str,
        expected: usize,
        got:      usize,
    },

    #[error("requested {requested} {resource} exceeds cap {cap}")]
    OverCap {
        resource:  String,
        requested: Units,
        cap:       Units,
    },

    #[error("max claim {max_claim} {resource} is below required {required}")]
    ClaimBelowRequired {
        resource:  String,
        required:  Units,
        max_claim: Units,
    },
}

#[derive(Debug, Error)]
pub enum IncidentError {
    #[error("incident {index}: {violation}")]
    Invalid { index: usize, violation: Violation },

    #[error("{count} incidents exceeds the limit of {max}")]
    TooManyIncidents { count: usize, max: usize },

    #[error("no incidents supplied")]
    Empty,

    #[error("incident parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type IncidentResult<T> = Result<T, IncidentError>;
