use er_alloc::AllocError;
use er_core::IncidentId;
use er_incident::Violation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("dispatch configuration error: {0}")]
    Config(String),

    #[error("{incident} does not fit the resource catalog: {violation}")]
    InvalidIncident { incident: IncidentId, violation: Violation },

    #[error("allocation state error: {0}")]
    Alloc(#[from] AllocError),

    #[error("dispatcher has already run; build a new one for another pass")]
    AlreadyRun,
}

pub type DispatchResult<T> = Result<T, DispatchError>;
