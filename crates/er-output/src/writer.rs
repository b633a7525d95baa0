//! The `OutputWriter` trait implemented by all backend writers.

use er_sim::{AllocationRecord, RejectionRecord};

use crate::OutputResult;

/// Trait implemented by the text-log and CSV writers.
///
/// Errors are stored by [`LogObserver`][crate::LogObserver] and retrieved
/// with [`take_error`][crate::LogObserver::take_error] after the run.
pub trait OutputWriter {
    /// Write one granted incident.
    fn write_grant(&mut self, record: &AllocationRecord) -> OutputResult<()>;

    /// Write one refused incident, returning whether a record was written.
    /// Writers that only log grants keep the default, which skips it.
    fn write_rejection(&mut self, _record: &RejectionRecord) -> OutputResult<bool> {
        Ok(false)
    }

    /// Flush all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
