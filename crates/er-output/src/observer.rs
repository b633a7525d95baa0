//! `LogObserver<W>`: bridges `DispatchObserver` to an `OutputWriter`.

use er_sim::{AllocationRecord, DispatchObserver, RejectionRecord, RunReport};
use tracing::error;

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`DispatchObserver`] that writes every grant and rejection to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `DispatchObserver`
/// methods have no return value.  After `dispatcher.run()` returns, check for
/// errors with [`take_error`][Self::take_error].  A failed write never stops
/// the run.
pub struct LogObserver<W: OutputWriter> {
    writer:     W,
    grants:     usize,
    rejections: usize,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> LogObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            grants:     0,
            rejections: 0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Grants and rejections successfully written.  Rejections the writer
    /// skips are not counted.
    pub fn counts(&self) -> (usize, usize) {
        (self.grants, self.rejections)
    }

    /// Unwrap the inner writer (e.g. to inspect output after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err<T>(&mut self, result: OutputResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                // Keep only the first error.
                if self.last_error.is_none() {
                    error!(error = %e, "allocation log write failed");
                    self.last_error = Some(e);
                }
                None
            }
        }
    }
}

impl<W: OutputWriter> DispatchObserver for LogObserver<W> {
    fn on_granted(&mut self, record: &AllocationRecord) {
        let result = self.writer.write_grant(record);
        if self.store_err(result).is_some() {
            self.grants += 1;
        }
    }

    fn on_rejected(&mut self, record: &RejectionRecord) {
        let result = self.writer.write_rejection(record);
        if self.store_err(result) == Some(true) {
            self.rejections += 1;
        }
    }

    fn on_run_end(&mut self, _report: &RunReport) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
