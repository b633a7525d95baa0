//! Append-only text log of granted incidents.
//!
//! One block per grant:
//!
//! ```text
//! Fire ID: 0, Location: Ridge, Severity: 7
//! Required Teams: 5, Required Vehicles: 3, Required Water: 1000
//! Max Teams: 5, Max Vehicles: 3, Max Water: 1000
//! Allocated Teams: 5, Allocated Vehicles: 3, Allocated Water: 1000
//! ---------------------------------------------
//! ```
//!
//! The file is opened in append mode, so successive runs accumulate.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use er_core::{ResourceCatalog, Units};
use er_sim::AllocationRecord;

use crate::OutputResult;
use crate::writer::OutputWriter;

/// Log file name used by the demo when no path is given.
pub const DEFAULT_LOG_FILE: &str = "resource_log.txt";

const SEPARATOR: &str = "---------------------------------------------";

pub struct TextLogWriter<O: Write = BufWriter<File>> {
    out:      O,
    catalog:  ResourceCatalog,
    finished: bool,
}

impl TextLogWriter {
    /// Open `path` for appending, creating it if missing.
    pub fn open(path: &Path, catalog: ResourceCatalog) -> OutputResult<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::from_writer(BufWriter::new(file), catalog))
    }
}

impl<O: Write> TextLogWriter<O> {
    /// Log to an arbitrary sink (stdout, an in-memory buffer, …).
    pub fn from_writer(out: O, catalog: ResourceCatalog) -> Self {
        Self { out, catalog, finished: false }
    }

    pub fn into_inner(self) -> O {
        self.out
    }

    fn units_line(&self, label: &str, units: &[Units]) -> String {
        self.catalog
            .iter()
            .zip(units)
            .map(|(ty, u)| format!("{label} {}: {u}", ty.name))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<O: Write> OutputWriter for TextLogWriter<O> {
    fn write_grant(&mut self, record: &AllocationRecord) -> OutputResult<()> {
        let required = self.units_line("Required", &record.required);
        let max_claim = self.units_line("Max", &record.max_claim);
        let allocated = self.units_line("Allocated", &record.allocated);

        writeln!(
            self.out,
            "Fire ID: {}, Location: {}, Severity: {}",
            record.incident_id.0, record.location, record.severity
        )?;
        writeln!(self.out, "{required}")?;
        writeln!(self.out, "{max_claim}")?;
        writeln!(self.out, "{allocated}")?;
        writeln!(self.out, "{SEPARATOR}")?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
