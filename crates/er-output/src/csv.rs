//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `allocations.csv`: `incident_id,location,severity`, then
//!   `required_<type>`, `max_<type>`, `allocated_<type>` per resource type
//! - `rejections.csv`: `incident_id,location,severity,kind,detail`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use er_core::ResourceCatalog;
use er_incident::column_name;
use er_sim::{AllocationRecord, RejectionRecord};

use crate::OutputResult;
use crate::writer::OutputWriter;

pub const ALLOCATIONS_FILE: &str = "allocations.csv";
pub const REJECTIONS_FILE: &str = "rejections.csv";

/// Writes grants and rejections to two CSV files.
pub struct CsvWriter {
    allocations: Writer<File>,
    rejections:  Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Create (truncating) the two CSV files in `dir` and write the header
    /// rows.  Per-type columns follow catalog order.
    pub fn new(dir: &Path, catalog: &ResourceCatalog) -> OutputResult<Self> {
        let mut header = vec!["incident_id".to_owned(), "location".to_owned(), "severity".to_owned()];
        for prefix in ["required", "max", "allocated"] {
            header.extend(catalog.iter().map(|ty| column_name(prefix, &ty.name)));
        }
        let mut allocations = Writer::from_path(dir.join(ALLOCATIONS_FILE))?;
        allocations.write_record(&header)?;

        let mut rejections = Writer::from_path(dir.join(REJECTIONS_FILE))?;
        rejections.write_record(["incident_id", "location", "severity", "kind", "detail"])?;

        Ok(Self {
            allocations,
            rejections,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_grant(&mut self, record: &AllocationRecord) -> OutputResult<()> {
        let mut row = vec![
            record.incident_id.0.to_string(),
            record.location.clone(),
            record.severity.to_string(),
        ];
        for units in [&record.required, &record.max_claim, &record.allocated] {
            row.extend(units.iter().map(u32::to_string));
        }
        self.allocations.write_record(&row)?;
        Ok(())
    }

    fn write_rejection(&mut self, record: &RejectionRecord) -> OutputResult<bool> {
        self.rejections.write_record(&[
            record.incident_id.0.to_string(),
            record.location.clone(),
            record.severity.to_string(),
            record.kind.as_str().to_owned(),
            record.error.to_string(),
        ])?;
        Ok(true)
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.allocations.flush()?;
        self.rejections.flush()?;
        Ok(())
    }
}
