//! CSV incident loader.
//!
//! # CSV format
//!
//! One row per incident, in input order (row `n` becomes `IncidentId(n)`).
//! Resource columns are named after the catalog's resource types,
//! lower-cased, with a `required_` or `max_` prefix:
//!
//! ```csv
//! location,severity,required_teams,required_vehicles,required_water,max_teams,max_vehicles,max_water
//! Ridge,7,5,3,1000,6,4,1500
//! Valley,9,4,2,800,4,2,800
//! ```
//!
//! Missing resource columns are an error; extra columns are ignored.  Every
//! row is validated exactly as interactive input would be.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use er_core::{InputLimits, ResourceCatalog, Units};

use crate::{IncidentError, IncidentRegistry, IncidentResult, IncidentSpec, Severity};

/// Load and validate incidents from a CSV file.
pub fn load_incidents_csv(
    path:    &Path,
    catalog: &ResourceCatalog,
    limits:  &InputLimits,
) -> IncidentResult<IncidentRegistry> {
    let file = std::fs::File::open(path).map_err(IncidentError::Io)?;
    load_incidents_reader(file, catalog, limits)
}

/// Like [`load_incidents_csv`] but accepts any `Read` source.
pub fn load_incidents_reader<R: Read>(
    reader:  R,
    catalog: &ResourceCatalog,
    limits:  &InputLimits,
) -> IncidentResult<IncidentRegistry> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut specs = Vec::new();

    for (row_no, result) in csv_reader.deserialize::<HashMap<String, String>>().enumerate() {
        let row = result.map_err(|e| IncidentError::Parse(e.to_string()))?;
        specs.push(parse_row(row_no, &row, catalog)?);
    }

    IncidentRegistry::from_specs(specs, catalog, limits)
}

/// Column name for a resource in the given role, e.g. `required_water`.
pub fn column_name(prefix: &str, resource: &str) -> String {
    format!("{prefix}_{}", resource.to_ascii_lowercase())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_row(
    row_no:  usize,
    row:     &HashMap<String, String>,
    catalog: &ResourceCatalog,
) -> IncidentResult<IncidentSpec> {
    let location = field(row_no, row, "location")?.to_owned();
    let severity = field(row_no, row, "severity")?
        .parse::<u8>()
        .map_err(|e| IncidentError::Parse(format!("row {row_no}: severity: {e}")))?;

    let units = |prefix: &str| -> IncidentResult<Vec<Units>> {
        catalog
            .iter()
            .map(|ty| {
                let col = column_name(prefix, &ty.name);
                field(row_no, row, &col)?
                    .parse::<Units>()
                    .map_err(|e| IncidentError::Parse(format!("row {row_no}: {col}: {e}")))
            })
            .collect()
    };

    Ok(IncidentSpec {
        location,
        severity: Severity(severity),
        required: units("required")?,
        max_claim: units("max")?,
    })
}

fn field<'a>(row_no: usize, row: &'a HashMap<String, String>, name: &str) -> IncidentResult<&'a str> {
    row.get(name)
        .map(|s| s.trim())
        .ok_or_else(|| IncidentError::Parse(format!("row {row_no}: missing column {name:?}")))
}
