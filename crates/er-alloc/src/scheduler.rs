//! Priority scheduler: order incidents by descending severity.

use std::fmt;
use std::str::FromStr;

use er_incident::{Incident, IncidentRegistry};

/// How incidents of equal severity are ordered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TieBreak {
    /// Equal severities keep their registry order (ascending id for a fresh
    /// registry).
    #[default]
    Stable,
    /// Pairwise exchange sort: for each slot `i`, swap in any later incident
    /// with strictly higher severity.  Not stable; kept for runs that must
    /// reproduce the historical console tool's processing order.
    Exchange,
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TieBreak::Stable   => "stable",
            TieBreak::Exchange => "exchange",
        })
    }
}

impl FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stable"   => Ok(TieBreak::Stable),
            "exchange" => Ok(TieBreak::Exchange),
            other => Err(format!("unknown tie-break {other:?}: expected \"stable\" or \"exchange\"")),
        }
    }
}

/// Reorder `registry` in place by descending severity.
pub fn schedule(registry: &mut IncidentRegistry, tie_break: TieBreak) {
    registry.reorder_with(|incidents| sort_by_severity(incidents, tie_break));
}

/// Sort a slice of incidents by descending severity.
pub fn sort_by_severity(incidents: &mut [Incident], tie_break: TieBreak) {
    match tie_break {
        TieBreak::Stable => incidents.sort_by(|a, b| b.severity().cmp(&a.severity())),
        TieBreak::Exchange => exchange_sort(incidents),
    }
}

fn exchange_sort(incidents: &mut [Incident]) {
    let n = incidents.len();
    for i in 0..n.saturating_sub(1) {
        for j in i + 1..n {
            if incidents[i].severity() < incidents[j].severity() {
                incidents.swap(i, j);
            }
        }
    }
}
