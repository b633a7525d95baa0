//! Command-line flags.

use std::path::PathBuf;

use clap::Parser;
use er_alloc::TieBreak;

/// Emergency-response resource allocation console.
///
/// With no incident file and no --random, incidents are read interactively.
#[derive(Parser, Clone, Debug, PartialEq)]
#[command(name = "dispatch")]
#[command(about = "Allocate pooled resources to wildfire incidents by severity", long_about = None)]
pub struct Args {
    /// Incident CSV file
    #[arg(value_name = "INCIDENTS.csv", conflicts_with = "random")]
    pub incidents: Option<PathBuf>,

    /// Resource pool JSON (default: 15 teams, 10 vehicles, 5000 water)
    #[arg(long, value_name = "FILE")]
    pub pool: Option<PathBuf>,

    /// Generate N incidents instead of reading them
    #[arg(long, value_name = "N")]
    pub random: Option<usize>,

    /// Generator seed
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Equal-severity ordering: stable | exchange
    #[arg(long, value_name = "MODE", default_value_t = TieBreak::Stable)]
    pub tie_break: TieBreak,

    /// Keep grants held instead of releasing each one
    #[arg(long)]
    pub hold: bool,

    /// Text log path
    #[arg(long, value_name = "FILE", default_value = er_output::DEFAULT_LOG_FILE)]
    pub log: PathBuf,

    /// Also write allocations.csv and rejections.csv to DIR
    #[arg(long = "csv", value_name = "DIR")]
    pub csv_dir: Option<PathBuf>,
}

/// Where incidents come from.
#[derive(Clone, Debug, PartialEq)]
pub enum Source {
    Interactive,
    Csv(PathBuf),
    Random { count: usize, seed: u64 },
}

impl Args {
    pub fn source(&self) -> Source {
        match (&self.incidents, self.random) {
            (Some(path), _) => Source::Csv(path.clone()),
            (None, Some(count)) => Source::Random { count, seed: self.seed },
            (None, None) => Source::Interactive,
        }
    }
}
