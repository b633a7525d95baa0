//! dispatch: emergency-response resource allocation console.
//!
//! Reads wildfire incidents (interactively, from CSV, or generated), orders
//! them by severity, and grants each one its full request only when the pool
//! stays in a safe state.  Every grant is appended to `resource_log.txt`.
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

mod args;
mod prompt;

use std::io;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use er_core::{IncidentId, InputLimits, PoolConfig, ResourceCatalog, Units, UnitsDisplay};
use er_incident::{IncidentGenerator, IncidentRegistry, load_incidents_csv};
use er_output::{CsvWriter, LogObserver, TextLogWriter};
use er_sim::{
    AllocationRecord, DispatchBuilder, DispatchConfig, DispatchObserver, Outcome, RejectionRecord,
    RunReport,
};

use args::{Args, Source};
use prompt::Prompter;

// ── Observer wrapper ──────────────────────────────────────────────────────────

/// Prints console lines and fans records out to the text log and, when
/// requested, the CSV files.
struct ConsoleObserver {
    text: LogObserver<TextLogWriter>,
    csv:  Option<LogObserver<CsvWriter>>,
}

impl DispatchObserver for ConsoleObserver {
    fn on_granted(&mut self, record: &AllocationRecord) {
        println!(
            "Resources successfully allocated for Fire ID {} at {}.",
            record.incident_id.0, record.location
        );
        self.text.on_granted(record);
        if let Some(csv) = &mut self.csv {
            csv.on_granted(record);
        }
    }

    fn on_rejected(&mut self, record: &RejectionRecord) {
        println!("Resources not allocated for Fire ID {}: {}", record.incident_id.0, record.error);
        self.text.on_rejected(record);
        if let Some(csv) = &mut self.csv {
            csv.on_rejected(record);
        }
    }

    fn on_released(&mut self, incident: IncidentId, units: &[Units]) {
        self.text.on_released(incident, units);
        if let Some(csv) = &mut self.csv {
            csv.on_released(incident, units);
        }
    }

    fn on_run_end(&mut self, report: &RunReport) {
        self.text.on_run_end(report);
        if let Some(csv) = &mut self.csv {
            csv.on_run_end(report);
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_registry(args: &Args, catalog: &ResourceCatalog, limits: &InputLimits) -> Result<IncidentRegistry> {
    let registry = match args.source() {
        Source::Csv(path) => load_incidents_csv(&path, catalog, limits)
            .with_context(|| format!("loading incidents from {}", path.display()))?,
        Source::Random { count, seed } => {
            IncidentGenerator::new(catalog.clone(), limits.clone(), seed).registry(count)?
        }
        Source::Interactive => {
            let stdin = io::stdin();
            let specs = Prompter::new(stdin.lock(), io::stdout()).incidents(catalog, limits)?;
            IncidentRegistry::from_specs(specs, catalog, limits)?
        }
    };
    Ok(registry)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    // 1. Resource pool.
    let pool_config = match &args.pool {
        Some(path) => PoolConfig::from_json_path(path)
            .with_context(|| format!("loading pool config from {}", path.display()))?,
        None => PoolConfig::default(),
    };
    let catalog = pool_config.catalog()?;
    let limits = InputLimits::default();
    info!(pool = %UnitsDisplay { catalog: &catalog, units: &catalog.capacities() }, "resource pool ready");

    // 2. Incidents.
    let registry = load_registry(&args, &catalog, &limits)?;
    println!("Loaded {} incidents", registry.len());

    // 3. Dispatcher.
    let config = DispatchConfig {
        tie_break:           args.tie_break,
        release_after_grant: !args.hold,
    };
    let mut dispatcher = DispatchBuilder::new(catalog.clone(), registry)
        .config(config)
        .build()?;

    // 4. Output.
    let text = LogObserver::new(TextLogWriter::open(&args.log, catalog.clone())?);
    let csv = match &args.csv_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            Some(LogObserver::new(CsvWriter::new(dir, &catalog)?))
        }
        None => None,
    };
    let mut obs = ConsoleObserver { text, csv };

    // 5. Run.
    let t0 = Instant::now();
    let report = dispatcher.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.text.take_error() {
        eprintln!("log error ({}): {e}", args.log.display());
    }
    if let Some(e) = obs.csv.as_mut().and_then(LogObserver::take_error) {
        eprintln!("csv error: {e}");
    }

    // 6. Summary.
    println!();
    println!(
        "Dispatch complete in {:.3} ms: {} granted, {} rejected",
        elapsed.as_secs_f64() * 1e3,
        report.granted(),
        report.rejected()
    );
    println!();
    println!("{:<8} {:<16} {:<9} {:<24}", "Fire ID", "Location", "Severity", "Outcome");
    println!("{}", "-".repeat(60));
    for entry in &report.outcomes {
        let location = dispatcher
            .registry()
            .get(entry.incident)
            .map(|inc| inc.location())
            .unwrap_or("?");
        let outcome = match &entry.outcome {
            Outcome::Granted { .. } => "granted".to_owned(),
            Outcome::Rejected(e) => e.kind().as_str().to_owned(),
        };
        println!("{:<8} {:<16} {:<9} {:<24}", entry.incident.0, location, entry.severity.0, outcome);
    }
    println!();
    println!(
        "Available: {}",
        UnitsDisplay { catalog: &catalog, units: &report.final_available }
    );
    if !dispatcher.check_conservation() {
        anyhow::bail!("resource conservation violated");
    }

    Ok(())
}
