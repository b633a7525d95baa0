//! `er-output`: allocation log writers for the rust_er simulator.
//!
//! Two backends are provided:
//!
//! | Writer          | Files created                               |
//! |-----------------|---------------------------------------------|
//! | `TextLogWriter` | `resource_log.txt` (appended, one block per grant) |
//! | `CsvWriter`     | `allocations.csv`, `rejections.csv`         |
//!
//! Both implement [`OutputWriter`] and are driven by [`LogObserver`], which
//! implements `er_sim::DispatchObserver`.
//!
//! `allocations.csv` uses the incident loader's column names
//! (`location`, `severity`, `required_<type>`, `max_<type>`), so a grant log
//! can be fed back in as an incident file.
//!
//! # Usage
//!
//! ```rust,ignore
//! use er_output::{LogObserver, TextLogWriter};
//!
//! let writer = TextLogWriter::open(Path::new("resource_log.txt"), catalog.clone())?;
//! let mut obs = LogObserver::new(writer);
//! dispatcher.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod text_log;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::LogObserver;
pub use text_log::{DEFAULT_LOG_FILE, TextLogWriter};
pub use writer::OutputWriter;
