//! `dd-output`: route-segment export for the drone dispatch simulator.
//!
//! Two backends:
//!
//! | Feature   | Backend     | Files created                                    |
//! |-----------|-------------|--------------------------------------------------|
//! | *(none)*  | CSV         | `flight_schedule.csv`, `flight_summaries.csv`    |
//! | `sqlite`  | SQLite      | `output.db`                                      |
//!
//! Both implement [`OutputWriter`] and are driven by [`SimOutputObserver`],
//! which implements `dd_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dd_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { return Err(e.into()); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{FlightSummaryRow, SegmentRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
