//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use dd_core::{Request, SimTime};
use dd_dispatch::Flight;
use dd_sim::SimObserver;

use crate::row::{FlightSummaryRow, SegmentRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes every committed flight to an
/// [`OutputWriter`] as it launches.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    rows:       usize,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Segment rows handed to the writer so far.
    pub fn segment_rows(&self) -> usize {
        self.rows
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_flight(&mut self, flight: &Flight) {
        let rows: Vec<SegmentRow> = flight.segments().map(|s| SegmentRow::from(&s)).collect();
        self.rows += rows.len();
        let result = self.writer.write_segments(&rows);
        self.store_err(result);

        let result = self.writer.write_flight_summary(&FlightSummaryRow::from(flight));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _end: SimTime, _unserved: &[Request]) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
