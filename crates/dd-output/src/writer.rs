//! The `OutputWriter` trait implemented by all backend writers.

use crate::{FlightSummaryRow, OutputResult, SegmentRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write the route segments of one flight, in route order.
    fn write_segments(&mut self, rows: &[SegmentRow]) -> OutputResult<()>;

    /// Write one flight summary row.
    fn write_flight_summary(&mut self, row: &FlightSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
