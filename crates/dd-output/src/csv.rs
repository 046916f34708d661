//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `flight_schedule.csv`: one row per route segment
//! - `flight_summaries.csv`: one row per flight

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{FlightSummaryRow, OutputResult, SegmentRow};

pub const SEGMENT_HEADER: [&str; 5] = ["flight_id", "vehicle_id", "from", "to", "launch_time"];

pub const SUMMARY_HEADER: [&str; 6] =
    ["flight_id", "vehicle_id", "launch_time", "completion_time", "request_ids", "stops"];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    segments:  Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut segments = Writer::from_path(dir.join("flight_schedule.csv"))?;
        segments.write_record(SEGMENT_HEADER)?;

        let mut summaries = Writer::from_path(dir.join("flight_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        Ok(Self { segments, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_segments(&mut self, rows: &[SegmentRow]) -> OutputResult<()> {
        for row in rows {
            self.segments.write_record(&[
                row.flight_id.to_string(),
                row.vehicle_id.to_string(),
                row.from.clone(),
                row.to.clone(),
                row.launch_time.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_flight_summary(&mut self, row: &FlightSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.flight_id.to_string(),
            row.vehicle_id.to_string(),
            row.launch_time.to_string(),
            row.completion_time.to_string(),
            row.request_ids.clone(),
            row.stops.clone(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.segments.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
