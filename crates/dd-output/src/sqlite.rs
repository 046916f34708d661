//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `flight_segments` and `flight_summaries`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{FlightSummaryRow, OutputResult, SegmentRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS flight_segments (
                 seq         INTEGER PRIMARY KEY AUTOINCREMENT,
                 flight_id   INTEGER NOT NULL,
                 vehicle_id  INTEGER NOT NULL,
                 from_stop   TEXT    NOT NULL,
                 to_stop     TEXT    NOT NULL,
                 launch_time INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS flight_summaries (
                 flight_id       INTEGER PRIMARY KEY,
                 vehicle_id      INTEGER NOT NULL,
                 launch_time     INTEGER NOT NULL,
                 completion_time INTEGER NOT NULL,
                 request_ids     TEXT    NOT NULL,
                 stops           TEXT    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_segments(&mut self, rows: &[SegmentRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO flight_segments \
                 (flight_id, vehicle_id, from_stop, to_stop, launch_time) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.flight_id,
                    row.vehicle_id,
                    row.from,
                    row.to,
                    row.launch_time,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_flight_summary(&mut self, row: &FlightSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO flight_summaries \
             (flight_id, vehicle_id, launch_time, completion_time, request_ids, stops) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                row.flight_id,
                row.vehicle_id,
                row.launch_time,
                row.completion_time,
                row.request_ids,
                row.stops,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
