//! CSV feed loaders.
//!
//! # Site feed
//!
//! ```csv
//! Bigwig,  3000,  -1200
//! Hazel,  -8400,  15500
//! ```
//!
//! # Request feed
//!
//! ```csv
//! 25200, Bigwig, Resupply
//! 25260, Hazel,  Emergency
//! ```
//!
//! Request ids are assigned 1, 2, 3, … in file order.  Blank lines are
//! skipped and do not consume an id.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use dd_core::{Priority, Request, RequestId, SimTime, Site};

use crate::{FeedError, FeedResult, SiteCatalog};

const FIELDS_PER_RECORD: usize = 3;

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the site feed from a file.
pub fn load_sites_path(path: &Path) -> FeedResult<SiteCatalog> {
    let file = std::fs::File::open(path)?;
    load_sites_reader(file)
}

/// Like [`load_sites_path`] but accepts any `Read` source.
pub fn load_sites_reader<R: Read>(reader: R) -> FeedResult<SiteCatalog> {
    let mut catalog = SiteCatalog::new();

    for result in feed_reader(reader).records() {
        let record = result?;
        let line = line_of(&record);
        check_width(&record, line)?;

        let site = Site::new(
            &record[0],
            parse_int(&record[1], "north_m", line)?,
            parse_int(&record[2], "east_m", line)?,
        );
        catalog.insert(site)?;
    }

    debug!(sites = catalog.len(), "loaded site feed");
    Ok(catalog)
}

/// Load the request feed from a file, resolving site names against `sites`.
pub fn load_requests_path(path: &Path, sites: &SiteCatalog) -> FeedResult<Vec<Request>> {
    let file = std::fs::File::open(path)?;
    load_requests_reader(file, sites)
}

/// Like [`load_requests_path`] but accepts any `Read` source.
///
/// The returned requests are in file order, which must also be ascending
/// time order.
pub fn load_requests_reader<R: Read>(reader: R, sites: &SiteCatalog) -> FeedResult<Vec<Request>> {
    let mut requests: Vec<Request> = Vec::new();
    let mut next_id = RequestId::FIRST;

    for result in feed_reader(reader).records() {
        let record = result?;
        let line = line_of(&record);
        check_width(&record, line)?;

        let time = SimTime(parse_int(&record[0], "time", line)?);
        if let Some(previous) = requests.last().map(|r| r.time).filter(|&p| time < p) {
            return Err(FeedError::Unsorted { line, time, previous });
        }

        let site = sites
            .get(&record[1])
            .cloned()
            .ok_or_else(|| FeedError::UnknownSite { line, name: record[1].to_owned() })?;

        let priority = record[2]
            .parse::<Priority>()
            .map_err(|e| FeedError::Parse { line, msg: e.to_string() })?;

        requests.push(Request::new(next_id, time, site, priority));
        next_id = next_id.next();
    }

    debug!(requests = requests.len(), "loaded request feed");
    Ok(requests)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn feed_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader)
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}

fn check_width(record: &StringRecord, line: u64) -> FeedResult<()> {
    if record.len() != FIELDS_PER_RECORD {
        return Err(FeedError::Parse {
            line,
            msg: format!("expected {FIELDS_PER_RECORD} fields, found {}", record.len()),
        });
    }
    Ok(())
}

fn parse_int<T: std::str::FromStr>(field: &str, what: &str, line: u64) -> FeedResult<T> {
    field.parse::<T>().map_err(|_| FeedError::Parse {
        line,
        msg: format!("invalid {what} {field:?}: expected an integer"),
    })
}
