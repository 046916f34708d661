use dd_core::SimTime;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: {msg}")]
    Parse { line: u64, msg: String },

    #[error("line {line}: unknown site {name:?}")]
    UnknownSite { line: u64, name: String },

    #[error("duplicate site {0:?}")]
    DuplicateSite(String),

    #[error("site name {0:?} is reserved for the depot")]
    ReservedSiteName(String),

    #[error("line {line}: request time {time} is earlier than the previous request at {previous}")]
    Unsorted { line: u64, time: SimTime, previous: SimTime },
}

pub type FeedResult<T> = Result<T, FeedError>;
