use dd_core::{DdError, SimTime};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] DdError),

    #[error("request feed not sorted by time: entry {index} at {time} follows {previous}")]
    UnsortedRequests {
        index:    usize,
        time:     SimTime,
        previous: SimTime,
    },

    #[error("simulation already ran to the end of the day; build a new one")]
    AlreadyRun,
}

pub type SimResult<T> = Result<T, SimError>;
