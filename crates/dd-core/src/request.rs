//! Destinations and delivery requests.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::{DdError, Location, RequestId, SimTime};

/// A named delivery destination.  Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Site {
    pub name:     String,
    pub location: Location,
}

impl Site {
    pub fn new(name: impl Into<String>, north_m: i32, east_m: i32) -> Self {
        Self { name: name.into(), location: Location::new(north_m, east_m) }
    }
}

/// Dispatch class of a request.
///
/// Emergencies are always dispatched ahead of resupply, whatever their
/// arrival times.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Priority {
    Emergency,
    Resupply,
}

impl Priority {
    /// `true` for [`Priority::Resupply`]; sorts emergencies first.
    #[inline]
    pub fn is_deferrable(self) -> bool {
        self != Priority::Emergency
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Emergency => "Emergency",
            Priority::Resupply  => "Resupply",
        }
    }
}

impl FromStr for Priority {
    type Err = DdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Emergency" => Ok(Priority::Emergency),
            "Resupply"  => Ok(Priority::Resupply),
            other => Err(DdError::Parse(format!(
                "invalid priority {other:?}: expected \"Emergency\" or \"Resupply\""
            ))),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One delivery request.
///
/// The site is shared with the catalog it was resolved against; cloning a
/// request is cheap.
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    pub id:       RequestId,
    pub time:     SimTime,
    pub site:     Arc<Site>,
    pub priority: Priority,
}

impl Request {
    pub fn new(id: RequestId, time: SimTime, site: Arc<Site>, priority: Priority) -> Self {
        Self { id, time, site, priority }
    }

    /// Sort key for dispatch: emergencies first, then earliest arrival.
    #[inline]
    pub fn dispatch_key(&self) -> (bool, SimTime) {
        (self.priority.is_deferrable(), self.time)
    }

    #[inline]
    pub fn location(&self) -> Location {
        self.site.location
    }
}
