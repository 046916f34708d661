//! Dispatch configuration.
//!
//! Built once at startup and passed by reference to the fleet, the route
//! builder, the flight assembler, and the driver.  Applications typically
//! start from [`DispatchConfig::default`] and override fields from a JSON
//! file (see the `day_run` demo).

use crate::{DdError, DdResult, SimTime};

/// Fleet, vehicle, and clock parameters for one simulated day.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DispatchConfig {
    /// Vehicles at the depot.  Ids run `1..=num_vehicles`.
    pub num_vehicles: u32,

    /// Most requests a single flight may carry.
    pub max_per_flight: usize,

    /// Constant ground speed, metres per second.
    pub speed_mps: u32,

    /// Cumulative flight range in metres: outbound legs plus the direct
    /// return from the last stop.
    pub max_range_m: f64,

    /// Seconds per driver tick.
    pub tick_secs: u32,

    /// Exclusive end of the tick range, seconds since midnight.
    pub day_end_secs: u32,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            num_vehicles:   10,
            max_per_flight: 3,
            speed_mps:      30,
            max_range_m:    160_000.0,
            tick_secs:      60,
            day_end_secs:   SimTime::SECS_PER_DAY,
        }
    }
}

impl DispatchConfig {
    /// The driver's exclusive end time.
    #[inline]
    pub fn day_end(&self) -> SimTime {
        SimTime(self.day_end_secs)
    }

    /// Reject parameter combinations the dispatcher cannot run with.
    pub fn validate(&self) -> DdResult<()> {
        if self.num_vehicles == 0 {
            return Err(DdError::Config("num_vehicles must be at least 1".into()));
        }
        if self.max_per_flight == 0 {
            return Err(DdError::Config("max_per_flight must be at least 1".into()));
        }
        if self.speed_mps == 0 {
            return Err(DdError::Config("speed_mps must be positive".into()));
        }
        if self.max_range_m.is_nan() || self.max_range_m <= 0.0 {
            return Err(DdError::Config(format!(
                "max_range_m must be positive, got {}",
                self.max_range_m
            )));
        }
        if self.tick_secs == 0 {
            return Err(DdError::Config("tick_secs must be positive".into()));
        }
        if self.day_end_secs == 0 {
            return Err(DdError::Config("day_end_secs must be positive".into()));
        }
        Ok(())
    }
}
