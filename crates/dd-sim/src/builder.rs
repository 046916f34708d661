//! Builder for constructing a [`Sim`].

use std::collections::VecDeque;

use dd_core::{DispatchConfig, Request, SimClock, SimTime};
use dd_dispatch::Dispatcher;

use crate::{Sim, SimError, SimResult};

/// Builder for [`Sim`].
///
/// # Required inputs
///
/// - [`DispatchConfig`]: fleet size, capacity, speed, range, tick, day end
/// - the request feed, ascending by time (as produced by `dd_feed`)
///
/// # Optional inputs
///
/// | Method            | Default                          |
/// |-------------------|----------------------------------|
/// | `.start_time(t)`  | time of the first request        |
pub struct SimBuilder {
    config:   DispatchConfig,
    requests: Vec<Request>,
    start:    Option<SimTime>,
}

impl SimBuilder {
    pub fn new(config: DispatchConfig, requests: Vec<Request>) -> Self {
        Self { config, requests, start: None }
    }

    /// Start the clock at `start` instead of at the first request.
    pub fn start_time(mut self, start: SimTime) -> Self {
        self.start = Some(start);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        if let Some((index, pair)) = self
            .requests
            .windows(2)
            .enumerate()
            .find(|(_, pair)| pair[1].time < pair[0].time)
        {
            return Err(SimError::UnsortedRequests {
                index:    index + 1,
                time:     pair[1].time,
                previous: pair[0].time,
            });
        }

        // No requests: the clock starts at the end and no tick runs.
        let start = self
            .start
            .or_else(|| self.requests.first().map(|r| r.time))
            .unwrap_or(self.config.day_end());

        let clock = SimClock::new(start, self.config.tick_secs, self.config.day_end());
        let dispatcher = Dispatcher::new(&self.config);

        Ok(Sim::new(self.config, clock, VecDeque::from(self.requests), dispatcher))
    }
}
