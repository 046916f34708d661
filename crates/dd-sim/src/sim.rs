//! The `Sim` struct and its tick loop.

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use dd_core::{DispatchConfig, Request, SimClock, SimTime};
use dd_dispatch::{Dispatcher, Flight, RouteSegment};

use crate::{SimError, SimObserver, SimResult};

/// The day simulation.
///
/// Owns every piece of mutable state: the not-yet-admitted feed, the
/// dispatcher (queue, fleet, flight-id counter), and the collected output.
/// A `Sim` is single-use; after [`run`][Self::run] completes, build a new
/// one from fresh inputs.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Fleet and clock parameters.
    pub config: DispatchConfig,

    /// Current tick time and the exclusive end of the day.
    pub clock: SimClock,

    /// Requests not yet admitted, ascending by time.
    feed: VecDeque<Request>,

    dispatcher: Dispatcher,

    /// Committed flights in launch order.
    flights: Vec<Flight>,

    /// Route segments of `flights`, flight order then route order.
    segments: Vec<RouteSegment>,

    finished: bool,
}

impl Sim {
    pub(crate) fn new(
        config:     DispatchConfig,
        clock:      SimClock,
        feed:       VecDeque<Request>,
        dispatcher: Dispatcher,
    ) -> Self {
        Self {
            config,
            clock,
            feed,
            dispatcher,
            flights:  Vec::new(),
            segments: Vec::new(),
            finished: false,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to the end of the day.
    ///
    /// # Errors
    ///
    /// [`SimError::AlreadyRun`] if this `Sim` has already finished.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        if self.finished {
            return Err(SimError::AlreadyRun);
        }

        info!(
            start = %self.clock.current,
            ticks = self.clock.remaining_ticks(),
            requests = self.feed.len(),
            vehicles = self.config.num_vehicles,
            "simulation started"
        );

        while !self.clock.is_finished() {
            self.tick(observer);
        }
        self.finish(observer);
        Ok(())
    }

    /// Run at most `n` ticks from the current position, stopping early at
    /// the end of the day.  Does not end the simulation; call
    /// [`run`][Self::run] to finish.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u32, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            if !self.step(observer)? {
                break;
            }
        }
        Ok(())
    }

    /// Process a single tick.  Returns `false` without doing anything once
    /// the clock has reached the end of the day.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<bool> {
        if self.finished {
            return Err(SimError::AlreadyRun);
        }
        if self.clock.is_finished() {
            return Ok(false);
        }
        self.tick(observer);
        Ok(true)
    }

    /// Committed flights in launch order.
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    /// All route segments emitted so far.
    pub fn segments(&self) -> &[RouteSegment] {
        &self.segments
    }

    /// Admitted requests that have not been flown.
    pub fn unserved(&self) -> &[Request] {
        self.dispatcher.queue().as_slice()
    }

    /// Requests whose time has not been reached yet.
    pub fn not_admitted(&self) -> usize {
        self.feed.len()
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn tick<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current;
        observer.on_tick_start(now);

        self.admit(now);

        let flights = self.dispatcher.dispatch(now, &self.config);
        let launched = flights.len();
        for flight in flights {
            self.segments.extend(flight.segments());
            observer.on_flight(&flight);
            self.flights.push(flight);
        }

        let pending = self.dispatcher.pending_len();
        if launched > 0 {
            debug!(now = %now, launched, pending, "flights launched");
        }
        observer.on_tick_end(now, launched, pending);

        self.clock.advance();
    }

    /// Admit every remaining request with `time <= now`, in feed order.
    fn admit(&mut self, now: SimTime) {
        while self.feed.front().is_some_and(|r| r.time <= now) {
            if let Some(request) = self.feed.pop_front() {
                self.dispatcher.enqueue(request);
            }
        }
    }

    fn finish<O: SimObserver>(&mut self, observer: &mut O) {
        self.finished = true;
        let unserved = self.dispatcher.queue().as_slice();

        info!(
            flights = self.flights.len(),
            segments = self.segments.len(),
            unserved = unserved.len(),
            "simulation finished"
        );
        if !unserved.is_empty() {
            warn!(
                count = unserved.len(),
                first = unserved[0].id.0,
                "requests still queued at end of day were not flown"
            );
        }

        observer.on_sim_end(self.clock.current, unserved);
    }
}
