//! Simulation observer trait for progress reporting and data collection.

use dd_core::{Request, SimTime};
use dd_dispatch::Flight;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
pub trait SimObserver {
    /// Called at the very start of each tick, before admission.
    fn on_tick_start(&mut self, _now: SimTime) {}

    /// Called once per committed flight, in launch order.
    fn on_flight(&mut self, _flight: &Flight) {}

    /// Called at the end of each tick.
    ///
    /// `launched` is the number of flights committed this tick; `pending`
    /// the number of requests still queued afterwards.
    fn on_tick_end(&mut self, _now: SimTime, _launched: usize, _pending: usize) {}

    /// Called once after the final tick.  `unserved` holds the requests that
    /// were admitted but never flown.
    fn on_sim_end(&mut self, _end: SimTime, _unserved: &[Request]) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
