//! `dd-sim`: the fixed-step day loop that drives the dispatcher.
//!
//! # Tick loop
//!
//! ```text
//! for t in (first_request_time..day_end).step_by(tick_secs):
//!   ① Admit   : move every not-yet-admitted request with time <= t into
//!                the dispatcher's queue, in request-id order.
//!   ② Dispatch: Dispatcher::dispatch(t) yields zero or more flights, at most
//!                one per free vehicle.
//!   ③ Collect : append each flight's route segments to the output, in
//!                launch order, then route order.
//! ```
//!
//! Requests still queued when the loop ends are not flown.  They are
//! reported through [`Sim::unserved`] and [`SimObserver::on_sim_end`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dd_core::DispatchConfig;
//! use dd_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(DispatchConfig::default(), requests).build()?;
//! sim.run(&mut NoopObserver)?;
//! for segment in sim.segments() { /* … */ }
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
