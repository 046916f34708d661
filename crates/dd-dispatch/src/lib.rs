//! `dd-dispatch`: the dispatch core, deciding which vehicle flies which requests.
//!
//! # Pipeline for one tick
//!
//! ```text
//! dispatch(now):
//!   ① sort pending requests by (priority != Emergency, time), stable
//!   ② for each free vehicle in ascending id order:
//!        build_route : greedy first-fit from the queue front under the
//!                      capacity and cumulative-range limits
//!        take        : remove the accepted requests from the queue
//!        assemble    : segment times, completion time, mark vehicle busy,
//!                      allocate the next FlightId
//! ```
//!
//! The route builder scans a read-only snapshot of the sorted queue and
//! reports accepted indices; the queue is mutated only afterwards, in one
//! pass.  A vehicle's scan stops at the first request that would break the
//! range limit, even if a later request would fit.
//!
//! # Crate layout
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`queue`]       | `RequestQueue`                                        |
//! | [`fleet`]       | `FleetAvailability`                                   |
//! | [`route`]       | `Stop`, `CandidateRoute`, `build_route`               |
//! | [`flight`]      | `Flight`, `FlightPlan`, `FlightAssembler`, `RouteSegment` |
//! | [`dispatcher`]  | `Dispatcher`, owning the queue, fleet and id counter   |

pub mod dispatcher;
pub mod fleet;
pub mod flight;
pub mod queue;
pub mod route;


pub use dispatcher::Dispatcher;
pub use fleet::FleetAvailability;
pub use flight::{Flight, FlightAssembler, FlightPlan, RouteSegment};
pub use queue::RequestQueue;
pub use route::{CandidateRoute, Stop, build_route};
