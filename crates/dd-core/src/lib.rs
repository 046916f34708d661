//! `dd-core`: foundational types for the drone dispatch simulator.
//!
//! This crate is a dependency of every other `dd-*` crate.  It has no `dd-*`
//! dependencies and no I/O; the only external crate is `thiserror` (plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`ids`]       | `VehicleId`, `RequestId`, `FlightId`                      |
//! | [`geo`]       | `Location`, planar distance, `segment_time`, `route_times` |
//! | [`time`]      | `SimTime`, `SimClock`                                     |
//! | [`config`]    | `DispatchConfig`                                          |
//! | [`request`]   | `Site`, `Priority`, `Request`                             |
//! | [`error`]     | `DdError`, `DdResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod request;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::DispatchConfig;
pub use error::{DdError, DdResult};
pub use geo::{DEPOT, DEPOT_NAME, Location, route_times, segment_time};
pub use ids::{FlightId, RequestId, VehicleId};
pub use request::{Priority, Request, Site};
pub use time::{SimClock, SimTime};
