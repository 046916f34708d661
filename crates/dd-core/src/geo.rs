//! Planar geometry relative to the depot.
//!
//! Sites are placed on a flat north/east grid in whole metres with the
//! depot at the origin.  Distances are Euclidean and kept as `f64` so the
//! range check sees the exact value; only travel times are truncated.

/// The reserved stop name of the depot.
pub const DEPOT_NAME: &str = "Nest";

/// The depot location.
pub const DEPOT: Location = Location::ORIGIN;

/// A point on the dispatch grid, in metres north and east of the depot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub north_m: i32,
    pub east_m:  i32,
}

impl Location {
    pub const ORIGIN: Location = Location { north_m: 0, east_m: 0 };

    #[inline]
    pub fn new(north_m: i32, east_m: i32) -> Self {
        Self { north_m, east_m }
    }

    /// Euclidean distance in metres.
    #[inline]
    pub fn distance_m(self, other: Location) -> f64 {
        let dn = f64::from(other.north_m) - f64::from(self.north_m);
        let de = f64::from(other.east_m) - f64::from(self.east_m);
        (dn * dn + de * de).sqrt()
    }

    /// Straight-line distance back to the depot.
    #[inline]
    pub fn depot_distance_m(self) -> f64 {
        self.distance_m(DEPOT)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} N, {} E)", self.north_m, self.east_m)
    }
}

/// Whole seconds to fly from `a` to `b` at `speed_mps`, truncated toward zero.
#[inline]
pub fn segment_time(a: Location, b: Location, speed_mps: u32) -> u32 {
    (a.distance_m(b) / f64::from(speed_mps)) as u32
}

/// Segment times for each consecutive pair of stops in `route`.
///
/// A route of `n` stops yields `n - 1` times; fewer than two stops yields
/// an empty vec.
pub fn route_times(route: &[Location], speed_mps: u32) -> Vec<u32> {
    route
        .windows(2)
        .map(|leg| segment_time(leg[0], leg[1], speed_mps))
        .collect()
}
