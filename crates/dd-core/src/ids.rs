//! Strongly typed identifier wrappers.
//!
//! Every id in the simulator is 1-based: vehicle 1 is the first slot in the
//! fleet, request 1 is the first line of the request feed, flight 1 is the
//! first committed flight.  The inner integer is `pub` so writers can emit
//! it directly.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The first id handed out.
            pub const FIRST: $name = $name(1);

            /// The id following `self`.
            #[inline(always)]
            pub fn next(self) -> $name {
                $name(self.0 + 1)
            }

            /// Zero-based position, for indexing a `Vec` laid out in id order.
            #[inline(always)]
            pub fn index(self) -> usize {
                (self.0 - 1) as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// One slot of the fixed vehicle pool, `1..=num_vehicles`.
    pub struct VehicleId(u32);
}

typed_id! {
    /// A delivery request, numbered by its line in the request feed.
    pub struct RequestId(u32);
}

typed_id! {
    /// A committed flight.  Allocated monotonically, never reused.
    pub struct FlightId(u32);
}
