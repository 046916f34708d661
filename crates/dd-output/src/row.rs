//! Plain data row types written by output backends.

use dd_dispatch::{Flight, RouteSegment};

/// One route edge of one flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentRow {
    pub flight_id:   u32,
    pub vehicle_id:  u32,
    pub from:        String,
    pub to:          String,
    pub launch_time: u32,
}

impl From<&RouteSegment> for SegmentRow {
    fn from(s: &RouteSegment) -> Self {
        Self {
            flight_id:   s.flight_id.0,
            vehicle_id:  s.vehicle_id.0,
            from:        s.from.clone(),
            to:          s.to.clone(),
            launch_time: s.launch_time.0,
        }
    }
}

/// One committed flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightSummaryRow {
    pub flight_id:       u32,
    pub vehicle_id:      u32,
    pub launch_time:     u32,
    pub completion_time: u32,
    /// Delivered request ids, `;`-separated, in stop order.
    pub request_ids:     String,
    /// Stop names, `;`-separated, depot to depot.
    pub stops:           String,
}

impl From<&Flight> for FlightSummaryRow {
    fn from(f: &Flight) -> Self {
        Self {
            flight_id:       f.id.0,
            vehicle_id:      f.vehicle.0,
            launch_time:     f.launch_time.0,
            completion_time: f.completion_time.0,
            request_ids:     f
                .requests
                .iter()
                .map(|r| r.id.0.to_string())
                .collect::<Vec<_>>()
                .join(";"),
            stops:           f.stop_names().join(";"),
        }
    }
}
