//! Committed flights and the assembler that creates them.

use std::fmt;

use tracing::debug;

use dd_core::{DispatchConfig, FlightId, Location, Request, SimTime, VehicleId, route_times};

use crate::{FleetAvailability, Stop};

// ── Flight ────────────────────────────────────────────────────────────────────

/// One committed dispatch of one vehicle.  Immutable once created.
#[derive(Clone, Debug)]
pub struct Flight {
    pub id:                 FlightId,
    pub vehicle:            VehicleId,
    pub launch_time:        SimTime,
    /// Delivered requests, in stop order.
    pub requests:           Vec<Request>,
    /// Depot, one stop per request, depot.
    pub route:              Vec<Stop>,
    /// Seconds per route edge; `route.len() - 1` entries.
    pub segment_times:      Vec<u32>,
    pub completion_time:    SimTime,
    /// Range-checked distance: outbound legs plus the direct return.
    pub planned_distance_m: f64,
}

impl Flight {
    /// Stop names in route order.
    pub fn stop_names(&self) -> Vec<&str> {
        self.route.iter().map(Stop::name).collect()
    }

    /// Total airborne seconds.
    pub fn duration_secs(&self) -> u32 {
        self.completion_time - self.launch_time
    }

    /// One [`RouteSegment`] per route edge, in route order.
    pub fn segments(&self) -> impl Iterator<Item = RouteSegment> + '_ {
        self.route.windows(2).map(move |leg| RouteSegment {
            flight_id:   self.id,
            vehicle_id:  self.vehicle,
            from:        leg[0].name().to_owned(),
            to:          leg[1].name().to_owned(),
            launch_time: self.launch_time,
        })
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Flight {} (Vehicle {}) @ {} Route: {}>",
            self.id.0,
            self.vehicle.0,
            self.launch_time.0,
            self.stop_names().join(" -> "),
        )
    }
}

// ── RouteSegment ──────────────────────────────────────────────────────────────

/// Output projection of one flight edge.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RouteSegment {
    pub flight_id:   FlightId,
    pub vehicle_id:  VehicleId,
    pub from:        String,
    pub to:          String,
    pub launch_time: SimTime,
}

// ── Assembly ──────────────────────────────────────────────────────────────────

/// A validated route with its requests already taken from the queue.
#[derive(Clone, Debug)]
pub struct FlightPlan {
    pub vehicle:            VehicleId,
    pub route:              Vec<Stop>,
    pub requests:           Vec<Request>,
    pub planned_distance_m: f64,
}

/// Turns [`FlightPlan`]s into [`Flight`]s and owns the flight-id counter.
///
/// Ids start at 1 and advance once per committed flight.
#[derive(Debug)]
pub struct FlightAssembler {
    next_id: FlightId,
}

impl Default for FlightAssembler {
    fn default() -> Self {
        Self { next_id: FlightId::FIRST }
    }
}

impl FlightAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next committed flight will receive.
    pub fn peek_next_id(&self) -> FlightId {
        self.next_id
    }

    /// Commit `plan` launching at `now`.
    ///
    /// Computes segment times and the completion time, marks the vehicle
    /// busy until completion, and allocates the flight id.
    pub fn assemble(
        &mut self,
        plan:   FlightPlan,
        now:    SimTime,
        fleet:  &mut FleetAvailability,
        config: &DispatchConfig,
    ) -> Flight {
        let points: Vec<Location> = plan.route.iter().map(Stop::location).collect();
        let segment_times = route_times(&points, config.speed_mps);
        let total = segment_times.iter().fold(0u32, |acc, &t| acc.saturating_add(t));
        let completion_time = now + total;

        fleet.mark_busy(plan.vehicle, completion_time);

        let id = self.next_id;
        self.next_id = id.next();

        let flight = Flight {
            id,
            vehicle: plan.vehicle,
            launch_time: now,
            requests: plan.requests,
            route: plan.route,
            segment_times,
            completion_time,
            planned_distance_m: plan.planned_distance_m,
        };

        debug!(
            flight = flight.id.0,
            vehicle = flight.vehicle.0,
            requests = flight.requests.len(),
            launch = %flight.launch_time,
            completion = %flight.completion_time,
            "flight committed"
        );
        flight
    }
}
