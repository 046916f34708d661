//! Greedy route construction for one vehicle.

use std::sync::Arc;

use tracing::trace;

use dd_core::{DEPOT, DEPOT_NAME, DispatchConfig, Location, Request, Site};

/// One stop on a route.
#[derive(Clone, Debug, PartialEq)]
pub enum Stop {
    Depot,
    Site(Arc<Site>),
}

impl Stop {
    /// Stop name as written to the output: the site name or `"Nest"`.
    pub fn name(&self) -> &str {
        match self {
            Stop::Depot    => DEPOT_NAME,
            Stop::Site(s)  => &s.name,
        }
    }

    pub fn location(&self) -> Location {
        match self {
            Stop::Depot    => DEPOT,
            Stop::Site(s)  => s.location,
        }
    }
}

/// A route accepted by [`build_route`], not yet committed.
#[derive(Clone, Debug)]
pub struct CandidateRoute {
    /// Depot, one stop per accepted request, depot.
    pub stops: Vec<Stop>,

    /// Positions of the accepted requests in the slice passed to
    /// [`build_route`], strictly ascending.
    pub accepted: Vec<usize>,

    /// Outbound legs up to the last delivery plus the direct return leg.
    /// Never exceeds `max_range_m`.
    pub planned_distance_m: f64,
}

/// Greedily fill one vehicle from the front of `pending`.
///
/// Requests are taken in slice order while the vehicle has capacity.  For
/// each one the route must still be able to reach it and fly straight home
/// within `max_range_m`; the first request that fails this ends the scan.
/// Later requests are not considered, even if they would fit.
///
/// Returns `None` if not even the first request can be accepted.
pub fn build_route(pending: &[Request], config: &DispatchConfig) -> Option<CandidateRoute> {
    let mut stops = vec![Stop::Depot];
    let mut accepted = Vec::with_capacity(config.max_per_flight);
    let mut last = DEPOT;
    let mut cumulative_m = 0.0;

    for (i, request) in pending.iter().enumerate() {
        if accepted.len() >= config.max_per_flight {
            break;
        }

        let target = request.location();
        let leg_m = last.distance_m(target);
        let return_m = target.depot_distance_m();

        if cumulative_m + leg_m + return_m > config.max_range_m {
            trace!(
                request = request.id.0,
                site = %request.site.name,
                needed_m = cumulative_m + leg_m + return_m,
                "range limit reached; route scan stopped"
            );
            break;
        }

        stops.push(Stop::Site(Arc::clone(&request.site)));
        accepted.push(i);
        cumulative_m += leg_m;
        last = target;
    }

    if accepted.is_empty() {
        return None;
    }

    stops.push(Stop::Depot);
    Some(CandidateRoute {
        stops,
        accepted,
        planned_distance_m: cumulative_m + last.depot_distance_m(),
    })
}
