//! `Dispatcher`: the per-tick dispatch pipeline and the state it mutates.

use dd_core::{DispatchConfig, Request, SimTime};

use crate::{FleetAvailability, Flight, FlightAssembler, FlightPlan, RequestQueue, build_route};

/// Owns the request queue, the fleet availability table, and the flight-id
/// counter.
///
/// The configuration is not stored; every call that needs it borrows it
/// from the caller.
#[derive(Debug)]
pub struct Dispatcher {
    queue:     RequestQueue,
    fleet:     FleetAvailability,
    assembler: FlightAssembler,
}

impl Dispatcher {
    pub fn new(config: &DispatchConfig) -> Self {
        Self {
            queue:     RequestQueue::new(),
            fleet:     FleetAvailability::new(config.num_vehicles),
            assembler: FlightAssembler::new(),
        }
    }

    /// Admit `request` to the pending queue.
    pub fn enqueue(&mut self, request: Request) {
        self.queue.enqueue(request);
    }

    /// Launch as many flights as free vehicles and pending requests allow at
    /// `now`.
    ///
    /// Returns flights in launch order, which is ascending vehicle id.  A
    /// vehicle whose first candidate request is out of range launches
    /// nothing; the next vehicle sees the same queue.  Requests that are not
    /// flown stay queued.
    pub fn dispatch(&mut self, now: SimTime, config: &DispatchConfig) -> Vec<Flight> {
        if self.queue.is_empty() {
            return Vec::new();
        }
        let vehicles = self.fleet.available_vehicles(now);
        if vehicles.is_empty() {
            return Vec::new();
        }

        self.queue.sort_for_dispatch();

        let mut flights = Vec::new();
        for vehicle in vehicles {
            if self.queue.is_empty() {
                break;
            }
            let Some(candidate) = build_route(self.queue.as_slice(), config) else {
                continue;
            };

            let requests = self.queue.take(&candidate.accepted);
            let plan = FlightPlan {
                vehicle,
                route: candidate.stops,
                requests,
                planned_distance_m: candidate.planned_distance_m,
            };
            flights.push(self.assembler.assemble(plan, now, &mut self.fleet, config));
        }
        flights
    }

    pub fn queue(&self) -> &RequestQueue {
        &self.queue
    }

    pub fn fleet(&self) -> &FleetAvailability {
        &self.fleet
    }

    /// Number of requests still waiting.
    pub fn pending_len(&self) -> usize {
        self.queue.len()
    }

    /// Consume the dispatcher, returning requests that were never flown.
    pub fn into_pending(self) -> Vec<Request> {
        self.queue.into_vec()
    }
}
