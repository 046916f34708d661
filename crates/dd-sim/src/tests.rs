//! Integration tests for dd-sim.

use std::collections::BTreeMap;
use std::sync::Arc;

use dd_core::{DispatchConfig, Priority, Request, RequestId, SimTime, Site, VehicleId};
use dd_dispatch::Flight;

use crate::{NoopObserver, Sim, SimBuilder, SimError, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn site(name: &str, north_m: i32, east_m: i32) -> Arc<Site> {
    Arc::new(Site::new(name, north_m, east_m))
}

/// Requests from `(time, site, priority)` triples, ids 1.. in order.
fn feed(entries: &[(u32, &Arc<Site>, Priority)]) -> Vec<Request> {
    entries
        .iter()
        .enumerate()
        .map(|(i, &(time, s, priority))| {
            Request::new(RequestId(i as u32 + 1), SimTime(time), Arc::clone(s), priority)
        })
        .collect()
}

fn run(config: DispatchConfig, requests: Vec<Request>) -> Sim {
    let mut sim = SimBuilder::new(config, requests).build().unwrap();
    sim.run(&mut NoopObserver).unwrap();
    sim
}

fn request_ids(flight: &Flight) -> Vec<u32> {
    flight.requests.iter().map(|r| r.id.0).collect()
}

/// A busy synthetic day: 40 reachable sites at assorted radii, 300 requests
/// with a fixed pseudo-random pattern of times, sites, and priorities.
fn busy_day() -> Vec<Request> {
    let sites: Vec<Arc<Site>> = (0..40)
        .map(|i| {
            let r = 5_000 + (i * 1_913) % 65_000;
            let (n, e) = match i % 4 {
                0 => (r, 0),
                1 => (0, r),
                2 => (-r, r / 3),
                _ => (r / 2, -r),
            };
            site(&format!("S{i}"), n, e)
        })
        .collect();

    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    let mut time = 21_600u32;
    (1..=300)
        .map(|id| {
            time += (next() % 180) as u32;
            let s = &sites[(next() % sites.len() as u64) as usize];
            let priority = if next() % 4 == 0 { Priority::Emergency } else { Priority::Resupply };
            Request::new(RequestId(id), SimTime(time), Arc::clone(s), priority)
        })
        .collect()
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn clock_starts_at_first_request() {
        let s = site("A", 0, 3_000);
        let sim = SimBuilder::new(DispatchConfig::default(), feed(&[(25_230, &s, Priority::Resupply)]))
            .build()
            .unwrap();
        assert_eq!(sim.clock.current, SimTime(25_230));
        assert_eq!(sim.clock.end, SimTime(86_400));
    }

    #[test]
    fn start_time_override() {
        let s = site("A", 0, 3_000);
        let sim = SimBuilder::new(DispatchConfig::default(), feed(&[(600, &s, Priority::Resupply)]))
            .start_time(SimTime(0))
            .build()
            .unwrap();
        assert_eq!(sim.clock.current, SimTime(0));
    }

    #[test]
    fn invalid_config_rejected() {
        let config = DispatchConfig { num_vehicles: 0, ..Default::default() };
        let result = SimBuilder::new(config, Vec::new()).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn unsorted_feed_rejected() {
        let s = site("A", 0, 3_000);
        let requests = feed(&[
            (0, &s, Priority::Resupply),
            (120, &s, Priority::Resupply),
            (60, &s, Priority::Resupply),
        ]);
        match SimBuilder::new(DispatchConfig::default(), requests).build() {
            Err(SimError::UnsortedRequests { index, time, previous }) => {
                assert_eq!(index, 2);
                assert_eq!(time, SimTime(60));
                assert_eq!(previous, SimTime(120));
            }
            Err(other) => panic!("expected UnsortedRequests, got {other}"),
            Ok(_) => panic!("expected UnsortedRequests, got a Sim"),
        }
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn a_single_emergency_round_trip() {
        let s = site("Site", 0, 3_000);
        let sim = run(DispatchConfig::default(), feed(&[(0, &s, Priority::Emergency)]));

        assert_eq!(sim.flights().len(), 1);
        let flight = &sim.flights()[0];
        assert_eq!(flight.stop_names(), ["Nest", "Site", "Nest"]);
        assert_eq!(flight.segment_times, [100, 100]);
        assert_eq!(flight.launch_time, SimTime(0));
        assert_eq!(flight.completion_time, SimTime(200));
        assert!(sim.unserved().is_empty());
    }

    #[test]
    fn b_capacity_overflow_goes_to_second_vehicle() {
        let s = site("Site", 0, 3_000);
        let requests = feed(&[
            (0, &s, Priority::Resupply),
            (0, &s, Priority::Resupply),
            (0, &s, Priority::Resupply),
            (0, &s, Priority::Resupply),
        ]);
        let sim = run(DispatchConfig::default(), requests);

        assert_eq!(sim.flights().len(), 2);
        assert_eq!(request_ids(&sim.flights()[0]), [1, 2, 3]);
        assert_eq!(sim.flights()[0].vehicle, VehicleId(1));
        assert_eq!(request_ids(&sim.flights()[1]), [4]);
        assert_eq!(sim.flights()[1].vehicle, VehicleId(2));
    }

    #[test]
    fn b_capacity_overflow_single_vehicle_waits_for_return() {
        let s = site("Site", 0, 3_000);
        let requests = feed(&[
            (0, &s, Priority::Resupply),
            (0, &s, Priority::Resupply),
            (0, &s, Priority::Resupply),
            (0, &s, Priority::Resupply),
        ]);
        let config = DispatchConfig { num_vehicles: 1, ..Default::default() };
        let sim = run(config, requests);

        let [first, second] = sim.flights() else {
            panic!("expected two flights, got {}", sim.flights().len());
        };
        assert_eq!(request_ids(first), [1, 2, 3]);
        assert_eq!(request_ids(second), [4]);
        assert_eq!(second.vehicle, VehicleId(1));
        // Segments 100, 0, 0, 100: back at 200, next tick is 240.
        assert_eq!(first.completion_time, SimTime(200));
        assert_eq!(second.launch_time, SimTime(240));
        assert!(second.launch_time >= first.completion_time);
    }

    #[test]
    fn c_out_of_range_request_starves_all_day() {
        let far = site("Far", 0, 80_001);
        let sim = run(DispatchConfig::default(), feed(&[(0, &far, Priority::Emergency)]));

        assert!(sim.flights().is_empty());
        assert!(sim.segments().is_empty());
        assert_eq!(sim.unserved().len(), 1);
        assert_eq!(sim.unserved()[0].id, RequestId(1));
        assert!(sim.is_finished());
    }

    #[test]
    fn d_ten_simultaneous_deliveries_use_every_vehicle_once() {
        // Ten sites 70 km out at 36° spacing: each is reachable alone, but
        // any two together exceed the range.
        let sites: Vec<Arc<Site>> = (0..10)
            .map(|i| {
                let angle = f64::from(i) * std::f64::consts::PI / 5.0;
                let n = (70_000.0 * angle.cos()).round() as i32;
                let e = (70_000.0 * angle.sin()).round() as i32;
                site(&format!("S{i}"), n, e)
            })
            .collect();
        let entries: Vec<_> = sites.iter().map(|s| (0u32, s, Priority::Resupply)).collect();
        let sim = run(DispatchConfig::default(), feed(&entries));

        let at_zero: Vec<&Flight> = sim.flights().iter().filter(|f| f.launch_time == SimTime(0)).collect();
        assert_eq!(at_zero.len(), 10);
        assert!(at_zero.iter().all(|f| f.requests.len() == 1));
        let vehicles: Vec<u32> = at_zero.iter().map(|f| f.vehicle.0).collect();
        assert_eq!(vehicles, (1..=10).collect::<Vec<_>>());
        assert_eq!(sim.flights().len(), 10);
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use super::*;

    #[test]
    fn capacity_range_and_shape_hold_on_busy_day() {
        let config = DispatchConfig::default();
        let sim = run(config.clone(), busy_day());
        assert!(!sim.flights().is_empty());

        for flight in sim.flights() {
            let n = flight.requests.len();
            assert!((1..=config.max_per_flight).contains(&n), "{flight}");
            assert!(flight.planned_distance_m <= config.max_range_m, "{flight}");
            assert_eq!(flight.route.len(), n + 2, "{flight}");
            assert_eq!(flight.stop_names().first(), Some(&"Nest"));
            assert_eq!(flight.stop_names().last(), Some(&"Nest"));
            assert_eq!(flight.segment_times.len(), n + 1);
            assert_eq!(
                flight.completion_time,
                flight.launch_time + flight.segment_times.iter().sum::<u32>()
            );
        }
    }

    #[test]
    fn range_recomputed_from_route() {
        let sim = run(DispatchConfig::default(), busy_day());
        for flight in sim.flights() {
            let stops: Vec<_> = flight.route.iter().map(|s| s.location()).collect();
            let last = stops[stops.len() - 2];
            let outbound: f64 = stops[..stops.len() - 1].windows(2).map(|w| w[0].distance_m(w[1])).sum();
            assert!(outbound + last.depot_distance_m() <= 160_000.0, "{flight}");
        }
    }

    #[test]
    fn no_vehicle_is_double_booked() {
        let sim = run(DispatchConfig::default(), busy_day());
        let mut by_vehicle: BTreeMap<VehicleId, Vec<(SimTime, SimTime)>> = BTreeMap::new();
        for f in sim.flights() {
            by_vehicle.entry(f.vehicle).or_default().push((f.launch_time, f.completion_time));
        }
        for (vehicle, mut spans) in by_vehicle {
            spans.sort();
            for pair in spans.windows(2) {
                assert!(pair[0].1 <= pair[1].0, "{vehicle} overlaps: {pair:?}");
            }
        }
    }

    #[test]
    fn every_request_flown_at_most_once() {
        let sim = run(DispatchConfig::default(), busy_day());
        let mut seen: Vec<u32> = sim.flights().iter().flat_map(request_ids).collect();
        seen.extend(sim.unserved().iter().map(|r| r.id.0));
        let total = seen.len();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), total);
        assert_eq!(total + sim.not_admitted(), 300);
    }

    #[test]
    fn flights_never_launch_before_their_requests() {
        let sim = run(DispatchConfig::default(), busy_day());
        for f in sim.flights() {
            assert!(f.requests.iter().all(|r| r.time <= f.launch_time), "{f}");
        }
    }

    #[test]
    fn flight_ids_are_sequential_in_launch_order() {
        let sim = run(DispatchConfig::default(), busy_day());
        for (i, f) in sim.flights().iter().enumerate() {
            assert_eq!(f.id.0 as usize, i + 1);
        }
    }

    #[test]
    fn emergency_chosen_when_only_one_fits() {
        // Opposite directions: no single flight can reach both.
        let east = site("East", 0, 50_000);
        let west = site("West", 0, -50_000);
        let requests = feed(&[(0, &east, Priority::Resupply), (0, &west, Priority::Emergency)]);
        let config = DispatchConfig { num_vehicles: 1, ..Default::default() };
        let sim = run(config, requests);

        assert_eq!(request_ids(&sim.flights()[0]), [2]);
        assert_eq!(request_ids(&sim.flights()[1]), [1]);
    }

    #[test]
    fn deterministic_output() {
        let a = run(DispatchConfig::default(), busy_day());
        let b = run(DispatchConfig::default(), busy_day());
        assert_eq!(a.segments(), b.segments());
    }

    #[test]
    fn segments_follow_flight_then_route_order() {
        let sim = run(DispatchConfig::default(), busy_day());
        let expected: Vec<_> = sim.flights().iter().flat_map(|f| f.segments()).collect();
        assert_eq!(sim.segments(), expected.as_slice());
    }
}

// ── Tick loop ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn empty_feed_runs_no_ticks() {
        let mut counter = TickCounter::default();
        let mut sim = SimBuilder::new(DispatchConfig::default(), Vec::new()).build().unwrap();
        sim.run(&mut counter).unwrap();
        assert_eq!(counter.ticks, 0);
        assert!(sim.flights().is_empty());
        assert_eq!(counter.ended, 1);
    }

    #[test]
    fn ticks_step_from_first_request_to_day_end() {
        let s = site("A", 0, 3_000);
        let mut counter = TickCounter::default();
        let mut sim = SimBuilder::new(DispatchConfig::default(), feed(&[(86_280, &s, Priority::Resupply)]))
            .build()
            .unwrap();
        sim.run(&mut counter).unwrap();
        // 86 280 and 86 340; 86 400 is excluded.
        assert_eq!(counter.ticks, 2);
        assert_eq!(sim.flights()[0].launch_time, SimTime(86_280));
    }

    #[test]
    fn launches_on_tick_grid_anchored_at_first_request() {
        let s = site("A", 0, 3_000);
        let sim = run(
            DispatchConfig::default(),
            feed(&[(30, &s, Priority::Resupply), (100, &s, Priority::Resupply)]),
        );
        let launches: Vec<u32> = sim.flights().iter().map(|f| f.launch_time.0).collect();
        // Admitted at 30 and at the 150 tick (first tick with time >= 100).
        assert_eq!(launches, [30, 150]);
    }

    #[test]
    fn requests_after_last_tick_are_dropped() {
        let s = site("A", 0, 3_000);
        let sim = run(
            DispatchConfig::default(),
            feed(&[(0, &s, Priority::Resupply), (86_390, &s, Priority::Emergency)]),
        );
        assert_eq!(sim.flights().len(), 1);
        assert_eq!(sim.not_admitted(), 1);
        assert!(sim.unserved().is_empty());
    }

    #[test]
    fn run_twice_is_an_error() {
        let s = site("A", 0, 3_000);
        let mut sim = SimBuilder::new(DispatchConfig::default(), feed(&[(0, &s, Priority::Resupply)]))
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert!(matches!(sim.run(&mut NoopObserver), Err(SimError::AlreadyRun)));
        assert!(matches!(sim.run_ticks(1, &mut NoopObserver), Err(SimError::AlreadyRun)));
    }

    #[test]
    fn step_reports_end_of_day_without_finishing() {
        let s = site("A", 0, 3_000);
        let mut counter = TickCounter::default();
        let mut sim = SimBuilder::new(DispatchConfig::default(), feed(&[(86_280, &s, Priority::Resupply)]))
            .build()
            .unwrap();

        assert!(sim.step(&mut counter).unwrap());
        assert_eq!(sim.flights().len(), 1);
        assert!(sim.step(&mut counter).unwrap());
        assert!(!sim.step(&mut counter).unwrap());
        assert_eq!(counter.ticks, 2);
        assert_eq!(counter.ended, 0);
        assert!(!sim.is_finished());

        sim.run(&mut counter).unwrap();
        assert_eq!(counter.ended, 1);
        assert!(matches!(sim.step(&mut counter), Err(SimError::AlreadyRun)));
    }

    #[test]
    fn tick_larger_than_remaining_day_runs_once() {
        let s = site("A", 0, 3_000);
        let config = DispatchConfig { tick_secs: 4_294_900_000, ..DispatchConfig::default() };
        assert!(config.validate().is_ok());

        let mut counter = TickCounter::default();
        let mut sim = SimBuilder::new(config, feed(&[(86_000, &s, Priority::Resupply)]))
            .build()
            .unwrap();
        sim.run(&mut counter).unwrap();

        assert_eq!(counter.ticks, 1);
        assert_eq!(sim.flights().len(), 1);
        assert_eq!(sim.clock.current, SimTime(86_400));
    }

    #[test]
    fn run_ticks_then_run_matches_single_run() {
        let mut stepped = SimBuilder::new(DispatchConfig::default(), busy_day()).build().unwrap();
        stepped.run_ticks(120, &mut NoopObserver).unwrap();
        assert!(!stepped.is_finished());
        stepped.run(&mut NoopObserver).unwrap();

        let whole = run(DispatchConfig::default(), busy_day());
        assert_eq!(stepped.segments(), whole.segments());
    }

    #[derive(Default)]
    struct TickCounter {
        ticks:    usize,
        launched: usize,
        flights:  usize,
        ended:    usize,
        unserved: usize,
    }

    impl SimObserver for TickCounter {
        fn on_tick_start(&mut self, _now: SimTime) {
            self.ticks += 1;
        }

        fn on_flight(&mut self, _flight: &Flight) {
            self.flights += 1;
        }

        fn on_tick_end(&mut self, _now: SimTime, launched: usize, _pending: usize) {
            self.launched += launched;
        }

        fn on_sim_end(&mut self, _end: SimTime, unserved: &[Request]) {
            self.ended += 1;
            self.unserved = unserved.len();
        }
    }

    #[test]
    fn observer_sees_every_flight() {
        let far = site("Far", 0, 120_000);
        let mut requests = busy_day();
        let last_time = requests.last().map_or(0, |r| r.time.0);
        requests.push(Request::new(RequestId(301), SimTime(last_time), far, Priority::Resupply));

        let mut counter = TickCounter::default();
        let mut sim = SimBuilder::new(DispatchConfig::default(), requests).build().unwrap();
        sim.run(&mut counter).unwrap();

        assert_eq!(counter.flights, sim.flights().len());
        assert_eq!(counter.launched, sim.flights().len());
        assert_eq!(counter.ended, 1);
        assert_eq!(counter.unserved, sim.unserved().len());
        assert!(counter.unserved >= 1);
    }
}
