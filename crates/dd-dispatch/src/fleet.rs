//! `FleetAvailability`: when each vehicle is next free.

use dd_core::{SimTime, VehicleId};

/// Next-free time per vehicle, indexed by `VehicleId`.
///
/// Every vehicle starts free at midnight.
#[derive(Clone, Debug)]
pub struct FleetAvailability {
    available_at: Vec<SimTime>,
}

impl FleetAvailability {
    /// A fleet of `num_vehicles`, ids `1..=num_vehicles`, all free.
    pub fn new(num_vehicles: u32) -> Self {
        Self { available_at: vec![SimTime::MIDNIGHT; num_vehicles as usize] }
    }

    /// Vehicles free at `now` (`available_at <= now`), lowest id first.
    ///
    /// Low ids are always preferred; there is no load balancing.
    pub fn available_vehicles(&self, now: SimTime) -> Vec<VehicleId> {
        self.ids()
            .filter(|&v| self.available_at(v) <= now)
            .collect()
    }

    /// Mark `vehicle` busy until `until`.
    #[inline]
    pub fn mark_busy(&mut self, vehicle: VehicleId, until: SimTime) {
        self.available_at[vehicle.index()] = until;
    }

    #[inline]
    pub fn available_at(&self, vehicle: VehicleId) -> SimTime {
        self.available_at[vehicle.index()]
    }

    /// All vehicle ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = VehicleId> + '_ {
        (1..=self.available_at.len() as u32).map(VehicleId)
    }

    pub fn len(&self) -> usize {
        self.available_at.len()
    }

    pub fn is_empty(&self) -> bool {
        self.available_at.is_empty()
    }
}
