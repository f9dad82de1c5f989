//! The parking lot service.
//!
//! [`ParkingLot`] owns the set of parked vehicles, enforces capacity, prices
//! each stay at check-out and keeps the lot's aggregate earnings. All state
//! changes go through its methods.
//!
//! The lot does no locking of its own. A host serving concurrent callers
//! must serialize access, e.g. behind a mutex as [`crate::api::AppState`]
//! does.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::calculation::calculate_vehicle_fee;
use crate::clock::{Clock, SystemClock};
use crate::config::{ConfigLoader, LotConfig, TariffConfig};
use crate::error::{ParkingError, ParkingResult};
use crate::models::{CheckOutReceipt, EarningsSummary, FeeCalculation, Vehicle};

/// A single parking facility.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use chrono::{Duration, TimeZone, Utc};
/// use parking_engine::clock::FixedClock;
/// use parking_engine::lot::ParkingLot;
/// use parking_engine::models::{Vehicle, VehicleType};
///
/// let start = Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap();
/// let clock = Arc::new(FixedClock::new(start));
/// let mut lot = ParkingLot::with_clock(clock.clone());
///
/// lot.check_in(Vehicle::new("AA111AA", VehicleType::Car, start, None)).unwrap();
/// clock.advance(Duration::minutes(150));
///
/// let receipt = lot.check_out("AA111AA").unwrap();
/// assert_eq!(receipt.fee, 30);
/// assert_eq!(lot.earnings_summary().total_earnings, 30);
/// ```
#[derive(Debug)]
pub struct ParkingLot {
    name: String,
    max_capacity: usize,
    tariff: TariffConfig,
    vehicles: HashMap<String, Vehicle>,
    total_checked_out: u64,
    total_earnings: u64,
    clock: Arc<dyn Clock>,
}

impl ParkingLot {
    /// Creates an empty lot from validated settings.
    ///
    /// Fails with `InvalidConfig` when the capacity is zero or the tariff is
    /// malformed.
    pub fn new(lot: LotConfig, tariff: TariffConfig, clock: Arc<dyn Clock>) -> ParkingResult<Self> {
        lot.validate()?;
        tariff.validate()?;

        Ok(Self {
            name: lot.name,
            vehicles: HashMap::with_capacity(lot.max_capacity),
            max_capacity: lot.max_capacity,
            tariff,
            total_checked_out: 0,
            total_earnings: 0,
            clock,
        })
    }

    /// Creates an empty lot from a loaded configuration.
    pub fn from_config(config: &ConfigLoader, clock: Arc<dyn Clock>) -> Self {
        let lot = config.lot();
        Self {
            name: lot.name.clone(),
            vehicles: HashMap::with_capacity(lot.max_capacity),
            max_capacity: lot.max_capacity,
            tariff: config.tariff().clone(),
            total_checked_out: 0,
            total_earnings: 0,
            clock,
        }
    }

    /// Creates an empty lot with the standard settings and the given clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::from_config(&ConfigLoader::default(), clock)
    }

    /// Parks a vehicle.
    ///
    /// Capacity is checked before plate uniqueness, so a full lot reports
    /// `CapacityFull` even for a plate that is already inside. On failure the
    /// lot is unchanged.
    pub fn check_in(&mut self, vehicle: Vehicle) -> ParkingResult<()> {
        if self.vehicles.len() >= self.max_capacity {
            warn!(
                plate = %vehicle.plate(),
                capacity = self.max_capacity,
                "Check-in rejected: lot is full"
            );
            return Err(ParkingError::CapacityFull {
                capacity: self.max_capacity,
            });
        }

        match self.vehicles.entry(vehicle.plate().to_string()) {
            Entry::Occupied(entry) => {
                warn!(plate = %entry.key(), "Check-in rejected: plate already parked");
                Err(ParkingError::DuplicatePlate {
                    plate: entry.key().clone(),
                })
            }
            Entry::Vacant(entry) => {
                info!(
                    plate = %vehicle.plate(),
                    vehicle_type = vehicle.vehicle_type().as_str(),
                    discount_card = vehicle.has_discount_card(),
                    "Vehicle checked in"
                );
                entry.insert(vehicle);
                debug!(occupancy = self.vehicles.len(), "Occupancy updated");
                Ok(())
            }
        }
    }

    /// Releases a vehicle and collects its fee.
    ///
    /// The fee is priced with the parked time at the moment of the call.
    /// Fails with `VehicleNotFound`, leaving all totals untouched, when the
    /// plate is not parked.
    pub fn check_out(&mut self, plate: &str) -> ParkingResult<CheckOutReceipt> {
        let Some(vehicle) = self.vehicles.remove(plate) else {
            warn!(plate = %plate, "Check-out failed: vehicle not found");
            return Err(ParkingError::VehicleNotFound {
                plate: plate.to_string(),
            });
        };

        let check_out_time = self.clock.now();
        let calculation = calculate_vehicle_fee(&vehicle, check_out_time, &self.tariff);

        self.total_checked_out += 1;
        self.total_earnings += u64::from(calculation.fee);

        info!(
            plate = %plate,
            parked_minutes = calculation.parked_minutes,
            fee = calculation.fee,
            total_earnings = self.total_earnings,
            "Vehicle checked out"
        );

        Ok(CheckOutReceipt {
            plate: vehicle.plate().to_string(),
            check_in_time: vehicle.check_in_time(),
            check_out_time,
            fee: calculation.fee,
            calculation,
        })
    }

    /// Prices a parked vehicle's stay as if it left now, without releasing it.
    pub fn quote(&self, plate: &str) -> ParkingResult<FeeCalculation> {
        let vehicle = self.find(plate)?;
        Ok(calculate_vehicle_fee(vehicle, self.clock.now(), &self.tariff))
    }

    /// Sets or clears the discount card of a parked vehicle.
    pub fn assign_discount_card(&mut self, plate: &str, card: Option<String>) -> ParkingResult<()> {
        let vehicle = self
            .vehicles
            .get_mut(plate)
            .ok_or_else(|| ParkingError::VehicleNotFound {
                plate: plate.to_string(),
            })?;
        vehicle.set_discount_card(card);
        debug!(
            plate = %plate,
            discount_card = vehicle.has_discount_card(),
            "Discount card updated"
        );
        Ok(())
    }

    /// Returns the number of completed check-outs and the fees collected.
    pub fn earnings_summary(&self) -> EarningsSummary {
        EarningsSummary {
            vehicle_count: self.total_checked_out,
            total_earnings: self.total_earnings,
        }
    }

    /// Returns the plates of every parked vehicle, in no particular order.
    pub fn list_parked_plates(&self) -> Vec<String> {
        self.vehicles.keys().cloned().collect()
    }

    /// Returns the parked vehicle with `plate`, if any.
    pub fn vehicle(&self, plate: &str) -> Option<&Vehicle> {
        self.vehicles.get(plate)
    }

    /// Returns true when a vehicle with `plate` is parked.
    pub fn is_parked(&self, plate: &str) -> bool {
        self.vehicles.contains_key(plate)
    }

    /// Number of parked vehicles.
    pub fn occupancy(&self) -> usize {
        self.vehicles.len()
    }

    /// Maximum number of parked vehicles.
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Free spaces left.
    pub fn available_spaces(&self) -> usize {
        self.max_capacity.saturating_sub(self.vehicles.len())
    }

    /// Returns true when no further vehicle can check in.
    pub fn is_full(&self) -> bool {
        self.vehicles.len() >= self.max_capacity
    }

    /// The facility's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tariff used to price stays.
    pub fn tariff(&self) -> &TariffConfig {
        &self.tariff
    }

    /// The lot's time source.
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    fn find(&self, plate: &str) -> ParkingResult<&Vehicle> {
        self.vehicles
            .get(plate)
            .ok_or_else(|| ParkingError::VehicleNotFound {
                plate: plate.to_string(),
            })
    }
}

impl Default for ParkingLot {
    fn default() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }
}
