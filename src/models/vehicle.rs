//! Vehicle model and related types.
//!
//! This module defines the [`Vehicle`] record and the [`VehicleType`] enum
//! with its standard base-fee table.

use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kinds of vehicle the lot accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    /// Passenger car.
    Car,
    /// Motorcycle.
    Moto,
    /// Minibus.
    MiniBus,
    /// Full-size bus.
    Bus,
}

impl VehicleType {
    /// Every vehicle type, in tariff order.
    pub const ALL: [VehicleType; 4] = [
        VehicleType::Car,
        VehicleType::Moto,
        VehicleType::MiniBus,
        VehicleType::Bus,
    ];

    /// Returns the standard base fee, which covers the first 120 minutes.
    ///
    /// # Examples
    ///
    /// ```
    /// use parking_engine::models::VehicleType;
    ///
    /// assert_eq!(VehicleType::Car.base_fee(), 20);
    /// assert_eq!(VehicleType::Bus.base_fee(), 30);
    /// ```
    pub fn base_fee(self) -> u32 {
        match self {
            VehicleType::Car => 20,
            VehicleType::Moto => 15,
            VehicleType::MiniBus => 25,
            VehicleType::Bus => 30,
        }
    }

    /// Returns the snake_case name used in configuration and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleType::Car => "car",
            VehicleType::Moto => "moto",
            VehicleType::MiniBus => "mini_bus",
            VehicleType::Bus => "bus",
        }
    }
}

/// A vehicle presented at the lot.
///
/// Identity is the plate alone: two records with the same plate compare
/// equal and hash identically whatever their other fields hold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    plate: String,
    vehicle_type: VehicleType,
    check_in_time: DateTime<Utc>,
    #[serde(default)]
    discount_card: Option<String>,
}

impl Vehicle {
    /// Creates a vehicle record.
    ///
    /// # Examples
    ///
    /// ```
    /// use parking_engine::models::{Vehicle, VehicleType};
    /// use chrono::Utc;
    ///
    /// let vehicle = Vehicle::new(
    ///     "AA111AA",
    ///     VehicleType::Car,
    ///     Utc::now(),
    ///     Some("DISCOUNT_CARD_001".to_string()),
    /// );
    /// assert!(vehicle.has_discount_card());
    /// ```
    pub fn new(
        plate: impl Into<String>,
        vehicle_type: VehicleType,
        check_in_time: DateTime<Utc>,
        discount_card: Option<String>,
    ) -> Self {
        Self {
            plate: plate.into(),
            vehicle_type,
            check_in_time,
            discount_card,
        }
    }

    /// The vehicle's plate.
    pub fn plate(&self) -> &str {
        &self.plate
    }

    /// The vehicle's type.
    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }

    /// When the vehicle checked in.
    pub fn check_in_time(&self) -> DateTime<Utc> {
        self.check_in_time
    }

    /// The discount card, if one was presented.
    pub fn discount_card(&self) -> Option<&str> {
        self.discount_card.as_deref()
    }

    /// Replaces the discount card.
    pub fn set_discount_card(&mut self, card: Option<String>) {
        self.discount_card = card;
    }

    /// Returns true when a non-empty discount card is present.
    pub fn has_discount_card(&self) -> bool {
        self.discount_card
            .as_deref()
            .is_some_and(|card| !card.is_empty())
    }

    /// Whole minutes between check-in and `now`.
    ///
    /// Partial minutes are truncated. An instant before check-in yields zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use parking_engine::models::{Vehicle, VehicleType};
    /// use chrono::{Duration, TimeZone, Utc};
    ///
    /// let checked_in = Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap();
    /// let vehicle = Vehicle::new("B222BBB", VehicleType::Moto, checked_in, None);
    /// let now = checked_in + Duration::seconds(150 * 60 + 59);
    /// assert_eq!(vehicle.parked_minutes(now), 150);
    /// ```
    pub fn parked_minutes(&self, now: DateTime<Utc>) -> u32 {
        let minutes = (now - self.check_in_time).num_minutes().max(0);
        u32::try_from(minutes).unwrap_or(u32::MAX)
    }
}

impl PartialEq for Vehicle {
    fn eq(&self, other: &Self) -> bool {
        self.plate == other.plate
    }
}

impl Eq for Vehicle {}

impl Hash for Vehicle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.plate.hash(state);
    }
}
