//! Request types for the parking API.
//!
//! This module defines the JSON request structures for the vehicle endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Vehicle, VehicleType};

/// Request body for `POST /vehicles`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInRequest {
    /// The vehicle's plate.
    pub plate: String,
    /// The vehicle's type.
    pub vehicle_type: VehicleType,
    /// Optional discount card.
    #[serde(default)]
    pub discount_card: Option<String>,
    /// Check-in instant; defaults to the lot clock's current time.
    #[serde(default)]
    pub check_in_time: Option<DateTime<Utc>>,
}

impl CheckInRequest {
    /// Builds the vehicle record, stamping it with `now` unless the request
    /// carries its own check-in time.
    pub fn into_vehicle(self, now: DateTime<Utc>) -> Vehicle {
        Vehicle::new(
            self.plate.trim(),
            self.vehicle_type,
            self.check_in_time.unwrap_or(now),
            self.discount_card,
        )
    }
}

/// Request body for `PUT /vehicles/:plate/discount-card`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountCardRequest {
    /// The card to assign; `null` clears it.
    pub card: Option<String>,
}
