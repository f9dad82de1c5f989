//! Application state for the parking API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use tracing::error;

use crate::clock::Clock;
use crate::lot::ParkingLot;

use super::response::{ApiError, ApiErrorResponse};

/// Shared application state.
///
/// The lot has no locking of its own, so it sits behind a mutex and every
/// request holds the lock for exactly one lot operation.
#[derive(Clone)]
pub struct AppState {
    lot: Arc<Mutex<ParkingLot>>,
}

impl AppState {
    /// Creates a new application state around `lot`.
    pub fn new(lot: ParkingLot) -> Self {
        Self {
            lot: Arc::new(Mutex::new(lot)),
        }
    }

    /// Locks the lot for one operation.
    ///
    /// A poisoned lock becomes an internal error response.
    pub fn lot(&self) -> Result<MutexGuard<'_, ParkingLot>, ApiErrorResponse> {
        self.lot.lock().map_err(|_| {
            error!("Parking lot mutex poisoned");
            ApiErrorResponse::internal(ApiError::new(
                "INTERNAL_ERROR",
                "Parking lot state is unavailable",
            ))
        })
    }

    /// The current instant according to the lot's clock.
    pub fn now(&self) -> Result<DateTime<Utc>, ApiErrorResponse> {
        Ok(self.lot()?.clock().now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::models::{Vehicle, VehicleType};
    use chrono::TimeZone;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_one_lot() {
        let start = Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap();
        let state = AppState::new(ParkingLot::with_clock(Arc::new(FixedClock::new(start))));
        let other = state.clone();

        state
            .lot()
            .unwrap()
            .check_in(Vehicle::new("AA111AA", VehicleType::Car, start, None))
            .unwrap();

        assert!(other.lot().unwrap().is_parked("AA111AA"));
        assert_eq!(other.now().unwrap(), start);
    }
}
