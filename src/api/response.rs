//! Response types for the parking API.
//!
//! This module defines the success bodies, the error response structure and
//! the mapping from [`ParkingError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::ParkingError;
use crate::models::CheckOutReceipt;

/// Greeting returned on a successful check-in.
pub const WELCOME_MESSAGE: &str = "Welcome to AlkeParking!";

/// Body returned by `POST /vehicles`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInResponse {
    /// The plate that was parked.
    pub plate: String,
    /// Greeting for the driver.
    pub message: String,
    /// Vehicles parked after this check-in.
    pub occupancy: usize,
    /// Spaces left after this check-in.
    pub available_spaces: usize,
}

/// Body returned by `DELETE /vehicles/:plate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutResponse {
    /// Farewell for the driver, quoting the fee.
    pub message: String,
    /// The check-out receipt.
    #[serde(flatten)]
    pub receipt: CheckOutReceipt,
}

impl From<CheckOutReceipt> for CheckOutResponse {
    fn from(receipt: CheckOutReceipt) -> Self {
        Self {
            message: format!("Your fee is {}. Come back soon.", receipt.fee),
            receipt,
        }
    }
}

/// Body returned by `GET /vehicles`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatesResponse {
    /// Plates of every parked vehicle, in no particular order.
    pub plates: Vec<String>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }

    /// A 500 response.
    pub fn internal(error: ApiError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<ParkingError> for ApiErrorResponse {
    fn from(error: ParkingError) -> Self {
        let message = error.to_string();
        match error {
            ParkingError::CapacityFull { capacity } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "CAPACITY_FULL",
                    message,
                    format!("All {} spaces are taken", capacity),
                ),
            },
            ParkingError::DuplicatePlate { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "DUPLICATE_PLATE",
                    message,
                    "A vehicle with this plate must check out before checking in again",
                ),
            },
            ParkingError::VehicleNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("VEHICLE_NOT_FOUND", message),
            },
            ParkingError::ConfigNotFound { .. }
            | ParkingError::ConfigParseError { .. }
            | ParkingError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FeeCalculation, VehicleType};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_parking_error_status_codes() {
        let cases = [
            (ParkingError::CapacityFull { capacity: 20 }, StatusCode::CONFLICT, "CAPACITY_FULL"),
            (
                ParkingError::DuplicatePlate {
                    plate: "A".to_string(),
                },
                StatusCode::CONFLICT,
                "DUPLICATE_PLATE",
            ),
            (
                ParkingError::VehicleNotFound {
                    plate: "A".to_string(),
                },
                StatusCode::NOT_FOUND,
                "VEHICLE_NOT_FOUND",
            ),
            (
                ParkingError::ConfigNotFound {
                    path: "/x".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
            ),
        ];

        for (error, status, code) in cases {
            let response: ApiErrorResponse = error.into();
            assert_eq!(response.status, status);
            assert_eq!(response.error.code, code);
        }
    }

    #[test]
    fn test_check_out_response_quotes_fee() {
        let receipt = CheckOutReceipt {
            plate: "AA111AA".to_string(),
            check_in_time: Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap(),
            check_out_time: Utc.with_ymd_and_hms(2026, 1, 15, 11, 30, 0).unwrap(),
            fee: 30,
            calculation: FeeCalculation {
                vehicle_type: VehicleType::Car,
                parked_minutes: 150,
                base_fee: 20,
                extra_blocks: 2,
                surcharge: 10,
                discount_applied: false,
                discount: 0,
                fee: 30,
                steps: vec![],
            },
        };

        let response = CheckOutResponse::from(receipt);
        assert_eq!(response.message, "Your fee is 30. Come back soon.");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["fee"], 30);
        assert_eq!(json["plate"], "AA111AA");
        assert_eq!(json["message"], "Your fee is 30. Come back soon.");
    }
}
