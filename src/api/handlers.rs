//! HTTP request handlers for the parking API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::clock::Clock;
use crate::models::{EarningsSummary, FeeCalculation};

use super::request::{CheckInRequest, DiscountCardRequest};
use super::response::{
    ApiError, ApiErrorResponse, CheckInResponse, CheckOutResponse, PlatesResponse,
    WELCOME_MESSAGE,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/vehicles", post(check_in_handler).get(list_vehicles_handler))
        .route("/vehicles/:plate", delete(check_out_handler))
        .route("/vehicles/:plate/quote", get(quote_handler))
        .route("/vehicles/:plate/discount-card", put(discount_card_handler))
        .route("/earnings", get(earnings_handler))
        .with_state(state)
}

/// Turns a JSON extraction failure into a 400 response.
fn reject_json(rejection: JsonRejection, correlation_id: Uuid) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}

/// Handler for POST /vehicles.
async fn check_in_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckInRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing check-in request");

    let Json(request) = payload.map_err(|rejection| reject_json(rejection, correlation_id))?;

    if request.plate.trim().is_empty() {
        warn!(correlation_id = %correlation_id, "Check-in with empty plate");
        return Err(ApiErrorResponse::bad_request(ApiError::validation_error(
            "plate must not be empty",
        )));
    }

    let mut lot = state.lot()?;
    let vehicle = request.into_vehicle(lot.clock().now());
    let plate = vehicle.plate().to_string();

    if let Err(err) = lot.check_in(vehicle) {
        warn!(
            correlation_id = %correlation_id,
            plate = %plate,
            error = %err,
            "Sorry, the check-in failed"
        );
        return Err(err.into());
    }

    let response = CheckInResponse {
        plate,
        message: WELCOME_MESSAGE.to_string(),
        occupancy: lot.occupancy(),
        available_spaces: lot.available_spaces(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for DELETE /vehicles/:plate.
async fn check_out_handler(
    State(state): State<AppState>,
    Path(plate): Path<String>,
) -> Result<Json<CheckOutResponse>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, plate = %plate, "Processing check-out request");

    let receipt = state.lot()?.check_out(&plate).map_err(|err| {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Sorry, the check-out failed"
        );
        ApiErrorResponse::from(err)
    })?;

    info!(
        correlation_id = %correlation_id,
        plate = %plate,
        fee = receipt.fee,
        "Check-out completed"
    );
    Ok(Json(receipt.into()))
}

/// Handler for GET /vehicles.
async fn list_vehicles_handler(
    State(state): State<AppState>,
) -> Result<Json<PlatesResponse>, ApiErrorResponse> {
    let plates = state.lot()?.list_parked_plates();
    Ok(Json(PlatesResponse { plates }))
}

/// Handler for GET /vehicles/:plate/quote.
async fn quote_handler(
    State(state): State<AppState>,
    Path(plate): Path<String>,
) -> Result<Json<FeeCalculation>, ApiErrorResponse> {
    let calculation = state.lot()?.quote(&plate)?;
    Ok(Json(calculation))
}

/// Handler for PUT /vehicles/:plate/discount-card.
async fn discount_card_handler(
    State(state): State<AppState>,
    Path(plate): Path<String>,
    payload: Result<Json<DiscountCardRequest>, JsonRejection>,
) -> Result<StatusCode, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|rejection| reject_json(rejection, correlation_id))?;

    state.lot()?.assign_discount_card(&plate, request.card)?;
    info!(correlation_id = %correlation_id, plate = %plate, "Discount card assigned");
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /earnings.
async fn earnings_handler(
    State(state): State<AppState>,
) -> Result<Json<EarningsSummary>, ApiErrorResponse> {
    let summary = state.lot()?.earnings_summary();
    info!(
        vehicle_count = summary.vehicle_count,
        total_earnings = summary.total_earnings,
        "{}",
        summary
    );
    Ok(Json(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::clock::FixedClock;
    use crate::lot::ParkingLot;
    use crate::models::VehicleType;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap()
    }

    fn create_test_state() -> (AppState, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock::new(start()));
        let lot = ParkingLot::with_clock(clock.clone());
        (AppState::new(lot), clock)
    }

    fn check_in_request(plate: &str, vehicle_type: VehicleType, card: Option<&str>) -> Request<Body> {
        let request = CheckInRequest {
            plate: plate.to_string(),
            vehicle_type,
            discount_card: card.map(str::to_string),
            check_in_time: None,
        };
        Request::builder()
            .method("POST")
            .uri("/vehicles")
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(&request).unwrap()))
            .unwrap()
    }

    async fn read_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_check_in_returns_201_with_welcome() {
        let (state, _) = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(check_in_request("AA111AA", VehicleType::Car, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body: CheckInResponse = read_json(response).await;
        assert_eq!(body.plate, "AA111AA");
        assert_eq!(body.message, WELCOME_MESSAGE);
        assert_eq!(body.occupancy, 1);
        assert_eq!(body.available_spaces, 19);
    }

    #[tokio::test]
    async fn test_duplicate_check_in_returns_409() {
        let (state, _) = create_test_state();
        let router = create_router(state);

        router
            .clone()
            .oneshot(check_in_request("AA111AA", VehicleType::Car, None))
            .await
            .unwrap();
        let response = router
            .oneshot(check_in_request("AA111AA", VehicleType::Bus, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "DUPLICATE_PLATE");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let (state, _) = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/vehicles")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{ not valid json }"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_plate_returns_validation_error() {
        let (state, _) = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/vehicles")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"vehicle_type": "car"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_blank_plate_returns_validation_error() {
        let (state, _) = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(check_in_request("   ", VehicleType::Car, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_check_out_after_150_minutes_with_discount() {
        let (state, clock) = create_test_state();
        let router = create_router(state.clone());

        router
            .clone()
            .oneshot(check_in_request("DD444DD", VehicleType::Bus, Some("DISCOUNT_CARD_002")))
            .await
            .unwrap();
        clock.advance(Duration::minutes(150));

        let response = router
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/vehicles/DD444DD")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: CheckOutResponse = read_json(response).await;
        assert_eq!(body.receipt.fee, 34);
        assert_eq!(body.message, "Your fee is 34. Come back soon.");
        assert!(!state.lot().unwrap().is_parked("DD444DD"));
    }

    #[tokio::test]
    async fn test_check_out_unknown_plate_returns_404() {
        let (state, _) = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/vehicles/ZZ999ZZ")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "VEHICLE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_discount_card_assignment() {
        let (state, clock) = create_test_state();
        let router = create_router(state.clone());

        router
            .clone()
            .oneshot(check_in_request("CC333CC", VehicleType::MiniBus, None))
            .await
            .unwrap();

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/vehicles/CC333CC/discount-card")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"card": "DISCOUNT_CARD_009"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        clock.advance(Duration::minutes(60));
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/vehicles/CC333CC/quote")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let quote: FeeCalculation = read_json(response).await;
        // floor(25 * 0.85) = 21
        assert_eq!(quote.fee, 21);
        assert!(quote.discount_applied);
    }
}
