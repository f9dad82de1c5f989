//! HTTP API module for the parking engine.
//!
//! This module exposes the lot's check-in, check-out, listing and earnings
//! operations as a small JSON REST API.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CheckInRequest, DiscountCardRequest};
pub use response::{
    ApiError, ApiErrorResponse, CheckInResponse, CheckOutResponse, PlatesResponse,
    WELCOME_MESSAGE,
};
pub use state::AppState;
