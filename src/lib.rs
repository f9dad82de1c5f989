//! Fee and occupancy engine for a single parking facility.
//!
//! This crate checks vehicles in against a capacity limit, prices each stay
//! by vehicle type and parked time (with an optional discount card), checks
//! vehicles out and keeps the lot's aggregate earnings.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod clock;
pub mod config;
pub mod error;
pub mod lot;
pub mod models;
