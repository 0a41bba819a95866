//! Temperature/resistance conversions for platinum RTD sensors
//!
//! This crate converts between temperature and electrical resistance for
//! the standard platinum sensor families (PT50, PT100, PT200, PT500,
//! PT1000) over -200°C to +850°C, using the Callendar-Van Dusen equation:
//!
//! - Resistance from temperature: closed-form piecewise polynomial
//! - Temperature from resistance: Newton-Raphson root finding over the
//!   same polynomial and its analytic derivative
//! - Sentinel-returning entry points matching the legacy contract
//!
//! Both conversions are pure functions over a handful of fixed
//! coefficients. There is no shared state and no allocation, so calls
//! are reentrant and safe from any number of threads.

#![no_std]
#![deny(unsafe_code)]

pub mod compat;
pub mod curve;
pub mod error;
pub mod sensor;
pub mod solver;

pub use compat::{calculate_resistance, calculate_temperature, CONVERSION_FAILED};
pub use curve::{resistance, CVD_A, CVD_B, CVD_C, TEMP_MAX_C, TEMP_MIN_C};
pub use error::ConversionError;
pub use sensor::{ResistanceBand, SensorType};
pub use solver::{temperature, MAX_ITERATIONS, STEP_TOLERANCE_C};
