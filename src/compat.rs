//! Sentinel-returning entry points
//!
//! Mirror of the legacy contract: sensors are addressed by their raw
//! nominal code and every failure collapses into one out-of-band
//! sentinel, so existing callers can keep testing the result with a
//! single comparison.

use crate::curve;
use crate::sensor::SensorType;
use crate::solver;

/// Returned by the sentinel entry points when a conversion fails
///
/// Far below any physically reachable result. Callers must compare
/// against it before treating the return value as a measurement.
pub const CONVERSION_FAILED: f64 = -1.0e6;

/// Resistance in ohms of the family `sensor_code` at `temperature_c`
///
/// `sensor_code` is the nominal 0°C resistance: 50, 100, 200, 500 or
/// 1000. Returns [`CONVERSION_FAILED`] for an unknown code or an
/// out-of-range temperature.
///
/// # Example
/// ```
/// use vandusen::{calculate_resistance, CONVERSION_FAILED};
/// assert_eq!(calculate_resistance(100, 0.0), 100.0);
/// assert_eq!(calculate_resistance(999, 25.0), CONVERSION_FAILED);
/// ```
pub fn calculate_resistance(sensor_code: u16, temperature_c: f64) -> f64 {
    match SensorType::from_code(sensor_code) {
        Some(sensor) => curve::resistance(sensor, temperature_c).unwrap_or(CONVERSION_FAILED),
        None => CONVERSION_FAILED,
    }
}

/// Temperature in °C of the family `sensor_code` reading `resistance_ohms`
///
/// Returns [`CONVERSION_FAILED`] for an unknown code, an out-of-band
/// resistance, or a solve that does not converge.
pub fn calculate_temperature(sensor_code: u16, resistance_ohms: f64, initial_guess_c: f64) -> f64 {
    match SensorType::from_code(sensor_code) {
        Some(sensor) => {
            solver::temperature(sensor, resistance_ohms, initial_guess_c)
                .unwrap_or(CONVERSION_FAILED)
        }
        None => CONVERSION_FAILED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libm::fabs;

    #[test]
    fn test_unknown_sensor_code() {
        assert_eq!(calculate_resistance(999, 25.0), CONVERSION_FAILED);
        assert_eq!(calculate_resistance(0, 25.0), CONVERSION_FAILED);
        assert_eq!(calculate_temperature(999, 100.0, 0.0), CONVERSION_FAILED);
        assert_eq!(calculate_temperature(101, 100.0, 0.0), CONVERSION_FAILED);
    }

    #[test]
    fn test_out_of_range_inputs() {
        assert_eq!(calculate_resistance(100, -250.0), CONVERSION_FAILED);
        assert_eq!(calculate_resistance(100, 900.0), CONVERSION_FAILED);
        assert_eq!(calculate_temperature(100, 17.0, 0.0), CONVERSION_FAILED);
        assert_eq!(calculate_temperature(100, 400.0, 0.0), CONVERSION_FAILED);
    }

    #[test]
    fn test_matches_typed_api() {
        let typed = curve::resistance(SensorType::Pt1000, 123.4).unwrap();
        assert_eq!(calculate_resistance(1000, 123.4), typed);
    }

    #[test]
    fn test_round_trip_through_sentinel_api() {
        let r = calculate_resistance(500, 438.0);
        assert!(r != CONVERSION_FAILED);

        let t = calculate_temperature(500, r, 400.0);
        assert!(fabs(t - 438.0) < 1e-6);
    }
}
