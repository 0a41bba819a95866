//! Newton-Raphson inversion of the resistance curve

use libm::fabs;

use crate::curve;
use crate::error::ConversionError;
use crate::sensor::SensorType;

/// Iteration budget for the root finder
pub const MAX_ITERATIONS: u16 = 1000;

/// Convergence criterion: absolute Newton step size in °C
pub const STEP_TOLERANCE_C: f64 = 1e-8;

/// Temperature in °C of `sensor` for a measured `resistance_ohms`
///
/// Solves `R(T) = resistance_ohms` by Newton-Raphson starting from
/// `initial_guess_c`. The curve branch is re-selected on every iteration
/// from the sign of the current estimate, so an estimate may cross 0°C
/// and switch formulas mid-solve.
///
/// The measured resistance must lie inside the sensor's
/// [band](SensorType::resistance_band); out-of-band values are rejected
/// before any iteration. The iteration itself has no divergence guard
/// beyond [`MAX_ITERATIONS`], and the quadratic branch has a second root
/// above 3000°C, so a guess far outside the physical range can settle
/// there instead of on the measured temperature.
///
/// # Example
/// ```
/// use vandusen::{temperature, SensorType};
/// let t = temperature(SensorType::Pt100, 138.5055, 20.0).unwrap();
/// assert!((t - 100.0).abs() < 1e-3);
/// ```
pub fn temperature(
    sensor: SensorType,
    resistance_ohms: f64,
    initial_guess_c: f64,
) -> Result<f64, ConversionError> {
    if !sensor.resistance_band().contains(resistance_ohms) {
        return Err(ConversionError::ResistanceOutOfRange);
    }

    let r0 = sensor.nominal_ohms();
    let mut estimate = initial_guess_c;

    for _ in 0..MAX_ITERATIONS {
        let residual = curve::evaluate(r0, estimate) - resistance_ohms;
        let slope = curve::derivative(r0, estimate);
        let next = estimate - residual / slope;

        if fabs(next - estimate) < STEP_TOLERANCE_C {
            return Ok(next);
        }
        estimate = next;
    }

    Err(ConversionError::NoConvergence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_rejection() {
        assert_eq!(
            temperature(SensorType::Pt100, 18.0, 0.0),
            Err(ConversionError::ResistanceOutOfRange)
        );
        assert_eq!(
            temperature(SensorType::Pt100, 391.0, 0.0),
            Err(ConversionError::ResistanceOutOfRange)
        );
    }

    #[test]
    fn test_low_band_edge() {
        // 18.3 ohms sits just under the curve's -200°C value, so the
        // root lands a touch past -200
        let t = temperature(SensorType::Pt100, 18.3, -195.0).unwrap();
        assert!(t < -200.0);
        assert!(t > -201.0);
    }

    #[test]
    fn test_high_band_edge() {
        let t = temperature(SensorType::Pt100, 390.6, 800.0).unwrap();
        assert!(t > 850.0);
        assert!(t < 851.0);
    }

    #[test]
    fn test_room_temperature_reading() {
        // PT100 at 100°C reads 138.5055 ohms (table value, rounded)
        let t = temperature(SensorType::Pt100, 138.5055, 20.0).unwrap();
        assert!(fabs(t - 100.0) < 1e-3);
    }

    #[test]
    fn test_high_temperature_reading() {
        let t = temperature(SensorType::Pt100, 268.5, 25.0).unwrap();
        assert!(fabs(t - 462.78) < 0.05);
    }

    #[test]
    fn test_estimate_crosses_zero() {
        // 90 ohms on a PT100 is about -25.5°C; a warm guess forces the
        // iteration across the branch boundary
        let t = temperature(SensorType::Pt100, 90.0, 50.0).unwrap();
        assert!(t < -25.0);
        assert!(t > -26.0);
    }

    #[test]
    fn test_pathological_guess_terminates() {
        // From 10000°C Newton walks to the quadratic's second root far
        // above the physical range instead of the measured temperature
        let t = temperature(SensorType::Pt100, 390.6, 10_000.0).unwrap();
        assert!(t > 1000.0);
    }

    #[test]
    fn test_non_finite_guess_exhausts_budget() {
        assert_eq!(
            temperature(SensorType::Pt100, 138.5, f64::NAN),
            Err(ConversionError::NoConvergence)
        );
        assert_eq!(
            temperature(SensorType::Pt100, 138.5, f64::INFINITY),
            Err(ConversionError::NoConvergence)
        );
    }
}
