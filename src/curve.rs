//! Callendar-Van Dusen curve evaluation
//!
//! Piecewise polynomial relating platinum resistance to temperature per
//! IEC 60751: quadratic at or above 0°C, with an additional quartic
//! correction term below.

use crate::error::ConversionError;
use crate::sensor::SensorType;

/// A coefficient (all temperatures)
pub const CVD_A: f64 = 3.908302087e-3;
/// B coefficient (all temperatures)
pub const CVD_B: f64 = -5.775e-7;
/// C coefficient (below 0°C only)
pub const CVD_C: f64 = -4.18301e-12;

/// Lowest accepted temperature in °C (half a degree under the nominal range)
pub const TEMP_MIN_C: f64 = -200.5;
/// Highest accepted temperature in °C (half a degree over the nominal range)
pub const TEMP_MAX_C: f64 = 850.5;

/// Evaluate the curve for a sensor with nominal resistance `r0`
///
/// The branch is chosen by the sign of `t`: the C term only applies
/// below 0°C.
pub fn evaluate(r0: f64, t: f64) -> f64 {
    let t2 = t * t;
    if t >= 0.0 {
        r0 * (1.0 + CVD_A * t + CVD_B * t2)
    } else {
        let t3 = t2 * t;
        r0 * (1.0 + CVD_A * t + CVD_B * t2 + CVD_C * (t - 100.0) * t3)
    }
}

/// Analytic derivative dR/dT of the same branch
pub fn derivative(r0: f64, t: f64) -> f64 {
    if t >= 0.0 {
        r0 * (CVD_A + 2.0 * CVD_B * t)
    } else {
        let t2 = t * t;
        let t3 = t2 * t;
        r0 * (CVD_A + 2.0 * CVD_B * t + CVD_C * (4.0 * t3 - 300.0 * t2))
    }
}

/// Resistance in ohms of `sensor` at `temperature_c`
///
/// Temperatures outside [`TEMP_MIN_C`]..=[`TEMP_MAX_C`] are rejected.
///
/// # Example
/// ```
/// use vandusen::{resistance, SensorType};
/// let r = resistance(SensorType::Pt100, 0.0).unwrap();
/// assert_eq!(r, 100.0);
/// ```
pub fn resistance(sensor: SensorType, temperature_c: f64) -> Result<f64, ConversionError> {
    if !(TEMP_MIN_C..=TEMP_MAX_C).contains(&temperature_c) {
        return Err(ConversionError::TemperatureOutOfRange);
    }
    Ok(evaluate(sensor.nominal_ohms(), temperature_c))
}
