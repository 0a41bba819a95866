//! Conversion error type

/// Errors that can occur during a conversion
///
/// The legacy entry points in [`crate::compat`] collapse all of these
/// into a single sentinel value; the typed API keeps the causes apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConversionError {
    /// Sensor code is not one of the five supported nominal values
    UnsupportedSensor,
    /// Temperature outside the supported -200.5..+850.5°C window
    TemperatureOutOfRange,
    /// Resistance outside the sensor's achievable band
    ResistanceOutOfRange,
    /// Newton-Raphson did not settle within the iteration budget
    NoConvergence,
}
