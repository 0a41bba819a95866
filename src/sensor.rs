//! Platinum sensor families and their resistance bands

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Standard platinum RTD families
///
/// Discriminants equal the nominal 0°C resistance in ohms, so the enum
/// doubles as the raw sensor code used by the legacy entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SensorType {
    Pt50 = 50,
    Pt100 = 100,
    Pt200 = 200,
    Pt500 = 500,
    Pt1000 = 1000,
}

/// Achievable resistance range of a sensor over -200..+850°C
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResistanceBand {
    /// Lowest accepted resistance in ohms
    pub min_ohms: f64,
    /// Highest accepted resistance in ohms
    pub max_ohms: f64,
}

impl ResistanceBand {
    /// Check whether a measured resistance lies inside the band (inclusive)
    pub fn contains(&self, ohms: f64) -> bool {
        ohms >= self.min_ohms && ohms <= self.max_ohms
    }
}

impl SensorType {
    /// All supported families, in ascending nominal order
    pub const ALL: [SensorType; 5] = [
        SensorType::Pt50,
        SensorType::Pt100,
        SensorType::Pt200,
        SensorType::Pt500,
        SensorType::Pt1000,
    ];

    /// Nominal resistance at 0°C (R0) in ohms
    pub const fn nominal_ohms(self) -> f64 {
        self as u16 as f64
    }

    /// Look up a family from its raw nominal code
    ///
    /// Returns `None` for any code other than 50, 100, 200, 500 or 1000.
    pub const fn from_code(code: u16) -> Option<Self> {
        match code {
            50 => Some(SensorType::Pt50),
            100 => Some(SensorType::Pt100),
            200 => Some(SensorType::Pt200),
            500 => Some(SensorType::Pt500),
            1000 => Some(SensorType::Pt1000),
            _ => None,
        }
    }

    /// Resistance band achievable over the supported temperature range
    ///
    /// Bounds follow the published conversion tables. The low edge sits
    /// slightly under the curve's value at -200°C, so a reading at the
    /// edge resolves to a root just past -200°C.
    pub const fn resistance_band(self) -> ResistanceBand {
        match self {
            SensorType::Pt50 => ResistanceBand {
                min_ohms: 9.2,
                max_ohms: 195.3,
            },
            SensorType::Pt100 => ResistanceBand {
                min_ohms: 18.3,
                max_ohms: 390.6,
            },
            SensorType::Pt200 => ResistanceBand {
                min_ohms: 36.5,
                max_ohms: 781.3,
            },
            SensorType::Pt500 => ResistanceBand {
                min_ohms: 91.5,
                max_ohms: 1953.0,
            },
            SensorType::Pt1000 => ResistanceBand {
                min_ohms: 182.5,
                max_ohms: 3906.5,
            },
        }
    }
}
