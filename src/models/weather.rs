//! Temperature reading returned by the service

use serde::{Serialize, Serializer};

/// Offset added to Celsius to report Kelvin.
///
/// Deliberately 273, not 273.15: callers already depend on this value.
pub const KELVIN_OFFSET: f64 = 273.0;

/// Current temperature in three units
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct WeatherReading {
    /// Temperature in Celsius
    #[serde(rename = "temp_C", serialize_with = "serialize_temperature")]
    pub temp_c: f64,
    /// Temperature in Fahrenheit
    #[serde(rename = "temp_F", serialize_with = "serialize_temperature")]
    pub temp_f: f64,
    /// Temperature in Kelvin, always `temp_c + 273`
    #[serde(rename = "temp_K", serialize_with = "serialize_temperature")]
    pub temp_k: f64,
}

impl WeatherReading {
    /// Build a reading from provider values, deriving Kelvin
    #[must_use]
    pub fn from_celsius_fahrenheit(temp_c: f64, temp_f: f64) -> Self {
        Self {
            temp_c,
            temp_f,
            temp_k: temp_c + KELVIN_OFFSET,
        }
    }
}

/// Integral temperatures are written without a fraction (`25`, not `25.0`).
#[allow(clippy::cast_possible_truncation)]
fn serialize_temperature<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    // 2^53: beyond this not every integer is representable as f64
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    if value.fract() == 0.0 && value.abs() < MAX_EXACT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
