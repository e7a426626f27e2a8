//! Geographic coordinates and their AIS raw representation
//!
//! AIS transmits positions in units of 1/10000 minute. A longitude of 181°
//! and a latitude of 91° mean "not available"; those raw values are kept
//! as-is by the message types so they survive a round trip untouched.

use std::fmt;

use crate::error::{Error, Result};

/// AIS raw units per degree (60 minutes of 10000 units each)
pub const AIS_UNITS_PER_DEGREE: f64 = 600_000.0;

/// Raw AIS longitude meaning "not available" (181°)
pub const LONGITUDE_NOT_AVAILABLE: i32 = 181 * 600_000;

/// Raw AIS latitude meaning "not available" (91°)
pub const LATITUDE_NOT_AVAILABLE: i32 = 91 * 600_000;

/// Latitude in decimal degrees, positive north
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Latitude(f64);

impl Latitude {
    /// Create a new latitude, validating it's within [-90, 90]
    pub fn new(degrees: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&degrees) {
            return Err(Error::invalid_argument(format!(
                "Latitude {} out of range [-90, 90]",
                degrees
            )));
        }
        Ok(Latitude(degrees))
    }

    /// Get the value in decimal degrees
    pub fn degrees(&self) -> f64 {
        self.0
    }

    /// Convert from AIS 1/10000 minute units; `None` for "not available"
    pub fn from_ais(raw: i32) -> Option<Self> {
        if raw == LATITUDE_NOT_AVAILABLE {
            return None;
        }
        Self::new(raw as f64 / AIS_UNITS_PER_DEGREE).ok()
    }

    /// Convert to AIS 1/10000 minute units
    pub fn to_ais(&self) -> i32 {
        (self.0 * AIS_UNITS_PER_DEGREE).round() as i32
    }
}

impl fmt::Display for Latitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hemisphere = if self.0 < 0.0 { 'S' } else { 'N' };
        write!(f, "{:.6}{}", self.0.abs(), hemisphere)
    }
}

/// Longitude in decimal degrees, positive east
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Longitude(f64);

impl Longitude {
    /// Create a new longitude, validating it's within [-180, 180]
    pub fn new(degrees: f64) -> Result<Self> {
        if !(-180.0..=180.0).contains(&degrees) {
            return Err(Error::invalid_argument(format!(
                "Longitude {} out of range [-180, 180]",
                degrees
            )));
        }
        Ok(Longitude(degrees))
    }

    /// Get the value in decimal degrees
    pub fn degrees(&self) -> f64 {
        self.0
    }

    /// Convert from AIS 1/10000 minute units; `None` for "not available"
    pub fn from_ais(raw: i32) -> Option<Self> {
        if raw == LONGITUDE_NOT_AVAILABLE {
            return None;
        }
        Self::new(raw as f64 / AIS_UNITS_PER_DEGREE).ok()
    }

    /// Convert to AIS 1/10000 minute units
    pub fn to_ais(&self) -> i32 {
        (self.0 * AIS_UNITS_PER_DEGREE).round() as i32
    }
}

impl fmt::Display for Longitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hemisphere = if self.0 < 0.0 { 'W' } else { 'E' };
        write!(f, "{:.6}{}", self.0.abs(), hemisphere)
    }
}
