//! Core types shared by NMEA sentences and AIS messages

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Two-letter identifier of the subsystem that produced a sentence
///
/// Common values are `GP` (GPS), `HC` (heading compass), `II` (integrated
/// instrumentation) and `AI` (AIS).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Talker(String);

impl Talker {
    /// Talker length in characters
    pub const LEN: usize = 2;

    /// Create a new talker, validating it consists of two upper case letters or digits
    pub fn new(id: &str) -> Result<Self> {
        if id.len() != Self::LEN
            || !id
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        {
            return Err(Error::invalid_argument(format!("Invalid talker: {:?}", id)));
        }
        Ok(Talker(id.to_string()))
    }

    /// Integrated instrumentation (`II`)
    pub fn integrated_instrumentation() -> Self {
        Talker("II".to_string())
    }

    /// AIS station (`AI`)
    pub fn ais() -> Self {
        Talker("AI".to_string())
    }

    /// Get the talker as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Talker {
    fn default() -> Self {
        Self::integrated_instrumentation()
    }
}

impl fmt::Display for Talker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Talker {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Talker::new(s)
    }
}

/// Maritime Mobile Service Identity (30 bits in AIS, nine decimal digits)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mmsi(u32);

impl Mmsi {
    /// Largest MMSI representable with nine digits
    pub const MAX: u32 = 999_999_999;

    /// Create a new MMSI, validating it has at most nine digits
    pub fn new(value: u32) -> Result<Self> {
        if value > Self::MAX {
            return Err(Error::invalid_argument(format!(
                "MMSI {} out of range [0, {}]",
                value,
                Self::MAX
            )));
        }
        Ok(Mmsi(value))
    }

    /// Wrap a decoded 30-bit MMSI field without range validation
    pub fn from_raw(value: u32) -> Self {
        Mmsi(value & 0x3FFF_FFFF)
    }

    /// Get the raw MMSI value
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Mmsi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:09}", self.0)
    }
}

/// Reference of a bearing or heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Reference {
    /// True north (`T`)
    True,
    /// Magnetic north (`M`)
    Magnetic,
    /// Relative to the vessel (`R`)
    Relative,
}

impl Reference {
    /// Wire character of the reference
    pub fn as_char(&self) -> char {
        match self {
            Reference::True => 'T',
            Reference::Magnetic => 'M',
            Reference::Relative => 'R',
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Reference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "T" => Ok(Reference::True),
            "M" => Ok(Reference::Magnetic),
            "R" => Ok(Reference::Relative),
            _ => Err(Error::invalid_argument(format!("Invalid reference: {:?}", s))),
        }
    }
}

/// Unit of a distance field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceUnit {
    /// Meters (`M`)
    #[default]
    Meter,
    /// Feet (`f`)
    Feet,
    /// Nautical miles (`N`)
    NauticalMile,
    /// Kilometers (`K`)
    Kilometer,
    /// Fathoms (`F`)
    Fathom,
}

impl DistanceUnit {
    /// Wire character of the unit
    pub fn as_char(&self) -> char {
        match self {
            DistanceUnit::Meter => 'M',
            DistanceUnit::Feet => 'f',
            DistanceUnit::NauticalMile => 'N',
            DistanceUnit::Kilometer => 'K',
            DistanceUnit::Fathom => 'F',
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for DistanceUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "M" => Ok(DistanceUnit::Meter),
            "f" => Ok(DistanceUnit::Feet),
            "N" => Ok(DistanceUnit::NauticalMile),
            "K" => Ok(DistanceUnit::Kilometer),
            "F" => Ok(DistanceUnit::Fathom),
            _ => Err(Error::invalid_argument(format!(
                "Invalid distance unit: {:?}",
                s
            ))),
        }
    }
}

/// VHF channel an AIS message was received on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AisChannel {
    /// Channel A, 161.975 MHz
    A,
    /// Channel B, 162.025 MHz
    B,
}

impl fmt::Display for AisChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AisChannel::A => write!(f, "A"),
            AisChannel::B => write!(f, "B"),
        }
    }
}

impl FromStr for AisChannel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        // some receivers report the channel number instead of the letter
        match s {
            "A" | "1" => Ok(AisChannel::A),
            "B" | "2" => Ok(AisChannel::B),
            _ => Err(Error::invalid_argument(format!("Invalid AIS channel: {:?}", s))),
        }
    }
}

/// Waypoint identifier, at most eight characters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint(String);

impl Waypoint {
    /// Maximum identifier length
    pub const MAX_LEN: usize = 8;

    /// Create a new waypoint identifier
    pub fn new(id: &str) -> Result<Self> {
        if id.is_empty() || id.chars().count() > Self::MAX_LEN {
            return Err(Error::invalid_argument(format!(
                "Waypoint id {:?} must have 1 to {} characters",
                id,
                Self::MAX_LEN
            )));
        }
        if id.contains([',', '*', '$', '!']) {
            return Err(Error::invalid_argument(format!(
                "Waypoint id {:?} contains a reserved character",
                id
            )));
        }
        Ok(Waypoint(id.to_string()))
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Waypoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Waypoint::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_talker_creation() {
        assert!(Talker::new("GP").is_ok());
        assert!(Talker::new("A1").is_ok());
        assert!(Talker::new("gp").is_err());
        assert!(Talker::new("GPS").is_err());
        assert!(Talker::new("").is_err());
        assert_eq!(Talker::default().as_str(), "II");
    }

    #[test]
    fn test_mmsi_creation() {
        assert!(Mmsi::new(123_456_789).is_ok());
        assert!(Mmsi::new(Mmsi::MAX).is_ok());
        assert!(Mmsi::new(1_000_000_000).is_err());
    }

    #[test]
    fn test_mmsi_from_raw() {
        assert_eq!(Mmsi::from_raw(0x3FFF_FFFF).value(), 1_073_741_823);
        assert_eq!(Mmsi::from_raw(u32::MAX).value(), 0x3FFF_FFFF);
        assert_eq!(Mmsi::from_raw(2_570_001).to_string(), "002570001");
    }

    #[test]
    fn test_mmsi_display() -> Result<()> {
        assert_eq!(Mmsi::new(2_570_001)?.to_string(), "002570001");
        Ok(())
    }

    #[test]
    fn test_reference_codes() -> Result<()> {
        assert_eq!("T".parse::<Reference>()?, Reference::True);
        assert_eq!(Reference::Magnetic.to_string(), "M");
        assert!("X".parse::<Reference>().is_err());
        Ok(())
    }

    #[test]
    fn test_distance_unit_codes() -> Result<()> {
        assert_eq!("f".parse::<DistanceUnit>()?, DistanceUnit::Feet);
        assert_eq!(DistanceUnit::default().to_string(), "M");
        assert!("m".parse::<DistanceUnit>().is_err());
        Ok(())
    }

    #[test]
    fn test_ais_channel() -> Result<()> {
        assert_eq!("B".parse::<AisChannel>()?, AisChannel::B);
        assert_eq!("1".parse::<AisChannel>()?, AisChannel::A);
        assert!("C".parse::<AisChannel>().is_err());
        Ok(())
    }

    #[test]
    fn test_waypoint_validation() {
        assert!(Waypoint::new("ORIGIN").is_ok());
        assert!(Waypoint::new("").is_err());
        assert!(Waypoint::new("TOOLONGID").is_err());
        assert!(Waypoint::new("A,B").is_err());
    }
}
