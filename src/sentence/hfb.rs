//! HFB: Trawl headrope to footrope and bottom

use super::{NmeaSentence, SentenceId};
use crate::core::{DistanceUnit, Talker};
use crate::error::{Error, Result};
use crate::fields::{expect_count, format_decimal, read_literal, read_required};

/// Distances from the trawl headrope to the footrope and to the bottom, in meters
///
/// ```text
///        1   2 3   4
///        |   | |   |
/// $--HFB,x.x,M,y.y,M*hh
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hfb {
    talker: Talker,
    headrope_to_footrope: f64,
    headrope_to_bottom: f64,
}

impl Hfb {
    /// Distance unit of both fields
    pub const UNIT: DistanceUnit = DistanceUnit::Meter;

    /// Distance from headrope to footrope in meters
    pub fn headrope_to_footrope(&self) -> f64 {
        self.headrope_to_footrope
    }

    /// Distance from headrope to bottom in meters
    pub fn headrope_to_bottom(&self) -> f64 {
        self.headrope_to_bottom
    }

    /// Set the distance from headrope to footrope in meters
    pub fn set_headrope_to_footrope(&mut self, meters: f64) -> Result<()> {
        self.headrope_to_footrope = check_distance(meters)?;
        Ok(())
    }

    /// Set the distance from headrope to bottom in meters
    pub fn set_headrope_to_bottom(&mut self, meters: f64) -> Result<()> {
        self.headrope_to_bottom = check_distance(meters)?;
        Ok(())
    }
}

fn check_distance(meters: f64) -> Result<f64> {
    if !meters.is_finite() || meters < 0.0 {
        return Err(Error::invalid_argument(format!(
            "Invalid distance: {}",
            meters
        )));
    }
    Ok(meters)
}

impl NmeaSentence for Hfb {
    const ID: SentenceId = SentenceId::Hfb;
    const FIELD_COUNT: usize = 4;

    fn parse(talker: Talker, fields: &[&str]) -> Result<Self> {
        expect_count(Self::ID.tag(), fields, Self::FIELD_COUNT)?;

        let unit = Self::UNIT.to_string();
        let headrope_to_footrope = check_distance(read_required(fields[0], "headrope to footrope")?)?;
        read_literal(fields[1], &unit, "headrope to footrope unit")?;
        let headrope_to_bottom = check_distance(read_required(fields[2], "headrope to bottom")?)?;
        read_literal(fields[3], &unit, "headrope to bottom unit")?;

        Ok(Hfb {
            talker,
            headrope_to_footrope,
            headrope_to_bottom,
        })
    }

    fn get_data(&self) -> Vec<String> {
        let unit = Self::UNIT.to_string();
        vec![
            format_decimal(self.headrope_to_footrope, 1),
            unit.clone(),
            format_decimal(self.headrope_to_bottom, 1),
            unit,
        ]
    }

    fn talker(&self) -> &Talker {
        &self.talker
    }

    fn set_talker(&mut self, talker: Talker) {
        self.talker = talker;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() -> Result<()> {
        let mut hfb = Hfb::default();
        hfb.set_headrope_to_footrope(12.5)?;
        hfb.set_headrope_to_bottom(30.0)?;
        assert_eq!(hfb.get_data(), vec!["12.5", "M", "30.0", "M"]);

        let parsed = Hfb::parse(Talker::default(), &["12.5", "M", "30.0", "M"])?;
        assert_eq!(parsed, hfb);
        Ok(())
    }

    #[test]
    fn test_units_reemitted() -> Result<()> {
        let parsed = Hfb::parse(Talker::default(), &["1.0", "", "2.0", ""])?;
        assert_eq!(parsed.get_data(), vec!["1.0", "M", "2.0", "M"]);
        Ok(())
    }

    #[test]
    fn test_invalid() {
        assert!(matches!(
            Hfb::parse(Talker::default(), &["1.0", "f", "2.0", "M"]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Hfb::parse(Talker::default(), &["", "M", "2.0", "M"]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(Hfb::default().set_headrope_to_bottom(-3.0).is_err());
    }
}
