//! Messages 1, 2 and 3: Class A position report
//!
//! All three ids share one 168-bit layout and differ only in why the report
//! was sent (scheduled, assigned schedule, response to interrogation).

use super::{expect_id, AisMessage, MessageId};
use crate::bits::{BitWriter, Bits};
use crate::core::Mmsi;
use crate::error::{Error, Result};
use crate::geo::{Latitude, Longitude, LATITUDE_NOT_AVAILABLE, LONGITUDE_NOT_AVAILABLE};

/// Raw speed over ground meaning "not available"
pub(crate) const SOG_NOT_AVAILABLE: u32 = 1023;
/// Raw course over ground meaning "not available"
pub(crate) const COG_NOT_AVAILABLE: u32 = 3600;
/// Raw true heading meaning "not available"
pub(crate) const HEADING_NOT_AVAILABLE: u32 = 511;
/// Time stamp meaning "not available"
pub(crate) const TIMESTAMP_NOT_AVAILABLE: u8 = 60;

/// Navigational status of a Class A vessel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavigationStatus {
    /// 0
    UnderWayUsingEngine,
    /// 1
    AtAnchor,
    /// 2
    NotUnderCommand,
    /// 3
    RestrictedManoeuverability,
    /// 4
    ConstrainedByHerDraught,
    /// 5
    Moored,
    /// 6
    Aground,
    /// 7
    EngagedInFishing,
    /// 8
    UnderWaySailing,
    /// 15
    #[default]
    NotDefined,
    /// 9-14: reserved, raw value kept
    Reserved(u8),
}

impl NavigationStatus {
    /// Decode a 4-bit raw value
    pub fn from_raw(value: u8) -> Self {
        match value {
            0 => NavigationStatus::UnderWayUsingEngine,
            1 => NavigationStatus::AtAnchor,
            2 => NavigationStatus::NotUnderCommand,
            3 => NavigationStatus::RestrictedManoeuverability,
            4 => NavigationStatus::ConstrainedByHerDraught,
            5 => NavigationStatus::Moored,
            6 => NavigationStatus::Aground,
            7 => NavigationStatus::EngagedInFishing,
            8 => NavigationStatus::UnderWaySailing,
            15 => NavigationStatus::NotDefined,
            other => NavigationStatus::Reserved(other),
        }
    }

    /// Get the 4-bit raw value
    pub fn raw(&self) -> u8 {
        match self {
            NavigationStatus::UnderWayUsingEngine => 0,
            NavigationStatus::AtAnchor => 1,
            NavigationStatus::NotUnderCommand => 2,
            NavigationStatus::RestrictedManoeuverability => 3,
            NavigationStatus::ConstrainedByHerDraught => 4,
            NavigationStatus::Moored => 5,
            NavigationStatus::Aground => 6,
            NavigationStatus::EngagedInFishing => 7,
            NavigationStatus::UnderWaySailing => 8,
            NavigationStatus::NotDefined => 15,
            NavigationStatus::Reserved(value) => *value,
        }
    }
}

/// Special manoeuvre indicator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ManeuverIndicator {
    /// 0
    #[default]
    NotAvailable,
    /// 1
    NoSpecialManeuver,
    /// 2
    SpecialManeuver,
    /// 3
    Reserved,
}

impl ManeuverIndicator {
    fn from_raw(value: u8) -> Self {
        match value {
            0 => ManeuverIndicator::NotAvailable,
            1 => ManeuverIndicator::NoSpecialManeuver,
            2 => ManeuverIndicator::SpecialManeuver,
            _ => ManeuverIndicator::Reserved,
        }
    }

    fn raw(&self) -> u8 {
        *self as u8
    }
}

/// Class A position report (messages 1, 2, 3)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionReport {
    id: MessageId,
    repeat_indicator: u8,
    mmsi: Mmsi,
    nav_status: NavigationStatus,
    rot: i8,
    sog: u32,
    position_accuracy: bool,
    longitude_minutes: i32,
    latitude_minutes: i32,
    cog: u32,
    hdg: u32,
    timestamp: u8,
    maneuver_indicator: ManeuverIndicator,
    raim: bool,
    radio_status: u32,
}

impl Default for PositionReport {
    fn default() -> Self {
        PositionReport {
            id: MessageId::PositionReportClassA,
            repeat_indicator: 0,
            mmsi: Mmsi::default(),
            nav_status: NavigationStatus::NotDefined,
            rot: PositionReport::ROT_NOT_AVAILABLE,
            sog: SOG_NOT_AVAILABLE,
            position_accuracy: false,
            longitude_minutes: LONGITUDE_NOT_AVAILABLE,
            latitude_minutes: LATITUDE_NOT_AVAILABLE,
            cog: COG_NOT_AVAILABLE,
            hdg: HEADING_NOT_AVAILABLE,
            timestamp: TIMESTAMP_NOT_AVAILABLE,
            maneuver_indicator: ManeuverIndicator::NotAvailable,
            raim: false,
            radio_status: 0,
        }
    }
}

impl PositionReport {
    /// Raw rate of turn meaning "not available"
    pub const ROT_NOT_AVAILABLE: i8 = -128;

    /// Create an empty report with the given id (1, 2 or 3)
    pub fn new(id: MessageId) -> Result<Self> {
        match id {
            MessageId::PositionReportClassA
            | MessageId::PositionReportClassAAssignedSchedule
            | MessageId::PositionReportClassAResponseToInterrogation => Ok(PositionReport {
                id,
                ..Default::default()
            }),
            other => Err(Error::invalid_argument(format!(
                "Message id {} is not a Class A position report",
                other
            ))),
        }
    }

    /// Repeat indicator, 0-3
    pub fn repeat_indicator(&self) -> u8 {
        self.repeat_indicator
    }

    /// MMSI of the reporting vessel
    pub fn mmsi(&self) -> Mmsi {
        self.mmsi
    }

    /// Navigational status
    pub fn nav_status(&self) -> NavigationStatus {
        self.nav_status
    }

    /// Raw rate of turn indicator (-128 = not available)
    pub fn rate_of_turn_raw(&self) -> i8 {
        self.rot
    }

    /// Speed over ground in knots
    pub fn speed_over_ground(&self) -> Option<f64> {
        (self.sog != SOG_NOT_AVAILABLE).then(|| self.sog as f64 / 10.0)
    }

    /// Position accuracy flag
    pub fn position_accuracy(&self) -> bool {
        self.position_accuracy
    }

    /// Longitude, `None` when not available
    pub fn longitude(&self) -> Option<Longitude> {
        Longitude::from_ais(self.longitude_minutes)
    }

    /// Latitude, `None` when not available
    pub fn latitude(&self) -> Option<Latitude> {
        Latitude::from_ais(self.latitude_minutes)
    }

    /// Course over ground in degrees
    pub fn course_over_ground(&self) -> Option<f64> {
        (self.cog != COG_NOT_AVAILABLE).then(|| self.cog as f64 / 10.0)
    }

    /// True heading in degrees
    pub fn true_heading(&self) -> Option<u32> {
        (self.hdg != HEADING_NOT_AVAILABLE).then_some(self.hdg)
    }

    /// UTC second of the report (60 = not available)
    pub fn timestamp(&self) -> u8 {
        self.timestamp
    }

    /// Special manoeuvre indicator
    pub fn maneuver_indicator(&self) -> ManeuverIndicator {
        self.maneuver_indicator
    }

    /// RAIM flag
    pub fn raim(&self) -> bool {
        self.raim
    }

    /// Raw 19-bit communication state
    pub fn radio_status(&self) -> u32 {
        self.radio_status
    }

    /// Set the repeat indicator
    pub fn set_repeat_indicator(&mut self, value: u8) -> Result<()> {
        if value > 3 {
            return Err(Error::invalid_argument(format!(
                "Repeat indicator {} out of range [0, 3]",
                value
            )));
        }
        self.repeat_indicator = value;
        Ok(())
    }

    /// Set the MMSI
    pub fn set_mmsi(&mut self, mmsi: Mmsi) {
        self.mmsi = mmsi;
    }

    /// Set the navigational status
    pub fn set_nav_status(&mut self, status: NavigationStatus) {
        self.nav_status = status;
    }

    /// Set the raw rate of turn indicator
    pub fn set_rate_of_turn_raw(&mut self, value: i8) {
        self.rot = value;
    }

    /// Set the speed over ground in knots (0-102.2)
    pub fn set_speed_over_ground(&mut self, knots: Option<f64>) -> Result<()> {
        self.sog = match knots {
            None => SOG_NOT_AVAILABLE,
            Some(v) if (0.0..=102.2).contains(&v) => (v * 10.0).round() as u32,
            Some(v) => {
                return Err(Error::invalid_argument(format!(
                    "Speed over ground {} out of range [0, 102.2]",
                    v
                )))
            }
        };
        Ok(())
    }

    /// Set the position accuracy flag
    pub fn set_position_accuracy(&mut self, value: bool) {
        self.position_accuracy = value;
    }

    /// Set the longitude, `None` marks it as not available
    pub fn set_longitude(&mut self, longitude: Option<Longitude>) {
        self.longitude_minutes = longitude.map_or(LONGITUDE_NOT_AVAILABLE, |l| l.to_ais());
    }

    /// Set the latitude, `None` marks it as not available
    pub fn set_latitude(&mut self, latitude: Option<Latitude>) {
        self.latitude_minutes = latitude.map_or(LATITUDE_NOT_AVAILABLE, |l| l.to_ais());
    }

    /// Set the course over ground in degrees (0-359.9)
    pub fn set_course_over_ground(&mut self, degrees: Option<f64>) -> Result<()> {
        self.cog = match degrees {
            None => COG_NOT_AVAILABLE,
            Some(v) if (0.0..360.0).contains(&v) => ((v * 10.0).round() as u32).min(3599),
            Some(v) => {
                return Err(Error::invalid_argument(format!(
                    "Course over ground {} out of range [0, 360)",
                    v
                )))
            }
        };
        Ok(())
    }

    /// Set the true heading in degrees (0-359)
    pub fn set_true_heading(&mut self, degrees: Option<u32>) -> Result<()> {
        self.hdg = match degrees {
            None => HEADING_NOT_AVAILABLE,
            Some(v) if v < 360 => v,
            Some(v) => {
                return Err(Error::invalid_argument(format!(
                    "True heading {} out of range [0, 359]",
                    v
                )))
            }
        };
        Ok(())
    }

    /// Set the UTC second (0-63)
    pub fn set_timestamp(&mut self, value: u8) -> Result<()> {
        if value > 63 {
            return Err(Error::invalid_argument(format!(
                "Time stamp {} out of range [0, 63]",
                value
            )));
        }
        self.timestamp = value;
        Ok(())
    }

    /// Set the special manoeuvre indicator
    pub fn set_maneuver_indicator(&mut self, value: ManeuverIndicator) {
        self.maneuver_indicator = value;
    }

    /// Set the RAIM flag
    pub fn set_raim(&mut self, value: bool) {
        self.raim = value;
    }

    /// Set the raw 19-bit communication state
    pub fn set_radio_status(&mut self, value: u32) -> Result<()> {
        if value >= 1 << 19 {
            return Err(Error::invalid_argument(format!(
                "Radio status {:#x} exceeds 19 bits",
                value
            )));
        }
        self.radio_status = value;
        Ok(())
    }
}

impl AisMessage for PositionReport {
    const SIZE_BITS_MIN: usize = 168;
    const SIZE_BITS_MAX: usize = 168;

    fn id(&self) -> MessageId {
        self.id
    }

    fn read_data(bits: &Bits) -> Result<Self> {
        let id = expect_id(
            bits,
            &[
                MessageId::PositionReportClassA,
                MessageId::PositionReportClassAAssignedSchedule,
                MessageId::PositionReportClassAResponseToInterrogation,
            ],
        )?;

        Ok(PositionReport {
            id,
            repeat_indicator: bits.get_unsigned(6, 2)? as u8,
            mmsi: Mmsi::from_raw(bits.get_unsigned(8, 30)?),
            nav_status: NavigationStatus::from_raw(bits.get_unsigned(38, 4)? as u8),
            rot: bits.get_signed(42, 8)? as i8,
            sog: bits.get_unsigned(50, 10)?,
            position_accuracy: bits.get_bool(60)?,
            longitude_minutes: bits.get_signed(61, 28)?,
            latitude_minutes: bits.get_signed(89, 27)?,
            cog: bits.get_unsigned(116, 12)?,
            hdg: bits.get_unsigned(128, 9)?,
            timestamp: bits.get_unsigned(137, 6)? as u8,
            maneuver_indicator: ManeuverIndicator::from_raw(bits.get_unsigned(143, 2)? as u8),
            // 145..148 spare
            raim: bits.get_bool(148)?,
            radio_status: bits.get_unsigned(149, 19)?,
        })
    }

    fn get_data(&self) -> Result<Bits> {
        let mut w = BitWriter::with_capacity(Self::SIZE_BITS_MAX);
        w.append_unsigned(self.id.value() as u32, 6)?;
        w.append_unsigned(self.repeat_indicator as u32, 2)?;
        w.append_unsigned(self.mmsi.value(), 30)?;
        w.append_unsigned(self.nav_status.raw() as u32, 4)?;
        w.append_signed(self.rot as i32, 8)?;
        w.append_unsigned(self.sog, 10)?;
        w.append_bool(self.position_accuracy);
        w.append_signed(self.longitude_minutes, 28)?;
        w.append_signed(self.latitude_minutes, 27)?;
        w.append_unsigned(self.cog, 12)?;
        w.append_unsigned(self.hdg, 9)?;
        w.append_unsigned(self.timestamp as u32, 6)?;
        w.append_unsigned(self.maneuver_indicator.raw() as u32, 2)?;
        w.append_unsigned(0, 3)?;
        w.append_bool(self.raim);
        w.append_unsigned(self.radio_status, 19)?;
        Ok(w.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_known_payload() -> Result<()> {
        let bits = Bits::from_armored_text("15RTgt0PAso;90TKcjM8h6g208CQ", 0)?;
        let report = PositionReport::parse(&bits)?;

        assert_eq!(report.id(), MessageId::PositionReportClassA);
        assert_eq!(report.mmsi().value(), 371_798_000);
        assert_eq!(report.nav_status(), NavigationStatus::UnderWayUsingEngine);
        assert_eq!(report.speed_over_ground(), Some(12.3));
        assert_eq!(report.true_heading(), Some(215));
        assert_eq!(report.timestamp(), 33);
        assert_eq!(report.get_data()?, bits);
        Ok(())
    }

    #[test]
    fn test_encode_decode() -> Result<()> {
        let mut report = PositionReport::new(MessageId::PositionReportClassAResponseToInterrogation)?;
        report.set_mmsi(Mmsi::new(211_234_560)?);
        report.set_nav_status(NavigationStatus::Reserved(12));
        report.set_rate_of_turn_raw(-5);
        report.set_speed_over_ground(Some(7.4))?;
        report.set_longitude(Some(Longitude::new(9.975)?));
        report.set_latitude(Some(Latitude::new(53.55)?));
        report.set_course_over_ground(Some(359.9))?;
        report.set_true_heading(Some(0))?;
        report.set_raim(true);
        report.set_radio_status(0x7FFFF)?;

        let bits = report.get_data()?;
        assert_eq!(bits.len(), 168);
        let decoded = PositionReport::parse(&bits)?;
        assert_eq!(decoded, report);
        assert_eq!(decoded.course_over_ground(), Some(359.9));
        Ok(())
    }

    #[test]
    fn test_defaults_not_available() {
        let report = PositionReport::default();
        assert_eq!(report.speed_over_ground(), None);
        assert_eq!(report.course_over_ground(), None);
        assert_eq!(report.true_heading(), None);
        assert_eq!(report.longitude(), None);
        assert_eq!(report.latitude(), None);
    }

    #[test]
    fn test_invalid_values() {
        let mut report = PositionReport::default();
        assert!(PositionReport::new(MessageId::AidToNavigationReport).is_err());
        assert!(report.set_speed_over_ground(Some(103.0)).is_err());
        assert!(report.set_course_over_ground(Some(360.0)).is_err());
        assert!(report.set_true_heading(Some(360)).is_err());
        assert!(report.set_radio_status(1 << 19).is_err());
    }
}
