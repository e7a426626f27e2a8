//! Message 18: Standard Class B CS position report

use super::position_report::{
    COG_NOT_AVAILABLE, HEADING_NOT_AVAILABLE, SOG_NOT_AVAILABLE, TIMESTAMP_NOT_AVAILABLE,
};
use super::{expect_id, AisMessage, MessageId};
use crate::bits::{BitWriter, Bits};
use crate::core::Mmsi;
use crate::error::{Error, Result};
use crate::geo::{Latitude, Longitude, LATITUDE_NOT_AVAILABLE, LONGITUDE_NOT_AVAILABLE};

/// Standard Class B CS position report (message 18)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassBPositionReport {
    repeat_indicator: u8,
    mmsi: Mmsi,
    sog: u32,
    position_accuracy: bool,
    longitude_minutes: i32,
    latitude_minutes: i32,
    cog: u32,
    hdg: u32,
    timestamp: u8,
    cs_unit: bool,
    display_flag: bool,
    dsc_flag: bool,
    band_flag: bool,
    message_22_flag: bool,
    assigned: bool,
    raim: bool,
    radio_status: u32,
}

impl Default for ClassBPositionReport {
    fn default() -> Self {
        ClassBPositionReport {
            repeat_indicator: 0,
            mmsi: Mmsi::default(),
            sog: SOG_NOT_AVAILABLE,
            position_accuracy: false,
            longitude_minutes: LONGITUDE_NOT_AVAILABLE,
            latitude_minutes: LATITUDE_NOT_AVAILABLE,
            cog: COG_NOT_AVAILABLE,
            hdg: HEADING_NOT_AVAILABLE,
            timestamp: TIMESTAMP_NOT_AVAILABLE,
            cs_unit: true,
            display_flag: false,
            dsc_flag: false,
            band_flag: false,
            message_22_flag: false,
            assigned: false,
            raim: false,
            radio_status: 0,
        }
    }
}

impl ClassBPositionReport {
    /// Repeat indicator, 0-3
    pub fn repeat_indicator(&self) -> u8 {
        self.repeat_indicator
    }

    /// MMSI of the reporting vessel
    pub fn mmsi(&self) -> Mmsi {
        self.mmsi
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

    /// Carrier-sense unit (true) or SOTDMA unit (false)
    pub fn cs_unit(&self) -> bool {
        self.cs_unit
    }

    /// Unit has a display for message 12 and 14
    pub fn display_flag(&self) -> bool {
        self.display_flag
    }

    /// Unit is attached to a VHF voice radio with DSC capability
    pub fn dsc_flag(&self) -> bool {
        self.dsc_flag
    }

    /// Unit can use any part of the marine band
    pub fn band_flag(&self) -> bool {
        self.band_flag
    }

    /// Unit can accept channel assignment via message 22
    pub fn message_22_flag(&self) -> bool {
        self.message_22_flag
    }

    /// Assigned mode flag
    pub fn assigned(&self) -> bool {
        self.assigned
    }

    /// RAIM flag
    pub fn raim(&self) -> bool {
        self.raim
    }

    /// Raw 20-bit communication state
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

    /// Set the carrier-sense unit flag
    pub fn set_cs_unit(&mut self, value: bool) {
        self.cs_unit = value;
    }

    /// Set the display flag
    pub fn set_display_flag(&mut self, value: bool) {
        self.display_flag = value;
    }

    /// Set the DSC flag
    pub fn set_dsc_flag(&mut self, value: bool) {
        self.dsc_flag = value;
    }

    /// Set the band flag
    pub fn set_band_flag(&mut self, value: bool) {
        self.band_flag = value;
    }

    /// Set the message 22 flag
    pub fn set_message_22_flag(&mut self, value: bool) {
        self.message_22_flag = value;
    }

    /// Set the assigned mode flag
    pub fn set_assigned(&mut self, value: bool) {
        self.assigned = value;
    }

    /// Set the RAIM flag
    pub fn set_raim(&mut self, value: bool) {
        self.raim = value;
    }

    /// Set the raw 20-bit communication state
    pub fn set_radio_status(&mut self, value: u32) -> Result<()> {
        if value >= 1 << 20 {
            return Err(Error::invalid_argument(format!(
                "Radio status {:#x} exceeds 20 bits",
                value
            )));
        }
        self.radio_status = value;
        Ok(())
    }
}

impl AisMessage for ClassBPositionReport {
    const SIZE_BITS_MIN: usize = 168;
    const SIZE_BITS_MAX: usize = 168;

    fn id(&self) -> MessageId {
        MessageId::StandardClassBCsPositionReport
    }

    fn read_data(bits: &Bits) -> Result<Self> {
        expect_id(bits, &[MessageId::StandardClassBCsPositionReport])?;

        Ok(ClassBPositionReport {
            repeat_indicator: bits.get_unsigned(6, 2)? as u8,
            mmsi: Mmsi::from_raw(bits.get_unsigned(8, 30)?),
            // 38..46 regional reserved
            sog: bits.get_unsigned(46, 10)?,
            position_accuracy: bits.get_bool(56)?,
            longitude_minutes: bits.get_signed(57, 28)?,
            latitude_minutes: bits.get_signed(85, 27)?,
            cog: bits.get_unsigned(112, 12)?,
            hdg: bits.get_unsigned(124, 9)?,
            timestamp: bits.get_unsigned(133, 6)? as u8,
            // 139..141 regional reserved
            cs_unit: bits.get_bool(141)?,
            display_flag: bits.get_bool(142)?,
            dsc_flag: bits.get_bool(143)?,
            band_flag: bits.get_bool(144)?,
            message_22_flag: bits.get_bool(145)?,
            assigned: bits.get_bool(146)?,
            raim: bits.get_bool(147)?,
            radio_status: bits.get_unsigned(148, 20)?,
        })
    }

    fn get_data(&self) -> Result<Bits> {
        let mut w = BitWriter::with_capacity(Self::SIZE_BITS_MAX);
        w.append_unsigned(MessageId::StandardClassBCsPositionReport.value() as u32, 6)?;
        w.append_unsigned(self.repeat_indicator as u32, 2)?;
        w.append_unsigned(self.mmsi.value(), 30)?;
        w.append_unsigned(0, 8)?;
        w.append_unsigned(self.sog, 10)?;
        w.append_bool(self.position_accuracy);
        w.append_signed(self.longitude_minutes, 28)?;
        w.append_signed(self.latitude_minutes, 27)?;
        w.append_unsigned(self.cog, 12)?;
        w.append_unsigned(self.hdg, 9)?;
        w.append_unsigned(self.timestamp as u32, 6)?;
        w.append_unsigned(0, 2)?;
        w.append_bool(self.cs_unit);
        w.append_bool(self.display_flag);
        w.append_bool(self.dsc_flag);
        w.append_bool(self.band_flag);
        w.append_bool(self.message_22_flag);
        w.append_bool(self.assigned);
        w.append_bool(self.raim);
        w.append_unsigned(self.radio_status, 20)?;
        Ok(w.finish())
    }
}
