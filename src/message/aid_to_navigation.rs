//! Message 21: Aid-to-Navigation Report
//!
//! ```text
//! offset  width  field
//!      0      6  message id (21)
//!      6      2  repeat indicator
//!      8     30  MMSI
//!     38      5  aid type
//!     43    120  name (20 characters)
//!    163      1  position accuracy
//!    164     28  longitude, 1/10000 min
//!    192     27  latitude, 1/10000 min
//!    219      9  dimension to bow
//!    228      9  dimension to stern
//!    237      6  dimension to port
//!    243      6  dimension to starboard
//!    249      4  EPFD type
//!    253      6  UTC second
//!    259      1  off-position indicator
//!    260      8  regional reserved
//!    268      1  RAIM flag
//!    269      1  virtual aid flag
//!    270      1  assigned mode flag
//!    271      1  spare
//!    272   0-88  name extension (up to 14 characters, padded to a byte boundary)
//! ```

use super::{expect_id, AisMessage, EpfdFixType, MessageId};
use crate::bits::{BitWriter, Bits};
use crate::core::Mmsi;
use crate::error::{Error, Result};
use crate::geo::{Latitude, Longitude, LATITUDE_NOT_AVAILABLE, LONGITUDE_NOT_AVAILABLE};

/// Type of aid to navigation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AidType {
    /// 0: Not specified
    #[default]
    Unspecified = 0,
    /// 1: Reference point
    ReferencePoint = 1,
    /// 2: RACON (radar transponder)
    Racon = 2,
    /// 3: Fixed structure off shore
    FixedStructure = 3,
    /// 4: Reserved for future use
    Reserved = 4,
    /// 5: Light, without sectors
    LightNoSectors = 5,
    /// 6: Light, with sectors
    LightSectors = 6,
    /// 7: Leading light front
    LeadingLightFront = 7,
    /// 8: Leading light rear
    LeadingLightRear = 8,
    /// 9: Beacon, cardinal N
    BeaconCardinalN = 9,
    /// 10: Beacon, cardinal E
    BeaconCardinalE = 10,
    /// 11: Beacon, cardinal S
    BeaconCardinalS = 11,
    /// 12: Beacon, cardinal W
    BeaconCardinalW = 12,
    /// 13: Beacon, port hand
    BeaconPortHand = 13,
    /// 14: Beacon, starboard hand
    BeaconStarboardHand = 14,
    /// 15: Beacon, preferred channel port hand
    BeaconPreferredChannelPortHand = 15,
    /// 16: Beacon, preferred channel starboard hand
    BeaconPreferredChannelStarboardHand = 16,
    /// 17: Beacon, isolated danger
    BeaconIsolatedDanger = 17,
    /// 18: Beacon, safe water
    BeaconSafeWater = 18,
    /// 19: Beacon, special mark
    BeaconSpecialMark = 19,
    /// 20: Cardinal mark N
    CardinalN = 20,
    /// 21: Cardinal mark E
    CardinalE = 21,
    /// 22: Cardinal mark S
    CardinalS = 22,
    /// 23: Cardinal mark W
    CardinalW = 23,
    /// 24: Port hand mark
    MarkPortHand = 24,
    /// 25: Starboard hand mark
    MarkStarboardHand = 25,
    /// 26: Preferred channel port hand
    PreferredChannelPortHand = 26,
    /// 27: Preferred channel starboard hand
    PreferredChannelStarboardHand = 27,
    /// 28: Isolated danger
    IsolatedDanger = 28,
    /// 29: Safe water
    SafeWater = 29,
    /// 30: Special mark
    SpecialMark = 30,
    /// 31: Light vessel / LANBY / rigs
    LightVessel = 31,
}

impl AidType {
    /// Every aid type in raw code order
    pub const ALL: [AidType; 32] = [
        AidType::Unspecified,
        AidType::ReferencePoint,
        AidType::Racon,
        AidType::FixedStructure,
        AidType::Reserved,
        AidType::LightNoSectors,
        AidType::LightSectors,
        AidType::LeadingLightFront,
        AidType::LeadingLightRear,
        AidType::BeaconCardinalN,
        AidType::BeaconCardinalE,
        AidType::BeaconCardinalS,
        AidType::BeaconCardinalW,
        AidType::BeaconPortHand,
        AidType::BeaconStarboardHand,
        AidType::BeaconPreferredChannelPortHand,
        AidType::BeaconPreferredChannelStarboardHand,
        AidType::BeaconIsolatedDanger,
        AidType::BeaconSafeWater,
        AidType::BeaconSpecialMark,
        AidType::CardinalN,
        AidType::CardinalE,
        AidType::CardinalS,
        AidType::CardinalW,
        AidType::MarkPortHand,
        AidType::MarkStarboardHand,
        AidType::PreferredChannelPortHand,
        AidType::PreferredChannelStarboardHand,
        AidType::IsolatedDanger,
        AidType::SafeWater,
        AidType::SpecialMark,
        AidType::LightVessel,
    ];

    /// Get the 5-bit raw value
    pub fn raw(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for AidType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| Error::invalid_argument(format!("Aid type {} out of range [0, 31]", value)))
    }
}

/// Whether the aid is on its charted position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OffPosition {
    /// 0: On position
    #[default]
    OnPosition,
    /// 1: Off position
    OffPosition,
}

/// Whether the aid physically exists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VirtualAid {
    /// 0: Real aid to navigation at the indicated position
    #[default]
    RealAid,
    /// 1: Virtual aid, no physical station
    VirtualAid,
}

/// Aid-to-Navigation Report (message 21)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AidToNavigationReport {
    repeat_indicator: u8,
    mmsi: Mmsi,
    aid_type: AidType,
    name: String,
    position_accuracy: bool,
    longitude_minutes: i32,
    latitude_minutes: i32,
    to_bow: u16,
    to_stern: u16,
    to_port: u8,
    to_starboard: u8,
    epfd_fix: EpfdFixType,
    utc_second: u8,
    off_position: OffPosition,
    regional: u8,
    raim: bool,
    virtual_aid_flag: VirtualAid,
    assigned: bool,
    name_extension: String,
}

impl Default for AidToNavigationReport {
    fn default() -> Self {
        AidToNavigationReport {
            repeat_indicator: 0,
            mmsi: Mmsi::default(),
            aid_type: AidType::Unspecified,
            name: String::new(),
            position_accuracy: false,
            longitude_minutes: LONGITUDE_NOT_AVAILABLE,
            latitude_minutes: LATITUDE_NOT_AVAILABLE,
            to_bow: 0,
            to_stern: 0,
            to_port: 0,
            to_starboard: 0,
            epfd_fix: EpfdFixType::Unspecified,
            utc_second: Self::UTC_SECOND_NOT_AVAILABLE,
            off_position: OffPosition::OnPosition,
            regional: 0,
            raim: false,
            virtual_aid_flag: VirtualAid::RealAid,
            assigned: false,
            name_extension: String::new(),
        }
    }
}

impl AidToNavigationReport {
    /// Maximum length of the name field
    pub const NAME_MAX_LEN: usize = 20;

    /// Maximum length of the name extension
    pub const NAME_EXTENSION_MAX_LEN: usize = 14;

    /// UTC second value meaning "time stamp not available"
    pub const UTC_SECOND_NOT_AVAILABLE: u8 = 60;

    /// Repeat indicator, 0-3
    pub fn repeat_indicator(&self) -> u8 {
        self.repeat_indicator
    }

    /// MMSI of the aid to navigation
    pub fn mmsi(&self) -> Mmsi {
        self.mmsi
    }

    /// Type of the aid
    pub fn aid_type(&self) -> AidType {
        self.aid_type
    }

    /// Name, without the extension
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position accuracy flag, true for better than 10 m
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

    /// Raw longitude in 1/10000 minute
    pub fn longitude_raw(&self) -> i32 {
        self.longitude_minutes
    }

    /// Raw latitude in 1/10000 minute
    pub fn latitude_raw(&self) -> i32 {
        self.latitude_minutes
    }

    /// Dimension to bow in meters
    pub fn to_bow(&self) -> u16 {
        self.to_bow
    }

    /// Dimension to stern in meters
    pub fn to_stern(&self) -> u16 {
        self.to_stern
    }

    /// Dimension to port in meters
    pub fn to_port(&self) -> u8 {
        self.to_port
    }

    /// Dimension to starboard in meters
    pub fn to_starboard(&self) -> u8 {
        self.to_starboard
    }

    /// Type of position fixing device
    pub fn epfd_fix(&self) -> EpfdFixType {
        self.epfd_fix
    }

    /// UTC second of the report, 60 if not available
    pub fn utc_second(&self) -> u8 {
        self.utc_second
    }

    /// Off-position indicator
    pub fn off_position(&self) -> OffPosition {
        self.off_position
    }

    /// Regional reserved bits
    pub fn regional(&self) -> u8 {
        self.regional
    }

    /// RAIM flag
    pub fn raim(&self) -> bool {
        self.raim
    }

    /// Virtual aid flag
    pub fn virtual_aid_flag(&self) -> VirtualAid {
        self.virtual_aid_flag
    }

    /// Assigned mode flag
    pub fn assigned(&self) -> bool {
        self.assigned
    }

    /// Name extension, empty if none
    pub fn name_extension(&self) -> &str {
        &self.name_extension
    }

    /// Set the repeat indicator
    pub fn set_repeat_indicator(&mut self, value: u8) -> Result<()> {
        self.repeat_indicator = check_max("repeat indicator", value, 3)?;
        Ok(())
    }

    /// Set the MMSI
    pub fn set_mmsi(&mut self, mmsi: Mmsi) {
        self.mmsi = mmsi;
    }

    /// Set the aid type
    pub fn set_aid_type(&mut self, aid_type: AidType) {
        self.aid_type = aid_type;
    }

    /// Set the name, upper cased and truncated to 20 characters
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_uppercase().chars().take(Self::NAME_MAX_LEN).collect();
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

    /// Set the dimension to bow in meters (0-511)
    pub fn set_to_bow(&mut self, value: u16) -> Result<()> {
        self.to_bow = check_max("dimension to bow", value, 511)?;
        Ok(())
    }

    /// Set the dimension to stern in meters (0-511)
    pub fn set_to_stern(&mut self, value: u16) -> Result<()> {
        self.to_stern = check_max("dimension to stern", value, 511)?;
        Ok(())
    }

    /// Set the dimension to port in meters (0-63)
    pub fn set_to_port(&mut self, value: u8) -> Result<()> {
        self.to_port = check_max("dimension to port", value, 63)?;
        Ok(())
    }

    /// Set the dimension to starboard in meters (0-63)
    pub fn set_to_starboard(&mut self, value: u8) -> Result<()> {
        self.to_starboard = check_max("dimension to starboard", value, 63)?;
        Ok(())
    }

    /// Set the type of position fixing device
    pub fn set_epfd_fix(&mut self, epfd_fix: EpfdFixType) -> Result<()> {
        check_max("EPFD type", epfd_fix.raw(), 15)?;
        self.epfd_fix = epfd_fix;
        Ok(())
    }

    /// Set the UTC second (0-63, 60 and above carry special meanings)
    pub fn set_utc_second(&mut self, value: u8) -> Result<()> {
        self.utc_second = check_max("UTC second", value, 63)?;
        Ok(())
    }

    /// Set the off-position indicator
    pub fn set_off_position(&mut self, value: OffPosition) {
        self.off_position = value;
    }

    /// Set the regional reserved bits
    pub fn set_regional(&mut self, value: u8) {
        self.regional = value;
    }

    /// Set the RAIM flag
    pub fn set_raim(&mut self, value: bool) {
        self.raim = value;
    }

    /// Set the virtual aid flag
    pub fn set_virtual_aid_flag(&mut self, value: VirtualAid) {
        self.virtual_aid_flag = value;
    }

    /// Set the assigned mode flag
    pub fn set_assigned(&mut self, value: bool) {
        self.assigned = value;
    }

    /// Set the name extension, upper cased and truncated to 14 characters
    pub fn set_name_extension(&mut self, name_extension: &str) {
        self.name_extension = name_extension
            .to_uppercase()
            .chars()
            .take(Self::NAME_EXTENSION_MAX_LEN)
            .collect();
    }
}

fn check_max<T: PartialOrd + std::fmt::Display>(name: &str, value: T, max: T) -> Result<T> {
    if value > max {
        return Err(Error::invalid_argument(format!(
            "{} {} exceeds maximum {}",
            name, value, max
        )));
    }
    Ok(value)
}

impl AisMessage for AidToNavigationReport {
    const SIZE_BITS_MIN: usize = 272;
    const SIZE_BITS_MAX: usize = 360;

    fn id(&self) -> MessageId {
        MessageId::AidToNavigationReport
    }

    fn read_data(bits: &Bits) -> Result<Self> {
        expect_id(bits, &[MessageId::AidToNavigationReport])?;

        // any trailing bits that do not form a whole character are byte alignment
        let extension_chars = bits.len().saturating_sub(Self::SIZE_BITS_MIN) / 6;
        let name_extension = if extension_chars > 0 {
            bits.get_text(Self::SIZE_BITS_MIN, extension_chars * 6)?
        } else {
            String::new()
        };

        Ok(AidToNavigationReport {
            repeat_indicator: bits.get_unsigned(6, 2)? as u8,
            mmsi: Mmsi::from_raw(bits.get_unsigned(8, 30)?),
            aid_type: AidType::try_from(bits.get_unsigned(38, 5)? as u8)?,
            name: bits.get_text(43, 120)?,
            position_accuracy: bits.get_bool(163)?,
            longitude_minutes: bits.get_signed(164, 28)?,
            latitude_minutes: bits.get_signed(192, 27)?,
            to_bow: bits.get_unsigned(219, 9)? as u16,
            to_stern: bits.get_unsigned(228, 9)? as u16,
            to_port: bits.get_unsigned(237, 6)? as u8,
            to_starboard: bits.get_unsigned(243, 6)? as u8,
            epfd_fix: EpfdFixType::from_raw(bits.get_unsigned(249, 4)? as u8),
            utc_second: bits.get_unsigned(253, 6)? as u8,
            off_position: if bits.get_bool(259)? {
                OffPosition::OffPosition
            } else {
                OffPosition::OnPosition
            },
            regional: bits.get_unsigned(260, 8)? as u8,
            raim: bits.get_bool(268)?,
            virtual_aid_flag: if bits.get_bool(269)? {
                VirtualAid::VirtualAid
            } else {
                VirtualAid::RealAid
            },
            assigned: bits.get_bool(270)?,
            name_extension,
        })
    }

    fn get_data(&self) -> Result<Bits> {
        let mut w = BitWriter::with_capacity(Self::SIZE_BITS_MAX);
        w.append_unsigned(MessageId::AidToNavigationReport.value() as u32, 6)?;
        w.append_unsigned(self.repeat_indicator as u32, 2)?;
        w.append_unsigned(self.mmsi.value(), 30)?;
        w.append_unsigned(self.aid_type.raw() as u32, 5)?;
        w.append_text(&self.name, 120)?;
        w.append_bool(self.position_accuracy);
        w.append_signed(self.longitude_minutes, 28)?;
        w.append_signed(self.latitude_minutes, 27)?;
        w.append_unsigned(self.to_bow as u32, 9)?;
        w.append_unsigned(self.to_stern as u32, 9)?;
        w.append_unsigned(self.to_port as u32, 6)?;
        w.append_unsigned(self.to_starboard as u32, 6)?;
        w.append_unsigned(self.epfd_fix.raw() as u32, 4)?;
        w.append_unsigned(self.utc_second as u32, 6)?;
        w.append_bool(self.off_position == OffPosition::OffPosition);
        w.append_unsigned(self.regional as u32, 8)?;
        w.append_bool(self.raim);
        w.append_bool(self.virtual_aid_flag == VirtualAid::VirtualAid);
        w.append_bool(self.assigned);
        w.append_bool(false); // spare

        let chars = self.name_extension.chars().count();
        if chars > 0 {
            let width = chars * 6;
            w.append_text(&self.name_extension, width)?;
            let padding = (8 - width % 8) % 8;
            if padding > 0 {
                w.append_unsigned(0, padding)?;
            }
        }

        Ok(w.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Result<AidToNavigationReport> {
        let mut m = AidToNavigationReport::default();
        m.set_mmsi(Mmsi::new(123_456_789)?);
        m.set_aid_type(AidType::ReferencePoint);
        m.set_name("TEST");
        m.set_position_accuracy(true);
        m.set_longitude(None);
        m.set_latitude(None);
        m.set_epfd_fix(EpfdFixType::Unspecified)?;
        m.set_utc_second(60)?;
        m.set_off_position(OffPosition::OnPosition);
        m.set_raim(false);
        m.set_virtual_aid_flag(VirtualAid::RealAid);
        m.set_assigned(false);
        Ok(m)
    }

    #[test]
    fn test_encode_decode_minimal() -> Result<()> {
        let m = sample()?;
        let bits = m.get_data()?;
        assert_eq!(bits.len(), 272);

        let decoded = AidToNavigationReport::parse(&bits)?;
        assert_eq!(decoded, m);
        assert_eq!(decoded.longitude_raw(), LONGITUDE_NOT_AVAILABLE);
        assert_eq!(decoded.latitude(), None);
        Ok(())
    }

    #[test]
    fn test_name_extension_lengths() -> Result<()> {
        let mut m = sample()?;
        m.set_name_extension("ABCDEFGHIJKLMN");
        let bits = m.get_data()?;
        assert_eq!(bits.len(), 360);
        assert_eq!(AidToNavigationReport::parse(&bits)?.name_extension(), "ABCDEFGHIJKLMN");

        m.set_name_extension("A");
        let bits = m.get_data()?;
        assert_eq!(bits.len(), 280);
        assert_eq!(AidToNavigationReport::parse(&bits)?.name_extension(), "A");
        Ok(())
    }

    #[test]
    fn test_name_extension_truncated() -> Result<()> {
        let mut m = sample()?;
        m.set_name_extension("ABCDEFGHIJKLMNO");
        assert_eq!(m.name_extension(), "ABCDEFGHIJKLMN");
        assert_eq!(m.get_data()?.len(), 360);
        Ok(())
    }

    #[test]
    fn test_name_truncated() {
        let mut m = AidToNavigationReport::default();
        m.set_name("A NAME MUCH LONGER THAN TWENTY");
        assert_eq!(m.name().len(), 20);
    }

    #[test]
    fn test_position_roundtrip() -> Result<()> {
        let mut m = sample()?;
        m.set_longitude(Some(Longitude::new(-71.25)?));
        m.set_latitude(Some(Latitude::new(-33.5)?));
        m.set_to_bow(511)?;
        m.set_to_starboard(63)?;
        m.set_epfd_fix(EpfdFixType::Reserved(12))?;

        let decoded = AidToNavigationReport::parse(&m.get_data()?)?;
        assert_eq!(decoded.longitude(), Some(Longitude::new(-71.25)?));
        assert_eq!(decoded.latitude(), Some(Latitude::new(-33.5)?));
        assert_eq!(decoded.to_bow(), 511);
        assert_eq!(decoded.to_starboard(), 63);
        assert_eq!(decoded.epfd_fix(), EpfdFixType::Reserved(12));
        Ok(())
    }

    #[test]
    fn test_setter_range_checks() {
        let mut m = AidToNavigationReport::default();
        assert!(m.set_repeat_indicator(4).is_err());
        assert!(m.set_to_bow(512).is_err());
        assert!(m.set_to_port(64).is_err());
        assert!(m.set_utc_second(64).is_err());
        assert!(m.set_epfd_fix(EpfdFixType::Reserved(16)).is_err());
        assert_eq!(m, AidToNavigationReport::default());
    }

    #[test]
    fn test_length_bounds() -> Result<()> {
        let mut w = BitWriter::new();
        w.append_unsigned(21, 6)?;
        for _ in 0..(271 - 6) {
            w.append_bool(false);
        }
        assert!(matches!(
            AidToNavigationReport::parse(&w.finish()),
            Err(Error::InvalidArgument(_))
        ));
        Ok(())
    }

    #[test]
    fn test_decode_mmsi_above_nine_digits() -> Result<()> {
        let mut w = BitWriter::new();
        w.append_unsigned(21, 6)?;
        w.append_unsigned(0, 2)?;
        w.append_unsigned(0x3FFF_FFFF, 30)?;
        for _ in 38..272 {
            w.append_bool(false);
        }

        let decoded = AidToNavigationReport::parse(&w.finish())?;
        assert_eq!(decoded.mmsi().value(), 0x3FFF_FFFF);
        assert_eq!(decoded.get_data()?.get_unsigned(8, 30)?, 0x3FFF_FFFF);
        Ok(())
    }

    #[test]
    fn test_read_data_short_payload() -> Result<()> {
        let mut w = BitWriter::new();
        w.append_unsigned(21, 6)?;
        for _ in 6..100 {
            w.append_bool(false);
        }
        assert!(matches!(
            AidToNavigationReport::read_data(&w.finish()),
            Err(Error::OutOfRange(_))
        ));
        Ok(())
    }

    #[test]
    fn test_lower_case_names_roundtrip() -> Result<()> {
        let mut m = sample()?;
        m.set_name("test buoy");
        m.set_name_extension("north");
        assert_eq!(m.name(), "TEST BUOY");
        assert_eq!(m.name_extension(), "NORTH");

        let decoded = AidToNavigationReport::parse(&m.get_data()?)?;
        assert_eq!(decoded, m);
        Ok(())
    }

    #[test]
    fn test_wrong_id_rejected() -> Result<()> {
        let mut w = BitWriter::new();
        w.append_unsigned(1, 6)?;
        for _ in 0..(272 - 6) {
            w.append_bool(false);
        }
        assert!(AidToNavigationReport::parse(&w.finish()).is_err());
        Ok(())
    }

    #[test]
    fn test_aid_type_conversion() -> Result<()> {
        for raw in 0..32u8 {
            assert_eq!(AidType::try_from(raw)?.raw(), raw);
        }
        assert!(AidType::try_from(32).is_err());
        Ok(())
    }
}
