//! AIS message types and id-keyed dispatch
//!
//! Every message starts with a 6-bit message id, a 2-bit repeat indicator
//! and a 30-bit MMSI. The remaining layout is fixed per message id, so
//! decoding reads the id, looks the matching parser up in a static registry
//! and lets that parser read its fields at known bit offsets.

mod aid_to_navigation;
mod class_b_position;
mod position_report;

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::bits::Bits;
use crate::core::Mmsi;
use crate::error::{Error, Result};
use crate::wire;

pub use aid_to_navigation::{AidToNavigationReport, AidType, OffPosition, VirtualAid};
pub use class_b_position::ClassBPositionReport;
pub use position_report::{ManeuverIndicator, NavigationStatus, PositionReport};

/// Identifier of an AIS message type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageId {
    /// 1: Position report, scheduled
    PositionReportClassA = 1,
    /// 2: Position report, assigned schedule
    PositionReportClassAAssignedSchedule = 2,
    /// 3: Position report, response to interrogation
    PositionReportClassAResponseToInterrogation = 3,
    /// 18: Standard Class B CS position report
    StandardClassBCsPositionReport = 18,
    /// 21: Aid-to-navigation report
    AidToNavigationReport = 21,
}

impl MessageId {
    /// Get the numeric message id
    pub fn value(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for MessageId {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(MessageId::PositionReportClassA),
            2 => Ok(MessageId::PositionReportClassAAssignedSchedule),
            3 => Ok(MessageId::PositionReportClassAResponseToInterrogation),
            18 => Ok(MessageId::StandardClassBCsPositionReport),
            21 => Ok(MessageId::AidToNavigationReport),
            _ => Err(Error::not_supported(format!(
                "AIS message id {}",
                value
            ))),
        }
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Electronic position fixing device type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EpfdFixType {
    /// 0: Undefined
    #[default]
    Unspecified,
    /// 1: GPS
    Gps,
    /// 2: GLONASS
    Glonass,
    /// 3: Combined GPS/GLONASS
    CombinedGpsGlonass,
    /// 4: Loran-C
    LoranC,
    /// 5: Chayka
    Chayka,
    /// 6: Integrated navigation system
    IntegratedNavigationSystem,
    /// 7: Surveyed
    Surveyed,
    /// 8: Galileo
    Galileo,
    /// 15: Internal GNSS
    InternalGnss,
    /// 9-14: Reserved, raw value kept
    Reserved(u8),
}

impl EpfdFixType {
    /// Decode a 4-bit raw value
    pub fn from_raw(value: u8) -> Self {
        match value {
            0 => EpfdFixType::Unspecified,
            1 => EpfdFixType::Gps,
            2 => EpfdFixType::Glonass,
            3 => EpfdFixType::CombinedGpsGlonass,
            4 => EpfdFixType::LoranC,
            5 => EpfdFixType::Chayka,
            6 => EpfdFixType::IntegratedNavigationSystem,
            7 => EpfdFixType::Surveyed,
            8 => EpfdFixType::Galileo,
            15 => EpfdFixType::InternalGnss,
            other => EpfdFixType::Reserved(other),
        }
    }

    /// Get the 4-bit raw value
    pub fn raw(&self) -> u8 {
        match self {
            EpfdFixType::Unspecified => 0,
            EpfdFixType::Gps => 1,
            EpfdFixType::Glonass => 2,
            EpfdFixType::CombinedGpsGlonass => 3,
            EpfdFixType::LoranC => 4,
            EpfdFixType::Chayka => 5,
            EpfdFixType::IntegratedNavigationSystem => 6,
            EpfdFixType::Surveyed => 7,
            EpfdFixType::Galileo => 8,
            EpfdFixType::InternalGnss => 15,
            EpfdFixType::Reserved(value) => *value,
        }
    }
}

/// Common contract of all AIS message types
pub trait AisMessage: Sized {
    /// Smallest valid payload length in bits
    const SIZE_BITS_MIN: usize;

    /// Largest valid payload length in bits
    const SIZE_BITS_MAX: usize;

    /// Message id of this instance
    fn id(&self) -> MessageId;

    /// Read all fields from a payload whose length has been validated
    fn read_data(bits: &Bits) -> Result<Self>;

    /// Serialize all fields in schema order
    fn get_data(&self) -> Result<Bits>;

    /// Validate the payload length, then read all fields
    fn parse(bits: &Bits) -> Result<Self> {
        if bits.len() < Self::SIZE_BITS_MIN || bits.len() > Self::SIZE_BITS_MAX {
            return Err(Error::invalid_argument(format!(
                "Invalid payload length {} bits, expected [{}, {}]",
                bits.len(),
                Self::SIZE_BITS_MIN,
                Self::SIZE_BITS_MAX
            )));
        }
        Self::read_data(bits)
    }
}

/// Check that the id field of a payload matches one of `expected`
pub(crate) fn expect_id(bits: &Bits, expected: &[MessageId]) -> Result<MessageId> {
    let id = MessageId::try_from(bits.get_unsigned(0, 6)? as u8)?;
    if !expected.contains(&id) {
        return Err(Error::invalid_argument(format!(
            "Unexpected message id {}",
            id
        )));
    }
    Ok(id)
}

/// A decoded AIS message
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Message {
    /// Messages 1, 2 and 3
    PositionReport(PositionReport),
    /// Message 18
    ClassBPositionReport(ClassBPositionReport),
    /// Message 21
    AidToNavigationReport(AidToNavigationReport),
}

impl Message {
    /// Get the message id
    pub fn id(&self) -> MessageId {
        match self {
            Message::PositionReport(m) => m.id(),
            Message::ClassBPositionReport(m) => m.id(),
            Message::AidToNavigationReport(m) => m.id(),
        }
    }

    /// Get the MMSI of the transmitting station
    pub fn mmsi(&self) -> Mmsi {
        match self {
            Message::PositionReport(m) => m.mmsi(),
            Message::ClassBPositionReport(m) => m.mmsi(),
            Message::AidToNavigationReport(m) => m.mmsi(),
        }
    }

    /// Get the repeat indicator
    pub fn repeat_indicator(&self) -> u8 {
        match self {
            Message::PositionReport(m) => m.repeat_indicator(),
            Message::ClassBPositionReport(m) => m.repeat_indicator(),
            Message::AidToNavigationReport(m) => m.repeat_indicator(),
        }
    }

    /// Serialize the message into its payload bits
    pub fn get_data(&self) -> Result<Bits> {
        match self {
            Message::PositionReport(m) => m.get_data(),
            Message::ClassBPositionReport(m) => m.get_data(),
            Message::AidToNavigationReport(m) => m.get_data(),
        }
    }
}

impl From<PositionReport> for Message {
    fn from(m: PositionReport) -> Self {
        Message::PositionReport(m)
    }
}

impl From<ClassBPositionReport> for Message {
    fn from(m: ClassBPositionReport) -> Self {
        Message::ClassBPositionReport(m)
    }
}

impl From<AidToNavigationReport> for Message {
    fn from(m: AidToNavigationReport) -> Self {
        Message::AidToNavigationReport(m)
    }
}

type ParseFn = fn(&Bits) -> Result<Message>;

fn parse_as<T: AisMessage + Into<Message>>(bits: &Bits) -> Result<Message> {
    T::parse(bits).map(Into::into)
}

/// Registry mapping message ids to their parsers, built on first use
static MESSAGE_REGISTRY: LazyLock<HashMap<u8, ParseFn>> = LazyLock::new(|| {
    let mut registry: HashMap<u8, ParseFn> = HashMap::new();
    registry.insert(1, parse_as::<PositionReport>);
    registry.insert(2, parse_as::<PositionReport>);
    registry.insert(3, parse_as::<PositionReport>);
    registry.insert(18, parse_as::<ClassBPositionReport>);
    registry.insert(21, parse_as::<AidToNavigationReport>);
    registry
});

/// Decode a payload into the message type selected by its id field
pub fn parse(bits: &Bits) -> Result<Message> {
    let id = bits.get_unsigned(0, 6)? as u8;
    let Some(parse) = MESSAGE_REGISTRY.get(&id) else {
        tracing::debug!(id, "unsupported AIS message id");
        return Err(Error::not_supported(format!("AIS message id {}", id)));
    };

    let message = parse(bits)?;
    tracing::trace!(id, bits = bits.len(), "decoded AIS message");
    Ok(message)
}

/// Decode a message spread over one or more armored payload fragments
///
/// Each entry is the payload text of a fragment and its fill bit count. Only
/// the last fragment may carry fill bits.
pub fn make_message(fragments: &[(String, u32)]) -> Result<Message> {
    let Some(((_, fill_bits), leading)) = fragments.split_last() else {
        return Err(Error::invalid_argument("No payload fragments"));
    };
    if let Some((_, fill)) = leading.iter().find(|(_, fill)| *fill != 0) {
        return Err(Error::invalid_argument(format!(
            "Fill bits {} on a non-final fragment",
            fill
        )));
    }

    let payload: String = fragments.iter().map(|(text, _)| text.as_str()).collect();
    parse(&Bits::from_armored_text(&payload, *fill_bits)?)
}

/// Encode a message into armored payload fragments
///
/// Fragments hold at most [`wire::MAX_PAYLOAD_CHARS`] characters; the fill
/// bit count is attached to the last fragment, all others carry zero.
pub fn encode_message(message: &Message) -> Result<Vec<(String, u32)>> {
    let (payload, fill_bits) = message.get_data()?.to_armored_text();
    let chunks: Vec<&[u8]> = payload.as_bytes().chunks(wire::MAX_PAYLOAD_CHARS).collect();
    let count = chunks.len();

    Ok(chunks
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| {
            let fill = if i + 1 == count { fill_bits } else { 0 };
            (String::from_utf8_lossy(chunk).into_owned(), fill)
        })
        .collect())
}
