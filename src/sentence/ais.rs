//! VDM and VDO: AIS VHF data-link messages
//!
//! Both sentences carry one fragment of an armored AIS payload. Messages
//! longer than one sentence are split into numbered fragments sharing a
//! sequential message id.
//!
//! ```text
//!        1 2 3 4 5    6
//!        | | | | |    |
//! !--VDM,x,x,x,a,s--s,x*hh
//! ```

use super::{NmeaSentence, SentenceId};
use crate::core::{AisChannel, Talker};
use crate::encoding::Armor;
use crate::error::{Error, Result};
use crate::fields::{expect_count, format_opt, read, read_required};

/// Payload fragment shared by VDM and VDO
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AisFragment {
    fragment_count: u8,
    fragment_number: u8,
    sequence_id: Option<u8>,
    channel: Option<AisChannel>,
    payload: String,
    fill_bits: u32,
}

impl Default for AisFragment {
    fn default() -> Self {
        AisFragment {
            fragment_count: 1,
            fragment_number: 1,
            sequence_id: None,
            channel: None,
            payload: String::new(),
            fill_bits: 0,
        }
    }
}

impl AisFragment {
    /// Largest fragment count expressible in the single-digit field
    pub const MAX_FRAGMENTS: u8 = 9;

    /// Largest sequential message id
    pub const MAX_SEQUENCE_ID: u8 = 9;

    /// Create a fragment, validating numbering, payload characters and fill bits
    pub fn new(fragment_count: u8, fragment_number: u8, payload: &str, fill_bits: u32) -> Result<Self> {
        if !(1..=Self::MAX_FRAGMENTS).contains(&fragment_count) {
            return Err(Error::invalid_argument(format!(
                "Fragment count {} out of range [1, {}]",
                fragment_count,
                Self::MAX_FRAGMENTS
            )));
        }
        if !(1..=fragment_count).contains(&fragment_number) {
            return Err(Error::invalid_argument(format!(
                "Fragment number {} out of range [1, {}]",
                fragment_number, fragment_count
            )));
        }
        if fill_bits > 5 {
            return Err(Error::invalid_argument(format!(
                "Fill bits {} out of range [0, 5]",
                fill_bits
            )));
        }
        for c in payload.chars() {
            Armor::decode_char(c)?;
        }

        Ok(AisFragment {
            fragment_count,
            fragment_number,
            sequence_id: None,
            channel: None,
            payload: payload.to_string(),
            fill_bits,
        })
    }

    /// Total number of fragments of the message
    pub fn fragment_count(&self) -> u8 {
        self.fragment_count
    }

    /// Number of this fragment, starting at 1
    pub fn fragment_number(&self) -> u8 {
        self.fragment_number
    }

    /// Sequential message id linking the fragments of one message
    pub fn sequence_id(&self) -> Option<u8> {
        self.sequence_id
    }

    /// Radio channel
    pub fn channel(&self) -> Option<AisChannel> {
        self.channel
    }

    /// Armored payload text
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Padding bits appended to the last payload character
    pub fn fill_bits(&self) -> u32 {
        self.fill_bits
    }

    /// Set the sequential message id (0-9)
    pub fn set_sequence_id(&mut self, id: Option<u8>) -> Result<()> {
        if let Some(id) = id.filter(|id| *id > Self::MAX_SEQUENCE_ID) {
            return Err(Error::invalid_argument(format!(
                "Sequence id {} out of range [0, {}]",
                id,
                Self::MAX_SEQUENCE_ID
            )));
        }
        self.sequence_id = id;
        Ok(())
    }

    /// Set the radio channel
    pub fn set_channel(&mut self, channel: Option<AisChannel>) {
        self.channel = channel;
    }

    fn parse(tag: &str, fields: &[&str]) -> Result<Self> {
        expect_count(tag, fields, 6)?;

        let mut fragment = AisFragment::new(
            read_required(fields[0], "fragment count")?,
            read_required(fields[1], "fragment number")?,
            fields[4],
            read_required(fields[5], "fill bits")?,
        )?;
        fragment.set_sequence_id(read(fields[2])?)?;
        fragment.set_channel(read(fields[3])?);
        Ok(fragment)
    }

    fn get_data(&self) -> Vec<String> {
        vec![
            self.fragment_count.to_string(),
            self.fragment_number.to_string(),
            format_opt(&self.sequence_id),
            format_opt(&self.channel),
            self.payload.clone(),
            self.fill_bits.to_string(),
        ]
    }
}

/// AIS message received from another station
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vdm {
    talker: Talker,
    fragment: AisFragment,
}

impl Vdm {
    /// Create a VDM sentence with the `AI` talker
    pub fn new(fragment: AisFragment) -> Self {
        Vdm {
            talker: Talker::ais(),
            fragment,
        }
    }

    pub fn fragment(&self) -> &AisFragment {
        &self.fragment
    }

    pub fn fragment_mut(&mut self) -> &mut AisFragment {
        &mut self.fragment
    }
}

impl Default for Vdm {
    fn default() -> Self {
        Vdm::new(AisFragment::default())
    }
}

impl NmeaSentence for Vdm {
    const ID: SentenceId = SentenceId::Vdm;
    const FIELD_COUNT: usize = 6;

    fn parse(talker: Talker, fields: &[&str]) -> Result<Self> {
        Ok(Vdm {
            talker,
            fragment: AisFragment::parse(Self::ID.tag(), fields)?,
        })
    }

    fn get_data(&self) -> Vec<String> {
        self.fragment.get_data()
    }

    fn talker(&self) -> &Talker {
        &self.talker
    }

    fn set_talker(&mut self, talker: Talker) {
        self.talker = talker;
    }
}

/// AIS report of the own vessel
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vdo {
    talker: Talker,
    fragment: AisFragment,
}

impl Vdo {
    /// Create a VDO sentence with the `AI` talker
    pub fn new(fragment: AisFragment) -> Self {
        Vdo {
            talker: Talker::ais(),
            fragment,
        }
    }

    pub fn fragment(&self) -> &AisFragment {
        &self.fragment
    }

    pub fn fragment_mut(&mut self) -> &mut AisFragment {
        &mut self.fragment
    }
}

impl Default for Vdo {
    fn default() -> Self {
        Vdo::new(AisFragment::default())
    }
}

impl NmeaSentence for Vdo {
    const ID: SentenceId = SentenceId::Vdo;
    const FIELD_COUNT: usize = 6;

    fn parse(talker: Talker, fields: &[&str]) -> Result<Self> {
        Ok(Vdo {
            talker,
            fragment: AisFragment::parse(Self::ID.tag(), fields)?,
        })
    }

    fn get_data(&self) -> Vec<String> {
        self.fragment.get_data()
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
    fn test_parse_vdm() -> Result<()> {
        let vdm = Vdm::parse(Talker::ais(), &["2", "1", "3", "B", "55?MbV02;H", "0"])?;
        let fragment = vdm.fragment();
        assert_eq!(fragment.fragment_count(), 2);
        assert_eq!(fragment.fragment_number(), 1);
        assert_eq!(fragment.sequence_id(), Some(3));
        assert_eq!(fragment.channel(), Some(AisChannel::B));
        assert_eq!(fragment.payload(), "55?MbV02;H");
        assert_eq!(vdm.get_data(), vec!["2", "1", "3", "B", "55?MbV02;H", "0"]);
        Ok(())
    }

    #[test]
    fn test_parse_vdo_numeric_channel() -> Result<()> {
        let vdo = Vdo::parse(Talker::ais(), &["1", "1", "", "1", "B", "2"])?;
        assert_eq!(vdo.fragment().channel(), Some(AisChannel::A));
        assert_eq!(vdo.fragment().sequence_id(), None);
        assert_eq!(vdo.fragment().fill_bits(), 2);
        Ok(())
    }

    #[test]
    fn test_invalid_fragments() {
        assert!(AisFragment::new(0, 1, "", 0).is_err());
        assert!(AisFragment::new(2, 3, "", 0).is_err());
        assert!(AisFragment::new(1, 1, "1", 6).is_err());
        assert!(AisFragment::new(1, 1, "1 x", 0).is_err());
        assert!(AisFragment::default().set_sequence_id(Some(10)).is_err());
        assert!(Vdm::parse(Talker::ais(), &["1", "1", "", "A", "1"]).is_err());
    }
}
