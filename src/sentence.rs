//! NMEA-0183 sentences, framing and tag-keyed dispatch
//!
//! A sentence on the wire looks like `$TTTAG,f1,f2,...,fn*CS`. The address
//! field carries a two-character talker followed by the sentence tag, the
//! checksum is the XOR of every byte between the start delimiter and `*`.
//!
//! Parsing a line verifies the framing, looks the tag up in a static
//! registry and hands the remaining field tokens to the matching sentence
//! type, which validates their count and converts each one.

mod ais;
mod hdt;
mod hfb;
mod zfo;
mod ztg;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::core::{AisChannel, Talker};
use crate::error::{Error, Result};
use crate::message::{self, Message};
use crate::wire;

pub use ais::{AisFragment, Vdm, Vdo};
pub use hdt::Hdt;
pub use hfb::Hfb;
pub use zfo::Zfo;
pub use ztg::Ztg;

/// Identifier of a supported sentence type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SentenceId {
    /// Heading, true
    Hdt,
    /// Trawl headrope to footrope and bottom
    Hfb,
    /// AIS VHF data-link message
    Vdm,
    /// AIS VHF data-link own-vessel report
    Vdo,
    /// UTC and time from origin waypoint
    Zfo,
    /// UTC and time to destination waypoint
    Ztg,
}

impl SentenceId {
    /// All supported sentence types
    pub const ALL: [SentenceId; 6] = [
        SentenceId::Hdt,
        SentenceId::Hfb,
        SentenceId::Vdm,
        SentenceId::Vdo,
        SentenceId::Zfo,
        SentenceId::Ztg,
    ];

    /// Tag as it appears in the address field
    pub fn tag(&self) -> &'static str {
        match self {
            SentenceId::Hdt => "HDT",
            SentenceId::Hfb => "HFB",
            SentenceId::Vdm => "VDM",
            SentenceId::Vdo => "VDO",
            SentenceId::Zfo => "ZFO",
            SentenceId::Ztg => "ZTG",
        }
    }

    /// Start delimiter used on the wire, `!` for encapsulated sentences
    pub fn start_delimiter(&self) -> char {
        match self {
            SentenceId::Vdm | SentenceId::Vdo => wire::START_ENCAPSULATED,
            _ => wire::START,
        }
    }
}

impl fmt::Display for SentenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for SentenceId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SentenceId::ALL
            .into_iter()
            .find(|id| id.tag() == s)
            .ok_or_else(|| Error::not_supported(format!("NMEA sentence tag {:?}", s)))
    }
}

/// Common interface of all sentence types
pub trait NmeaSentence: Sized {
    /// Sentence type
    const ID: SentenceId;

    /// Number of field tokens following the address field
    const FIELD_COUNT: usize;

    /// Build the sentence from its talker and field tokens
    ///
    /// Fails with [`Error::InvalidArgument`] unless exactly
    /// [`Self::FIELD_COUNT`] tokens are given.
    fn parse(talker: Talker, fields: &[&str]) -> Result<Self>;

    /// Field tokens in wire order, absent values as empty strings
    fn get_data(&self) -> Vec<String>;

    /// Talker of the sentence
    fn talker(&self) -> &Talker;

    /// Replace the talker
    fn set_talker(&mut self, talker: Talker);
}

/// Any supported sentence
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sentence {
    Hdt(Hdt),
    Hfb(Hfb),
    Vdm(Vdm),
    Vdo(Vdo),
    Zfo(Zfo),
    Ztg(Ztg),
}

impl Sentence {
    /// Sentence type
    pub fn id(&self) -> SentenceId {
        match self {
            Sentence::Hdt(_) => SentenceId::Hdt,
            Sentence::Hfb(_) => SentenceId::Hfb,
            Sentence::Vdm(_) => SentenceId::Vdm,
            Sentence::Vdo(_) => SentenceId::Vdo,
            Sentence::Zfo(_) => SentenceId::Zfo,
            Sentence::Ztg(_) => SentenceId::Ztg,
        }
    }

    /// Talker of the sentence
    pub fn talker(&self) -> &Talker {
        match self {
            Sentence::Hdt(s) => s.talker(),
            Sentence::Hfb(s) => s.talker(),
            Sentence::Vdm(s) => s.talker(),
            Sentence::Vdo(s) => s.talker(),
            Sentence::Zfo(s) => s.talker(),
            Sentence::Ztg(s) => s.talker(),
        }
    }

    /// Field tokens in wire order
    pub fn get_data(&self) -> Vec<String> {
        match self {
            Sentence::Hdt(s) => s.get_data(),
            Sentence::Hfb(s) => s.get_data(),
            Sentence::Vdm(s) => s.get_data(),
            Sentence::Vdo(s) => s.get_data(),
            Sentence::Zfo(s) => s.get_data(),
            Sentence::Ztg(s) => s.get_data(),
        }
    }

    /// AIS payload fragment carried by VDM and VDO sentences
    pub fn ais_fragment(&self) -> Option<&AisFragment> {
        match self {
            Sentence::Vdm(s) => Some(s.fragment()),
            Sentence::Vdo(s) => Some(s.fragment()),
            _ => None,
        }
    }

    /// Address and fields as covered by the checksum, e.g. `GPHDT,123.4,T`
    pub fn body(&self) -> String {
        let mut body = format!("{}{}", self.talker(), self.id().tag());
        for field in self.get_data() {
            body.push(wire::FIELD_DELIMITER);
            body.push_str(&field);
        }
        body
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self.body();
        write!(
            f,
            "{}{}{}{}",
            self.id().start_delimiter(),
            body,
            wire::CHECKSUM_DELIMITER,
            checksum_to_string(checksum(&body))
        )
    }
}

impl From<Hdt> for Sentence {
    fn from(s: Hdt) -> Self {
        Sentence::Hdt(s)
    }
}

impl From<Hfb> for Sentence {
    fn from(s: Hfb) -> Self {
        Sentence::Hfb(s)
    }
}

impl From<Vdm> for Sentence {
    fn from(s: Vdm) -> Self {
        Sentence::Vdm(s)
    }
}

impl From<Vdo> for Sentence {
    fn from(s: Vdo) -> Self {
        Sentence::Vdo(s)
    }
}

impl From<Zfo> for Sentence {
    fn from(s: Zfo) -> Self {
        Sentence::Zfo(s)
    }
}

impl From<Ztg> for Sentence {
    fn from(s: Ztg) -> Self {
        Sentence::Ztg(s)
    }
}

/// Parser entry stored in the tag registry
type ParseFn = fn(Talker, &[&str]) -> Result<Sentence>;

fn parse_as<T: NmeaSentence + Into<Sentence>>(talker: Talker, fields: &[&str]) -> Result<Sentence> {
    T::parse(talker, fields).map(Into::into)
}

/// Registry mapping sentence tags to their parsers, built on first use
static SENTENCE_REGISTRY: LazyLock<HashMap<&'static str, ParseFn>> = LazyLock::new(|| {
    let mut registry: HashMap<&'static str, ParseFn> = HashMap::new();
    registry.insert(SentenceId::Hdt.tag(), parse_as::<Hdt>);
    registry.insert(SentenceId::Hfb.tag(), parse_as::<Hfb>);
    registry.insert(SentenceId::Vdm.tag(), parse_as::<Vdm>);
    registry.insert(SentenceId::Vdo.tag(), parse_as::<Vdo>);
    registry.insert(SentenceId::Zfo.tag(), parse_as::<Zfo>);
    registry.insert(SentenceId::Ztg.tag(), parse_as::<Ztg>);
    registry
});

/// Build a sentence from its talker, tag and field tokens
///
/// Unknown tags fail with [`Error::NotSupported`], a wrong number of fields
/// with [`Error::InvalidArgument`].
pub fn parse(talker: &str, tag: &str, fields: &[&str]) -> Result<Sentence> {
    let Some(parse) = SENTENCE_REGISTRY.get(tag) else {
        tracing::debug!(tag, "unsupported NMEA sentence");
        return Err(Error::not_supported(format!("NMEA sentence tag {:?}", tag)));
    };

    let sentence = parse(Talker::new(talker)?, fields)?;
    tracing::trace!(talker, tag, "parsed NMEA sentence");
    Ok(sentence)
}

/// Checksum handling when parsing raw lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChecksumMode {
    /// Require a checksum and reject mismatches
    #[default]
    Check,
    /// Accept a missing or wrong checksum
    Ignore,
}

/// XOR of all bytes of a sentence body (between the start delimiter and `*`)
pub fn checksum(body: &str) -> u8 {
    body.bytes().fold(0, |acc, b| acc ^ b)
}

/// Render a checksum as two upper case hex digits
pub fn checksum_to_string(sum: u8) -> String {
    format!("{:02X}", sum)
}

fn parse_checksum(token: &str) -> Result<u8> {
    if token.len() != 2 {
        return Err(Error::invalid_argument(format!(
            "Invalid checksum field: {:?}",
            token
        )));
    }
    u8::from_str_radix(token, 16)
        .map_err(|_| Error::invalid_argument(format!("Invalid checksum field: {:?}", token)))
}

/// Parse a raw line, verifying its checksum
pub fn make_sentence(line: &str) -> Result<Sentence> {
    make_sentence_with(line, ChecksumMode::Check)
}

/// Parse a raw line with the given checksum handling
///
/// A trailing line terminator is accepted. The line must start with `$` or
/// `!` and fit into [`wire::MAX_LENGTH`] characters including the terminator.
pub fn make_sentence_with(line: &str, mode: ChecksumMode) -> Result<Sentence> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.len() + wire::END.len() > wire::MAX_LENGTH {
        return Err(Error::invalid_argument(format!(
            "Sentence exceeds {} characters",
            wire::MAX_LENGTH
        )));
    }

    let Some(content) = line
        .strip_prefix(wire::START)
        .or_else(|| line.strip_prefix(wire::START_ENCAPSULATED))
    else {
        return Err(Error::invalid_argument(format!(
            "Missing start delimiter: {:?}",
            line
        )));
    };

    let body = match content.rsplit_once(wire::CHECKSUM_DELIMITER) {
        Some((body, token)) => {
            let expected = parse_checksum(token)?;
            let computed = checksum(body);
            if mode == ChecksumMode::Check && expected != computed {
                tracing::debug!(expected, computed, "NMEA checksum mismatch");
                return Err(Error::checksum(expected, computed));
            }
            body
        }
        None if mode == ChecksumMode::Check => {
            return Err(Error::invalid_argument(format!("Missing checksum: {:?}", line)));
        }
        None => content,
    };

    let mut tokens = body.split(wire::FIELD_DELIMITER);
    let address = tokens.next().unwrap_or_default();
    let (Some(talker), Some(tag)) = (address.get(..Talker::LEN), address.get(Talker::LEN..))
    else {
        return Err(Error::invalid_argument(format!(
            "Invalid address field: {:?}",
            address
        )));
    };
    if tag.is_empty() {
        return Err(Error::invalid_argument(format!(
            "Invalid address field: {:?}",
            address
        )));
    }

    let fields: Vec<&str> = tokens.collect();
    parse(talker, tag, &fields)
}

/// Gather the payload fragments of a multi-sentence AIS message
///
/// The sentences must all be VDM or VDO, announce the same fragment count
/// and sequence id, and appear in fragment order.
pub fn collect_payload(sentences: &[Sentence]) -> Result<Vec<(String, u32)>> {
    if sentences.is_empty() {
        return Err(Error::invalid_argument("No AIS sentences"));
    }

    let mut first: Option<&AisFragment> = None;
    let mut payload = Vec::with_capacity(sentences.len());
    for (i, sentence) in sentences.iter().enumerate() {
        let Some(fragment) = sentence.ais_fragment() else {
            return Err(Error::invalid_argument(format!(
                "{} does not carry an AIS payload",
                sentence.id()
            )));
        };
        let head = *first.get_or_insert(fragment);

        if fragment.fragment_count() as usize != sentences.len()
            || fragment.fragment_count() != head.fragment_count()
        {
            return Err(Error::invalid_argument(format!(
                "Fragment count {} does not match {} sentences",
                fragment.fragment_count(),
                sentences.len()
            )));
        }
        if fragment.fragment_number() as usize != i + 1 {
            return Err(Error::invalid_argument(format!(
                "Fragment {} found at position {}",
                fragment.fragment_number(),
                i + 1
            )));
        }
        if fragment.sequence_id() != head.sequence_id() {
            return Err(Error::invalid_argument("Sequence id differs between fragments"));
        }

        payload.push((fragment.payload().to_string(), fragment.fill_bits()));
    }
    Ok(payload)
}

/// Build the VDM sentences carrying an AIS message
pub fn make_vdms(
    message: &Message,
    sequence_id: Option<u8>,
    channel: Option<AisChannel>,
) -> Result<Vec<Sentence>> {
    let chunks = message::encode_message(message)?;
    let count = u8::try_from(chunks.len())
        .ok()
        .filter(|n| *n <= AisFragment::MAX_FRAGMENTS)
        .ok_or_else(|| {
            Error::invalid_argument(format!("Message needs {} fragments", chunks.len()))
        })?;

    chunks
        .into_iter()
        .zip(1..)
        .map(|((payload, fill_bits), number)| -> Result<Sentence> {
            let mut fragment = AisFragment::new(count, number, &payload, fill_bits)?;
            fragment.set_sequence_id(sequence_id)?;
            fragment.set_channel(channel);
            Ok(Vdm::new(fragment).into())
        })
        .collect()
}
