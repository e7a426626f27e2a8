//! # Marine Codec
//!
//! Encoding and decoding of NMEA-0183 sentences and the AIS binary messages
//! they carry.
//!
//! NMEA-0183 is the line-oriented text protocol spoken by marine electronics.
//! AIS (Automatic Identification System) messages are bit-packed binaries
//! armored into printable characters and transported inside `!AIVDM` and
//! `!AIVDO` sentences. This library provides:
//!
//! - Sentence framing with checksum calculation and verification
//! - Typed sentences with optional fields (HDT, HFB, VDM, VDO, ZFO, ZTG)
//! - A bit vector with field access at arbitrary bit offsets
//! - AIS messages 1, 2, 3, 18 and 21 with multi-fragment reassembly
//! - Descriptive names for identifiers and enumerated codes
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization support
//!
//! ## Example
//!
//! ```
//! use marine_codec::{make_sentence, Sentence};
//!
//! let sentence = make_sentence("$GPHDT,123.4,T*31")?;
//! if let Sentence::Hdt(hdt) = &sentence {
//!     assert_eq!(hdt.heading(), Some(123.4));
//! }
//! assert_eq!(sentence.to_string(), "$GPHDT,123.4,T*31");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Decoding an AIS message:
//!
//! ```
//! use marine_codec::ParserBuilder;
//!
//! let parser = ParserBuilder::new().build();
//! let message = parser.parse_ais(&["!AIVDM,1,1,,A,15RTgt0PAso;90TKcjM8h6g208CQ,0*4A"])?;
//! assert_eq!(message.mmsi().value(), 371_798_000);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bits;
pub mod core;
pub mod encoding;
pub mod error;
pub mod fields;
pub mod geo;
pub mod message;
pub mod name;
pub mod parser;
pub mod sentence;
pub mod time;

pub use bits::{BitWriter, Bits};
pub use self::core::{AisChannel, DistanceUnit, Mmsi, Reference, Talker, Waypoint};
pub use error::{Error, Result};
pub use message::{make_message, AisMessage, Message, MessageId};
pub use name::Named;
pub use parser::{Parser, ParserBuilder};
pub use sentence::{
    checksum, make_sentence, make_sentence_with, ChecksumMode, NmeaSentence, Sentence, SentenceId,
};

/// NMEA-0183 wire format constants
pub mod wire {
    /// Maximum sentence length in characters, including the line terminator
    pub const MAX_LENGTH: usize = 82;

    /// Start delimiter of parametric sentences
    pub const START: char = '$';

    /// Start delimiter of encapsulated sentences (VDM, VDO)
    pub const START_ENCAPSULATED: char = '!';

    /// Delimiter between the sentence body and its checksum
    pub const CHECKSUM_DELIMITER: char = '*';

    /// Field separator
    pub const FIELD_DELIMITER: char = ',';

    /// Line terminator
    pub const END: &str = "\r\n";

    /// Maximum armored payload characters per VDM/VDO fragment
    pub const MAX_PAYLOAD_CHARS: usize = 60;
}
