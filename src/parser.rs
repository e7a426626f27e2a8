//! High-level parser turning raw lines into sentences and AIS messages

use crate::core::AisChannel;
use crate::error::Result;
use crate::message::{self, Message};
use crate::sentence::{self, ChecksumMode, Sentence};
use crate::wire;

/// NMEA-0183 line parser
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parser {
    /// Checksum handling for incoming lines
    pub checksum: ChecksumMode,
}

impl Parser {
    /// Create a new parser
    pub fn new(checksum: ChecksumMode) -> Self {
        Parser { checksum }
    }

    /// Parse a single line into a sentence
    pub fn parse_sentence(&self, line: &str) -> Result<Sentence> {
        sentence::make_sentence_with(line, self.checksum)
    }

    /// Parse the VDM/VDO lines of one AIS message and decode the message
    ///
    /// Lines must be given in fragment order.
    pub fn parse_ais<S: AsRef<str>>(&self, lines: &[S]) -> Result<Message> {
        let sentences = lines
            .iter()
            .map(|line| self.parse_sentence(line.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        let fragments = sentence::collect_payload(&sentences)?;
        message::make_message(&fragments)
    }

    /// Render a sentence as a line including the terminator
    pub fn encode_sentence(&self, sentence: &Sentence) -> String {
        format!("{}{}", sentence, wire::END)
    }

    /// Render an AIS message as VDM lines including terminators
    pub fn encode_ais(
        &self,
        message: &Message,
        sequence_id: Option<u8>,
        channel: Option<AisChannel>,
    ) -> Result<Vec<String>> {
        let sentences = sentence::make_vdms(message, sequence_id, channel)?;
        Ok(sentences
            .iter()
            .map(|s| self.encode_sentence(s))
            .collect())
    }
}

/// Builder for configuring a [`Parser`]
pub struct ParserBuilder {
    checksum: ChecksumMode,
}

impl ParserBuilder {
    /// Create a new parser builder
    pub fn new() -> Self {
        ParserBuilder {
            checksum: ChecksumMode::Check,
        }
    }

    /// Set the checksum handling
    pub fn checksum(mut self, checksum: ChecksumMode) -> Self {
        self.checksum = checksum;
        self
    }

    /// Build the parser
    pub fn build(self) -> Parser {
        Parser::new(self.checksum)
    }
}

impl Default for ParserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mmsi;
    use crate::message::{AidToNavigationReport, AidType, MessageId};
    use crate::sentence::SentenceId;

    #[test]
    fn test_parser_creation() {
        let parser = Parser::default();
        assert_eq!(parser.checksum, ChecksumMode::Check);
    }

    #[test]
    fn test_parser_builder() {
        let parser = ParserBuilder::new().checksum(ChecksumMode::Ignore).build();
        assert_eq!(parser.checksum, ChecksumMode::Ignore);
    }

    #[test]
    fn test_parse_sentence() -> Result<()> {
        let parser = Parser::default();
        let sentence = parser.parse_sentence("$IIZFO,123519.00,,*5C\r\n")?;
        assert_eq!(sentence.id(), SentenceId::Zfo);
        assert_eq!(parser.encode_sentence(&sentence), "$IIZFO,123519.00,,*5C\r\n");

        assert!(parser.parse_sentence("$IIZFO,123519.00,,*00").is_err());
        let lenient = ParserBuilder::new().checksum(ChecksumMode::Ignore).build();
        assert!(lenient.parse_sentence("$IIZFO,123519.00,,*00").is_ok());
        Ok(())
    }

    #[test]
    fn test_ais_roundtrip() -> Result<()> {
        let mut report = AidToNavigationReport::default();
        report.set_mmsi(Mmsi::new(992_351_000)?);
        report.set_aid_type(AidType::SafeWater);
        report.set_name("OUTER HARBOUR BUOY");
        report.set_name_extension("EXTENSION NAME");
        let message = Message::from(report);

        let parser = Parser::default();
        let lines = parser.encode_ais(&message, None, Some(AisChannel::B))?;
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("!AIVDM,1,1,,B,") && lines[0].ends_with("\r\n"));

        let decoded = parser.parse_ais(&lines)?;
        assert_eq!(decoded, message);
        Ok(())
    }

    #[test]
    fn test_parse_ais_multi_sentence() -> Result<()> {
        let parser = Parser::default();
        let message = parser.parse_ais(&[
            "!AIVDM,2,1,3,A,15RTgt0PAso;90,0*08",
            "!AIVDM,2,2,3,A,TKcjM8h6g208CQ,0*67",
        ])?;
        assert_eq!(message.id(), MessageId::PositionReportClassA);
        assert_eq!(message.mmsi().value(), 371_798_000);

        assert!(parser
            .parse_ais(&[
                "!AIVDM,2,2,3,A,TKcjM8h6g208CQ,0*67",
                "!AIVDM,2,1,3,A,15RTgt0PAso;90,0*08",
            ])
            .is_err());
        Ok(())
    }
}
