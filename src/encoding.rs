//! Six-bit alphabets used by AIS
//!
//! Two distinct tables are involved. The *armor* alphabet maps each 6-bit
//! group of a binary payload to a printable character so the payload can be
//! carried inside an NMEA sentence. The *text* alphabet maps 6-bit codes
//! embedded in the payload to the characters of names and call signs.

use crate::error::{Error, Result};

/// Payload armoring for AIS data carried in VDM/VDO sentences
///
/// Valid characters are `0x30..=0x57` and `0x60..=0x77`, mapping to the
/// values `0..=39` and `40..=63` respectively.
pub struct Armor;

impl Armor {
    /// Decode a single armored character into its 6-bit value
    pub fn decode_char(c: char) -> Result<u8> {
        match c {
            '0'..='W' => Ok(c as u8 - 0x30),
            '`'..='w' => Ok(c as u8 - 0x38),
            _ => Err(Error::invalid_argument(format!(
                "Invalid armored payload character: {:?}",
                c
            ))),
        }
    }

    /// Encode the low six bits of a value as an armored character
    pub fn encode_value(value: u8) -> char {
        let value = value & 0x3F;
        if value < 40 {
            (value + 0x30) as char
        } else {
            (value + 0x38) as char
        }
    }
}

/// AIS 6-bit text alphabet
///
/// Codes `0..=31` map to `@A..Z[\]^_`, codes `32..=63` map to the
/// printable range from space to `?`.
pub struct SixBitText;

impl SixBitText {
    /// Padding / "no character" code
    pub const PAD: char = '@';

    /// Decode a 6-bit code into a character
    pub fn decode_value(value: u8) -> char {
        let value = value & 0x3F;
        if value < 32 {
            (value + 0x40) as char
        } else {
            value as char
        }
    }

    /// Encode a character into its 6-bit code
    ///
    /// Lower case letters are folded to upper case; anything else outside the
    /// alphabet is rejected.
    pub fn encode_char(c: char) -> Result<u8> {
        match c.to_ascii_uppercase() {
            c @ '@'..='_' => Ok(c as u8 - 0x40),
            c @ ' '..='?' => Ok(c as u8),
            _ => Err(Error::invalid_argument(format!(
                "Character {:?} not representable in AIS 6-bit text",
                c
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_armor_boundaries() -> Result<()> {
        assert_eq!(Armor::decode_char('0')?, 0);
        assert_eq!(Armor::decode_char('W')?, 39);
        assert_eq!(Armor::decode_char('`')?, 40);
        assert_eq!(Armor::decode_char('w')?, 63);
        Ok(())
    }

    #[test]
    fn test_armor_gap_rejected() {
        assert!(Armor::decode_char('X').is_err());
        assert!(Armor::decode_char('_').is_err());
        assert!(Armor::decode_char('x').is_err());
        assert!(Armor::decode_char(',').is_err());
    }

    #[test]
    fn test_armor_all_values() -> Result<()> {
        for value in 0..64u8 {
            assert_eq!(Armor::decode_char(Armor::encode_value(value))?, value);
        }
        Ok(())
    }

    #[test]
    fn test_text_alphabet() -> Result<()> {
        assert_eq!(SixBitText::decode_value(0), '@');
        assert_eq!(SixBitText::decode_value(1), 'A');
        assert_eq!(SixBitText::decode_value(32), ' ');
        assert_eq!(SixBitText::decode_value(48), '0');
        assert_eq!(SixBitText::encode_char('t')?, 20);
        assert_eq!(SixBitText::encode_char('9')?, 57);
        assert!(SixBitText::encode_char('~').is_err());
        Ok(())
    }
}
