//! Bit vector used to read and build AIS binary payloads
//!
//! Bits are stored most significant bit first, which matches the AIS wire
//! convention for every field. A [`Bits`] value is read-only; payloads are
//! built with a [`BitWriter`] that only ever appends and is frozen into a
//! [`Bits`] once the last field has been written.

use crate::encoding::{Armor, SixBitText};
use crate::error::{Error, Result};

/// Maximum width of a single numeric field
pub const MAX_FIELD_WIDTH: usize = 32;

/// Immutable sequence of bits with a fixed length
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bits {
    data: Vec<u8>,
    len: usize,
}

impl Bits {
    /// Decode an armored payload, dropping `fill_bits` trailing pad bits
    ///
    /// The resulting length is `6 * payload.len() - fill_bits`.
    pub fn from_armored_text(payload: &str, fill_bits: u32) -> Result<Self> {
        if fill_bits > 5 {
            return Err(Error::invalid_argument(format!(
                "Fill bits {} out of range [0, 5]",
                fill_bits
            )));
        }

        let mut writer = BitWriter::with_capacity(payload.len() * 6);
        for c in payload.chars() {
            writer.push_raw(Armor::decode_char(c)? as u64, 6);
        }

        let mut bits = writer.finish();
        let fill_bits = fill_bits as usize;
        if fill_bits > bits.len {
            return Err(Error::invalid_argument(format!(
                "Fill bits {} exceed payload of {} bits",
                fill_bits, bits.len
            )));
        }
        bits.truncate(bits.len - fill_bits);
        Ok(bits)
    }

    /// Encode the bits as armored text
    ///
    /// Returns the payload together with the number of fill bits appended to
    /// reach the next 6-bit boundary.
    pub fn to_armored_text(&self) -> (String, u32) {
        let fill_bits = (6 - self.len % 6) % 6;
        let mut payload = String::with_capacity((self.len + fill_bits) / 6);

        let mut offset = 0;
        while offset < self.len {
            let width = (self.len - offset).min(6);
            let value = (self.read_raw(offset, width) << (6 - width)) as u8;
            payload.push(Armor::encode_value(value));
            offset += width;
        }

        (payload, fill_bits as u32)
    }

    /// Total number of bits
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether the vector holds no bits at all
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read a single bit
    pub fn get_bool(&self, offset: usize) -> Result<bool> {
        self.check_range(offset, 1)?;
        Ok(self.bit(offset))
    }

    /// Read an unsigned field of `width` bits starting at `offset`
    pub fn get_unsigned(&self, offset: usize, width: usize) -> Result<u32> {
        check_width(width)?;
        self.check_range(offset, width)?;
        Ok(self.read_raw(offset, width) as u32)
    }

    /// Read a two's complement signed field of `width` bits starting at `offset`
    pub fn get_signed(&self, offset: usize, width: usize) -> Result<i32> {
        check_width(width)?;
        self.check_range(offset, width)?;
        let shift = 64 - width;
        Ok(((self.read_raw(offset, width) << shift) as i64 >> shift) as i32)
    }

    /// Read a 6-bit text field, trimming trailing padding
    ///
    /// `width` must be a multiple of six.
    pub fn get_text(&self, offset: usize, width: usize) -> Result<String> {
        if width % 6 != 0 {
            return Err(Error::invalid_argument(format!(
                "Text field width {} is not a multiple of 6",
                width
            )));
        }
        self.check_range(offset, width)?;

        let text: String = (offset..offset + width)
            .step_by(6)
            .map(|pos| SixBitText::decode_value(self.read_raw(pos, 6) as u8))
            .collect();
        Ok(text.trim_end_matches(SixBitText::PAD).to_string())
    }

    fn check_range(&self, offset: usize, width: usize) -> Result<()> {
        match offset.checked_add(width) {
            Some(end) if end <= self.len => Ok(()),
            _ => Err(Error::out_of_range(format!(
                "Access to bits [{}, {}+{}) exceeds length {}",
                offset, offset, width, self.len
            ))),
        }
    }

    fn bit(&self, pos: usize) -> bool {
        (self.data[pos / 8] >> (7 - pos % 8)) & 1 != 0
    }

    fn read_raw(&self, offset: usize, width: usize) -> u64 {
        (offset..offset + width).fold(0u64, |acc, pos| (acc << 1) | self.bit(pos) as u64)
    }

    fn push_bit(&mut self, bit: bool) {
        if self.len % 8 == 0 {
            self.data.push(0);
        }
        if bit {
            self.data[self.len / 8] |= 0x80 >> (self.len % 8);
        }
        self.len += 1;
    }

    fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        self.len = len;
        self.data.truncate(len.div_ceil(8));
        if len % 8 != 0 {
            if let Some(last) = self.data.last_mut() {
                *last &= !(0xFFu8 >> (len % 8));
            }
        }
    }
}

fn check_width(width: usize) -> Result<()> {
    if width == 0 || width > MAX_FIELD_WIDTH {
        return Err(Error::invalid_argument(format!(
            "Field width {} out of range [1, {}]",
            width, MAX_FIELD_WIDTH
        )));
    }
    Ok(())
}

/// Append-only builder for [`Bits`]
///
/// Fields must be appended in schema order; there is no random access.
#[derive(Debug, Default)]
pub struct BitWriter {
    bits: Bits,
}

impl BitWriter {
    /// Create an empty writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty writer with room for `capacity` bits
    pub fn with_capacity(capacity: usize) -> Self {
        BitWriter {
            bits: Bits {
                data: Vec::with_capacity(capacity.div_ceil(8)),
                len: 0,
            },
        }
    }

    /// Number of bits written so far
    pub fn len(&self) -> usize {
        self.bits.len
    }

    /// Check whether nothing has been written yet
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Append a single bit
    pub fn append_bool(&mut self, value: bool) {
        self.bits.push_bit(value);
    }

    /// Append an unsigned value as a `width`-bit field
    pub fn append_unsigned(&mut self, value: u32, width: usize) -> Result<()> {
        check_width(width)?;
        if width < 32 && value >> width != 0 {
            return Err(Error::invalid_argument(format!(
                "Value {} does not fit in {} bits",
                value, width
            )));
        }
        self.push_raw(value as u64, width);
        Ok(())
    }

    /// Append a signed value as a `width`-bit two's complement field
    pub fn append_signed(&mut self, value: i32, width: usize) -> Result<()> {
        check_width(width)?;
        let min = -(1i64 << (width - 1));
        let max = (1i64 << (width - 1)) - 1;
        if (value as i64) < min || (value as i64) > max {
            return Err(Error::invalid_argument(format!(
                "Value {} does not fit in {} signed bits",
                value, width
            )));
        }
        self.push_raw(value as u32 as u64, width);
        Ok(())
    }

    /// Append a 6-bit text field of exactly `width` bits, padding with `@`
    pub fn append_text(&mut self, text: &str, width: usize) -> Result<()> {
        if width % 6 != 0 {
            return Err(Error::invalid_argument(format!(
                "Text field width {} is not a multiple of 6",
                width
            )));
        }
        let capacity = width / 6;
        let count = text.chars().count();
        if count > capacity {
            return Err(Error::invalid_argument(format!(
                "Text {:?} exceeds {} characters",
                text, capacity
            )));
        }

        let codes = text
            .chars()
            .map(SixBitText::encode_char)
            .collect::<Result<Vec<u8>>>()?;
        for code in codes {
            self.push_raw(code as u64, 6);
        }
        for _ in count..capacity {
            self.push_raw(0, 6);
        }
        Ok(())
    }

    /// Freeze the writer into an immutable bit vector
    pub fn finish(self) -> Bits {
        self.bits
    }

    pub(crate) fn push_raw(&mut self, value: u64, width: usize) {
        for shift in (0..width).rev() {
            self.bits.push_bit((value >> shift) & 1 != 0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsigned_roundtrip_all_widths() -> Result<()> {
        for width in 1..=32usize {
            let max = if width == 32 { u32::MAX } else { (1u32 << width) - 1 };
            let mut writer = BitWriter::new();
            writer.append_bool(true);
            writer.append_unsigned(0, width)?;
            writer.append_unsigned(max, width)?;
            writer.append_unsigned(max / 3, width)?;
            let bits = writer.finish();

            assert_eq!(bits.len(), 1 + 3 * width);
            assert_eq!(bits.get_unsigned(1, width)?, 0);
            assert_eq!(bits.get_unsigned(1 + width, width)?, max);
            assert_eq!(bits.get_unsigned(1 + 2 * width, width)?, max / 3);
        }
        Ok(())
    }

    #[test]
    fn test_signed_roundtrip() -> Result<()> {
        for width in [2usize, 8, 27, 28, 32] {
            let min = (-(1i64 << (width - 1))) as i32;
            let max = ((1i64 << (width - 1)) - 1) as i32;
            let mut writer = BitWriter::new();
            for value in [min, -1, 0, 1, max] {
                writer.append_signed(value, width)?;
            }
            let bits = writer.finish();
            for (i, value) in [min, -1, 0, 1, max].into_iter().enumerate() {
                assert_eq!(bits.get_signed(i * width, width)?, value);
            }
        }
        Ok(())
    }

    #[test]
    fn test_sentinel_roundtrip() -> Result<()> {
        let mut writer = BitWriter::new();
        writer.append_signed(108_600_000, 28)?;
        writer.append_signed(54_600_000, 27)?;
        writer.append_unsigned(0x3F, 6)?;
        let bits = writer.finish();
        assert_eq!(bits.get_signed(0, 28)?, 108_600_000);
        assert_eq!(bits.get_signed(28, 27)?, 54_600_000);
        assert_eq!(bits.get_unsigned(55, 6)?, 63);
        Ok(())
    }

    #[test]
    fn test_value_too_wide() {
        let mut writer = BitWriter::new();
        assert!(writer.append_unsigned(4, 2).is_err());
        assert!(writer.append_signed(2, 2).is_err());
        assert!(writer.append_signed(-3, 2).is_err());
        assert!(writer.append_unsigned(1, 0).is_err());
        assert!(writer.append_unsigned(1, 33).is_err());
        assert!(writer.is_empty());
    }

    #[test]
    fn test_out_of_range_access() -> Result<()> {
        let mut writer = BitWriter::new();
        writer.append_unsigned(5, 10)?;
        let bits = writer.finish();

        assert!(matches!(bits.get_unsigned(0, 11), Err(Error::OutOfRange(_))));
        assert!(matches!(bits.get_bool(10), Err(Error::OutOfRange(_))));
        assert!(matches!(
            bits.get_unsigned(usize::MAX, 2),
            Err(Error::OutOfRange(_))
        ));
        assert_eq!(bits.get_unsigned(0, 10)?, 5);
        Ok(())
    }

    #[test]
    fn test_text_roundtrip() -> Result<()> {
        let mut writer = BitWriter::new();
        writer.append_text("TEST", 120)?;
        writer.append_text("a-1", 18)?;
        let bits = writer.finish();

        assert_eq!(bits.len(), 138);
        assert_eq!(bits.get_text(0, 120)?, "TEST");
        assert_eq!(bits.get_text(120, 18)?, "A-1");
        assert!(bits.get_text(0, 7).is_err());
        Ok(())
    }

    #[test]
    fn test_text_too_long() {
        let mut writer = BitWriter::new();
        assert!(writer.append_text("ABC", 12).is_err());
        assert!(writer.append_text("AB", 13).is_err());
    }

    #[test]
    fn test_armored_decode() -> Result<()> {
        let bits = Bits::from_armored_text("15RTgt0PAso;90TKcjM8h6g208CQ", 0)?;
        assert_eq!(bits.len(), 168);
        assert_eq!(bits.get_unsigned(0, 6)?, 1);
        assert_eq!(bits.get_unsigned(6, 2)?, 0);
        assert_eq!(bits.get_unsigned(8, 30)?, 371_798_000);
        Ok(())
    }

    #[test]
    fn test_armored_fill_bits() -> Result<()> {
        let bits = Bits::from_armored_text("w", 2)?;
        assert_eq!(bits.len(), 4);
        assert_eq!(bits.get_unsigned(0, 4)?, 0xF);

        let (payload, fill) = bits.to_armored_text();
        assert_eq!(payload, "t");
        assert_eq!(fill, 2);
        Ok(())
    }

    #[test]
    fn test_armored_roundtrip() -> Result<()> {
        let payload = "15RTgt0PAso;90TKcjM8h6g208CQ";
        let bits = Bits::from_armored_text(payload, 0)?;
        assert_eq!(bits.to_armored_text(), (payload.to_string(), 0));
        Ok(())
    }

    #[test]
    fn test_armored_invalid() {
        assert!(Bits::from_armored_text("0", 6).is_err());
        assert!(Bits::from_armored_text("", 1).is_err());
        assert!(Bits::from_armored_text("0X", 0).is_err());
    }

    #[test]
    fn test_empty() -> Result<()> {
        let bits = Bits::from_armored_text("", 0)?;
        assert!(bits.is_empty());
        assert_eq!(bits.to_armored_text(), (String::new(), 0));
        Ok(())
    }
}
