//! Error types for NMEA and AIS encoding and decoding

use thiserror::Error;

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types encountered while parsing or serializing sentences and messages
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Bit or token access beyond the declared bounds
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// Wrong field count, illegal field value or bit length outside the allowed range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Unknown AIS message id or NMEA sentence tag
    #[error("Not supported: {0}")]
    NotSupported(String),

    /// Transmitted checksum does not match the sentence content
    #[error("Checksum error: expected {expected:02X}, computed {computed:02X}")]
    Checksum {
        /// Checksum carried by the sentence
        expected: u8,
        /// Checksum computed over the sentence body
        computed: u8,
    },
}

impl Error {
    /// Create a new OutOfRange error
    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Error::OutOfRange(msg.into())
    }

    /// Create a new InvalidArgument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Create a new NotSupported error
    pub fn not_supported(msg: impl Into<String>) -> Self {
        Error::NotSupported(msg.into())
    }

    /// Create a new Checksum error
    pub fn checksum(expected: u8, computed: u8) -> Self {
        Error::Checksum { expected, computed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_argument("test");
        assert!(err.to_string().contains("Invalid argument"));

        let err = Error::not_supported("XYZ");
        assert_eq!(err.to_string(), "Not supported: XYZ");
    }

    #[test]
    fn test_checksum_display() {
        let err = Error::checksum(0x0A, 0x3F);
        assert_eq!(err.to_string(), "Checksum error: expected 0A, computed 3F");
    }
}
