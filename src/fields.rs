//! Conversions between NMEA field tokens and typed values
//!
//! An empty token always means "absent". Optional fields read it as `None`,
//! mandatory fields reject it.

use std::fmt::Display;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Validate the number of field tokens for a sentence
pub fn expect_count(tag: &str, fields: &[&str], count: usize) -> Result<()> {
    if fields.len() != count {
        return Err(Error::invalid_argument(format!(
            "Invalid number of fields in {}: expected {}, got {}",
            tag,
            count,
            fields.len()
        )));
    }
    Ok(())
}

/// Read an optional field, an empty token yields `None`
pub fn read<T>(token: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    if token.is_empty() {
        return Ok(None);
    }
    token.parse::<T>().map(Some).map_err(|e| {
        Error::invalid_argument(format!("Invalid field value {:?}: {}", token, e))
    })
}

/// Read a mandatory field, an empty token is an error
pub fn read_required<T>(token: &str, name: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    read(token)?.ok_or_else(|| Error::invalid_argument(format!("Missing mandatory field: {}", name)))
}

/// Read an optional field that must hold exactly `expected` when present
pub fn read_literal(token: &str, expected: &str, name: &str) -> Result<()> {
    if token.is_empty() || token == expected {
        Ok(())
    } else {
        Err(Error::invalid_argument(format!(
            "Invalid {}: expected {:?}, got {:?}",
            name, expected, token
        )))
    }
}

/// Format a decimal number with a fixed number of fraction digits
pub fn format_decimal(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

/// Format an optional decimal number, `None` yields an empty token
pub fn format_opt_decimal(value: Option<f64>, precision: usize) -> String {
    value
        .map(|v| format_decimal(v, precision))
        .unwrap_or_default()
}

/// Format an optional value with its `Display` form, `None` yields an empty token
pub fn format_opt<T: Display>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Reference;

    #[test]
    fn test_expect_count() {
        assert!(expect_count("HDT", &["1", "T"], 2).is_ok());
        assert!(matches!(
            expect_count("HDT", &["1"], 2),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_read_optional() -> Result<()> {
        assert_eq!(read::<f64>("")?, None);
        assert_eq!(read::<f64>("0")?, Some(0.0));
        assert_eq!(read::<Reference>("T")?, Some(Reference::True));
        assert!(read::<f64>("abc").is_err());
        Ok(())
    }

    #[test]
    fn test_read_required() -> Result<()> {
        assert_eq!(read_required::<u32>("7", "count")?, 7);
        assert!(matches!(
            read_required::<u32>("", "count"),
            Err(Error::InvalidArgument(_))
        ));
        Ok(())
    }

    #[test]
    fn test_read_literal() {
        assert!(read_literal("M", "M", "unit").is_ok());
        assert!(read_literal("", "M", "unit").is_ok());
        assert!(read_literal("f", "M", "unit").is_err());
    }

    #[test]
    fn test_format() {
        assert_eq!(format_decimal(123.4, 1), "123.4");
        assert_eq!(format_decimal(0.0, 1), "0.0");
        assert_eq!(format_opt_decimal(None, 1), "");
        assert_eq!(format_opt(&Some(Reference::True)), "T");
        assert_eq!(format_opt::<Reference>(&None), "");
    }
}
