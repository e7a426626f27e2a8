//! Time-of-day and duration fields in `hhmmss.ss` form

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// UTC time of day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Time {
    hour: u32,
    minute: u32,
    second: u32,
    millisecond: u32,
}

impl Time {
    /// Create a new time of day
    pub fn new(hour: u32, minute: u32, second: u32, millisecond: u32) -> Result<Self> {
        if hour > 23 {
            return Err(Error::invalid_argument(format!(
                "Hour {} out of range [0, 23]",
                hour
            )));
        }
        check_minute_second(minute, second, millisecond)?;
        Ok(Time {
            hour,
            minute,
            second,
            millisecond,
        })
    }

    /// Hours, 0-23
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Minutes, 0-59
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Seconds, 0-59
    pub fn second(&self) -> u32 {
        self.second
    }

    /// Milliseconds, 0-990 in steps of 10
    pub fn millisecond(&self) -> u32 {
        self.millisecond
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hms(f, self.hour, self.minute, self.second, self.millisecond)
    }
}

impl FromStr for Time {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (hour, minute, second, millisecond) = parse_hms(s)?;
        Time::new(hour, minute, second, millisecond)
    }
}

/// Elapsed time, hours limited to two digits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Duration {
    hours: u32,
    minutes: u32,
    seconds: u32,
    milliseconds: u32,
}

impl Duration {
    /// Largest number of hours that fits the textual form
    pub const MAX_HOURS: u32 = 99;

    /// Create a new duration
    pub fn new(hours: u32, minutes: u32, seconds: u32, milliseconds: u32) -> Result<Self> {
        if hours > Self::MAX_HOURS {
            return Err(Error::invalid_argument(format!(
                "Hours {} out of range [0, {}]",
                hours,
                Self::MAX_HOURS
            )));
        }
        check_minute_second(minutes, seconds, milliseconds)?;
        Ok(Duration {
            hours,
            minutes,
            seconds,
            milliseconds,
        })
    }

    /// Hours, 0-99
    pub fn hours(&self) -> u32 {
        self.hours
    }

    /// Minutes, 0-59
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Seconds, 0-59
    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Milliseconds, 0-990 in steps of 10
    pub fn milliseconds(&self) -> u32 {
        self.milliseconds
    }
}

impl From<Duration> for std::time::Duration {
    fn from(d: Duration) -> Self {
        let secs = d.hours as u64 * 3600 + d.minutes as u64 * 60 + d.seconds as u64;
        std::time::Duration::from_secs(secs) + std::time::Duration::from_millis(d.milliseconds as u64)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hms(f, self.hours, self.minutes, self.seconds, self.milliseconds)
    }
}

impl FromStr for Duration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (hours, minutes, seconds, milliseconds) = parse_hms(s)?;
        Duration::new(hours, minutes, seconds, milliseconds)
    }
}

fn check_minute_second(minute: u32, second: u32, millisecond: u32) -> Result<()> {
    if minute > 59 || second > 59 || millisecond > 999 {
        return Err(Error::invalid_argument(format!(
            "Invalid minute/second/millisecond: {}/{}/{}",
            minute, second, millisecond
        )));
    }
    // the textual form carries hundredths of a second
    if millisecond % 10 != 0 {
        return Err(Error::invalid_argument(format!(
            "Millisecond {} is not a multiple of 10",
            millisecond
        )));
    }
    Ok(())
}

fn write_hms(f: &mut fmt::Formatter<'_>, h: u32, m: u32, s: u32, ms: u32) -> fmt::Result {
    write!(f, "{:02}{:02}{:02}.{:02}", h, m, s, ms / 10)
}

/// Split `hhmmss[.f+]` into its components, fractional part in milliseconds
///
/// Fraction digits beyond hundredths are dropped.
fn parse_hms(s: &str) -> Result<(u32, u32, u32, u32)> {
    let invalid = || Error::invalid_argument(format!("Invalid time format: {:?}", s));

    let (whole, fraction) = match s.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (s, None),
    };
    if whole.len() != 6 || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let digits = |range: std::ops::Range<usize>| whole[range].parse::<u32>().map_err(|_| invalid());
    let hour = digits(0..2)?;
    let minute = digits(2..4)?;
    let second = digits(4..6)?;

    let millisecond = match fraction {
        None => 0,
        Some(fraction) => {
            if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            fraction
                .bytes()
                .chain(std::iter::repeat(b'0'))
                .take(2)
                .fold(0, |acc, b| acc * 10 + (b - b'0') as u32)
                * 10
        }
    };

    Ok((hour, minute, second, millisecond))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_parse() -> Result<()> {
        let t: Time = "123519.25".parse()?;
        assert_eq!((t.hour(), t.minute(), t.second(), t.millisecond()), (12, 35, 19, 250));

        let t: Time = "000000".parse()?;
        assert_eq!(t, Time::default());

        let t: Time = "235959.5".parse()?;
        assert_eq!(t.millisecond(), 500);
        Ok(())
    }

    #[test]
    fn test_time_invalid() {
        assert!("240000".parse::<Time>().is_err());
        assert!("126000".parse::<Time>().is_err());
        assert!("12345".parse::<Time>().is_err());
        assert!("1234a6".parse::<Time>().is_err());
        assert!("123456.".parse::<Time>().is_err());
        assert!("123456.x".parse::<Time>().is_err());
    }

    #[test]
    fn test_sub_centisecond_rejected() -> Result<()> {
        assert!(Time::new(12, 0, 0, 125).is_err());
        assert!(Duration::new(1, 0, 0, 5).is_err());

        let t = Time::new(12, 0, 0, 120)?;
        assert_eq!(t.to_string().parse::<Time>()?, t);

        let t: Time = "120000.129".parse()?;
        assert_eq!(t.millisecond(), 120);
        Ok(())
    }

    #[test]
    fn test_time_display() -> Result<()> {
        assert_eq!(Time::new(8, 5, 3, 120)?.to_string(), "080503.12");
        assert_eq!(Time::new(23, 59, 59, 0)?.to_string(), "235959.00");
        Ok(())
    }

    #[test]
    fn test_duration_allows_long_hours() -> Result<()> {
        let d: Duration = "481530.00".parse()?;
        assert_eq!(d.hours(), 48);
        assert_eq!(d.to_string(), "481530.00");
        assert_eq!(
            std::time::Duration::from(d),
            std::time::Duration::from_secs(48 * 3600 + 15 * 60 + 30)
        );
        Ok(())
    }
}
