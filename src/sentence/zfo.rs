//! ZFO: UTC and time from origin waypoint

use super::{NmeaSentence, SentenceId};
use crate::core::{Talker, Waypoint};
use crate::error::Result;
use crate::fields::{expect_count, format_opt, read};
use crate::time::{Duration, Time};

/// UTC time and time elapsed since leaving the origin waypoint
///
/// Every field is optional.
///
/// ```text
///        1         2         3
///        |         |         |
/// $--ZFO,hhmmss.ss,hhmmss.ss,c--c*hh
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Zfo {
    talker: Talker,
    time_utc: Option<Time>,
    time_elapsed: Option<Duration>,
    origin: Option<Waypoint>,
}

impl Zfo {
    /// UTC time of the observation
    pub fn time_utc(&self) -> Option<Time> {
        self.time_utc
    }

    /// Time elapsed since the origin waypoint
    pub fn time_elapsed(&self) -> Option<Duration> {
        self.time_elapsed
    }

    /// Origin waypoint identifier
    pub fn origin(&self) -> Option<&Waypoint> {
        self.origin.as_ref()
    }

    pub fn set_time_utc(&mut self, time: Option<Time>) {
        self.time_utc = time;
    }

    pub fn set_time_elapsed(&mut self, elapsed: Option<Duration>) {
        self.time_elapsed = elapsed;
    }

    pub fn set_origin(&mut self, origin: Option<Waypoint>) {
        self.origin = origin;
    }
}

impl NmeaSentence for Zfo {
    const ID: SentenceId = SentenceId::Zfo;
    const FIELD_COUNT: usize = 3;

    fn parse(talker: Talker, fields: &[&str]) -> Result<Self> {
        expect_count(Self::ID.tag(), fields, Self::FIELD_COUNT)?;

        Ok(Zfo {
            talker,
            time_utc: read(fields[0])?,
            time_elapsed: read(fields[1])?,
            origin: read(fields[2])?,
        })
    }

    fn get_data(&self) -> Vec<String> {
        vec![
            format_opt(&self.time_utc),
            format_opt(&self.time_elapsed),
            format_opt(&self.origin),
        ]
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
    fn test_only_utc() -> Result<()> {
        let mut zfo = Zfo::default();
        zfo.set_time_utc(Some(Time::new(12, 35, 19, 0)?));
        let data = zfo.get_data();
        assert_eq!(data, vec!["123519.00", "", ""]);

        let tokens: Vec<&str> = data.iter().map(String::as_str).collect();
        let parsed = Zfo::parse(Talker::default(), &tokens)?;
        assert_eq!(parsed.time_utc(), Some(Time::new(12, 35, 19, 0)?));
        assert_eq!(parsed.time_elapsed(), None);
        assert_eq!(parsed.origin(), None);
        Ok(())
    }

    #[test]
    fn test_all_fields() -> Result<()> {
        let parsed = Zfo::parse(Talker::new("GP")?, &["083000.50", "012005.00", "HOME"])?;
        assert_eq!(parsed.time_utc(), Some(Time::new(8, 30, 0, 500)?));
        assert_eq!(parsed.time_elapsed(), Some(Duration::new(1, 20, 5, 0)?));
        assert_eq!(parsed.origin().map(Waypoint::as_str), Some("HOME"));
        assert_eq!(parsed.get_data(), vec!["083000.50", "012005.00", "HOME"]);
        Ok(())
    }

    #[test]
    fn test_invalid() {
        assert!(Zfo::parse(Talker::default(), &["250000.00", "", ""]).is_err());
        assert!(Zfo::parse(Talker::default(), &["", "", "TOOLONGNAME"]).is_err());
        assert!(Zfo::parse(Talker::default(), &["", ""]).is_err());
    }
}
