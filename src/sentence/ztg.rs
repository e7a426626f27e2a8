//! ZTG: UTC and time to destination waypoint

use super::{NmeaSentence, SentenceId};
use crate::core::{Talker, Waypoint};
use crate::error::Result;
use crate::fields::{expect_count, format_opt, read};
use crate::time::{Duration, Time};

/// UTC time and remaining time to the destination waypoint
///
/// ```text
///        1         2         3
///        |         |         |
/// $--ZTG,hhmmss.ss,hhmmss.ss,c--c*hh
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ztg {
    talker: Talker,
    time_utc: Option<Time>,
    time_remaining: Option<Duration>,
    destination: Option<Waypoint>,
}

impl Ztg {
    pub fn time_utc(&self) -> Option<Time> {
        self.time_utc
    }

    pub fn time_remaining(&self) -> Option<Duration> {
        self.time_remaining
    }

    pub fn destination(&self) -> Option<&Waypoint> {
        self.destination.as_ref()
    }

    pub fn set_time_utc(&mut self, time: Option<Time>) {
        self.time_utc = time;
    }

    pub fn set_time_remaining(&mut self, remaining: Option<Duration>) {
        self.time_remaining = remaining;
    }

    pub fn set_destination(&mut self, destination: Option<Waypoint>) {
        self.destination = destination;
    }
}

impl NmeaSentence for Ztg {
    const ID: SentenceId = SentenceId::Ztg;
    const FIELD_COUNT: usize = 3;

    fn parse(talker: Talker, fields: &[&str]) -> Result<Self> {
        expect_count(Self::ID.tag(), fields, Self::FIELD_COUNT)?;

        Ok(Ztg {
            talker,
            time_utc: read(fields[0])?,
            time_remaining: read(fields[1])?,
            destination: read(fields[2])?,
        })
    }

    fn get_data(&self) -> Vec<String> {
        vec![
            format_opt(&self.time_utc),
            format_opt(&self.time_remaining),
            format_opt(&self.destination),
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
    fn test_roundtrip() -> Result<()> {
        let mut ztg = Ztg::default();
        ztg.set_time_remaining(Some(Duration::new(2, 0, 30, 0)?));
        ztg.set_destination(Some(Waypoint::new("DEST01")?));
        assert_eq!(ztg.get_data(), vec!["", "020030.00", "DEST01"]);

        let parsed = Ztg::parse(Talker::default(), &["", "020030.00", "DEST01"])?;
        assert_eq!(parsed, ztg);
        Ok(())
    }
}
