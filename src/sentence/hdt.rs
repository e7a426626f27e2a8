//! HDT: Heading, true

use super::{NmeaSentence, SentenceId};
use crate::core::{Reference, Talker};
use crate::error::{Error, Result};
use crate::fields::{expect_count, format_opt, format_opt_decimal, read};

/// True heading of the vessel
///
/// ```text
///        1   2
///        |   |
/// $--HDT,x.x,T*hh
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hdt {
    talker: Talker,
    heading: Option<f64>,
    reference: Option<Reference>,
}

impl Hdt {
    /// Heading in degrees
    pub fn heading(&self) -> Option<f64> {
        self.heading
    }

    /// Heading reference, always [`Reference::True`] when present
    pub fn reference(&self) -> Option<Reference> {
        self.reference
    }

    /// Set the heading in degrees, also sets the reference
    ///
    /// The value is rounded to the one decimal carried on the wire and must
    /// stay below 360 after rounding.
    pub fn set_heading(&mut self, degrees: f64) -> Result<()> {
        let degrees = (degrees * 10.0).round() / 10.0;
        check_heading(degrees)?;
        self.heading = Some(degrees);
        self.reference = Some(Reference::True);
        Ok(())
    }
}

fn check_heading(degrees: f64) -> Result<()> {
    if !(0.0..360.0).contains(&degrees) {
        return Err(Error::invalid_argument(format!(
            "Heading {} out of range [0, 360)",
            degrees
        )));
    }
    Ok(())
}

impl NmeaSentence for Hdt {
    const ID: SentenceId = SentenceId::Hdt;
    const FIELD_COUNT: usize = 2;

    fn parse(talker: Talker, fields: &[&str]) -> Result<Self> {
        expect_count(Self::ID.tag(), fields, Self::FIELD_COUNT)?;

        let heading = read::<f64>(fields[0])?;
        if let Some(degrees) = heading {
            check_heading(degrees)?;
        }
        let reference = read::<Reference>(fields[1])?;
        if reference.is_some_and(|r| r != Reference::True) {
            return Err(Error::invalid_argument(format!(
                "Invalid HDT reference: {:?}",
                fields[1]
            )));
        }

        Ok(Hdt {
            talker,
            heading,
            reference,
        })
    }

    fn get_data(&self) -> Vec<String> {
        vec![
            format_opt_decimal(self.heading, 1),
            format_opt(&self.reference),
        ]
    }

    fn talker(&self) -> &Talker {
        &self.talker
    }

    fn set_talker(&mut self, talker: Talker) {
        self.talker = talker;
    }
}
