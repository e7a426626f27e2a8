//! Human readable names for identifiers and enumerated codes
//!
//! Names are meant for diagnostics and display. Lookups never fail; codes
//! without an assigned meaning render as [`UNKNOWN`].

use crate::core::{DistanceUnit, Reference};
use crate::message::{AidType, EpfdFixType, MessageId, NavigationStatus};
use crate::sentence::SentenceId;

/// Placeholder for reserved or unmapped codes
pub const UNKNOWN: &str = "-";

/// Types with a descriptive name
pub trait Named {
    /// Descriptive name, [`UNKNOWN`] for reserved values
    fn name(&self) -> &'static str;
}

impl Named for SentenceId {
    fn name(&self) -> &'static str {
        match self {
            SentenceId::Hdt => "Heading - True",
            SentenceId::Hfb => "Trawl Headrope to Footrope and Bottom",
            SentenceId::Vdm => "AIS VHF Data-Link Message",
            SentenceId::Vdo => "AIS VHF Data-Link Own-Vessel Report",
            SentenceId::Zfo => "UTC and Time from Origin Waypoint",
            SentenceId::Ztg => "UTC and Time to Destination Waypoint",
        }
    }
}

impl Named for MessageId {
    fn name(&self) -> &'static str {
        match self {
            MessageId::PositionReportClassA => "Position Report Class A",
            MessageId::PositionReportClassAAssignedSchedule => {
                "Position Report Class A (Assigned Schedule)"
            }
            MessageId::PositionReportClassAResponseToInterrogation => {
                "Position Report Class A (Response to Interrogation)"
            }
            MessageId::StandardClassBCsPositionReport => "Standard Class B CS Position Report",
            MessageId::AidToNavigationReport => "Aid-to-Navigation Report",
        }
    }
}

/// Aid type names indexed by raw code
const AID_TYPE_NAMES: [&str; 32] = [
    "Default, Type of AtoN not specified",
    "Reference point",
    "RACON",
    "Fixed structure off-shore",
    UNKNOWN,
    "Light, without sectors",
    "Light, with sectors",
    "Leading Light Front",
    "Leading Light Rear",
    "Beacon, Cardinal N",
    "Beacon, Cardinal E",
    "Beacon, Cardinal S",
    "Beacon, Cardinal W",
    "Beacon, Port hand",
    "Beacon, Starboard hand",
    "Beacon, Preferred Channel port hand",
    "Beacon, Preferred Channel starboard hand",
    "Beacon, Isolated danger",
    "Beacon, Safe water",
    "Beacon, Special mark",
    "Cardinal Mark N",
    "Cardinal Mark E",
    "Cardinal Mark S",
    "Cardinal Mark W",
    "Port hand Mark",
    "Starboard hand Mark",
    "Preferred Channel Port hand",
    "Preferred Channel Starboard hand",
    "Isolated danger",
    "Safe Water",
    "Special Mark",
    "Light Vessel / LANBY / Rigs",
];

impl Named for AidType {
    fn name(&self) -> &'static str {
        AID_TYPE_NAMES
            .get(self.raw() as usize)
            .copied()
            .unwrap_or(UNKNOWN)
    }
}

impl Named for EpfdFixType {
    fn name(&self) -> &'static str {
        match self {
            EpfdFixType::Unspecified => "Undefined",
            EpfdFixType::Gps => "GPS",
            EpfdFixType::Glonass => "GLONASS",
            EpfdFixType::CombinedGpsGlonass => "Combined GPS/GLONASS",
            EpfdFixType::LoranC => "Loran-C",
            EpfdFixType::Chayka => "Chayka",
            EpfdFixType::IntegratedNavigationSystem => "Integrated Navigation System",
            EpfdFixType::Surveyed => "Surveyed",
            EpfdFixType::Galileo => "Galileo",
            EpfdFixType::InternalGnss => "Internal GNSS",
            EpfdFixType::Reserved(_) => UNKNOWN,
        }
    }
}

impl Named for NavigationStatus {
    fn name(&self) -> &'static str {
        match self {
            NavigationStatus::UnderWayUsingEngine => "Under way using engine",
            NavigationStatus::AtAnchor => "At anchor",
            NavigationStatus::NotUnderCommand => "Not under command",
            NavigationStatus::RestrictedManoeuverability => "Restricted manoeuverability",
            NavigationStatus::ConstrainedByHerDraught => "Constrained by her draught",
            NavigationStatus::Moored => "Moored",
            NavigationStatus::Aground => "Aground",
            NavigationStatus::EngagedInFishing => "Engaged in fishing",
            NavigationStatus::UnderWaySailing => "Under way sailing",
            NavigationStatus::NotDefined => "Not defined",
            NavigationStatus::Reserved(_) => UNKNOWN,
        }
    }
}

impl Named for Reference {
    fn name(&self) -> &'static str {
        match self {
            Reference::True => "True",
            Reference::Magnetic => "Magnetic",
            Reference::Relative => "Relative",
        }
    }
}

impl Named for DistanceUnit {
    fn name(&self) -> &'static str {
        match self {
            DistanceUnit::Meter => "Meter",
            DistanceUnit::Feet => "Feet",
            DistanceUnit::NauticalMile => "Nautical Mile",
            DistanceUnit::Kilometer => "Kilometer",
            DistanceUnit::Fathom => "Fathom",
        }
    }
}
