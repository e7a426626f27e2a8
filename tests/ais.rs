use marine_codec::bits::{BitWriter, Bits};
use marine_codec::message::{
    self, AidToNavigationReport, AidType, ClassBPositionReport, EpfdFixType, OffPosition,
    PositionReport, VirtualAid,
};
use marine_codec::{AisMessage, Error, Message, Mmsi, Result};

fn reference_point() -> Result<AidToNavigationReport> {
    let mut report = AidToNavigationReport::default();
    report.set_mmsi(Mmsi::new(123_456_789)?);
    report.set_aid_type(AidType::ReferencePoint);
    report.set_name("TEST");
    report.set_position_accuracy(true);
    report.set_longitude(None);
    report.set_latitude(None);
    report.set_to_bow(0)?;
    report.set_to_stern(0)?;
    report.set_to_port(0)?;
    report.set_to_starboard(0)?;
    report.set_epfd_fix(EpfdFixType::Unspecified)?;
    report.set_utc_second(60)?;
    report.set_off_position(OffPosition::OnPosition);
    report.set_raim(false);
    report.set_virtual_aid_flag(VirtualAid::RealAid);
    report.set_assigned(false);
    Ok(report)
}

#[test]
fn bit_fields_roundtrip_at_every_width() -> Result<()> {
    for width in 1..=32usize {
        let max = if width == 32 { u32::MAX } else { (1u32 << width) - 1 };
        for value in [0, 1 & max, max / 2, max] {
            let mut w = BitWriter::new();
            w.append_bool(true);
            w.append_unsigned(value, width)?;
            let bits = w.finish();
            assert_eq!(bits.get_unsigned(1, width)?, value, "width {}", width);
        }
    }
    Ok(())
}

#[test]
fn aid_to_navigation_roundtrip() -> Result<()> {
    let report = reference_point()?;
    let bits = report.get_data()?;
    assert_eq!(bits.len(), 272);

    let decoded = AidToNavigationReport::parse(&bits)?;
    assert_eq!(decoded, report);
    assert_eq!(decoded.mmsi().value(), 123_456_789);
    assert_eq!(decoded.aid_type(), AidType::ReferencePoint);
    assert_eq!(decoded.name(), "TEST");
    assert!(decoded.position_accuracy());
    assert_eq!(decoded.longitude(), None);
    assert_eq!(decoded.latitude(), None);
    assert_eq!(decoded.epfd_fix(), EpfdFixType::Unspecified);
    assert_eq!(decoded.utc_second(), 60);
    assert_eq!(decoded.off_position(), OffPosition::OnPosition);
    assert_eq!(decoded.virtual_aid_flag(), VirtualAid::RealAid);
    assert_eq!(decoded.name_extension(), "");
    Ok(())
}

#[test]
fn aid_to_navigation_name_extension_length() -> Result<()> {
    let mut report = reference_point()?;
    report.set_name_extension("ABCDEFGHIJKLMN");
    assert_eq!(report.get_data()?.len(), 360);

    report.set_name_extension("ABCDEFGHIJKLMNO");
    assert_eq!(report.name_extension(), "ABCDEFGHIJKLMN");
    let bits = report.get_data()?;
    assert_eq!(bits.len(), 360);
    assert_eq!(AidToNavigationReport::parse(&bits)?.name_extension(), "ABCDEFGHIJKLMN");
    Ok(())
}

#[test]
fn aid_to_navigation_rejects_short_payload() -> Result<()> {
    let mut w = BitWriter::new();
    w.append_unsigned(21, 6)?;
    for _ in 6..271 {
        w.append_bool(false);
    }
    let bits = w.finish();
    assert_eq!(bits.len(), 271);

    assert!(matches!(
        AidToNavigationReport::parse(&bits),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(message::parse(&bits), Err(Error::InvalidArgument(_))));
    Ok(())
}

#[test]
fn position_report_with_all_ones_mmsi() -> Result<()> {
    let mut w = BitWriter::new();
    w.append_unsigned(1, 6)?;
    w.append_unsigned(0, 2)?;
    w.append_unsigned(0x3FFF_FFFF, 30)?;
    for _ in 38..168 {
        w.append_bool(false);
    }

    let message = message::parse(&w.finish())?;
    assert_eq!(message.mmsi().value(), 1_073_741_823);
    Ok(())
}

#[test]
fn unknown_message_id_not_supported() -> Result<()> {
    let bits = Bits::from_armored_text("P00000000000000000000000000", 0)?;
    assert_eq!(bits.get_unsigned(0, 6)?, 32);
    assert!(matches!(message::parse(&bits), Err(Error::NotSupported(_))));
    Ok(())
}

#[test]
fn messages_roundtrip_through_armor() -> Result<()> {
    let mut position = PositionReport::default();
    position.set_mmsi(Mmsi::new(211_000_001)?);
    position.set_speed_over_ground(Some(14.2))?;
    position.set_true_heading(Some(271))?;

    let mut class_b = ClassBPositionReport::default();
    class_b.set_mmsi(Mmsi::new(338_000_002)?);
    class_b.set_band_flag(true);

    let mut aid = reference_point()?;
    aid.set_name_extension("NORTH");

    for message in [
        Message::from(position),
        Message::from(class_b),
        Message::from(aid),
    ] {
        let fragments = message::encode_message(&message)?;
        assert_eq!(message::make_message(&fragments)?, message);
    }
    Ok(())
}
