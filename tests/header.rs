use fwtable::{FirmwareTableError, RawSmbiosHeader, SmbiosVersion};

#[test]
fn write() {
    let mut buf = [0xffu8; 10];

    RawSmbiosHeader::new(SmbiosVersion::V2_7, 2320).write_to(&mut buf);

    assert_eq!(buf, [0x00, 0x02, 0x07, 0x00, 0x10, 0x09, 0x00, 0x00, 0xff, 0xff]);
}

#[test]
fn parse() {
    let buf = [0x00, 0x03, 0x02, 0x00, 0x02, 0x00, 0x00, 0x00, 0xaa, 0xbb, 0xcc];
    let hdr = RawSmbiosHeader::parse(&buf).unwrap();

    assert_eq!(hdr.used_20_calling_method(), false);
    assert_eq!(hdr.version(), SmbiosVersion::new(3, 2));
    assert_eq!(hdr.version().to_string(), "3.2");
    assert_eq!(hdr.dmi_revision(), 0);
    assert_eq!(hdr.length(), 2);
    assert_eq!(hdr.record_size(), 10);
}

#[test]
fn parse_truncated() {
    assert_eq!(
        RawSmbiosHeader::parse(&[0, 2, 7]),
        Err(FirmwareTableError::Truncated { len: 3 })
    );
}

#[test]
fn parse_length_mismatch() {
    let buf = [0x00, 0x02, 0x07, 0x00, 0x10, 0x09, 0x00, 0x00, 0x00];

    assert_eq!(
        RawSmbiosHeader::parse(&buf),
        Err(FirmwareTableError::LengthMismatch {
            declared: 2320,
            available: 1
        })
    );
}

#[test]
fn provider_tags() {
    use fwtable::Provider;

    assert_eq!(Provider::RSMB.get(), 0x52534D42);
    assert_eq!(Provider::ACPI.get(), 0x41435049);
    assert_eq!(Provider::FIRM.get(), 0x4649524D);
    assert_eq!(Provider::RSMB.to_string(), "RSMB");
    assert_eq!(Provider::new(1).to_string(), "0x00000001");
}
