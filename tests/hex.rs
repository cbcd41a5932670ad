use fwtable::{decode_hex_pairs, StopReason};

#[test]
fn exhausted() {
    let mut pairs = decode_hex_pairs("000aFFc3");

    assert_eq!(pairs.stop_reason(), None);
    assert_eq!(pairs.by_ref().collect::<Vec<u8>>(), [0x00, 0x0a, 0xff, 0xc3]);
    assert_eq!(pairs.stop_reason(), Some(StopReason::Exhausted));
    assert_eq!(pairs.next(), None);
}

#[test]
fn empty() {
    let mut pairs = decode_hex_pairs("");

    assert_eq!(pairs.next(), None);
    assert_eq!(pairs.stop_reason(), Some(StopReason::Exhausted));
}

#[test]
fn invalid() {
    let mut pairs = decode_hex_pairs("0102g304");

    assert_eq!(pairs.by_ref().collect::<Vec<u8>>(), [0x01, 0x02]);
    assert_eq!(pairs.stop_reason(), Some(StopReason::Invalid { offset: 4 }));

    // Nothing after the invalid pair is decoded.
    assert_eq!(pairs.next(), None);
}

#[test]
fn odd_length() {
    assert_eq!(
        decode_hex_pairs("abc").validate(),
        StopReason::Invalid { offset: 2 }
    );
}

#[test]
fn whitespace_is_invalid() {
    assert_eq!(
        decode_hex_pairs("01 02").validate(),
        StopReason::Invalid { offset: 2 }
    );
}

#[test]
fn restartable() {
    let mut pairs = decode_hex_pairs("10203040");

    assert_eq!(pairs.next(), Some(0x10));

    let rest = pairs.clone();

    assert_eq!(pairs.collect::<Vec<u8>>(), [0x20, 0x30, 0x40]);
    assert_eq!(rest.offset(), 2);
    assert_eq!(rest.collect::<Vec<u8>>(), [0x20, 0x30, 0x40]);
}

#[test]
fn size_hint() {
    let pairs = decode_hex_pairs("1020304");

    assert_eq!(pairs.size_hint(), (0, Some(3)));
}
