mod support;

use breadcrumb::sans::{
    field,
    header::{self, End, Kind, PADDING},
};
use either::Either::{Left, Right};
use support::{acknowledge, message, segment};

#[test]
fn read_little_endian_fields() {
    let r = [0x34, 0x12, 0x00, 0x00, 0x80, 0x3f, 0xff];

    assert_eq!(field::read_u8(&r, 6), Ok(0xff));
    assert_eq!(field::read_u16(&r, 0), Ok(0x1234));
    assert_eq!(field::read_i32(&r, 0), Ok(0x1234));
    assert_eq!(field::read_f32(&r, 2), Ok(1.0));
    assert_eq!(field::read_i32(&[0xff; 4], 0), Ok(-1));
}

#[test]
fn float_is_bit_reinterpreted() {
    let bits: u32 = 0x7fc0_1234;
    let r = bits.to_le_bytes();

    assert_eq!(field::read_f32(&r, 0).map(f32::to_bits), Ok(bits));
    assert_eq!(field::read_f32(&r, 0).unwrap().to_bits() as i32, field::read_i32(&r, 0).unwrap());
}

#[test]
fn out_of_range_read_is_an_error() {
    let r = [0; 4];

    assert_eq!(
        field::read_u16(&r, 3),
        Err(field::Error::OutOfRange {
            offset: 3,
            width: 2,
            len: 4
        })
    );
    assert!(field::read_u8(&r, 4).is_err());
    assert!(field::read_i32(&r, 1).is_err());
    assert!(field::read_f32(&r, usize::MAX).is_err());
}

#[test]
fn message_length_adds_padding() {
    let m = message(0x03, 0x02, &[0; 100]);

    assert_eq!(PADDING, 8);
    assert_eq!(header::message_length(&m, 0), Ok(108));
    assert_eq!(header::message_length(&m, 0), Ok(m.len()));
    assert!(header::message_length(&m[..5], 0).is_err());
}

#[test]
fn has_message_checks_signature_and_kind() {
    let data = [acknowledge(), segment(1, 0, &[])].concat();
    let at = acknowledge().len();

    assert!(header::has_message(&data, 0, Kind::Acknowledge));
    assert!(!header::has_message(&data, 0, Kind::Track));
    assert!(header::has_message(&data, at, Kind::Track));
    assert!(!header::has_message(&data, at, Kind::Descriptors));
    assert!(!header::has_message(&data, at + 1, Kind::Track));
    assert!(!header::has_message(&data, data.len(), Kind::Track));

    let mut unsigned = data.clone();
    unsigned[at] = b'X';
    assert!(!header::has_message(&unsigned, at, Kind::Track));
}

#[test]
fn frame_splits_leading_message() {
    let first = segment(1, 0, &[]);
    let data = [first.clone(), acknowledge()].concat();

    let Left((message, rest)) = header::frame(&data, Kind::Track) else {
        panic!("expected a message");
    };
    assert_eq!(message, first);
    assert_eq!(rest, acknowledge());

    assert_eq!(header::frame(rest, Kind::Track), Right(End::Foreign(Some(Kind::Acknowledge))));

    let Left((_, rest)) = header::frame(rest, Kind::Acknowledge) else {
        panic!("expected a message");
    };
    assert_eq!(header::frame(rest, Kind::Track), Right(End::Exhausted));
}

#[test]
fn frame_reports_truncation() {
    let data = message(0x03, 0x01, &[0; 64]);

    assert_eq!(
        header::frame(&data[..40], Kind::Descriptors),
        Right(End::Truncated {
            length: 72,
            available: 40
        })
    );
    assert_eq!(header::frame(&data[..4], Kind::Descriptors), Right(End::Foreign(None)));
}

#[test]
fn kind_bytes() {
    for (kind, family, command) in [
        (Kind::Acknowledge, 0x01, 0x00),
        (Kind::Descriptors, 0x03, 0x01),
        (Kind::Track, 0x03, 0x02),
    ] {
        assert_eq!(kind.family(), family);
        assert_eq!(kind.command(), command);

        let m = message(family, command, &[]);
        assert!(header::has_message(&m, 0, kind));
    }
}
