//! Byte-level Secure QR stages: base-10 conversion, inflation and splitting

use crate::common::{gzip, secure_fields, SecureQrFixture};
use identity_qr_decoder::codec::{
    bytes_to_digits, detect_compression, digits_to_bytes, inflate, split_fields_with_rest,
    Compression,
};
use identity_qr_decoder::decoder::DecodeError;
use identity_qr_decoder::types::SecureQrFieldTable;

#[test]
fn test_base10_matches_known_values() {
    assert_eq!(digits_to_bytes("0").unwrap(), vec![0]);
    assert_eq!(digits_to_bytes("255").unwrap(), vec![0xff]);
    assert_eq!(digits_to_bytes("256").unwrap(), vec![0x01, 0x00]);
    assert_eq!(
        digits_to_bytes("18446744073709551616").unwrap(),
        vec![1, 0, 0, 0, 0, 0, 0, 0, 0]
    );
    assert_eq!(bytes_to_digits(&[0x01, 0x00]), "256");
}

#[test]
fn test_base10_preserves_gzip_stream() {
    let compressed = gzip(b"some inflated content that is long enough to matter");
    let digits = bytes_to_digits(&compressed);
    assert!(digits.bytes().all(|b| b.is_ascii_digit()));
    assert_eq!(digits_to_bytes(&digits).unwrap(), compressed);
}

#[test]
fn test_base10_rejects_non_digits() {
    assert_eq!(
        digits_to_bytes("12a4"),
        Err(DecodeError::InvalidDigit { position: 2 })
    );
}

#[test]
fn test_fixture_payload_inflates_to_buffer() {
    let fixture = SecureQrFixture::new(secure_fields("0")).with_tail(b"photo");
    let compressed = digits_to_bytes(&fixture.payload()).unwrap();
    assert_eq!(detect_compression(&compressed), Compression::Gzip);
    assert_eq!(inflate(&compressed).unwrap(), fixture.inflated());
}

#[test]
fn test_split_stops_after_sixteen_fields() {
    // The photo contains delimiter bytes; none of them may become a segment
    let fixture = SecureQrFixture::new(secure_fields("0")).with_tail(b"\xff\xffJPEG\xff");
    let bytes = fixture.inflated();
    let table = SecureQrFieldTable::default_layout();

    let split = split_fields_with_rest(&bytes, table.delimiter, table.header_len, table.max_fields);
    assert_eq!(split.segments.len(), 16);
    assert_eq!(split.segments[15], "reserved");
    assert_eq!(&bytes[split.rest_offset..], b"\xff\xffJPEG\xff");
}

#[test]
fn test_layout_is_selected_by_marker() {
    let mut fields = secure_fields("0");
    fields[0] = "V3".to_string();
    let bytes = SecureQrFixture::new(fields).inflated();
    assert_eq!(SecureQrFieldTable::detect(&bytes).version, "V3");

    let mut unknown = secure_fields("0");
    unknown[0] = "V9".to_string();
    let bytes = SecureQrFixture::new(unknown).inflated();
    assert_eq!(SecureQrFieldTable::detect(&bytes).version, "V2");
}
