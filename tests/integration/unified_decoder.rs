/// Unified tests for the decoder entry point
///
/// Every payload shape goes through `decode()` exactly as a scanner would hand
/// it over. Secure QR payloads are built by `common::SecureQrFixture`.
use crate::common::{
    gzip, secure_fields, sha256_hex, SecureQrFixture, PIPE_PAYLOAD, XML_PAYLOAD,
};
use identity_qr_decoder::codec::bytes_to_digits;
use identity_qr_decoder::decoder::{decode, DecodeError, FailureKind, IdentityDecoder};
use identity_qr_decoder::detection::{detect, DetectedFormat};
use identity_qr_decoder::types::Gender;

#[test]
fn test_pipe_payload_end_to_end() {
    let record = decode(PIPE_PAYLOAD).unwrap();
    assert_eq!(record.name, "Ravi Kumar");
    assert_eq!(record.national_id_number, "123456789012");
    assert_eq!(record.date_of_birth.as_deref(), Some("1990-08-15"));
    assert_eq!(record.gender, Some(Gender::Male));
    assert_eq!(record.address.line1.as_deref(), Some("12 MG Road"));
    assert_eq!(record.address.city.as_deref(), Some("Mysuru"));
    assert_eq!(record.address.state.as_deref(), Some("Karnataka"));
    assert_eq!(record.address.pincode.as_deref(), Some("570001"));
    assert_eq!(record.source_format, DetectedFormat::PipeLegacy);
}

#[test]
fn test_xml_payload_end_to_end() {
    let record = decode(XML_PAYLOAD).unwrap();
    assert_eq!(record.name, "Ravi Kumar");
    assert_eq!(record.date_of_birth.as_deref(), Some("1990-08-15"));
    assert_eq!(record.gender, Some(Gender::Male));
    assert_eq!(record.national_id_number, "123456789012");
    assert_eq!(record.address.city.as_deref(), Some("Mysuru"));
    assert_eq!(record.address.line1, None);
    assert_eq!(record.source_format, DetectedFormat::XmlLegacy);
}

#[test]
fn test_xml_attribute_form() {
    let record = decode(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <PrintLetterBarcodeData uid=\"123456789012\" name=\"Asha Rao\" gender=\"F\" \
         yob=\"1985\" co=\"D/O Ramesh Rao\" house=\"12\" street=\"1st Cross\" \
         loc=\"Gokulam\" vtc=\"Mysuru\" dist=\"Mysuru\" state=\"Karnataka\" pc=\"570002\"/>",
    )
    .unwrap();
    assert_eq!(record.name, "Asha Rao");
    assert_eq!(record.gender, Some(Gender::Female));
    assert_eq!(record.date_of_birth, None);
    assert_eq!(record.year_of_birth, Some(1985));
    assert_eq!(record.care_of.as_deref(), Some("D/O Ramesh Rao"));
    assert_eq!(record.address.district.as_deref(), Some("Mysuru"));
    assert_eq!(record.address.pincode.as_deref(), Some("570002"));
    assert!(record.address.line1.as_deref().unwrap().starts_with("12"));
}

#[test]
fn test_secure_qr_end_to_end() {
    let email_digest = sha256_hex("asha@example.com");
    let mobile_digest = sha256_hex("9876543210");
    let mut tail = b"\xff\xd8JPEGDATA".to_vec();
    tail.extend(hex::decode(&email_digest).unwrap());
    tail.extend(hex::decode(&mobile_digest).unwrap());

    let payload = SecureQrFixture::new(secure_fields("3"))
        .with_tail(&tail)
        .payload();
    assert_eq!(detect(&payload), DetectedFormat::SecureNumeric);

    let record = decode(&payload).unwrap();
    assert_eq!(record.name, "Asha Rao");
    assert_eq!(record.date_of_birth.as_deref(), Some("1985-11-05"));
    assert_eq!(record.year_of_birth, Some(1985));
    assert_eq!(record.gender, Some(Gender::Female));
    assert_eq!(record.national_id_number, "XXXXXXXX4321");
    assert!(record.is_masked);
    assert_eq!(record.care_of.as_deref(), Some("D/O Ramesh Rao"));
    assert_eq!(record.address.city.as_deref(), Some("Mysore City"));
    assert_eq!(record.address.district.as_deref(), Some("Mysuru"));
    assert_eq!(record.address.state.as_deref(), Some("Karnataka"));
    assert_eq!(record.address.pincode.as_deref(), Some("570002"));
    assert_eq!(
        record.address.line1.as_deref(),
        Some("12, Near Temple, Gokulam")
    );
    assert_eq!(record.source_format, DetectedFormat::SecureNumeric);

    assert_eq!(record.email.as_deref(), Some(email_digest.as_str()));
    assert_eq!(record.mobile.as_deref(), Some(mobile_digest.as_str()));
    assert_eq!(record.matches_mobile("9876543210"), Some(true));
    assert_eq!(record.matches_mobile("9876543211"), Some(false));
    assert_eq!(record.matches_email("asha@example.com"), Some(true));
    assert!(record.photo.is_some());
}

#[test]
fn test_secure_qr_without_contacts() {
    let payload = SecureQrFixture::new(secure_fields("0")).payload();
    let record = decode(&payload).unwrap();
    assert_eq!(record.mobile, None);
    assert_eq!(record.email, None);
    assert_eq!(record.photo, None);
    assert_eq!(record.matches_mobile("9876543210"), None);
}

#[test]
fn test_secure_qr_with_too_few_fields() {
    let fields = ["V2", "0", "REF", "Asha"].map(String::from).to_vec();
    let payload = SecureQrFixture::new(fields).payload();
    let err = decode(&payload).unwrap_err();
    assert_eq!(
        err,
        DecodeError::InsufficientFields {
            found: 4,
            required: 5
        }
    );
}

#[test]
fn test_secure_qr_garbage_digits_fail_decompression() {
    // Valid base-10, but the bytes are not any supported compressed stream
    let digits = bytes_to_digits(&[0x1f, 0x8b, 0x00, 0x01, 0x02, 0x03, 0x04]);
    let err = decode(&digits).unwrap_err();
    assert_eq!(err.kind(), FailureKind::DecompressionError);
}

#[test]
fn test_inflate_limit_is_enforced() {
    let payload = SecureQrFixture::new(secure_fields("0"))
        .with_tail(&[0u8; 4096])
        .payload();
    let decoder = IdentityDecoder::new(identity_qr_decoder::config::DecoderConfig {
        max_inflated_bytes: 512,
        ..Default::default()
    });
    assert_eq!(
        decoder.decode(&payload).unwrap_err().kind(),
        FailureKind::DecompressionError
    );
}

#[test]
fn test_unrecognized_payload() {
    assert_eq!(
        decode("not a qr payload"),
        Err(DecodeError::UnrecognizedFormat)
    );
    assert_eq!(decode(""), Err(DecodeError::UnrecognizedFormat));
}

#[test]
fn test_pipe_with_too_few_fields() {
    assert_eq!(
        decode("123|Ravi|1990"),
        Err(DecodeError::TooFewFields { found: 3 })
    );
}

#[test]
fn test_decode_is_idempotent() {
    let secure = SecureQrFixture::new(secure_fields("2"))
        .with_tail(&[7u8; 32])
        .payload();
    for payload in [PIPE_PAYLOAD, XML_PAYLOAD, secure.as_str(), "garbage", "<a>"] {
        assert_eq!(decode(payload), decode(payload));
    }
}

#[test]
fn test_format_detection_partitions_payloads() {
    let secure = bytes_to_digits(&gzip(b"anything"));
    let cases = [
        (XML_PAYLOAD, DetectedFormat::XmlLegacy),
        (PIPE_PAYLOAD, DetectedFormat::PipeLegacy),
        (secure.as_str(), DetectedFormat::SecureNumeric),
        ("hello world", DetectedFormat::Unrecognized),
        ("", DetectedFormat::Unrecognized),
    ];
    for (payload, expected) in cases {
        assert_eq!(detect(payload), expected, "payload {:?}", payload);
    }
}

#[test]
fn test_decoder_shared_across_threads() {
    let decoder = IdentityDecoder::default();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| decoder.decode(PIPE_PAYLOAD)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap().name, "Ravi Kumar");
        }
    });
}
