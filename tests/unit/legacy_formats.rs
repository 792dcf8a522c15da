//! Pipe and XML extractor boundaries

use identity_qr_decoder::decoder::{decode, extract_pipe, extract_xml, DecodeError, FailureKind};
use identity_qr_decoder::detection::{detect, DetectedFormat};
use identity_qr_decoder::types::FieldKey;

#[test]
fn test_pipe_with_exactly_four_fields() {
    let bag = extract_pipe("123456789012|Ravi Kumar|15-08-1990|M").unwrap();
    assert_eq!(bag.get(FieldKey::Gender), Some("M"));
    assert!(bag.get(FieldKey::Pincode).is_none());
    assert!(bag.get(FieldKey::AddressLine).is_none());

    let record = decode("123456789012|Ravi Kumar|15-08-1990|M").unwrap();
    assert!(record.address.is_empty());
}

#[test]
fn test_pipe_short_tail_fills_from_the_end() {
    let bag = extract_pipe("1|Ravi|15-08-1990|M|Karnataka|570001").unwrap();
    assert_eq!(bag.get(FieldKey::Pincode), Some("570001"));
    assert_eq!(bag.get(FieldKey::State), Some("Karnataka"));
    assert!(bag.get(FieldKey::City).is_none());
}

#[test]
fn test_pipe_long_address_is_joined() {
    let bag =
        extract_pipe("1|Ravi|15-08-1990|M|12|MG Road|Near Park|Mysuru|Karnataka|570001").unwrap();
    assert_eq!(
        bag.get(FieldKey::AddressLine),
        Some("12, MG Road, Near Park")
    );
    assert_eq!(bag.get(FieldKey::City), Some("Mysuru"));
}

#[test]
fn test_pipe_too_few_fields() {
    assert_eq!(
        extract_pipe("1|Ravi|1990"),
        Err(DecodeError::TooFewFields { found: 3 })
    );
}

#[test]
fn test_xml_entities_and_cdata() {
    let bag = extract_xml(
        "<PrintLetterBarcodeData><uid>1</uid><name>Ravi &amp; Sons</name>\
         <co><![CDATA[S/O <Ramesh>]]></co></PrintLetterBarcodeData>",
    )
    .unwrap();
    assert_eq!(bag.get(FieldKey::Name), Some("Ravi & Sons"));
    assert_eq!(bag.get(FieldKey::CareOf), Some("S/O <Ramesh>"));
}

#[test]
fn test_malformed_xml() {
    for payload in [
        "<uid>1</uid",
        "<root><uid>1</name></root>",
        "<root uid=1/>",
        "<root>&bogus;</root>",
    ] {
        assert_eq!(
            decode(payload).unwrap_err().kind(),
            FailureKind::MalformedMarkup,
            "payload {:?}",
            payload
        );
    }
}

#[test]
fn test_xml_with_byte_order_mark() {
    let payload = "\u{feff}<?xml version=\"1.0\"?>\
                   <PrintLetterBarcodeData uid=\"123456789012\" name=\"A\"/>";
    let record = decode(payload).unwrap();
    assert_eq!(record.name, "A");
    assert_eq!(record.national_id_number, "123456789012");
    assert_eq!(detect(payload), DetectedFormat::XmlLegacy);
}

#[test]
fn test_pipe_with_byte_order_mark() {
    let record = decode("\u{feff}123456789012|Ravi Kumar|15-08-1990|M").unwrap();
    assert_eq!(record.national_id_number, "123456789012");
}

#[test]
fn test_xml_doctype_with_internal_subset() {
    let bag = extract_xml(
        "<?xml version=\"1.0\"?>\
         <!DOCTYPE PrintLetterBarcodeData [ <!ELEMENT PrintLetterBarcodeData ANY> ]>\
         <PrintLetterBarcodeData uid=\"123456789012\" name=\"Asha\"/>",
    )
    .unwrap();
    assert_eq!(bag.get(FieldKey::Name), Some("Asha"));
    assert_eq!(bag.get(FieldKey::MaskedId), Some("123456789012"));
}
