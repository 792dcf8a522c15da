//! Secure QR field mapper
//!
//! After the decimal payload has been converted to bytes and inflated, the
//! buffer looks like:
//!
//! ```text
//! [signature: header_len bytes][f0 0xFF][f1 0xFF] ... [f15 0xFF][photo][email hash?][mobile hash?]
//! ```
//!
//! - f0: layout version marker (selects the field table)
//! - f1: contact indicator (0 none, 1 email, 2 mobile, 3 both)
//! - f3..f14: identity fields at the ordinals given by the field table
//!
//! The hashes are 32-byte SHA-256 digests at the very end of the buffer; the
//! photo is whatever sits between the last text field and the digests.

use crate::codec::fields::split_fields_with_rest;
use crate::decoder::error::{DecodeError, DecodeResult};
use crate::types::layout::constants::CONTACT_HASH_LEN;
use crate::types::{join_present, FieldKey, RawFieldBag, SecureQrFieldTable};
use base64::Engine;
use tracing::{debug, warn};

/// Which contact digests the payload says it carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContactIndicator {
    pub email: bool,
    pub mobile: bool,
}

impl ContactIndicator {
    /// Parse the indicator segment; anything unrecognised means no digests
    pub fn parse(segment: Option<&str>) -> Self {
        match segment.map(str::trim) {
            Some("1") => Self {
                email: true,
                mobile: false,
            },
            Some("2") => Self {
                email: false,
                mobile: true,
            },
            Some("3") => Self {
                email: true,
                mobile: true,
            },
            _ => Self::default(),
        }
    }

    fn digest_bytes(&self) -> usize {
        (usize::from(self.email) + usize::from(self.mobile)) * CONTACT_HASH_LEN
    }
}

/// Map decoded text segments to raw fields using the given table
pub fn map_secure_qr_fields(
    segments: &[String],
    table: &SecureQrFieldTable,
) -> DecodeResult<RawFieldBag> {
    if segments.len() < table.min_segments {
        return Err(DecodeError::InsufficientFields {
            found: segments.len(),
            required: table.min_segments,
        });
    }

    let at = move |ordinal: usize| {
        segments
            .get(ordinal)
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
    };
    let o = &table.ordinals;

    let mut bag = RawFieldBag::new();
    bag.insert(FieldKey::LayoutVersion, table.version);
    bag.insert_opt(FieldKey::Name, at(o.name));
    bag.insert_opt(FieldKey::Dob, at(o.dob));
    bag.insert_opt(FieldKey::Gender, at(o.gender));
    bag.insert_opt(FieldKey::CareOf, at(o.care_of));
    bag.insert_opt(FieldKey::District, at(o.district));
    bag.insert_opt(FieldKey::HouseAndStreet, at(o.house));
    bag.insert_opt(FieldKey::Locality, at(o.locality));
    bag.insert_opt(FieldKey::Pincode, at(o.pincode));
    bag.insert_opt(FieldKey::State, at(o.state));
    bag.insert_opt(FieldKey::City, at(o.city).or(at(o.district)));
    bag.insert_opt(FieldKey::MaskedId, at(o.masked_id));

    if let Some(line) = join_present([at(o.house), at(o.landmark), at(o.locality)]) {
        bag.insert(FieldKey::AddressLine, line);
    }

    Ok(bag)
}

/// Split an inflated Secure QR buffer and map it to raw fields, including the binary tail
pub fn decode_secure_bytes(inflated: &[u8]) -> DecodeResult<RawFieldBag> {
    let table = SecureQrFieldTable::detect(inflated);
    let split = split_fields_with_rest(
        inflated,
        table.delimiter,
        table.header_len,
        table.max_fields,
    );
    debug!(
        "Secure QR layout {}: {} segment(s), {} trailing byte(s)",
        table.version,
        split.segments.len(),
        inflated.len() - split.rest_offset
    );

    let mut bag = map_secure_qr_fields(&split.segments, table)?;

    // The tail only exists once every text field has been read
    if split.segments.len() == table.max_fields {
        let indicator = ContactIndicator::parse(
            split
                .segments
                .get(table.ordinals.contact_indicator)
                .map(String::as_str),
        );
        extract_tail(&inflated[split.rest_offset..], indicator, &mut bag);
    }

    Ok(bag)
}

fn extract_tail(tail: &[u8], indicator: ContactIndicator, bag: &mut RawFieldBag) {
    let digest_bytes = indicator.digest_bytes();
    if tail.len() < digest_bytes {
        warn!(
            "Secure QR tail has {} byte(s) but indicator expects {} digest byte(s); ignoring tail",
            tail.len(),
            digest_bytes
        );
        return;
    }

    let (photo, mut digests) = tail.split_at(tail.len() - digest_bytes);
    if indicator.email {
        bag.insert(FieldKey::EmailHash, hex::encode(&digests[..CONTACT_HASH_LEN]));
        digests = &digests[CONTACT_HASH_LEN..];
    }
    if indicator.mobile {
        bag.insert(FieldKey::MobileHash, hex::encode(&digests[..CONTACT_HASH_LEN]));
    }
    if !photo.is_empty() {
        bag.insert(
            FieldKey::Photo,
            base64::engine::general_purpose::STANDARD.encode(photo),
        );
    }
}
