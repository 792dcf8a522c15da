//! Normaliser: raw field bag -> canonical identity record
//!
//! This is the only place field values are cleaned up. Whatever format the bag
//! came from, the record that leaves here has title-cased names, ISO dates, a
//! canonical gender and an explicitly flagged masked ID.

pub mod date;
pub mod gender;
pub mod name;

pub use date::{normalize_date, normalize_year};
pub use gender::canonical_gender;
pub use name::{title_case, NameParts};

use crate::decoder::error::{DecodeError, DecodeResult};
use crate::detection::DetectedFormat;
use crate::types::{Address, FieldKey, IdentityRecord, RawFieldBag};
use tracing::warn;

/// Characters the issuer uses to redact ID digits
const MASK_CHARS: [char; 3] = ['X', 'x', '*'];

/// Turn a raw field bag into a canonical record
///
/// Fails with [`DecodeError::MissingRequiredField`] when the name or ID is absent:
/// a record without them would look complete while being unusable.
pub fn normalize(bag: &RawFieldBag, format: DetectedFormat) -> DecodeResult<IdentityRecord> {
    let name = bag
        .get(FieldKey::Name)
        .map(title_case)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| missing(FieldKey::Name))?;

    let national_id_number = bag
        .get(FieldKey::MaskedId)
        .map(|id| id.split_whitespace().collect::<String>())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| missing(FieldKey::MaskedId))?;
    let is_masked = national_id_number.contains(MASK_CHARS);

    let date_of_birth = bag.get(FieldKey::Dob).and_then(|raw| {
        let normalized = normalize_date(raw);
        if normalized.is_none() {
            warn!("Dropping unparseable date of birth {:?}", raw);
        }
        normalized
    });
    let year_of_birth = date_of_birth
        .as_deref()
        .and_then(|iso| iso.get(..4))
        .and_then(normalize_year)
        .or_else(|| bag.get(FieldKey::Yob).and_then(normalize_year));

    let address = Address {
        line1: text(bag, FieldKey::AddressLine),
        city: text(bag, FieldKey::City),
        district: text(bag, FieldKey::District),
        state: text(bag, FieldKey::State),
        pincode: bag
            .get(FieldKey::Pincode)
            .map(|pc| pc.split_whitespace().collect::<String>()),
    };

    Ok(IdentityRecord {
        name,
        date_of_birth,
        year_of_birth,
        gender: bag.get(FieldKey::Gender).and_then(canonical_gender),
        national_id_number,
        is_masked,
        address,
        care_of: text(bag, FieldKey::CareOf),
        photo: text(bag, FieldKey::Photo),
        mobile: text(bag, FieldKey::MobileHash),
        email: text(bag, FieldKey::EmailHash),
        source_format: format,
    })
}

fn text(bag: &RawFieldBag, key: FieldKey) -> Option<String> {
    bag.get(key).map(|v| v.trim().to_string())
}

fn missing(key: FieldKey) -> DecodeError {
    DecodeError::MissingRequiredField {
        field: key.to_string(),
    }
}
