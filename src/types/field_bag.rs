//! Raw field bag produced by the format extractors
//!
//! Each extractor (XML, pipe, Secure QR) reads a different subset of fields out of
//! its wire format. The bag holds the literal source strings, before any
//! normalisation, keyed by a small fixed set of semantic keys.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Semantic keys a raw field can be stored under
///
/// Declaration order is the iteration order of a [`RawFieldBag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    MaskedId,
    Name,
    Dob,
    /// Year of birth, carried by some legacy XML payloads instead of a full date
    Yob,
    Gender,
    CareOf,
    HouseAndStreet,
    AddressLine,
    Locality,
    City,
    District,
    State,
    Pincode,
    MobileHash,
    EmailHash,
    /// Base64 of the embedded photo blob (Secure QR only)
    Photo,
    /// Layout version marker found in a Secure QR payload
    LayoutVersion,
}

impl FieldKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MaskedId => "maskedId",
            Self::Name => "name",
            Self::Dob => "dob",
            Self::Yob => "yob",
            Self::Gender => "gender",
            Self::CareOf => "careOf",
            Self::HouseAndStreet => "houseAndStreet",
            Self::AddressLine => "addressLine",
            Self::Locality => "locality",
            Self::City => "city",
            Self::District => "district",
            Self::State => "state",
            Self::Pincode => "pincode",
            Self::MobileHash => "mobileHash",
            Self::EmailHash => "emailHash",
            Self::Photo => "photo",
            Self::LayoutVersion => "layoutVersion",
        }
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered mapping from [`FieldKey`] to the literal string found in the source
///
/// Empty or whitespace-only values are never stored: a key is either present
/// with real content or absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFieldBag {
    fields: BTreeMap<FieldKey, String>,
}

impl RawFieldBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, ignoring blank input. Returns true if the value was kept.
    pub fn insert(&mut self, key: FieldKey, value: impl Into<String>) -> bool {
        let value = value.into();
        if value.trim().is_empty() {
            return false;
        }
        self.fields.insert(key, value);
        true
    }

    /// Store a value only if the key is not already present (first occurrence wins)
    pub fn insert_if_absent(&mut self, key: FieldKey, value: impl Into<String>) -> bool {
        if self.contains(key) {
            return false;
        }
        self.insert(key, value)
    }

    /// Store an optional value; `None` leaves the key absent
    pub fn insert_opt(&mut self, key: FieldKey, value: Option<&str>) -> bool {
        match value {
            Some(v) => self.insert(key, v),
            None => false,
        }
    }

    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.fields.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: FieldKey) -> bool {
        self.fields.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Join the present components with `", "`, in the order given
///
/// Absent or blank components are skipped without leaving a gap separator.
/// Returns `None` when nothing is present.
pub fn join_present<'a, I>(parts: I) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let joined = parts
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}
