//! Canonical identity record returned by a successful decode
//!
//! Every present field has already been through the normaliser: title-cased
//! names, zero-padded ISO dates and a canonical gender. Consumers never
//! re-normalise.

use crate::crypto::contact_hash;
use crate::detection::DetectedFormat;
use serde::{Deserialize, Serialize};

/// Canonical gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Postal address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.line1.is_none()
            && self.city.is_none()
            && self.district.is_none()
            && self.state.is_none()
            && self.pincode.is_none()
    }
}

/// Normalised identity record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRecord {
    pub name: String,
    /// ISO-8601 calendar date (`YYYY-MM-DD`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_of_birth: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    pub national_id_number: String,
    /// The issuer redacted part of the ID number; it is not fully numeric
    pub is_masked: bool,
    pub address: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub care_of: Option<String>,
    /// Base64-encoded photo blob
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    /// Hex SHA-256 digest of the registered mobile number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    /// Hex SHA-256 digest of the registered email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub source_format: DetectedFormat,
}

impl IdentityRecord {
    /// Check a user-supplied mobile number against the digest carried in the payload
    ///
    /// Returns `None` when the payload carried no mobile digest.
    pub fn matches_mobile(&self, mobile: &str) -> Option<bool> {
        let digest = self.mobile.as_deref()?;
        Some(contact_hash::matches_contact_hash(
            digest,
            mobile,
            contact_hash::rounds_for_id(&self.national_id_number),
        ))
    }

    /// Check a user-supplied email address against the digest carried in the payload
    pub fn matches_email(&self, email: &str) -> Option<bool> {
        let digest = self.email.as_deref()?;
        Some(contact_hash::matches_contact_hash(
            digest,
            email,
            contact_hash::rounds_for_id(&self.national_id_number),
        ))
    }

    /// One-line human readable summary
    pub fn summary(&self) -> String {
        let dob = self
            .date_of_birth
            .clone()
            .or_else(|| self.year_of_birth.map(|y| y.to_string()))
            .unwrap_or_else(|| "-".to_string());
        let gender = self.gender.map(|g| g.display_name()).unwrap_or("-");
        let masked = if self.is_masked { " (masked)" } else { "" };
        format!(
            "{} [{}{}] dob={} gender={} via {}",
            self.name, self.national_id_number, masked, dob, gender, self.source_format
        )
    }
}
