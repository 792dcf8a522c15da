//! Contact digest helpers around the `sha2` crate
//!
//! The issuer hashes the mobile number (or email address) with SHA-256 a number
//! of times equal to the last digit of the ID number. A last digit of 0 or 1
//! means the value is hashed exactly once. The result is carried as 32 raw
//! bytes, which the decoder exposes hex-encoded.
//!
//! # Usage
//!
//! ```rust
//! use identity_qr_decoder::crypto::contact_hash;
//!
//! let digest = contact_hash::hash_contact("9876543210", 3);
//! assert!(contact_hash::matches_contact_hash(&digest, "9876543210", 3));
//! assert!(!contact_hash::matches_contact_hash(&digest, "9876543211", 3));
//! ```

use sha2::{Digest, Sha256};

/// Hash a contact value `rounds` times, hex-encoding between rounds
///
/// Each round after the first hashes the lowercase hex of the previous digest.
/// `rounds` of 0 is treated as 1.
pub fn hash_contact(value: &str, rounds: u32) -> String {
    let mut current = hex::encode(Sha256::digest(value.trim().as_bytes()));
    for _ in 1..rounds.max(1) {
        current = hex::encode(Sha256::digest(current.as_bytes()));
    }
    current
}

/// Compare a candidate value against a hex digest carried in the payload
pub fn matches_contact_hash(expected_hex: &str, candidate: &str, rounds: u32) -> bool {
    hash_contact(candidate, rounds).eq_ignore_ascii_case(expected_hex.trim())
}

/// Hash rounds implied by an ID number: its last digit, with 0 meaning 1
///
/// IDs that do not end in a digit (fully masked) fall back to a single round.
pub fn rounds_for_id(id: &str) -> u32 {
    id.trim()
        .chars()
        .last()
        .and_then(|c| c.to_digit(10))
        .map_or(1, |d| d.max(1))
}
