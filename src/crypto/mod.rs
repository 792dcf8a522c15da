/// Cryptographic utilities for identity QR payloads
///
/// Secure QR payloads carry SHA-256 digests of the registered mobile number and
/// email address rather than the values themselves. This module recomputes
/// those digests so a user-entered value can be checked locally.
pub mod contact_hash;
