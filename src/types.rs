//! Identity QR Decoder - Type System
//!
//! - `field_bag`: Raw, un-normalised fields read by the format extractors
//! - `identity`: Canonical identity record (output of the normaliser)
//! - `layout`: Versioned Secure QR field tables

pub mod field_bag;
pub mod identity;
pub mod layout;

pub use field_bag::{join_present, FieldKey, RawFieldBag};
pub use identity::{Address, Gender, IdentityRecord};
pub use layout::{SecureQrFieldTable, SecureQrOrdinals, SECURE_QR_LAYOUTS};
