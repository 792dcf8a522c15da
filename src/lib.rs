//! Identity QR Decoder
//!
//! Decodes national-ID QR payloads (XML legacy, pipe-delimited legacy and
//! compressed Secure QR) into a normalised [`types::IdentityRecord`].
//!
//! ```
//! use identity_qr_decoder::decoder::decode;
//!
//! let record = decode("123456789012|ravi kumar|15-08-1990|M|12 MG Road|Mysuru|Karnataka|570001")
//!     .unwrap();
//! assert_eq!(record.name, "Ravi Kumar");
//! assert_eq!(record.date_of_birth.as_deref(), Some("1990-08-15"));
//! ```

pub mod cli;
pub mod codec;
pub mod config;
pub mod crypto;
pub mod decoder;
pub mod detection;
pub mod errors;
pub mod normalizer;
pub mod types;

pub use decoder::{decode, DecodeError, DecodeOutcome, IdentityDecoder};
pub use detection::{detect, DetectedFormat};
pub use types::IdentityRecord;
