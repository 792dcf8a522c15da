//! Byte-level codecs for the Secure QR pipeline
//!
//! - `base10`: decimal digit string <-> big-endian bytes (arbitrary precision)
//! - `inflate`: gzip / zlib / raw deflate decompression
//! - `fields`: delimiter-based splitting with single-byte text decoding
//!
//! None of these know the Secure QR field layout; they only move bytes around.

pub mod base10;
pub mod fields;
pub mod inflate;

pub use base10::{bytes_to_digits, digits_to_bytes};
pub use fields::{decode_latin1, split_fields, split_fields_with_rest, SplitFields};
pub use inflate::{detect_compression, inflate, inflate_with_limit, Compression};
