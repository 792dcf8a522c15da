//! Common Test Utilities
//!
//! Fixture builders shared by the integration and unit tests. Secure QR
//! payloads are built the same way an issuer would: signature header, text
//! fields terminated by 0xFF, binary tail, gzip, then base-10.

#![allow(dead_code)]

use flate2::write::GzEncoder;
use flate2::Compression;
use identity_qr_decoder::codec::bytes_to_digits;
use std::io::Write;

pub const HEADER_LEN: usize = 256;
pub const DELIMITER: u8 = 0xFF;

/// The sixteen text fields of a complete V2 Secure QR payload
pub fn secure_fields(contact_indicator: &str) -> Vec<String> {
    [
        "V2",
        contact_indicator,
        "REF20240101",
        "asha RAO",
        "05-11-1985",
        "F",
        "D/O Ramesh Rao",
        "Mysuru",
        "Near Temple",
        "12",
        "Gokulam",
        "570 002",
        "Karnataka",
        "Mysore City",
        "XXXXXXXX4321",
        "reserved",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Builder for inflated Secure QR buffers
#[derive(Debug, Clone)]
pub struct SecureQrFixture {
    pub fields: Vec<String>,
    pub tail: Vec<u8>,
}

impl SecureQrFixture {
    pub fn new(fields: Vec<String>) -> Self {
        Self {
            fields,
            tail: Vec::new(),
        }
    }

    pub fn with_tail(mut self, tail: &[u8]) -> Self {
        self.tail.extend_from_slice(tail);
        self
    }

    /// Uncompressed buffer: header, delimited fields, tail
    pub fn inflated(&self) -> Vec<u8> {
        let mut bytes = vec![0x5a; HEADER_LEN];
        for field in &self.fields {
            bytes.extend(field.chars().map(|c| c as u32 as u8));
            bytes.push(DELIMITER);
        }
        bytes.extend_from_slice(&self.tail);
        bytes
    }

    /// Gzip the buffer and render it as the decimal string printed in the QR code
    pub fn payload(&self) -> String {
        bytes_to_digits(&gzip(&self.inflated()))
    }
}

pub fn gzip(bytes: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes).unwrap();
    encoder.finish().unwrap()
}

pub fn sha256_hex(value: &str) -> String {
    use sha2::{Digest, Sha256};
    hex::encode(Sha256::digest(value.as_bytes()))
}

pub const PIPE_PAYLOAD: &str =
    "123456789012|Ravi Kumar|15-08-1990|M|12 MG Road|Mysuru|Karnataka|570001";

pub const XML_PAYLOAD: &str = "<?xml version=\"1.0\"?><PrintLetterBarcodeData>\
    <uid>123456789012</uid><name>ravi kumar</name><dob>15-08-1990</dob>\
    <gender>M</gender><vtc>Mysuru</vtc><state>Karnataka</state><pc>570001</pc>\
    </PrintLetterBarcodeData>";
