//! Arbitrary-precision base-10 codec
//!
//! Secure QR payloads are one decimal integer, routinely several thousand digits
//! long, so the conversion works on base 10^9 limbs rather than machine integers.
//! Limbs are stored little-endian (least significant first).

use crate::decoder::error::{DecodeError, DecodeResult};

const LIMB_BASE: u64 = 1_000_000_000;
const LIMB_DIGITS: usize = 9;

/// Convert a decimal digit string to its minimal big-endian byte representation
///
/// Zero converts to a single `0x00` byte. Any non-digit character (including an
/// empty input) is rejected with [`DecodeError::InvalidDigit`].
pub fn digits_to_bytes(digits: &str) -> DecodeResult<Vec<u8>> {
    if digits.is_empty() {
        return Err(DecodeError::InvalidDigit { position: 0 });
    }
    if let Some(position) = digits.bytes().position(|b| !b.is_ascii_digit()) {
        return Err(DecodeError::InvalidDigit { position });
    }

    // Binary limbs (base 2^32), little-endian
    let mut limbs: Vec<u32> = Vec::with_capacity(digits.len() / 9 + 1);

    let bytes = digits.as_bytes();
    let head = bytes.len() % LIMB_DIGITS;
    let mut chunks: Vec<&[u8]> = Vec::with_capacity(bytes.len() / LIMB_DIGITS + 1);
    if head > 0 {
        chunks.push(&bytes[..head]);
    }
    chunks.extend(bytes[head..].chunks(LIMB_DIGITS));

    for chunk in chunks {
        let value = chunk
            .iter()
            .fold(0u64, |acc, &b| acc * 10 + u64::from(b - b'0'));
        let scale = 10u64.pow(chunk.len() as u32);
        mul_add(&mut limbs, scale, value);
    }

    let mut out: Vec<u8> = limbs
        .iter()
        .rev()
        .flat_map(|limb| limb.to_be_bytes())
        .skip_while(|&b| b == 0)
        .collect();

    if out.is_empty() {
        out.push(0);
    }
    Ok(out)
}

/// Convert big-endian bytes back to a decimal digit string
///
/// Leading zero bytes carry no value and disappear; empty input yields `"0"`.
pub fn bytes_to_digits(bytes: &[u8]) -> String {
    // Decimal limbs (base 10^9), little-endian
    let mut limbs: Vec<u64> = Vec::new();

    for &byte in bytes {
        let mut carry = u64::from(byte);
        for limb in limbs.iter_mut() {
            let value = *limb * 256 + carry;
            *limb = value % LIMB_BASE;
            carry = value / LIMB_BASE;
        }
        while carry > 0 {
            limbs.push(carry % LIMB_BASE);
            carry /= LIMB_BASE;
        }
    }

    let mut iter = limbs.iter().rev();
    let mut out = match iter.next() {
        Some(most_significant) => most_significant.to_string(),
        None => return "0".to_string(),
    };
    for limb in iter {
        out.push_str(&format!("{:09}", limb));
    }
    out
}

/// limbs = limbs * scale + addend, over base 2^32 limbs
fn mul_add(limbs: &mut Vec<u32>, scale: u64, addend: u64) {
    let mut carry = addend;
    for limb in limbs.iter_mut() {
        let value = u64::from(*limb) * scale + carry;
        *limb = value as u32;
        carry = value >> 32;
    }
    while carry > 0 {
        limbs.push(carry as u32);
        carry >>= 32;
    }
}
