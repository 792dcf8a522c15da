//! Pipe-delimited legacy payload extractor
//!
//! Layout: `id|name|dob|gender|<address tail...>`
//!
//! Position carries all meaning, so the four leading fields are mandatory. The
//! address tail has variable length: its last three segments are always city,
//! state and pincode, and whatever comes before them is address line 1.

use crate::decoder::error::{DecodeError, DecodeResult};
use crate::types::{join_present, FieldKey, RawFieldBag};
use tracing::debug;

const PIPE: char = '|';

/// Number of fixed-position leading segments
const FIXED_SEGMENTS: usize = 4;

/// Extract identity fields from a pipe-delimited payload
pub fn extract_pipe(text: &str) -> DecodeResult<RawFieldBag> {
    let segments: Vec<&str> = text.trim().split(PIPE).map(str::trim).collect();
    if segments.len() < FIXED_SEGMENTS {
        return Err(DecodeError::TooFewFields {
            found: segments.len(),
        });
    }

    let (fixed, tail) = segments.split_at(FIXED_SEGMENTS);
    debug!(
        "Pipe payload: {} fixed segment(s), {} address segment(s)",
        fixed.len(),
        tail.len()
    );

    let mut bag = RawFieldBag::new();
    bag.insert(FieldKey::MaskedId, fixed[0]);
    bag.insert(FieldKey::Name, fixed[1]);
    bag.insert(FieldKey::Dob, fixed[2]);
    bag.insert(FieldKey::Gender, fixed[3]);

    // Assign from the end: pincode, then state, then city
    let mut from_end = tail.iter().rev();
    bag.insert_opt(FieldKey::Pincode, from_end.next().copied());
    bag.insert_opt(FieldKey::State, from_end.next().copied());
    bag.insert_opt(FieldKey::City, from_end.next().copied());

    let line_len = tail.len().saturating_sub(3);
    if let Some(line) = join_present(tail[..line_len].iter().map(|s| Some(*s))) {
        bag.insert(FieldKey::AddressLine, line);
    }

    Ok(bag)
}
