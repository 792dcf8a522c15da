//! Delimiter-based field splitting
//!
//! Field text in a Secure QR payload uses a single-byte encoding: every byte
//! value 0-255 is exactly one character (ISO-8859-1). No multi-byte decoding
//! happens here.

/// Decode bytes as ISO-8859-1, one character per byte
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Segments produced by [`split_fields_with_rest`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitFields {
    pub segments: Vec<String>,
    /// Offset just past the last delimiter consumed; the undecoded remainder starts here
    pub rest_offset: usize,
}

/// Split `bytes` on `delimiter`, skipping a `skip`-byte header, stopping after `max_fields`
///
/// A run is only emitted once its closing delimiter is seen. The early stop keeps
/// the binary blob that follows the text fields from being decoded as text.
pub fn split_fields(bytes: &[u8], delimiter: u8, skip: usize, max_fields: usize) -> Vec<String> {
    split_fields_with_rest(bytes, delimiter, skip, max_fields).segments
}

/// Like [`split_fields`], also reporting where the undecoded remainder begins
pub fn split_fields_with_rest(
    bytes: &[u8],
    delimiter: u8,
    skip: usize,
    max_fields: usize,
) -> SplitFields {
    let mut segments = Vec::new();
    let mut rest_offset = skip.min(bytes.len());

    if bytes.len() <= skip || max_fields == 0 {
        return SplitFields {
            segments,
            rest_offset,
        };
    }

    let mut start = skip;
    for (offset, &byte) in bytes.iter().enumerate().skip(skip) {
        if byte != delimiter {
            continue;
        }
        segments.push(decode_latin1(&bytes[start..offset]));
        start = offset + 1;
        rest_offset = start;
        if segments.len() == max_fields {
            break;
        }
    }

    SplitFields {
        segments,
        rest_offset,
    }
}
