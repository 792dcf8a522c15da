//! Stream inflater over `flate2`
//!
//! Secure QR data is compressed before being turned into a decimal integer. The
//! compressed form is small but the photo inside it can inflate to tens of
//! kilobytes, so output is drained from the decoder chunk by chunk until the
//! stream reports its end.

use crate::decoder::error::{DecodeError, DecodeResult};
use flate2::read::{DeflateDecoder, GzDecoder, ZlibDecoder};
use std::io::Read;
use tracing::debug;

/// Size of each read from the decompressor
const CHUNK_SIZE: usize = 8 * 1024;

/// Default ceiling on inflated output
pub const DEFAULT_MAX_INFLATED_BYTES: usize = 1024 * 1024;

/// Compression container recognised by its header bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    /// GZIP (magic: 1F 8B)
    Gzip,
    /// ZLIB (magic: 78 01, 78 5E, 78 9C, 78 DA)
    Zlib,
    /// Headerless deflate stream
    RawDeflate,
}

/// Identify the compression container from the leading bytes
pub fn detect_compression(data: &[u8]) -> Compression {
    match data {
        [0x1f, 0x8b, ..] => Compression::Gzip,
        [0x78, 0x01 | 0x5e | 0x9c | 0xda, ..] => Compression::Zlib,
        _ => Compression::RawDeflate,
    }
}

/// Decompress with the default output ceiling
pub fn inflate(data: &[u8]) -> DecodeResult<Vec<u8>> {
    inflate_with_limit(data, DEFAULT_MAX_INFLATED_BYTES)
}

/// Decompress, failing once the output grows beyond `max_output` bytes
pub fn inflate_with_limit(data: &[u8], max_output: usize) -> DecodeResult<Vec<u8>> {
    let compression = detect_compression(data);
    debug!(
        "Inflating {} compressed byte(s) as {:?}",
        data.len(),
        compression
    );

    let decompressed = match compression {
        Compression::Gzip => drain(GzDecoder::new(data), max_output),
        Compression::Zlib => drain(ZlibDecoder::new(data), max_output),
        Compression::RawDeflate => drain(DeflateDecoder::new(data), max_output),
    }?;

    debug!("Inflated to {} byte(s)", decompressed.len());
    Ok(decompressed)
}

/// Read every chunk the decoder emits, in order, until end-of-stream
fn drain<R: Read>(mut reader: R, max_output: usize) -> DecodeResult<Vec<u8>> {
    let mut output = Vec::new();
    let mut chunk = [0u8; CHUNK_SIZE];

    loop {
        let read = reader
            .read(&mut chunk)
            .map_err(|e| DecodeError::DecompressionError {
                detail: e.to_string(),
            })?;
        if read == 0 {
            break;
        }
        if output.len() + read > max_output {
            return Err(DecodeError::DecompressionError {
                detail: format!("inflated output exceeds {} bytes", max_output),
            });
        }
        output.extend_from_slice(&chunk[..read]);
    }

    Ok(output)
}
