//! Buffer-based decoding.

use tracing::debug;

use crate::size::{max_decoded_size, padding_len};
use crate::tables::sextet;
use crate::DecodeError;

/// Checks performed before any output is written: parameters, length,
/// padding and destination capacity. Returns `(required, padding)`.
fn check(src: &[u8], capacity: usize) -> Result<(usize, usize), DecodeError> {
    if src.is_empty() {
        return Err(DecodeError::InvalidParameter("empty source"));
    }
    if capacity == 0 {
        return Err(DecodeError::InvalidParameter("empty destination"));
    }

    let max = max_decoded_size(src.len()).inspect_err(|_| {
        debug!(len = src.len(), "base64 decode: length is not a multiple of 4");
    })?;
    let padding = padding_len(src);
    let required = max - padding;

    if required > capacity {
        debug!(required, capacity, "base64 decode: destination too small");
        return Err(DecodeError::DestinationTooSmall { required, capacity });
    }

    Ok((required, padding))
}

/// Maps a quartet to its four sextets, or the index of the first byte that is
/// not an alphabet symbol.
#[inline]
fn quartet_sextets(quartet: &[u8]) -> Result<[u8; 4], usize> {
    let mut sextets = [0u8; 4];
    for (i, &byte) in quartet.iter().enumerate() {
        sextets[i] = sextet(byte).ok_or(i)?;
    }
    Ok(sextets)
}

/// Decodes `src`, already checked, into `dest`.
fn decode_checked(src: &[u8], padding: usize, dest: &mut [u8]) -> Result<usize, DecodeError> {
    let body_end = if padding > 0 { src.len() - 4 } else { src.len() };
    let mut written = 0;

    for (index, quartet) in src[..body_end].chunks_exact(4).enumerate() {
        let [s0, s1, s2, s3] = quartet_sextets(quartet).map_err(|i| {
            let offset = index * 4 + i;
            debug!(offset, written, "base64 decode: invalid character");
            DecodeError::InvalidCharacter {
                offset,
                byte: quartet[i],
                written,
            }
        })?;

        dest[written] = (s0 << 2) | (s1 >> 4);
        dest[written + 1] = (s1 << 4) | (s2 >> 2);
        dest[written + 2] = (s2 << 6) | s3;
        written += 3;
    }

    if padding == 0 {
        return Ok(written);
    }

    // Final quartet: 2 or 3 data symbols followed by padding.
    let tail = &src[body_end..body_end + 4 - padding];
    let mut sextets = [0u8; 3];
    for (i, &byte) in tail.iter().enumerate() {
        sextets[i] = sextet(byte).ok_or_else(|| {
            let offset = body_end + i;
            debug!(offset, written, "base64 decode: invalid character in final quartet");
            DecodeError::InvalidFinalCharacter {
                offset,
                byte,
                written,
            }
        })?;
    }

    let [s0, s1, s2] = sextets;
    dest[written] = (s0 << 2) | (s1 >> 4);
    written += 1;
    if padding == 1 {
        dest[written] = (s1 << 4) | (s2 >> 2);
        written += 1;
    }

    Ok(written)
}

/// Decodes standard padded base64 from `src` into the start of `dest`.
///
/// Checks run in this order: empty buffers, length, destination capacity,
/// then characters quartet by quartet. Only the final quartet may carry `=`,
/// and only in its last one or two positions.
///
/// # Errors
///
/// - [`DecodeError::InvalidParameter`] if `src` or `dest` is empty.
/// - [`DecodeError::InvalidLength`] if `src.len()` is not a multiple of 4.
/// - [`DecodeError::DestinationTooSmall`] if `dest` cannot hold the output.
/// - [`DecodeError::InvalidCharacter`] for a bad byte in a full quartet.
/// - [`DecodeError::InvalidFinalCharacter`] for a bad byte in the padded
///   final quartet.
///
/// The first three are raised before anything is written. The character
/// errors are not atomic: bytes decoded from earlier quartets stay in `dest`
/// and [`DecodeError::written`] reports how many. Treat them as failures all
/// the same.
///
/// # Example
///
/// ```
/// use base64_codec::decode_into;
///
/// let mut dest = [0u8; 5];
/// let len = decode_into(b"aGVsbG8=", &mut dest).unwrap();
/// assert_eq!(&dest[..len], b"hello");
/// ```
pub fn decode_into(src: &[u8], dest: &mut [u8]) -> Result<usize, DecodeError> {
    let (_, padding) = check(src, dest.len())?;
    decode_checked(src, padding, dest)
}

/// Decodes `src` into a new buffer, allowing at most `dest_capacity` bytes of
/// output.
///
/// Errors are the same as for [`decode_into`]; partial output is dropped.
///
/// # Example
///
/// ```
/// use base64_codec::{decode, DecodeError};
///
/// assert_eq!(decode(b"Zm9vYmFy", 64).unwrap(), b"foobar");
/// assert!(matches!(decode(b"Zm9vYmFy", 2), Err(DecodeError::DestinationTooSmall { .. })));
/// ```
pub fn decode(src: &[u8], dest_capacity: usize) -> Result<Vec<u8>, DecodeError> {
    let (required, padding) = check(src, dest_capacity)?;
    let mut buf = vec![0u8; required];
    let len = decode_checked(src, padding, &mut buf)?;
    buf.truncate(len);
    Ok(buf)
}
