//! Buffer-based encoding.

use tracing::debug;

use crate::constants::PAD_BYTE;
use crate::size::encoded_size;
use crate::tables::{ENCODE_TABLE, PAIR_TABLE};
use crate::EncodeError;

/// Encodes `src` into the start of `dest` using the standard alphabet with
/// padding.
///
/// The output is not terminated; use the returned length.
///
/// # Errors
///
/// Returns [`EncodeError::DestinationTooSmall`] if `dest` is shorter than
/// [`encoded_size`]`(src.len())`. `dest` is left untouched in that case.
///
/// # Example
///
/// ```
/// use base64_codec::encode_into;
///
/// let mut dest = [0u8; 16];
/// let len = encode_into(b"hello", &mut dest).unwrap();
/// assert_eq!(&dest[..len], b"aGVsbG8=");
/// ```
pub fn encode_into(src: &[u8], dest: &mut [u8]) -> Result<usize, EncodeError> {
    let required = encoded_size(src.len());
    if required > dest.len() {
        debug!(required, capacity = dest.len(), "base64 encode: destination too small");
        return Err(EncodeError::DestinationTooSmall {
            required,
            capacity: dest.len(),
        });
    }

    Ok(encode_unchecked(src, dest))
}

/// Encodes `src` into `dest`, which must hold at least
/// `encoded_size(src.len())` bytes.
pub(crate) fn encode_unchecked(src: &[u8], dest: &mut [u8]) -> usize {
    let mut groups = src.chunks_exact(3);
    let mut offset = 0;

    for group in &mut groups {
        let (o1, o2, o3) = (group[0] as usize, group[1] as usize, group[2] as usize);
        let v1 = (o1 << 4) | (o2 >> 4);
        let v2 = ((o2 & 0b1111) << 8) | o3;

        dest[offset..offset + 2].copy_from_slice(&PAIR_TABLE[v1]);
        dest[offset + 2..offset + 4].copy_from_slice(&PAIR_TABLE[v2]);
        offset += 4;
    }

    match *groups.remainder() {
        [] => {}
        [o1] => {
            let v1 = (o1 as usize) << 4;
            dest[offset..offset + 2].copy_from_slice(&PAIR_TABLE[v1]);
            dest[offset + 2] = PAD_BYTE;
            dest[offset + 3] = PAD_BYTE;
            offset += 4;
        }
        [o1, o2] => {
            let (o1, o2) = (o1 as usize, o2 as usize);
            let v1 = (o1 << 4) | (o2 >> 4);
            let v2 = (o2 & 0b1111) << 2;
            dest[offset..offset + 2].copy_from_slice(&PAIR_TABLE[v1]);
            dest[offset + 2] = ENCODE_TABLE[v2];
            dest[offset + 3] = PAD_BYTE;
            offset += 4;
        }
        _ => unreachable!("chunks_exact(3) remainder is shorter than 3"),
    }

    offset
}

/// Encodes `src` into a new buffer of at most `dest_capacity` bytes.
///
/// The returned vector is truncated to the encoded length.
///
/// # Errors
///
/// Returns [`EncodeError::DestinationTooSmall`] if the encoding needs more
/// than `dest_capacity` bytes.
///
/// # Example
///
/// ```
/// use base64_codec::encode;
///
/// assert_eq!(encode(b"foobar", 64).unwrap(), b"Zm9vYmFy");
/// assert!(encode(b"foobar", 4).is_err());
/// ```
pub fn encode(src: &[u8], dest_capacity: usize) -> Result<Vec<u8>, EncodeError> {
    let required = encoded_size(src.len());
    if required > dest_capacity {
        return Err(EncodeError::DestinationTooSmall {
            required,
            capacity: dest_capacity,
        });
    }
    let mut buf = vec![0u8; required];
    let len = encode_into(src, &mut buf)?;
    buf.truncate(len);
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enc(src: &[u8]) -> Vec<u8> {
        let mut dest = vec![0u8; encoded_size(src.len())];
        let len = encode_into(src, &mut dest).unwrap();
        dest.truncate(len);
        dest
    }

    #[test]
    fn test_empty() {
        assert_eq!(enc(b""), b"");
        assert_eq!(encode_into(b"", &mut []), Ok(0));
    }

    #[test]
    fn test_various_lengths() {
        assert_eq!(enc(b"f"), b"Zg==");
        assert_eq!(enc(b"fo"), b"Zm8=");
        assert_eq!(enc(b"foo"), b"Zm9v");
        assert_eq!(enc(b"foob"), b"Zm9vYg==");
        assert_eq!(enc(b"fooba"), b"Zm9vYmE=");
        assert_eq!(enc(b"foobar"), b"Zm9vYmFy");
    }

    #[test]
    fn test_binary_data() {
        assert_eq!(enc(&[0x00, 0x00, 0x00]), b"AAAA");
        assert_eq!(enc(&[0xFF, 0xFF, 0xFF]), b"////");
        assert_eq!(enc(&[0xFB, 0xFF]), b"+/8=");
    }

    #[test]
    fn test_destination_too_small_writes_nothing() {
        let mut dest = [b'x'; 7];
        let err = encode_into(b"hello", &mut dest).unwrap_err();
        assert_eq!(
            err,
            EncodeError::DestinationTooSmall {
                required: 8,
                capacity: 7
            }
        );
        assert_eq!(dest, [b'x'; 7]);
    }

    #[test]
    fn test_writes_only_prefix() {
        let mut dest = [b'x'; 10];
        let len = encode_into(b"fo", &mut dest).unwrap();
        assert_eq!(len, 4);
        assert_eq!(&dest, b"Zm8=xxxxxx");
    }

    #[test]
    fn test_encode_owned() {
        assert_eq!(encode(b"hello world", 100).unwrap(), b"aGVsbG8gd29ybGQ=");
        assert_eq!(encode(b"hello world", 16).unwrap(), b"aGVsbG8gd29ybGQ=");
        assert_eq!(
            encode(b"hello world", 15),
            Err(EncodeError::DestinationTooSmall {
                required: 16,
                capacity: 15
            })
        );
    }
}
