//! Standard base64 encoding to a `String`.

use crate::encode::encode_unchecked;
use crate::size::encoded_size;

/// Encodes a byte slice to a standard base64 string.
///
/// # Example
///
/// ```
/// use base64_codec::to_base64;
///
/// let encoded = to_base64(b"hello world");
/// assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
/// ```
pub fn to_base64(uint8: &[u8]) -> String {
    let mut buf = vec![0u8; encoded_size(uint8.len())];
    let len = encode_unchecked(uint8, &mut buf);
    buf[..len].iter().map(|&b| b as char).collect()
}
