//! Standard base64 decoding from a `&str`.

use crate::decode::decode;
use crate::size::decoded_size;
use crate::DecodeError;

/// Decodes a standard padded base64 string into a new vector.
///
/// Unlike [`decode_into`](crate::decode_into), the empty string is accepted
/// and decodes to an empty vector.
///
/// # Example
///
/// ```
/// use base64_codec::from_base64;
///
/// assert_eq!(from_base64("aGVsbG8=").unwrap(), b"hello");
/// assert!(from_base64("aGVsbG8").is_err());
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }
    let bytes = encoded.as_bytes();
    decode(bytes, decoded_size(bytes)?)
}
