//! Output size calculations.

use crate::constants::PAD_BYTE;
use crate::DecodeError;

/// Returns the exact encoded length, padding included, of `n` input bytes.
///
/// # Example
///
/// ```
/// use base64_codec::encoded_size;
///
/// assert_eq!(encoded_size(0), 0);
/// assert_eq!(encoded_size(1), 4);
/// assert_eq!(encoded_size(4), 8);
/// ```
pub const fn encoded_size(n: usize) -> usize {
    n.div_ceil(3) * 4
}

/// Returns the upper bound of the decoded length for `encoded_len` input bytes.
///
/// The true length may be one or two bytes smaller, depending on padding; see
/// [`decoded_size`].
///
/// # Errors
///
/// Returns [`DecodeError::InvalidLength`] if `encoded_len` is not a multiple of 4.
///
/// # Example
///
/// ```
/// use base64_codec::{max_decoded_size, DecodeError};
///
/// assert_eq!(max_decoded_size(160), Ok(120));
/// assert_eq!(max_decoded_size(3), Err(DecodeError::InvalidLength(3)));
/// ```
pub const fn max_decoded_size(encoded_len: usize) -> Result<usize, DecodeError> {
    if encoded_len % 4 != 0 {
        return Err(DecodeError::InvalidLength(encoded_len));
    }
    Ok(encoded_len / 4 * 3)
}

/// Number of trailing `=` in the final quartet (0, 1 or 2).
pub(crate) fn padding_len(src: &[u8]) -> usize {
    match src {
        [.., a, b] if *a == PAD_BYTE && *b == PAD_BYTE => 2,
        [.., b] if *b == PAD_BYTE => 1,
        _ => 0,
    }
}

/// Returns the exact decoded length of `src`, resolving padding.
///
/// Only the length and the last two bytes are inspected; the remaining
/// characters are not validated.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidLength`] if `src.len()` is not a multiple of 4.
pub fn decoded_size(src: &[u8]) -> Result<usize, DecodeError> {
    let max = max_decoded_size(src.len())?;
    Ok(max - padding_len(src))
}
