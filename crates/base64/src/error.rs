//! Error types for encoding and decoding.

use thiserror::Error;

/// Errors returned by [`encode_into`](crate::encode_into) and [`encode`](crate::encode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The destination cannot hold the encoded output. Nothing was written.
    #[error("destination too small: {required} bytes required, {capacity} available")]
    DestinationTooSmall { required: usize, capacity: usize },
}

/// Errors returned by [`decode_into`](crate::decode_into) and [`decode`](crate::decode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Empty source or empty destination.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// The encoded length is not a multiple of 4.
    #[error("base64 input length {0} is not a multiple of 4")]
    InvalidLength(usize),

    /// The destination cannot hold the decoded output. Nothing was written.
    #[error("destination too small: {required} bytes required, {capacity} available")]
    DestinationTooSmall { required: usize, capacity: usize },

    /// A byte outside the alphabet was found in a full quartet.
    ///
    /// Output decoded from the quartets before it is left in the destination;
    /// `written` counts those bytes. The call has still failed.
    #[error("invalid base64 character {byte:#04x} at offset {offset}")]
    InvalidCharacter {
        offset: usize,
        byte: u8,
        written: usize,
    },

    /// A byte outside the alphabet was found in the padded final quartet.
    #[error("invalid base64 character {byte:#04x} at offset {offset} in final quartet")]
    InvalidFinalCharacter {
        offset: usize,
        byte: u8,
        written: usize,
    },
}

impl DecodeError {
    /// Number of bytes left in the destination when the error was raised.
    pub fn written(&self) -> usize {
        match *self {
            DecodeError::InvalidCharacter { written, .. }
            | DecodeError::InvalidFinalCharacter { written, .. } => written,
            _ => 0,
        }
    }
}
