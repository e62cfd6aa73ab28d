//! Standard base64 (RFC 4648) encoding and decoding.
//!
//! The core operations work on caller-provided buffers and never allocate:
//! - [`encode_into`] / [`decode_into`] write into a destination slice and
//!   return the number of bytes written
//! - [`encoded_size`] / [`max_decoded_size`] / [`decoded_size`] size those
//!   destinations up front
//!
//! [`encode`] / [`decode`] take a destination capacity and return an owned
//! buffer; [`to_base64`] / [`from_base64`] size everything themselves.
//!
//! Lookup tables are built by `const` evaluation, so there is no runtime
//! initialization and they are safe to read from any thread.
//!
//! # Example
//!
//! ```
//! use base64_codec::{decode_into, encode_into, encoded_size};
//!
//! let data = b"hello world";
//! let mut encoded = vec![0u8; encoded_size(data.len())];
//! let len = encode_into(data, &mut encoded).unwrap();
//! assert_eq!(&encoded[..len], b"aGVsbG8gd29ybGQ=");
//!
//! let mut decoded = [0u8; 11];
//! let len = decode_into(&encoded, &mut decoded).unwrap();
//! assert_eq!(&decoded[..len], data);
//! ```

mod constants;
mod decode;
mod encode;
mod error;
mod from_base64;
mod size;
mod tables;
mod to_base64;

pub use constants::{ALPHABET, ALPHABET_BYTES, PAD, PAD_BYTE};
pub use decode::{decode, decode_into};
pub use encode::{encode, encode_into};
pub use error::{DecodeError, EncodeError};
pub use from_base64::from_base64;
pub use size::{decoded_size, encoded_size, max_decoded_size};
pub use to_base64::to_base64;
