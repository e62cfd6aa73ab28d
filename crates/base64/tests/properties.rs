//! Property tests for the codec.

use base64_codec::{
    decode_into, decoded_size, encode_into, encoded_size, from_base64, max_decoded_size,
    to_base64, DecodeError,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn roundtrip(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let mut encoded = vec![0u8; encoded_size(data.len())];
        let len = encode_into(&data, &mut encoded).unwrap();
        prop_assert_eq!(len, encoded.len());

        let decoded = from_base64(std::str::from_utf8(&encoded).unwrap()).unwrap();
        prop_assert_eq!(&decoded, &data);

        if !data.is_empty() {
            let mut dest = vec![0u8; data.len()];
            prop_assert_eq!(decode_into(&encoded, &mut dest), Ok(data.len()));
            prop_assert_eq!(dest, data);
        }
    }

    #[test]
    fn encoded_size_is_monotonic_and_aligned(n in 0usize..1_000_000) {
        prop_assert_eq!(encoded_size(n) % 4, 0);
        prop_assert!(encoded_size(n) <= encoded_size(n + 1));
        prop_assert!(encoded_size(n) >= n);
    }

    #[test]
    fn max_decoded_size_rejects_unaligned(len in 0usize..1_000_000) {
        match max_decoded_size(len) {
            Ok(max) => {
                prop_assert_eq!(len % 4, 0);
                prop_assert_eq!(max, len / 4 * 3);
            }
            Err(err) => {
                prop_assert_ne!(len % 4, 0);
                prop_assert_eq!(err, DecodeError::InvalidLength(len));
            }
        }
    }

    #[test]
    fn decoded_size_matches_input(data in prop::collection::vec(any::<u8>(), 0..256)) {
        let encoded = to_base64(&data);
        prop_assert_eq!(decoded_size(encoded.as_bytes()), Ok(data.len()));
    }

    #[test]
    fn unaligned_input_is_a_length_error(
        data in prop::collection::vec(any::<u8>(), 1..256),
        cut in 1usize..4,
    ) {
        let encoded = to_base64(&data);
        let src = &encoded.as_bytes()[..encoded.len() - cut];
        let mut dest = vec![0u8; data.len()];
        let err = decode_into(src, &mut dest).unwrap_err();
        prop_assert_eq!(err, DecodeError::InvalidLength(src.len()));
        prop_assert_eq!(err.written(), 0);
    }
}
