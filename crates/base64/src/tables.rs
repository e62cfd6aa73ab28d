//! Lookup tables, generated at compile time from the alphabet.

use crate::constants::{ALPHABET_BYTES, PAD_BYTE};

/// Decode table entry for bytes outside the alphabet.
pub(crate) const INVALID: u8 = 0xFF;

/// Decode table entry for the padding character. Kept apart from `INVALID`
/// and from every sextet value so padding never decodes as zero.
pub(crate) const PADDING: u8 = 0xFE;

/// 6-bit value to symbol.
pub(crate) static ENCODE_TABLE: [u8; 64] = *ALPHABET_BYTES;

/// Any input byte to its 6-bit value, `INVALID` or `PADDING`.
pub(crate) static DECODE_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as u8;
        i += 1;
    }
    table[PAD_BYTE as usize] = PADDING;
    table
};

/// Pre-computed two-character lookup table for encoding.
/// Indexed by a 12-bit value, each entry holds the two symbols for its high
/// and low sextets.
pub(crate) static PAIR_TABLE: [[u8; 2]; 4096] = {
    let mut table = [[0u8; 2]; 4096];
    let mut i = 0;
    while i < 64 {
        let mut j = 0;
        while j < 64 {
            let idx = i * 64 + j;
            table[idx][0] = ALPHABET_BYTES[i];
            table[idx][1] = ALPHABET_BYTES[j];
            j += 1;
        }
        i += 1;
    }
    table
};

/// Looks up the sextet for `byte`. Returns `None` for padding and for bytes
/// outside the alphabet.
#[inline]
pub(crate) fn sextet(byte: u8) -> Option<u8> {
    match DECODE_TABLE[byte as usize] {
        INVALID | PADDING => None,
        value => Some(value),
    }
}
