// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Number and text encodings used for the `size` and `type` segments.
//!
//! Numbers are stored as the minimal big-endian byte sequence (zero is the
//! empty sequence). Text is stored as UTF-16 code units, two big-endian bytes
//! each.

use crate::stego::error::StegoError;

/// Largest integer an IEEE-754 double represents exactly (2^53 - 1).
///
/// Sizes above this are rejected on encode so the produced images stay
/// readable by decoders that hold the size in a double.
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Encode `n` as a minimal big-endian byte sequence.
///
/// # Errors
/// [`StegoError::NumberOutOfRange`] if `n > MAX_SAFE_INTEGER`.
pub fn number_to_bytes(n: u64) -> Result<Vec<u8>, StegoError> {
    if n > MAX_SAFE_INTEGER {
        return Err(StegoError::NumberOutOfRange);
    }
    let bytes = n.to_be_bytes();
    let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    Ok(bytes[first..].to_vec())
}

/// Decode a big-endian byte sequence. The empty sequence is 0 and leading
/// zero bytes are accepted.
///
/// # Errors
/// [`StegoError::NumberOutOfRange`] if the value does not fit in a `u64`.
pub fn bytes_to_number(bytes: &[u8]) -> Result<u64, StegoError> {
    let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let significant = &bytes[first..];
    if significant.len() > 8 {
        return Err(StegoError::NumberOutOfRange);
    }
    Ok(significant.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64))
}

/// Encode text as big-endian UTF-16 code units.
pub fn text_to_bytes(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() * 2);
    for unit in text.encode_utf16() {
        out.extend_from_slice(&unit.to_be_bytes());
    }
    out
}

/// Decode big-endian UTF-16 code units. A trailing odd byte is dropped and
/// unpaired surrogates become U+FFFD.
pub fn bytes_to_text(bytes: &[u8]) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_empty() {
        assert!(number_to_bytes(0).unwrap().is_empty());
        assert_eq!(bytes_to_number(&[]).unwrap(), 0);
    }

    #[test]
    fn minimal_big_endian() {
        assert_eq!(number_to_bytes(3).unwrap(), vec![3]);
        assert_eq!(number_to_bytes(255).unwrap(), vec![0xFF]);
        assert_eq!(number_to_bytes(256).unwrap(), vec![0x01, 0x00]);
        assert_eq!(number_to_bytes(0x01_02_03).unwrap(), vec![1, 2, 3]);
        assert_eq!(number_to_bytes(MAX_SAFE_INTEGER).unwrap().len(), 7);
    }

    #[test]
    fn number_roundtrip_boundaries() {
        for n in [1u64, 127, 128, 65_535, 65_536, 1 << 32, MAX_SAFE_INTEGER] {
            let bytes = number_to_bytes(n).unwrap();
            assert_ne!(bytes[0], 0, "leading zero for {n}");
            assert_eq!(bytes_to_number(&bytes).unwrap(), n);
        }
    }

    #[test]
    fn unsafe_number_rejected() {
        assert!(matches!(number_to_bytes(MAX_SAFE_INTEGER + 1), Err(StegoError::NumberOutOfRange)));
        assert!(matches!(number_to_bytes(u64::MAX), Err(StegoError::NumberOutOfRange)));
    }

    #[test]
    fn lenient_decode() {
        assert_eq!(bytes_to_number(&[0, 0, 1, 0]).unwrap(), 256);
        assert_eq!(bytes_to_number(&[0; 12]).unwrap(), 0);
        assert_eq!(bytes_to_number(&[0xFF; 8]).unwrap(), u64::MAX);
        assert!(matches!(bytes_to_number(&[1; 9]), Err(StegoError::NumberOutOfRange)));
    }

    #[test]
    fn text_two_bytes_per_unit() {
        assert_eq!(text_to_bytes("png"), vec![0, b'p', 0, b'n', 0, b'g']);
        assert_eq!(text_to_bytes("é"), vec![0x00, 0xE9]);
        assert_eq!(text_to_bytes("€"), vec![0x20, 0xAC]);
        assert!(text_to_bytes("").is_empty());
    }

    #[test]
    fn text_roundtrip_with_surrogate_pairs() {
        for s in ["", "txt", "tar.gz", "日本", "🔐"] {
            assert_eq!(bytes_to_text(&text_to_bytes(s)), s);
        }
        assert_eq!(text_to_bytes("🔐").len(), 4);
    }

    #[test]
    fn odd_trailing_byte_dropped() {
        assert_eq!(bytes_to_text(&[0, b'a', 0, b'b', 0x41]), "ab");
    }
}
