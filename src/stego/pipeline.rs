// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Hide/reveal pipeline.
//!
//! Hide:
//! 1. Build the size, type and content segments
//! 2. XOR each segment with the key (if any)
//! 3. Frame the segments with separators and reject separator collisions
//! 4. Repeat every stream byte `r` times
//! 5. Check capacity, then write one byte per pixel into a cleared copy of
//!    the carrier, row-major
//!
//! Reveal runs the same steps backwards and finishes with the size check.

use crate::stego::capacity::required_pixel_count;
use crate::stego::channel::{clear_low_bits, embed_byte, extract_byte};
use crate::stego::cipher;
use crate::stego::codec::{bytes_to_number, bytes_to_text, number_to_bytes, text_to_bytes};
use crate::stego::config::StegoConfig;
use crate::stego::error::StegoError;
use crate::stego::frame::{self, SEGMENT_COUNT};
use crate::stego::pixel::{PixelGrid, Rgb};
use crate::stego::redundancy;

/// A file recovered from (or destined for) a carrier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenFile {
    /// Declared file size in bytes. Equals `content.len()` after a reveal.
    pub size: u64,
    /// File extension, without the dot.
    pub file_type: String,
    pub content: Vec<u8>,
}

/// Hide a file in a copy of `carrier`.
///
/// Every pixel of the returned grid has its low three channel bits cleared;
/// the first `stream_len * r` pixels then carry the stream. `carrier` itself
/// is not modified.
///
/// `file_size` is stored as given. [`reveal`] only accepts the image if it
/// equals `content.len()`.
///
/// # Errors
/// - [`StegoError::NumberOutOfRange`] if `file_size` exceeds 2^53 - 1.
/// - [`StegoError::SeparatorCollision`] if a (keyed) segment contains the
///   separator pattern.
/// - [`StegoError::InsufficientCapacity`] if the carrier has too few pixels.
pub fn hide(
    carrier: &PixelGrid,
    file_size: u64,
    file_type: &str,
    content: &[u8],
    config: &StegoConfig,
) -> Result<PixelGrid, StegoError> {
    let key = config.key.as_ref();
    let segments = [
        cipher::apply(key, number_to_bytes(file_size)?),
        cipher::apply(key, text_to_bytes(file_type)),
        cipher::apply(key, content.to_vec()),
    ];
    let segment_lens: Vec<usize> = segments.iter().map(Vec::len).collect();

    let stream = frame::frame(&segments);
    frame::check_boundaries(&stream, &segment_lens)?;

    let payload_bytes: usize = segment_lens.iter().sum();
    let required = required_pixel_count(payload_bytes, SEGMENT_COUNT, config.redundancy)?;
    let available = carrier.len();
    log::debug!(
        "hide: segments {segment_lens:?}, stream {} bytes, r={}, {required}/{available} pixels",
        stream.len(),
        config.redundancy
    );
    if required > available {
        return Err(StegoError::InsufficientCapacity { required, available });
    }

    let samples = redundancy::expand(&stream, config.redundancy);
    debug_assert_eq!(samples.len(), required);

    let mut out = carrier.clone();
    let pixels = out.as_mut_slice();
    for px in pixels.iter_mut() {
        *px = clear_low_bits(*px);
    }
    for (px, &byte) in pixels.iter_mut().zip(&samples) {
        *px = embed_byte(*px, byte);
    }
    Ok(out)
}

/// Convenience wrapper around [`hide`] that records `content.len()` as the size.
pub fn hide_bytes(
    carrier: &PixelGrid,
    file_type: &str,
    content: &[u8],
    config: &StegoConfig,
) -> Result<PixelGrid, StegoError> {
    hide(carrier, content.len() as u64, file_type, content, config)
}

/// Recover a hidden file from `carrier`.
///
/// # Errors
/// [`StegoError::CorruptedStream`] if fewer than three separators are found,
/// the size segment is not a valid number, or the decoded size differs from
/// the content length. A wrong key usually ends up here too.
pub fn reveal(carrier: &PixelGrid, config: &StegoConfig) -> Result<HiddenFile, StegoError> {
    let samples = extract_samples(carrier.as_slice());
    let stream = redundancy::collapse(&samples, config.redundancy);
    log::debug!(
        "reveal: {} pixels, {} stream bytes at r={}",
        samples.len(),
        stream.len(),
        config.redundancy
    );

    let mut segments = frame::unframe(&stream)?.into_iter();
    let key = config.key.as_ref();
    let mut next = || cipher::apply(key, segments.next().unwrap_or_default());
    let size_bytes = next();
    let type_bytes = next();
    let content = next();

    let size = bytes_to_number(&size_bytes).map_err(|_| StegoError::CorruptedStream)?;
    if size != content.len() as u64 {
        log::warn!("declared size {size} does not match content length {}", content.len());
        return Err(StegoError::CorruptedStream);
    }

    Ok(HiddenFile {
        size,
        file_type: bytes_to_text(&type_bytes),
        content,
    })
}

#[cfg(not(feature = "parallel"))]
fn extract_samples(pixels: &[Rgb]) -> Vec<u8> {
    pixels.iter().map(|&px| extract_byte(px)).collect()
}

#[cfg(feature = "parallel")]
fn extract_samples(pixels: &[Rgb]) -> Vec<u8> {
    use rayon::prelude::*;
    pixels.par_iter().map(|&px| extract_byte(px)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroUsize;

    fn gradient(width: u32, height: u32) -> PixelGrid {
        let mut grid = PixelGrid::filled(width, height, Rgb::default());
        for (i, px) in grid.as_mut_slice().iter_mut().enumerate() {
            let v = (i * 37) as u8;
            *px = Rgb::new(v, v.wrapping_add(85), v.wrapping_add(170));
        }
        grid
    }

    #[test]
    fn example_ten_by_ten() {
        let carrier = gradient(10, 10);
        let stego = hide(&carrier, 3, "", &[1, 2, 3], &StegoConfig::plain()).unwrap();

        let stream: Vec<u8> = stego.as_slice()[..19]
            .iter()
            .map(|&p| extract_byte(p))
            .collect();
        assert_eq!(
            stream,
            vec![3, 11, 22, 33, 22, 11, 11, 22, 33, 22, 11, 1, 2, 3, 11, 22, 33, 22, 11]
        );
        assert!(stego.as_slice()[19..].iter().all(|&p| extract_byte(p) == 0));

        let file = reveal(&stego, &StegoConfig::plain()).unwrap();
        let expected = HiddenFile {
            size: 3,
            file_type: String::new(),
            content: vec![1, 2, 3],
        };
        assert_eq!(file, expected);
    }

    #[test]
    fn carrier_untouched() {
        let carrier = gradient(8, 8);
        let before = carrier.clone();
        let _ = hide_bytes(&carrier, "bin", &[9, 9], &StegoConfig::protected()).unwrap();
        assert_eq!(carrier, before);
    }

    #[test]
    fn high_bits_preserved() {
        let carrier = gradient(12, 12);
        let stego = hide_bytes(&carrier, "x", b"abc", &StegoConfig::protected()).unwrap();
        for (a, b) in carrier.as_slice().iter().zip(stego.as_slice()) {
            assert_eq!(clear_low_bits(*a), clear_low_bits(*b));
        }
    }

    #[test]
    fn capacity_exact_fit() {
        // 4 segment bytes + 15 separator bytes = 19 pixels at r=1.
        let carrier = gradient(19, 1);
        assert!(hide(&carrier, 3, "", &[1, 2, 3], &StegoConfig::plain()).is_ok());
        let carrier = gradient(18, 1);
        match hide(&carrier, 3, "", &[1, 2, 3], &StegoConfig::plain()) {
            Err(StegoError::InsufficientCapacity { required: 19, available: 18 }) => {}
            other => panic!("expected InsufficientCapacity, got {other:?}"),
        }
    }

    #[test]
    fn size_mismatch_is_corruption() {
        let carrier = gradient(10, 10);
        let stego = hide(&carrier, 2, "", &[1, 2, 3], &StegoConfig::plain()).unwrap();
        assert!(matches!(reveal(&stego, &StegoConfig::plain()), Err(StegoError::CorruptedStream)));
    }

    #[test]
    fn blank_carrier_is_corruption() {
        let carrier = gradient(10, 10);
        assert!(matches!(
            reveal(&carrier, &StegoConfig::plain()),
            Err(StegoError::CorruptedStream)
        ));
    }

    #[test]
    fn keyed_roundtrip() {
        let carrier = gradient(30, 30);
        let cfg = StegoConfig::protected().with_passphrase("open sesame").unwrap();
        let stego = hide_bytes(&carrier, "txt", b"attack at dawn", &cfg).unwrap();
        let file = reveal(&stego, &cfg).unwrap();
        assert_eq!(file.content, b"attack at dawn");
        assert_eq!(file.file_type, "txt");
        assert_eq!(file.size, 14);
    }

    #[test]
    fn redundancy_mismatch_fails() {
        let carrier = gradient(20, 20);
        let stego = hide_bytes(&carrier, "a", &[42; 10], &StegoConfig::protected()).unwrap();
        let r2 = StegoConfig::plain().with_redundancy(NonZeroUsize::new(2).unwrap());
        assert!(reveal(&stego, &r2).is_err());
    }

    #[test]
    fn colliding_payload_rejected() {
        let carrier = gradient(20, 20);
        let result = hide_bytes(&carrier, "", &[0, 11, 22, 33, 22, 11, 0], &StegoConfig::plain());
        assert!(matches!(result, Err(StegoError::SeparatorCollision)));
    }

    #[test]
    fn unsafe_size_rejected() {
        let carrier = gradient(10, 10);
        let result = hide(&carrier, u64::MAX, "", &[], &StegoConfig::plain());
        assert!(matches!(result, Err(StegoError::NumberOutOfRange)));
    }
}
