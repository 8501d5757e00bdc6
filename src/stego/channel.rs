// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! One byte per pixel, spread over the low bits of the three channels.
//!
//! ```text
//! byte:  [h h][m m m][l l l]
//! R:     xxxxx 0 h h
//! G:     xxxxx m m m
//! B:     xxxxx l l l
//! ```
//!
//! The high group only has two bits, so bit 2 of R is always left at 0 after
//! embedding. Decoding masks R with `0b11` and never looks at it.

use crate::stego::pixel::Rgb;

/// Mask that keeps the five high bits of a channel.
pub const CLEAR_MASK: u8 = 0b1111_1000;

/// Split a byte into its (2-bit, 3-bit, 3-bit) groups.
pub fn split_byte(byte: u8) -> [u8; 3] {
    [byte >> 6, (byte >> 3) & 0b111, byte & 0b111]
}

/// Reassemble a byte from its (2-bit, 3-bit, 3-bit) groups.
pub fn join_groups(groups: [u8; 3]) -> u8 {
    ((groups[0] & 0b11) << 6) | ((groups[1] & 0b111) << 3) | (groups[2] & 0b111)
}

/// Zero the low three bits of every channel.
pub fn clear_low_bits(rgb: Rgb) -> Rgb {
    Rgb(rgb.0.map(|c| c & CLEAR_MASK))
}

/// Embed `byte` into `rgb`, replacing the low three bits of each channel.
pub fn embed_byte(rgb: Rgb, byte: u8) -> Rgb {
    let groups = split_byte(byte);
    let clean = clear_low_bits(rgb);
    Rgb([
        clean.0[0] | groups[0],
        clean.0[1] | groups[1],
        clean.0[2] | groups[2],
    ])
}

/// Read back the byte stored in `rgb`.
pub fn extract_byte(rgb: Rgb) -> u8 {
    join_groups([rgb.r() & 0b11, rgb.g() & 0b111, rgb.b() & 0b111])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijection_over_all_bytes_and_triples() {
        let channel_samples = [0u8, 1, 7, 8, 100, 127, 128, 200, 248, 255];
        for byte in 0..=255u8 {
            for &r in &channel_samples {
                for &g in &channel_samples {
                    for &b in &channel_samples {
                        let stego = embed_byte(Rgb::new(r, g, b), byte);
                        assert_eq!(extract_byte(stego), byte, "byte {byte} in ({r},{g},{b})");
                    }
                }
            }
        }
    }

    #[test]
    fn only_low_bits_change() {
        let rgb = Rgb::new(0xAB, 0xCD, 0xEF);
        let stego = embed_byte(rgb, 0xFF);
        for (before, after) in rgb.0.iter().zip(stego.0.iter()) {
            assert_eq!(before & CLEAR_MASK, after & CLEAR_MASK);
        }
        // Bit 2 of red is never used.
        assert_eq!(stego.r() & 0b100, 0);
        assert_eq!(stego, Rgb::new(0xAB, 0xCF, 0xEF));
    }

    #[test]
    fn split_known_values() {
        assert_eq!(split_byte(0b10_110_011), [0b10, 0b110, 0b011]);
        assert_eq!(split_byte(11), [0, 1, 3]);
        assert_eq!(join_groups([0, 1, 3]), 11);
    }

    #[test]
    fn cleared_pixel_decodes_to_zero() {
        assert_eq!(extract_byte(clear_low_bits(Rgb::new(255, 255, 255))), 0);
    }
}
