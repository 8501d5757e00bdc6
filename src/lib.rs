// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! # hhimage-core
//!
//! Pure-Rust codec for hiding a file inside the pixels of a carrier image.
//!
//! Every payload byte is spread over the low bits of one pixel's red, green
//! and blue channels. The embedded stream carries the file size, extension and
//! content, each terminated by a fixed separator. Two options harden it:
//!
//! - **Redundancy**: each byte is written to `r` consecutive pixels and
//!   recovered by majority vote (default `r = 3`).
//! - **Key**: segments are XORed with a repeating key derived from a
//!   passphrase. This is obfuscation only, not encryption.
//!
//! The codec (`stego` module) works on in-memory [`PixelGrid`]s. The `carrier`
//! module decodes cover images with the `image` crate and writes lossless PNG.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use hhimage_core::{hide_file, reveal_file, PayloadFile, StegoConfig};
//!
//! let cover = std::fs::read("photo.jpg").unwrap();
//! let payload = PayloadFile::from_path("notes.txt").unwrap();
//! let config = StegoConfig::protected().with_passphrase("passphrase").unwrap();
//! let stego_png = hide_file(&cover, &payload, &config).unwrap();
//! let revealed = reveal_file(&stego_png, &config).unwrap();
//! assert_eq!(revealed.content, payload.content);
//! ```

pub mod carrier;
pub mod stego;

pub use carrier::{
    encode_png, load_carrier, load_carrier_for, revealed_file_name, CarrierError, PayloadFile,
};
pub use stego::{hide, hide_bytes, reveal, HiddenFile, Key, StegoConfig, StegoError};
pub use stego::{Dimensions, Pixel, PixelGrid, Rgb};
pub use stego::{DEFAULT_REDUNDANCY, FALLBACK_PASSPHRASE, NO_REDUNDANCY, SEGMENT_COUNT, SEPARATOR};
pub use stego::capacity::{payload_capacity, plan_dimensions, required_pixel_count};

/// Hide `payload` in a cover image and return the stego image as PNG bytes.
///
/// The cover is scaled up first if it has too few pixels for the payload.
///
/// # Errors
/// - [`StegoError::InvalidImage`] if `cover_bytes` is not a decodable image.
/// - Any error of [`hide`].
pub fn hide_file(
    cover_bytes: &[u8],
    payload: &PayloadFile,
    config: &StegoConfig,
) -> Result<Vec<u8>, StegoError> {
    let carrier =
        load_carrier_for(cover_bytes, &payload.file_type, payload.content.len(), config)?;
    let stego = hide(&carrier, payload.size(), &payload.file_type, &payload.content, config)?;
    Ok(encode_png(&stego)?)
}

/// Recover the hidden file from stego image bytes.
///
/// # Errors
/// - [`StegoError::InvalidImage`] if `stego_bytes` is not a decodable image.
/// - Any error of [`reveal`].
pub fn reveal_file(stego_bytes: &[u8], config: &StegoConfig) -> Result<HiddenFile, StegoError> {
    let carrier = load_carrier(stego_bytes)?;
    reveal(&carrier, config)
}
