// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Steganographic hide and reveal over RGB pixel grids.
//!
//! The codec stores one stream byte per pixel in the low bits of the three
//! channels ([`channel`]). The stream holds three separator-terminated
//! segments ([`frame`]): the file size ([`codec`]), its extension and its
//! content, optionally XORed with a passphrase key ([`cipher`]) and repeated
//! for majority voting ([`redundancy`]). [`capacity`] sizes carriers for a
//! given payload.
//!
//! Both sides must agree on the [`StegoConfig`]; nothing about it is stored
//! in the image.

pub mod capacity;
pub mod channel;
pub mod cipher;
pub mod codec;
pub mod config;
pub mod error;
pub mod frame;
pub mod pixel;
mod pipeline;
pub mod redundancy;

pub use cipher::Key;
pub use config::{StegoConfig, DEFAULT_REDUNDANCY, FALLBACK_PASSPHRASE, NO_REDUNDANCY};
pub use error::StegoError;
pub use frame::{SEGMENT_COUNT, SEPARATOR};
pub use pipeline::{hide, hide_bytes, reveal, HiddenFile};
pub use pixel::{Dimensions, Pixel, PixelGrid, Rgb};
