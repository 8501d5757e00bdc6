// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Error types for carrier image decoding and encoding.

use thiserror::Error;

/// Errors that can occur while converting between image files and pixel grids.
#[derive(Debug, Error)]
pub enum CarrierError {
    /// The input bytes are not a decodable image.
    #[error("could not decode carrier image: {0}")]
    Decode(#[source] image::ImageError),
    /// Writing the output image failed.
    #[error("could not encode carrier image: {0}")]
    Encode(#[source] image::ImageError),
    /// The pixel buffer does not match the declared dimensions.
    #[error("pixel buffer does not match {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, CarrierError>;
