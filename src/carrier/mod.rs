// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Carrier image I/O.
//!
//! Thin adapters between image files and [`PixelGrid`]. Any format the
//! `image` crate decodes can serve as a cover; output is always PNG, since
//! lossy re-encoding destroys the embedded low bits. Alpha is dropped on load.

pub mod error;
pub mod file;

use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbImage};

use crate::stego::capacity::plan_for_file;
use crate::stego::{PixelGrid, StegoConfig, StegoError};

use error::Result;

pub use error::CarrierError;
pub use file::{revealed_file_name, PayloadFile};

/// Decode an image file into an RGB pixel grid.
pub fn load_carrier(bytes: &[u8]) -> Result<PixelGrid> {
    let img = image::load_from_memory(bytes).map_err(CarrierError::Decode)?;
    grid_from_image(img.to_rgb8())
}

/// Decode a cover image and, if it is too small for the given file, scale it
/// up to the dimensions planned by [`plan_for_file`].
pub fn load_carrier_for(
    bytes: &[u8],
    file_type: &str,
    content_len: usize,
    config: &StegoConfig,
) -> std::result::Result<PixelGrid, StegoError> {
    let img = image::load_from_memory(bytes)
        .map_err(CarrierError::Decode)?
        .to_rgb8();
    let native = crate::stego::Dimensions::new(img.width(), img.height());
    let planned = plan_for_file(native, file_type, content_len, config.redundancy)?;
    if planned == native {
        return Ok(grid_from_image(img)?);
    }

    log::debug!(
        "scaling cover from {}x{} to {}x{}",
        native.width,
        native.height,
        planned.width,
        planned.height
    );
    let scaled = imageops::resize(&img, planned.width, planned.height, FilterType::Triangle);
    Ok(grid_from_image(scaled)?)
}

/// Encode a pixel grid as an 8-bit RGB PNG.
pub fn encode_png(grid: &PixelGrid) -> Result<Vec<u8>> {
    let (width, height) = (grid.width(), grid.height());
    let img = RgbImage::from_raw(width, height, grid.to_rgb_bytes())
        .ok_or(CarrierError::InvalidDimensions { width, height })?;
    let mut out = Vec::new();
    img.write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
        .map_err(CarrierError::Encode)?;
    Ok(out)
}

fn grid_from_image(img: RgbImage) -> Result<PixelGrid> {
    let (width, height) = img.dimensions();
    PixelGrid::from_rgb_bytes(width, height, img.as_raw())
        .ok_or(CarrierError::InvalidDimensions { width, height })
}
