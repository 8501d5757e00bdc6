// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Carrier capacity planning.
//!
//! One pixel carries one stream byte, and every stream byte is repeated `r`
//! times. A carrier with `n` pixels therefore holds
//! `(segment bytes + segments * SEPARATOR_LEN) * r <= n`.
//!
//! When the cover image is too small, [`plan_dimensions`] picks new carrier
//! dimensions with the same orientation and (rounded up) aspect ratio.

use std::num::NonZeroUsize;

use crate::stego::codec::{number_to_bytes, text_to_bytes};
use crate::stego::error::StegoError;
use crate::stego::frame::{SEGMENT_COUNT, SEPARATOR_LEN};
use crate::stego::pixel::Dimensions;

/// Pixels needed for `payload_bytes` of segment data split over
/// `segment_count` segments at redundancy `r`.
///
/// # Errors
/// [`StegoError::InsufficientCapacity`] if the count overflows `usize`.
pub fn required_pixel_count(
    payload_bytes: usize,
    segment_count: usize,
    r: NonZeroUsize,
) -> Result<usize, StegoError> {
    segment_count
        .checked_mul(SEPARATOR_LEN)
        .and_then(|sep| sep.checked_add(payload_bytes))
        .and_then(|n| n.checked_mul(r.get()))
        .ok_or(StegoError::InsufficientCapacity {
            required: usize::MAX,
            available: 0,
        })
}

/// Largest total segment byte count a carrier of `pixel_count` pixels holds
/// with [`SEGMENT_COUNT`] segments at redundancy `r`.
///
/// Returns 0 if not even the separators fit.
pub fn payload_capacity(pixel_count: usize, r: NonZeroUsize) -> usize {
    (pixel_count / r.get()).saturating_sub(SEGMENT_COUNT * SEPARATOR_LEN)
}

/// Carrier dimensions able to hold `required` pixels.
///
/// Keeps `native` when it already has more than `required` pixels. Otherwise
/// the shorter side becomes `ceil(sqrt(required))` and the longer side that
/// value times the native long/short ratio, rounded up. The side that was
/// shorter in `native` stays the shorter one.
///
/// # Errors
/// [`StegoError::ImageTooSmall`] if `native` has a zero side (no ratio), and
/// [`StegoError::InsufficientCapacity`] if the planned sides overflow `u32`.
pub fn plan_dimensions(native: Dimensions, required: usize) -> Result<Dimensions, StegoError> {
    if native.width == 0 || native.height == 0 {
        return Err(StegoError::ImageTooSmall);
    }
    if native.pixel_count() > required {
        return Ok(native);
    }

    let width_is_shorter = native.width < native.height;
    let (short, long) = if width_is_shorter {
        (native.width as u128, native.height as u128)
    } else {
        (native.height as u128, native.width as u128)
    };

    let short_side = ceil_sqrt(required as u128);
    let long_side = (short_side * long).div_ceil(short);

    let overflow = || StegoError::InsufficientCapacity { required, available: 0 };
    let short_side = u32::try_from(short_side).map_err(|_| overflow())?;
    let long_side = u32::try_from(long_side).map_err(|_| overflow())?;

    let planned = if width_is_shorter {
        Dimensions::new(short_side, long_side)
    } else {
        Dimensions::new(long_side, short_side)
    };
    log::debug!(
        "carrier {}x{} too small for {required} pixels, planned {}x{}",
        native.width,
        native.height,
        planned.width,
        planned.height
    );
    Ok(planned)
}

/// Exact segment byte count for a file with the given extension and length.
///
/// # Errors
/// [`StegoError::NumberOutOfRange`] if `content_len` cannot be encoded.
pub fn segment_bytes_for_file(file_type: &str, content_len: usize) -> Result<usize, StegoError> {
    let size = number_to_bytes(content_len as u64)?;
    Ok(size.len() + text_to_bytes(file_type).len() + content_len)
}

/// Plan carrier dimensions for a concrete file.
pub fn plan_for_file(
    native: Dimensions,
    file_type: &str,
    content_len: usize,
    r: NonZeroUsize,
) -> Result<Dimensions, StegoError> {
    let payload = segment_bytes_for_file(file_type, content_len)?;
    let required = required_pixel_count(payload, SEGMENT_COUNT, r)?;
    plan_dimensions(native, required)
}

/// Smallest `s` with `s * s >= n`.
fn ceil_sqrt(n: u128) -> u128 {
    if n == 0 {
        return 0;
    }
    // Float estimate, then correct by at most a few steps.
    let mut s = (n as f64).sqrt() as u128;
    while s * s < n {
        s += 1;
    }
    while s > 0 && (s - 1) * (s - 1) >= n {
        s -= 1;
    }
    s
}
