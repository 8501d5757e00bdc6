// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Error types for the steganography pipeline.
//!
//! [`StegoError`] covers all failure modes from carrier decoding through
//! framing, redundancy collapse and the integrity check.

use thiserror::Error;

use crate::carrier::error::CarrierError;

/// Errors that can occur while hiding or revealing a file.
#[derive(Debug, Error)]
pub enum StegoError {
    /// A number cannot be represented exactly on the wire (above 2^53 - 1
    /// when encoding, or wider than 64 bits when decoding).
    #[error("number is out of range")]
    NumberOutOfRange,
    /// The carrier has fewer pixels than the framed, redundant stream needs.
    #[error("not enough pixels to save bytes ({required} required, {available} available)")]
    InsufficientCapacity { required: usize, available: usize },
    /// Fewer than three separators were found, or the decoded size does not
    /// match the decoded content length.
    #[error("content could not be recovered: image is corrupted or the key is wrong")]
    CorruptedStream,
    /// An empty cipher key was supplied.
    #[error("cipher key must not be empty")]
    InvalidKey,
    /// A segment contains (or forms, together with its separator) the
    /// separator pattern, so the embedded stream could not be split again.
    #[error("payload collides with the segment separator")]
    SeparatorCollision,
    /// The carrier has no pixels.
    #[error("image too small for embedding")]
    ImageTooSmall,
    /// The carrier could not be decoded or encoded.
    #[error("invalid carrier image: {0}")]
    InvalidImage(#[from] CarrierError),
}
