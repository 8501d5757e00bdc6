// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Repeating-key XOR over segment bytes.
//!
//! This is obfuscation, not encryption: the key repeats and nothing
//! authenticates the result. A wrong key is only noticed through the size
//! check in [`reveal`](crate::reveal).
//!
//! Key bytes are derived from the passphrase with the same UTF-16 encoding as
//! the `type` segment and are wiped on drop.

use zeroize::Zeroizing;

use crate::stego::codec::text_to_bytes;
use crate::stego::error::StegoError;

/// A non-empty XOR key.
#[derive(Clone)]
pub struct Key(Zeroizing<Vec<u8>>);

impl Key {
    /// Wrap raw key bytes.
    ///
    /// # Errors
    /// [`StegoError::InvalidKey`] if `bytes` is empty.
    pub fn new(bytes: Vec<u8>) -> Result<Self, StegoError> {
        if bytes.is_empty() {
            return Err(StegoError::InvalidKey);
        }
        Ok(Self(Zeroizing::new(bytes)))
    }

    /// Derive a key from a passphrase: two big-endian bytes per UTF-16 unit.
    ///
    /// # Errors
    /// [`StegoError::InvalidKey`] if the passphrase is empty.
    pub fn from_passphrase(passphrase: &str) -> Result<Self, StegoError> {
        Self::new(text_to_bytes(passphrase))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Key").field("len", &self.0.len()).finish_non_exhaustive()
    }
}

/// XOR `data` against the repeating `key`.
///
/// # Errors
/// [`StegoError::InvalidKey`] if `key` is empty.
pub fn transform(key: &[u8], data: &[u8]) -> Result<Vec<u8>, StegoError> {
    let mut out = data.to_vec();
    transform_in_place(key, &mut out)?;
    Ok(out)
}

/// In-place variant of [`transform`].
pub fn transform_in_place(key: &[u8], data: &mut [u8]) -> Result<(), StegoError> {
    if key.is_empty() {
        return Err(StegoError::InvalidKey);
    }
    xor_cycle(key, data);
    Ok(())
}

fn xor_cycle(key: &[u8], data: &mut [u8]) {
    for (byte, k) in data.iter_mut().zip(key.iter().cycle()) {
        *byte ^= k;
    }
}

/// Apply the key if there is one, otherwise return the data unchanged.
pub(crate) fn apply(key: Option<&Key>, data: Vec<u8>) -> Vec<u8> {
    match key {
        Some(key) => {
            let mut data = data;
            xor_cycle(key.as_bytes(), &mut data);
            data
        }
        None => data,
    }
}
