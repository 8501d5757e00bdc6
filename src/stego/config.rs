// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Codec settings shared by hide and reveal.
//!
//! Both sides must use the same redundancy factor and key; neither is stored
//! in the image.
//!
//! The browser tool this format comes from never embeds without a key: an
//! empty passphrase field falls back to [`FALLBACK_PASSPHRASE`]. Use
//! [`StegoConfig::with_passphrase_or_fallback`] to read and write such images.

use std::num::NonZeroUsize;

use crate::stego::cipher::Key;
use crate::stego::error::StegoError;

/// Redundancy factor of the protected variant.
pub const DEFAULT_REDUNDANCY: NonZeroUsize = match NonZeroUsize::new(3) {
    Some(r) => r,
    None => unreachable!(),
};

/// Redundancy factor of the plain variant (repetition disabled).
pub const NO_REDUNDANCY: NonZeroUsize = NonZeroUsize::MIN;

/// Passphrase used in place of an empty one by
/// [`StegoConfig::with_passphrase_or_fallback`].
pub const FALLBACK_PASSPHRASE: &str = "-";

/// Redundancy factor and optional XOR key.
#[derive(Debug, Clone)]
pub struct StegoConfig {
    pub redundancy: NonZeroUsize,
    pub key: Option<Key>,
}

impl StegoConfig {
    /// No repetition, no key. Matches images written by the plain variant.
    pub fn plain() -> Self {
        Self {
            redundancy: NO_REDUNDANCY,
            key: None,
        }
    }

    /// Every byte written three times, no key.
    pub fn protected() -> Self {
        Self {
            redundancy: DEFAULT_REDUNDANCY,
            key: None,
        }
    }

    pub fn with_redundancy(mut self, redundancy: NonZeroUsize) -> Self {
        self.redundancy = redundancy;
        self
    }

    pub fn with_key(mut self, key: Key) -> Self {
        self.key = Some(key);
        self
    }

    /// Derive the key from a passphrase.
    ///
    /// # Errors
    /// [`StegoError::InvalidKey`] if the passphrase is empty.
    pub fn with_passphrase(self, passphrase: &str) -> Result<Self, StegoError> {
        Ok(self.with_key(Key::from_passphrase(passphrase)?))
    }

    /// Like [`with_passphrase`](Self::with_passphrase), but an empty
    /// passphrase selects [`FALLBACK_PASSPHRASE`] instead of failing.
    pub fn with_passphrase_or_fallback(self, passphrase: &str) -> Result<Self, StegoError> {
        if passphrase.is_empty() {
            self.with_passphrase(FALLBACK_PASSPHRASE)
        } else {
            self.with_passphrase(passphrase)
        }
    }
}

impl Default for StegoConfig {
    fn default() -> Self {
        Self::protected()
    }
}
