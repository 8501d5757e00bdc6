// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Repetition coding with hard majority voting.
//!
//! Every byte of the framed stream is written to `r` consecutive pixels. On
//! extraction each group of `r` samples is collapsed back to one byte by
//! majority vote, which masks up to `(r - 1) / 2` damaged samples per group.

use std::num::NonZeroUsize;

/// Repeat every byte `r` times, keeping order.
pub fn expand(data: &[u8], r: NonZeroUsize) -> Vec<u8> {
    let r = r.get();
    let mut out = Vec::with_capacity(data.len() * r);
    for &byte in data {
        out.extend(std::iter::repeat(byte).take(r));
    }
    out
}

/// Collapse groups of `r` samples back to one byte each.
///
/// Trailing samples that do not fill a complete group are discarded.
pub fn collapse(samples: &[u8], r: NonZeroUsize) -> Vec<u8> {
    samples.chunks_exact(r.get()).map(majority_vote).collect()
}

/// Most frequent value in `group`.
///
/// A single left-to-right scan counts occurrences; the result only changes
/// when a value's count strictly exceeds the best count so far, so ties go to
/// the value that reached that count first. Returns 0 for an empty group.
pub fn majority_vote(group: &[u8]) -> u8 {
    let Some(&first) = group.first() else {
        return 0;
    };
    if group.iter().all(|&b| b == first) {
        return first;
    }

    let mut counts = [0usize; 256];
    let mut best = first;
    let mut best_count = 0;
    for &b in group {
        let c = &mut counts[b as usize];
        *c += 1;
        if *c > best_count {
            best_count = *c;
            best = b;
        }
    }
    best
}

/// Number of damaged samples per group that majority voting always masks.
pub fn tolerated_errors(r: NonZeroUsize) -> usize {
    (r.get() - 1) / 2
}
