// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Payload stream framing.
//!
//! The stream is the flat byte sequence written into the carrier, one byte per
//! pixel (before repetition):
//!
//! ```text
//! [size bytes   ] minimal big-endian file size
//! [11 22 33 22 11] separator
//! [type bytes   ] UTF-16BE file extension
//! [11 22 33 22 11] separator
//! [content bytes] raw file content
//! [11 22 33 22 11] separator
//! ```
//!
//! There are no length prefixes: segment boundaries are recovered by scanning
//! for the separator. A payload that itself contains the separator cannot be
//! split again, so [`check_boundaries`] lets the encoder refuse such payloads
//! instead of embedding a stream it could never read back.

use crate::stego::error::StegoError;

/// Marker written after every segment.
pub const SEPARATOR: [u8; 5] = [11, 22, 33, 22, 11];

/// Separator length in bytes.
pub const SEPARATOR_LEN: usize = SEPARATOR.len();

/// Segments in every stream: size, type, content.
pub const SEGMENT_COUNT: usize = 3;

/// Length of the framed stream for the given segment lengths.
pub fn framed_len(segment_lens: &[usize]) -> usize {
    segment_lens.iter().sum::<usize>() + segment_lens.len() * SEPARATOR_LEN
}

/// Concatenate segments, each followed by [`SEPARATOR`].
pub fn frame<S: AsRef<[u8]>>(segments: &[S]) -> Vec<u8> {
    let lens: Vec<usize> = segments.iter().map(|s| s.as_ref().len()).collect();
    let mut out = Vec::with_capacity(framed_len(&lens));
    for segment in segments {
        out.extend_from_slice(segment.as_ref());
        out.extend_from_slice(&SEPARATOR);
    }
    out
}

/// Start offsets of separator occurrences, left to right, stopping after
/// `limit` matches.
///
/// Every index whose next five bytes equal the separator counts, so matches
/// may overlap when the data around them is adversarial.
pub fn find_separators(stream: &[u8], limit: usize) -> Vec<usize> {
    let mut starts = Vec::with_capacity(limit);
    if limit == 0 {
        return starts;
    }
    for (i, window) in stream.windows(SEPARATOR_LEN).enumerate() {
        if window == SEPARATOR {
            starts.push(i);
            if starts.len() == limit {
                break;
            }
        }
    }
    starts
}

/// Split a decoded stream back into its [`SEGMENT_COUNT`] segments.
///
/// Bytes after the last separator (unused carrier pixels) are ignored.
///
/// # Errors
/// [`StegoError::CorruptedStream`] if fewer than three separators are found.
pub fn unframe(stream: &[u8]) -> Result<Vec<Vec<u8>>, StegoError> {
    unframe_n(stream, SEGMENT_COUNT)
}

/// Split a decoded stream into exactly `count` segments.
pub fn unframe_n(stream: &[u8], count: usize) -> Result<Vec<Vec<u8>>, StegoError> {
    let starts = find_separators(stream, count);
    if starts.len() < count {
        log::warn!("found {} of {count} separators", starts.len());
        return Err(StegoError::CorruptedStream);
    }

    let mut segments = Vec::with_capacity(count);
    let mut begin = 0usize;
    for &start in &starts {
        // Overlapping matches can place a separator inside the previous one.
        let segment = stream.get(begin..start).unwrap_or_default();
        segments.push(segment.to_vec());
        begin = start + SEPARATOR_LEN;
    }
    log::trace!("separators at {starts:?}");
    Ok(segments)
}

/// Verify that scanning `stream` finds the separators exactly where
/// [`frame`] put them for segments of the given lengths.
///
/// # Errors
/// [`StegoError::SeparatorCollision`] if a segment contains the separator or
/// a segment tail combines with the following separator into an earlier
/// match.
pub fn check_boundaries(stream: &[u8], segment_lens: &[usize]) -> Result<(), StegoError> {
    let mut expected = Vec::with_capacity(segment_lens.len());
    let mut offset = 0usize;
    for &len in segment_lens {
        offset += len;
        expected.push(offset);
        offset += SEPARATOR_LEN;
    }

    let found = find_separators(stream, segment_lens.len());
    if found != expected {
        log::warn!("separator collision: expected {expected:?}, scan found {found:?}");
        return Err(StegoError::SeparatorCollision);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_layout() {
        let stream = frame(&[vec![3u8], vec![], vec![1, 2, 3]]);
        assert_eq!(
            stream,
            vec![3, 11, 22, 33, 22, 11, 11, 22, 33, 22, 11, 1, 2, 3, 11, 22, 33, 22, 11]
        );
        assert_eq!(stream.len(), 19);
        assert_eq!(framed_len(&[1, 0, 3]), 19);
    }

    #[test]
    fn frame_unframe_roundtrip() {
        let segments = vec![
            vec![0x01, 0x00],
            vec![0, b'p', 0, b'n', 0, b'g'],
            (0..=200).collect::<Vec<u8>>(),
        ];
        let stream = frame(&segments);
        assert_eq!(unframe(&stream).unwrap(), segments);
    }

    #[test]
    fn empty_segments() {
        let segments: Vec<Vec<u8>> = vec![vec![], vec![], vec![]];
        assert_eq!(unframe(&frame(&segments)).unwrap(), segments);
    }

    #[test]
    fn trailing_bytes_ignored() {
        let segments = vec![vec![5u8], vec![6], vec![7]];
        let mut stream = frame(&segments);
        stream.extend_from_slice(&[0; 40]);
        stream.extend_from_slice(&SEPARATOR);
        assert_eq!(unframe(&stream).unwrap(), segments);
    }

    #[test]
    fn separator_at_very_end_is_found() {
        // The last separator ends on the final byte of the stream.
        let stream = frame(&[vec![1u8], vec![2], vec![3]]);
        assert_eq!(find_separators(&stream, 3), vec![1, 7, 13]);
    }

    #[test]
    fn too_few_separators() {
        let mut stream = frame(&[vec![1u8], vec![2]]);
        stream.extend_from_slice(&[3, 4, 5]);
        assert!(matches!(unframe(&stream), Err(StegoError::CorruptedStream)));
        assert!(matches!(unframe(&[]), Err(StegoError::CorruptedStream)));
        assert!(matches!(unframe(&[0; 100]), Err(StegoError::CorruptedStream)));
    }

    #[test]
    fn collision_inside_segment_detected() {
        let segments = vec![vec![1u8], vec![], vec![9, 11, 22, 33, 22, 11, 9]];
        let lens: Vec<usize> = segments.iter().map(Vec::len).collect();
        let stream = frame(&segments);
        assert!(matches!(check_boundaries(&stream, &lens), Err(StegoError::SeparatorCollision)));
    }

    #[test]
    fn collision_across_boundary_detected() {
        // Content ends with the first four separator bytes: the window starting
        // at content[1] already reads 11 22 33 22 11.
        let segments = vec![vec![4u8], vec![], vec![7, 11, 22, 33, 22]];
        let lens: Vec<usize> = segments.iter().map(Vec::len).collect();
        let stream = frame(&segments);
        assert!(matches!(check_boundaries(&stream, &lens), Err(StegoError::SeparatorCollision)));
    }

    #[test]
    fn clean_boundaries_accepted() {
        let segments = vec![vec![4u8], vec![0, b't'], vec![11, 22, 33, 22, 10]];
        let lens: Vec<usize> = segments.iter().map(Vec::len).collect();
        assert!(check_boundaries(&frame(&segments), &lens).is_ok());
    }
}
