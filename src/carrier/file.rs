// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Payload file source and revealed file naming.

use std::path::Path;

use crate::stego::HiddenFile;

/// Name stem used for revealed files.
pub const REVEALED_STEM: &str = "secret-file";

/// A file to hide: its extension and raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadFile {
    pub file_type: String,
    pub content: Vec<u8>,
}

impl PayloadFile {
    /// Build from a file name and its bytes.
    pub fn new(file_name: &str, content: Vec<u8>) -> Self {
        Self { file_type: extension_of(file_name).to_string(), content }
    }

    /// Read a file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(&name, content))
    }

    /// Declared size: the content length.
    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

/// Text after the last `.` of `file_name`, or the whole name if it has none.
pub fn extension_of(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => file_name,
    }
}

/// File name to write a revealed file under: `secret-file.<type>`.
pub fn revealed_file_name(file: &HiddenFile) -> String {
    format!("{REVEALED_STEM}.{}", file.file_type)
}
