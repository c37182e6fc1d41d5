// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! File selection for uploads.
//!
//! The [`UploadForm`] holds files picked in the native dialog until the
//! user submits them to the library, after which the selection resets.

use crate::models::{entry::EntryId, library::Library};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// A file picked by the user but not yet part of the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub path: PathBuf,
    pub size_bytes: Option<u64>,
}

impl SelectedFile {
    pub fn new(name: String, path: PathBuf, size_bytes: Option<u64>) -> Self {
        Self {
            name,
            path,
            size_bytes,
        }
    }

    /// Build a selection entry from a path on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .with_context(|| format!("no file name in {}", path.display()))?;
        let metadata = std::fs::metadata(path)
            .with_context(|| format!("reading metadata for {}", path.display()))?;

        Ok(Self::new(name, path.to_path_buf(), Some(metadata.len())))
    }
}

/// Pending upload selection.
#[derive(Debug, Default)]
pub struct UploadForm {
    selected: Vec<SelectedFile>,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pending selection.
    pub fn select(&mut self, files: Vec<SelectedFile>) {
        log::debug!("Selected {} files", files.len());
        self.selected = files;
    }

    /// Whether the upload action should be offered.
    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn selected(&self) -> &[SelectedFile] {
        &self.selected
    }

    /// Add the pending files to the library and reset the selection.
    pub fn submit(&mut self, library: &mut Library) -> Vec<EntryId> {
        if self.selected.is_empty() {
            return Vec::new();
        }
        library.add_batch(std::mem::take(&mut self.selected))
    }
}

/// Check a path against the accepted video extensions (case-insensitive).
pub fn is_video_path(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}
