// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video entry data structures.

use crate::io::content::ContentRef;
use std::fmt;

/// Session-local entry identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One video in the library.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoEntry {
    pub id: EntryId,
    pub name: String,
    pub content: ContentRef,
    pub bookmarked: bool,
}

impl VideoEntry {
    /// Create a new, unbookmarked entry.
    pub fn new(id: EntryId, name: String, content: ContentRef) -> Self {
        Self {
            id,
            name,
            content,
            bookmarked: false,
        }
    }

    /// Label for the bookmark toggle in the primary list.
    pub fn bookmark_label(&self) -> &'static str {
        if self.bookmarked {
            "Bookmarked"
        } else {
            "Add to Bookmark"
        }
    }
}
