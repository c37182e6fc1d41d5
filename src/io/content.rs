// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Ephemeral content references.
//!
//! A [`ContentRef`] stands in for the bytes of a selected file while it is
//! part of the library. References are minted and released by a
//! [`ContentStore`]; a released reference no longer resolves.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// Opaque handle to a registered file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentRef(u64);

impl fmt::Display for ContentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "blob:vidshelf/{}", self.0)
    }
}

/// What a content reference points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSource {
    pub path: PathBuf,
    pub size_bytes: Option<u64>,
}

/// Registry of live content references.
#[derive(Debug, Default)]
pub struct ContentStore {
    next: u64,
    live: HashMap<ContentRef, ContentSource>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source and mint a fresh reference for it.
    ///
    /// References are never reused, even after being revoked.
    pub fn register(&mut self, source: ContentSource) -> ContentRef {
        let content = ContentRef(self.next);
        self.next += 1;
        log::debug!("Registered {} -> {}", content, source.path.display());
        self.live.insert(content.clone(), source);
        content
    }

    pub fn resolve(&self, content: &ContentRef) -> Option<&ContentSource> {
        self.live.get(content)
    }

    /// Release a reference. Returns `true` if it was still live.
    pub fn revoke(&mut self, content: &ContentRef) -> bool {
        let released = self.live.remove(content).is_some();
        if released {
            log::debug!("Revoked {}", content);
        }
        released
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}
