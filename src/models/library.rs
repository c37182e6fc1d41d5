// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Library state management.
//!
//! The [`Library`] owns every entry, the bookmarked snapshot, the active
//! view and the modal play target. All updates go through its methods so
//! the state can be exercised without any rendering layer.

use super::entry::{EntryId, VideoEntry};
use crate::io::content::{ContentRef, ContentSource, ContentStore};
use crate::io::selection::SelectedFile;

/// In-memory video library for the current session.
#[derive(Debug, Default)]
pub struct Library {
    /// All entries in insertion order
    entries: Vec<VideoEntry>,

    /// Bookmarked snapshot, refreshed only by `materialize_bookmarked`
    bookmarked: Vec<VideoEntry>,

    /// Whether the bookmarked snapshot is displayed
    showing_bookmarked: bool,

    /// Content currently shown in the player modal
    playing: Option<ContentRef>,

    /// Next id to hand out, shared across batches
    next_id: u64,

    /// Live content references owned by entries
    content: ContentStore,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry per selected file and return the assigned ids.
    pub fn add_batch<I>(&mut self, files: I) -> Vec<EntryId>
    where
        I: IntoIterator<Item = SelectedFile>,
    {
        let mut ids = Vec::new();
        for file in files {
            let id = EntryId(self.next_id);
            self.next_id += 1;

            let content = self.content.register(ContentSource {
                path: file.path,
                size_bytes: file.size_bytes,
            });
            self.entries.push(VideoEntry::new(id, file.name, content));
            ids.push(id);
        }

        if !ids.is_empty() {
            log::info!("Added {} videos, total: {}", ids.len(), self.entries.len());
        }
        ids
    }

    /// Flip the bookmark flag of an entry and return its new value.
    ///
    /// The bookmarked snapshot is left untouched.
    pub fn toggle_bookmark(&mut self, id: EntryId) -> Option<bool> {
        let entry = self.entries.iter_mut().find(|e| e.id == id)?;
        entry.bookmarked = !entry.bookmarked;
        log::info!("Entry {} bookmarked: {}", id, entry.bookmarked);
        Some(entry.bookmarked)
    }

    /// Snapshot the currently bookmarked entries and switch to that view.
    pub fn materialize_bookmarked(&mut self) {
        self.bookmarked = self
            .entries
            .iter()
            .filter(|e| e.bookmarked)
            .cloned()
            .collect();
        self.showing_bookmarked = true;
        log::info!("Showing {} bookmarked videos", self.bookmarked.len());
    }

    /// Hide the bookmarked view. The snapshot is kept.
    pub fn show_all(&mut self) {
        self.showing_bookmarked = false;
        log::info!("Showing all videos");
    }

    pub fn open_modal(&mut self, content: ContentRef) {
        log::info!("Playing {}", content);
        self.playing = Some(content);
    }

    pub fn close_modal(&mut self) {
        if let Some(content) = self.playing.take() {
            log::info!("Closed player for {}", content);
        }
    }

    /// Remove an entry and release its content reference.
    pub fn remove(&mut self, id: EntryId) -> Option<VideoEntry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        let entry = self.entries.remove(index);

        self.content.revoke(&entry.content);
        self.bookmarked.retain(|e| e.id != id);
        if self.playing.as_ref() == Some(&entry.content) {
            self.playing = None;
        }

        log::info!(
            "Removed entry {}, total: {}, live content: {}",
            id,
            self.entries.len(),
            self.content.live_count()
        );
        Some(entry)
    }

    pub fn entries(&self) -> &[VideoEntry] {
        &self.entries
    }

    pub fn bookmarked_view(&self) -> &[VideoEntry] {
        &self.bookmarked
    }

    pub fn is_showing_bookmarked(&self) -> bool {
        self.showing_bookmarked
    }

    pub fn playing(&self) -> Option<&ContentRef> {
        self.playing.as_ref()
    }

    pub fn get(&self, id: EntryId) -> Option<&VideoEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Find the entry that owns a content reference.
    pub fn entry_for(&self, content: &ContentRef) -> Option<&VideoEntry> {
        self.entries.iter().find(|e| &e.content == content)
    }

    pub fn resolve(&self, content: &ContentRef) -> Option<&ContentSource> {
        self.content.resolve(content)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::PathBuf;

    fn files(names: &[&str]) -> Vec<SelectedFile> {
        names
            .iter()
            .map(|name| SelectedFile::new(name.to_string(), PathBuf::from(name), None))
            .collect()
    }

    fn library_with(names: &[&str]) -> (Library, Vec<EntryId>) {
        let mut library = Library::new();
        let ids = library.add_batch(files(names));
        (library, ids)
    }

    #[test]
    fn test_add_batch_appends_unbookmarked_entries() {
        let (mut library, _) = library_with(&["a.mp4", "b.mp4"]);
        library.toggle_bookmark(library.entries()[0].id);

        let added = library.add_batch(files(&["c.mp4", "d.mp4", "e.mp4"]));

        assert_eq!(added.len(), 3);
        assert_eq!(library.len(), 5);
        let names: Vec<&str> = library.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a.mp4", "b.mp4", "c.mp4", "d.mp4", "e.mp4"]);
        assert!(library.entries()[0].bookmarked);
        assert!(library.entries()[2..].iter().all(|e| !e.bookmarked));
    }

    #[test]
    fn test_ids_unique_across_batches() {
        let mut library = Library::new();
        library.add_batch(files(&["a.mp4", "b.mp4"]));
        library.add_batch(files(&["c.mp4", "d.mp4"]));
        library.add_batch(files(&["e.mp4"]));

        let ids: HashSet<EntryId> = library.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let (mut library, ids) = library_with(&["a.mp4", "b.mp4"]);
        library.remove(ids[1]);
        let new_ids = library.add_batch(files(&["c.mp4"]));

        assert!(!ids.contains(&new_ids[0]));
    }

    #[test]
    fn test_empty_batch_is_noop() {
        let (mut library, _) = library_with(&["a.mp4"]);
        let before: Vec<VideoEntry> = library.entries().to_vec();

        let added = library.add_batch(Vec::new());

        assert!(added.is_empty());
        assert_eq!(library.entries(), before.as_slice());
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        let (mut library, ids) = library_with(&["a.mp4"]);

        assert_eq!(library.toggle_bookmark(ids[0]), Some(true));
        assert_eq!(library.toggle_bookmark(ids[0]), Some(false));
        assert!(!library.get(ids[0]).unwrap().bookmarked);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let (mut library, _) = library_with(&["a.mp4"]);
        assert_eq!(library.toggle_bookmark(EntryId(99)), None);
        assert!(!library.entries()[0].bookmarked);
    }

    #[test]
    fn test_materialize_keeps_relative_order() {
        let (mut library, ids) = library_with(&["0", "1", "2", "3", "4", "5"]);
        library.toggle_bookmark(ids[4]);
        library.toggle_bookmark(ids[2]);

        library.materialize_bookmarked();

        let view: Vec<EntryId> = library.bookmarked_view().iter().map(|e| e.id).collect();
        assert_eq!(view, vec![ids[2], ids[4]]);
        assert!(library.is_showing_bookmarked());
    }

    #[test]
    fn test_snapshot_frozen_until_rematerialized() {
        let (mut library, ids) = library_with(&["a.mp4", "b.mp4"]);
        library.toggle_bookmark(ids[0]);
        library.materialize_bookmarked();

        library.toggle_bookmark(ids[0]);
        library.toggle_bookmark(ids[1]);

        assert_eq!(library.bookmarked_view().len(), 1);
        assert_eq!(library.bookmarked_view()[0].id, ids[0]);
        assert!(library.bookmarked_view()[0].bookmarked);

        library.materialize_bookmarked();
        assert_eq!(library.bookmarked_view().len(), 1);
        assert_eq!(library.bookmarked_view()[0].id, ids[1]);
    }

    #[test]
    fn test_show_all_keeps_snapshot() {
        let (mut library, ids) = library_with(&["a.mp4"]);
        library.toggle_bookmark(ids[0]);
        library.materialize_bookmarked();

        library.show_all();

        assert!(!library.is_showing_bookmarked());
        assert_eq!(library.bookmarked_view().len(), 1);
    }

    #[test]
    fn test_open_and_close_modal() {
        let (mut library, _) = library_with(&["a.mp4", "b.mp4"]);
        let first = library.entries()[0].content.clone();
        let second = library.entries()[1].content.clone();

        library.open_modal(first);
        library.open_modal(second.clone());
        assert_eq!(library.playing(), Some(&second));

        library.close_modal();
        assert_eq!(library.playing(), None);

        library.close_modal();
        assert_eq!(library.playing(), None);
    }

    #[test]
    fn test_remove_releases_content() {
        let (mut library, ids) = library_with(&["a.mp4", "b.mp4"]);
        library.toggle_bookmark(ids[0]);
        library.materialize_bookmarked();
        let content = library.get(ids[0]).unwrap().content.clone();
        library.open_modal(content.clone());

        let removed = library.remove(ids[0]).unwrap();

        assert_eq!(removed.name, "a.mp4");
        assert!(library.resolve(&content).is_none());
        assert!(library.bookmarked_view().is_empty());
        assert_eq!(library.playing(), None);
        assert_eq!(library.len(), 1);
        assert!(library.remove(ids[0]).is_none());
    }

    #[test]
    fn test_resolve_and_entry_for() {
        let mut library = Library::new();
        library.add_batch(vec![SelectedFile::new(
            "clip.webm".to_string(),
            PathBuf::from("/videos/clip.webm"),
            Some(1024),
        )]);
        let entry = &library.entries()[0];

        let source = library.resolve(&entry.content).unwrap();
        assert_eq!(source.path, PathBuf::from("/videos/clip.webm"));
        assert_eq!(source.size_bytes, Some(1024));
        assert_eq!(library.entry_for(&entry.content).unwrap().id, entry.id);
    }
}
