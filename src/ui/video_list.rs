// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video list rows.
//!
//! Renders either the full library or the bookmarked snapshot. Both share
//! the same row layout and differ only in the actions offered.

use crate::io::content::ContentRef;
use crate::models::entry::{EntryId, VideoEntry};

/// Which list is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    All,
    Bookmarked,
}

/// Result of list interaction.
pub enum ListAction {
    None,
    Play(ContentRef),
    ToggleBookmark(EntryId),
    Remove(EntryId),
}

/// Display a list of entries.
pub fn show(ui: &mut egui::Ui, entries: &[VideoEntry], kind: ListKind) -> ListAction {
    let mut action = ListAction::None;

    if entries.is_empty() {
        let text = match kind {
            ListKind::All => "No videos yet. Choose some files and upload them.",
            ListKind::Bookmarked => "No bookmarked videos.",
        };
        ui.label(egui::RichText::new(text).weak());
        return action;
    }

    for entry in entries {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&entry.name).strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    match kind {
                        ListKind::All => {
                            if ui.button("🗑 Remove").clicked() {
                                action = ListAction::Remove(entry.id);
                            }
                            if ui
                                .selectable_label(entry.bookmarked, entry.bookmark_label())
                                .clicked()
                            {
                                action = ListAction::ToggleBookmark(entry.id);
                            }
                        }
                        ListKind::Bookmarked => {
                            if ui.button("Remove Bookmark").clicked() {
                                action = ListAction::ToggleBookmark(entry.id);
                            }
                        }
                    }

                    if ui.button("▶ Play").clicked() {
                        action = ListAction::Play(entry.content.clone());
                    }
                });
            });
        });
    }

    action
}
