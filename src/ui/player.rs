// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Player modal.
//!
//! Shown while a play target is set. The video itself is handed to the
//! system player; this window shows what is bound and how to close it.

use crate::io::content::{ContentRef, ContentSource};
use crate::models::entry::VideoEntry;
use crate::util::format::format_file_size;

/// Result of player modal interaction.
pub enum PlayerAction {
    None,
    Launch,
    Close,
}

/// Display the player modal for `content`.
pub fn show(
    ctx: &egui::Context,
    content: &ContentRef,
    entry: Option<&VideoEntry>,
    source: Option<&ContentSource>,
) -> PlayerAction {
    let mut action = PlayerAction::None;
    let mut open = true;

    let title = entry.map(|e| e.name.as_str()).unwrap_or("Player");

    egui::Window::new(title)
        .id(egui::Id::new("player_modal"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(360.0);

            match source {
                Some(source) => {
                    ui.label(
                        egui::RichText::new(source.path.display().to_string())
                            .monospace()
                            .small(),
                    );
                    if let Some(size) = source.size_bytes {
                        ui.label(egui::RichText::new(format_file_size(size)).weak());
                    }
                    ui.label(egui::RichText::new(content.to_string()).weak().small());

                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        if ui.button("▶ Play").clicked() {
                            action = PlayerAction::Launch;
                        }
                        if ui.button("✕ Close").clicked() {
                            action = PlayerAction::Close;
                        }
                    });
                }
                None => {
                    ui.label(
                        egui::RichText::new("This content is no longer available.")
                            .color(egui::Color32::from_rgb(240, 80, 80)),
                    );
                    ui.add_space(10.0);
                    if ui.button("✕ Close").clicked() {
                        action = PlayerAction::Close;
                    }
                }
            }
        });

    if !open || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        action = PlayerAction::Close;
    }

    action
}
