// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait. UI components report what the user did as action
//! values; this module turns each action into a single library update.

use crate::config::Settings;
use crate::io::{
    playback,
    selection::{self, SelectedFile, UploadForm},
};
use crate::models::library::Library;
use crate::ui::{
    filter_bar::{self, FilterAction},
    player::{self, PlayerAction},
    upload::{self, UploadAction},
    video_list::{self, ListAction, ListKind},
};
use std::path::PathBuf;

/// Main application state.
pub struct VidshelfApp {
    /// Video library for this session
    library: Library,

    /// Files picked but not yet uploaded
    upload_form: UploadForm,

    /// Runtime settings
    settings: Settings,
}

impl Default for VidshelfApp {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl VidshelfApp {
    /// Create a new application instance.
    pub fn new(settings: Settings) -> Self {
        Self {
            library: Library::new(),
            upload_form: UploadForm::new(),
            settings,
        }
    }

    /// Open the native picker and stage the chosen files.
    fn pick_files(&mut self) {
        let Some(paths) = rfd::FileDialog::new()
            .add_filter("Videos", self.settings.video_extensions.as_slice())
            .pick_files()
        else {
            log::debug!("File dialog cancelled");
            return;
        };

        self.stage_files(paths);
    }

    /// Stage picked paths for upload, skipping unreadable ones.
    fn stage_files(&mut self, paths: Vec<PathBuf>) {
        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            if !selection::is_video_path(&path, &self.settings.video_extensions) {
                log::warn!("{} does not look like a video", path.display());
            }
            match SelectedFile::from_path(&path) {
                Ok(file) => files.push(file),
                Err(e) => log::error!("Skipping {}: {:#}", path.display(), e),
            }
        }
        self.upload_form.select(files);
    }

    fn handle_list_action(&mut self, action: ListAction) {
        match action {
            ListAction::Play(content) => self.library.open_modal(content),
            ListAction::ToggleBookmark(id) => {
                if self.library.toggle_bookmark(id).is_none() {
                    log::warn!("No entry with id {}", id);
                }
            }
            ListAction::Remove(id) => {
                self.library.remove(id);
            }
            ListAction::None => {}
        }
    }

    /// Render the player modal if a play target is set.
    fn show_player(&mut self, ctx: &egui::Context) {
        let Some(content) = self.library.playing().cloned() else {
            return;
        };

        let action = player::show(
            ctx,
            &content,
            self.library.entry_for(&content),
            self.library.resolve(&content),
        );

        match action {
            PlayerAction::Launch => {
                if let Some(source) = self.library.resolve(&content) {
                    if let Err(e) = playback::launch(source) {
                        log::error!("Failed to play {}: {:#}", content, e);
                    }
                }
            }
            PlayerAction::Close => self.library.close_modal(),
            PlayerAction::None => {}
        }
    }
}

impl eframe::App for VidshelfApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Choose Videos...").clicked() {
                        self.pick_files();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Upload bar
        let upload_action = egui::TopBottomPanel::top("upload_bar")
            .show(ctx, |ui| upload::show(ui, &self.upload_form))
            .inner;

        match upload_action {
            UploadAction::PickFiles => self.pick_files(),
            UploadAction::Submit => {
                self.upload_form.submit(&mut self.library);
            }
            UploadAction::None => {}
        }

        // Filter buttons
        let filter_action = egui::TopBottomPanel::bottom("filter_bar")
            .show(ctx, |ui| {
                ui.add_space(4.0);
                let action = filter_bar::show(ui, self.library.is_showing_bookmarked());
                ui.add_space(4.0);
                action
            })
            .inner;

        match filter_action {
            FilterAction::ShowAll => self.library.show_all(),
            FilterAction::ShowBookmarked => self.library.materialize_bookmarked(),
            FilterAction::None => {}
        }

        // Bookmarked snapshot (right side)
        let mut bookmark_action = ListAction::None;
        if self.library.is_showing_bookmarked() {
            bookmark_action = egui::SidePanel::right("bookmarked")
                .default_width(300.0)
                .show(ctx, |ui| {
                    ui.heading("Bookmarked Videos");
                    ui.separator();
                    egui::ScrollArea::vertical()
                        .id_source("bookmarked_list")
                        .show(ui, |ui| {
                            video_list::show(ui, self.library.bookmarked_view(), ListKind::Bookmarked)
                        })
                        .inner
                })
                .inner;
        }
        self.handle_list_action(bookmark_action);

        // Main library list (center)
        let list_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                ui.heading("My Video Library");
                ui.label(
                    egui::RichText::new(format!("{} videos", self.library.len())).weak(),
                );
                ui.separator();
                egui::ScrollArea::vertical()
                    .id_source("library_list")
                    .show(ui, |ui| video_list::show(ui, self.library.entries(), ListKind::All))
                    .inner
            })
            .inner;
        self.handle_list_action(list_action);

        self.show_player(ctx);
    }
}
