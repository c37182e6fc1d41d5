// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video Shelf
//!
//! A cross-platform desktop application for collecting local video files,
//! playing them and keeping a list of bookmarks for the current session.

mod app;
mod config;
mod io;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::VidshelfApp;
use config::Settings;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let settings = Settings::from_env();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(settings.window_size)
            .with_min_inner_size(settings.min_window_size)
            .with_title("Video Shelf"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Video Shelf",
        options,
        Box::new(|_cc| Ok(Box::new(VidshelfApp::new(settings)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
