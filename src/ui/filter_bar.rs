// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! View filter buttons.

/// Result of filter bar interaction.
pub enum FilterAction {
    None,
    ShowAll,
    ShowBookmarked,
}

/// Display the view filter buttons.
pub fn show(ui: &mut egui::Ui, showing_bookmarked: bool) -> FilterAction {
    let mut action = FilterAction::None;

    ui.horizontal(|ui| {
        if ui.selectable_label(!showing_bookmarked, "Show All Videos").clicked() {
            action = FilterAction::ShowAll;
        }
        // Always clickable: clicking again refreshes the snapshot
        if ui.selectable_label(showing_bookmarked, "Show Bookmarked Videos").clicked() {
            action = FilterAction::ShowBookmarked;
        }
    });

    action
}
