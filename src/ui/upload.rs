// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Upload bar.
//!
//! Offers the file picker and, once files are selected, the upload action.

use crate::io::selection::UploadForm;

/// Result of upload bar interaction.
pub enum UploadAction {
    None,
    PickFiles,
    Submit,
}

/// Display the upload bar.
pub fn show(ui: &mut egui::Ui, form: &UploadForm) -> UploadAction {
    let mut action = UploadAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        if ui.button("📂 Choose Videos...").clicked() {
            action = UploadAction::PickFiles;
        }

        match form.selected().len() {
            0 => {
                ui.label(egui::RichText::new("No files selected").italics().weak());
            }
            1 => {
                ui.label(form.selected()[0].name.as_str());
            }
            n => {
                ui.label(format!("{} files selected", n))
                    .on_hover_text(
                        form.selected()
                            .iter()
                            .map(|f| f.name.as_str())
                            .collect::<Vec<_>>()
                            .join("\n"),
                    );
            }
        }

        if form.has_selection() && ui.button("⬆ Upload").clicked() {
            action = UploadAction::Submit;
        }
    });

    action
}
