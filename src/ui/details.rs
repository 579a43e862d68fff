// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Classroom details panel.

use crate::ui::map_view::Details;

/// Display the name and description of the highlighted classroom.
pub fn show(ui: &mut egui::Ui, details: &Details) {
    ui.heading("Classroom");
    ui.separator();
    ui.label(egui::RichText::new(details.name.as_str()).size(18.0).strong());
    ui.add_space(6.0);
    ui.label(details.description.as_str());
}
