// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar with section selection and the classroom search box.

use crate::controller::{Action, Inputs};
use crate::search::SearchError;
use crate::ui::map_view::SectionTab;

const SEARCH_FIELD: &str = "search_field";

/// Display the section buttons, the signed-in user and the logout button.
pub fn show(ui: &mut egui::Ui, tabs: &[SectionTab], username: &str) -> Option<Action> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label("Sections:");

        ui.separator();

        for tab in tabs {
            if ui.selectable_label(tab.active, tab.title.as_str()).clicked() {
                action = Some(Action::SelectSection(tab.id.clone()));
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Log Out").clicked() {
                action = Some(Action::Logout);
            }
            ui.separator();
            ui.label(egui::RichText::new(username).strong());
            ui.label("Signed in as");
        });
    });

    action
}

/// Display the search box. Enter in the text field and the Search button
/// both submit the search.
pub fn show_search(
    ui: &mut egui::Ui,
    inputs: &mut Inputs,
    error: Option<&SearchError>,
) -> Option<Action> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.label("Find classroom:");

        let response = ui.add(
            egui::TextEdit::singleline(&mut inputs.search)
                .id(egui::Id::new(SEARCH_FIELD))
                .hint_text("e.g. Room E138")
                .desired_width(220.0),
        );
        let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui.button("🔍 Search").clicked() || enter {
            action = Some(Action::SubmitSearch);
        }

        if let Some(error) = error {
            ui.separator();
            ui.colored_label(egui::Color32::LIGHT_RED, error.to_string());
        }
    });

    action
}
