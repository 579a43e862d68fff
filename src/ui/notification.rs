// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! One-time welcome notification shown after login.

use crate::controller::Action;

/// Display the notification in the top-right corner.
pub fn show(ctx: &egui::Context, username: &str) -> Option<Action> {
    let mut action = None;

    egui::Window::new("Welcome")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::RIGHT_TOP, [-12.0, 12.0])
        .show(ctx, |ui| {
            ui.label(format!("Hi {}!", username));
            ui.label("Pick a section to browse its map, or search for a classroom by name.");
            ui.add_space(6.0);
            if ui.button("✕ Close").clicked() {
                action = Some(Action::DismissNotification);
            }
        });

    action
}
