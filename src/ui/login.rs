// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Login screen.
//!
//! Username and password fields with a single error line underneath.
//! Pressing Enter in either field is the same as clicking "Log In".

use crate::auth::AuthError;
use crate::controller::{Action, Inputs};

const USERNAME_FIELD: &str = "username_field";
const PASSWORD_FIELD: &str = "password_field";

/// Display the login form.
pub fn show(ui: &mut egui::Ui, inputs: &mut Inputs, error: Option<&AuthError>) -> Option<Action> {
    let mut action = None;

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.2);
        ui.heading(
            egui::RichText::new("Campus Map")
                .size(32.0)
                .color(egui::Color32::from_gray(200)),
        );
        ui.label(
            egui::RichText::new("Log in to find your classroom")
                .size(14.0)
                .color(egui::Color32::from_gray(150)),
        );
        ui.add_space(20.0);

        let username = ui.add(
            egui::TextEdit::singleline(&mut inputs.username)
                .id(egui::Id::new(USERNAME_FIELD))
                .hint_text("Username")
                .desired_width(240.0),
        );
        ui.add_space(6.0);
        let password = ui.add(
            egui::TextEdit::singleline(&mut inputs.password)
                .id(egui::Id::new(PASSWORD_FIELD))
                .hint_text("Password")
                .password(true)
                .desired_width(240.0),
        );
        ui.add_space(10.0);

        let enter = (username.lost_focus() || password.lost_focus())
            && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui.button("Log In").clicked() || enter {
            action = Some(Action::SubmitLogin);
        }

        if let Some(error) = error {
            ui.add_space(10.0);
            ui.colored_label(egui::Color32::LIGHT_RED, error.to_string());
        }
    });

    action
}
