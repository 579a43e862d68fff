// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module lays out the login and map screens each frame, collects the
//! actions the widgets report, and hands them to the [`MapController`].

use crate::config::AppConfig;
use crate::controller::{Action, MapController};
use crate::ui::{canvas, details, login, notification, toolbar};

/// Main application state.
pub struct CampusMapApp {
    controller: MapController,
}

impl CampusMapApp {
    /// Create the application from a validated configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            controller: MapController::new(config),
        }
    }

    /// Export the catalog to a file picked by the user.
    fn export_catalog(&self, filter: &str, extensions: &[&str], file_name: &str) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter(filter, extensions)
            .set_file_name(file_name)
            .save_file()
        else {
            return;
        };

        match crate::io::serialization::export_catalog(self.controller.catalog(), &path) {
            Ok(()) => log::info!("Exported catalog to {}", path.display()),
            Err(e) => log::error!("Failed to export catalog: {:#}", e),
        }
    }

    fn menu_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    let authenticated = self.controller.session().is_authenticated();
                    ui.add_enabled_ui(authenticated, |ui| {
                        ui.menu_button("Export Catalog", |ui| {
                            if ui.button("Export as YAML...").clicked() {
                                self.export_catalog("YAML", &["yaml", "yml"], "catalog.yaml");
                                ui.close_menu();
                            }
                            if ui.button("Export as JSON...").clicked() {
                                self.export_catalog("JSON", &["json"], "catalog.json");
                                ui.close_menu();
                            }
                        });
                    });
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });
    }

    fn login_screen(&mut self, ctx: &egui::Context) -> Option<Action> {
        let error = self.controller.feedback().login_error;
        egui::CentralPanel::default()
            .show(ctx, |ui| login::show(ui, &mut self.controller.inputs, error.as_ref()))
            .inner
    }

    fn map_screen(&mut self, ctx: &egui::Context) -> Vec<Action> {
        let view = self.controller.view();
        let feedback = self.controller.feedback().clone();
        let username = self.controller.session().username().to_string();
        let mut actions = Vec::new();

        // Section buttons and search
        let toolbar_action = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| {
                let sections = toolbar::show(ui, &view.tabs, &username);
                ui.separator();
                let search = toolbar::show_search(
                    ui,
                    &mut self.controller.inputs,
                    feedback.search_error.as_ref(),
                );
                sections.or(search)
            })
            .inner;
        actions.extend(toolbar_action);

        // Details panel (right side), hidden when nothing is highlighted
        if let Some(ref highlighted) = view.details {
            egui::SidePanel::right("details")
                .default_width(250.0)
                .show(ctx, |ui| details::show(ui, highlighted));
        }

        // Main canvas (center)
        let canvas_action = egui::CentralPanel::default()
            .show(ctx, |ui| canvas::show(ui, &view))
            .inner;
        actions.extend(canvas_action);

        if feedback.notification_visible {
            actions.extend(notification::show(ctx, &username));
        }

        actions
    }
}

impl eframe::App for CampusMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.menu_bar(ctx);

        let actions = if self.controller.session().is_authenticated() {
            self.map_screen(ctx)
        } else {
            self.login_screen(ctx).into_iter().collect()
        };

        for action in actions {
            self.controller.dispatch(action);
        }
    }
}
