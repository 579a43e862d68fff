// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Campus Map
//!
//! A cross-platform desktop application for finding classrooms on a school
//! campus map, section by section or by searching for a room name.

mod app;
mod auth;
mod config;
mod controller;
mod io;
mod models;
mod search;
mod ui;
mod util;

use app::CampusMapApp;
use anyhow::Result;
use config::AppConfig;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = AppConfig::builtin()?;
    log::info!(
        "Campus map ready: {} sections, {} classrooms",
        config.catalog.sections().len(),
        config.catalog.classroom_count()
    );

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Campus Map"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Campus Map",
        options,
        Box::new(|_cc| Ok(Box::new(CampusMapApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
