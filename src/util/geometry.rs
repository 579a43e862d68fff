// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides conversions between map percentages (0 to 100 on
//! each axis) and screen coordinates inside the drawn map rectangle.

use egui::{Pos2, Rect};

/// Convert a map position in percent to a screen position.
pub fn percent_to_screen(x: f32, y: f32, map_rect: Rect) -> Pos2 {
    egui::pos2(
        map_rect.min.x + x / 100.0 * map_rect.width(),
        map_rect.min.y + y / 100.0 * map_rect.height(),
    )
}

/// Convert a screen position to a map position in percent.
pub fn screen_to_percent(pos: Pos2, map_rect: Rect) -> (f32, f32) {
    (
        (pos.x - map_rect.min.x) / map_rect.width() * 100.0,
        (pos.y - map_rect.min.y) / map_rect.height() * 100.0,
    )
}

/// Largest rectangle with the given aspect ratio (width / height) that fits
/// centered inside `available`.
pub fn fit_rect(available: Rect, aspect: f32) -> Rect {
    let available_aspect = available.width() / available.height();

    let size = if aspect > available_aspect {
        // Map is wider - fit to width
        egui::vec2(available.width(), available.width() / aspect)
    } else {
        // Map is taller - fit to height
        egui::vec2(available.height() * aspect, available.height())
    };

    Rect::from_center_size(available.center(), size)
}
