// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Map canvas.
//!
//! Draws the active section's map with one clickable marker per classroom.
//! The highlighted classroom gets a larger marker and a name label.

use crate::controller::Action;
use crate::ui::map_view::{MapView, Marker};
use crate::util::geometry::{fit_rect, percent_to_screen, screen_to_percent};

/// Width / height of a section map.
const MAP_ASPECT: f32 = 4.0 / 3.0;

const MARKER_RADIUS: f32 = 8.0;
const HIGHLIGHT_RADIUS: f32 = 12.0;

/// Display the map and handle marker clicks.
pub fn show(ui: &mut egui::Ui, view: &MapView) -> Option<Action> {
    let mut action = None;
    let mut hover_percent = None;

    let available_size = (ui.available_size() - egui::vec2(0.0, 24.0)).max(egui::Vec2::ZERO);

    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        let (area, background) = ui.allocate_exact_size(available_size, egui::Sense::hover());
        let map_rect = fit_rect(area.shrink(8.0), MAP_ASPECT);
        let painter = ui.painter_at(area);

        draw_map_background(&painter, map_rect, view.section_title());

        if let Some(pos) = background.hover_pos() {
            if map_rect.contains(pos) {
                hover_percent = Some(screen_to_percent(pos, map_rect));
            }
        }

        // Highlighted marker last so it stays on top
        let markers = view
            .markers
            .iter()
            .filter(|m| !m.highlighted)
            .chain(view.highlighted_marker());

        for marker in markers {
            if marker_widget(ui, &painter, marker, map_rect) {
                action = Some(Action::ClickMarker(marker.id.clone()));
            }
        }
    });

    ui.horizontal(|ui| {
        ui.label(format!("{} classrooms", view.markers.len()));
        if let Some((x, y)) = hover_percent {
            ui.separator();
            ui.label(format!("{:.0}%, {:.0}%", x, y));
        }
    });

    action
}

/// Draw one marker and report whether it was clicked.
fn marker_widget(
    ui: &mut egui::Ui,
    painter: &egui::Painter,
    marker: &Marker,
    map_rect: egui::Rect,
) -> bool {
    let center = percent_to_screen(marker.x, marker.y, map_rect);
    let radius = if marker.highlighted {
        HIGHLIGHT_RADIUS
    } else {
        MARKER_RADIUS
    };

    let rect = egui::Rect::from_center_size(center, egui::vec2(radius, radius) * 2.0);
    let response = ui
        .interact(rect, ui.id().with(("marker", &marker.id)), egui::Sense::click())
        .on_hover_text(marker.name.as_str());

    draw_marker(painter, marker, center, radius, response.hovered());
    response.clicked()
}

/// Draw the section outline with a light grid.
fn draw_map_background(painter: &egui::Painter, map_rect: egui::Rect, title: &str) {
    painter.rect_filled(map_rect, 4.0, egui::Color32::from_gray(235));

    let grid = egui::Stroke::new(1.0, egui::Color32::from_gray(215));
    for step in 1..10 {
        let t = step as f32 * 10.0;
        let top = percent_to_screen(t, 0.0, map_rect);
        let bottom = percent_to_screen(t, 100.0, map_rect);
        painter.line_segment([top, bottom], grid);
        let left = percent_to_screen(0.0, t, map_rect);
        let right = percent_to_screen(100.0, t, map_rect);
        painter.line_segment([left, right], grid);
    }

    painter.rect_stroke(map_rect, 4.0, egui::Stroke::new(2.0, egui::Color32::from_gray(120)));
    painter.text(
        map_rect.left_top() + egui::vec2(10.0, 8.0),
        egui::Align2::LEFT_TOP,
        title,
        egui::FontId::proportional(14.0),
        egui::Color32::from_gray(110),
    );
}

/// Draw a single classroom marker.
fn draw_marker(
    painter: &egui::Painter,
    marker: &Marker,
    center: egui::Pos2,
    radius: f32,
    hovered: bool,
) {
    let fill = if marker.highlighted {
        egui::Color32::from_rgb(220, 50, 47)
    } else if hovered {
        egui::Color32::from_rgb(38, 139, 210)
    } else {
        egui::Color32::from_rgb(42, 98, 160)
    };

    if marker.highlighted {
        painter.circle_stroke(
            center,
            radius + 5.0,
            egui::Stroke::new(2.0, fill.linear_multiply(0.5)),
        );
    }
    painter.circle_filled(center, radius, fill);
    painter.circle_stroke(center, radius, egui::Stroke::new(1.0, egui::Color32::BLACK));

    if let Some(label) = marker.label() {
        let anchor = center - egui::vec2(0.0, radius + 6.0);
        let galley = painter.layout_no_wrap(
            label.to_string(),
            egui::FontId::proportional(14.0),
            egui::Color32::WHITE,
        );
        let label_center = anchor - egui::vec2(0.0, galley.size().y / 2.0);
        let background = egui::Rect::from_center_size(label_center, galley.size()).expand(4.0);
        painter.rect_filled(background, 3.0, egui::Color32::from_black_alpha(200));
        painter.galley(background.min + egui::vec2(4.0, 4.0), galley, egui::Color32::WHITE);
    }
}
