// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Map view projection.
//!
//! Turns the session and catalog into plain data describing what the map
//! screen shows: one tab per section, one marker per classroom of the active
//! section, and the details of the highlighted classroom. The projection is
//! rebuilt from scratch every frame, so drawing never depends on what was
//! drawn before.

use crate::models::{catalog::Catalog, session::Session};

/// A section selector button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTab {
    pub id: String,
    pub title: String,
    pub active: bool,
}

/// A classroom marker on the active section's map.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: String,
    pub name: String,
    /// Position in percent of the map bounds
    pub x: f32,
    pub y: f32,
    pub highlighted: bool,
}

impl Marker {
    /// Text drawn next to the marker; only the highlighted one is labelled.
    pub fn label(&self) -> Option<&str> {
        self.highlighted.then_some(self.name.as_str())
    }
}

/// Contents of the classroom details panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Details {
    pub name: String,
    pub description: String,
}

/// Everything the map screen draws.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub section_id: String,
    pub tabs: Vec<SectionTab>,
    pub markers: Vec<Marker>,
    /// `None` hides the details panel
    pub details: Option<Details>,
}

impl MapView {
    /// Project the current session onto the catalog.
    pub fn project(session: &Session, catalog: &Catalog) -> Self {
        let active = session.active_section();
        let highlighted = session.highlighted(catalog);

        let tabs = catalog
            .sections()
            .iter()
            .map(|s| SectionTab {
                id: s.id.clone(),
                title: s.title.clone(),
                active: s.id == active,
            })
            .collect();

        let markers = catalog
            .section(active)
            .map(|section| {
                section
                    .classrooms
                    .iter()
                    .map(|c| Marker {
                        id: c.id.clone(),
                        name: c.name.clone(),
                        x: c.x,
                        y: c.y,
                        highlighted: highlighted.is_some_and(|h| h.id == c.id),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let details = highlighted.map(|c| Details {
            name: c.name.clone(),
            description: c.description.clone(),
        });

        Self {
            section_id: active.to_string(),
            tabs,
            markers,
            details,
        }
    }

    /// Title of the active section, falling back to its id.
    pub fn section_title(&self) -> &str {
        self.tabs
            .iter()
            .find(|t| t.active)
            .map_or(self.section_id.as_str(), |t| t.title.as_str())
    }

    /// The highlighted marker, if any.
    pub fn highlighted_marker(&self) -> Option<&Marker> {
        self.markers.iter().find(|m| m.highlighted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_markers_for_active_section() {
        let catalog = AppConfig::builtin().unwrap().catalog;
        let session = Session::authenticated("bob", "xboxes");

        let view = MapView::project(&session, &catalog);
        let ids: Vec<&str> = view.markers.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["x1", "x2", "x3", "x4"]);
        assert_eq!((view.markers[0].x, view.markers[0].y), (25.0, 75.0));
        assert!(view.highlighted_marker().is_none());
        assert!(view.details.is_none());

        let active: Vec<bool> = view.tabs.iter().map(|t| t.active).collect();
        assert_eq!(active, vec![false, true]);
        assert_eq!(view.section_title(), "X-Boxes");
    }

    #[test]
    fn test_highlight_label_and_details() {
        let catalog = AppConfig::builtin().unwrap().catalog;
        let mut session = Session::authenticated("bob", "maths");
        session.highlight("m3");

        let view = MapView::project(&session, &catalog);
        let marker = view.highlighted_marker().unwrap();
        assert_eq!(marker.id, "m3");
        assert_eq!(marker.label(), Some("Room E140"));
        assert_eq!(view.markers.iter().filter(|m| m.label().is_some()).count(), 1);
        assert_eq!(
            view.details,
            Some(Details {
                name: "Room E140".to_string(),
                description: "Maths classroom.".to_string(),
            })
        );
    }

    #[test]
    fn test_highlight_outside_active_section_is_not_shown() {
        let catalog = AppConfig::builtin().unwrap().catalog;
        let mut session = Session::authenticated("bob", "maths");
        session.highlight("x1");

        let view = MapView::project(&session, &catalog);
        assert!(view.highlighted_marker().is_none());
        assert!(view.details.is_none());
    }
}
