// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Classroom data structures.
//!
//! A classroom is a named point on a section map. Positions are stored as
//! percentages of the map bounds so they are independent of window size.

use serde::{Deserialize, Serialize};

/// A single classroom on the campus map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassroomRecord {
    /// Identifier, unique across the whole catalog
    pub id: String,
    /// Display name, also the search key
    pub name: String,
    /// Horizontal position in percent (0 = left edge)
    pub x: f32,
    /// Vertical position in percent (0 = top edge)
    pub y: f32,
    pub description: String,
}

impl ClassroomRecord {
    /// Create a classroom record.
    #[cfg(test)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        x: f32,
        y: f32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            x,
            y,
            description: description.into(),
        }
    }

    /// Check whether the position lies within the map bounds.
    pub fn in_bounds(&self) -> bool {
        (0.0..=100.0).contains(&self.x) && (0.0..=100.0).contains(&self.y)
    }

    /// Name normalized for case-insensitive comparison.
    pub fn search_key(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds_edges() {
        assert!(ClassroomRecord::new("a", "A", 0.0, 100.0, "").in_bounds());
        assert!(!ClassroomRecord::new("b", "B", -0.5, 50.0, "").in_bounds());
        assert!(!ClassroomRecord::new("c", "C", 50.0, 100.5, "").in_bounds());
    }

    #[test]
    fn test_search_key_is_lowercase() {
        let room = ClassroomRecord::new("m1", "Room E138", 65.0, 15.0, "Maths classroom.");
        assert_eq!(room.search_key(), "room e138");
    }
}
