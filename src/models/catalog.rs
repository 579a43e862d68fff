// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Classroom catalog.
//!
//! The catalog groups classrooms by map section. Section order and the
//! order of classrooms within a section are significant: search walks them
//! in exactly this order and returns the first match.

use super::classroom::ClassroomRecord;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Reasons a catalog is rejected at load time.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("Section id must not be empty")]
    EmptySectionId,

    #[error("Duplicate section id: {0}")]
    DuplicateSection(String),

    #[error("Duplicate classroom id: {0}")]
    DuplicateClassroom(String),

    #[error("Classroom {id} is outside the map bounds ({x}, {y})")]
    OutOfBounds { id: String, x: f32, y: f32 },

    #[error("Default section {0} is not in the catalog")]
    UnknownDefaultSection(String),

    #[error("At least one accepted password is required")]
    NoAcceptedPasswords,
}

/// A named area of the campus with its own map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    /// Label shown on the section button
    pub title: String,
    pub classrooms: Vec<ClassroomRecord>,
}

/// All classrooms grouped by section, in display and search order.
///
/// Deserializes from a list of sections and is validated on the way in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Section>", into = "Vec<Section>")]
pub struct Catalog {
    sections: Vec<Section>,
}

impl TryFrom<Vec<Section>> for Catalog {
    type Error = CatalogError;

    fn try_from(sections: Vec<Section>) -> Result<Self, Self::Error> {
        Catalog::new(sections)
    }
}

impl From<Catalog> for Vec<Section> {
    fn from(catalog: Catalog) -> Self {
        catalog.sections
    }
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and out-of-bounds positions.
    pub fn new(sections: Vec<Section>) -> Result<Self, CatalogError> {
        let catalog = Self { sections };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check structural invariants.
    ///
    /// Names that collide case-insensitively are allowed but logged, since
    /// only the first one can ever be found by search.
    fn validate(&self) -> Result<(), CatalogError> {
        let mut section_ids = HashSet::new();
        let mut classroom_ids = HashSet::new();
        let mut names: HashMap<String, &str> = HashMap::new();

        for section in &self.sections {
            if section.id.is_empty() {
                return Err(CatalogError::EmptySectionId);
            }
            if !section_ids.insert(section.id.as_str()) {
                return Err(CatalogError::DuplicateSection(section.id.clone()));
            }

            for room in &section.classrooms {
                if !classroom_ids.insert(room.id.as_str()) {
                    return Err(CatalogError::DuplicateClassroom(room.id.clone()));
                }
                if !room.in_bounds() {
                    return Err(CatalogError::OutOfBounds {
                        id: room.id.clone(),
                        x: room.x,
                        y: room.y,
                    });
                }
                match names.entry(room.search_key()) {
                    Entry::Occupied(first) => log::warn!(
                        "Classroom name {:?} ({}) shadows {}; search returns the first",
                        room.name,
                        room.id,
                        first.get()
                    ),
                    Entry::Vacant(slot) => {
                        slot.insert(room.id.as_str());
                    }
                }
            }
        }

        Ok(())
    }

    /// Sections in catalog order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Look up a section by id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn contains_section(&self, id: &str) -> bool {
        self.section(id).is_some()
    }

    /// Find a classroom by id within one section.
    pub fn classroom(&self, section_id: &str, classroom_id: &str) -> Option<&ClassroomRecord> {
        self.section(section_id)?
            .classrooms
            .iter()
            .find(|c| c.id == classroom_id)
    }

    /// Total number of classrooms across all sections.
    pub fn classroom_count(&self) -> usize {
        self.sections.iter().map(|s| s.classrooms.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, rooms: Vec<ClassroomRecord>) -> Section {
        Section {
            id: id.to_string(),
            title: id.to_uppercase(),
            classrooms: rooms,
        }
    }

    #[test]
    fn test_lookup_preserves_order() {
        let catalog = Catalog::new(vec![
            section("b", vec![ClassroomRecord::new("b1", "B1", 10.0, 10.0, "")]),
            section("a", vec![ClassroomRecord::new("a1", "A1", 20.0, 20.0, "")]),
        ])
        .unwrap();

        let ids: Vec<&str> = catalog.sections().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(catalog.classroom("a", "a1").unwrap().name, "A1");
        assert!(catalog.classroom("b", "a1").is_none());
        assert_eq!(catalog.classroom_count(), 2);
    }

    #[test]
    fn test_rejects_empty_section_id() {
        let result = Catalog::new(vec![section("", vec![])]);
        assert_eq!(result, Err(CatalogError::EmptySectionId));
    }

    #[test]
    fn test_deserialize_validates() {
        let yaml = r#"
- id: a
  title: A
  classrooms:
    - { id: r1, name: One, x: 10, y: 10, description: "" }
- id: b
  title: B
  classrooms:
    - { id: r1, name: Two, x: 20, y: 20, description: "" }
"#;
        let err = serde_yaml::from_str::<Catalog>(yaml).unwrap_err();
        assert!(err.to_string().contains("Duplicate classroom id: r1"));

        let fixed = yaml.replace("id: r1, name: Two", "id: r2, name: Two");
        let catalog: Catalog = serde_yaml::from_str(&fixed).unwrap();
        assert_eq!(catalog.classroom_count(), 2);
    }

    #[test]
    fn test_rejects_duplicate_section() {
        let result = Catalog::new(vec![section("a", vec![]), section("a", vec![])]);
        assert_eq!(result, Err(CatalogError::DuplicateSection("a".to_string())));
    }

    #[test]
    fn test_rejects_duplicate_classroom_across_sections() {
        let result = Catalog::new(vec![
            section("a", vec![ClassroomRecord::new("r1", "One", 1.0, 1.0, "")]),
            section("b", vec![ClassroomRecord::new("r1", "Two", 2.0, 2.0, "")]),
        ]);
        assert_eq!(result, Err(CatalogError::DuplicateClassroom("r1".to_string())));
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        let result = Catalog::new(vec![section(
            "a",
            vec![ClassroomRecord::new("r1", "One", 101.0, 1.0, "")],
        )]);
        assert!(matches!(result, Err(CatalogError::OutOfBounds { .. })));
    }

    #[test]
    fn test_allows_colliding_names() {
        let result = Catalog::new(vec![section(
            "a",
            vec![
                ClassroomRecord::new("r1", "Lab", 1.0, 1.0, ""),
                ClassroomRecord::new("r2", "LAB", 2.0, 2.0, ""),
            ],
        )]);
        assert!(result.is_ok());
    }
}
