// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Classroom search.
//!
//! Exact, case-insensitive name lookup across every section. Sections are
//! visited in catalog order and classrooms in section order; the first
//! match wins.

use crate::models::catalog::Catalog;
use crate::models::classroom::ClassroomRecord;
use thiserror::Error;

/// A classroom found by search, with the section that owns it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit<'a> {
    pub classroom: &'a ClassroomRecord,
    pub section_id: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Holds the query exactly as the user typed it.
    #[error("\"{0}\" not found. Please try another classroom name.")]
    NotFound(String),
}

/// Find the classroom whose name equals `query`, ignoring case and
/// surrounding whitespace.
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Result<SearchHit<'a>, SearchError> {
    let needle = query.trim().to_lowercase();

    catalog
        .sections()
        .iter()
        .find_map(|section| {
            section
                .classrooms
                .iter()
                .find(|c| c.search_key() == needle)
                .map(|classroom| SearchHit {
                    classroom,
                    section_id: section.id.as_str(),
                })
        })
        .ok_or_else(|| SearchError::NotFound(query.to_string()))
}
