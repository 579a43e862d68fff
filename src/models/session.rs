// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Session state.
//!
//! Tracks who is logged in, which section is on screen, and which classroom
//! (if any) is highlighted. The highlight always belongs to the active
//! section: every section change clears it.

use super::catalog::Catalog;
use super::classroom::ClassroomRecord;

/// State of the current viewing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    username: String,
    active_section: String,
    /// Id of the highlighted classroom within `active_section`
    highlighted: Option<String>,
}

impl Session {
    /// An unauthenticated session showing the given section.
    pub fn anonymous(default_section: impl Into<String>) -> Self {
        Self {
            username: String::new(),
            active_section: default_section.into(),
            highlighted: None,
        }
    }

    /// A session for a user who has passed the auth gate.
    pub fn authenticated(username: impl Into<String>, default_section: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::anonymous(default_section)
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn is_authenticated(&self) -> bool {
        !self.username.is_empty()
    }

    pub fn active_section(&self) -> &str {
        &self.active_section
    }

    pub fn highlighted_id(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }

    /// Resolve the highlighted classroom against the catalog.
    pub fn highlighted<'a>(&self, catalog: &'a Catalog) -> Option<&'a ClassroomRecord> {
        catalog.classroom(&self.active_section, self.highlighted_id()?)
    }

    /// Make `section_id` active and drop any highlight.
    pub fn switch_section(&mut self, section_id: impl Into<String>) {
        self.active_section = section_id.into();
        self.highlighted = None;
    }

    /// Highlight a classroom in the active section.
    pub fn highlight(&mut self, classroom_id: impl Into<String>) {
        self.highlighted = Some(classroom_id.into());
    }

    pub fn clear_highlight(&mut self) {
        self.highlighted = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_is_not_authenticated() {
        let session = Session::anonymous("maths");
        assert!(!session.is_authenticated());
        assert_eq!(session.username(), "");
        assert_eq!(session.active_section(), "maths");
        assert_eq!(session.highlighted_id(), None);
    }

    #[test]
    fn test_switch_section_clears_highlight() {
        let mut session = Session::authenticated("bob", "maths");
        session.highlight("m1");
        assert_eq!(session.highlighted_id(), Some("m1"));

        session.switch_section("xboxes");
        assert_eq!(session.active_section(), "xboxes");
        assert_eq!(session.highlighted_id(), None);

        session.highlight("x1");
        session.switch_section("xboxes");
        assert_eq!(session.highlighted_id(), None);
    }
}
