// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Map controller.
//!
//! Owns the session, the text the user has typed and the messages shown
//! back to them. Every user input arrives as an [`Action`] and goes through
//! [`MapController::dispatch`]; the screens only read state and emit
//! actions, and the map itself is drawn from [`MapController::view`].

use crate::auth::{AuthError, AuthGate};
use crate::config::AppConfig;
use crate::models::{catalog::Catalog, session::Session};
use crate::search::{self, SearchError};
use crate::ui::map_view::MapView;

/// A discrete user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SubmitLogin,
    Logout,
    SelectSection(String),
    /// Search button or Enter in the search field
    SubmitSearch,
    ClickMarker(String),
    DismissNotification,
}

/// Text fields bound to the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inputs {
    pub username: String,
    pub password: String,
    pub search: String,
}

/// Messages shown back to the user. Each is shown or hidden independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    pub login_error: Option<AuthError>,
    pub search_error: Option<SearchError>,
    pub notification_visible: bool,
}

/// Applies user actions to the session.
pub struct MapController {
    catalog: Catalog,
    gate: AuthGate,
    session: Session,
    feedback: Feedback,
    /// Current contents of the text fields
    pub inputs: Inputs,
}

impl MapController {
    /// Create a controller showing the login screen.
    pub fn new(config: AppConfig) -> Self {
        let gate = AuthGate::new(config.accepted_passwords, config.default_section);
        Self {
            session: Session::anonymous(gate.default_section()),
            catalog: config.catalog,
            gate,
            feedback: Feedback::default(),
            inputs: Inputs::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Projection of the current state for the map screen.
    pub fn view(&self) -> MapView {
        MapView::project(&self.session, &self.catalog)
    }

    /// Apply one user action.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::SubmitLogin => self.login(),
            Action::Logout => self.logout(),
            Action::DismissNotification => {
                self.feedback.notification_visible = false;
                log::debug!("Notification dismissed");
            }
            _ if !self.session.is_authenticated() => {
                log::warn!("Ignoring {:?} without a logged-in user", action);
            }
            Action::SelectSection(id) => self.switch_section(&id),
            Action::SubmitSearch => self.submit_search(),
            Action::ClickMarker(id) => self.click_marker(&id),
        }
    }

    fn login(&mut self) {
        self.feedback.login_error = None;

        match self.gate.login(&self.inputs.username, &self.inputs.password) {
            Ok(session) => {
                log::info!("User {} logged in", session.username());
                self.session = session;
                self.feedback.notification_visible = true;
            }
            Err(e) => {
                log::warn!("Login refused for {:?}: {}", self.inputs.username.trim(), e);
                self.feedback.login_error = Some(e);
            }
        }
    }

    fn logout(&mut self) {
        if self.session.is_authenticated() {
            log::info!("User {} logged out", self.session.username());
        }
        self.session = Session::anonymous(self.gate.default_section());
        self.inputs = Inputs::default();
        self.feedback = Feedback::default();
    }

    /// Show another section. Unknown section ids are ignored.
    fn switch_section(&mut self, section_id: &str) {
        if !self.catalog.contains_section(section_id) {
            log::warn!("Unknown section: {}", section_id);
            return;
        }
        self.session.switch_section(section_id);
        log::info!("Switched to section {}", section_id);
    }

    fn submit_search(&mut self) {
        self.feedback.search_error = None;

        match search::search(&self.catalog, &self.inputs.search) {
            Ok(hit) => {
                log::info!("Found {} in section {}", hit.classroom.name, hit.section_id);
                self.session.switch_section(hit.section_id);
                self.session.highlight(hit.classroom.id.as_str());
            }
            Err(e) => {
                log::warn!("{}", e);
                self.session.clear_highlight();
                self.feedback.search_error = Some(e);
            }
        }
    }

    fn click_marker(&mut self, classroom_id: &str) {
        let section = self.session.active_section();
        if self.catalog.classroom(section, classroom_id).is_none() {
            log::warn!("No classroom {} in section {}", classroom_id, section);
            return;
        }

        log::debug!("Marker {} clicked", classroom_id);
        self.session.highlight(classroom_id);
        self.inputs.search.clear();
        self.feedback.search_error = None;
    }
}
