// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Login gate.
//!
//! A shared-password check in front of the map. This is a placeholder trust
//! check and not real authentication: there is no hashing, no rate limiting
//! and no session expiry.

use crate::models::session::Session;
use std::collections::HashSet;
use thiserror::Error;

/// Why a login attempt was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Please enter a username.")]
    EmptyUsername,

    #[error("Incorrect password. Please try again.")]
    InvalidPassword,
}

/// Checks usernames and passwords against the accepted set.
#[derive(Debug, Clone)]
pub struct AuthGate {
    accepted_passwords: HashSet<String>,
    default_section: String,
}

impl AuthGate {
    /// Create a gate that accepts any of `accepted_passwords` and starts
    /// new sessions on `default_section`.
    pub fn new<I, S>(accepted_passwords: I, default_section: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            accepted_passwords: accepted_passwords.into_iter().map(Into::into).collect(),
            default_section: default_section.into(),
        }
    }

    pub fn default_section(&self) -> &str {
        &self.default_section
    }

    /// Validate a login attempt.
    ///
    /// The username is trimmed; the password is compared verbatim. An empty
    /// username is reported before the password is looked at.
    pub fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AuthError::EmptyUsername);
        }
        if !self.accepted_passwords.contains(password) {
            return Err(AuthError::InvalidPassword);
        }
        Ok(Session::authenticated(username, self.default_section.as_str()))
    }
}
