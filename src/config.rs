// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application configuration.
//!
//! The campus catalog, the accepted passwords and the section shown after
//! login are bundled into one [`AppConfig`]. The built-in configuration is
//! compiled into the binary from `assets/campus.yaml`; tests build their own
//! fixtures through [`AppConfig::from_yaml`].

use crate::models::catalog::{Catalog, CatalogError};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Built-in campus configuration document.
const BUILTIN_CONFIG: &str = include_str!("../assets/campus.yaml");

/// Everything the application needs that is fixed at start-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Section made active on login
    pub default_section: String,
    /// Shared passwords that open the map
    pub accepted_passwords: Vec<String>,
    #[serde(rename = "sections")]
    pub catalog: Catalog,
}

impl AppConfig {
    /// Load the configuration shipped with the application.
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_CONFIG).context("Invalid built-in campus configuration")
    }

    /// Parse and validate a configuration document.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config = crate::io::serialization::parse_config_yaml(yaml)?;
        config.validate()?;
        log::debug!(
            "Loaded {} sections, {} classrooms",
            config.catalog.sections().len(),
            config.catalog.classroom_count()
        );
        Ok(config)
    }

    /// Check the settings that refer to the catalog. The catalog itself is
    /// validated when it is deserialized.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if !self.catalog.contains_section(&self.default_section) {
            return Err(CatalogError::UnknownDefaultSection(self.default_section.clone()));
        }
        if self.accepted_passwords.is_empty() {
            return Err(CatalogError::NoAcceptedPasswords);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_config_loads() {
        let config = AppConfig::builtin().unwrap();
        assert_eq!(config.default_section, "maths");
        assert_eq!(config.accepted_passwords.len(), 3);

        let ids: Vec<&str> = config
            .catalog
            .sections()
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["maths", "xboxes"]);
        assert_eq!(config.catalog.classroom_count(), 10);

        let room = config.catalog.classroom("maths", "m1").unwrap();
        assert_eq!(room.name, "Room E138");
        assert_eq!((room.x, room.y), (65.0, 15.0));
    }

    #[test]
    fn test_unknown_default_section_rejected() {
        let yaml = r#"
default_section: library
accepted_passwords: [secret]
sections:
  - id: maths
    title: Maths
    classrooms: []
"#;
        let err = AppConfig::from_yaml(yaml).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CatalogError>(),
            Some(&CatalogError::UnknownDefaultSection("library".to_string()))
        );
    }

    #[test]
    fn test_empty_password_set_rejected() {
        let yaml = r#"
default_section: maths
accepted_passwords: []
sections:
  - id: maths
    title: Maths
    classrooms: []
"#;
        let err = AppConfig::from_yaml(yaml).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CatalogError>(),
            Some(&CatalogError::NoAcceptedPasswords)
        );
    }

    #[test]
    fn test_invalid_catalog_rejected() {
        let yaml = r#"
default_section: maths
accepted_passwords: [secret]
sections:
  - id: maths
    title: Maths
    classrooms:
      - { id: m1, name: Room E138, x: 65, y: 115, description: Maths classroom. }
"#;
        let err = AppConfig::from_yaml(yaml).unwrap_err();
        assert!(format!("{:#}", err).contains("Classroom m1 is outside the map bounds"));
    }

    #[test]
    fn test_malformed_document_rejected() {
        assert!(AppConfig::from_yaml("default_section: [").is_err());
    }
}
